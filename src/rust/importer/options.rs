use anyhow::Result;

use crate::language::values::Value;

/// Parser capability: raw file text in, structured value tree out.
///
/// The default is strict JSON, but any closure with the right signature
/// qualifies, so lenient or alternate formats slot in without a wrapper type.
pub trait ParseData {
    fn parse(&self, text: &str) -> Result<Value>;
}

impl<F> ParseData for F
where
    F: Fn(&str) -> Result<Value>,
{
    fn parse(&self, text: &str) -> Result<Value> {
        self(text)
    }
}

/// Strict JSON parsing via serde.
pub struct JsonParser;

impl ParseData for JsonParser {
    fn parse(&self, text: &str) -> Result<Value> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Text encoding used to decode file bytes before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Strict UTF-8; invalid bytes fail the load.
    #[default]
    Utf8,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
}

/// Configuration for a [`DataImporter`](crate::importer::DataImporter).
pub struct ImporterOptions {
    /// Recognized file extensions, in resolution order. Leading dots included.
    pub extensions: Vec<String>,
    /// Decoding applied to file bytes before parsing.
    pub encoding: Encoding,
    /// Parser for decoded file text.
    pub parser: Box<dyn ParseData>,
}

impl Default for ImporterOptions {
    fn default() -> Self {
        Self {
            extensions: vec![".json".to_string()],
            encoding: Encoding::Utf8,
            parser: Box::new(JsonParser),
        }
    }
}

impl ImporterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the recognized extensions. A missing leading dot is added.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| {
                let ext = ext.into();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect();
        self
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_parser(mut self, parser: impl ParseData + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }
}
