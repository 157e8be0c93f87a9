/// Importer module - host-facing entry points for data imports
pub mod error;
pub mod options;
pub mod resolver;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::language::writer::build_declarations;
use error::ImportError;
use options::{Encoding, ImporterOptions};
use resolver::Resolution;

pub use resolver::resolve;

/// Where the referencing document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainingDocument {
    /// Loaded from a local file.
    Path(PathBuf),
    /// Any non-filesystem source (http, embedded resources, ...).
    Url(String),
}

/// Per-reference context supplied by the host compiler.
#[derive(Debug, Clone, Default)]
pub struct ImportContext {
    /// The document containing the reference, when it has one.
    pub containing: Option<ContainingDocument>,
    /// True when the reference came from a legacy `@import` statement.
    pub from_import: bool,
}

impl ImportContext {
    /// Context for a reference written in a document at `path`.
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            containing: Some(ContainingDocument::Path(path.into())),
            from_import: false,
        }
    }

    /// Context for a reference written in a non-filesystem document.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            containing: Some(ContainingDocument::Url(url.into())),
            from_import: false,
        }
    }

    /// Context for a document compiled from an in-memory string, which no
    /// importer can resolve relative references against.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Mark the reference as coming from a legacy `@import` statement.
    pub fn from_legacy_import(mut self) -> Self {
        self.from_import = true;
        self
    }
}

/// Stylesheet syntaxes the host compiler understands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Syntax {
    Scss,
    Indented,
    Css,
}

/// A loaded import: generated declaration text plus the syntax it is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImporterResult {
    pub syntax: Syntax,
    pub contents: String,
}

/// The two hooks the host compiler calls, in order: `canonicalize` to claim
/// and identify a reference, then `load` to produce its stylesheet contents.
pub trait Importer {
    /// Claim `reference` and return the canonical path of the file it names,
    /// or `Ok(None)` when this importer does not recognize it.
    fn canonicalize(
        &self,
        reference: &str,
        context: &ImportContext,
    ) -> Result<Option<PathBuf>, ImportError>;

    /// Read, parse, and translate a previously canonicalized file.
    fn load(&self, canonical: &Path) -> Result<ImporterResult, ImportError>;
}

/// Imports structured-data files as SCSS variable declarations.
///
/// Stateless between calls: every resolution and load consults the file
/// system fresh, so the host's own import cache stays authoritative.
#[derive(Default)]
pub struct DataImporter {
    options: ImporterOptions,
}

impl DataImporter {
    pub fn new() -> Self {
        Self {
            options: ImporterOptions::default(),
        }
    }

    pub fn with_options(options: ImporterOptions) -> Self {
        Self { options }
    }

    /// Parse and translate raw data text without touching the file system.
    /// Hosts compiling from strings use this directly.
    pub fn convert_source(&self, text: &str) -> Result<String, ImportError> {
        let value = self.options.parser.parse(text)?;
        build_declarations(&value)
    }

    fn decode(&self, path: &Path, bytes: Vec<u8>) -> Result<String, ImportError> {
        match self.options.encoding {
            Encoding::Utf8 => String::from_utf8(bytes).map_err(|source| ImportError::Decode {
                path: path.to_path_buf(),
                source,
            }),
            Encoding::Utf8Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        }
    }
}

impl Importer for DataImporter {
    fn canonicalize(
        &self,
        reference: &str,
        context: &ImportContext,
    ) -> Result<Option<PathBuf>, ImportError> {
        match resolver::resolve(reference, context, &self.options.extensions)? {
            Resolution::Claimed(path) => Ok(Some(fs::canonicalize(path)?)),
            Resolution::NotClaimed => Ok(None),
        }
    }

    fn load(&self, canonical: &Path) -> Result<ImporterResult, ImportError> {
        let bytes = fs::read(canonical)?;
        let text = self.decode(canonical, bytes)?;
        let value = self.options.parser.parse(&text)?;
        let contents = build_declarations(&value)?;

        Ok(ImporterResult {
            syntax: Syntax::Scss,
            contents,
        })
    }
}
