use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while claiming or loading a data file.
///
/// Declining a reference is not an error and has no variant here: it is
/// signalled with `Ok(None)` so other importers in the host's chain may try.
#[derive(Debug, Error)]
pub enum ImportError {
    /// More than one file matched a single disambiguation step.
    #[error("it's not clear which file to import, found: {}", format_candidates(.0))]
    AmbiguousMatch(Vec<PathBuf>),

    /// The parsed file's top level was something other than a map.
    #[error("top-level value must be a map of variable names, found {0}")]
    InvalidTopLevelShape(&'static str),

    /// A top-level key is not usable as an SCSS variable name.
    #[error("invalid variable name '{0}'")]
    InvalidVariableName(String),

    /// A value outside the supported shapes reached the translator.
    /// Unreachable with a conformant parser.
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// The file's bytes are not valid in the configured encoding.
    #[error("invalid utf-8 in {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A read or stat failed; passed through unchanged.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The configured parser rejected the file; passed through unchanged.
    #[error(transparent)]
    Parse(#[from] anyhow::Error),
}

fn format_candidates(candidates: &[PathBuf]) -> String {
    candidates
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
