// ---------------------------------------------------------------------------
// CraneConfigError: failures while loading crane dimensions
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while reading a [`CraneDimensions`] file.
///
/// Only the loading path can fail. Once parsed, every numeric value is
/// accepted as-is and the crane builds whatever geometry it describes.
///
/// [`CraneDimensions`]: crate::dimensions::CraneDimensions
#[derive(Debug)]
pub enum CraneConfigError {
    /// I/O error (file not found, permission denied, etc.)
    Io(std::io::Error),
    /// The document was not valid JSON or had a field of the wrong type.
    Parse(String),
}

impl fmt::Display for CraneConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CraneConfigError::Io(e) => write!(f, "I/O error: {e}"),
            CraneConfigError::Parse(msg) => write!(f, "Invalid crane configuration: {msg}"),
        }
    }
}

impl std::error::Error for CraneConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CraneConfigError::Io(e) => Some(e),
            CraneConfigError::Parse(_) => None,
        }
    }
}

impl From<std::io::Error> for CraneConfigError {
    fn from(e: std::io::Error) -> Self {
        CraneConfigError::Io(e)
    }
}

impl From<serde_json::Error> for CraneConfigError {
    fn from(e: serde_json::Error) -> Self {
        CraneConfigError::Parse(e.to_string())
    }
}
