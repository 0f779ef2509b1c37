//! Error type for input reading and report writing.
//!
//! The analysis itself cannot fail; only I/O at the edges can.

use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    /// Input file missing or unreadable.
    Input { path: PathBuf, source: io::Error },
    /// Spreadsheet could not be built or saved.
    #[cfg(feature = "xlsx")]
    Report(rust_xlsxwriter::XlsxError),
    /// JSON report could not be serialized.
    #[cfg(feature = "json")]
    Json(serde_json::Error),
    /// Other I/O failure while writing output.
    Io(io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Input { path, source } if source.kind() == io::ErrorKind::NotFound => {
                write!(f, "input file not found: {}", path.display())
            }
            Error::Input { path, source } => {
                write!(f, "cannot read input file {}: {}", path.display(), source)
            }
            #[cfg(feature = "xlsx")]
            Error::Report(e) => write!(f, "spreadsheet error: {}", e),
            #[cfg(feature = "json")]
            Error::Json(e) => write!(f, "JSON error: {}", e),
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Input { source, .. } => Some(source),
            #[cfg(feature = "xlsx")]
            Error::Report(e) => Some(e),
            #[cfg(feature = "json")]
            Error::Json(e) => Some(e),
            Error::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

#[cfg(feature = "xlsx")]
impl From<rust_xlsxwriter::XlsxError> for Error {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        Error::Report(e)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_names_path() {
        let err = Error::Input {
            path: PathBuf::from("file_sizes.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "input file not found: file_sizes.txt");
    }

    #[test]
    fn test_other_input_error_message() {
        let err = Error::Input {
            path: PathBuf::from("data.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "cannot read input file data.txt: denied");
    }

    #[test]
    fn test_source_is_exposed() {
        use std::error::Error as _;
        let err = Error::from(io::Error::other("disk full"));
        assert!(err.source().is_some());
    }
}
