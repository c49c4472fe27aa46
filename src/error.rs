//! Error types for undocx library.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for undocx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during DOCX processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input path does not exist.
    #[error("Input file not found: {0}")]
    NotFound(PathBuf),

    /// The file format is not recognized as DOCX.
    #[error("Unknown file format: not a valid DOCX")]
    UnknownFormat,

    /// The ZIP package is corrupted or unreadable.
    #[error("Corrupted package: {0}")]
    Archive(String),

    /// A required package part is missing.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// Error parsing WordprocessingML content.
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// Part bytes are not valid UTF-8.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error during rendering (text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map a failed open of `path`, distinguishing a missing file from
    /// other I/O failures.
    pub(crate) fn from_open(err: io::Error, path: &Path) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            Error::NotFound(path.to_path_buf())
        } else {
            Error::Io(err)
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            zip::result::ZipError::FileNotFound => {
                Error::MissingPart("file not found in package".to_string())
            }
            other => Error::Archive(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownFormat;
        assert_eq!(err.to_string(), "Unknown file format: not a valid DOCX");

        let err = Error::MissingPart("word/document.xml".to_string());
        assert_eq!(err.to_string(), "Missing package part: word/document.xml");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_open_missing_file() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
        let err = Error::from_open(io_err, Path::new("missing.docx"));
        assert!(matches!(err, Error::NotFound(p) if p == Path::new("missing.docx")));
    }

    #[test]
    fn test_from_open_other_io() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = Error::from_open(io_err, Path::new("locked.docx"));
        assert!(matches!(err, Error::Io(_)));
    }
}
