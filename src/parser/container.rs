//! OPC package abstraction layer.
//!
//! Provides a trait-based interface for package part access, isolating
//! the concrete archive library (zip) from the extraction logic.

use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{Error, Result};

/// Abstract interface for OPC package access.
///
/// A DOCX file is a ZIP archive of named parts. Implementations provide
/// part lookup and retrieval without exposing any concrete archive
/// library types.
pub trait OpcContainer {
    /// Read the raw bytes of a named part.
    fn read_part(&mut self, name: &str) -> Result<Vec<u8>>;

    /// Check whether a named part exists in the package.
    fn has_part(&mut self, name: &str) -> bool;
}

/// Concrete [`OpcContainer`] backed by `zip::ZipArchive`.
pub struct ZipContainer<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl ZipContainer<File> {
    /// Open a package from a file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::from_open(e, path))?;
        Self::from_reader(file)
    }
}

impl ZipContainer<Cursor<Vec<u8>>> {
    /// Open a package from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_reader(Cursor::new(data.to_vec()))
    }
}

impl<R: Read + Seek> ZipContainer<R> {
    /// Open a package from a seekable reader.
    pub fn from_reader(reader: R) -> Result<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }
}

impl<R: Read + Seek> OpcContainer for ZipContainer<R> {
    fn read_part(&mut self, name: &str) -> Result<Vec<u8>> {
        let mut part = self.archive.by_name(name).map_err(|e| match e {
            zip::result::ZipError::FileNotFound => Error::MissingPart(name.to_string()),
            other => Error::from(other),
        })?;
        let mut data = Vec::new();
        part.read_to_end(&mut data)?;
        Ok(data)
    }

    fn has_part(&mut self, name: &str) -> bool {
        self.archive.by_name(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn package_with(name: &str, content: &[u8]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file(name, SimpleFileOptions::default()).unwrap();
        zip.write_all(content).unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_read_part() {
        let data = package_with("word/document.xml", b"<w:document/>");
        let mut container = ZipContainer::from_bytes(&data).unwrap();

        assert!(container.has_part("word/document.xml"));
        assert_eq!(
            container.read_part("word/document.xml").unwrap(),
            b"<w:document/>"
        );
    }

    #[test]
    fn test_missing_part() {
        let data = package_with("word/document.xml", b"<w:document/>");
        let mut container = ZipContainer::from_bytes(&data).unwrap();

        assert!(!container.has_part("docProps/core.xml"));
        let result = container.read_part("docProps/core.xml");
        assert!(matches!(result, Err(Error::MissingPart(name)) if name == "docProps/core.xml"));
    }

    #[test]
    fn test_not_a_zip() {
        let result = ZipContainer::from_bytes(b"plain text, not an archive");
        assert!(result.is_err());
    }

    #[test]
    fn test_open_missing_file() {
        let result = ZipContainer::open("no-such-package.docx");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }
}
