//! DOCX format detection and validation.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// DOCX format information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocxFormat {
    /// Archive path of the main document part.
    pub main_part: String,
}

impl std::fmt::Display for DocxFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DOCX ({})", self.main_part)
    }
}

/// ZIP local file header magic: PK\x03\x04
const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

/// Archive path of the main document part in a DOCX package.
pub(crate) const MAIN_DOCUMENT_PART: &str = "word/document.xml";

/// Detect DOCX format from a file path.
///
/// # Arguments
/// * `path` - Path to the DOCX file
///
/// # Returns
/// * `Ok(DocxFormat)` if the file is a valid DOCX package
/// * `Err(Error::NotFound)` if the file does not exist
/// * `Err(Error::UnknownFormat)` if the file is not a DOCX package
///
/// # Example
/// ```no_run
/// use undocx::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("document.docx").unwrap();
/// println!("Main part: {}", format.main_part);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<DocxFormat> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::from_open(e, path))?;
    detect_format_from_reader(file)
}

/// Detect DOCX format from bytes.
///
/// # Arguments
/// * `data` - Complete file content
///
/// # Returns
/// * `Ok(DocxFormat)` if the data is a valid DOCX package
/// * `Err(Error::UnknownFormat)` if the data is not a DOCX package
pub fn detect_format_from_bytes(data: &[u8]) -> Result<DocxFormat> {
    detect_format_from_reader(Cursor::new(data))
}

/// Detect DOCX format from a seekable reader.
fn detect_format_from_reader<R: Read + Seek>(mut reader: R) -> Result<DocxFormat> {
    let mut magic = [0u8; 4];
    if reader.read_exact(&mut magic).is_err() || &magic[..] != ZIP_MAGIC {
        return Err(Error::UnknownFormat);
    }
    reader.rewind()?;

    // A ZIP container alone is not enough; the main document part must
    // be present for the package to be WordprocessingML.
    let mut archive = ZipArchive::new(reader).map_err(|_| Error::UnknownFormat)?;
    if archive.by_name(MAIN_DOCUMENT_PART).is_err() {
        return Err(Error::UnknownFormat);
    }

    Ok(DocxFormat {
        main_part: MAIN_DOCUMENT_PART.to_string(),
    })
}

/// Check if a file is a valid DOCX package.
///
/// # Arguments
/// * `path` - Path to the file
///
/// # Returns
/// * `true` if the file is a valid DOCX package
/// * `false` otherwise
pub fn is_docx<P: AsRef<Path>>(path: P) -> bool {
    detect_format_from_path(path).is_ok()
}

/// Check if bytes represent a valid DOCX package.
///
/// # Arguments
/// * `data` - Byte slice to check
///
/// # Returns
/// * `true` if the data is a valid DOCX package
/// * `false` otherwise
pub fn is_docx_bytes(data: &[u8]) -> bool {
    detect_format_from_bytes(data).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn minimal_docx() -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file(MAIN_DOCUMENT_PART, SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"<w:document><w:body/></w:document>").unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_detect_valid_docx() {
        let data = minimal_docx();
        let format = detect_format_from_bytes(&data).unwrap();
        assert_eq!(format.main_part, MAIN_DOCUMENT_PART);
    }

    #[test]
    fn test_detect_invalid_format() {
        let data = b"<!DOCTYPE html>";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_too_short() {
        let data = b"PK";
        let result = detect_format_from_bytes(data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_zip_without_main_part() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("mimetype", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(b"application/epub+zip").unwrap();
        let data = zip.finish().unwrap().into_inner();

        let result = detect_format_from_bytes(&data);
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_detect_missing_file() {
        let result = detect_format_from_path("no-such-file.docx");
        assert!(matches!(result, Err(Error::NotFound(_))));
    }

    #[test]
    fn test_is_docx_bytes() {
        assert!(is_docx_bytes(&minimal_docx()));
        assert!(!is_docx_bytes(b"Not a DOCX file"));
        assert!(!is_docx_bytes(b""));
    }

    #[test]
    fn test_format_display() {
        let format = DocxFormat {
            main_part: MAIN_DOCUMENT_PART.to_string(),
        };
        assert_eq!(format.to_string(), "DOCX (word/document.xml)");
    }
}
