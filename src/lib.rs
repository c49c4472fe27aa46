//! # undocx
//!
//! DOCX paragraph text extraction library for Rust.
//!
//! This library extracts paragraph text from Office Open XML
//! word-processing documents and converts it to plain text (one
//! paragraph per line) or JSON.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::{parse_file, render, RenderOptions};
//!
//! fn main() -> undocx::Result<()> {
//!     // Parse a DOCX file
//!     let doc = parse_file("document.docx")?;
//!
//!     // Convert to plain text, one line per paragraph
//!     let options = RenderOptions::default();
//!     let text = render::to_text(&doc, &options)?;
//!     println!("{}", text);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Paragraph extraction**: natural reading order, whitespace preserved
//! - **Multiple output formats**: plain text, JSON
//! - **Core properties**: title, author, and timestamps from the package
//! - **Single pass**: strictly sequential, synchronous processing

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, DocxFormat};
pub use error::{Error, Result};
pub use model::{Document, Metadata, Paragraph, Run};
pub use parser::{DocxParser, ErrorMode, ParseOptions};
pub use render::{JsonFormat, LineEnding, RenderOptions};

use std::fs;
use std::io::Read;
use std::path::Path;

/// Parse a DOCX file and return a structured document.
///
/// # Arguments
///
/// * `path` - Path to the DOCX file
///
/// # Returns
///
/// A `Result` containing the parsed `Document` or an error.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_file;
///
/// let doc = parse_file("document.docx").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let mut parser = DocxParser::open(path)?;
    parser.parse()
}

/// Parse a DOCX file with custom options.
///
/// # Example
///
/// ```no_run
/// use undocx::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().lenient().text_only();
/// let doc = parse_file_with_options("document.docx", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let mut parser = DocxParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a DOCX from bytes.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_bytes;
///
/// let data = std::fs::read("document.docx").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let mut parser = DocxParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a DOCX from bytes with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let mut parser = DocxParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a DOCX from a reader.
///
/// # Example
///
/// ```no_run
/// use undocx::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("document.docx").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let mut parser = DocxParser::from_reader(reader)?;
    parser.parse()
}

/// Parse a DOCX from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    let mut parser = DocxParser::from_reader_with_options(reader, options)?;
    parser.parse()
}

/// Extract plain text from a DOCX file.
///
/// Paragraphs are joined with a newline, without a trailing terminator.
///
/// # Example
///
/// ```no_run
/// use undocx::extract_text;
///
/// let text = extract_text("document.docx").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Convert a DOCX file to plain text.
///
/// # Example
///
/// ```no_run
/// use undocx::{to_text, LineEnding, RenderOptions};
///
/// let options = RenderOptions::new().with_line_ending(LineEnding::CrLf);
/// let text = to_text("document.docx", &options).unwrap();
/// ```
pub fn to_text<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_text(&doc, options)
}

/// Convert a DOCX file to a plain text file, one line per paragraph.
///
/// Creates or truncates the file at `output`. Every paragraph of the
/// input contributes exactly one terminated line, in reading order;
/// the output encoding is UTF-8 regardless of the source document's
/// internal encodings. Fails with [`Error::NotFound`] when `input`
/// does not exist, a parse error when it is not a valid DOCX package,
/// and [`Error::Io`] when `output` cannot be written. No partial-output
/// guarantee is made on failure.
///
/// # Example
///
/// ```no_run
/// use undocx::convert_to_file;
///
/// convert_to_file("document.docx", "document.txt").unwrap();
/// ```
pub fn convert_to_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    convert_to_file_with_options(input, output, &RenderOptions::default())
}

/// Convert a DOCX file to a plain text file with custom render options.
pub fn convert_to_file_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &RenderOptions,
) -> Result<()> {
    let doc = parse_file(input)?;
    let text = render::to_text(&doc, options)?;
    fs::write(output, text.as_bytes())?;
    Ok(())
}

/// Builder for parsing and converting DOCX documents.
///
/// # Example
///
/// ```no_run
/// use undocx::Undocx;
///
/// let text = Undocx::new()
///     .lenient()
///     .parse("document.docx")?
///     .to_text()?;
/// # Ok::<(), undocx::Error>(())
/// ```
pub struct Undocx {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Undocx {
    /// Create a new Undocx builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Enable lenient parsing mode.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Extract body text only, skipping document properties.
    pub fn text_only(mut self) -> Self {
        self.parse_options = self.parse_options.text_only();
        self
    }

    /// Set the line terminator for text output.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.render_options = self.render_options.with_line_ending(line_ending);
        self
    }

    /// Parse a DOCX file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UndocxResult> {
        let mut parser = DocxParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UndocxResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a DOCX from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UndocxResult> {
        let mut parser = DocxParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UndocxResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Undocx {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a DOCX document.
pub struct UndocxResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UndocxResult {
    /// Convert to plain text, one terminated line per paragraph.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Write plain text output to a file.
    pub fn write_text<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let text = self.to_text()?;
        fs::write(path, text.as_bytes())?;
        Ok(())
    }

    /// Get plain text without per-paragraph terminators.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut body = String::new();
        for text in paragraphs {
            if text.is_empty() {
                body.push_str("<w:p/>");
            } else {
                body.push_str(&format!(
                    r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#,
                    text
                ));
            }
        }
        let document_xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        );

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        zip.start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_undocx_builder() {
        let undocx = Undocx::new().lenient().with_line_ending(LineEnding::CrLf);

        assert!(matches!(
            undocx.parse_options.error_mode,
            ErrorMode::Lenient
        ));
        assert_eq!(undocx.render_options.line_ending, LineEnding::CrLf);
    }

    #[test]
    fn test_undocx_builder_default() {
        let builder = Undocx::default();
        assert!(matches!(
            builder.parse_options.error_mode,
            ErrorMode::Strict
        ));
        assert!(builder.parse_options.read_properties);
    }

    #[test]
    fn test_undocx_builder_text_only() {
        let builder = Undocx::new().text_only();
        assert!(!builder.parse_options.read_properties);
    }

    // ==================== Edge Case Tests ====================

    #[test]
    fn test_parse_bytes_empty_data() {
        let data: [u8; 0] = [];
        let result = parse_bytes(&data);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_bytes_garbage() {
        let result = parse_bytes(b"not a docx package at all");
        assert!(result.is_err());
    }

    #[test]
    fn test_undocx_builder_parse_invalid_bytes() {
        let result = Undocx::new().parse_bytes(b"not a docx");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_bytes_builder_round_trip() {
        let data = build_docx(&["Hello", "world"]);
        let result = Undocx::new().parse_bytes(&data).unwrap();

        assert_eq!(result.document().paragraph_count(), 2);
        assert_eq!(result.plain_text(), "Hello\nworld");
        assert_eq!(result.to_text().unwrap(), "Hello\nworld\n");
    }

    #[test]
    fn test_parse_reader() {
        let data = build_docx(&["via reader"]);
        let doc = parse_reader(Cursor::new(data)).unwrap();
        assert_eq!(doc.paragraph_count(), 1);
    }

    // ==================== Conversion Contract Tests ====================

    #[test]
    fn test_convert_scenario() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.docx");
        let output = dir.path().join("out.txt");
        fs::write(&input, build_docx(&["Title", "", "Body text here."])).unwrap();

        convert_to_file(&input, &output).unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        assert_eq!(contents, "Title\n\nBody text here.\n");
    }

    #[test]
    fn test_convert_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.docx");
        let output = dir.path().join("out.txt");
        fs::write(&input, build_docx(&["same", "every", "time"])).unwrap();

        convert_to_file(&input, &output).unwrap();
        let first = fs::read(&output).unwrap();

        convert_to_file(&input, &output).unwrap();
        let second = fs::read(&output).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_convert_zero_paragraphs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.docx");
        let output = dir.path().join("out.txt");
        fs::write(&input, build_docx(&[])).unwrap();

        convert_to_file(&input, &output).unwrap();

        assert_eq!(fs::read(&output).unwrap(), b"");
    }

    #[test]
    fn test_convert_missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("does-not-exist.docx");
        let output = dir.path().join("out.txt");

        let result = convert_to_file(&input, &output);

        assert!(matches!(result, Err(Error::NotFound(_))));
        assert!(!output.exists());
    }

    #[test]
    fn test_convert_unwritable_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.docx");
        fs::write(&input, build_docx(&["text"])).unwrap();

        // A directory cannot be opened as the output file
        let result = convert_to_file(&input, dir.path());

        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_convert_line_count_invariant() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.docx");
        let output = dir.path().join("out.txt");
        let paragraphs = ["one", "", "three", "", "", "six"];
        fs::write(&input, build_docx(&paragraphs)).unwrap();

        convert_to_file(&input, &output).unwrap();

        let contents = fs::read_to_string(&output).unwrap();
        assert_eq!(contents.matches('\n').count(), paragraphs.len());
        for (i, line) in contents.lines().enumerate() {
            assert_eq!(line, paragraphs[i]);
        }
    }

    #[test]
    fn test_extract_text() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.docx");
        fs::write(&input, build_docx(&["alpha", "beta"])).unwrap();

        assert_eq!(extract_text(&input).unwrap(), "alpha\nbeta");
    }

    #[test]
    fn test_to_text_crlf_option() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.docx");
        fs::write(&input, build_docx(&["a", "b"])).unwrap();

        let options = RenderOptions::new().with_line_ending(LineEnding::CrLf);
        assert_eq!(to_text(&input, &options).unwrap(), "a\r\nb\r\n");
    }

    #[test]
    fn test_write_text_result() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.docx");
        let output = dir.path().join("out.txt");
        fs::write(&input, build_docx(&["written"])).unwrap();

        Undocx::new()
            .parse(&input)
            .unwrap()
            .write_text(&output)
            .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "written\n");
    }

    #[test]
    fn test_json_format_variants() {
        let _pretty = JsonFormat::Pretty;
        let _compact = JsonFormat::Compact;
    }
}
