//! DOCX document parser over the OPC container.

use std::io::Read;
use std::path::Path;

use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::detect::{detect_format_from_path, MAIN_DOCUMENT_PART};
use crate::error::{Error, Result};
use crate::model::{Document, Metadata, Paragraph, Run};

use super::container::{OpcContainer, ZipContainer};
use super::options::{ErrorMode, ParseOptions};

/// Archive path of the core properties part.
const CORE_PROPERTIES_PART: &str = "docProps/core.xml";

/// DOCX document parser.
pub struct DocxParser {
    container: Box<dyn OpcContainer>,
    options: ParseOptions,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a DOCX file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        // Verify it's a DOCX package
        detect_format_from_path(path)?;

        let container = ZipContainer::open(path)?;
        Ok(Self {
            container: Box::new(container),
            options,
        })
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Parse a DOCX from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        let container = ZipContainer::from_bytes(data)?;
        Ok(Self {
            container: Box::new(container),
            options,
        })
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse a DOCX from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Parse the document and return a structured Document.
    pub fn parse(&mut self) -> Result<Document> {
        let mut document = Document::new();

        if self.options.read_properties {
            document.metadata = self.extract_metadata()?;
        }

        let body = self.container.read_part(MAIN_DOCUMENT_PART)?;
        let xml = decode_part(&body)?;
        document.paragraphs = self.parse_body(&xml)?;
        document.metadata.paragraph_count = document.paragraphs.len();

        Ok(document)
    }

    /// Extract document metadata from the core properties part.
    ///
    /// The part is optional in OPC; when absent the metadata is empty.
    fn extract_metadata(&mut self) -> Result<Metadata> {
        if !self.container.has_part(CORE_PROPERTIES_PART) {
            log::debug!("package has no {}", CORE_PROPERTIES_PART);
            return Ok(Metadata::default());
        }

        let data = self.container.read_part(CORE_PROPERTIES_PART)?;
        let xml = decode_part(&data)?;

        match parse_core_properties(&xml) {
            Ok(metadata) => Ok(metadata),
            Err(e) => {
                if self.options.error_mode == ErrorMode::Strict {
                    return Err(e);
                }
                log::warn!("failed to read core properties: {}", e);
                Ok(Metadata::default())
            }
        }
    }

    /// Walk the main document part and collect body paragraphs.
    ///
    /// Single forward pass in document order. Text is taken from `w:t`
    /// elements only; `w:tab` becomes `\t` and `w:br`/`w:cr` become `\n`
    /// inside the current run. Paragraphs nested in tables are skipped.
    fn parse_body(&self, xml: &str) -> Result<Vec<Paragraph>> {
        let mut reader = Reader::from_str(xml);
        // DOCX marks significant whitespace with xml:space="preserve";
        // trimming here would drop it.
        reader.trim_text(false);

        let mut buf = Vec::new();
        let mut paragraphs = Vec::new();
        let mut current: Option<Paragraph> = None;
        let mut run_text = String::new();
        let mut in_run = false;
        let mut in_text = false;
        let mut table_depth = 0usize;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"w:tbl" => table_depth += 1,
                    b"w:p" if table_depth == 0 => current = Some(Paragraph::new()),
                    b"w:r" if current.is_some() => {
                        in_run = true;
                        run_text.clear();
                    }
                    b"w:t" if in_run => in_text = true,
                    b"w:tab" if in_run => run_text.push('\t'),
                    b"w:br" | b"w:cr" if in_run => run_text.push('\n'),
                    b"w:pStyle" => {
                        if let Some(p) = current.as_mut() {
                            p.style = get_attr(&e, b"w:val");
                        }
                    }
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    // A paragraph with no content serializes self-closed
                    b"w:p" if table_depth == 0 => paragraphs.push(Paragraph::new()),
                    b"w:tab" if in_run => run_text.push('\t'),
                    b"w:br" | b"w:cr" if in_run => run_text.push('\n'),
                    b"w:pStyle" => {
                        if let Some(p) = current.as_mut() {
                            p.style = get_attr(&e, b"w:val");
                        }
                    }
                    _ => {}
                },
                Ok(Event::Text(e)) => {
                    if in_text {
                        match e.unescape() {
                            Ok(text) => run_text.push_str(&text),
                            Err(err) => {
                                if self.options.error_mode == ErrorMode::Strict {
                                    return Err(Error::from(err));
                                }
                                log::warn!("skipping unescapable text: {}", err);
                            }
                        }
                    }
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                    b"w:p" if table_depth == 0 => {
                        if let Some(p) = current.take() {
                            paragraphs.push(p);
                        }
                    }
                    b"w:r" if in_run => {
                        if let Some(p) = current.as_mut() {
                            p.add_run(Run::new(std::mem::take(&mut run_text)));
                        }
                        in_run = false;
                    }
                    b"w:t" => in_text = false,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(err) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(Error::XmlParse(err.to_string()));
                    }
                    log::warn!("stopping body walk early: {}", err);
                    break;
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(paragraphs)
    }
}

/// Decode part bytes as UTF-8.
fn decode_part(data: &[u8]) -> Result<String> {
    String::from_utf8(data.to_vec()).map_err(|e| Error::Encoding(e.to_string()))
}

/// Extract an attribute value by key from an element.
fn get_attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .find(|a| a.as_ref().ok().map(|x| x.key.as_ref()) == Some(key))
        .and_then(std::result::Result::ok)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

/// Core properties elements relevant to [`Metadata`].
#[derive(Debug, Clone, Copy)]
enum CoreField {
    Title,
    Creator,
    Subject,
    Keywords,
    LastModifiedBy,
    Revision,
    Created,
    Modified,
}

fn core_field(name: &[u8]) -> Option<CoreField> {
    match name {
        b"dc:title" => Some(CoreField::Title),
        b"dc:creator" => Some(CoreField::Creator),
        b"dc:subject" => Some(CoreField::Subject),
        b"cp:keywords" => Some(CoreField::Keywords),
        b"cp:lastModifiedBy" => Some(CoreField::LastModifiedBy),
        b"cp:revision" => Some(CoreField::Revision),
        b"dcterms:created" => Some(CoreField::Created),
        b"dcterms:modified" => Some(CoreField::Modified),
        _ => None,
    }
}

/// Parse the core properties part into [`Metadata`].
///
/// Example XML:
/// ```xml
/// <dc:creator>John Doe</dc:creator>
/// <dcterms:created xsi:type="dcterms:W3CDTF">2024-01-15T10:30:00Z</dcterms:created>
/// ```
fn parse_core_properties(xml: &str) -> Result<Metadata> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut metadata = Metadata::default();
    let mut current: Option<CoreField> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => current = core_field(e.name().as_ref()),
            Ok(Event::Text(e)) => {
                if let Some(field) = current {
                    let text = e.unescape()?;
                    let text = text.trim();
                    if !text.is_empty() {
                        assign_core_field(&mut metadata, field, text);
                    }
                }
            }
            Ok(Event::End(_)) => current = None,
            Ok(Event::Eof) => break,
            Err(err) => return Err(Error::XmlParse(err.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(metadata)
}

fn assign_core_field(metadata: &mut Metadata, field: CoreField, text: &str) {
    match field {
        CoreField::Title => metadata.title = Some(text.to_string()),
        CoreField::Creator => metadata.author = Some(text.to_string()),
        CoreField::Subject => metadata.subject = Some(text.to_string()),
        CoreField::Keywords => metadata.keywords = Some(text.to_string()),
        CoreField::LastModifiedBy => metadata.last_modified_by = Some(text.to_string()),
        CoreField::Revision => metadata.revision = Some(text.to_string()),
        CoreField::Created => metadata.created = parse_datetime(text),
        CoreField::Modified => metadata.modified = parse_datetime(text),
    }
}

/// Parse a W3CDTF (ISO 8601) datetime string.
fn parse_datetime(s: &str) -> Option<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&chrono::Utc))
}
