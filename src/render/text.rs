//! Plain text rendering for DOCX documents.

use crate::error::Result;
use crate::model::Document;

use super::RenderOptions;

/// Convert a document to plain text, one terminated line per paragraph.
///
/// Every paragraph contributes exactly one line equal to its text
/// followed by the configured line terminator, including paragraphs
/// with no text. A document with zero paragraphs produces an empty
/// string. The text is never trimmed or otherwise transformed.
pub fn to_text(doc: &Document, options: &RenderOptions) -> Result<String> {
    let eol = options.line_ending.as_str();

    let mut output = String::new();
    for paragraph in &doc.paragraphs {
        output.push_str(&paragraph.plain_text());
        output.push_str(eol);
    }

    Ok(output)
}
