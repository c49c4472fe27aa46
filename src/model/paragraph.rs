//! Paragraph and run-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in document order
    pub runs: Vec<Run>,

    /// Named paragraph style, when the source declares one
    pub style: Option<String>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with a single plain-text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Add a run to the paragraph.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Add plain text to the paragraph as a new run.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(Run::new(text));
    }

    /// Get plain text content of the paragraph.
    ///
    /// Runs are concatenated exactly as stored; whitespace and
    /// punctuation are preserved.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no text at all.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

/// A run of text within a paragraph.
///
/// Character formatting from the source is not retained; a run is the
/// unit of text as it appears in the document body. Tabs and explicit
/// breaks are carried as `\t` and `\n` inside the text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,
}

impl Run {
    /// Create a new run.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
