use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("template unavailable: {0}")]
    Unavailable(String),
    #[error("failed to write document: {0}")]
    Write(String),
}

/// An open, editable document produced from a template.
pub trait BriefDocument {
    /// Body text blocks, in document order.
    fn paragraphs(&self) -> Vec<String>;
    /// Replace the text of the `index`-th paragraph. Out-of-range indices
    /// are ignored.
    fn set_paragraph(&mut self, index: usize, text: String);
    fn append_heading(&mut self, text: &str, level: u8);
    fn append_list_item(&mut self, text: &str);
    fn save(&self, path: &Path) -> Result<(), TemplateError>;
}

/// Abstraction over the document engine, consumed the same way the OCR
/// engine is: open a template, get an editable handle.
pub trait TemplateEngine {
    type Document: BriefDocument;
    fn open(&self, path: &Path) -> Result<Self::Document, TemplateError>;
}

// ── Plain-text backend ────────────────────────────────────────────────────────

/// Treats a template as UTF-8 text, one paragraph per line. Always
/// available; this is also the engine the test suites run against.
pub struct PlainTextEngine;

#[derive(Debug)]
pub struct PlainTextDocument {
    lines: Vec<String>,
}

impl TemplateEngine for PlainTextEngine {
    type Document = PlainTextDocument;

    fn open(&self, path: &Path) -> Result<PlainTextDocument, TemplateError> {
        let body = std::fs::read_to_string(path)
            .map_err(|e| TemplateError::Unavailable(format!("{}: {e}", path.display())))?;
        Ok(PlainTextDocument {
            lines: body.lines().map(str::to_owned).collect(),
        })
    }
}

impl BriefDocument for PlainTextDocument {
    fn paragraphs(&self) -> Vec<String> {
        self.lines.clone()
    }

    fn set_paragraph(&mut self, index: usize, text: String) {
        if let Some(line) = self.lines.get_mut(index) {
            *line = text;
        }
    }

    fn append_heading(&mut self, text: &str, _level: u8) {
        self.lines.push(String::new());
        self.lines.push(text.to_string());
    }

    fn append_list_item(&mut self, text: &str) {
        self.lines.push(format!("- {text}"));
    }

    fn save(&self, path: &Path) -> Result<(), TemplateError> {
        std::fs::write(path, self.lines.join("\n"))
            .map_err(|e| TemplateError::Write(format!("{}: {e}", path.display())))
    }
}
