use std::path::{Path, PathBuf};

use crate::backend::{BriefDocument, TemplateEngine, TemplateError};

/// The placeholder replaced with the period label, verbatim as it appears
/// in the template bodies.
pub const PERIOD_MARKER: &str = "{{periode}}";

/// Heading added above the item listing.
pub const ITEMS_HEADING: &str = "Parfums détectés";

/// Fills a template and persists the result under a name derived from the
/// period. Generating twice for one period overwrites the same file —
/// last write wins, by design.
pub struct DocumentAssembler<E: TemplateEngine> {
    engine: E,
    output_dir: PathBuf,
}

impl<E: TemplateEngine> DocumentAssembler<E> {
    pub fn new(engine: E, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            engine,
            output_dir: output_dir.into(),
        }
    }

    /// Open the template, substitute the period marker, optionally append
    /// the item listing, and save. Nothing is written unless the template
    /// opened and filled in memory first.
    pub fn assemble(
        &self,
        template: &Path,
        period: &str,
        items: &[String],
    ) -> Result<PathBuf, TemplateError> {
        let mut doc = self.engine.open(template)?;

        // Literal, case-sensitive substitution. A template without the
        // marker fills successfully; the period is simply absent.
        for (index, text) in doc.paragraphs().iter().enumerate() {
            if text.contains(PERIOD_MARKER) {
                doc.set_paragraph(index, text.replace(PERIOD_MARKER, period));
            }
        }

        if !items.is_empty() {
            doc.append_heading(ITEMS_HEADING, 2);
            for item in items {
                doc.append_list_item(item);
            }
        }

        let ext = template
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("docx");
        let out = self.output_dir.join(output_file_name(period, ext));
        doc.save(&out)?;
        Ok(out)
    }
}

/// `brief_<period>.<ext>` with every whitespace run removed from the
/// period, so one period always maps to one output file.
pub fn output_file_name(period: &str, ext: &str) -> String {
    let compact: String = period.split_whitespace().collect();
    format!("brief_{compact}.{ext}")
}
