use crate::candidates::candidate_lines;
use crate::extractor::TextExtractor;
use crate::preprocess;

/// Runs preprocessing → OCR → line cleanup over pasted image bytes.
///
/// Extraction is best-effort by contract: any failure along the way is
/// logged and collapses to "no candidates", never an error. Callers treat
/// an empty candidate list as a valid (if unhelpful) outcome.
pub struct ExtractionPipeline<X: TextExtractor> {
    extractor: X,
}

impl<X: TextExtractor> ExtractionPipeline<X> {
    pub fn new(extractor: X) -> Self {
        Self { extractor }
    }

    /// Candidate lines from raw image bytes.
    pub fn candidates_from_image(&self, data: &[u8]) -> Vec<String> {
        let prepared = match preprocess::prepare_image(data) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("image preprocessing failed: {e}");
                return Vec::new();
            }
        };

        match self.extractor.extract_text(&prepared) {
            Ok(text) => candidate_lines(&text),
            Err(e) => {
                tracing::warn!("text extraction failed: {e}");
                Vec::new()
            }
        }
    }
}
