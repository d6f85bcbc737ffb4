use thiserror::Error;

#[derive(Debug, Error)]
pub enum OcrError {
    #[error("image decode error: {0}")]
    ImageDecode(String),
    #[error("OCR engine error: {0}")]
    Engine(String),
}

/// Abstraction over the OCR engine.
/// Implementations take preprocessed PNG bytes and return the recognized
/// text, lines separated by `\n`.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, image_bytes: &[u8]) -> Result<String, OcrError>;
}

// ── Test doubles (always available) ───────────────────────────────────────────

/// Returns a fixed string regardless of input — lets the pipeline be
/// exercised without Tesseract installed.
pub struct FixedExtractor {
    text: String,
}

impl FixedExtractor {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextExtractor for FixedExtractor {
    fn extract_text(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        Ok(self.text.clone())
    }
}

/// Always fails — stands in for an engine crash or unusable output.
pub struct FailingExtractor;

impl TextExtractor for FailingExtractor {
    fn extract_text(&self, _image_bytes: &[u8]) -> Result<String, OcrError> {
        Err(OcrError::Engine("simulated engine failure".to_string()))
    }
}

// ── Tesseract backend (optional, gated behind `tesseract` feature) ─────────────

#[cfg(feature = "tesseract")]
pub mod tesseract {
    use super::{OcrError, TextExtractor};
    use leptess::LepTess;

    /// Tesseract-backed extractor. The planning grids this tool reads are
    /// French, so [`TesseractExtractor::french`] is the usual constructor.
    pub struct TesseractExtractor {
        data_path: Option<String>,
        lang: String,
    }

    impl TesseractExtractor {
        pub fn new(data_path: Option<String>, lang: &str) -> Self {
            Self {
                data_path,
                lang: lang.to_string(),
            }
        }

        pub fn french(data_path: Option<String>) -> Self {
            Self::new(data_path, "fra")
        }
    }

    impl TextExtractor for TesseractExtractor {
        fn extract_text(&self, image_bytes: &[u8]) -> Result<String, OcrError> {
            let mut lt = LepTess::new(self.data_path.as_deref(), &self.lang)
                .map_err(|e| OcrError::Engine(e.to_string()))?;
            lt.set_image_from_mem(image_bytes)
                .map_err(|e| OcrError::ImageDecode(e.to_string()))?;
            lt.get_utf8_text()
                .map_err(|e| OcrError::Engine(e.to_string()))
        }
    }
}
