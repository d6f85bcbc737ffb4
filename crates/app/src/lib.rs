use std::path::PathBuf;

use thiserror::Error;

use briefgen_catalog::{CatalogIndex, MatchEngine};
use briefgen_core::{ConfigError, RequestError};
use briefgen_docgen::{DocumentAssembler, TemplateEngine, TemplateError, TemplateSelector};
use briefgen_ocr::{intake, ExtractionPipeline, TextExtractor};

pub use briefgen_core::{BriefConfig, BriefRequest, DocumentType};

#[derive(Debug, Error)]
pub enum BriefError {
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),
    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Ties extraction, matching, and assembly together behind the two
/// operations the outside world calls.
///
/// Generic over the OCR engine and the document engine so both stay
/// swappable collaborators; production wiring uses Tesseract and the
/// docx backend, tests use the fixed-text and plain-text ones.
pub struct BriefService<X: TextExtractor, E: TemplateEngine> {
    config: BriefConfig,
    pipeline: ExtractionPipeline<X>,
    matcher: MatchEngine,
    selector: TemplateSelector,
    assembler: DocumentAssembler<E>,
}

impl<X: TextExtractor, E: TemplateEngine> BriefService<X, E> {
    /// Build a service and perform the one-time directory bootstrap.
    pub fn new(config: BriefConfig, extractor: X, engine: E) -> Result<Self, ConfigError> {
        config.ensure_dirs()?;
        let selector = TemplateSelector::new(&config.templates_dir);
        let assembler = DocumentAssembler::new(engine, &config.output_dir);
        Ok(Self {
            pipeline: ExtractionPipeline::new(extractor),
            matcher: MatchEngine::default(),
            selector,
            assembler,
            config,
        })
    }

    /// Use deduplicated match results instead of the duplicate-tolerant
    /// default.
    pub fn with_dedupe(mut self, dedupe: bool) -> Self {
        self.matcher = MatchEngine::new(dedupe);
        self
    }

    /// OCR a pasted image and return the names of every catalog record a
    /// detected line matched. Failures degrade to an empty list, never an
    /// error.
    pub fn detect_candidates(&self, image: &[u8]) -> Vec<String> {
        if let Err(e) = intake::store_upload(&self.config.uploads_dir, image, "png") {
            tracing::warn!("failed to store pasted image: {e}");
        }

        let candidates = self.pipeline.candidates_from_image(image);
        // Fresh index per request: matching always sees the catalog as it
        // is on disk right now.
        let index = CatalogIndex::load(&self.config.data_dir);
        self.matcher.matched_names(&candidates, &index)
    }

    /// Fill the template for the requested document type and persist the
    /// brief. Same-period calls overwrite the same output file.
    pub fn generate_brief(&self, request: &BriefRequest) -> Result<PathBuf, BriefError> {
        request.validate()?;

        let template = self.selector.select(&request.document_type);
        let items: &[String] = if self.config.list_selected_items {
            &request.selected_items
        } else {
            // Historical wiring: detection is advisory only and the brief
            // is curated by hand afterwards.
            &[]
        };
        Ok(self.assembler.assemble(&template, &request.period, items)?)
    }
}
