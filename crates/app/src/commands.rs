use std::path::Path;

use anyhow::{Context, Result};

use briefgen::{BriefConfig, BriefRequest, BriefService};
use briefgen_docgen::DocxEngine;

pub fn load_config(path: Option<&Path>) -> Result<BriefConfig> {
    match path {
        Some(p) => {
            BriefConfig::load(p).with_context(|| format!("loading config {}", p.display()))
        }
        None => Ok(BriefConfig::default()),
    }
}

#[cfg(feature = "tesseract")]
fn extractor() -> briefgen_ocr::extractor::tesseract::TesseractExtractor {
    briefgen_ocr::extractor::tesseract::TesseractExtractor::french(None)
}

#[cfg(not(feature = "tesseract"))]
fn extractor() -> briefgen_ocr::FixedExtractor {
    // Without the tesseract feature there is no engine to call; the empty
    // extractor keeps the commands runnable end to end.
    tracing::warn!("built without the `tesseract` feature — detection will find nothing");
    briefgen_ocr::FixedExtractor::new("")
}

pub fn detect(config: BriefConfig, image: &Path) -> Result<()> {
    let bytes =
        std::fs::read(image).with_context(|| format!("reading {}", image.display()))?;
    let service = BriefService::new(config, extractor(), DocxEngine)?;

    let names = service.detect_candidates(&bytes);
    if names.is_empty() {
        println!("no catalog items detected");
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(())
}

pub fn generate(
    config: BriefConfig,
    period: String,
    doc_type: String,
    items: Vec<String>,
) -> Result<()> {
    let service = BriefService::new(config, extractor(), DocxEngine)?;
    let request = BriefRequest {
        period,
        document_type: doc_type,
        selected_items: items,
    };
    let path = service.generate_brief(&request)?;
    println!("brief written to {}", path.display());
    Ok(())
}
