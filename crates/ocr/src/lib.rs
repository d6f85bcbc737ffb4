pub mod candidates;
pub mod extractor;
pub mod intake;
pub mod pipeline;
pub mod preprocess;

pub use candidates::candidate_lines;
pub use extractor::{FailingExtractor, FixedExtractor, OcrError, TextExtractor};
pub use pipeline::ExtractionPipeline;
pub use preprocess::{prepare_image, PreprocessError};
