pub mod assembler;
pub mod backend;
pub mod docx;
pub mod selector;

pub use assembler::{output_file_name, DocumentAssembler, ITEMS_HEADING, PERIOD_MARKER};
pub use backend::{BriefDocument, PlainTextEngine, TemplateEngine, TemplateError};
pub use docx::DocxEngine;
pub use selector::TemplateSelector;
