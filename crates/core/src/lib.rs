pub mod config;
pub mod doc_type;
pub mod request;

pub use config::{BriefConfig, ConfigError};
pub use doc_type::DocumentType;
pub use request::{BriefRequest, RequestError};
