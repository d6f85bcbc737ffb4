pub mod index;
pub mod match_engine;
pub mod source;

pub use index::CatalogIndex;
pub use match_engine::{CatalogMatch, MatchEngine};
pub use source::{CatalogRecord, CatalogSource, SourceError};
