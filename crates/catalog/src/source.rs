use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// One named catalog entry. `extra` keeps whatever attributes the source
/// carries beyond the name (description, range, notes, …).
///
/// Identity is the exact name string; nothing enforces uniqueness, and the
/// same name appearing in several files stays as distinct records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Display name — the field candidates are matched against.
    /// The legacy source files spell it `nom`.
    #[serde(alias = "nom")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The on-disk shape of one source file: an object whose `products` array
/// (historically `parfums`) holds the records. A file without the array
/// contributes zero records.
#[derive(Debug, Deserialize)]
struct SourceFile {
    #[serde(default, alias = "parfums")]
    products: Vec<CatalogRecord>,
}

/// A named container of records loaded from one JSON file.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    /// File name of the source, e.g. `floral.json`.
    pub name: String,
    pub records: Vec<CatalogRecord>,
}

impl CatalogSource {
    /// Load one source file. Errors here are recoverable by the index,
    /// which skips the source and keeps scanning.
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|source| SourceError::Read {
            path: display.clone(),
            source,
        })?;
        let parsed: SourceFile =
            serde_json::from_str(&content).map_err(|source| SourceError::Parse {
                path: display,
                source,
            })?;

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();
        Ok(Self {
            name,
            records: parsed.products,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_names(name: &str, records: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            records: records
                .iter()
                .map(|n| CatalogRecord {
                    name: n.to_string(),
                    extra: Map::new(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_source(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("source.json");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        (tmp, path)
    }

    #[test]
    fn loads_legacy_field_names() {
        let (_tmp, path) =
            write_source(r#"{"parfums": [{"nom": "Etoile", "famille": "floral"}]}"#);
        let source = CatalogSource::load(&path).unwrap();
        assert_eq!(source.name, "source.json");
        assert_eq!(source.records.len(), 1);
        assert_eq!(source.records[0].name, "Etoile");
        assert_eq!(source.records[0].extra["famille"], "floral");
    }

    #[test]
    fn loads_current_field_names() {
        let (_tmp, path) = write_source(r#"{"products": [{"name": "Concerto"}]}"#);
        let source = CatalogSource::load(&path).unwrap();
        assert_eq!(source.records[0].name, "Concerto");
        assert!(source.records[0].extra.is_empty());
    }

    #[test]
    fn missing_record_array_yields_zero_records() {
        let (_tmp, path) = write_source(r#"{"something_else": 1}"#);
        assert!(CatalogSource::load(&path).unwrap().records.is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let (_tmp, path) = write_source("{not json");
        assert!(matches!(
            CatalogSource::load(&path),
            Err(SourceError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        assert!(matches!(
            CatalogSource::load(Path::new("/nonexistent.json")),
            Err(SourceError::Read { .. })
        ));
    }

    #[test]
    fn duplicate_names_within_a_source_are_kept() {
        let (_tmp, path) =
            write_source(r#"{"parfums": [{"nom": "Etoile"}, {"nom": "Etoile"}]}"#);
        assert_eq!(CatalogSource::load(&path).unwrap().records.len(), 2);
    }
}
