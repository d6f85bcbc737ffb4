use std::path::Path;

use crate::source::{CatalogRecord, CatalogSource};

/// Union of every parsable catalog source in one directory.
///
/// The index is rebuilt from disk for every match request so results
/// always reflect the current catalog files; at single-digit-thousands of
/// records the rescan is cheap. Sources appear in directory-listing order,
/// not independently sorted.
#[derive(Debug, Default)]
pub struct CatalogIndex {
    sources: Vec<CatalogSource>,
}

impl CatalogIndex {
    /// Scan `dir` for `*.json` sources. Malformed or unreadable sources
    /// are logged and skipped; an unreadable or empty directory yields an
    /// empty index. Loading never fails — the view degrades instead.
    pub fn load(dir: &Path) -> Self {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("cannot read catalog directory {}: {e}", dir.display());
                return Self::default();
            }
        };

        let mut sources = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match CatalogSource::load(&path) {
                Ok(source) => sources.push(source),
                Err(e) => tracing::warn!("skipping catalog source: {e}"),
            }
        }
        Self { sources }
    }

    pub fn from_sources(sources: Vec<CatalogSource>) -> Self {
        Self { sources }
    }

    pub fn sources(&self) -> &[CatalogSource] {
        &self.sources
    }

    /// `(source name, record)` pairs in scan order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CatalogRecord)> {
        self.sources
            .iter()
            .flat_map(|s| s.records.iter().map(move |r| (s.name.as_str(), r)))
    }

    pub fn record_count(&self) -> usize {
        self.sources.iter().map(|s| s.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.record_count() == 0
    }
}
