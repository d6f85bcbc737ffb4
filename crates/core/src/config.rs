use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to create directory {path}: {source}")]
    CreateDir { path: PathBuf, source: io::Error },
}

/// Explicit configuration for the brief pipeline.
///
/// Components receive this at construction time; no path is read from a
/// global. Every field has a default, so a partial TOML file is enough.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BriefConfig {
    /// Directory of JSON catalog sources. Read-only to the pipeline.
    pub data_dir: PathBuf,
    /// Directory holding the per-format template files.
    pub templates_dir: PathBuf,
    /// Generated briefs land here, one file per distinct period.
    pub output_dir: PathBuf,
    /// Content-addressed store for pasted images.
    pub uploads_dir: PathBuf,
    /// When false, detection is advisory only: generated briefs omit the
    /// caller-selected item listing (the historical behavior).
    pub list_selected_items: bool,
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            templates_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("output"),
            uploads_dir: PathBuf::from("uploads"),
            list_selected_items: true,
        }
    }
}

impl BriefConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Create every working directory up front so later writes cannot fail
    /// on a missing parent. Called once at service startup; a failure here
    /// is surfaced immediately instead of on first use.
    pub fn ensure_dirs(&self) -> Result<(), ConfigError> {
        for dir in [
            &self.data_dir,
            &self.templates_dir,
            &self.output_dir,
            &self.uploads_dir,
        ] {
            std::fs::create_dir_all(dir).map_err(|source| ConfigError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        }
        Ok(())
    }
}
