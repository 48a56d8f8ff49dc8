use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::data::loader::{ColumnNames, LoaderOptions};

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "MAFIMA_CONFIG";

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "mafima.json";

// ---------------------------------------------------------------------------
// Viewer configuration
// ---------------------------------------------------------------------------

/// Startup settings, read from JSON.  Every field is optional:
///
/// ```json
/// { "data_path": "mafima.csv", "delimiter": ";", "show_covers": true,
///   "thumbnail_height": 64.0, "columns": { "title": "Cím" } }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub data_path: PathBuf,
    pub delimiter: char,
    pub columns: ColumnNames,
    pub show_covers: bool,
    pub thumbnail_height: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("mafima.csv"),
            delimiter: ';',
            columns: ColumnNames::default(),
            show_covers: true,
            thumbnail_height: 64.0,
        }
    }
}

impl ViewerConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing config JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Resolve the config: `$MAFIMA_CONFIG` (must exist), else `mafima.json`
    /// if present, else defaults.  `data_override` replaces `data_path`.
    pub fn resolve(env_path: Option<PathBuf>, data_override: Option<PathBuf>) -> Result<Self> {
        let mut config = match env_path {
            Some(path) => Self::from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        if let Some(path) = data_override {
            config.data_path = path;
        }
        Ok(config)
    }

    /// Loader settings; the delimiter has to be a single byte.
    pub fn loader_options(&self) -> Result<LoaderOptions> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter '{}' is not a single-byte character", self.delimiter);
        }
        Ok(LoaderOptions {
            delimiter: self.delimiter as u8,
            columns: self.columns.clone(),
        })
    }
}
