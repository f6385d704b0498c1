//! Explicit dashboard configuration, passed into the store at startup
//! rather than read from ambient globals.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::DashboardError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Deployment identifier scoping all stored collections.
    pub app_id: String,
    /// Authenticated user the collections belong to; opaque to the engine.
    pub user_id: String,
    /// Root directory for the JSON store.
    pub data_dir: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            app_id: "default-app-id".into(),
            user_id: "anonymous".into(),
            data_dir: default_data_dir(),
        }
    }
}

impl DashboardConfig {
    /// Loads the configuration from `path`, falling back to defaults when
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self, DashboardError> {
        if path.exists() {
            let data = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), DashboardError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

/// Platform data directory, falling back to the working directory when the
/// platform offers none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("dashboard_core")
}
