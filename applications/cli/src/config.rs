/// Application configuration
use crate::error::{AppError, Result};
use resumecheck_client::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "resumecheck.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_ui")]
    pub ui: UiSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_api_url")]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// `SQLite` URL of the session database
    #[serde(default = "default_storage_path")]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Animate the score gauge
    #[serde(default = "default_animate")]
    pub animate: bool,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `resumecheck.toml` is read if
    /// present. `RESUMECHECK_*` variables override the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // RESUMECHECK_API_URL, RESUMECHECK_STORAGE_PATH, RESUMECHECK_UI_ANIMATE
        settings = settings.add_source(
            config::Environment::with_prefix("RESUMECHECK")
                .separator("_")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| AppError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api.url.trim().is_empty() {
            return Err(AppError::Config(
                "API URL is required (set RESUMECHECK_API_URL)".to_string(),
            ));
        }

        if self.storage.path.trim().is_empty() {
            return Err(AppError::Config(
                "Storage path is required (set RESUMECHECK_STORAGE_PATH)".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        url: default_api_url(),
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        path: default_storage_path(),
    }
}

fn default_storage_path() -> String {
    "sqlite://./data/resumecheck.db".to_string()
}

fn default_ui() -> UiSettings {
    UiSettings {
        animate: default_animate(),
    }
}

fn default_animate() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            storage: default_storage(),
            ui: default_ui(),
        }
    }
}
