//! Plugin configuration, loaded from an optional JSON file.

use crate::application::payment_method_service::DEFAULT_PLUGIN_CLASS;
use crate::domain::handler::HandlerRegistry;
use crate::domain::media::ICON_FOLDER;
use crate::error::{PluginError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_API_URL: &str = "https://api.trxps.com";
pub const DEFAULT_ADMIN_URL: &str = "http://localhost:8000";
pub const DEFAULT_API_BASE_PATH: &str = "trxps";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_key: None,
        }
    }
}

/// Where the admin API of the host platform lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminApiConfig {
    pub base_url: String,
    pub api_base_path: String,
    pub token: Option<String>,
}

impl Default for AdminApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_ADMIN_URL.to_string(),
            api_base_path: DEFAULT_API_BASE_PATH.to_string(),
            token: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PluginConfig {
    pub plugin_class: String,
    /// Registry keys of the handlers to synchronize, in order.
    pub enabled_handlers: Vec<String>,
    pub icon_folder: String,
    pub api: ApiConfig,
    pub admin: AdminApiConfig,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            plugin_class: DEFAULT_PLUGIN_CLASS.to_string(),
            enabled_handlers: HandlerRegistry::DEFAULT_ENABLED
                .iter()
                .map(|key| key.to_string())
                .collect(),
            icon_folder: ICON_FOLDER.to_string(),
            api: ApiConfig::default(),
            admin: AdminApiConfig::default(),
        }
    }
}

impl PluginConfig {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.plugin_class.trim().is_empty() {
            return Err(PluginError::ConfigError(
                "pluginClass must not be empty".to_string(),
            ));
        }
        if self.admin.api_base_path.trim_matches('/').is_empty() {
            return Err(PluginError::ConfigError(
                "admin.apiBasePath must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Registry holding the enabled handlers.
    pub fn handler_registry(&self) -> Result<HandlerRegistry> {
        HandlerRegistry::with_enabled(self.enabled_handlers.as_slice())
    }
}
