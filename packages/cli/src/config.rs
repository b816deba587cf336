use folio_editor::{ComponentDefinition, DEFAULT_VIEWPORT};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "folio.config.json";

/// Folio configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Viewport that owns the base elements
    #[serde(default = "default_viewport")]
    pub default_viewport: String,

    /// JSON file with extra component definitions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_components: Option<String>,
}

fn default_viewport() -> String {
    DEFAULT_VIEWPORT.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Load the custom component definitions, if configured
    pub fn load_custom_components(&self, cwd: &str) -> anyhow::Result<Vec<ComponentDefinition>> {
        let Some(path) = &self.custom_components else {
            return Ok(vec![]);
        };

        let content = std::fs::read_to_string(PathBuf::from(cwd).join(path))?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_viewport: default_viewport(),
            custom_components: None,
        }
    }
}
