//! Layered configuration
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variable: `SCENEDOC_SCENE_EXTENSION`
//! 2. Project-local: `.scenedoc/config.toml`
//! 3. Global: `~/.scenedoc/config.toml`
//!
//! An explicit `--config` file replaces both file layers.

use scenedoc_core::{Result, SceneDocError};
use scenedoc_render::RelevanceFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the batch scene extension
pub const SCENE_EXTENSION_ENV: &str = "SCENEDOC_SCENE_EXTENSION";

const DEFAULT_SCENE_EXTENSION: &str = "tscn";

/// `[filter]` table; each list replaces the built-in set when given
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub keys: Option<Vec<String>>,
    #[serde(default)]
    pub media_extensions: Option<Vec<String>>,
    #[serde(default)]
    pub resource_extensions: Option<Vec<String>>,
}

/// `[batch]` table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub scene_extension: Option<String>,
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScenedocConfig {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

impl ScenedocConfig {
    /// Load config with layered precedence: global < project < env vars
    pub fn load() -> Result<Self> {
        let mut config = ScenedocConfig::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        let local_path = PathBuf::from(".scenedoc/config.toml");
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut config, local);
        }

        Self::apply_env_overrides(&mut config, std::env::var(SCENE_EXTENSION_ENV).ok());
        Ok(config)
    }

    /// Load config from a specific file path only, then apply env overrides
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_env_overrides(&mut config, std::env::var(SCENE_EXTENSION_ENV).ok());
        Ok(config)
    }

    /// Build the property filter, falling back to the built-in sets
    pub fn relevance_filter(&self) -> RelevanceFilter {
        let mut filter = RelevanceFilter::new();
        if let Some(keys) = &self.filter.keys {
            filter = filter.with_keys(keys.as_slice());
        }
        if let Some(extensions) = &self.filter.media_extensions {
            filter = filter.with_media_extensions(extensions.as_slice());
        }
        if let Some(extensions) = &self.filter.resource_extensions {
            filter = filter.with_resource_extensions(extensions.as_slice());
        }
        filter
    }

    /// Extension of files picked up in batch mode, without a leading dot
    pub fn scene_extension(&self) -> &str {
        self.batch
            .scene_extension
            .as_deref()
            .map(|ext| ext.trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .unwrap_or(DEFAULT_SCENE_EXTENSION)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".scenedoc").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| SceneDocError::config(path, e))
    }

    fn merge_into(base: &mut ScenedocConfig, overlay: ScenedocConfig) {
        if overlay.filter.keys.is_some() {
            base.filter.keys = overlay.filter.keys;
        }
        if overlay.filter.media_extensions.is_some() {
            base.filter.media_extensions = overlay.filter.media_extensions;
        }
        if overlay.filter.resource_extensions.is_some() {
            base.filter.resource_extensions = overlay.filter.resource_extensions;
        }
        if overlay.batch.scene_extension.is_some() {
            base.batch.scene_extension = overlay.batch.scene_extension;
        }
    }

    fn apply_env_overrides(config: &mut ScenedocConfig, scene_extension: Option<String>) {
        if let Some(ext) = scene_extension.filter(|e| !e.trim().is_empty()) {
            config.batch.scene_extension = Some(ext.trim().to_string());
        }
    }
}
