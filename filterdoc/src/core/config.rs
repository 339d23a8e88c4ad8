use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::filters::DEFAULT_SEPARATOR;
use crate::utils::file::{expand_path, resolve_from_config};

use super::cli::CliConfig;
use super::constants::{
    APP_DOT_FOLDER, CONFIG_FILE_NAME, DEFAULT_FILTERS_FILE, DEFAULT_OPENAPI_TITLE,
    DEFAULT_OPENAPI_VERSION,
};

// =============================================================================
// Output Format Enum
// =============================================================================

/// How generated query parameters are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Descriptor list as JSON
    #[default]
    Json,
    /// One tab separated line per parameter
    Text,
    /// OpenAPI document
    Openapi,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Openapi => write!(f, "openapi"),
        }
    }
}

// =============================================================================
// File Config Structs (JSON deserialization)
// =============================================================================

/// OpenAPI document configuration section
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OpenApiFileConfig {
    pub title: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// Root configuration file structure
#[derive(Debug, Default, Clone, Deserialize)]
pub struct FileConfig {
    pub filters: Option<PathBuf>,
    pub separator: Option<String>,
    pub format: Option<OutputFormat>,
    pub openapi: Option<OpenApiFileConfig>,
    #[serde(flatten)]
    pub extra: serde_json::Value,
}

impl FileConfig {
    /// Load configuration from a JSON file.
    ///
    /// A relative `filters` path is resolved against the file's directory.
    fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "Loading config file");
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.filters = config
            .filters
            .map(|filters| resolve_from_config(path, &filters.to_string_lossy()));
        tracing::trace!(config = ?config, "Parsed config file");
        Ok(config)
    }

    /// Warn about unknown fields in the config
    fn warn_unknown_fields(&self) {
        if let serde_json::Value::Object(map) = &self.extra
            && !map.is_empty()
        {
            let keys_str: String = map
                .keys()
                .map(|k| k.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            tracing::warn!(
                fields = %keys_str,
                "Unknown fields in config file (possible typos)"
            );
        }
    }

    /// Merge another FileConfig into this one (other takes precedence)
    fn merge(&mut self, other: FileConfig) {
        if other.filters.is_some() {
            self.filters = other.filters;
        }
        if other.separator.is_some() {
            self.separator = other.separator;
        }
        if other.format.is_some() {
            self.format = other.format;
        }
        if let Some(openapi) = other.openapi {
            let base = self.openapi.get_or_insert_with(Default::default);
            if openapi.title.is_some() {
                base.title = openapi.title;
            }
            if openapi.version.is_some() {
                base.version = openapi.version;
            }
            if openapi.description.is_some() {
                base.description = openapi.description;
            }
        }
    }
}

// =============================================================================
// Resolved Config
// =============================================================================

/// OpenAPI document settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenApiConfig {
    pub title: String,
    pub version: String,
    pub description: Option<String>,
}

impl Default for OpenApiConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_OPENAPI_TITLE.to_string(),
            version: DEFAULT_OPENAPI_VERSION.to_string(),
            description: None,
        }
    }
}

/// Application configuration after layering every source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub filters: PathBuf,
    pub separator: String,
    pub format: OutputFormat,
    pub openapi: OpenApiConfig,
}

impl AppConfig {
    /// Load configuration from all sources
    ///
    /// Priority (lowest to highest):
    /// 1. Defaults
    /// 2. Profile directory config (~/.filterdoc/filterdoc.json)
    /// 3. Local directory config OR CLI-specified config path
    /// 4. CLI arguments (which include env var fallbacks via clap)
    pub fn load(cli: &CliConfig) -> Result<Self> {
        Self::load_with_profile(cli, get_profile_config_path())
    }

    pub(crate) fn load_with_profile(
        cli: &CliConfig,
        profile_path: Option<PathBuf>,
    ) -> Result<Self> {
        tracing::debug!("Loading application configuration");
        tracing::trace!(cli = ?cli, "CLI config");

        let mut file_config = FileConfig::default();
        let mut found_configs: Vec<String> = Vec::new();

        // 1. Load from profile dir - skip if not exists
        if let Some(profile_path) = profile_path
            && profile_path.exists()
        {
            let profile_config = FileConfig::load_from_file(&profile_path)?;
            profile_config.warn_unknown_fields();
            file_config.merge(profile_config);
            found_configs.push(profile_path.display().to_string());
        }

        // 2. Load from CLI-specified path OR local directory
        let overlay_path = if let Some(ref path) = cli.config {
            let expanded = expand_path(&path.to_string_lossy());
            if !expanded.exists() {
                anyhow::bail!("Config file not found: {}", expanded.display());
            }
            Some(expanded)
        } else {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            if local.exists() { Some(local) } else { None }
        };

        if let Some(path) = overlay_path {
            let overlay_config = FileConfig::load_from_file(&path)?;
            overlay_config.warn_unknown_fields();
            file_config.merge(overlay_config);
            found_configs.push(path.display().to_string());
        }

        tracing::debug!(configs = ?found_configs, "Config files loaded");

        // 3. Layer configs: defaults -> file config -> CLI/env overrides
        let filters = cli
            .filters
            .as_ref()
            .map(|path| expand_path(&path.to_string_lossy()))
            .or(file_config.filters)
            .unwrap_or_else(|| expand_path(DEFAULT_FILTERS_FILE));

        let separator = cli
            .separator
            .clone()
            .or(file_config.separator)
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
        if separator.is_empty() {
            anyhow::bail!("Separator cannot be empty");
        }

        let format = cli.format.or(file_config.format).unwrap_or_default();

        let file_openapi = file_config.openapi.unwrap_or_default();
        let defaults = OpenApiConfig::default();
        let openapi = OpenApiConfig {
            title: file_openapi.title.unwrap_or(defaults.title),
            version: file_openapi.version.unwrap_or(defaults.version),
            description: file_openapi.description,
        };

        let config = Self {
            filters,
            separator,
            format,
            openapi,
        };
        tracing::debug!(
            filters = %config.filters.display(),
            separator = %config.separator,
            format = %config.format,
            "Configuration resolved"
        );
        Ok(config)
    }
}

/// Get the profile config path (~/.filterdoc/filterdoc.json)
fn get_profile_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(APP_DOT_FOLDER).join(CONFIG_FILE_NAME))
}
