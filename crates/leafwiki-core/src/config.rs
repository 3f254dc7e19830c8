//! Site configuration management.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    error::{CoreError, Result},
    lang,
};

/// Main configuration structure for leafwiki.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Build settings.
    #[serde(default)]
    pub build: BuildConfig,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Display name of the site, used in every page title.
    pub name: String,

    /// Language tag of the generated pages.
    #[serde(default = "default_language")]
    pub language: String,
}

/// Build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Output directory for generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_language() -> String {
    lang::DEFAULT_LANGUAGE.to_string()
}

fn default_output_dir() -> String {
    "docs".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// In-memory configuration for a site named `name` with every other
    /// setting at its default.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            site: SiteConfig {
                name: name.into(),
                language: default_language(),
            },
            build: BuildConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                e,
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a file with `LEAFWIKI__SECTION__KEY`
    /// environment variables layered on top.
    pub fn load_with_env(path: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(config::Environment::with_prefix("LEAFWIKI").separator("__"))
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.site.name.trim().is_empty() {
            return Err(CoreError::config("site.name cannot be empty"));
        }

        if self.site.language.trim().is_empty() {
            return Err(CoreError::config("site.language cannot be empty"));
        }

        if !lang::is_known_language(&self.site.language) {
            tracing::warn!(
                language = %self.site.language,
                "site.language is not a known language tag; output will be nested under it"
            );
        }

        Ok(())
    }

    /// Whether the configured language is the default language.
    #[must_use]
    pub fn is_default_language(&self) -> bool {
        lang::is_default_language(&self.site.language)
    }
}
