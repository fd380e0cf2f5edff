//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/patternlab/patternlab.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `PATTERNLAB_*` prefix, `__` between sections
//!
//! Command-line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;
use crate::domain::{DocumentKind, Locale, TreeStyle};

/// Prototype section settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PrototypeConfig {
    /// Replaces the template document's title
    pub title: Option<String>,
    /// Replaces the template document's content
    pub content: Option<String>,
    /// How many clones to show
    pub copies: usize,
}

impl Default for PrototypeConfig {
    fn default() -> Self {
        Self {
            title: None,
            content: None,
            copies: 2,
        }
    }
}

/// Composite section settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CompositeConfig {
    pub style: TreeStyle,
}

/// Template Method section settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TemplateConfig {
    /// Processors to run, in order
    pub kinds: Vec<DocumentKind>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            kinds: vec![DocumentKind::Text, DocumentKind::Pdf],
        }
    }
}

/// Unified configuration for patternlab.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Output language
    pub locale: Locale,
    pub prototype: PrototypeConfig,
    pub composite: CompositeConfig,
    pub template: TemplateConfig,
}

/// Get the XDG config directory for patternlab.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "patternlab").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("patternlab.toml"))
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|path| path.exists());
        Self::load_layers(global.as_deref(), config_file)
    }

    /// Load settings from the given global and explicit files plus `PATTERNLAB_*`.
    pub fn load_layers(
        global: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let defaults = Config::try_from(&Settings::default()).map_err(config_err)?;
        let mut builder = Config::builder().add_source(defaults);

        // 2. Global config, silently skipped when absent
        if let Some(path) = global {
            debug!("global config: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        // 3. Explicit config must exist
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("explicit config: {}", path.display());
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        // 4. Environment variables override files
        builder = builder.add_source(
            Environment::with_prefix("PATTERNLAB")
                .prefix_separator("_")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("template.kinds")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# patternlab configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/patternlab/patternlab.toml
#   Explicit: --config <FILE>
#   Env:      PATTERNLAB_* environment variables, e.g.
#             PATTERNLAB_LOCALE=uk
#             PATTERNLAB_COMPOSITE__STYLE=tree
#             PATTERNLAB_TEMPLATE__KINDS=pdf,text

# Output language: "en" or "uk"
# locale = "en"

[prototype]
# Override the template document
# title = "Template"
# content = "Typical text"

# Number of clones shown
# copies = 2

[composite]
# Layout of the folder tree: "plain", "indented" or "tree"
# style = "plain"

[template]
# Processors to run, in order: "text", "pdf"
# kinds = ["text", "pdf"]
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
