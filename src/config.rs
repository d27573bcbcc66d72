//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treewalk/treewalk.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `TREEWALK_ORDERS`, `TREEWALK_STRATEGIES`
//!    (comma separated, no spaces) and `TREEWALK_DISPLAY`
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Order, Strategy};

/// Which traversals the driver runs and how it prints them.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Settings {
    /// Traversal orders, in the order they are run
    pub orders: Vec<Order>,
    /// Strategies run for every order
    pub strategies: Vec<Strategy>,
    /// Print `Node [data=N]` instead of the bare value
    pub display: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orders: Order::ALL.to_vec(),
            strategies: Strategy::ALL.to_vec(),
            display: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub orders: Option<Vec<Order>>,
    pub strategies: Option<Vec<Strategy>>,
    pub display: Option<bool>,
}

/// Get the XDG config directory for treewalk.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treewalk").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treewalk.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay values that are specified; lists replace, they do not merge.
    fn apply(&self, overlay: &RawSettings) -> Self {
        Self {
            orders: overlay.orders.clone().unwrap_or_else(|| self.orders.clone()),
            strategies: overlay
                .strategies
                .clone()
                .unwrap_or_else(|| self.strategies.clone()),
            display: overlay.display.unwrap_or(self.display),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; it must exist
    pub fn load(config_file: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("Loading global config: {}", global_path.display());
                current = current.apply(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            debug!("Loading config file: {}", path.display());
            current = current.apply(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply TREEWALK_* environment variables as explicit overrides.
    ///
    /// Lists are split on `,` by the `config` crate and each item must be a
    /// lowercase value name.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("TREEWALK")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("orders")
                    .with_list_parse_key("strategies"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(&config, "orders")? {
            settings.orders = val;
        }
        if let Some(val) = env_value(&config, "strategies")? {
            settings.strategies = val;
        }
        if let Some(val) = env_value(&config, "display")? {
            settings.display = val;
        }

        Ok(settings)
    }

    /// Reject settings that would run no traversal at all.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.orders.is_empty() {
            return Err(ApplicationError::Config {
                message: "orders must not be empty".into(),
            });
        }
        if self.strategies.is_empty() {
            return Err(ApplicationError::Config {
                message: "strategies must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treewalk configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/treewalk/treewalk.toml
#   File:   treewalk --config <path>
#   Env:    TREEWALK_ORDERS, TREEWALK_STRATEGIES (comma separated, no spaces),
#           TREEWALK_DISPLAY
#
# Lists replace the lower layer entirely.

# Traversal orders to run: preorder, inorder, postorder
# orders = ["preorder", "inorder", "postorder"]

# Strategies to run for every order: recursive, iterative
# strategies = ["recursive", "iterative"]

# Print "Node [data=N]" instead of the bare value
# display = false
"#
        .to_string()
    }
}

/// Read one env key; `None` when the variable is not set.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> ApplicationResult<Option<T>> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("TREEWALK_{}: {}", key.to_uppercase(), e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
