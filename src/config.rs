//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/exprlens/exprlens.toml`
//! 3. Local config: `<dir>/.exprlens.toml` (usually the working directory)
//! 4. Environment variables: `EXPRLENS_*` prefix
//!
//! Command line flags are applied on top by the CLI layer.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Optimizer service connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL; requests go to `<base_url>/optimize`
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".into(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 20.0,
            right: 20.0,
            bottom: 20.0,
            left: 20.0,
        }
    }
}

/// Fixed logical canvas each tree is drawn into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub node_radius: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            margin: Margin::default(),
            node_radius: 20.0,
        }
    }
}

impl CanvasConfig {
    /// Width available to the layout (canvas minus horizontal margins).
    pub fn inner_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height available to the layout (canvas minus vertical margins).
    pub fn inner_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub server: RawServerConfig,
    pub canvas: RawCanvasConfig,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawServerConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawCanvasConfig {
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub margin: Option<RawMargin>,
    pub node_radius: Option<f64>,
}

/// A margin is either one number for all sides or a `{ top, right, bottom, left }` table.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(untagged)]
pub enum RawMargin {
    Uniform(f64),
    Sides(Margin),
}

impl From<RawMargin> for Margin {
    fn from(raw: RawMargin) -> Self {
        match raw {
            RawMargin::Uniform(m) => Margin {
                top: m,
                right: m,
                bottom: m,
                left: m,
            },
            RawMargin::Sides(margin) => margin,
        }
    }
}

/// Unified configuration for exprlens.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerConfig,
    pub canvas: CanvasConfig,
}

/// Get the XDG config directory for exprlens.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "exprlens").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("exprlens.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".exprlens.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn env_source() -> Environment {
    Environment::with_prefix("EXPRLENS")
        .prefix_separator("_")
        .separator("__")
}

/// `None` when the variable is unset.
fn env_value<T: DeserializeOwned>(config: &Config, key: &str) -> Result<Option<T>, ApplicationError> {
    match config.get::<T>(key) {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(ApplicationError::Config {
            message: format!("environment override for {}: {}", key, e),
        }),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        let margin = overlay
            .canvas
            .margin
            .map(Margin::from)
            .unwrap_or(self.canvas.margin);
        Self {
            server: ServerConfig {
                base_url: overlay
                    .server
                    .base_url
                    .clone()
                    .unwrap_or_else(|| self.server.base_url.clone()),
                timeout_secs: overlay
                    .server
                    .timeout_secs
                    .unwrap_or(self.server.timeout_secs),
            },
            canvas: CanvasConfig {
                width: overlay.canvas.width.unwrap_or(self.canvas.width),
                height: overlay.canvas.height.unwrap_or(self.canvas.height),
                margin,
                node_radius: overlay.canvas.node_radius.unwrap_or(self.canvas.node_radius),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.exprlens.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("load: local config {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply EXPRLENS_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> Result<Self, ApplicationError> {
        Self::apply_overrides(settings, env_source())
    }

    /// Apply overrides from an environment source.
    ///
    /// A variable that is set but does not parse is an error, not a silent skip.
    fn apply_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        // Use config crate just for env var parsing
        let config = Config::builder()
            .add_source(env)
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value::<String>(&config, "server.base_url")? {
            settings.server.base_url = val;
        }
        if let Some(val) = env_value::<u64>(&config, "server.timeout_secs")? {
            settings.server.timeout_secs = val;
        }
        if let Some(val) = env_value::<f64>(&config, "canvas.width")? {
            settings.canvas.width = val;
        }
        if let Some(val) = env_value::<f64>(&config, "canvas.height")? {
            settings.canvas.height = val;
        }
        if let Some(val) = env_value::<f64>(&config, "canvas.node_radius")? {
            settings.canvas.node_radius = val;
        }
        if let Some(val) = env_value::<f64>(&config, "canvas.margin")? {
            settings.canvas.margin = RawMargin::Uniform(val).into();
        }

        Ok(settings)
    }

    /// Reject settings that leave no drawable area or cannot reach the server.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if self.server.base_url.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "server.base_url must not be empty".into(),
            });
        }
        if self.server.timeout_secs == 0 {
            return Err(ApplicationError::Config {
                message: "server.timeout_secs must be greater than 0".into(),
            });
        }
        if self.canvas.inner_width() <= 0.0 || self.canvas.inner_height() <= 0.0 {
            return Err(ApplicationError::Config {
                message: format!(
                    "canvas {}x{} leaves no drawable area inside its margins",
                    self.canvas.width, self.canvas.height
                ),
            });
        }
        if self.canvas.node_radius <= 0.0 {
            return Err(ApplicationError::Config {
                message: "canvas.node_radius must be positive".into(),
            });
        }
        Ok(())
    }

    /// Effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
