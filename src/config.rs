//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/swagger-scout/config.toml` (XDG) or platform config dir
//! 2. Project config: `.swagger-scout.toml`
//! 3. Environment variables: `SWAGGER_SCOUT_*`
//!
//! Every key is optional:
//! ```toml
//! [output]
//! format = "toon"
//!
//! [git]
//! repository = "/path/to/azure-rest-api-specs"
//!
//! [log]
//! filter = "swagger_scout=trace"
//! ```

use std::ops::Deref;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use crate::output::OutputFormat;

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub log: LogConfig,
}

/// Output rendering configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Git changed-file source configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GitConfig {
    /// Repository to diff when `--repo` is not given.
    #[serde(default = "default_repository")]
    pub repository: PathBuf,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            repository: default_repository(),
        }
    }
}

fn default_repository() -> PathBuf {
    PathBuf::from(".")
}

/// Logging configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogConfig {
    /// Tracing filter directive that replaces the verbosity-based default.
    pub filter: Option<String>,
}

/// Project config file name, looked up in the current directory.
pub const PROJECT_CONFIG_FILE: &str = ".swagger-scout.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "SWAGGER_SCOUT_";

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(Self::user_config_path(), PathBuf::from(PROJECT_CONFIG_FILE))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Builds the layered provider from explicit file locations.
    pub fn figment(user_config: PathBuf, project_config: PathBuf) -> Figment {
        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(project_config))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed(ENV_PREFIX).split("_"))
    }

    /// User config path: ~/.config/swagger-scout/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home
                .join(".config")
                .join("swagger-scout")
                .join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("swagger-scout").join("config.toml"))
            .unwrap_or_default()
    }
}
