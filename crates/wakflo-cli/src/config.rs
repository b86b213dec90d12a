//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `WAKFLO_` prefix, `__` between sections,
//!    e.g. `WAKFLO_BACKEND__URL`
//! 3. Config file (`--config`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use wakflo_adapters::{HttpBackendConfig, backend::DEFAULT_BASE_URL};
use wakflo_core::domain::INITIAL_VERSION;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where the Wakflo REST API lives.
    pub backend: BackendSettings,
    /// Values offered when creating integrations.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    pub url: String,
    pub timeout_secs: u64,
    /// Bearer token; only ever read from the environment or the file.
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub authors: Vec<String>,
    pub categories: Vec<String>,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendSettings {
                url: DEFAULT_BASE_URL.into(),
                timeout_secs: 30,
                token: None,
            },
            defaults: Defaults {
                authors: vec!["Wakflo <integrations@wakflo.com>".into()],
                categories: vec!["app".into()],
                version: INITIAL_VERSION.into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the file, then the environment.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required, Environment::with_prefix("WAKFLO"))
    }

    fn load_from(path: &Path, required: bool, env: Environment) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise built-in defaults")?;

        let env = env
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("defaults.authors")
            .with_list_parse_key("defaults.categories");

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(env)
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has an unexpected shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.wakflo.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "wakflo", "wakflo")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".wakflo.toml"))
    }

    /// Settings for the HTTP backend adapter.
    pub fn backend_config(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            base_url: self.backend.url.clone(),
            timeout: Duration::from_secs(self.backend.timeout_secs),
            token: self.backend.token.clone(),
        }
    }
}
