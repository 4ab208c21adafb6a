//! Configuration for the tasklist server.
//!
//! Supports layered configuration with the following priority (highest first):
//! 1. CLI arguments
//! 2. Environment variables (via clap `env` attribute)
//! 3. TOML config file (`~/.config/tasklist/config.toml`)
//! 4. Compiled defaults

use std::path::{Path, PathBuf};

/// Default bind address.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Default maximum number of pooled database connections.
pub const DEFAULT_POOL_SIZE: u32 = 8;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("failed to parse config file: {0}")]
    ParseToml(#[from] toml::de::Error),
}

/// Top-level TOML config file structure.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ConfigFile {
    server: ServerFileConfig,
    database: DatabaseFileConfig,
}

/// `[server]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ServerFileConfig {
    bind_addr: Option<String>,
    cors_origins: Vec<String>,
    log_level: Option<String>,
}

/// `[database]` section of the config file.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct DatabaseFileConfig {
    url: Option<String>,
    pool_size: Option<u32>,
}

/// CLI arguments for the tasklist server.
#[derive(clap::Parser, Debug, Default)]
#[command(version, about = "Task management HTTP service")]
pub struct CliArgs {
    /// Address to bind the HTTP server to.
    #[arg(short, long, env = "TASKLIST_ADDR")]
    pub bind: Option<String>,

    /// Path to config file (default: `~/.config/tasklist/config.toml`).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// PostgreSQL connection URL. Tasks are kept in memory when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long)]
    pub pool_size: Option<u32>,

    /// Log level filter (trace, debug, info, warn, error).
    #[arg(long, env = "TASKLIST_LOG")]
    pub log_level: Option<String>,
}

/// Fully resolved server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address to bind the server to (e.g., `0.0.0.0:8080`).
    pub bind_addr: String,
    /// PostgreSQL connection URL, if persistent storage is wanted.
    pub database_url: Option<String>,
    /// Maximum number of pooled database connections.
    pub pool_size: u32,
    /// Allowed CORS origins; empty allows any origin.
    pub cors_origins: Vec<String>,
    /// Log level filter string.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_owned(),
            database_url: None,
            pool_size: DEFAULT_POOL_SIZE,
            cors_origins: Vec::new(),
            log_level: "info".to_owned(),
        }
    }
}

impl AppConfig {
    /// Load configuration by merging CLI args, env vars, and a TOML file.
    ///
    /// If `--config` is given and the file does not exist, returns an error.
    /// If no `--config` is given, the default path is tried and a missing
    /// file is treated as empty config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the config file cannot be read or parsed.
    pub fn load(cli: &CliArgs) -> Result<Self, ConfigError> {
        let file = load_config_file(cli.config.as_deref())?;
        Ok(Self::resolve(cli, file))
    }

    /// Priority: CLI (including env) > file > default.
    fn resolve(cli: &CliArgs, file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            bind_addr: cli
                .bind
                .clone()
                .or(file.server.bind_addr)
                .unwrap_or(defaults.bind_addr),
            database_url: cli
                .database_url
                .clone()
                .or(file.database.url)
                .filter(|url| !url.trim().is_empty()),
            pool_size: cli
                .pool_size
                .or(file.database.pool_size)
                .unwrap_or(defaults.pool_size),
            cors_origins: file.server.cors_origins,
            log_level: cli
                .log_level
                .clone()
                .or(file.server.log_level)
                .unwrap_or(defaults.log_level),
        }
    }
}

/// Load and parse a TOML config file.
fn load_config_file(explicit_path: Option<&Path>) -> Result<ConfigFile, ConfigError> {
    if let Some(path) = explicit_path {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        return Ok(toml::from_str(&contents)?);
    }

    match dirs::config_dir() {
        Some(config_dir) => load_default_config_file(&config_dir),
        None => Ok(ConfigFile::default()),
    }
}

/// Load `tasklist/config.toml` under `config_dir`, treating a missing file as
/// empty config.
fn load_default_config_file(config_dir: &Path) -> Result<ConfigFile, ConfigError> {
    let path = config_dir.join("tasklist").join("config.toml");

    match std::fs::read_to_string(&path) {
        Ok(contents) => Ok(toml::from_str(&contents)?),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(ConfigFile::default()),
        Err(source) => Err(ConfigError::ReadFile { path, source }),
    }
}
