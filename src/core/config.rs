//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.grocer/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//! Nothing about the list itself is ever stored here.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::item::Quantity;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GrocerConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_quantity: Option<u8>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "grocer.log";

pub const ENV_LOG_LEVEL: &str = "GROCER_LOG_LEVEL";
pub const ENV_LOG_FILE: &str = "GROCER_LOG_FILE";
pub const ENV_DEFAULT_QUANTITY: &str = "GROCER_DEFAULT_QUANTITY";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub default_quantity: Quantity,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub default_quantity: Option<u8>,
    pub log_level: Option<LevelFilter>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.grocer/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".grocer").join("config.toml"))
}

/// Load config from `~/.grocer/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GrocerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GrocerConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(GrocerConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<GrocerConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(GrocerConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GrocerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# Grocer Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_quantity = 1               # 1-10, what the quantity picker resets to

# [logging]
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "grocer.log"                # Relative paths are relative to the working directory
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GrocerConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as `resolve`, reading environment variables through `env`.
pub fn resolve_with_env<E>(config: &GrocerConfig, cli: &CliOverrides, env: E) -> ResolvedConfig
where
    E: Fn(&str) -> Option<String>,
{
    // Quantity: CLI → env → config → default. Out-of-range values are skipped.
    let env_quantity = env(ENV_DEFAULT_QUANTITY).and_then(|raw| match raw.trim().parse::<u8>() {
        Ok(q) => Some(q),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", ENV_DEFAULT_QUANTITY, raw, e);
            None
        }
    });
    let default_quantity = [cli.default_quantity, env_quantity, config.general.default_quantity]
        .into_iter()
        .flatten()
        .find_map(|q| match Quantity::new(q) {
            Ok(quantity) => Some(quantity),
            Err(e) => {
                warn!("Ignoring default quantity: {}", e);
                None
            }
        })
        .unwrap_or_default();

    // Log level: CLI → env → config → default
    let log_level = cli
        .log_level
        .or_else(|| env(ENV_LOG_LEVEL).and_then(|raw| parse_level(&raw)))
        .or_else(|| config.logging.level.as_deref().and_then(parse_level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env(ENV_LOG_FILE).map(PathBuf::from))
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        default_quantity,
        log_level,
        log_file,
    }
}

fn parse_level(raw: &str) -> Option<LevelFilter> {
    match LevelFilter::from_str(raw.trim()) {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Unknown log level {:?}, ignoring", raw);
            None
        }
    }
}
