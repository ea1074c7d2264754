//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mentor/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MentorConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    pub backend: Option<String>,
    pub base_url: Option<String>,
    pub collection: Option<String>,
    pub catalog_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StyleConfig {
    pub prelude_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BACKEND: &str = "http";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_COLLECTION: &str = "modules";
pub const DEFAULT_CATALOG_FILE: &str = "modules.json";
pub const DEFAULT_PRELUDE_FILE: &str = "style.html";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub backend: String,
    pub base_url: String,
    pub collection: String,
    /// Absolute path of the local catalog file (file backend).
    pub catalog_path: PathBuf,
    /// Absolute path of the style prelude file.
    pub prelude_path: PathBuf,
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

/// Returns `~/.mentor/`, where the config file and local resources live.
/// Falls back to the current directory when no home exists.
pub fn app_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".mentor"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the path to `~/.mentor/config.toml`.
pub fn config_path() -> PathBuf {
    app_dir().join("config.toml")
}

/// Load config from `~/.mentor/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MentorConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MentorConfig, ConfigError> {
    let path = config_path();

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MentorConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: MentorConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Mentor Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [store]
# backend = "http"                   # "http" or "file"
# base_url = "http://localhost:8080" # Or set MENTOR_STORE_URL env var
# collection = "modules"             # Collection name appended to the base URL
# catalog_file = "modules.json"      # For the file backend; path relative to ~/.mentor/

# [style]
# prelude_file = "style.html"        # Prepended to lesson/question markup; relative to ~/.mentor/
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_backend` is from the CLI flag (None = not specified).
pub fn resolve(config: &MentorConfig, cli_backend: Option<&str>) -> ResolvedConfig {
    // Backend: CLI → env → config → default
    let backend = cli_backend
        .map(|s| s.to_string())
        .or_else(|| std::env::var("MENTOR_STORE").ok())
        .or_else(|| config.store.backend.clone())
        .unwrap_or_else(|| DEFAULT_BACKEND.to_string());

    // Base URL: env → config → default
    let base_url = std::env::var("MENTOR_STORE_URL")
        .ok()
        .or_else(|| config.store.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let collection = config
        .store
        .collection
        .clone()
        .unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

    // Local resources resolve relative to ~/.mentor/
    let dir = app_dir();
    let catalog_path = dir.join(
        config
            .store
            .catalog_file
            .as_deref()
            .unwrap_or(DEFAULT_CATALOG_FILE),
    );
    let prelude_path = dir.join(
        config
            .style
            .prelude_file
            .as_deref()
            .unwrap_or(DEFAULT_PRELUDE_FILE),
    );

    ResolvedConfig {
        backend,
        base_url,
        collection,
        catalog_path,
        prelude_path,
    }
}
