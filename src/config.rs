//! Wisdom configuration
//!
//! Resolved once at startup with precedence:
//! environment variables > `.exarp_no_wisdom` marker > `.exarp_wisdom_config` > defaults.
//!
//! ```text
//! EXARP_WISDOM_SOURCE=<source_id>   default source (pistis_sophia)
//! EXARP_WISDOM_HEBREW=1             allow Hebrew sources as default
//! EXARP_WISDOM_HEBREW_ONLY=1        only Hebrew sources as default
//! EXARP_DISABLE_WISDOM=1            turn advice off entirely
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = ".exarp_wisdom_config";
pub const DISABLE_MARKER_NAME: &str = ".exarp_no_wisdom";
pub const DEFAULT_SOURCE: &str = "pistis_sophia";

pub const ENV_SOURCE: &str = "EXARP_WISDOM_SOURCE";
pub const ENV_HEBREW: &str = "EXARP_WISDOM_HEBREW";
pub const ENV_HEBREW_ONLY: &str = "EXARP_WISDOM_HEBREW_ONLY";
pub const ENV_DISABLE: &str = "EXARP_DISABLE_WISDOM";

/// Resolved configuration consumed by the engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Default source id
    pub source: String,
    pub hebrew_enabled: bool,
    pub hebrew_only: bool,
    pub disabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            hebrew_enabled: false,
            hebrew_only: false,
            disabled: false,
        }
    }
}

/// Where the file-based layers live
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub marker_file: PathBuf,
}

impl ConfigPaths {
    /// Config file in `home` if one exists there, else in `work_dir`.
    /// The marker is always looked up in `work_dir`.
    pub fn resolve(work_dir: &Path, home: Option<&Path>) -> Self {
        let home_config = home.map(|h| h.join(CONFIG_FILE_NAME));
        let config_file = match home_config {
            Some(path) if path.exists() => path,
            _ => work_dir.join(CONFIG_FILE_NAME),
        };
        Self {
            config_file,
            marker_file: work_dir.join(DISABLE_MARKER_NAME),
        }
    }

    /// Paths for the current process
    pub fn discover() -> Result<Self> {
        let work_dir = std::env::current_dir().context("Failed to read working directory")?;
        Ok(Self::resolve(&work_dir, dirs::home_dir().as_deref()))
    }
}

fn parse_flag(name: &str, raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        other => {
            tracing::warn!(variable = name, value = other, "Ignoring unrecognized flag value");
            None
        }
    }
}

impl Config {
    /// Load from the process environment and the discovered paths
    pub fn load() -> Result<Self> {
        let paths = ConfigPaths::discover()?;
        Ok(Self::load_with(&paths, |key| std::env::var(key).ok()))
    }

    /// Load from explicit paths and an environment lookup
    pub fn load_with(paths: &ConfigPaths, env: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::read_file(&paths.config_file).unwrap_or_default();

        if paths.marker_file.exists() {
            tracing::debug!(marker = %paths.marker_file.display(), "Wisdom disabled by marker file");
            config.disabled = true;
        }

        if let Some(source) = env(ENV_SOURCE).filter(|s| !s.trim().is_empty()) {
            config.source = source.trim().to_string();
        }
        let flags: [(&str, &mut bool); 3] = [
            (ENV_HEBREW, &mut config.hebrew_enabled),
            (ENV_HEBREW_ONLY, &mut config.hebrew_only),
            (ENV_DISABLE, &mut config.disabled),
        ];
        for (name, slot) in flags {
            if let Some(value) = env(name).and_then(|raw| parse_flag(name, &raw)) {
                *slot = value;
            }
        }

        config
    }

    /// Parse the JSON config file. Missing file is `None`; a malformed one is
    /// logged and treated as missing.
    fn read_file(path: &Path) -> Option<Self> {
        let contents = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Ignoring malformed wisdom config");
                None
            }
        }
    }

    /// Write as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("Failed to write config to {:?}", path))?;
        Ok(())
    }
}
