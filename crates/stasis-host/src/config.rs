//! Host configuration file handling.
//!
//! The config lives in a single JSON file next to the server. Loading is
//! deliberately forgiving: a missing file is created with defaults, an
//! outdated layout is replaced with defaults, and an unreadable file is
//! ignored in favor of defaults. Misconfiguration never stops the server.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use stasis_core::config::TimeStopConfig;
use stasis_sim::engine::EngineConfig;

/// Current config layout version. Files with an older version are reset
/// to defaults on load.
pub const CONFIG_VERSION: u32 = 2;

/// Everything the host reads from its config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostConfig {
    /// Layout version of the file. Files written before versioning
    /// deserialize as 0 and get migrated.
    #[serde(default)]
    pub config_version: u32,
    /// RNG seed handed to the engine.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Time-stop behavior toggles.
    #[serde(default)]
    pub time_stop: TimeStopConfig,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            config_version: CONFIG_VERSION,
            seed: 42,
            time_stop: TimeStopConfig::default(),
        }
    }
}

impl HostConfig {
    /// Build the engine config this host config describes.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            seed: self.seed,
            timestop: self.time_stop,
        }
    }
}

fn default_seed() -> u64 {
    42
}

pub fn save_to_file(path: &Path, config: &HostConfig) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| format!("Failed to create config directory: {e}"))?;
    }
    let json = serde_json::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize config: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write config file: {e}"))?;
    Ok(())
}

pub fn load_from_file(path: &Path) -> Result<HostConfig, String> {
    let json = fs::read_to_string(path).map_err(|e| format!("Failed to read config file: {e}"))?;
    let config: HostConfig =
        serde_json::from_str(&json).map_err(|e| format!("Failed to parse config file: {e}"))?;
    Ok(config)
}

/// Load the host config, creating or migrating the file as needed.
/// Always returns a usable config.
pub fn load_or_init(path: &Path) -> HostConfig {
    if !path.exists() {
        let config = HostConfig::default();
        match save_to_file(path, &config) {
            Ok(()) => log::info!("wrote default config to {}", path.display()),
            Err(e) => log::warn!("could not write default config: {}", e),
        }
        return config;
    }

    match load_from_file(path) {
        Ok(config) if config.config_version >= CONFIG_VERSION => config,
        Ok(config) => {
            // Outdated layout: replace the file with current defaults.
            log::warn!(
                "config version {} is outdated, resetting {} to defaults",
                config.config_version,
                path.display()
            );
            let fresh = HostConfig::default();
            if let Err(e) = save_to_file(path, &fresh) {
                log::warn!("could not rewrite config: {}", e);
            }
            fresh
        }
        Err(e) => {
            log::warn!("{}, using defaults", e);
            HostConfig::default()
        }
    }
}
