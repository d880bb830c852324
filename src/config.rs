// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Fintrack", "fintrack"));

const DEFAULT_API_URL: &str = "http://localhost:8080/api";
const DEFAULT_CURRENCY: &str = "₹";

/// Fixed client configuration: the API base address and the display
/// currency symbol. Not user-configurable at request time; changed only
/// via `fintrack config`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: DEFAULT_API_URL.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("config.json"))
}

/// Directory holding the persisted session (token and identity files).
pub fn session_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().join("session"))
}

/// Loads the config file, falling back to defaults when absent. The
/// `FINTRACK_API_URL` environment variable overrides the stored base URL.
pub fn load() -> Result<Config> {
    let mut cfg = load_stored()?;
    if let Ok(url) = std::env::var("FINTRACK_API_URL") {
        if !url.is_empty() {
            cfg.api_url = url;
        }
    }
    Ok(cfg)
}

/// The config file as written, without environment overrides. Mutating
/// commands go through this so an override never gets baked into the file.
pub fn load_stored() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(Config::default());
    }
    let raw =
        fs::read_to_string(&path).with_context(|| format!("Read config at {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Parse config at {}", path.display()))
}

pub fn save(cfg: &Config) -> Result<()> {
    let path = config_path()?;
    fs::write(&path, serde_json::to_string_pretty(cfg)?)
        .with_context(|| format!("Write config at {}", path.display()))?;
    Ok(())
}
