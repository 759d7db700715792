// src/config/config_load.rs
//
// loading config.toml

use super::config_types::{AnimationConfig, MessageConfig, StyleConfig, WindowConfig};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub message: MessageConfig,
    pub style: StyleConfig,
    pub animation: AnimationConfig,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    pub fn resolve_font_path(&self) -> Option<PathBuf> {
        if self.style.font_file.is_empty() {
            return None;
        }
        if Path::new(&self.style.font_file).is_absolute() {
            return Some(PathBuf::from(&self.style.font_file));
        }
        // If path is relative, resolve it relative to the executable or working directory
        let resolved = std::env::current_exe()
            .ok()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            .map(|exe_dir| exe_dir.join(&self.style.font_file))
            .unwrap_or_else(|| PathBuf::from(&self.style.font_file));
        Some(resolved)
    }
}
