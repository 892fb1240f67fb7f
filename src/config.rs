//! `yoda.toml` discovery and settings

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::converter::Scope;

pub const CONFIG_FILE: &str = "yoda.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read yoda.toml: {0}")]
    ConfigReadError(#[from] std::io::Error),

    #[error("Failed to parse yoda.toml: {0}")]
    ConfigParseError(#[from] toml::de::Error),
}

/// Settings for rewriting files on disk
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File extensions (without the dot) that are rewritten
    pub extensions: Vec<String>,
    /// Directory names never descended into
    pub exclude: Vec<String>,
    pub scope: Scope,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extensions: ["js", "jsx", "ts", "tsx", "mjs", "cjs"]
                .map(String::from)
                .to_vec(),
            exclude: ["node_modules", ".git", "dist", "build", "target"]
                .map(String::from)
                .to_vec(),
            scope: Scope::default(),
        }
    }
}

impl Config {
    /// Load the nearest `yoda.toml` above the current directory, falling back
    /// to defaults when there is none
    pub fn discover() -> Result<Self, ConfigError> {
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    pub fn discover_from(start: &Path) -> Result<Self, ConfigError> {
        match Self::find_config_file(start) {
            Some(path) => {
                log::debug!("Using config at {:?}", path);
                Self::load(&path)
            }
            None => {
                log::debug!("No {} found, using defaults", CONFIG_FILE);
                Ok(Self::default())
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    fn find_config_file(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Whether a file should be rewritten, judged by its extension
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.exclude.iter().any(|e| e == dir_name)
    }
}
