use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::{BuilderError, Result};

pub const API_URL_ENV: &str = "PROJECT_BUILDER_API_URL";
pub const BASE_URL_ENV: &str = "PROJECT_BUILDER_BASE_URL";

const DEFAULT_BASE_URL: &str = "/";

#[derive(Deserialize, Serialize, Default, Debug, PartialEq)]
pub struct Config {
    pub api_url: Option<String>,
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| BuilderError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| BuilderError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "project-builder")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(BuilderError::NoConfigDir)
    }

    /// Get the backend URL with env var taking precedence over config file
    pub fn api_url(&self) -> Result<String> {
        pick(std::env::var(API_URL_ENV).ok(), self.api_url.as_deref())
            .ok_or(BuilderError::MissingApiUrl)
    }

    /// Routing base path, `/` when neither env nor file sets one
    pub fn base_url(&self) -> String {
        pick(std::env::var(BASE_URL_ENV).ok(), self.base_url.as_deref())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

// The value is taken as-is: an empty or malformed URL surfaces at request time.
fn pick(env: Option<String>, file: Option<&str>) -> Option<String> {
    env.or_else(|| file.map(String::from))
}
