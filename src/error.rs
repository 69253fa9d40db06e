use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid field '{0}', expected KEY=VALUE")]
    InvalidField(String),

    #[error("Project data must be a JSON object")]
    NotAnObject,

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No API URL found. Set PROJECT_BUILDER_API_URL or add api_url to the config file (see `project-builder init`)"
    )]
    MissingApiUrl,
}

pub type Result<T> = std::result::Result<T, BuilderError>;
