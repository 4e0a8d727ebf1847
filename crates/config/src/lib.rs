//! Configuration management for Feedback Hub

use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP service configuration
    pub service: ServiceConfig,

    /// Document storage configuration
    pub storage: StorageConfig,

    /// Admin authentication configuration
    pub auth: AuthConfig,

    /// Observability settings
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// Environment variables prefixed with `FEEDBACK_` override file values,
    /// with `__` separating sections (e.g. `FEEDBACK_SERVICE__PORT=8080`).
    pub fn load(config_path: Option<PathBuf>) -> Result<Self> {
        let mut figment = Figment::new();

        if let Some(path) = config_path {
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment.merge(Env::prefixed("FEEDBACK_").split("__"));

        figment
            .extract()
            .map_err(|e| ConfigError::LoadError(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.service.port == 0 {
            return Err(ConfigError::ValidationError(
                "Invalid service port".to_string(),
            ));
        }

        if self.storage.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "Storage data directory required".to_string(),
            ));
        }

        if self.auth.admin_token.is_empty() {
            return Err(ConfigError::ValidationError(
                "Admin token required".to_string(),
            ));
        }

        Ok(())
    }
}

/// HTTP service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Service name reported by the health endpoint
    pub name: String,

    /// Bind host
    pub host: String,

    /// Bind port
    pub port: u16,

    /// Origins allowed by CORS
    pub cors_origins: Vec<String>,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "feedback-hub".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: vec!["http://localhost:3000".to_string()],
            request_timeout_secs: 30,
        }
    }
}

/// Document storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the two JSON documents
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
        }
    }
}

/// Admin authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Static bearer token accepted for admin endpoints
    pub admin_token: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            admin_token: "change-me".to_string(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level filter
    pub log_level: String,

    /// Enable structured JSON logging
    pub json_logging: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json_logging: false,
        }
    }
}
