//! Configuration loading and management
//!
//! The service reads an optional YAML file, then lets a few environment
//! variables override it:
//!
//! | Variable | Field |
//! |---|---|
//! | `ORDER_SERVICE_BIND_ADDRESS` | `server.bind_address` |
//! | `ORDER_SERVICE_STORAGE` | `storage.backend` |
//! | `DATABASE_URL` | `storage.database_url` |

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{SocketAddr, ToSocketAddrs};
use std::path::Path;
use std::str::FromStr;

pub const BIND_ADDRESS_ENV: &str = "ORDER_SERVICE_BIND_ADDRESS";
pub const STORAGE_BACKEND_ENV: &str = "ORDER_SERVICE_STORAGE";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address the listener binds to, `host:port` (e.g., "127.0.0.1:8080" or
    /// "localhost:8080")
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
        }
    }
}

/// Which repository implementation backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageBackend {
    #[default]
    InMemory,
    Postgres,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "in_memory" | "in-memory" | "memory" => Ok(StorageBackend::InMemory),
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            other => Err(ConfigError::InvalidValue {
                field: "storage.backend".to_string(),
                message: format!("unknown backend '{}'", other),
            }),
        }
    }
}

/// Repository settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,

    /// Connection string, required by the postgres backend
    pub database_url: Option<String>,

    /// Upper bound for pooled database connections
    pub max_connections: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::InMemory,
            database_url: None,
            max_connections: 5,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Complete configuration of the order service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary variable lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(BIND_ADDRESS_ENV) {
            self.server.bind_address = addr;
        }
        if let Some(backend) = lookup(STORAGE_BACKEND_ENV) {
            self.storage.backend = backend.parse()?;
        }
        if let Some(url) = lookup(DATABASE_URL_ENV) {
            self.storage.database_url = Some(url);
        }
        Ok(())
    }

    /// Check the configuration for values the service cannot start with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_address()?;

        if self.storage.max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                field: "storage.max_connections".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        if self.storage.backend == StorageBackend::Postgres
            && self
                .storage
                .database_url
                .as_deref()
                .is_none_or(|url| url.trim().is_empty())
        {
            return Err(ConfigError::MissingField {
                field: "storage.database_url".to_string(),
            });
        }

        Ok(())
    }

    /// First socket address the listener address resolves to
    ///
    /// Host names are resolved the same way `TcpListener::bind` does.
    pub fn bind_address(&self) -> Result<SocketAddr, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            field: "server.bind_address".to_string(),
            message,
        };

        self.server
            .bind_address
            .to_socket_addrs()
            .map_err(|e| invalid(e.to_string()))?
            .next()
            .ok_or_else(|| invalid("resolves to no address".to_string()))
    }
}
