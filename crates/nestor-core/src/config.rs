//! Application configuration
//!
//! Read once at startup from environment variables (with `.env` support
//! through dotenvy). Every field has a usable default so the server can
//! boot with zero configuration in development.

use serde::{Deserialize, Serialize};

use crate::error::NestorError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub alerts: AlertConfig,
    pub reports: ReportConfig,
    pub instance: InstanceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Optional YAML seed file loaded into the in-memory store at boot
    pub seed_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Days ahead of a deadline at which an upcoming alert fires
    pub lookahead_days: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Identifier of the report engine to mount ("template" is built in)
    pub engine: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstanceConfig {
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { seed_path: None }
    }
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self { lookahead_days: 7 }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            engine: "template".to_string(),
        }
    }
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            name: "NESTOR eco".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            store: StoreConfig::default(),
            alerts: AlertConfig::default(),
            reports: ReportConfig::default(),
            instance: InstanceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, NestorError> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(host) = std::env::var("NESTOR_HOST") {
            config.server.host = host;
        }
        if let Ok(port) = std::env::var("NESTOR_PORT") {
            config.server.port = port
                .parse()
                .map_err(|_| NestorError::Config(format!("invalid NESTOR_PORT: {}", port)))?;
        }
        if let Ok(seed) = std::env::var("NESTOR_SEED_PATH") {
            if !seed.is_empty() {
                config.store.seed_path = Some(seed);
            }
        }
        if let Ok(days) = std::env::var("NESTOR_ALERT_LOOKAHEAD_DAYS") {
            config.alerts.lookahead_days = days.parse().map_err(|_| {
                NestorError::Config(format!("invalid NESTOR_ALERT_LOOKAHEAD_DAYS: {}", days))
            })?;
        }
        if let Ok(engine) = std::env::var("NESTOR_REPORT_ENGINE") {
            config.reports.engine = engine;
        }
        if let Ok(name) = std::env::var("NESTOR_INSTANCE_NAME") {
            config.instance.name = name;
        }

        Ok(config)
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
