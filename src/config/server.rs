//! Listener, logging, and HTTP-layer settings for the roster service

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Port the school's frontend expects the service on.
pub const DEFAULT_PORT: u16 = 8000;

/// Upper bound accepted for `request_timeout_secs`.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

const DEFAULT_LOG_FILTER: &str = "info,activity_roster=debug,tower_http=info";

/// How the roster service listens and what it wraps requests in.
///
/// Every field falls back to [`ServerConfig::default`], so an empty
/// environment yields a development server on `0.0.0.0:8000`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface the listener binds (`ACTIVITY_ROSTER__SERVER__HOST`)
    pub host: String,

    pub port: u16,

    /// Selects JSON log output when `production`
    pub environment: Environment,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,

    /// Applied to every request by the timeout layer
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins allowed to call the API; `*` for any
    pub cors_origins: Option<String>,

    /// Frontend assets mounted at `/static`, with `/` redirecting to `index.html`
    pub static_dir: Option<PathBuf>,
}

/// Deployment stage the service runs in
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            environment: Environment::default(),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            request_timeout_secs: 30,
            cors_origins: None,
            static_dir: None,
        }
    }
}

impl ServerConfig {
    /// Address handed to the TCP listener.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let addr = format!("{}:{}", self.host, self.port);
        addr.parse()
            .map_err(|_| ValidationError::InvalidSocketAddr(addr))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Configured CORS origins, trimmed, with empty entries dropped.
    pub fn cors_origins_list(&self) -> Vec<String> {
        let Some(raw) = &self.cors_origins else {
            return Vec::new();
        };

        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    /// Reject settings the listener or the HTTP layers cannot use.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        if let Some(dir) = &self.static_dir {
            if dir.as_os_str().is_empty() {
                return Err(ValidationError::EmptyStaticDir);
            }
        }

        let origins = self.cors_origins_list();
        if origins.len() > 1 && origins.iter().any(|origin| origin == "*") {
            return Err(ValidationError::WildcardCorsOriginInList);
        }

        self.socket_addr().map(|_| ())
    }
}
