//! Environment-backed configuration.
//!
//! Server settings have defaults and are overridden with `CINERANK_*`
//! environment variables. The session credentials keep the variable names the
//! service has always used: `SESSION_PASSWORD` (required), `SECRET_KEY` and
//! `SESSION_EXPIRATION` (optional with fallbacks).

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use tracing::warn;

/// Token lifetime applied when `SESSION_EXPIRATION` is unset or unparseable.
pub const DEFAULT_SESSION_EXPIRATION_HOURS: i64 = 24;

/// Service configuration resolved once at process start.
///
/// Use [`Config::from_env`] to read environment overrides on top of defaults.
/// The resolved values are immutable for the process lifetime; request
/// handlers only ever see the derived [`SessionSecrets`](crate::auth::SessionSecrets),
/// never this struct.
#[derive(Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Token signing secret. Generated randomly when `SECRET_KEY` is unset.
    pub secret_key: String,

    /// Plaintext session password from `SESSION_PASSWORD`.
    ///
    /// Hashed once at startup; never logged. Required.
    pub session_password: String,

    /// Token lifetime in hours. Default: 24.
    pub session_expiration_hours: i64,

    /// Path to the linear model JSON file. `None` runs the stub model.
    pub model_path: Option<PathBuf>,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bind_addr", &self.bind_addr)
            .field("secret_key", &"<redacted>")
            .field("session_password", &"<redacted>")
            .field("session_expiration_hours", &self.session_expiration_hours)
            .field("model_path", &self.model_path)
            .finish()
    }
}

impl Config {
    const ENV_PORT: &'static str = "CINERANK_PORT";
    const ENV_BIND_ADDR: &'static str = "CINERANK_BIND_ADDR";
    const ENV_SECRET_KEY: &'static str = "SECRET_KEY";
    const ENV_SESSION_PASSWORD: &'static str = "SESSION_PASSWORD";
    const ENV_SESSION_EXPIRATION: &'static str = "SESSION_EXPIRATION";
    const ENV_MODEL_PATH: &'static str = "CINERANK_MODEL_PATH";

    /// Loads configuration from environment variables.
    ///
    /// Fails only on unparseable server settings or a missing
    /// `SESSION_PASSWORD`; every other setting falls back to a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = Self::parse_port_from_env(8080)?;
        let bind_addr = Self::parse_bind_addr_from_env(IpAddr::V4(std::net::Ipv4Addr::new(
            127, 0, 0, 1,
        )))?;

        let secret_key = match env::var(Self::ENV_SECRET_KEY) {
            Ok(value) if !value.is_empty() => value,
            _ => {
                warn!(
                    "The {} environment variable is not set. Setting it to random.",
                    Self::ENV_SECRET_KEY
                );
                uuid::Uuid::new_v4().simple().to_string()
            }
        };

        let session_password = env::var(Self::ENV_SESSION_PASSWORD).map_err(|_| {
            ConfigError::MissingEnvVar {
                name: Self::ENV_SESSION_PASSWORD,
            }
        })?;

        let session_expiration_hours = Self::parse_expiration_from_env();
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);

        Ok(Self {
            port,
            bind_addr,
            secret_key,
            session_password,
            session_expiration_hours,
            model_path,
        })
    }

    /// Validates the model path (does not read the file).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_expiration_from_env() -> i64 {
        match env::var(Self::ENV_SESSION_EXPIRATION) {
            Ok(value) => match value.parse::<i64>() {
                Ok(hours) if hours > 0 => hours,
                _ => {
                    warn!(
                        "The {} environment variable is not a valid integer. \
                         Setting it to {} hours.",
                        Self::ENV_SESSION_EXPIRATION,
                        DEFAULT_SESSION_EXPIRATION_HOURS
                    );
                    DEFAULT_SESSION_EXPIRATION_HOURS
                }
            },
            Err(_) => {
                warn!(
                    "The {} environment variable is not set. Setting it to {} hours.",
                    Self::ENV_SESSION_EXPIRATION,
                    DEFAULT_SESSION_EXPIRATION_HOURS
                );
                DEFAULT_SESSION_EXPIRATION_HOURS
            }
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(any(test, feature = "mock"))]
impl Config {
    /// Builds a config suitable for tests without touching the environment.
    pub fn for_tests(session_password: &str) -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            secret_key: "test-secret-key".to_string(),
            session_password: session_password.to_string(),
            session_expiration_hours: 1,
            model_path: None,
        }
    }
}
