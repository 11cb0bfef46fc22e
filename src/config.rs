//! Configuration management for the auth server
//!
//! Values come from built-in defaults, then an optional `config.toml`,
//! then `AUTH_APP_*` environment variables (highest precedence).

use config::{Config, Environment, File};
use serde::Deserialize;

/// Default interface the HTTP listener binds to
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Default maximum request body size in bytes
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Configuration file looked up in the working directory (extension optional)
const CONFIG_FILE: &str = "config";

/// Environment variable prefix, e.g. `AUTH_APP_PORT=4000`
const ENV_PREFIX: &str = "AUTH_APP";

/// Server configuration. Loaded once at startup; changes need a restart.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    /// Largest JSON body accepted by the login/signup endpoints
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }
}

impl ServerConfig {
    /// Load configuration from `config.toml` with environment overrides.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from the given file path (missing file is fine).
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("body_limit_bytes", DEFAULT_BODY_LIMIT_BYTES as i64)?
            .add_source(File::with_name(config_path).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.bind_address.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "bind_address cannot be empty".into(),
            ));
        }

        if self.port == 0 {
            return Err(config::ConfigError::Message("port cannot be 0".into()));
        }

        if self.body_limit_bytes == 0 {
            return Err(config::ConfigError::Message(
                "body_limit_bytes must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Bind address and port as a socket address string
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.listen_address(), "127.0.0.1:3000");
    }

    #[test]
    fn zero_port_is_rejected() {
        let config = ServerConfig {
            port: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_bind_address_is_rejected() {
        let config = ServerConfig {
            bind_address: "  ".into(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_body_limit_is_rejected() {
        let config = ServerConfig {
            body_limit_bytes: 0,
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = ServerConfig::load_from("does-not-exist/nowhere").unwrap();
        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.body_limit_bytes, DEFAULT_BODY_LIMIT_BYTES);
    }
}
