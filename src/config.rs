// src/config.rs
use std::env;
use thiserror::Error;

const BACKEND_URL_VAR: &str = "SUPABASE_DB_URL";
const SERVICE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// The two secrets every process needs to reach the hosted database.
#[derive(Clone)]
pub struct BackendConfig {
    url: String,
    service_key: String,
}

impl std::fmt::Debug for BackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendConfig")
            .field("url", &self.url)
            .field("service_key", &"<redacted>")
            .finish()
    }
}

impl BackendConfig {
    pub fn new(
        url: impl Into<String>,
        service_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let url = url.into().trim().to_string();
        let service_key = service_key.into().trim().to_string();

        if url.is_empty() {
            return Err(ConfigError::Missing(BACKEND_URL_VAR));
        }
        if service_key.is_empty() {
            return Err(ConfigError::Missing(SERVICE_KEY_VAR));
        }
        if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
            return Err(ConfigError::Invalid(format!(
                "{BACKEND_URL_VAR} must be a postgres:// connection URL"
            )));
        }

        Ok(Self { url, service_key })
    }

    /// Read both values from the environment. Either one missing is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var(BACKEND_URL_VAR).map_err(|_| ConfigError::Missing(BACKEND_URL_VAR))?;
        let service_key =
            env::var(SERVICE_KEY_VAR).map_err(|_| ConfigError::Missing(SERVICE_KEY_VAR))?;
        Self::new(url, service_key)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn service_key(&self) -> &str {
        &self.service_key
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    backend: BackendConfig,
    listen_addr: String,
    allowed_origins: Vec<String>,
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:5173".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates required keys.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let backend = BackendConfig::from_env()?;
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| parse_origins(&s))
            .filter(|origins| !origins.is_empty())
            .unwrap_or_else(default_allowed_origins);

        Ok(Self {
            backend,
            listen_addr,
            allowed_origins,
        })
    }

    pub fn backend(&self) -> &BackendConfig {
        &self.backend
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
