use crate::server::error::config::ConfigError;

/// Default `User-Agent` sent to the backend when `USER_AGENT` is unset
pub const DEFAULT_USER_AGENT: &str = concat!("skyegypt/", env!("CARGO_PKG_VERSION"));

pub struct Config {
    /// Base URL of the inventory backend without a trailing slash, e.g. `https://host/api`
    pub backend_api_url: String,
    pub user_agent: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend_api_url = std::env::var("BACKEND_API_URL")
            .map_err(|_| ConfigError::MissingEnvVar("BACKEND_API_URL".to_string()))?;

        let user_agent =
            std::env::var("USER_AGENT").unwrap_or_else(|_| DEFAULT_USER_AGENT.to_string());

        Ok(Self {
            backend_api_url: parse_base_url(&backend_api_url)?,
            user_agent,
        })
    }
}

/// Validates the backend base URL and strips any trailing slash
pub fn parse_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidEnvValue {
            var: "BACKEND_API_URL".to_string(),
            reason: format!("expected an http(s) URL, got {:?}", raw),
        });
    }

    Ok(trimmed.to_string())
}
