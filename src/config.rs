use crate::core::{Result, StoreError};

/// Connection settings for the remote data sources.
///
/// Both values are supplied by the embedding application; the crate ships
/// no default base URL and no default credential.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL the microservice routes are resolved against.
    pub base_url: String,

    /// Value sent in the `X-API-KEY` header on every request.
    pub api_key: String,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            api_key: api_key.to_string(),
        }
    }

    /// Read the configuration from `STOREFRONT_BASE_URL` and
    /// `STOREFRONT_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("STOREFRONT_BASE_URL")
            .map_err(|_| StoreError::Validation("STOREFRONT_BASE_URL is not set".to_string()))?;
        let api_key = std::env::var("STOREFRONT_API_KEY")
            .map_err(|_| StoreError::Validation("STOREFRONT_API_KEY is not set".to_string()))?;

        let config = Self::new(&base_url, &api_key);
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(StoreError::Validation(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(StoreError::Validation(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        if self.api_key.is_empty() {
            return Err(StoreError::Validation(
                "api_key cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}
