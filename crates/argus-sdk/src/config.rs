//! Public configuration for the Argus client.

use std::time::Duration;

/// Default base URL of the Argus web services.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/argusws";

/// Configuration for the Argus client.
///
/// Use the builder pattern methods to customize the client configuration.
///
/// # Example
///
/// ```
/// use argus_sdk::ArgusClientConfig;
/// use std::time::Duration;
///
/// let config = ArgusClientConfig::new()
///     .with_base_url("https://argus.example.com/argusws")
///     .with_timeout(Duration::from_secs(10))
///     .with_token("access-token");
/// ```
#[derive(Debug, Clone)]
pub struct ArgusClientConfig {
    /// Base URL of the Argus web services; resource paths are appended to it
    pub(crate) base_url: String,
    /// User agent string for HTTP requests
    pub(crate) user_agent: String,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Bearer access token sent with every request
    pub(crate) token: Option<String>,
}

impl Default for ArgusClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("argus-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
            token: None,
        }
    }
}

impl ArgusClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Argus web services.
    ///
    /// Defaults to `http://localhost:8080/argusws`.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the access token sent as a bearer credential.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional access token.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// The configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ArgusClientConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.user_agent.starts_with("argus-sdk/"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.token.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ArgusClientConfig::new()
            .with_base_url("https://argus.example.com/argusws")
            .with_user_agent("test-agent")
            .with_timeout(Duration::from_secs(5))
            .with_token("secret");

        assert_eq!(config.base_url(), "https://argus.example.com/argusws");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.token, Some("secret".to_string()));
    }

    #[test]
    fn test_optional_token() {
        let with_token = ArgusClientConfig::new().with_optional_token(Some("token".to_string()));
        assert_eq!(with_token.token, Some("token".to_string()));

        let without_token = ArgusClientConfig::new()
            .with_token("old")
            .with_optional_token(None);
        assert!(without_token.token.is_none());
    }
}
