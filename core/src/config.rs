//! Base-URL resolution for the shared HTTP client.
//!
//! The base URL is resolved once at startup: an explicit override wins,
//! then the `TODO_API_BASE_URL` environment variable, then the local
//! development address. Resolution cannot fail.

/// Environment variable consulted when no explicit base URL is given.
pub const BASE_URL_ENV: &str = "TODO_API_BASE_URL";

/// Address of a locally running backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8081";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Resolve from `explicit`, falling back to the environment and then to
    /// [`DEFAULT_BASE_URL`].
    pub fn resolve(explicit: Option<&str>) -> Self {
        let env = std::env::var(BASE_URL_ENV).ok();
        Self::resolve_from(explicit, env.as_deref())
    }

    /// Blank values count as unset.
    pub fn resolve_from(explicit: Option<&str>, env: Option<&str>) -> Self {
        let base_url = [explicit, env]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|v| !v.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        tracing::debug!(base_url, "resolved API base URL");
        Self::new(base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_value_wins() {
        let config = ClientConfig::resolve_from(Some("http://api.example"), Some("http://env"));
        assert_eq!(config.base_url, "http://api.example");
    }

    #[test]
    fn env_used_when_no_explicit_value() {
        let config = ClientConfig::resolve_from(None, Some("http://env:9000"));
        assert_eq!(config.base_url, "http://env:9000");
    }

    #[test]
    fn blank_values_fall_through_to_default() {
        let config = ClientConfig::resolve_from(Some("  "), Some(""));
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn nothing_set_gives_local_address() {
        assert_eq!(
            ClientConfig::resolve_from(None, None).base_url,
            "http://localhost:8081"
        );
    }
}
