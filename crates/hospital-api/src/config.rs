//! API client configuration.
//!
//! The base URL is resolved once at process startup and passed into
//! [`HospitalApi`](crate::HospitalApi). Request handling never reads
//! process-wide environment variables, which keeps behaviour consistent in
//! multi-threaded runtimes and test harnesses.

use crate::error::{ApiError, ApiResult};

/// Default backend base URL when no override is provided.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Resolved connection settings for the backend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Create a new `ApiConfig` from a base URL.
    ///
    /// The URL must be non-empty and start with `http://` or `https://`.
    /// Trailing slashes are trimmed so endpoint paths can always be appended
    /// with a leading `/`.
    pub fn new(base_url: impl AsRef<str>) -> ApiResult<Self> {
        let trimmed = base_url.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ApiError::InvalidConfig("base URL cannot be empty".into()));
        }
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ApiError::InvalidConfig(format!(
                "base URL must start with http:// or https:// (got '{trimmed}')"
            )));
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_owned(),
        })
    }

    /// Resolve the configuration from an optional environment value.
    ///
    /// If `value` is `None` or empty/whitespace, the default base URL is used.
    pub fn from_env_value(value: Option<String>) -> ApiResult<Self> {
        let value = value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        match value {
            Some(url) => Self::new(url),
            None => Self::new(DEFAULT_BASE_URL),
        }
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join an endpoint path onto the base URL. `path` must start with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        debug_assert!(path.starts_with('/'), "endpoint paths must start with '/'");
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trims_trailing_slash() {
        let cfg = ApiConfig::new("http://localhost:8080/api/").expect("valid config");
        assert_eq!(cfg.base_url(), "http://localhost:8080/api");
        assert_eq!(cfg.endpoint("/doctores"), "http://localhost:8080/api/doctores");
    }

    #[test]
    fn new_rejects_empty_url() {
        let err = ApiConfig::new("   ").expect_err("expected validation failure");
        assert!(matches!(err, ApiError::InvalidConfig(_)));
    }

    #[test]
    fn new_rejects_non_http_scheme() {
        let err = ApiConfig::new("ftp://example.com").expect_err("expected validation failure");
        assert!(matches!(err, ApiError::InvalidConfig(_)));
    }

    #[test]
    fn from_env_value_falls_back_to_default() {
        let cfg = ApiConfig::from_env_value(None).expect("default config");
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);

        let cfg = ApiConfig::from_env_value(Some("  ".into())).expect("default config");
        assert_eq!(cfg.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn from_env_value_uses_override() {
        let cfg = ApiConfig::from_env_value(Some("https://hospital.example/api".into()))
            .expect("valid config");
        assert_eq!(cfg.base_url(), "https://hospital.example/api");
    }
}
