//! Error taxonomy for backend calls.
//!
//! Three failure classes reach callers from this crate: transport failures
//! (connection refused, timeout, TLS), server rejections (non-2xx status,
//! with 404 split out so callers can treat missing records distinctly), and
//! response bodies that do not decode into the expected wire model.

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid API configuration: {0}")]
    InvalidConfig(String),

    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("no record found at {path}")]
    NotFound { path: String },

    #[error("server rejected request to {path} with status {status}")]
    Rejected { status: u16, path: String },

    #[error("failed to decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
