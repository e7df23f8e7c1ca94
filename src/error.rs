//! Error type shared by every storefront module.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Invalid tenant name: {0}")]
    InvalidTenant(String),

    #[error("Invalid table number: {0}")]
    InvalidTable(String),

    #[error("Unknown {kind} option: {value}")]
    UnknownOption { kind: &'static str, value: String },

    #[error("Cannot reach storefront at {url}")]
    Unreachable { url: String },

    #[error("Connection to {url} timed out")]
    Timeout { url: String },

    #[error("Network error communicating with {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },

    #[error("Invalid JSON from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected payload: {0}")]
    Payload(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Cannot place an empty order")]
    EmptyCart,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorefrontError {
    /// Transport-level failures; a page maps these to its not-found state.
    pub fn is_connectivity(&self) -> bool {
        matches!(
            self,
            StorefrontError::Unreachable { .. }
                | StorefrontError::Timeout { .. }
                | StorefrontError::Network { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StorefrontError>;
