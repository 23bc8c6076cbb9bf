use std::net::AddrParseError;
use thiserror::Error;

/// Server start-up and runtime errors
///
/// Request-level failures use [`shared::AppError`]; this type only covers
/// the process around the router.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("invalid bind address {address}: {source}")]
    InvalidAddress {
        address: String,
        #[source]
        source: AddrParseError,
    },

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
