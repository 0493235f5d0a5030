//! Fetch error type.

use thiserror::Error;

/// Why a sample GET did not produce a usable body.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (timeout, DNS, connection refused, TLS, ...).
    #[error("{0}")]
    Transport(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Status(u32),
    /// Body grew past the configured sample size cap.
    #[error("response body exceeds {limit} bytes")]
    TooLarge { limit: u64 },
    /// 2xx response with no body.
    #[error("empty response body")]
    Empty,
}
