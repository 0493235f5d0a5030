//! Single best-effort HTTP GET for sample files.
//!
//! Uses the curl crate (libcurl). One attempt per URL, no retry: a failure is
//! reported to the caller, which falls back to writing a placeholder.

mod classify;
mod error;

pub use classify::{classify, FailureKind};
pub use error::FetchError;

use crate::config::EosConfig;
use std::time::Duration;

const USER_AGENT: &str = concat!("eosamples/", env!("CARGO_PKG_VERSION"));

/// Blocking GET client with the timeouts and size cap from config.
#[derive(Debug, Clone, Copy)]
pub struct HttpFetcher {
    pub connect_timeout: Duration,
    pub timeout: Duration,
    /// Bodies larger than this abort the transfer with `FetchError::TooLarge`.
    pub max_bytes: u64,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::from_config(&EosConfig::default())
    }
}

impl HttpFetcher {
    pub fn from_config(cfg: &EosConfig) -> Self {
        Self {
            connect_timeout: cfg.connect_timeout(),
            timeout: cfg.timeout(),
            max_bytes: cfg.max_sample_bytes,
        }
    }

    /// Fetches `url` into memory. Follows redirects. A 2xx response with an
    /// empty body is an error: a sample file must be non-empty.
    /// Runs in the current thread.
    pub fn get(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let mut body: Vec<u8> = Vec::new();
        let mut overflow = false;
        let limit = self.max_bytes;

        let mut easy = curl::easy::Easy::new();
        easy.url(url)?;
        easy.get(true)?;
        easy.follow_location(true)?;
        easy.max_redirections(10)?;
        easy.useragent(USER_AGENT)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;

        let performed = {
            let mut transfer = easy.transfer();
            transfer.write_function(|data| {
                if body.len() as u64 + data.len() as u64 > limit {
                    overflow = true;
                    return Ok(0); // abort transfer
                }
                body.extend_from_slice(data);
                Ok(data.len())
            })?;
            transfer.perform()
        };

        if overflow {
            return Err(FetchError::TooLarge { limit });
        }
        performed?;

        let code = easy.response_code()?;
        if !(200..300).contains(&code) {
            return Err(FetchError::Status(code));
        }
        if body.is_empty() {
            return Err(FetchError::Empty);
        }
        tracing::debug!(url, bytes = body.len(), "GET ok");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_copies_limits() {
        let mut cfg = EosConfig::default();
        cfg.connect_timeout_secs = 3;
        cfg.timeout_secs = 9;
        cfg.max_sample_bytes = 1024;
        let f = HttpFetcher::from_config(&cfg);
        assert_eq!(f.connect_timeout, Duration::from_secs(3));
        assert_eq!(f.timeout, Duration::from_secs(9));
        assert_eq!(f.max_bytes, 1024);
    }

    #[test]
    fn unreachable_host_is_transport_error() {
        let f = HttpFetcher {
            connect_timeout: Duration::from_secs(2),
            timeout: Duration::from_secs(2),
            max_bytes: 1024,
        };
        // Port 1 on loopback is not listening in test environments.
        let err = f.get("http://127.0.0.1:1/sample.bin").unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)), "{err:?}");
        assert_eq!(classify(&err), FailureKind::Connection);
    }
}
