//! Classify fetch failures for console and log messages.

use super::FetchError;
use std::fmt;

/// Coarse failure category: transport problems vs. server answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Connect or transfer timed out.
    Timeout,
    /// Network-level failure (connection refused/reset, DNS, TLS).
    Connection,
    /// Server answered with a non-2xx status.
    Status(u32),
    /// Body was empty or over the size cap.
    Body,
    Other,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Connection => write!(f, "connection error"),
            FailureKind::Status(code) => write!(f, "HTTP {}", code),
            FailureKind::Body => write!(f, "unusable body"),
            FailureKind::Other => write!(f, "error"),
        }
    }
}

/// Classify a curl error.
pub fn classify_curl_error(e: &curl::Error) -> FailureKind {
    if e.is_operation_timedout() {
        return FailureKind::Timeout;
    }
    if e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_ssl_connect_error()
        || e.is_peer_failed_verification()
        || e.is_read_error()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return FailureKind::Connection;
    }
    FailureKind::Other
}

pub fn classify(e: &FetchError) -> FailureKind {
    match e {
        FetchError::Transport(ce) => classify_curl_error(ce),
        FetchError::Status(code) => FailureKind::Status(*code),
        FetchError::TooLarge { .. } | FetchError::Empty => FailureKind::Body,
    }
}
