use std::fmt;

use thiserror::Error;

use crate::catalog::Candidate;

/// Why a suggestion lookup failed
///
/// The variants exist for logging. Callers treat every failure the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Network unreachable, connection refused, timeout
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-success status or an unreadable body
    #[error("Protocol error: {0}")]
    Protocol(String),
}

/// Sequence number tagging each suggestion request
///
/// Only a reply carrying the coordinator's latest token may touch the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// The token after this one
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Messages sent to the suggestion worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestRequest {
    /// Look up suggestions for `query`
    Fetch { token: RequestToken, query: String },
    /// Abandon the lookup tagged with `token`, if still running
    Cancel { token: RequestToken },
}

/// Reply from the suggestion worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestResponse {
    pub token: RequestToken,
    /// Query the lookup was issued for
    pub query: String,
    pub result: Result<Vec<Candidate>, FetchError>,
}
