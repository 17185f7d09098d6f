//! HTTP suggestion client
//!
//! One `GET <endpoint>?q=<query>` per call. Rate control is the caller's job.

use std::time::Duration;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use super::types::FetchError;
use crate::catalog::{Candidate, parse_candidates};
use crate::config::SearchConfig;

/// Anything that can turn a query into suggestion candidates
///
/// The returned future must not borrow `self` so the worker can spawn it.
pub trait SuggestionSource: Send + Sync {
    fn fetch_suggestions(&self, query: String) -> BoxFuture<'static, Result<Vec<Candidate>, FetchError>>;
}

/// Suggestion lookup over HTTP
#[derive(Debug, Clone)]
pub struct HttpSuggestionClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSuggestionClient {
    /// Create a client for `endpoint` with a per-request timeout
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self, FetchError> {
        Self::new(config.suggest_url(), config.request_timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl SuggestionSource for HttpSuggestionClient {
    fn fetch_suggestions(&self, query: String) -> BoxFuture<'static, Result<Vec<Candidate>, FetchError>> {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        async move {
            let response = client
                .get(&endpoint)
                .query(&[("q", query.as_str())])
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Protocol(format!("unexpected status {}", status)));
            }

            let payload: Value = response
                .json()
                .await
                .map_err(|e| FetchError::Protocol(e.to_string()))?;

            Ok(parse_candidates(&payload))
        }
        .boxed()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
