//! Suggestion lookup
//!
//! The remote name lookup, the messages exchanged with the background worker
//! that performs it, and the worker itself.

pub mod client;
pub mod types;
pub mod worker;

pub use client::{HttpSuggestionClient, SuggestionSource};
pub use types::{FetchError, RequestToken, SuggestRequest, SuggestResponse};
pub use worker::spawn_worker;
