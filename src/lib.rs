//! cardsearch
//!
//! Incremental search over a catalog of cards. As the query changes the
//! visible cards are narrowed in place by name prefix, while a debounced
//! lookup fetches ranked name suggestions from a remote endpoint. Replies
//! that arrive after the query has moved on are discarded.

pub mod catalog;
pub mod config;
pub mod coordinator;
pub mod debouncer;
pub mod error;
pub mod matcher;
pub mod suggest;
pub mod tui;
pub mod widgets;

#[cfg(test)]
mod test_utils;

pub use catalog::{Candidate, Item};
pub use coordinator::{CoordinatorPhase, QueryCoordinator, SearchView};
pub use debouncer::Debouncer;
pub use error::CardsearchError;
pub use suggest::{FetchError, HttpSuggestionClient, SuggestionSource};
