//! Query coordination
//!
//! Owns the accepted query and keeps two outputs in step with it: the card
//! grid (filtered synchronously on every accepted change) and the suggestion
//! dropdown (filled from debounced background lookups).
//!
//! All transitions run on the input thread. The only concurrency is between
//! lookups in flight on the worker and newer input; it is reconciled by
//! [`RequestToken`] comparison alone. A reply is applied only when its token
//! equals the latest token at arrival.

mod phase;
mod response;
mod transitions;
mod view;

use std::sync::mpsc::Receiver;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

pub use phase::CoordinatorPhase;
pub use response::build_suggestion_set;
pub use view::SearchView;

use crate::catalog::{Candidate, Item};
use crate::config::SearchConfig;
use crate::debouncer::Debouncer;
use crate::matcher;
use crate::suggest::{RequestToken, SuggestRequest, SuggestResponse, SuggestionSource, spawn_worker};

/// Incremental search state machine
pub struct QueryCoordinator<V: SearchView> {
    view: V,
    items: Vec<Item>,
    debounce_delay: Duration,
    max_suggestions: usize,
    phase: CoordinatorPhase,
    /// Trimmed text of the last accepted input
    last_accepted_query: String,
    /// Armed lookup; the payload is the query to fetch
    debouncer: Debouncer<String>,
    /// Token of the most recent request; replies with any other token are stale
    latest_token: RequestToken,
    /// Request the worker is still working on, if any
    in_flight: Option<RequestToken>,
    /// Suggestion set currently published to the view
    suggestions: Vec<Candidate>,
    visible_count: usize,
    request_tx: Option<UnboundedSender<SuggestRequest>>,
    response_rx: Option<Receiver<SuggestResponse>>,
}

impl<V: SearchView> QueryCoordinator<V> {
    /// Create a coordinator over `items`, all initially visible
    ///
    /// No lookups are possible until a worker is attached with
    /// [`set_channels`](Self::set_channels) or [`connect`](Self::connect).
    pub fn new(config: &SearchConfig, view: V, items: Vec<Item>) -> Self {
        let mut coordinator = Self {
            view,
            visible_count: items.len(),
            items,
            debounce_delay: config.debounce_delay(),
            max_suggestions: config.max_suggestions,
            phase: CoordinatorPhase::Idle,
            last_accepted_query: String::new(),
            debouncer: Debouncer::new(),
            latest_token: RequestToken::default(),
            in_flight: None,
            suggestions: Vec::new(),
            request_tx: None,
            response_rx: None,
        };
        coordinator.refilter_items();
        coordinator
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<SuggestRequest>,
        response_rx: Receiver<SuggestResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Spawn a suggestion worker around `source` and attach to it
    pub fn connect(&mut self, source: Arc<dyn SuggestionSource>) -> std::io::Result<()> {
        let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        spawn_worker(source, request_rx, response_tx)?;
        self.set_channels(request_tx, response_rx);
        Ok(())
    }

    pub fn phase(&self) -> CoordinatorPhase {
        self.phase
    }

    pub fn last_accepted_query(&self) -> &str {
        &self.last_accepted_query
    }

    /// Suggestion set currently shown (empty when the dropdown is closed)
    pub fn suggestions(&self) -> &[Candidate] {
        &self.suggestions
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items passing the current filter
    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn latest_token(&self) -> RequestToken {
        self.latest_token
    }

    pub fn has_pending_debounce(&self) -> bool {
        self.debouncer.has_pending()
    }

    /// Time until the armed lookup is due, for sizing event-loop waits
    pub fn time_until_due(&self, now: std::time::Instant) -> Option<Duration> {
        self.debouncer.time_remaining(now)
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Re-run the prefix filter over every item against the accepted query
    fn refilter_items(&mut self) -> usize {
        let mut shown = 0;
        for item in &self.items {
            let visible = matcher::matches(&self.last_accepted_query, &item.name);
            self.view.set_item_visible(&item.id, visible);
            if visible {
                shown += 1;
            }
        }
        self.visible_count = shown;
        log::debug!("Filtering: {}/{} items shown", shown, self.items.len());
        shown
    }

    /// Publish a suggestion set (possibly empty) to the view
    fn publish_suggestions(&mut self, suggestions: Vec<Candidate>) {
        self.view.set_suggestions(&suggestions);
        self.suggestions = suggestions;
    }

    /// Close the dropdown and return to `Idle`
    fn close_suggestions(&mut self) {
        self.phase = CoordinatorPhase::Idle;
        self.publish_suggestions(Vec::new());
    }
}
