use std::sync::Arc;
use std::time::{Duration, Instant};

use super::search_pane::SearchPane;
use crate::catalog::Item;
use crate::config::SearchConfig;
use crate::coordinator::QueryCoordinator;
use crate::suggest::SuggestionSource;

/// Longest the event loop waits for input before checking on lookups
const MAX_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Terminal application state
pub struct App {
    pub coordinator: QueryCoordinator<SearchPane>,
    /// One-off message for the status line (e.g. a config warning)
    pub notice: Option<String>,
    pub(super) should_quit: bool,
}

impl App {
    pub fn new(config: &SearchConfig, items: Vec<Item>) -> Self {
        Self {
            coordinator: QueryCoordinator::new(config, SearchPane::new(), items),
            notice: None,
            should_quit: false,
        }
    }

    /// Start the suggestion worker
    pub fn connect(&mut self, source: Arc<dyn SuggestionSource>) -> std::io::Result<()> {
        self.coordinator.connect(source)
    }

    pub fn pane(&self) -> &SearchPane {
        self.coordinator.view()
    }

    /// Issue due lookups and apply replies; returns true if anything changed
    pub fn tick(&mut self, now: Instant) -> bool {
        let fetched = self.coordinator.tick(now);
        let applied = self.coordinator.poll_responses();
        fetched || applied
    }

    /// How long to wait for the next terminal event
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.coordinator
            .time_until_due(now)
            .map_or(MAX_POLL_INTERVAL, |remaining| remaining.min(MAX_POLL_INTERVAL))
    }

    /// Items passing the current filter, in catalog order
    pub fn visible_items(&self) -> Vec<&Item> {
        let pane = self.pane();
        self.coordinator
            .items()
            .iter()
            .filter(|item| pane.is_visible(&item.id))
            .collect()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod app_tests;
