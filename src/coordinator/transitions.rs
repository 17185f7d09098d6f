//! Input-driven transitions
//!
//! Triggers fed in by the presentation adapter. None of them fail: every
//! path leaves the coordinator in a well-defined phase.

use std::time::Instant;

use super::{CoordinatorPhase, QueryCoordinator, SearchView};
use crate::catalog::Candidate;

impl<V: SearchView> QueryCoordinator<V> {
    /// The input text changed
    ///
    /// Filters the grid immediately, then either closes the dropdown (empty
    /// query) or arms a debounced lookup. Text that trims to the last
    /// accepted query is ignored.
    pub fn on_input(&mut self, raw: &str, now: Instant) {
        let query = raw.trim();
        if query == self.last_accepted_query {
            return;
        }

        self.last_accepted_query = query.to_string();
        self.refilter_items();
        self.invalidate_request();

        if self.last_accepted_query.is_empty() {
            self.debouncer.cancel_pending();
            self.close_suggestions();
            return;
        }

        self.phase = CoordinatorPhase::Pending;
        self.debouncer
            .schedule(self.last_accepted_query.clone(), self.debounce_delay, now);
    }

    /// A suggestion was chosen from the dropdown
    ///
    /// The input takes the candidate's name and the grid is filtered to it.
    /// No lookup is issued for a selection that is already known.
    pub fn on_suggestion_picked(&mut self, candidate: &Candidate) {
        log::debug!("Picked suggestion {:?} ({})", candidate.name, candidate.detail_path());

        self.view.set_query(&candidate.name);
        self.accept_without_lookup(candidate.name.trim().to_string());
    }

    /// Click outside the input and dropdown, or an explicit close
    ///
    /// The grid filter is left as it is.
    pub fn on_dismiss(&mut self) {
        self.debouncer.cancel_pending();
        self.invalidate_request();
        self.close_suggestions();
    }

    /// Explicit confirm (Enter)
    ///
    /// Closes the dropdown and re-filters the grid from the input's current
    /// text, which may be ahead of the debounced state.
    pub fn on_submit(&mut self) {
        self.on_dismiss();
        let query = self.view.query().trim().to_string();
        self.last_accepted_query = query;
        self.refilter_items();
    }

    /// Clear the input, close the dropdown and show every item
    pub fn on_reset(&mut self) {
        self.view.set_query("");
        self.accept_without_lookup(String::new());
    }

    fn accept_without_lookup(&mut self, query: String) {
        self.debouncer.cancel_pending();
        self.invalidate_request();
        self.last_accepted_query = query;
        self.refilter_items();
        self.close_suggestions();
    }
}
