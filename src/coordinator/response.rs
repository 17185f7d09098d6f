//! Lookup dispatch and reply handling

use std::sync::mpsc::TryRecvError;
use std::time::Instant;

use super::{CoordinatorPhase, QueryCoordinator, SearchView};
use crate::catalog::Candidate;
use crate::matcher;
use crate::suggest::{SuggestRequest, SuggestResponse};

impl<V: SearchView> QueryCoordinator<V> {
    /// Advance time: issue the armed lookup once its quiet period is over
    ///
    /// Returns true if a lookup was issued.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debouncer.fire_due(now) {
            Some(query) => {
                self.do_fetch(query);
                true
            }
            None => false,
        }
    }

    /// Drain every reply the worker has sent so far
    ///
    /// Returns true if any reply was applied to the view.
    pub fn poll_responses(&mut self) -> bool {
        let mut applied = false;

        loop {
            let next = match &self.response_rx {
                Some(rx) => rx.try_recv(),
                None => break,
            };
            let response = match next {
                Ok(response) => response,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::debug!("Suggestion worker disconnected");
                    self.response_rx = None;
                    break;
                }
            };
            applied |= self.handle_response(response);
        }

        applied
    }

    /// Apply one reply if it answers the latest request
    ///
    /// Stale replies are dropped without touching phase or view. Returns true
    /// if the reply was applied.
    pub fn handle_response(&mut self, response: SuggestResponse) -> bool {
        if response.token != self.latest_token {
            log::trace!(
                "Dropping reply {} for {:?} (latest is {})",
                response.token,
                response.query,
                self.latest_token
            );
            return false;
        }

        self.in_flight = None;

        match response.result {
            Ok(candidates) => {
                let suggestions =
                    build_suggestion_set(&response.query, candidates, self.max_suggestions);
                if suggestions.is_empty() {
                    self.suppress();
                } else {
                    log::debug!(
                        "Showing {} suggestions for {:?}",
                        suggestions.len(),
                        response.query
                    );
                    self.phase = CoordinatorPhase::Displaying;
                    self.publish_suggestions(suggestions);
                }
            }
            Err(e) => {
                log::debug!("Suggestions suppressed for {:?}: {}", response.query, e);
                self.suppress();
            }
        }

        true
    }

    /// Issue a lookup for `query` under a fresh token
    fn do_fetch(&mut self, query: String) {
        self.latest_token = self.latest_token.next();
        let token = self.latest_token;
        self.phase = CoordinatorPhase::Fetching;

        let sent = match &self.request_tx {
            Some(tx) => tx.send(SuggestRequest::Fetch { token, query }).is_ok(),
            None => false,
        };

        if sent {
            self.in_flight = Some(token);
        } else {
            log::debug!("No suggestion worker, request {} suppressed", token);
            self.suppress();
        }
    }

    /// Make any outstanding reply stale and ask the worker to abandon it
    pub(super) fn invalidate_request(&mut self) {
        if let Some(token) = self.in_flight.take()
            && let Some(tx) = &self.request_tx
            && tx.send(SuggestRequest::Cancel { token }).is_ok()
        {
            log::debug!("Sent cancel for request {}", token);
        }
        self.latest_token = self.latest_token.next();
    }

    fn suppress(&mut self) {
        self.phase = CoordinatorPhase::Suppressed;
        self.publish_suggestions(Vec::new());
    }
}

/// Keep candidates whose name starts with `query`, in returned order, capped
pub fn build_suggestion_set(query: &str, candidates: Vec<Candidate>, max: usize) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|candidate| matcher::matches(query, &candidate.name))
        .take(max)
        .collect()
}
