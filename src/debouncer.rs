//! Debouncer
//!
//! Holds at most one pending action. Scheduling again before the deadline
//! replaces the pending action and re-arms the deadline, so only the most
//! recent action of a burst ever fires, and it fires exactly once.
//!
//! The debouncer owns no timer thread. The caller passes the current
//! `Instant` in and polls with [`Debouncer::fire_due`] from its event loop.

use std::time::{Duration, Instant};

/// An armed timer and the action it will release
#[derive(Debug)]
struct Pending<A> {
    action: A,
    deadline: Instant,
}

/// Delays an action until input has been quiet for a fixed interval
#[derive(Debug)]
pub struct Debouncer<A> {
    pending: Option<Pending<A>>,
}

impl<A> Debouncer<A> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm the timer for `action`, canceling whatever was pending
    pub fn schedule(&mut self, action: A, delay: Duration, now: Instant) {
        if self.pending.is_some() {
            log::trace!("Debounce re-armed, previous action dropped");
        }
        self.pending = Some(Pending {
            action,
            deadline: now + delay,
        });
    }

    /// Drop the pending action without running it
    pub fn cancel_pending(&mut self) {
        self.pending = None;
    }

    /// Release the pending action if its quiet period has elapsed
    pub fn fire_due(&mut self, now: Instant) -> Option<A> {
        match &self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending.take().map(|pending| pending.action)
            }
            _ => None,
        }
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending action becomes due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|pending| pending.deadline)
    }

    /// Time left before the pending action becomes due
    pub fn time_remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

impl<A> Default for Debouncer<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
