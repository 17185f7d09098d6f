use std::fmt;

/// Where the suggestion dropdown stands relative to the current query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoordinatorPhase {
    /// Nothing shown, nothing scheduled
    #[default]
    Idle,
    /// A lookup is armed and waiting out the debounce delay
    Pending,
    /// A lookup is in flight; the previous set, if any, stays on screen
    Fetching,
    /// A non-empty suggestion set is shown
    Displaying,
    /// The last lookup found nothing or failed; nothing shown
    Suppressed,
}

impl CoordinatorPhase {
    pub fn label(self) -> &'static str {
        match self {
            CoordinatorPhase::Idle => "idle",
            CoordinatorPhase::Pending => "pending",
            CoordinatorPhase::Fetching => "fetching",
            CoordinatorPhase::Displaying => "suggestions",
            CoordinatorPhase::Suppressed => "no suggestions",
        }
    }
}

impl fmt::Display for CoordinatorPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
