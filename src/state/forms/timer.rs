//! Single-shot deadline used to hide the success banner

use std::time::Duration;
use tokio::time::Instant;

/// Handle for a pending one-shot action.
///
/// The owner checks [`HideTimer::is_due`] against its clock; nothing runs
/// in the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTimer {
    deadline: Instant,
    cancelled: bool,
}

impl HideTimer {
    /// Schedule a deadline `after` from `now`
    pub fn schedule(now: Instant, after: Duration) -> Self {
        Self {
            deadline: now + after,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// True once `now` has reached the deadline, unless cancelled
    pub fn is_due(&self, now: Instant) -> bool {
        !self.cancelled && now >= self.deadline
    }
}
