//! Display targets the validator writes into
//!
//! The validator never looks anything up by itself: it is handed one
//! [`FieldSink`] per field, a [`BannerSink`] and a [`Clock`] when it is
//! built, and only talks to the host through them.

use tokio::time::Instant;

/// A text input plus the error region attached to it
#[cfg_attr(test, mockall::automock)]
pub trait FieldSink {
    /// Current raw text of the input
    fn value(&self) -> String;

    /// Set the error text and show the region
    fn show_error(&mut self, message: &str);

    /// Clear the error text and hide the region
    fn hide_error(&mut self);

    /// Reset the input to empty
    fn clear_value(&mut self);
}

/// The transient "message sent" acknowledgment
#[cfg_attr(test, mockall::automock)]
pub trait BannerSink {
    fn set_visible(&mut self, visible: bool);
}

/// Source of time for the banner timer
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock backed by tokio's time driver, which tests can pause and advance
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Success banner shown after an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessBanner {
    pub text: String,
    visible: bool,
}

impl SuccessBanner {
    pub const DEFAULT_TEXT: &'static str = "Thank you! Your message has been sent successfully.";

    pub fn new() -> Self {
        Self {
            text: Self::DEFAULT_TEXT.to_string(),
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for SuccessBanner {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerSink for SuccessBanner {
    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_banner_starts_hidden() {
        let banner = SuccessBanner::default();
        assert!(!banner.is_visible());
        assert_eq!(banner.text, SuccessBanner::DEFAULT_TEXT);
    }

    #[test]
    fn test_banner_toggles() {
        let mut banner = SuccessBanner::new();
        banner.set_visible(true);
        assert!(banner.is_visible());
        banner.set_visible(false);
        assert!(!banner.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_follows_paused_time() {
        let clock = TokioClock;
        let start = clock.now();
        tokio::time::advance(Duration::from_millis(250)).await;
        assert_eq!(clock.now() - start, Duration::from_millis(250));
    }
}
