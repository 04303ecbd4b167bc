//! Loop-local notification state.

/// Tracks the last delivered notification to suppress duplicates.
///
/// Comparison is exact string equality. The state lives only for the
/// lifetime of the poll loop; a process restart resets it.
#[derive(Debug, Default)]
pub struct LastNotified(Option<String>);

impl LastNotified {
    /// Creates empty state; the first notification is always sent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the given text differs from the last sent one.
    #[must_use]
    pub fn should_send(&self, text: &str) -> bool {
        self.0.as_deref() != Some(text)
    }

    /// Records a successfully delivered notification.
    pub fn mark_sent(&mut self, text: &str) {
        self.0 = Some(text.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_notification_is_sent() {
        let state = LastNotified::new();
        assert!(state.should_send("anything"));
    }

    #[test]
    fn test_identical_notification_is_suppressed() {
        let mut state = LastNotified::new();

        // Two cycles with the same formatted string: only one send.
        assert!(state.should_send("status unchanged"));
        state.mark_sent("status unchanged");
        assert!(!state.should_send("status unchanged"));
    }

    #[test]
    fn test_changed_notification_is_sent() {
        let mut state = LastNotified::new();
        state.mark_sent("old status");
        assert!(state.should_send("new status"));
    }
}
