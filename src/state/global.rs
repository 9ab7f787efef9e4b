//! Global Application State
//!
//! Reactive state management using Leptos signals. Everything here is owned
//! by the component tree: created when the app mounts, dropped with it.

use leptos::*;

use super::feed::{FeedFrame, FeedWindows};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Sliding windows of raw messages and chart samples.
    pub windows: RwSignal<FeedWindows>,
    /// Live feed connection status.
    pub feed_connected: RwSignal<bool>,
    /// Frames received since the dashboard mounted (never evicted).
    pub total_received: RwSignal<u64>,
    /// Most recent structured frame, for the summary cards.
    pub latest_frame: RwSignal<Option<FeedFrame>>,
}

impl GlobalState {
    pub fn new() -> Self {
        Self {
            windows: create_rw_signal(FeedWindows::default()),
            feed_connected: create_rw_signal(false),
            total_received: create_rw_signal(0),
            latest_frame: create_rw_signal(None),
        }
    }

    /// Clear everything a dashboard view accumulates. Called when the view
    /// that owned the feed unmounts.
    pub fn reset(&self) {
        self.windows.set(FeedWindows::default());
        self.total_received.set(0);
        self.latest_frame.set(None);
    }

    /// Single ingest entry point for the feed connector.
    pub fn record_message(&self, text: &str) {
        self.total_received.update(|n| *n += 1);
        let frame = self.windows.try_update(|w| w.ingest(text)).flatten();
        if let Some(frame) = frame {
            self.latest_frame.set(Some(frame));
        }
    }
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    provide_context(GlobalState::new());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_message_feeds_windows_and_counter() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.record_message("plain text");
        state.record_message(r#"{"POT":"-11","SNR":"8","timestamp":"2025-01-01 10:00:00"}"#);

        assert_eq!(state.total_received.get_untracked(), 2);
        assert_eq!(state.windows.get_untracked().messages.len(), 2);
        assert_eq!(state.windows.get_untracked().samples.len(), 1);
        assert!(state.latest_frame.get_untracked().is_some());

        runtime.dispose();
    }

    #[test]
    fn reset_discards_view_state() {
        let runtime = create_runtime();
        let state = GlobalState::new();

        state.record_message(r#"{"POT":"-11","timestamp":"2025-01-01 10:00:00"}"#);
        state.reset();

        assert_eq!(state.total_received.get_untracked(), 0);
        assert!(state.windows.get_untracked().messages.is_empty());
        assert!(state.windows.get_untracked().samples.is_empty());
        assert!(state.latest_frame.get_untracked().is_none());

        runtime.dispose();
    }
}
