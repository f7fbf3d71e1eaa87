//! Endpoint browser behavior
//!
//! Selecting a row copies its fully qualified URL to the clipboard and toggles the row's
//! expanded block. A successful copy lights the row's copy indicator, which a background
//! timer turns off again after [`COPY_INDICATOR_DURATION`] unless a newer copy replaced it.

use crate::actions::{apply_action, AppAction};
use crate::clipboard::ClipboardWriter;
use crate::state::{read_state, write_state, SharedState};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

pub const COPY_INDICATOR_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug)]
pub struct EndpointBrowser<C> {
    state: SharedState,
    clipboard: C,
    /// Timer that will clear the copy indicator, at most one alive
    pending_clear: Option<JoinHandle<()>>,
}

impl<C: ClipboardWriter> EndpointBrowser<C> {
    pub fn new(state: SharedState, clipboard: C) -> Self {
        Self {
            state,
            clipboard,
            pending_clear: None,
        }
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// Copy the row's URL, then toggle its expansion whatever the copy outcome.
    ///
    /// Must be called from within a tokio runtime, the indicator timer is a spawned task.
    pub fn select_row(&mut self, index: usize) {
        let url = {
            let state = read_state(&self.state);
            match state.endpoint(index) {
                Some(endpoint) => endpoint.full_url(&state.dashboard.base_url),
                None => {
                    tracing::debug!("Ignoring selection of missing row {}", index);
                    return;
                }
            }
        };

        match self.clipboard.write_text(&url) {
            Ok(()) => {
                tracing::info!("Copied {}", url);
                let generation = {
                    let mut state = write_state(&self.state);
                    apply_action(AppAction::MarkCopied(index), &mut state);
                    state.ui.copy_generation
                };
                self.arm_clear_timer(generation);
            }
            Err(e) => {
                tracing::warn!("Failed to copy {} to clipboard: {}", url, e);
            }
        }

        let mut state = write_state(&self.state);
        apply_action(AppAction::ToggleExpanded(index), &mut state);
        tracing::debug!("Expanded row is now {:?}", state.ui.expanded_row);
    }

    fn arm_clear_timer(&mut self, generation: u64) {
        self.cancel_pending_clear();

        let state = Arc::clone(&self.state);
        self.pending_clear = Some(tokio::spawn(async move {
            tokio::time::sleep(COPY_INDICATOR_DURATION).await;
            let mut state = write_state(&state);
            apply_action(AppAction::ClearCopied { generation }, &mut state);
        }));
    }
}

impl<C> EndpointBrowser<C> {
    fn cancel_pending_clear(&mut self) {
        if let Some(handle) = self.pending_clear.take() {
            handle.abort();
        }
    }

    /// Stop the pending timer so nothing touches the state after the view is gone
    pub fn shutdown(&mut self) {
        self.cancel_pending_clear();
    }
}

impl<C> Drop for EndpointBrowser<C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::testing::FakeClipboard;
    use crate::config::DashboardConfig;
    use crate::state::AppState;
    use crate::types::{EndpointDescriptor, HttpMethod};
    use std::sync::RwLock;
    use tokio::time::sleep;

    fn create_browser(clipboard: FakeClipboard) -> EndpointBrowser<FakeClipboard> {
        let dashboard = DashboardConfig {
            base_url: "https://api.example.com".to_string(),
            endpoints: vec![
                EndpointDescriptor::new(HttpMethod::Get, "/words/{word}/count", "Count"),
                EndpointDescriptor::new(HttpMethod::Post, "/find-words", "Find words"),
                EndpointDescriptor::new(HttpMethod::Get, "/stats", "Stats"),
            ],
            ..DashboardConfig::default()
        };
        let state = Arc::new(RwLock::new(AppState::new(dashboard)));
        EndpointBrowser::new(state, clipboard)
    }

    fn copied_row(browser: &EndpointBrowser<FakeClipboard>) -> Option<usize> {
        read_state(browser.state()).ui.copied_row
    }

    fn expanded_row(browser: &EndpointBrowser<FakeClipboard>) -> Option<usize> {
        read_state(browser.state()).ui.expanded_row
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_row_writes_full_url() {
        let clipboard = FakeClipboard::default();
        let mut browser = create_browser(clipboard.clone());

        browser.select_row(0);

        assert_eq!(
            clipboard.written(),
            vec!["https://api.example.com/words/{word}/count"]
        );
        assert_eq!(copied_row(&browser), Some(0));
        assert_eq!(expanded_row(&browser), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_select_row_twice_collapses() {
        let mut browser = create_browser(FakeClipboard::default());

        browser.select_row(1);
        browser.select_row(1);

        assert_eq!(expanded_row(&browser), None);
        assert_eq!(copied_row(&browser), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_copy_indicator_clears_after_timeout() {
        let mut browser = create_browser(FakeClipboard::default());

        browser.select_row(0);

        sleep(Duration::from_millis(1999)).await;
        assert_eq!(copied_row(&browser), Some(0));

        sleep(Duration::from_millis(2)).await;
        assert_eq!(copied_row(&browser), None);
        // expansion is not tied to the timer
        assert_eq!(expanded_row(&browser), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_copy_supersedes_timer() {
        let mut browser = create_browser(FakeClipboard::default());

        browser.select_row(0);
        sleep(Duration::from_millis(1500)).await;
        browser.select_row(2);

        // first timer would have fired at 2000ms
        sleep(Duration::from_millis(600)).await;
        assert_eq!(copied_row(&browser), Some(2));

        // second timer fires at 3500ms
        sleep(Duration::from_millis(1500)).await;
        assert_eq!(copied_row(&browser), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_copy_keeps_indicator_but_toggles_expansion() {
        let clipboard = FakeClipboard::default();
        let mut browser = create_browser(clipboard.clone());

        browser.select_row(0);
        clipboard.set_failing(true);
        browser.select_row(1);

        assert_eq!(copied_row(&browser), Some(0));
        assert_eq!(expanded_row(&browser), Some(1));
        assert_eq!(clipboard.written().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_copy_from_clean_state() {
        let mut browser = create_browser(FakeClipboard::failing());

        browser.select_row(2);

        assert_eq!(copied_row(&browser), None);
        assert_eq!(expanded_row(&browser), Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_row_is_ignored() {
        let clipboard = FakeClipboard::default();
        let mut browser = create_browser(clipboard.clone());

        browser.select_row(42);

        assert!(clipboard.written().is_empty());
        assert_eq!(copied_row(&browser), None);
        assert_eq!(expanded_row(&browser), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_clear() {
        let mut browser = create_browser(FakeClipboard::default());

        browser.select_row(0);
        browser.shutdown();

        sleep(Duration::from_millis(2500)).await;
        assert_eq!(copied_row(&browser), Some(0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_clear() {
        let browser_state;
        {
            let mut browser = create_browser(FakeClipboard::default());
            browser.select_row(1);
            browser_state = Arc::clone(browser.state());
        }

        sleep(Duration::from_millis(2500)).await;
        assert_eq!(read_state(&browser_state).ui.copied_row, Some(1));
    }
}
