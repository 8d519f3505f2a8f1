/// AppLogsStore manages application logs displayed in the Logs view
use crate::actions::{Action, PanelId};
use crate::logger::LogBuffer;
use std::sync::{Arc, RwLock};

/// Internal state for application logs
#[derive(Debug, Clone, Default)]
pub struct AppLogsState {
    /// Formatted log lines
    pub logs: Vec<String>,

    /// Lines scrolled up from the most recent entry
    pub scroll_offset: usize,
}

/// Store that holds application log state
pub struct AppLogsStore {
    state: Arc<RwLock<AppLogsState>>,
    log_buffer: LogBuffer,
}

impl AppLogsStore {
    pub fn new(log_buffer: LogBuffer) -> Self {
        Self {
            state: Arc::new(RwLock::new(AppLogsState::default())),
            log_buffer,
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> AppLogsState {
        self.state.read().unwrap().clone()
    }

    /// Refresh logs from the buffer and handle scroll actions
    pub fn reduce(&self, action: &Action) {
        self.refresh_logs();

        match action {
            Action::SelectPanel(PanelId::Logs) => self.scroll_to_bottom(),
            Action::SelectNext(PanelId::Logs) => self.scroll_down(1),
            Action::SelectPrev(PanelId::Logs) => self.scroll_up(1),
            _ => {}
        }
    }

    fn refresh_logs(&self) {
        let logs = self.log_buffer.get_logs();
        let mut state = self.state.write().unwrap();
        state.logs = logs;
    }

    /// Scroll towards the most recent logs
    pub fn scroll_down(&self, amount: usize) {
        let mut state = self.state.write().unwrap();
        state.scroll_offset = state.scroll_offset.saturating_sub(amount);
    }

    /// Scroll towards older logs
    pub fn scroll_up(&self, amount: usize) {
        let mut state = self.state.write().unwrap();
        let max = state.logs.len().saturating_sub(1);
        state.scroll_offset = state.scroll_offset.saturating_add(amount).min(max);
    }

    /// Reset scroll to bottom (most recent logs)
    pub fn scroll_to_bottom(&self) {
        let mut state = self.state.write().unwrap();
        state.scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogEntry;

    fn entry(message: &str) -> LogEntry {
        LogEntry {
            timestamp: "2024-01-01 00:00:00.000".to_string(),
            level: "INFO".to_string(),
            target: "moderation_tui".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_refreshes_from_buffer_and_scrolls_within_bounds() {
        let buffer = LogBuffer::with_capacity(10);
        buffer.add_log(entry("one"));
        buffer.add_log(entry("two"));
        let store = AppLogsStore::new(buffer);

        store.reduce(&Action::SelectPanel(PanelId::Logs));
        assert_eq!(store.get_state().logs.len(), 2);

        store.reduce(&Action::SelectPrev(PanelId::Logs));
        store.reduce(&Action::SelectPrev(PanelId::Logs));
        assert_eq!(store.get_state().scroll_offset, 1);

        store.reduce(&Action::SelectNext(PanelId::Logs));
        assert_eq!(store.get_state().scroll_offset, 0);
    }
}
