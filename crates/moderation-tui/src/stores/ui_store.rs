/// UIStore manages shell state (selected panel, help visibility, exit)
use crate::actions::{Action, PanelId};
use std::sync::{Arc, RwLock};

/// Internal state for the shell
#[derive(Debug, Clone, Default)]
pub struct UIState {
    /// Panel currently shown. Nothing is selected until the user picks one.
    pub active_panel: Option<PanelId>,

    /// Whether the expanded help line is visible
    pub show_help: bool,

    /// Whether the application should exit
    pub should_exit: bool,
}

/// Store that holds UI-related state
#[derive(Clone)]
pub struct UIStore {
    state: Arc<RwLock<UIState>>,
}

impl UIStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(UIState::default())),
        }
    }

    /// Get a read-only snapshot of the current state
    pub fn get_state(&self) -> UIState {
        self.state.read().unwrap().clone()
    }

    /// Reducer: handle an action and update state accordingly
    pub fn reduce(&self, action: &Action) {
        let mut state = self.state.write().unwrap();

        match action {
            Action::SelectPanel(panel) => {
                state.active_panel = Some(*panel);
            }

            Action::ToggleHelp => {
                state.show_help = !state.show_help;
            }

            Action::Quit => {
                state.should_exit = true;
            }

            _ => {
                // Ignore actions not relevant to this store
            }
        }
    }

    /// Check if the application should exit
    pub fn should_exit(&self) -> bool {
        self.state.read().unwrap().should_exit
    }
}
