/// Main application struct and event loop
use crate::actions::Action;
use crate::dispatcher::{ActionReceiver, Dispatcher};
use crate::effects::Effects;
use crate::keyboard::{self, KeyContext};
use crate::logger::LogBuffer;
use crate::stores::{ActionsStore, AdminsStore, AppLogsStore, FeedbackStore, UIStore};
use crate::ui::{layout::Views, render_layout};
use moderation_api::DashboardApi;
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::sync::Arc;
use std::time::Duration;

/// The main application structure following flux architecture
pub struct App {
    /// Dispatcher for sending actions
    dispatcher: Dispatcher,

    /// Store for shell state
    ui_store: UIStore,

    admins_store: AdminsStore,

    feedback_store: FeedbackStore,

    actions_store: ActionsStore,

    /// Store for application logs
    app_logs_store: AppLogsStore,

    /// Effects handler for side effects
    effects: Effects,
}

impl App {
    pub fn new(
        client: Arc<dyn DashboardApi>,
    ) -> Result<(Self, ActionReceiver), Box<dyn std::error::Error>> {
        let log_buffer = crate::logger::init_memory_logger()?;
        Ok(Self::with_log_buffer(client, log_buffer))
    }

    /// Build the app around an existing log buffer without installing a global logger
    pub fn with_log_buffer(
        client: Arc<dyn DashboardApi>,
        log_buffer: LogBuffer,
    ) -> (Self, ActionReceiver) {
        let (dispatcher, rx) = Dispatcher::new();
        let action_receiver = ActionReceiver::new(rx);
        let effects = Effects::new(dispatcher.clone(), client);

        (
            Self {
                dispatcher,
                ui_store: UIStore::new(),
                admins_store: AdminsStore::new(),
                feedback_store: FeedbackStore::new(),
                actions_store: ActionsStore::new(),
                app_logs_store: AppLogsStore::new(log_buffer),
                effects,
            },
            action_receiver,
        )
    }

    fn views(&self) -> Views<'_> {
        Views {
            ui_store: &self.ui_store,
            admins_store: &self.admins_store,
            feedback_store: &self.feedback_store,
            actions_store: &self.actions_store,
            app_logs_store: &self.app_logs_store,
        }
    }

    /// Main event loop
    pub async fn run(
        &mut self,
        terminal: &mut crate::tui::Tui,
        mut action_receiver: ActionReceiver,
    ) -> io::Result<()> {
        log::info!("Moderation dashboard started");
        log::debug!("Logger initialized and capturing to memory buffer");

        loop {
            // Render the UI
            terminal.draw(|frame| {
                render_layout(frame, &self.views());
            })?;

            // Check if we should exit
            if self.ui_store.should_exit() {
                break;
            }

            // Use tokio::select to handle both UI events and actions
            tokio::select! {
                // Poll for keyboard events
                _ = tokio::time::sleep(Duration::from_millis(16)) => {
                    if event::poll(Duration::from_millis(0))? {
                        if let Event::Key(key_event) = event::read()? {
                            // Only process key press events (not release)
                            if key_event.kind == KeyEventKind::Press {
                                let ctx = KeyContext {
                                    ui_store: &self.ui_store,
                                    admins_store: &self.admins_store,
                                    feedback_store: &self.feedback_store,
                                    actions_store: &self.actions_store,
                                };
                                if let Some(action) = keyboard::handle_key_event(key_event, &ctx) {
                                    self.dispatcher.dispatch(action);
                                }
                            }
                        }
                    }
                }

                // Process actions from the dispatcher
                Some(action) = action_receiver.recv() => {
                    self.handle_action(&action);
                }
            }
        }

        Ok(())
    }

    /// Handle an action by routing it to stores and effects
    fn handle_action(&mut self, action: &Action) {
        log::debug!("Handling action: {:?}", action);

        // Route to stores (reducers)
        self.ui_store.reduce(action);
        self.admins_store.reduce(action);
        self.feedback_store.reduce(action);
        self.actions_store.reduce(action);
        self.app_logs_store.reduce(action);

        // Trigger side effects
        self.effects.handle(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::PanelId;
    use crate::testing::FakeApi;
    use crate::ui::{buffer_lines, layout::render_shell};
    use moderation_api::models::{Administrator, Feedback, NewFeedback};
    use ratatui::{buffer::Buffer, layout::Rect};

    fn app_with(api: FakeApi) -> (App, ActionReceiver, Arc<FakeApi>) {
        let api = Arc::new(api);
        let (app, rx) = App::with_log_buffer(api.clone(), LogBuffer::with_capacity(100));
        (app, rx, api)
    }

    /// Feed an action in and process everything it causes until the queue stays empty
    async fn run_to_idle(app: &mut App, rx: &mut ActionReceiver, action: Action) {
        app.handle_action(&action);
        while let Ok(Some(next)) =
            tokio::time::timeout(Duration::from_millis(200), rx.recv()).await
        {
            app.handle_action(&next);
        }
    }

    fn screen(app: &App) -> Vec<String> {
        let area = Rect::new(0, 0, 140, 30);
        let mut buf = Buffer::empty(area);
        render_shell(area, &mut buf, &app.views());
        buffer_lines(&buf)
    }

    #[tokio::test]
    async fn test_opening_admins_fetches_and_renders_row() {
        let (mut app, mut rx, api) =
            app_with(FakeApi::with_admins(vec![Administrator::new(1, "a@x.com", false)]));

        run_to_idle(&mut app, &mut rx, Action::SelectPanel(PanelId::Admins)).await;

        assert_eq!(api.calls(), vec!["list_admins".to_string()]);
        let lines = screen(&app);
        let row = lines
            .iter()
            .find(|l| l.contains("1. a@x.com - Active"))
            .expect("admin row");
        assert!(row.contains("[d] Deactivate"));
        assert!(row.contains("[u] Update Email"));
    }

    #[tokio::test]
    async fn test_deactivate_then_readd_restores_admin() {
        let (mut app, mut rx, _api) =
            app_with(FakeApi::with_admins(vec![Administrator::new(1, "a@x.com", false)]));
        run_to_idle(&mut app, &mut rx, Action::SelectPanel(PanelId::Admins)).await;

        run_to_idle(&mut app, &mut rx, Action::DeactivateAdmin(1)).await;
        assert!(app.admins_store.get_state().visible().is_empty());

        run_to_idle(&mut app, &mut rx, Action::AddAdmin("a@x.com".to_string())).await;
        let state = app.admins_store.get_state();
        let visible: Vec<i64> = state.visible().iter().map(|a| a.admin_id).collect();
        assert_eq!(visible, vec![1]);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn test_feedback_500_shows_error_and_keeps_list() {
        let api = FakeApi::default();
        *api.feedback.lock().unwrap() = vec![Feedback::new(1, "Ann", "ann@x.com", "great")];
        let (mut app, mut rx, api) = app_with(api);
        run_to_idle(&mut app, &mut rx, Action::SelectPanel(PanelId::Feedback)).await;

        *api.fail_with.lock().unwrap() = Some(500);
        run_to_idle(
            &mut app,
            &mut rx,
            Action::SubmitFeedback(NewFeedback {
                name: "Bob".to_string(),
                email: "bob@x.com".to_string(),
                text: "hi".to_string(),
            }),
        )
        .await;

        let state = app.feedback_store.get_state();
        assert_eq!(
            state.form_error.as_deref(),
            Some("Error occurred while adding feedback: Request failed with status code 500")
        );
        assert_eq!(state.feedback.len(), 1);
        assert_eq!(
            api.calls(),
            vec!["list_feedback".to_string(), "submit_feedback".to_string()]
        );
    }

    #[tokio::test]
    async fn test_every_panel_switch_refetches() {
        let (mut app, mut rx, api) = app_with(FakeApi::default());
        run_to_idle(&mut app, &mut rx, Action::SelectPanel(PanelId::Actions)).await;
        run_to_idle(&mut app, &mut rx, Action::SelectPanel(PanelId::Admins)).await;
        run_to_idle(&mut app, &mut rx, Action::SelectPanel(PanelId::Actions)).await;
        assert_eq!(
            api.calls(),
            vec![
                "list_actions".to_string(),
                "list_admins".to_string(),
                "list_actions".to_string()
            ]
        );
    }
}
