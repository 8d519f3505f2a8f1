use std::io;
use std::sync::Arc;

use moderation_api::DashboardApi;

// Flux architecture modules
mod actions;
mod app;
mod dispatcher;
mod effects;
mod keyboard;
mod logger;
pub mod stores;
mod ui;

mod common;
mod tui;

#[cfg(test)]
mod testing;

// Re-export the main entry point
pub use app::App;

// Row formatting shared with the command line
pub use ui::admin_panel::admin_row_text;
pub use ui::feedback_panel::feedback_cells;

/// Main entry point for the TUI application
pub async fn tui_main(client: Arc<dyn DashboardApi>) -> io::Result<()> {
    // Install color-eyre for better error messages BEFORE terminal init
    if let Err(e) = color_eyre::install() {
        eprintln!("Warning: Failed to install color-eyre: {}", e);
    }

    // Initialize terminal
    let mut terminal = tui::init()?;

    // Create the application and action receiver (this initializes the logger)
    let (mut app, action_receiver) = match App::new(client) {
        Ok(app) => app,
        Err(e) => {
            // Make sure to restore terminal before showing error
            let _ = tui::restore();
            eprintln!("Failed to initialize application: {}", e);
            return Err(io::Error::new(io::ErrorKind::Other, format!("{}", e)));
        }
    };

    let result = app.run(&mut terminal, action_receiver).await;

    // Always restore terminal
    let _ = tui::restore();

    if let Err(e) = result {
        eprintln!("Application error: {:?}", e);
        return Err(e);
    }

    Ok(())
}
