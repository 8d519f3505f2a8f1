/// Store modules that hold application state
/// Each store is responsible for one panel's slice of the application state
pub mod actions_store;
pub mod admins_store;
pub mod app_logs_store;
pub mod feedback_store;
pub mod ui_store;

pub use actions_store::{ActionsState, ActionsStore, visible_actions};
pub use admins_store::{AdminsState, AdminsStore, visible_admins};
pub use app_logs_store::AppLogsStore;
pub use feedback_store::{
    FeedbackState, FeedbackStore, first_row_number, row_number, visible_feedback,
};
pub use ui_store::{UIState, UIStore};
