mod forms;
mod input;

pub use forms::{AddAdminForm, FeedbackForm, NewActionForm, UpdateActionForm};
pub use input::{TextInput, render_input};
