pub mod actions;
pub mod admins;
pub mod feedback;

use serde::Serialize;

pub type CmdResult = Result<String, Box<dyn std::error::Error>>;

/// Render `value` as pretty JSON when asked to, otherwise with `text`
pub fn output<T: Serialize + ?Sized>(json: bool, value: &T, text: impl FnOnce(&T) -> String) -> CmdResult {
    if json {
        Ok(serde_json::to_string_pretty(value)?)
    } else {
        Ok(text(value))
    }
}

/// One line per item, or a placeholder when there is nothing to show
pub fn lines<T>(items: &[T], empty: &str, line: impl Fn(&T) -> String) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.iter().map(line).collect::<Vec<_>>().join("\n")
    }
}
