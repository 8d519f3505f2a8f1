#[macro_use]
mod macros;
pub mod config;

/// Resolve the API base URL, preferring an explicit override (e.g. from a CLI flag)
/// over the `MODERATION_API_URL` env var and its default. Trailing slashes are dropped
/// so endpoint paths can always be appended with a leading `/`.
pub fn resolve_api_url(explicit: Option<&str>) -> String {
    let raw = match explicit {
        Some(url) if !url.trim().is_empty() => url.trim().to_string(),
        _ => get_dashboard_setting!(MODERATION_API_URL),
    };
    raw.trim_end_matches('/').to_string()
}
