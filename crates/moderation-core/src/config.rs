/// This config file lists out the default values for the dashboard env configs.
/// All can be overridden by an ENV var of the same name. The API url can also be
/// overridden from the command line. These should only be primitive types
///

/// base url of the moderation REST API (the admin gateway)
pub static MODERATION_API_URL: &'static str = "http://localhost:6061/api";

/// default log filter used by the CLI
pub static MODERATION_LOG_LEVEL: &'static str = "info";

/// max number of log lines held in memory by the TUI
pub static MODERATION_TUI_MAX_LOG_LINES: usize = 10_000;
