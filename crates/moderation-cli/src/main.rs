//! `modctl` - command line access to the moderation dashboard.
//!
//! ```bash
//! # interactive dashboard
//! modctl tui
//!
//! # scripted access
//! modctl admins list --all
//! modctl feedback submit -n Ann -e ann@example.com -t "Great site"
//! modctl actions create --admin-id 1 --feedback-id 4 -c "Replied by email"
//! ```
use clap::{Parser, Subcommand};
use components::actions::{ActionArgs, handle_actions};
use components::admins::{AdminArgs, handle_admins};
use components::feedback::{FeedbackArgs, handle_feedback};
use dotenv::dotenv;
use moderation_api::HttpClient;
use moderation_core::{get_dashboard_setting, resolve_api_url};
use std::sync::Arc;

mod components;

#[derive(Parser)]
#[command(name = "modctl")]
#[command(version, about = "Site management dashboard for administrators, feedback and moderation actions")]
struct Cli {
    /// Base url of the moderation API. Overrides MODERATION_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Print raw JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive terminal dashboard
    Tui,
    /// Manage administrators
    Admins(AdminArgs),
    /// List and submit feedback
    Feedback(FeedbackArgs),
    /// Manage moderation actions
    Actions(ActionArgs),
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    // the dashboard installs its own in-memory logger
    if !matches!(cli.command, Commands::Tui) {
        env_logger::Builder::from_env(
            env_logger::Env::default()
                .default_filter_or(get_dashboard_setting!(MODERATION_LOG_LEVEL)),
        )
        .init();
    }

    match run(cli).await {
        Ok(Some(out)) => println!("{}", out),
        Ok(None) => {}
        Err(e) => {
            log::error!("Command failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<Option<String>, Box<dyn std::error::Error>> {
    let api_url = resolve_api_url(cli.api_url.as_deref());
    let client = HttpClient::new(&api_url)?;
    log::debug!("Using moderation API at {}", client.base_url());

    let out = match cli.command {
        Commands::Tui => {
            moderation_tui::tui_main(Arc::new(client)).await?;
            return Ok(None);
        }
        Commands::Admins(args) => handle_admins(&client, args, cli.json).await?,
        Commands::Feedback(args) => handle_feedback(&client, args, cli.json).await?,
        Commands::Actions(args) => handle_actions(&client, args, cli.json).await?,
    };
    Ok(Some(out))
}
