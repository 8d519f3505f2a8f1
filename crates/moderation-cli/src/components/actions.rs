use super::{CmdResult, lines, output};
use moderation_api::DashboardApi;
use moderation_api::models::{ModerationAction, NewAction};
use moderation_tui::stores::visible_actions;

/// Moderation action management
#[derive(clap::Args)]
pub struct ActionArgs {
    #[command(subcommand)]
    pub command: ActionCommand,
}

#[derive(clap::Subcommand)]
pub enum ActionCommand {
    /// List moderation actions
    List {
        /// Show only the action with exactly this id
        #[arg(long)]
        id: Option<String>,
    },
    /// Record an action by an admin on a feedback item
    Create {
        #[arg(long)]
        admin_id: i64,

        #[arg(long)]
        feedback_id: i64,

        #[arg(long, short)]
        comment: String,
    },
    /// Replace an action's comment
    Update {
        id: i64,

        #[arg(long, short)]
        comment: String,
    },
    /// Delete an action
    Delete { id: i64 },
    /// Show one action
    Show { id: i64 },
}

pub fn action_line(action: &ModerationAction) -> String {
    format!(
        "{}. admin {} on feedback {}: {} ({})",
        action.action_id,
        action.admin_id,
        action.feedback_id,
        action.action_comment,
        action.action_date.as_deref().unwrap_or("N/A")
    )
}

pub async fn handle_actions(api: &dyn DashboardApi, args: ActionArgs, json: bool) -> CmdResult {
    match args.command {
        ActionCommand::List { id } => {
            let actions = api.list_actions().await?;
            let visible = visible_actions(&actions, id.as_deref().unwrap_or(""));
            output(json, &visible, |v| lines(v, "No actions found", |a| action_line(a)))
        }
        ActionCommand::Create {
            admin_id,
            feedback_id,
            comment,
        } => {
            api.create_action(&NewAction {
                admin_id,
                feedback_id,
                comment,
            })
            .await?;
            Ok(format!(
                "Created action by admin {} on feedback {}",
                admin_id, feedback_id
            ))
        }
        ActionCommand::Update { id, comment } => {
            api.update_action(id, &comment).await?;
            Ok(format!("Updated action {}", id))
        }
        ActionCommand::Delete { id } => {
            api.delete_action(id).await?;
            Ok(format!("Deleted action {}", id))
        }
        ActionCommand::Show { id } => {
            let action = api.get_action(id).await?;
            output(json, &action, action_line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_line() {
        let mut action = ModerationAction::new(3, 1, 9, "spam");
        assert_eq!(action_line(&action), "3. admin 1 on feedback 9: spam (N/A)");
        action.action_date = Some("2024-03-01".to_string());
        assert_eq!(
            action_line(&action),
            "3. admin 1 on feedback 9: spam (2024-03-01)"
        );
    }

    #[test]
    fn test_list_filter_is_exact() {
        let all = vec![
            ModerationAction::new(1, 1, 9, "a"),
            ModerationAction::new(12, 1, 9, "b"),
        ];
        let visible = visible_actions(&all, "1");
        assert_eq!(lines(&visible, "none", |a| action_line(a)), action_line(&all[0]));
    }
}
