use super::actions::action_line;
use super::{CmdResult, lines, output};
use moderation_api::DashboardApi;
use moderation_api::models::{Feedback, NewFeedback};
use moderation_tui::feedback_cells;
use moderation_tui::stores::{first_row_number, row_number, visible_feedback};

/// Feedback listing and submission
#[derive(clap::Args)]
pub struct FeedbackArgs {
    #[command(subcommand)]
    pub command: FeedbackCommand,
}

#[derive(clap::Subcommand)]
pub enum FeedbackCommand {
    /// List feedback
    List {
        /// Show only the feedback with this id
        #[arg(long)]
        id: Option<String>,
    },
    /// Submit feedback through the public endpoint
    Submit {
        #[arg(long, short)]
        name: String,

        #[arg(long, short)]
        email: String,

        #[arg(long, short)]
        text: String,
    },
    /// Show one feedback item
    Show { id: i64 },
    /// List the moderation actions taken on a feedback item
    Actions { id: i64 },
}

/// `{n}. {name} <{email}>: {text} | submitted .. | actioned by .. on ..: ..`
pub fn feedback_line(number: i64, feedback: &Feedback) -> String {
    let [name, email, text, submitted, actioned_by, action_date, action_comment] =
        feedback_cells(feedback);
    format!(
        "{}. {} <{}>: {} | submitted {} | actioned by {} on {}: {}",
        number, name, email, text, submitted, actioned_by, action_date, action_comment
    )
}

fn numbered(visible: &[&Feedback]) -> String {
    let first = first_row_number(visible);
    if visible.is_empty() {
        return "No feedback found".to_string();
    }
    visible
        .iter()
        .enumerate()
        .map(|(i, f)| feedback_line(row_number(first, i), f))
        .collect::<Vec<_>>()
        .join("\n")
}

pub async fn handle_feedback(
    api: &dyn DashboardApi,
    args: FeedbackArgs,
    json: bool,
) -> CmdResult {
    match args.command {
        FeedbackCommand::List { id } => {
            let feedback = api.list_feedback().await?;
            let visible = visible_feedback(&feedback, id.as_deref().unwrap_or(""));
            output(json, &visible, |v| numbered(v))
        }
        FeedbackCommand::Submit { name, email, text } => {
            api.submit_feedback(&NewFeedback { name, email, text }).await?;
            Ok("Feedback submitted".to_string())
        }
        FeedbackCommand::Show { id } => {
            let feedback = api.get_feedback(id).await?;
            output(json, &feedback, |f| feedback_line(f.feedback_id, f))
        }
        FeedbackCommand::Actions { id } => {
            let actions = api.list_feedback_actions(id).await?;
            output(json, &actions, |a| {
                lines(a, "No actions taken on this feedback", action_line)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_uses_na_for_missing_metadata() {
        let fb = Feedback::new(7, "Ann", "ann@x.com", "hello");
        assert_eq!(
            feedback_line(7, &fb),
            "7. Ann <ann@x.com>: hello | submitted N/A | actioned by N/A on N/A: N/A"
        );
    }

    #[test]
    fn test_numbering_starts_at_first_id() {
        let all = vec![
            Feedback::new(4, "Ann", "a@x.com", "one"),
            Feedback::new(9, "Bob", "b@x.com", "two"),
        ];
        let text = numbered(&visible_feedback(&all, ""));
        let rows: Vec<&str> = text.lines().collect();
        assert!(rows[0].starts_with("4. Ann"));
        assert!(rows[1].starts_with("5. Bob"));
        assert_eq!(numbered(&visible_feedback(&all, " 9 ")), feedback_line(9, &all[1]));
        assert_eq!(numbered(&[]), "No feedback found");
    }

    #[test]
    fn test_numbering_near_max_id_does_not_overflow() {
        let all = vec![
            Feedback::new(i64::MAX, "Ann", "a@x.com", "one"),
            Feedback::new(3, "Bob", "b@x.com", "two"),
        ];
        let text = numbered(&visible_feedback(&all, ""));
        let rows: Vec<&str> = text.lines().collect();
        assert!(rows[0].starts_with(&format!("{}. Ann", i64::MAX)));
        assert!(rows[1].starts_with(&format!("{}. Bob", i64::MAX)));
    }
}
