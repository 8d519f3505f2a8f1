use super::{CmdResult, lines, output};
use moderation_api::DashboardApi;
use moderation_api::models::Administrator;
use moderation_tui::admin_row_text;
use moderation_tui::stores::visible_admins;

/// Administrator management
#[derive(clap::Args)]
pub struct AdminArgs {
    #[command(subcommand)]
    pub command: AdminCommand,
}

#[derive(clap::Subcommand)]
pub enum AdminCommand {
    /// List active administrators
    List {
        /// Include deactivated administrators
        #[arg(long)]
        all: bool,

        /// Show only the administrator with exactly this id, active or not
        #[arg(long)]
        id: Option<String>,
    },
    /// Add an administrator, or reactivate a deactivated one with the same email
    Add { email: String },
    /// Deactivate (soft delete) an administrator
    Deactivate { id: i64 },
    /// Change an administrator's email
    UpdateEmail { id: i64, email: String },
    /// Show one administrator
    Show { id: i64 },
    /// Check whether an email belongs to an administrator
    Check { email: String },
}

/// Administrators a `list` invocation prints
pub fn select_admins<'a>(
    admins: &'a [Administrator],
    all: bool,
    id: Option<&str>,
) -> Vec<&'a Administrator> {
    match id {
        Some(id) => visible_admins(admins, id),
        None if all => admins.iter().collect(),
        None => visible_admins(admins, ""),
    }
}

pub async fn handle_admins(api: &dyn DashboardApi, args: AdminArgs, json: bool) -> CmdResult {
    match args.command {
        AdminCommand::List { all, id } => {
            let admins = api.list_admins().await?;
            let selected = select_admins(&admins, all, id.as_deref());
            output(json, &selected, |admins| {
                lines(admins, "No administrators found", |a| admin_row_text(a))
            })
        }
        AdminCommand::Add { email } => {
            api.add_admin(&email).await?;
            log::info!("Added admin {}", email);
            Ok(format!("Added admin {}", email))
        }
        AdminCommand::Deactivate { id } => {
            api.deactivate_admin(id).await?;
            Ok(format!("Deactivated admin {}", id))
        }
        AdminCommand::UpdateEmail { id, email } => {
            api.update_admin_email(id, &email).await?;
            Ok(format!("Updated email of admin {} to {}", id, email))
        }
        AdminCommand::Show { id } => {
            let admin = api.get_admin(id).await?;
            output(json, &admin, admin_row_text)
        }
        AdminCommand::Check { email } => {
            let check = api.check_admin_email(&email).await?;
            output(json, &check, |check| match check {
                Some(found) => format!(
                    "{} is admin {} ({})",
                    email,
                    found.admin_id,
                    if found.is_deleted { "Deactivated" } else { "Active" }
                ),
                None => format!("{} is not an admin", email),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admins() -> Vec<Administrator> {
        vec![
            Administrator::new(1, "a@x.com", false),
            Administrator::new(2, "b@x.com", true),
        ]
    }

    #[test]
    fn test_list_selection() {
        let all = admins();
        let ids = |v: Vec<&Administrator>| v.iter().map(|a| a.admin_id).collect::<Vec<_>>();
        assert_eq!(ids(select_admins(&all, false, None)), vec![1]);
        assert_eq!(ids(select_admins(&all, true, None)), vec![1, 2]);
        assert_eq!(ids(select_admins(&all, false, Some("2"))), vec![2]);
        assert!(select_admins(&all, true, Some("3")).is_empty());
    }

    #[test]
    fn test_text_and_json_output() {
        let all = admins();
        let selected = select_admins(&all, true, None);
        let text = output(false, &selected, |a| lines(a, "none", |x| admin_row_text(x))).unwrap();
        assert_eq!(text, "1. a@x.com - Active\n2. b@x.com - Deactivated");

        let json = output(true, &selected, |_| String::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[1]["isDeleted"], serde_json::Value::Bool(true));
    }
}
