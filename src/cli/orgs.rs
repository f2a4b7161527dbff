//! Organization subcommands and their arguments

use clap::{Parser, Subcommand};

/// Subcommands of 'orgs'
#[derive(Subcommand, Debug)]
pub enum OrgsCommand {
    /// Lists organizations for current user
    #[command(
        visible_alias = "ls",
        long_about = "Lists organizations available to current user."
    )]
    List,

    /// Show organization
    Show(ShowArgs),

    /// Invite to organization
    Invite(MemberArgs),

    /// Revoke an invitation to an organization
    Revoke(MemberArgs),

    /// Remove a member from an organization
    Remove(MemberArgs),

    /// Create an organization
    Create(CreateArgs),

    /// Delete an organization
    #[command(visible_alias = "destroy")]
    Delete(DeleteArgs),
}

impl OrgsCommand {
    /// Subcommand name as typed on the command line
    pub fn name(&self) -> &'static str {
        match self {
            OrgsCommand::List => "list",
            OrgsCommand::Show(_) => "show",
            OrgsCommand::Invite(_) => "invite",
            OrgsCommand::Revoke(_) => "revoke",
            OrgsCommand::Remove(_) => "remove",
            OrgsCommand::Create(_) => "create",
            OrgsCommand::Delete(_) => "delete",
        }
    }

    /// Whether the subcommand talks to the API (and so needs a token)
    pub fn requires_session(&self) -> bool {
        !matches!(
            self,
            OrgsCommand::Invite(_) | OrgsCommand::Revoke(_) | OrgsCommand::Remove(_)
        )
    }
}

/// Arguments for 'orgs show'
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Organization slug
    pub org: String,
}

/// Arguments for 'orgs invite', 'orgs revoke' and 'orgs remove'
#[derive(Parser, Debug)]
pub struct MemberArgs {
    /// Organization slug
    pub org: Option<String>,

    /// Email address of the user
    pub email: Option<String>,
}

/// Arguments for 'orgs create'
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Name of the new organization (prompted for when omitted)
    pub org: Option<String>,
}

/// Arguments for 'orgs delete'
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Organization slug (prompted for when omitted)
    pub org: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(OrgsCommand::List.name(), "list");
        assert_eq!(
            OrgsCommand::Show(ShowArgs {
                org: "acme".to_string()
            })
            .name(),
            "show"
        );
        assert_eq!(
            OrgsCommand::Delete(DeleteArgs {
                org: None,
                yes: false
            })
            .name(),
            "delete"
        );
    }

    #[test]
    fn test_member_commands_do_not_require_session() {
        let args = || MemberArgs {
            org: None,
            email: None,
        };
        assert!(!OrgsCommand::Invite(args()).requires_session());
        assert!(!OrgsCommand::Revoke(args()).requires_session());
        assert!(!OrgsCommand::Remove(args()).requires_session());
        assert!(OrgsCommand::List.requires_session());
        assert!(OrgsCommand::Create(CreateArgs { org: None }).requires_session());
    }
}
