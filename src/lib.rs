//! flyorgs - Manage Fly organizations from the command line
//!
//! A CLI tool to list, inspect, create and delete Fly organizations.
//!
//! # Features
//!
//! - List the personal organization and every organization you belong to
//! - Show organization detail with DNS zone and member summary
//! - Create and delete organizations (with confirmation)
//! - Multiple output formats (table, JSON, YAML)
//!
//! # Example
//!
//! ```bash
//! # List organizations
//! flyorgs orgs list
//!
//! # Show one organization
//! flyorgs orgs show my-org
//!
//! # Create an organization
//! flyorgs orgs create my-org
//!
//! # Delete without prompting
//! flyorgs orgs delete my-org --yes
//!
//! # Output as JSON
//! flyorgs orgs list -o json
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fly;
pub mod output;
pub mod ui;

pub use cli::{
    Cli, Command, CreateArgs, DeleteArgs, MemberArgs, OrgsCommand, OutputFormat, ShowArgs,
};
pub use error::{FlyError, Result};
pub use fly::{
    run_orgs_command, CommandContext, DeleteOrganizationPayload, FlyClient, MyOrganizations,
    Organization, OrgsApi, TokenResolver,
};
pub use ui::{Prompter, TerminalPrompter};
