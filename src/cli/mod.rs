//! CLI argument parsing

mod common;
mod orgs;

use clap::{Parser, Subcommand};

use crate::config::{api, defaults};

pub use common::OutputFormat;
pub use orgs::{CreateArgs, DeleteArgs, MemberArgs, OrgsCommand, ShowArgs};

/// Fly organizations CLI
#[derive(Parser, Debug)]
#[command(name = "flyorgs")]
#[command(version)]
#[command(about = "Manage Fly organizations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Fly API base URL
    #[arg(long, global = true, env = api::BASE_URL_ENV_VAR, default_value = defaults::API_URL)]
    pub api_url: String,

    /// API token (overrides env vars and config file)
    #[arg(short = 't', long, global = true)]
    pub access_token: Option<String>,

    /// Output format
    #[arg(short = 'o', long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Shorthand for --output json
    #[arg(short = 'j', long, global = true, default_value_t = false)]
    pub json: bool,

    /// Batch mode: no spinners, no interactive prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,
}

impl Cli {
    /// Effective output format (--json wins over --output)
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.output
        }
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Commands for managing Fly organizations
    #[command(
        visible_alias = "org",
        visible_alias = "organizations",
        long_about = "Commands for managing Fly organizations. List, create, show and \
                      destroy organizations.\n\
                      Organization admins can also invite or remove users from organizations."
    )]
    Orgs {
        #[command(subcommand)]
        command: OrgsCommand,
    },
}
