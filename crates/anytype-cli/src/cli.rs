//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::auth::AuthCommand;
use crate::commands::objects::ObjectsCommand;
use crate::commands::search::SearchArgs;
use crate::commands::spaces::SpacesCommand;
use crate::commands::tags::TagsCommand;

/// Anytype CLI tool for exploring the local API.
#[derive(Parser, Debug)]
#[command(name = "anytype")]
#[command(author, version = env!("ANYTYPE_CLI_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API base URL
    #[arg(long, env = "ANYTYPE_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// API key (defaults to the key stored by `auth login`)
    #[arg(long, env = "ANYTYPE_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Obtain, inspect or forget an API key
    Auth(AuthCommand),

    /// Space operations
    Spaces(SpacesCommand),

    /// Object operations
    Objects(ObjectsCommand),

    /// Tag operations
    Tags(TagsCommand),

    /// Search objects across spaces
    Search(SearchArgs),
}
