//! Space subcommands.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use crate::output;

use super::Context;

#[derive(Args, Debug)]
pub struct SpacesCommand {
    #[command(subcommand)]
    pub command: SpacesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SpacesSubcommand {
    /// List spaces
    List {
        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one space
    Get {
        /// Space ID
        id: String,
    },
}

pub async fn handle(ctx: &Context, cmd: SpacesCommand) -> Result<()> {
    let client = ctx.client()?;

    match cmd.command {
        SpacesSubcommand::List { json } => {
            let spaces = client
                .spaces()
                .list(None)
                .await
                .context("Failed to list spaces")?;

            if spaces.is_empty() {
                output::note("No spaces found.");
            }
            for space in &spaces {
                if json {
                    output::json(space)?;
                } else {
                    output::row(&space.meta.id, &space.name);
                }
            }
        }
        SpacesSubcommand::Get { id } => {
            let space = client
                .spaces()
                .get(&id)
                .await
                .context("Failed to get space")?;
            output::json_pretty(&space)?;
        }
    }

    Ok(())
}
