//! Object subcommands.

use anyhow::{Context as _, Result};
use anytype::Pagination;
use clap::{Args, Subcommand};

use crate::output;

use super::Context;

#[derive(Args, Debug)]
pub struct ObjectsCommand {
    #[command(subcommand)]
    pub command: ObjectsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ObjectsSubcommand {
    /// List objects in a space
    List {
        /// Space ID
        space: String,

        /// Maximum number of objects to return
        #[arg(long, default_value_t = 20)]
        limit: u32,

        /// Number of objects to skip
        #[arg(long, default_value_t = 0)]
        offset: u32,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one object
    Get {
        /// Space ID
        space: String,

        /// Object ID
        id: String,
    },

    /// Delete (or archive) an object
    Delete {
        /// Space ID
        space: String,

        /// Object ID
        id: String,
    },
}

pub async fn handle(ctx: &Context, cmd: ObjectsCommand) -> Result<()> {
    let client = ctx.client()?;

    match cmd.command {
        ObjectsSubcommand::List {
            space,
            limit,
            offset,
            json,
        } => {
            let page = Pagination::new(limit, offset);
            let objects = client
                .objects(&space)
                .list(Some(&page))
                .await
                .context("Failed to list objects")?;

            if objects.is_empty() {
                output::note("No objects found.");
            }
            for object in &objects {
                if json {
                    output::json(object)?;
                } else {
                    output::row(&object.meta.id, &object.name);
                }
            }
        }
        ObjectsSubcommand::Get { space, id } => {
            let object = client
                .objects(&space)
                .get(&id)
                .await
                .context("Failed to get object")?;
            output::json_pretty(&object)?;
        }
        ObjectsSubcommand::Delete { space, id } => {
            client
                .objects(&space)
                .delete(&id)
                .await
                .context("Failed to delete object")?;
            output::success(&format!("Deleted {}", id));
        }
    }

    Ok(())
}
