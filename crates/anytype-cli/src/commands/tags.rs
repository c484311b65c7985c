//! Tag subcommands.

use anyhow::{Context as _, Result};
use anytype::{TagColor, TagCreate};
use clap::{Args, Subcommand};

use crate::output;

use super::Context;

#[derive(Args, Debug)]
pub struct TagsCommand {
    #[command(subcommand)]
    pub command: TagsSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TagsSubcommand {
    /// List tags in a space
    List {
        /// Space ID
        space: String,
    },

    /// Create a tag
    Create {
        /// Space ID
        space: String,

        /// Tag name
        #[arg(long)]
        name: String,

        /// Tag color (red, orange, yellow, green, blue, purple, pink, grey)
        #[arg(long)]
        color: Option<TagColor>,
    },
}

pub async fn handle(ctx: &Context, cmd: TagsCommand) -> Result<()> {
    let client = ctx.client()?;

    match cmd.command {
        TagsSubcommand::List { space } => {
            let tags = client
                .tags(&space)
                .list(None)
                .await
                .context("Failed to list tags")?;

            if tags.is_empty() {
                output::note("No tags found.");
            }
            for tag in &tags {
                output::row(&tag.meta.id, &tag.name);
            }
        }
        TagsSubcommand::Create { space, name, color } => {
            let mut payload = TagCreate::new(name);
            payload.color = color;

            let tag = client
                .tags(&space)
                .create(&payload)
                .await
                .context("Failed to create tag")?;

            output::success("Tag created");
            output::field("ID", &tag.meta.id);
            output::field("Name", &tag.name);
        }
    }

    Ok(())
}
