//! Search command.

use anyhow::{Context as _, Result};
use anytype::SearchQuery;
use clap::Args;

use crate::output;

use super::Context;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to search for
    pub text: String,

    /// Restrict results to one space
    #[arg(long)]
    pub space: Option<String>,

    /// Maximum number of results
    #[arg(long)]
    pub limit: Option<u32>,

    /// Print JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(ctx: &Context, args: SearchArgs) -> Result<()> {
    let client = ctx.client()?;

    let mut query = SearchQuery::text(args.text);
    query.space_id = args.space;
    query.limit = args.limit;

    let hits = client.search(&query).await.context("Search failed")?;

    if hits.is_empty() {
        output::note("No matches.");
    }
    for object in &hits {
        if args.json {
            output::json(object)?;
        } else {
            output::row(&object.meta.id, &object.name);
        }
    }

    Ok(())
}
