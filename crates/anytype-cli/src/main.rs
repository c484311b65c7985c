//! anytype - CLI tool for exploring the Anytype local API.
//!
//! A thin wrapper over the `anytype` library, for trying out the API and
//! debugging against a running desktop app.

mod cli;
mod commands;
mod output;
mod storage;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use commands::{Context, auth, objects, search, spaces, tags};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.json_logs);

    let ctx = Context::new(cli.base_url, cli.api_key);

    match cli.command {
        Commands::Auth(cmd) => auth::handle(&ctx, cmd).await,
        Commands::Spaces(cmd) => spaces::handle(&ctx, cmd).await,
        Commands::Objects(cmd) => objects::handle(&ctx, cmd).await,
        Commands::Tags(cmd) => tags::handle(&ctx, cmd).await,
        Commands::Search(args) => search::run(&ctx, args).await,
    }
}

fn init_logging(verbosity: u8, json: bool) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }
}
