//! Auth subcommands.

use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result, bail};
use chrono::Utc;
use clap::{Args, Subcommand};
use colored::Colorize;

use crate::output;
use crate::storage::{self, StoredKey};

use super::Context;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Obtain an API key through the desktop app and store it
    Login(LoginArgs),

    /// Forget the stored API key
    Logout,

    /// Show whether an API key is stored
    Status,
}

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Application name shown in the desktop app
    #[arg(long, default_value = "anytype-cli")]
    pub app_name: String,

    /// Code shown by the desktop app (prompted for when omitted)
    #[arg(long)]
    pub code: Option<String>,
}

pub async fn handle(ctx: &Context, cmd: AuthCommand) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Login(args) => login(ctx, args).await,
        AuthSubcommand::Logout => logout(),
        AuthSubcommand::Status => status(),
    }
}

async fn login(ctx: &Context, args: LoginArgs) -> Result<()> {
    let handshake = ctx.handshake()?;

    output::note("Requesting challenge...");
    let challenge = handshake
        .create_challenge(&args.app_name)
        .await
        .context("Failed to create auth challenge")?;

    let code = match args.code {
        Some(code) => code,
        None => prompt_code()?,
    };

    let grant = handshake
        .exchange_challenge(&challenge.challenge_id, &code)
        .await
        .context("Failed to exchange challenge for an API key")?;

    let stored = StoredKey {
        api_key: grant.key,
        base_url: handshake.base_url().to_string(),
        app_name: args.app_name,
        created_at: Utc::now(),
    };
    let path = storage::save(&stored).context("Failed to save API key")?;

    output::success("Logged in successfully");
    println!();
    output::field("Key", &stored.api_key.masked());
    output::field("Stored at", &path.display().to_string());

    Ok(())
}

fn prompt_code() -> Result<String> {
    eprint!("{} ", "Enter the 4-digit code shown in Anytype:".bold());
    io::stderr().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    let code = line.trim().to_string();
    if code.is_empty() {
        bail!("No code entered");
    }
    Ok(code)
}

fn logout() -> Result<()> {
    if storage::clear()? {
        output::success("Stored API key removed");
    } else {
        output::note("No stored API key.");
    }
    Ok(())
}

fn status() -> Result<()> {
    match storage::load()? {
        Some(stored) => {
            output::success("Logged in");
            println!();
            output::field("Key", &stored.api_key.masked());
            output::field("App", &stored.app_name);
            output::field("Base URL", &stored.base_url);
            output::field("Since", &stored.created_at.to_rfc3339());
        }
        None => output::note("Not logged in."),
    }
    Ok(())
}
