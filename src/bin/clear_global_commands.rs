// Clears every globally registered slash command of the application.
// Guild commands are left alone; the bot re-registers those on startup.

use std::env;

use anyhow::{ensure, Context, Result};
use poise::serenity_prelude as serenity;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| "clear_global_commands=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let token = env::var("DISCORD_TOKEN").context("DISCORD_TOKEN must be set")?;
    let application_id: u64 = env::var("CLIENT_ID")
        .context("CLIENT_ID must be set")?
        .trim()
        .parse()
        .context("CLIENT_ID must be a Discord ID")?;
    ensure!(application_id != 0, "CLIENT_ID must be non-zero");

    let http = serenity::Http::new(&token);
    http.set_application_id(serenity::ApplicationId::new(application_id));

    info!("Clearing global commands...");
    match serenity::Command::set_global_commands(&http, Vec::new()).await {
        Ok(_) => info!("All global commands cleared."),
        Err(e) => error!("Error clearing global commands: {:?}", e),
    }

    Ok(())
}
