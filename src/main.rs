// Enmity Bot
// Announces enmity hosts to a configured role and channel

mod commands;
mod features;
mod models;
mod store;
mod utils;

use std::env;
use std::sync::Arc;

use poise::serenity_prelude as serenity;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::register::register_guild_commands;
use crate::store::settings::SettingsStore;
use crate::utils::config::{BotConfig, DEFAULT_LOG_FILTER};

/// User data shared across all commands
pub struct Data {
    pub settings: Arc<SettingsStore>,
}

// Manual Debug impl since SettingsStore doesn't impl Debug
impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("settings", &self.settings.path())
            .finish()
    }
}

type Error = Box<dyn std::error::Error + Send + Sync>;
type Context<'a> = poise::Context<'a, Data, Error>;

/// Handle framework errors, answering the invoker where it makes sense
async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    let reply = match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Command error in /{}: {:?}", ctx.command().qualified_name, error);
            commands::say_ephemeral(ctx, format!("❌ Error: {}", error)).await
        }
        poise::FrameworkError::MissingUserPermissions { ctx, .. } => {
            commands::say_ephemeral(ctx, commands::set::ADMIN_REQUIRED).await
        }
        poise::FrameworkError::GuildOnly { ctx, .. } => {
            commands::say_ephemeral(ctx, commands::GUILD_ONLY).await
        }
        poise::FrameworkError::ArgumentParse { ctx, error, .. } => {
            info!("Unresolvable option for /{}: {}", ctx.command().qualified_name, error);
            let message = commands::invalid_option_message(&ctx.command().name);
            commands::say_ephemeral(ctx, message).await
        }
        err => {
            error!("Framework error: {:?}", err);
            Ok(())
        }
    };

    if let Err(e) = reply {
        error!("Failed to report error to user: {:?}", e);
    }
}

/// Non-command gateway events
async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    _data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        if let Err(e) = features::greeting::handle_greeting_message(ctx, new_message).await {
            error!("Greeting handler error: {:?}", e);
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("Starting Enmity Bot...");

    let settings = match SettingsStore::load(&config.settings_path).await {
        Ok(store) => Arc::new(store),
        Err(e) => {
            error!("Failed to load {}: {}", config.settings_path.display(), e);
            std::process::exit(1);
        }
    };
    info!("Settings loaded from {}", settings.path().display());

    let application_id = config.application_id;
    let guild_id = config.guild_id;

    // Setup framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::all(),
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Logged in as {}", ready.user.name);

                // Registration failures are logged; the bot keeps serving events
                if let Err(e) = register_guild_commands(
                    &ctx.http,
                    application_id,
                    guild_id,
                    &framework.options().commands,
                )
                .await
                {
                    error!("Failed to register slash commands: {:?}", e);
                }

                Ok(Data { settings })
            })
        })
        .build();

    // MESSAGE_CONTENT is privileged, enable it in the Discord Dev Portal for the greeting
    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = match serenity::ClientBuilder::new(&config.token, intents)
        .framework(framework)
        .await
    {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create client: {:?}", e);
            std::process::exit(1);
        }
    };

    // Run with graceful shutdown
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutting down...");
                shard_manager.shutdown_all().await;
            }
            Err(e) => error!("Failed to register Ctrl+C handler: {:?}", e),
        }
    });

    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }

    info!("Goodbye!");
}
