use poise::serenity_prelude as serenity;
use tracing::info;

use crate::{Data, Error};

/// Replace every command registered in `guild_id` with exactly `commands`.
///
/// Clears the guild scope first, then registers the full list. If the second
/// call fails the guild is left with no commands until the next run.
pub async fn register_guild_commands(
    http: &serenity::Http,
    application_id: serenity::ApplicationId,
    guild_id: serenity::GuildId,
    commands: &[poise::Command<Data, Error>],
) -> Result<(), serenity::Error> {
    http.set_application_id(application_id);

    info!("Clearing old guild commands...");
    let cleared = guild_id.set_commands(http, Vec::new()).await?;
    info!("Cleared commands: {}", cleared.len());

    let builders = poise::builtins::create_application_commands(commands);
    info!("Registering {} slash commands...", builders.len());
    guild_id.set_commands(http, builders).await?;

    info!("Slash commands registered in guild {}", guild_id);
    Ok(())
}
