// Greeting Handler - answers a plain "hello"

use poise::serenity_prelude as serenity;
use tracing::debug;

pub const GREETING: &str = "hello";
pub const GREETING_REPLY: &str = "Hi there! 👋 I am your friendly bot.";

/// Whole message must be the greeting word, ignoring case
pub fn is_greeting(content: &str) -> bool {
    content.to_lowercase() == GREETING
}

/// Handle greeting replies on message create
pub async fn handle_greeting_message(
    ctx: &serenity::Context,
    msg: &serenity::Message,
) -> Result<(), anyhow::Error> {
    // Ignore bots
    if msg.author.bot {
        return Ok(());
    }

    if is_greeting(&msg.content) {
        debug!("Greeting from {}", msg.author.name);
        msg.reply(ctx, GREETING_REPLY).await?;
    }

    Ok(())
}
