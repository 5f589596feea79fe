// Slash commands
pub mod enmity;
pub mod print_settings;
pub mod register;
pub mod set;

use crate::{Context, Data, Error};

pub const GUILD_ONLY: &str = "This command can only be used in a server.";
pub const INVALID_CHANNEL: &str = "Please provide a valid channel.";
pub const INVALID_ROLE: &str = "Please provide a valid role.";
pub const INVALID_OPTION: &str = "Please provide a valid option.";

/// Every slash command, in registration order
pub fn all() -> Vec<poise::Command<Data, Error>> {
    vec![
        set::set(),
        enmity::enmity(),
        print_settings::print_settings(),
    ]
}

/// Reply for an option that could not be parsed, keyed by the invoked command
pub fn invalid_option_message(command_name: &str) -> &'static str {
    match command_name {
        "ping_channel" | "enmity" => INVALID_CHANNEL,
        "ping_role" | "enmity_host_role" => INVALID_ROLE,
        _ => INVALID_OPTION,
    }
}

/// Reply visible only to the invoking user
pub async fn say_ephemeral(ctx: Context<'_>, content: impl Into<String>) -> Result<(), Error> {
    ctx.send(
        poise::CreateReply::default()
            .content(content)
            .ephemeral(true),
    )
    .await?;
    Ok(())
}
