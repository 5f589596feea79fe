use poise::serenity_prelude as serenity;
use tracing::error;

use crate::commands::{say_ephemeral, INVALID_CHANNEL};
use crate::models::guild::SettingField;
use crate::{Context, Error};

pub const ADMIN_REQUIRED: &str = "❌ You need the Administrator permission to change settings.";
pub const SAVE_FAILED: &str = "❌ Failed to save settings.";

/// Set various bot settings
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "ADMINISTRATOR",
    subcommands("ping_channel", "ping_role", "enmity_host_role"),
    subcommand_required
)]
pub async fn set(_ctx: Context<'_>) -> Result<(), Error> {
    Ok(())
}

/// Set the channel where the bot pings a role when /enmity is used.
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn ping_channel(
    ctx: Context<'_>,
    #[description = "The channel to set for pings"] channel: serenity::PartialChannel,
) -> Result<(), Error> {
    // Resolved from the interaction payload; only guild channels carry a name
    let Some(name) = channel.name.as_deref() else {
        return say_ephemeral(ctx, INVALID_CHANNEL).await;
    };

    save_setting(ctx, SettingField::ChannelId, channel.id.to_string(), name).await
}

/// Set the role to ping when /enmity is used.
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn ping_role(
    ctx: Context<'_>,
    #[description = "The role to ping"] role: serenity::Role,
) -> Result<(), Error> {
    save_setting(ctx, SettingField::RoleToPingId, role.id.to_string(), &role.name).await
}

/// Set the role that is allowed to use the /enmity command.
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn enmity_host_role(
    ctx: Context<'_>,
    #[description = "The role that can use the /enmity command"] role: serenity::Role,
) -> Result<(), Error> {
    save_setting(ctx, SettingField::EnmityHostRoleId, role.id.to_string(), &role.name).await
}

async fn save_setting(
    ctx: Context<'_>,
    field: SettingField,
    value: String,
    display_name: &str,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        return say_ephemeral(ctx, crate::commands::GUILD_ONLY).await;
    };

    match ctx.data().settings.set_field(&guild_id.to_string(), field, value).await {
        Ok(_) => say_ephemeral(ctx, confirmation_message(field, display_name)).await,
        Err(e) => {
            error!("Failed to save {} for guild {}: {:?}", field, guild_id, e);
            say_ephemeral(ctx, SAVE_FAILED).await
        }
    }
}

/// Human label for a setting in confirmations
fn field_label(field: SettingField) -> &'static str {
    match field {
        SettingField::ChannelId => "Ping channel",
        SettingField::RoleToPingId => "Ping role",
        SettingField::EnmityHostRoleId => "Enmity host role",
    }
}

pub fn confirmation_message(field: SettingField, display_name: &str) -> String {
    format!("✅ {} set to **{}** in this server.", field_label(field), display_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_messages() {
        assert_eq!(
            confirmation_message(SettingField::ChannelId, "raids"),
            "✅ Ping channel set to **raids** in this server."
        );
        assert_eq!(
            confirmation_message(SettingField::RoleToPingId, "Raiders"),
            "✅ Ping role set to **Raiders** in this server."
        );
        assert_eq!(
            confirmation_message(SettingField::EnmityHostRoleId, "Hosts"),
            "✅ Enmity host role set to **Hosts** in this server."
        );
    }
}
