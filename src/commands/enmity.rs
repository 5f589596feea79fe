// Enmity command - announce an enmity host in the configured channel

use poise::serenity_prelude as serenity;
use tracing::{debug, error, info};

use crate::commands::say_ephemeral;
use crate::models::guild::ServerSettings;
use crate::utils::formatters::compose_enmity_message;
use crate::{Context, Error};

pub const HOST_ROLE_UNSET: &str =
    "❌ No enmity host role is configured for this server. An admin can set one with /set enmity_host_role.";
pub const NOT_HOST: &str = "❌ You do not have permission to use this command.";
pub const SETUP_INCOMPLETE: &str = "Please set both the ping channel and role first.";
pub const INVALID_PING_CHANNEL: &str = "The specified ping channel is not valid.";
pub const PING_SENT: &str = "✅ Enmity ping sent!";
pub const PING_FAILED: &str = "❌ Failed to send the enmity ping.";

/// Outcome of the host role gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostRoleCheck {
    /// No host role configured, so nobody qualifies
    Unset,
    NotMember,
    Member,
}

pub fn check_host_role(settings: &ServerSettings, member_roles: &[serenity::RoleId]) -> HostRoleCheck {
    let Some(host_role) = settings.enmity_host_role_id.as_deref() else {
        return HostRoleCheck::Unset;
    };

    if member_roles.iter().any(|role| role.to_string() == host_role) {
        HostRoleCheck::Member
    } else {
        HostRoleCheck::NotMember
    }
}

/// Configured (channel, role) pair, only when both are set
pub fn ping_target(settings: &ServerSettings) -> Option<(&str, &str)> {
    match (settings.channel_id.as_deref(), settings.role_to_ping_id.as_deref()) {
        (Some(channel), Some(role)) => Some((channel, role)),
        _ => None,
    }
}

/// Channel kinds that can receive the announcement
pub fn is_notification_channel(kind: serenity::ChannelType) -> bool {
    matches!(
        kind,
        serenity::ChannelType::Text
            | serenity::ChannelType::News
            | serenity::ChannelType::PublicThread
            | serenity::ChannelType::PrivateThread
            | serenity::ChannelType::NewsThread
    )
}

/// Use this command to trigger an enmity ping in the set channel.
#[poise::command(slash_command, guild_only)]
pub async fn enmity(
    ctx: Context<'_>,
    #[description = "Optional voice channel to mention"] voicechannel: serenity::PartialChannel,
    #[description = "Optional message to include with the ping"] message: Option<String>,
) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        return say_ephemeral(ctx, crate::commands::GUILD_ONLY).await;
    };

    let settings = ctx
        .data()
        .settings
        .get(&guild_id.to_string())
        .unwrap_or_default();

    let member_roles = match ctx.author_member().await {
        Some(member) => member.roles.clone(),
        None => Vec::new(),
    };

    match check_host_role(&settings, &member_roles) {
        HostRoleCheck::Member => {}
        HostRoleCheck::Unset => {
            debug!("Enmity denied in guild {}: no host role configured", guild_id);
            return say_ephemeral(ctx, HOST_ROLE_UNSET).await;
        }
        HostRoleCheck::NotMember => {
            debug!("Enmity denied for {} in guild {}", ctx.author().name, guild_id);
            return say_ephemeral(ctx, NOT_HOST).await;
        }
    }

    let Some((channel_id, role_id)) = ping_target(&settings) else {
        return say_ephemeral(ctx, SETUP_INCOMPLETE).await;
    };

    let Some(channel_id) = channel_id
        .parse::<u64>()
        .ok()
        .filter(|id| *id != 0)
        .map(serenity::ChannelId::new)
    else {
        return say_ephemeral(ctx, INVALID_PING_CHANNEL).await;
    };

    let channel = match channel_id.to_channel(ctx.serenity_context()).await {
        Ok(serenity::Channel::Guild(channel)) if is_notification_channel(channel.kind) => channel,
        Ok(_) => return say_ephemeral(ctx, INVALID_PING_CHANNEL).await,
        Err(e) => {
            debug!("Could not resolve ping channel {}: {:?}", channel_id, e);
            return say_ephemeral(ctx, INVALID_PING_CHANNEL).await;
        }
    };

    let content = compose_enmity_message(
        role_id,
        ctx.author().id,
        message.as_deref(),
        Some(voicechannel.id),
    );

    match channel.id.say(ctx.serenity_context(), content).await {
        Ok(_) => {
            info!("Enmity ping sent to {} by {}", channel.name, ctx.author().name);
            say_ephemeral(ctx, PING_SENT).await
        }
        Err(e) => {
            error!("Failed to send enmity ping to {}: {:?}", channel.id, e);
            say_ephemeral(ctx, PING_FAILED).await
        }
    }
}
