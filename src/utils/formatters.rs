// Formatting utilities

use poise::serenity_prelude as serenity;

/// Compose the enmity announcement.
///
/// The base line always mentions the ping role and the host; a note and a
/// voice channel call-to-action are appended when present. An empty note
/// counts as no note.
pub fn compose_enmity_message(
    role_id: &str,
    host: serenity::UserId,
    message: Option<&str>,
    voice_channel: Option<serenity::ChannelId>,
) -> String {
    let mut content = format!("<@&{}> <@{}> is hosting an enmity.", role_id, host);
    let message = message.filter(|m| !m.is_empty());

    match (message, voice_channel) {
        (Some(note), Some(vc)) => content.push_str(&format!(
            " They're saying: {}. Get on this VC whenever you're ready! <#{}>",
            note, vc
        )),
        (Some(note), None) => content.push_str(&format!(" They're saying: {}.", note)),
        (None, Some(vc)) => {
            content.push_str(&format!(" Get on this VC whenever you're ready! <#{}>", vc))
        }
        (None, None) => {}
    }

    content
}

/// Render a single setting as `**key**: `value``
pub fn format_setting(key: &str, value: &str) -> String {
    format!("**{}**: `{}`", key, value)
}
