use crate::commands::say_ephemeral;
use crate::models::guild::ServerSettings;
use crate::utils::formatters::format_setting;
use crate::{Context, Error};

pub const NO_SETTINGS: &str = "No settings saved for this server.";

/// Reply text for /print_settings
///
/// A missing record wins over any key; an empty key lists everything.
pub fn settings_response(settings: Option<&ServerSettings>, key: Option<&str>) -> String {
    let Some(settings) = settings else {
        return NO_SETTINGS.to_string();
    };

    if let Some(key) = key.filter(|k| !k.is_empty()) {
        return match settings.get_by_key(key) {
            Some(value) => format_setting(key, value),
            None => format!("No setting found for key: `{}`", key),
        };
    }

    let mut response = String::from("**Current settings for this server:**\n");
    for (field, value) in settings.entries() {
        response.push_str(&format_setting(field.key(), value));
        response.push('\n');
    }
    response
}

/// Keys configured in this guild that match what the user typed so far
pub fn matching_keys(settings: Option<&ServerSettings>, partial: &str) -> Vec<String> {
    let partial = partial.to_lowercase();
    settings
        .map(|settings| {
            settings
                .entries()
                .into_iter()
                .map(|(field, _)| field.key())
                .filter(|key| key.to_lowercase().contains(&partial))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

async fn autocomplete_setting_key(
    ctx: Context<'_>,
    partial: &str,
) -> impl Iterator<Item = String> {
    let settings = ctx
        .guild_id()
        .and_then(|guild_id| ctx.data().settings.get(&guild_id.to_string()));
    matching_keys(settings.as_ref(), partial).into_iter()
}

/// Print saved settings for this server.
#[poise::command(slash_command, guild_only)]
pub async fn print_settings(
    ctx: Context<'_>,
    #[description = "Optional key to get a specific setting"]
    #[autocomplete = "autocomplete_setting_key"]
    key: Option<String>,
) -> Result<(), Error> {
    let settings = ctx
        .guild_id()
        .and_then(|guild_id| ctx.data().settings.get(&guild_id.to_string()));

    say_ephemeral(ctx, settings_response(settings.as_ref(), key.as_deref())).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::guild::SettingField;

    fn configured() -> ServerSettings {
        let mut settings = ServerSettings::default();
        settings.set(SettingField::ChannelId, "111".to_string());
        settings.set(SettingField::EnmityHostRoleId, "333".to_string());
        settings
    }

    #[test]
    fn test_no_record_ignores_key() {
        assert_eq!(settings_response(None, None), NO_SETTINGS);
        assert_eq!(settings_response(None, Some("channelId")), NO_SETTINGS);
    }

    #[test]
    fn test_single_key() {
        let settings = configured();
        assert_eq!(
            settings_response(Some(&settings), Some("channelId")),
            "**channelId**: `111`"
        );
    }

    #[test]
    fn test_missing_key_is_quoted_verbatim() {
        let settings = configured();
        assert_eq!(
            settings_response(Some(&settings), Some("missingKey")),
            "No setting found for key: `missingKey`"
        );
        // Known key that simply has not been set
        assert_eq!(
            settings_response(Some(&settings), Some("roleToPingId")),
            "No setting found for key: `roleToPingId`"
        );
    }

    #[test]
    fn test_listing() {
        let settings = configured();
        assert_eq!(
            settings_response(Some(&settings), None),
            "**Current settings for this server:**\n**channelId**: `111`\n**enmityHostRoleId**: `333`\n"
        );
        assert_eq!(
            settings_response(Some(&settings), Some("")),
            settings_response(Some(&settings), None)
        );
    }

    #[test]
    fn test_set_then_print_roundtrip() {
        for field in SettingField::ALL {
            let mut settings = configured();
            settings.set(field, "987654321".to_string());
            assert_eq!(
                settings_response(Some(&settings), Some(field.key())),
                format!("**{}**: `987654321`", field.key())
            );
        }
    }

    #[test]
    fn test_matching_keys() {
        let settings = configured();
        assert_eq!(
            matching_keys(Some(&settings), ""),
            vec!["channelId".to_string(), "enmityHostRoleId".to_string()]
        );
        assert_eq!(matching_keys(Some(&settings), "HOST"), vec!["enmityHostRoleId".to_string()]);
        assert!(matching_keys(None, "").is_empty());
    }
}
