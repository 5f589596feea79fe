// Centralized configuration for the Enmity Bot

use std::env;
use std::path::PathBuf;

use poise::serenity_prelude as serenity;
use thiserror::Error;

/// Default location of the persisted settings file
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "enmity_bot=info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{var} must be a non-zero Discord ID, got {value:?}")]
    InvalidId { var: &'static str, value: String },
}

/// Startup configuration, validated before connecting
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub application_id: serenity::ApplicationId,
    pub guild_id: serenity::GuildId,
    pub settings_path: PathBuf,
}

impl BotConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup (used by tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| {
            lookup(var)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::Missing(var))
        };

        let token = required("DISCORD_TOKEN")?;
        let application_id = parse_id(required("CLIENT_ID")?, "CLIENT_ID")?;
        let guild_id = parse_id(required("GUILD_ID")?, "GUILD_ID")?;
        let settings_path = lookup("SETTINGS_PATH")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string())
            .into();

        Ok(Self {
            token,
            application_id: serenity::ApplicationId::new(application_id),
            guild_id: serenity::GuildId::new(guild_id),
            settings_path,
        })
    }
}

fn parse_id(value: String, var: &'static str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidId { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_valid_config() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("CLIENT_ID", "1234"),
            ("GUILD_ID", " 5678 "),
        ]))
        .unwrap();

        assert_eq!(config.token, "token");
        assert_eq!(config.application_id.get(), 1234);
        assert_eq!(config.guild_id.get(), 5678);
        assert_eq!(config.settings_path, PathBuf::from(DEFAULT_SETTINGS_PATH));
    }

    #[test]
    fn test_settings_path_override() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("CLIENT_ID", "1"),
            ("GUILD_ID", "2"),
            ("SETTINGS_PATH", "/var/lib/enmity/settings.json"),
        ]))
        .unwrap();

        assert_eq!(config.settings_path, PathBuf::from("/var/lib/enmity/settings.json"));
    }

    #[test]
    fn test_missing_values_fail_fast() {
        let err = BotConfig::from_lookup(lookup_from(&[("CLIENT_ID", "1"), ("GUILD_ID", "2")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::Missing("DISCORD_TOKEN"));

        let err = BotConfig::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("CLIENT_ID", "1"),
            ("GUILD_ID", "   "),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing("GUILD_ID"));
    }

    #[test]
    fn test_invalid_ids() {
        let err = BotConfig::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("CLIENT_ID", "abc"),
            ("GUILD_ID", "2"),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidId { var: "CLIENT_ID", value: "abc".to_string() }
        );

        let err = BotConfig::from_lookup(lookup_from(&[
            ("DISCORD_TOKEN", "token"),
            ("CLIENT_ID", "1"),
            ("GUILD_ID", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidId { var: "GUILD_ID", .. }));
    }
}
