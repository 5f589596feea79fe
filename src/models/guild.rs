use std::fmt;

use serde::{Deserialize, Serialize};

/// Guild (Server) specific settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerSettings {
    /// Channel ID where enmity pings are posted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    /// Role ID mentioned by enmity pings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_to_ping_id: Option<String>,
    /// Role ID allowed to use /enmity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enmity_host_role_id: Option<String>,
}

/// A single settable field of [`ServerSettings`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingField {
    ChannelId,
    RoleToPingId,
    EnmityHostRoleId,
}

impl SettingField {
    pub const ALL: [SettingField; 3] = [
        SettingField::ChannelId,
        SettingField::RoleToPingId,
        SettingField::EnmityHostRoleId,
    ];

    /// Key as stored in the settings file
    pub fn key(self) -> &'static str {
        match self {
            SettingField::ChannelId => "channelId",
            SettingField::RoleToPingId => "roleToPingId",
            SettingField::EnmityHostRoleId => "enmityHostRoleId",
        }
    }

    /// Exact, case-sensitive lookup by stored key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for SettingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl ServerSettings {
    pub fn get(&self, field: SettingField) -> Option<&str> {
        match field {
            SettingField::ChannelId => self.channel_id.as_deref(),
            SettingField::RoleToPingId => self.role_to_ping_id.as_deref(),
            SettingField::EnmityHostRoleId => self.enmity_host_role_id.as_deref(),
        }
    }

    /// Look up a field by its stored key name
    pub fn get_by_key(&self, key: &str) -> Option<&str> {
        SettingField::from_key(key).and_then(|field| self.get(field))
    }

    /// Overwrite one field, leaving the others untouched
    pub fn set(&mut self, field: SettingField, value: String) {
        let slot = match field {
            SettingField::ChannelId => &mut self.channel_id,
            SettingField::RoleToPingId => &mut self.role_to_ping_id,
            SettingField::EnmityHostRoleId => &mut self.enmity_host_role_id,
        };
        *slot = Some(value);
    }

    /// Configured fields in declaration order
    pub fn entries(&self) -> Vec<(SettingField, &str)> {
        SettingField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_siblings() {
        let mut settings = ServerSettings::default();
        settings.set(SettingField::ChannelId, "111".to_string());
        settings.set(SettingField::RoleToPingId, "222".to_string());

        assert_eq!(settings.get(SettingField::ChannelId), Some("111"));
        assert_eq!(settings.get(SettingField::RoleToPingId), Some("222"));
        assert_eq!(settings.get(SettingField::EnmityHostRoleId), None);
    }

    #[test]
    fn test_key_lookup_is_exact() {
        assert_eq!(SettingField::from_key("roleToPingId"), Some(SettingField::RoleToPingId));
        assert_eq!(SettingField::from_key("roletopingid"), None);
        assert_eq!(SettingField::from_key("missingKey"), None);
    }

    #[test]
    fn test_serde_uses_camel_case_and_omits_unset() {
        let mut settings = ServerSettings::default();
        settings.set(SettingField::EnmityHostRoleId, "333".to_string());

        let json = serde_json::to_value(&settings).unwrap();
        assert_eq!(json, serde_json::json!({ "enmityHostRoleId": "333" }));

        let parsed: ServerSettings =
            serde_json::from_str(r#"{"channelId":"1","roleToPingId":"2"}"#).unwrap();
        assert_eq!(parsed.get_by_key("channelId"), Some("1"));
        assert_eq!(parsed.get_by_key("roleToPingId"), Some("2"));
        assert_eq!(parsed.get_by_key("enmityHostRoleId"), None);
    }

    #[test]
    fn test_entries_follow_field_order() {
        let mut settings = ServerSettings::default();
        settings.set(SettingField::EnmityHostRoleId, "3".to_string());
        settings.set(SettingField::ChannelId, "1".to_string());

        let keys: Vec<_> = settings.entries().into_iter().map(|(f, _)| f.key()).collect();
        assert_eq!(keys, vec!["channelId", "enmityHostRoleId"]);
    }
}
