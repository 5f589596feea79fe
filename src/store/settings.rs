// Flat-file settings store
// One JSON object keyed by guild ID, rewritten in full on every change

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use dashmap::DashMap;
use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::models::guild::{ServerSettings, SettingField};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("settings file I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("settings file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct SettingsStore {
    path: PathBuf,
    guilds: DashMap<String, ServerSettings>,
    // Held across merge + persist so writes land in order
    write_lock: Mutex<()>,
}

impl SettingsStore {
    /// Load settings from `path`, starting empty if the file does not exist
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();

        let guilds: BTreeMap<String, ServerSettings> = match tokio::fs::read_to_string(&path).await {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!("No settings file at {}, starting empty", path.display());
                BTreeMap::new()
            }
            Err(e) => return Err(e.into()),
        };

        debug!("Loaded settings for {} guild(s)", guilds.len());

        Ok(Self {
            path,
            guilds: guilds.into_iter().collect(),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Settings for a guild, if any were ever saved
    pub fn get(&self, guild_id: &str) -> Option<ServerSettings> {
        self.guilds.get(guild_id).map(|entry| entry.value().clone())
    }

    /// Merge a single field into the guild's settings and persist the whole store.
    ///
    /// Creates the guild's record if needed. If the write fails the in-memory
    /// state is rolled back, so memory never runs ahead of the file.
    pub async fn set_field(
        &self,
        guild_id: &str,
        field: SettingField,
        value: impl Into<String>,
    ) -> Result<ServerSettings, StoreError> {
        let _guard = self.write_lock.lock().await;

        let previous = self.get(guild_id);
        let mut updated = previous.clone().unwrap_or_default();
        updated.set(field, value.into());
        self.guilds.insert(guild_id.to_string(), updated.clone());

        if let Err(e) = self.persist().await {
            warn!("Rolling back {} for guild {}: {}", field, guild_id, e);
            match previous {
                Some(settings) => {
                    self.guilds.insert(guild_id.to_string(), settings);
                }
                None => {
                    self.guilds.remove(guild_id);
                }
            }
            return Err(e);
        }

        info!("Updated {} for guild {}", field, guild_id);
        Ok(updated)
    }

    /// Ordered copy of every guild's settings
    fn snapshot(&self) -> BTreeMap<String, ServerSettings> {
        self.guilds
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    /// Write to a sibling temp file, then rename over the real one
    async fn persist(&self) -> Result<(), StoreError> {
        let bytes = to_indented_json(&self.snapshot())?;
        let tmp = temp_path(&self.path);

        tokio::fs::write(&tmp, bytes).await?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(e.into());
        }

        Ok(())
    }
}

fn to_indented_json<T: Serialize>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(buf)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "settings.json".into());
    name.push(".tmp");
    path.with_file_name(name)
}
