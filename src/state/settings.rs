// UI preferences persisted to localStorage
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SETTINGS_KEY: &str = "dt_settings";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub intro_seen: bool,
    pub show_history: bool,
    pub show_achievements: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            intro_seen: false,
            show_history: true,
            show_achievements: true,
        }
    }
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("no global window")]
    NoWindow,

    #[error("localStorage is not available")]
    Unavailable,

    #[error("storage call failed: {0}")]
    Js(String),

    #[error("malformed settings payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let win = web_sys::window().ok_or(StorageError::NoWindow)?;
    win.local_storage()
        .map_err(|e| StorageError::Js(format!("{e:?}")))?
        .ok_or(StorageError::Unavailable)
}

/// `Ok(None)` when nothing was stored yet.
pub fn load() -> Result<Option<Settings>, StorageError> {
    let store = local_storage()?;
    match store.get_item(SETTINGS_KEY) {
        Ok(Some(raw)) => Settings::from_json(&raw).map(Some),
        Ok(None) => Ok(None),
        Err(e) => Err(StorageError::Js(format!("{e:?}"))),
    }
}

pub fn save(settings: &Settings) -> Result<(), StorageError> {
    let raw = settings.to_json()?;
    local_storage()?
        .set_item(SETTINGS_KEY, &raw)
        .map_err(|e| StorageError::Js(format!("{e:?}")))
}

pub fn clear() -> Result<(), StorageError> {
    local_storage()?
        .remove_item(SETTINGS_KEY)
        .map_err(|e| StorageError::Js(format!("{e:?}")))
}
