//! Persisted user preferences

use super::{get_setting, set_setting, Storage};
use crate::error::{Result, StorageError};
use std::sync::Arc;
use tracing::debug;

/// Settings key of the dark-mode preference
pub const DARK_MODE_KEY: &str = "darkMode";
pub const DARK_MODE_ENABLED: &str = "enabled";
pub const DARK_MODE_DISABLED: &str = "disabled";

/// Storage for the dark-mode flag
pub trait PreferenceStore: Send + Sync {
    /// `Ok(None)` when nothing has been stored yet
    fn load_dark_mode(&self) -> Result<Option<bool>>;

    fn save_dark_mode(&self, enabled: bool) -> Result<()>;
}

/// Map a stored value to the flag; anything unrecognized is an error
pub fn parse_dark_mode(value: &str) -> Result<bool> {
    match value {
        DARK_MODE_ENABLED => Ok(true),
        DARK_MODE_DISABLED => Ok(false),
        other => Err(StorageError::InvalidPreference {
            key: DARK_MODE_KEY.to_string(),
            value: other.to_string(),
        }
        .into()),
    }
}

pub fn dark_mode_value(enabled: bool) -> &'static str {
    if enabled {
        DARK_MODE_ENABLED
    } else {
        DARK_MODE_DISABLED
    }
}

/// Preferences kept in the SQLite `settings` table
#[derive(Clone)]
pub struct SqlitePreferences {
    storage: Arc<Storage>,
}

impl SqlitePreferences {
    pub fn new(storage: Arc<Storage>) -> Self {
        Self { storage }
    }
}

impl PreferenceStore for SqlitePreferences {
    fn load_dark_mode(&self) -> Result<Option<bool>> {
        let conn = self.storage.connection()?;
        get_setting(&conn, DARK_MODE_KEY)?
            .map(|raw| parse_dark_mode(&raw))
            .transpose()
    }

    fn save_dark_mode(&self, enabled: bool) -> Result<()> {
        let conn = self.storage.connection()?;
        set_setting(&conn, DARK_MODE_KEY, dark_mode_value(enabled))?;
        debug!("Persisted {} = {}", DARK_MODE_KEY, dark_mode_value(enabled));
        Ok(())
    }
}
