//! Settings queries

use crate::error::Result;
use crate::types::InboxSettings;
use rusqlite::{params, Connection, OptionalExtension};
use tracing::warn;

/// Settings key holding the JSON-encoded `InboxSettings`
pub const INBOX_SETTINGS_KEY: &str = "inbox_settings";

/// Get a setting value
pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let result = conn
        .query_row(
            "SELECT value FROM settings WHERE key = ?",
            params![key],
            |row| row.get(0),
        )
        .optional()?;

    Ok(result)
}

/// Set a setting value
pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        r#"
        INSERT INTO settings (key, value, updated_at)
        VALUES (?, ?, CURRENT_TIMESTAMP)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP
        "#,
        params![key, value],
    )?;

    Ok(())
}

/// Load inbox settings; missing or malformed values fall back to defaults
pub fn load_inbox_settings(conn: &Connection) -> Result<InboxSettings> {
    let raw = get_setting(conn, INBOX_SETTINGS_KEY)?;
    let settings = match raw {
        Some(raw) => serde_json::from_str::<InboxSettings>(&raw).unwrap_or_else(|e| {
            warn!("Ignoring malformed {}: {}", INBOX_SETTINGS_KEY, e);
            InboxSettings::default()
        }),
        None => InboxSettings::default(),
    };
    Ok(settings)
}

/// Store inbox settings as JSON
pub fn save_inbox_settings(conn: &Connection, settings: &InboxSettings) -> Result<()> {
    let raw = serde_json::to_string(settings)?;
    set_setting(conn, INBOX_SETTINGS_KEY, &raw)
}
