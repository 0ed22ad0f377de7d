//! Generic settings persistence coordination.
//!
//! Provides a small type-safe API for persisting serializable settings to
//! eframe's storage as JSON strings.

use serde::{Deserialize, Serialize};

/// Coordinates generic settings persistence.
pub struct SettingsCoordinator;

impl SettingsCoordinator {
    /// Loads a setting from persistent storage, falling back to `default`
    /// if the key is missing or the stored value does not parse.
    pub fn load_setting_or<T>(storage: Option<&dyn eframe::Storage>, key: &str, default: T) -> T
    where
        T: for<'de> Deserialize<'de>,
    {
        if let Some(storage) = storage {
            if let Some(json_str) = storage.get_string(key) {
                if let Ok(value) = serde_json::from_str(&json_str) {
                    return value;
                }
            }
        }
        default
    }

    /// Saves a setting to persistent storage.
    ///
    /// Values that fail to serialize are skipped silently; settings are
    /// conveniences, not data.
    pub fn save_setting<T: Serialize>(storage: &mut dyn eframe::Storage, key: &str, value: &T) {
        if let Ok(json_str) = serde_json::to_string(value) {
            storage.set_string(key, json_str);
        }
    }
}
