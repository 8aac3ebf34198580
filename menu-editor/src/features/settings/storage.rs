use std::path::{Path, PathBuf};

use super::errors::SettingsError;
use super::model::EditorSettings;
use crate::features::document::{DocumentLoad, load_document};

const APP_DIR_NAME: &str = "menu-editor";

pub(crate) fn load_settings()
-> Result<DocumentLoad<EditorSettings>, SettingsError> {
    load_settings_from_path(&config_dir().join("settings.json"))
}

/// Directory holding editor settings and, by default, the menu document.
pub(crate) fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home).join(".config").join(APP_DIR_NAME);
    }

    std::env::temp_dir().join(APP_DIR_NAME)
}

fn load_settings_from_path(
    path: &Path,
) -> Result<DocumentLoad<EditorSettings>, SettingsError> {
    let loaded = load_document(path, |data| {
        serde_json::from_str::<serde_json::Value>(data)
            .map(|value| EditorSettings::from_json(&value))
    })?;
    Ok(loaded)
}
