use std::path::PathBuf;

use crate::features::menu::InteractionMode;

use super::storage::config_dir;

const MENU_FILE_NAME: &str = "menu.json";

/// Editor configuration read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EditorSettings {
    menu_path: PathBuf,
    interaction_mode: InteractionMode,
    autosave: bool,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            menu_path: config_dir().join(MENU_FILE_NAME),
            interaction_mode: InteractionMode::default(),
            autosave: false,
        }
    }
}

impl EditorSettings {
    /// Build settings from a JSON value, keeping defaults for missing or
    /// malformed fields.
    pub(crate) fn from_json(value: &serde_json::Value) -> Self {
        let mut settings = EditorSettings::default();

        if let Some(path) = read_string_field(value, "menu_path")
            .filter(|value| !value.trim().is_empty())
        {
            settings.menu_path = PathBuf::from(path);
        }

        if let Some(mode) = read_string_field(value, "interaction_mode")
            .and_then(|value| parse_interaction_mode(&value))
        {
            settings.interaction_mode = mode;
        }

        if let Some(autosave) =
            value.get("autosave").and_then(serde_json::Value::as_bool)
        {
            settings.autosave = autosave;
        }

        settings
    }

    pub(crate) fn menu_path(&self) -> &PathBuf {
        &self.menu_path
    }

    pub(crate) fn interaction_mode(&self) -> InteractionMode {
        self.interaction_mode
    }

    pub(crate) fn autosave(&self) -> bool {
        self.autosave
    }
}

fn read_string_field(value: &serde_json::Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
}

fn parse_interaction_mode(value: &str) -> Option<InteractionMode> {
    match value.trim() {
        "pointer_drag" => Some(InteractionMode::PointerDrag),
        "manual_move" => Some(InteractionMode::ManualMove),
        other => {
            log::warn!("settings interaction_mode ignored: unknown `{other}`");
            None
        },
    }
}
