//! Headless menu editor.
//!
//! Loads the menu document named by the editor settings, replays one
//! JSON-encoded event per line from a script file (or stdin), runs the
//! resulting save effects and prints the visible tree:
//!
//! ```bash
//! menu-editor gestures.jsonl
//! echo '{ "event": "save_requested" }' | menu-editor
//! ```

mod features;

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use env_logger::Env;

use crate::features::document::LoadStatus;
use crate::features::menu::{
    JsonFileStore, MenuCtx, MenuEditorState, MenuEffect, MenuEvent, MenuStore,
    persist, reduce, render,
};
use crate::features::settings::load_settings;

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let (settings, status) = load_settings()
        .context("failed to read editor settings")?
        .into_parts();
    match status {
        LoadStatus::Loaded => {},
        LoadStatus::Missing => {
            log::debug!("settings file missing, using defaults");
        },
        LoadStatus::Invalid(message) => {
            log::warn!("settings load failed: {message}");
        },
    }

    let store = JsonFileStore::new(settings.menu_path());
    let (tree, status) = store
        .load()
        .with_context(|| {
            format!(
                "failed to read menu document {}",
                settings.menu_path().display()
            )
        })?
        .into_parts();
    match status {
        LoadStatus::Loaded => {},
        LoadStatus::Missing => {
            log::info!("menu document missing, starting empty");
        },
        LoadStatus::Invalid(message) => {
            log::warn!("menu document invalid, starting empty: {message}");
        },
    }

    let mut state = MenuEditorState::new(tree, settings.interaction_mode());
    let ctx = MenuCtx {
        autosave: settings.autosave(),
    };

    let script: Box<dyn BufRead> = match env::args().nth(1) {
        Some(path) => Box::new(BufReader::new(
            File::open(&path)
                .with_context(|| format!("failed to open script {path}"))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    for (index, line) in script.lines().enumerate() {
        let line = line.context("failed to read script")?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let event: MenuEvent = serde_json::from_str(line)
            .with_context(|| format!("invalid event on line {}", index + 1))?;
        dispatch(&mut state, event, &ctx, &store);
    }

    print!("{}", render(&state));
    Ok(())
}

/// Reduce `event` and feed effect completions back until nothing is left.
fn dispatch<S: MenuStore>(
    state: &mut MenuEditorState,
    event: MenuEvent,
    ctx: &MenuCtx,
    store: &S,
) {
    let mut next = Some(event);
    while let Some(event) = next.take() {
        next = match reduce(state, event, ctx) {
            MenuEffect::None => None,
            MenuEffect::Persist { tree, revision } => {
                Some(persist(store, &tree, revision))
            },
        };
    }
}
