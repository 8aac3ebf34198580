use std::error::Error;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use menu_tree::MenuTree;

use super::errors::MenuStorageError;
use super::event::MenuEvent;
use crate::features::document::{DocumentLoad, load_document};

/// Backend holding the whole menu document.
pub(crate) trait MenuStore {
    fn load(&self) -> Result<DocumentLoad<MenuTree>, MenuStorageError>;
    /// Replace the stored document with `tree`.
    fn save(&self, tree: &MenuTree) -> Result<(), MenuStorageError>;
}

/// Menu document kept as a pretty-printed JSON file.
#[derive(Debug, Clone)]
pub(crate) struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MenuStore for JsonFileStore {
    fn load(&self) -> Result<DocumentLoad<MenuTree>, MenuStorageError> {
        Ok(load_document(&self.path, MenuTree::from_json)?)
    }

    fn save(&self, tree: &MenuTree) -> Result<(), MenuStorageError> {
        tree.validate()?;

        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        set_aside_unreadable(&self.path)?;

        let payload = serde_json::to_string_pretty(tree)?;
        write_atomic(&self.path, payload.as_bytes())?;

        Ok(())
    }
}

/// Run a persist effect and report its completion back as an event.
pub(crate) fn persist<S: MenuStore>(
    store: &S,
    tree: &MenuTree,
    revision: u64,
) -> MenuEvent {
    match store.save(tree) {
        Ok(()) => MenuEvent::PersistCompleted { revision },
        Err(err) => MenuEvent::PersistFailed {
            message: error_chain(&err),
        },
    }
}

fn error_chain(err: &MenuStorageError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(&format!(": {cause}"));
        source = cause.source();
    }
    message
}

/// Move an existing document that does not parse as a menu out of the way,
/// so that saving never overwrites it.
fn set_aside_unreadable(path: &Path) -> Result<(), io::Error> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(err) => return Err(err),
    };
    let readable = std::str::from_utf8(&data)
        .is_ok_and(|text| MenuTree::from_json(text).is_ok());
    if readable {
        return Ok(());
    }

    let backup = backup_path(path);
    log::warn!(
        "menu document {} is unreadable, keeping it as {}",
        path.display(),
        backup.display()
    );
    fs::rename(path, backup)
}

/// First of `menu.json.invalid`, `menu.json.invalid.1`, ... not on disk.
fn backup_path(path: &Path) -> PathBuf {
    let first = path.with_extension("json.invalid");
    if !first.exists() {
        return first;
    }
    (1..u32::MAX)
        .map(|n| path.with_extension(format!("json.invalid.{n}")))
        .find(|candidate| !candidate.exists())
        .unwrap_or(first)
}

fn write_atomic(path: &Path, payload: &[u8]) -> Result<(), io::Error> {
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}
