use menu_tree::TreeError;
use thiserror::Error;

/// Errors emitted while reading or writing the menu document.
#[derive(Debug, Error)]
pub(crate) enum MenuStorageError {
    #[error("menu document IO failed")]
    Io(#[from] std::io::Error),
    #[error("menu document JSON failed")]
    Json(#[from] serde_json::Error),
    #[error("menu document refused")]
    Invalid(#[from] TreeError),
}
