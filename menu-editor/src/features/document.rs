use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// How a JSON document was read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// A parsed document together with its load status.
#[derive(Debug, Clone)]
pub(crate) struct DocumentLoad<T> {
    value: T,
    status: LoadStatus,
}

impl<T> DocumentLoad<T> {
    pub(crate) fn new(value: T, status: LoadStatus) -> Self {
        Self { value, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(self) -> (T, LoadStatus) {
        (self.value, self.status)
    }
}

/// Read the document at `path` and hand its text to `parse`.
///
/// A missing file or a parse failure yields `T::default()` with the
/// matching status; only other IO failures are errors.
pub(crate) fn load_document<T, E>(
    path: &Path,
    parse: impl FnOnce(&str) -> Result<T, E>,
) -> Result<DocumentLoad<T>, io::Error>
where
    T: Default,
    E: fmt::Display,
{
    let data = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(DocumentLoad::new(T::default(), LoadStatus::Missing));
        },
        Err(err) => return Err(err),
    };

    match parse(&data) {
        Ok(value) => Ok(DocumentLoad::new(value, LoadStatus::Loaded)),
        Err(err) => Ok(DocumentLoad::new(
            T::default(),
            LoadStatus::Invalid(format!("{err}")),
        )),
    }
}
