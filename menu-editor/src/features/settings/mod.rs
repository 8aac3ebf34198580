mod errors;
mod model;
mod storage;

pub(crate) use storage::load_settings;
