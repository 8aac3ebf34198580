pub(crate) mod document;
pub(crate) mod menu;
pub(crate) mod settings;
