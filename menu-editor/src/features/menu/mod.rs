mod errors;
mod event;
mod reducer;
mod state;
mod storage;
mod view;

pub(crate) use event::{MenuEffect, MenuEvent};
pub(crate) use reducer::{MenuCtx, reduce};
pub(crate) use state::{InteractionMode, MenuEditorState};
pub(crate) use storage::{JsonFileStore, MenuStore, persist};
pub(crate) use view::render;
