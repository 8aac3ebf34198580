use menu_tree::{Direction, DropTarget, MenuId, MenuNodeFields, MenuTree};
use serde::Deserialize;

use super::state::InteractionMode;

/// Inputs the menu editor reacts to: UI gestures, form submissions and
/// completions of earlier effects.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub(crate) enum MenuEvent {
    DragStarted {
        id: MenuId,
    },
    DragHovered {
        #[serde(default)]
        target: Option<DropTarget>,
    },
    DragEnded {
        #[serde(default)]
        target: Option<DropTarget>,
    },
    DragCancelled,
    MoveRequested {
        id: MenuId,
        direction: Direction,
    },
    CollapseToggled {
        id: MenuId,
    },
    NodeAdded {
        #[serde(default)]
        parent_id: Option<MenuId>,
        #[serde(default)]
        fields: MenuNodeFields,
    },
    NodeEdited {
        id: MenuId,
        fields: MenuNodeFields,
    },
    NodeDeleted {
        id: MenuId,
    },
    ViewportClassified {
        mode: InteractionMode,
    },
    SaveRequested,
    PersistCompleted {
        revision: u64,
    },
    PersistFailed {
        message: String,
    },
}

/// Side effects requested by the reducer; the driver executes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MenuEffect {
    None,
    /// Replace the stored document with `tree`, tagged with its revision.
    Persist { tree: MenuTree, revision: u64 },
}
