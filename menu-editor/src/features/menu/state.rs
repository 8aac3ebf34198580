use menu_tree::{
    CollapseState, DragController, DragEvents, DragOutcome, DropTarget,
    IdAllocator, MenuId, MenuTree, TreeError,
};
use serde::Deserialize;

/// How the current device lets the user rearrange nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum InteractionMode {
    #[default]
    PointerDrag,
    ManualMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NoticeLevel {
    Info,
    Error,
}

/// User-visible message produced while reducing an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Notice {
    level: NoticeLevel,
    message: String,
}

impl Notice {
    pub(crate) fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub(crate) fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub(crate) fn level(&self) -> NoticeLevel {
        self.level
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }
}

/// Runtime state of the menu editor: the current snapshot plus view and
/// gesture state around it.
#[derive(Debug)]
pub(crate) struct MenuEditorState {
    tree: MenuTree,
    collapse: CollapseState,
    drag: DragController,
    mode: InteractionMode,
    ids: IdAllocator,
    revision: u64,
    saved_revision: u64,
    notice: Option<Notice>,
}

impl Default for MenuEditorState {
    fn default() -> Self {
        Self::new(MenuTree::default(), InteractionMode::default())
    }
}

impl MenuEditorState {
    /// Start editing a freshly loaded tree. The loaded tree counts as saved.
    pub(crate) fn new(tree: MenuTree, mode: InteractionMode) -> Self {
        Self {
            ids: IdAllocator::for_tree(&tree),
            tree,
            collapse: CollapseState::default(),
            drag: DragController::new(),
            mode,
            revision: 0,
            saved_revision: 0,
            notice: None,
        }
    }

    // --- Read access ---

    pub(crate) fn tree(&self) -> &MenuTree {
        &self.tree
    }

    pub(crate) fn collapse(&self) -> &CollapseState {
        &self.collapse
    }

    pub(crate) fn drag(&self) -> &DragController {
        &self.drag
    }

    pub(crate) fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Counter bumped by every tree replacement.
    pub(crate) fn revision(&self) -> u64 {
        self.revision
    }

    /// Whether the current snapshot differs from the last saved one.
    pub(crate) fn is_dirty(&self) -> bool {
        self.revision != self.saved_revision
    }

    pub(crate) fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    // --- Write access ---

    /// Swap in a new snapshot in one assignment.
    pub(super) fn replace_tree(&mut self, tree: MenuTree) {
        self.ids.observe(&tree);
        self.collapse = self.collapse.retain_existing(&tree);

        let dragged_gone = self
            .drag
            .active()
            .is_some_and(|drag| !tree.contains(drag.active_id));
        if dragged_gone {
            log::debug!("menu drag cancelled: dragged node was removed");
            self.drag.cancel();
        }

        self.tree = tree;
        self.revision += 1;
    }

    pub(super) fn mint_id(&mut self) -> Result<MenuId, TreeError> {
        self.ids.mint()
    }

    pub(super) fn toggle_collapsed(&mut self, id: MenuId) {
        self.collapse = self.collapse.toggle(id);
    }

    /// Switch interaction mode. Leaving pointer mode drops any gesture.
    pub(super) fn set_mode(&mut self, mode: InteractionMode) {
        if mode == InteractionMode::ManualMove && self.drag.is_dragging() {
            self.drag.cancel();
        }
        self.mode = mode;
    }

    pub(super) fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Record that `revision` reached storage.
    pub(super) fn mark_saved(&mut self, revision: u64) {
        self.saved_revision = self.saved_revision.max(revision);
    }

    pub(super) fn set_notice(&mut self, notice: Option<Notice>) {
        self.notice = notice;
    }
}

impl DragEvents for MenuEditorState {
    fn on_start(&mut self, id: MenuId) {
        if self.mode == InteractionMode::ManualMove {
            log::debug!("menu drag of {id} ignored in manual move mode");
            return;
        }
        self.drag.start(&self.tree, id);
    }

    fn on_hover(&mut self, target: Option<DropTarget>) {
        self.drag.hover(target);
    }

    fn on_end(&mut self, target: Option<DropTarget>) {
        match self.drag.end(&self.tree, target) {
            DragOutcome::Moved { tree, .. } => self.replace_tree(tree),
            DragOutcome::Cancelled(reason) => {
                log::debug!("menu drop cancelled: {reason:?}");
            },
        }
    }
}
