//! Navigation menu tree bounded to three levels, with drag-and-drop and
//! pointer-free editing.
//!
//! The crate is UI-agnostic and split into small layers:
//! - [`MenuTree`] / [`MenuNode`] hold an immutable snapshot;
//! - [`locate`] resolves an id into parent, grandparent, index and depth;
//! - the `mutate` functions return a new snapshot for every edit;
//! - [`classify`] turns a hovered [`DropTarget`] into a [`DropPlan`];
//! - [`DragController`] and [`move_sibling`] drive those from gestures;
//! - [`CollapseState`] and [`visible_rows`] feed a renderer.
//!
//! # Quick Example
//!
//! ```
//! use menu_tree::{
//!     DragController, DragOutcome, DropTarget, MenuId, MenuNode, MenuTree,
//! };
//!
//! let tree = MenuTree::new(vec![
//!     MenuNode::new(1, "Home"),
//!     MenuNode::new(2, "About").child(MenuNode::new(3, "Team")),
//! ]);
//!
//! let mut drag = DragController::new();
//! drag.start(&tree, MenuId(3));
//! drag.hover(Some(DropTarget::Row(MenuId(1))));
//!
//! let DragOutcome::Moved { tree, .. } =
//!     drag.end(&tree, Some(DropTarget::Row(MenuId(1))))
//! else {
//!     unreachable!();
//! };
//! assert_eq!(tree.roots()[0].children[0].name, "Team");
//! ```

mod classify;
mod collapse;
mod drag;
mod errors;
mod locate;
mod model;
mod mutate;
mod reorder;

pub use classify::{DropHint, DropKind, DropPlan, DropTarget, classify};
pub use collapse::{CollapseState, VisibleRow, visible_rows};
pub use drag::{
    ActiveDrag, CancelReason, DragController, DragEvents, DragOutcome,
    DragState,
};
pub use errors::{DropRejected, ManualMoveError, TreeError};
pub use locate::{NodeLocation, locate, siblings};
pub use model::{
    IdAllocator, MAX_DEPTH, MenuId, MenuNode, MenuNodeFields, MenuTree,
};
pub use mutate::{
    add_node, append_at_root, apply_drop, insert_as_child, insert_at_root,
    remove_by_id, reorder_siblings, swap_siblings, update_node,
};
pub use reorder::{Direction, move_sibling};
