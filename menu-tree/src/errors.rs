use thiserror::Error;

use crate::model::MenuId;
use crate::reorder::Direction;

/// Errors raised by structural tree operations and document parsing.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("menu node {0} not found")]
    NotFound(MenuId),
    #[error("menu node {0} appears more than once")]
    DuplicateId(MenuId),
    #[error("menu node {id} would sit at depth {depth}")]
    DepthViolation { id: MenuId, depth: usize },
    #[error("no menu node ids are left to allocate")]
    IdSpaceExhausted,
    #[error("menu document JSON failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a drop gesture degrades to a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DropRejected {
    #[error("node dropped onto itself")]
    SelfDrop,
    #[error("menu node {0} not found")]
    NotFound(MenuId),
    #[error("node dropped inside its own subtree")]
    IntoOwnSubtree,
    #[error("menu node {id} would sit at depth {depth}")]
    DepthViolation { id: MenuId, depth: usize },
}

/// Failures of the pointer-free sibling move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManualMoveError {
    #[error("menu node {0} not found")]
    NotFound(MenuId),
    #[error("Cannot move further {direction}.")]
    BoundaryHit { id: MenuId, direction: Direction },
}
