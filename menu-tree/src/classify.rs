use serde::{Deserialize, Serialize};

use crate::errors::DropRejected;
use crate::locate::{NodeLocation, locate};
use crate::model::{MAX_DEPTH, MenuId, MenuTree};

/// What a drag gesture is currently hovering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropTarget {
    /// Synthetic zone above the first root row.
    TopLevel,
    /// The row of a node.
    Row(MenuId),
    /// The nesting zone drawn under a row, requesting "make it a child".
    Inside(MenuId),
}

impl DropTarget {
    pub fn node_id(self) -> Option<MenuId> {
        match self {
            DropTarget::TopLevel => None,
            DropTarget::Row(id) | DropTarget::Inside(id) => Some(id),
        }
    }
}

/// Placement affordance for the renderer. Has no structural meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropHint {
    Before,
    After,
    Inside,
}

/// Structural effect of a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropKind {
    /// Prepend to the root sequence with children stripped.
    TopLevelInsert,
    /// Array-move inside the sibling list of `parent_id`.
    Reorder {
        parent_id: Option<MenuId>,
        from: usize,
        to: usize,
    },
    /// Detach the subtree and append it as the last child of `parent_id`.
    Reparent { parent_id: MenuId },
}

/// A drop that passed classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropPlan {
    pub kind: DropKind,
    pub hint: Option<DropHint>,
}

/// Decide what dropping `active_id` on `target` means for `tree`.
///
/// Every rejection is a no-op for the caller; nothing here mutates.
pub fn classify(
    tree: &MenuTree,
    active_id: MenuId,
    target: DropTarget,
) -> Result<DropPlan, DropRejected> {
    let (over_id, nest) = match target {
        DropTarget::TopLevel => {
            return Ok(DropPlan {
                kind: DropKind::TopLevelInsert,
                hint: None,
            });
        },
        DropTarget::Row(id) => (id, false),
        DropTarget::Inside(id) => (id, true),
    };

    if over_id == active_id {
        return Err(DropRejected::SelfDrop);
    }

    let active =
        locate(tree, active_id).ok_or(DropRejected::NotFound(active_id))?;
    let over =
        locate(tree, over_id).ok_or(DropRejected::NotFound(over_id))?;

    if over.is_descendant_of(active_id) {
        return Err(DropRejected::IntoOwnSubtree);
    }

    let siblings = active.is_sibling_of(&over);
    let wants_nesting = over.depth < MAX_DEPTH
        && (active.depth > over.depth || active.parent_id != Some(over_id));
    // A plain row hover between siblings reorders; nesting a sibling needs
    // the explicit inside zone.
    if wants_nesting && (nest || !siblings) {
        let hint = if active.parent_id == Some(over_id) {
            DropHint::After
        } else {
            DropHint::Inside
        };
        return reparent(&active, over_id, over.depth + 1, hint);
    }

    if siblings {
        let hint = if active.index > over.index {
            DropHint::Before
        } else {
            DropHint::After
        };
        return Ok(DropPlan {
            kind: DropKind::Reorder {
                parent_id: active.parent_id,
                from: active.index,
                to: over.index,
            },
            hint: Some(hint),
        });
    }

    if nest {
        return Err(DropRejected::DepthViolation {
            id: active_id,
            depth: over.depth + 1,
        });
    }

    // Only a grandchild row gets here, so it always has a parent.
    let Some(parent_id) = over.parent_id else {
        return Err(DropRejected::DepthViolation {
            id: active_id,
            depth: over.depth + 1,
        });
    };
    reparent(&active, parent_id, over.depth, DropHint::After)
}

fn reparent(
    active: &NodeLocation<'_>,
    parent_id: MenuId,
    depth: usize,
    hint: DropHint,
) -> Result<DropPlan, DropRejected> {
    let deepest = depth + active.node.subtree_height();
    if deepest > MAX_DEPTH {
        return Err(DropRejected::DepthViolation {
            id: active.id(),
            depth: deepest,
        });
    }

    Ok(DropPlan {
        kind: DropKind::Reparent { parent_id },
        hint: Some(hint),
    })
}
