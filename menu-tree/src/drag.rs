use std::mem;

use crate::classify::{DropPlan, DropTarget, classify};
use crate::errors::DropRejected;
use crate::locate::locate;
use crate::model::{MenuId, MenuNode, MenuTree};
use crate::mutate::apply_drop;

/// Capability any pointer or keyboard drag abstraction drives.
pub trait DragEvents {
    /// A gesture picked up the node `id`.
    fn on_start(&mut self, id: MenuId);
    /// The gesture now hovers `target`, or nothing.
    fn on_hover(&mut self, target: Option<DropTarget>);
    /// The gesture was released over `target`, or over nothing.
    fn on_end(&mut self, target: Option<DropTarget>);
}

/// Snapshot taken when a gesture starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDrag {
    pub active_id: MenuId,
    pub node: MenuNode,
    pub original_parent_id: Option<MenuId>,
    pub original_grand_parent_id: Option<MenuId>,
    pub original_index: usize,
    /// Ephemeral hover, only used for rendering affordances.
    pub hovered: Option<DropTarget>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ActiveDrag),
}

/// Why a released gesture left the tree untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelReason {
    NotDragging,
    NoTarget,
    Rejected(DropRejected),
}

/// Result of releasing a gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    Moved { tree: MenuTree, plan: DropPlan },
    Cancelled(CancelReason),
}

/// Idle/Dragging state machine for a single interactive gesture.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn active(&self) -> Option<&ActiveDrag> {
        match &self.state {
            DragState::Dragging(drag) => Some(drag),
            DragState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Begin dragging `id`. Unknown ids keep the controller idle.
    pub fn start(&mut self, tree: &MenuTree, id: MenuId) -> bool {
        let Some(location) = locate(tree, id) else {
            log::debug!("menu drag ignored: node {id} not found");
            self.state = DragState::Idle;
            return false;
        };

        self.state = DragState::Dragging(ActiveDrag {
            active_id: id,
            node: location.node.clone(),
            original_parent_id: location.parent_id,
            original_grand_parent_id: location.grand_parent_id,
            original_index: location.index,
            hovered: None,
        });
        true
    }

    /// Record the hovered target. Never touches the tree.
    pub fn hover(&mut self, target: Option<DropTarget>) {
        if let DragState::Dragging(drag) = &mut self.state {
            drag.hovered = target;
        }
    }

    /// Classify the current hover so the renderer can draw a hint.
    pub fn preview(&self, tree: &MenuTree) -> Option<DropPlan> {
        let drag = self.active()?;
        let target = drag.hovered?;
        classify(tree, drag.active_id, target).ok()
    }

    /// Release the gesture over `target` and return to idle.
    pub fn end(
        &mut self,
        tree: &MenuTree,
        target: Option<DropTarget>,
    ) -> DragOutcome {
        let DragState::Dragging(drag) = mem::take(&mut self.state) else {
            return DragOutcome::Cancelled(CancelReason::NotDragging);
        };
        let Some(target) = target else {
            return DragOutcome::Cancelled(CancelReason::NoTarget);
        };

        match classify(tree, drag.active_id, target) {
            Ok(plan) => {
                log::debug!(
                    "menu drop of {} on {target:?}: {:?}",
                    drag.active_id,
                    plan.kind
                );
                DragOutcome::Moved {
                    tree: apply_drop(tree, drag.active_id, &plan),
                    plan,
                }
            },
            Err(reason) => {
                log::debug!(
                    "menu drop of {} skipped: {reason}",
                    drag.active_id
                );
                DragOutcome::Cancelled(CancelReason::Rejected(reason))
            },
        }
    }

    /// Abandon the gesture without touching the tree.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
