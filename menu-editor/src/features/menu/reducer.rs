use menu_tree::{
    Direction, DragEvents, ManualMoveError, MenuId, MenuNode, MenuNodeFields,
    add_node, move_sibling, remove_by_id, update_node,
};

use super::event::{MenuEffect, MenuEvent};
use super::state::{MenuEditorState, Notice};

/// Runtime context for the menu reducer.
pub(crate) struct MenuCtx {
    /// Persist after every change of the tree.
    pub(crate) autosave: bool,
}

/// Reduce a menu event into state updates and effects.
pub(crate) fn reduce(
    state: &mut MenuEditorState,
    event: MenuEvent,
    ctx: &MenuCtx,
) -> MenuEffect {
    let revision = state.revision();

    match event {
        MenuEvent::DragStarted { id } => state.on_start(id),
        MenuEvent::DragHovered { target } => state.on_hover(target),
        MenuEvent::DragEnded { target } => state.on_end(target),
        MenuEvent::DragCancelled => state.cancel_drag(),
        MenuEvent::MoveRequested { id, direction } => {
            reduce_move(state, id, direction)
        },
        MenuEvent::CollapseToggled { id } => state.toggle_collapsed(id),
        MenuEvent::NodeAdded { parent_id, fields } => {
            reduce_add(state, parent_id, fields)
        },
        MenuEvent::NodeEdited { id, fields } => {
            reduce_edit(state, id, fields)
        },
        MenuEvent::NodeDeleted { id } => reduce_delete(state, id),
        MenuEvent::ViewportClassified { mode } => state.set_mode(mode),
        MenuEvent::SaveRequested => return persist(state),
        MenuEvent::PersistCompleted { revision } => {
            state.mark_saved(revision);
            state.set_notice(Some(Notice::info("Menu saved.")));
        },
        MenuEvent::PersistFailed { message } => {
            log::warn!("menu save failed: {message}");
            state.set_notice(Some(Notice::error(format!(
                "Saving the menu failed: {message}"
            ))));
        },
    }

    if ctx.autosave && state.revision() != revision {
        return persist(state);
    }
    MenuEffect::None
}

fn persist(state: &MenuEditorState) -> MenuEffect {
    MenuEffect::Persist {
        tree: state.tree().clone(),
        revision: state.revision(),
    }
}

fn reduce_move(
    state: &mut MenuEditorState,
    id: MenuId,
    direction: Direction,
) {
    match move_sibling(state.tree(), id, direction) {
        Ok(tree) => {
            state.replace_tree(tree);
            state.set_notice(None);
        },
        Err(err @ ManualMoveError::BoundaryHit { .. }) => {
            state.set_notice(Some(Notice::info(err.to_string())));
        },
        Err(err) => log::warn!("menu move skipped: {err}"),
    }
}

fn reduce_add(
    state: &mut MenuEditorState,
    parent_id: Option<MenuId>,
    fields: MenuNodeFields,
) {
    let added = state
        .mint_id()
        .map(|id| MenuNode::from_fields(id, fields))
        .and_then(|node| add_node(state.tree(), parent_id, node));
    match added {
        Ok(tree) => {
            state.replace_tree(tree);
            state.set_notice(None);
        },
        Err(err) => {
            log::warn!("menu add failed: {err}");
            state.set_notice(Some(Notice::error(err.to_string())));
        },
    }
}

fn reduce_edit(
    state: &mut MenuEditorState,
    id: MenuId,
    fields: MenuNodeFields,
) {
    match update_node(state.tree(), id, fields) {
        Ok(tree) => {
            state.replace_tree(tree);
            state.set_notice(None);
        },
        Err(err) => {
            log::warn!("menu edit failed: {err}");
            state.set_notice(Some(Notice::error(err.to_string())));
        },
    }
}

fn reduce_delete(state: &mut MenuEditorState, id: MenuId) {
    if !state.tree().contains(id) {
        log::warn!("menu delete skipped: node {id} not found");
        return;
    }

    state.replace_tree(remove_by_id(state.tree(), id));
    state.set_notice(None);
}
