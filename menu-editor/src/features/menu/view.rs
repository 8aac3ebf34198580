use menu_tree::{DropHint, DropKind, DropPlan, VisibleRow, visible_rows};

use super::state::{InteractionMode, MenuEditorState, NoticeLevel};

const INDENT: &str = "  ";

/// Render the visible rows of the editor as plain text.
///
/// Each row is indented by depth, then carries a three-column collapse
/// marker (blank for leaves), the name and the id.
pub(crate) fn render(state: &MenuEditorState) -> String {
    let preview = state.drag().preview(state.tree());
    let hovered = state
        .drag()
        .active()
        .and_then(|drag| drag.hovered)
        .and_then(|target| target.node_id());
    let dragged = state.drag().active().map(|drag| drag.active_id);

    let mut lines = vec![format!(
        "menu: {} nodes{}{}",
        state.tree().len(),
        if state.is_dirty() { ", unsaved" } else { "" },
        match state.mode() {
            InteractionMode::PointerDrag => "",
            InteractionMode::ManualMove => ", manual move",
        }
    )];

    if matches!(preview, Some(DropPlan {
        kind: DropKind::TopLevelInsert,
        ..
    })) {
        lines.push(String::from("-- drop at top level --"));
    }

    let rows = visible_rows(state.tree(), state.collapse());
    if rows.is_empty() {
        lines.push(String::from("(empty)"));
    }

    for row in rows {
        let mut line = render_row(&row);
        if Some(row.node.id) == dragged {
            line.push_str("  (dragging)");
        }
        if let Some(hint) = preview
            .and_then(|plan| plan.hint)
            .filter(|_| Some(row.node.id) == hovered)
        {
            line.push_str(hint_marker(hint));
        }
        lines.push(line);
    }

    if let Some(notice) = state.notice() {
        let level = match notice.level() {
            NoticeLevel::Info => "info",
            NoticeLevel::Error => "error",
        };
        lines.push(format!("{level}: {}", notice.message()));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_row(row: &VisibleRow<'_>) -> String {
    let marker = match (row.has_children(), row.collapsed) {
        (false, _) => "   ",
        (true, true) => "[+]",
        (true, false) => "[-]",
    };
    format!(
        "{}{marker} {} {}",
        INDENT.repeat(row.depth),
        row.node.name,
        row.node.id
    )
}

fn hint_marker(hint: DropHint) -> &'static str {
    match hint {
        DropHint::Before => "  <- before",
        DropHint::After => "  <- after",
        DropHint::Inside => "  <- inside",
    }
}
