use std::collections::BTreeSet;

use crate::model::{MenuId, MenuNode, MenuTree};

/// Ids whose subtree the renderer hides.
///
/// Pure view state: nothing structural ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    collapsed: BTreeSet<MenuId>,
}

impl CollapseState {
    /// Return a copy with `id` flipped between collapsed and expanded.
    pub fn toggle(&self, id: MenuId) -> Self {
        let mut collapsed = self.collapsed.clone();
        if !collapsed.remove(&id) {
            collapsed.insert(id);
        }
        Self { collapsed }
    }

    pub fn is_collapsed(&self, id: MenuId) -> bool {
        self.collapsed.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.collapsed.is_empty()
    }

    /// Forget ids that no longer exist in `tree`.
    pub fn retain_existing(&self, tree: &MenuTree) -> Self {
        let collapsed = self
            .collapsed
            .iter()
            .copied()
            .filter(|id| tree.contains(*id))
            .collect();
        Self { collapsed }
    }
}

/// One row a renderer draws for the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRow<'a> {
    pub node: &'a MenuNode,
    pub depth: usize,
    pub parent_id: Option<MenuId>,
    /// Position among siblings, not among visible rows.
    pub index: usize,
    pub collapsed: bool,
}

impl VisibleRow<'_> {
    pub fn has_children(&self) -> bool {
        self.node.has_children()
    }
}

/// Flatten a tree into depth-first rows, skipping collapsed subtrees.
///
/// Sibling order is kept as stored; the menu order is meaningful.
pub fn visible_rows<'a>(
    tree: &'a MenuTree,
    collapse: &CollapseState,
) -> Vec<VisibleRow<'a>> {
    let mut rows = Vec::new();
    for (index, node) in tree.roots().iter().enumerate() {
        push_row(node, 0, None, index, collapse, &mut rows);
    }
    rows
}

fn push_row<'a>(
    node: &'a MenuNode,
    depth: usize,
    parent_id: Option<MenuId>,
    index: usize,
    collapse: &CollapseState,
    rows: &mut Vec<VisibleRow<'a>>,
) {
    let collapsed = collapse.is_collapsed(node.id);
    rows.push(VisibleRow {
        node,
        depth,
        parent_id,
        index,
        collapsed,
    });

    if collapsed {
        return;
    }

    for (child_index, child) in node.children.iter().enumerate() {
        push_row(child, depth + 1, Some(node.id), child_index, collapse, rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> MenuTree {
        MenuTree::new(vec![
            MenuNode::new(1, "Home"),
            MenuNode::new(2, "About").with_children(vec![
                MenuNode::new(3, "Team").child(MenuNode::new(4, "Alice")),
                MenuNode::new(5, "Jobs"),
            ]),
        ])
    }

    fn row_names<'a>(rows: &[VisibleRow<'a>]) -> Vec<&'a str> {
        rows.iter().map(|row| row.node.name.as_str()).collect()
    }

    #[test]
    fn given_same_id_when_toggled_twice_then_original_set_is_returned() {
        let state = CollapseState::default().toggle(MenuId(7));

        let toggled = state.toggle(MenuId(3)).toggle(MenuId(3));

        assert_eq!(toggled, state);
        assert!(state.is_collapsed(MenuId(7)));
        assert!(!state.is_collapsed(MenuId(3)));
    }

    #[test]
    fn given_no_collapsed_nodes_when_flattened_then_all_rows_in_order() {
        let tree = fixture();

        let rows = visible_rows(&tree, &CollapseState::default());

        assert_eq!(row_names(&rows), vec![
            "Home", "About", "Team", "Alice", "Jobs"
        ]);
        let depths: Vec<usize> = rows.iter().map(|row| row.depth).collect();
        assert_eq!(depths, vec![0, 0, 1, 2, 1]);
        assert_eq!(rows[4].index, 1);
        assert_eq!(rows[3].parent_id, Some(MenuId(3)));
    }

    #[test]
    fn given_collapsed_node_when_flattened_then_only_its_descendants_hide() {
        let tree = fixture();
        let collapse = CollapseState::default().toggle(MenuId(3));

        let rows = visible_rows(&tree, &collapse);

        assert_eq!(row_names(&rows), vec!["Home", "About", "Team", "Jobs"]);
        assert!(rows[2].collapsed);
        assert!(rows[2].has_children());
    }

    #[test]
    fn given_deleted_node_when_retaining_then_stale_id_is_dropped() {
        let collapse = CollapseState::default()
            .toggle(MenuId(2))
            .toggle(MenuId(40));

        let kept = collapse.retain_existing(&fixture());

        assert!(kept.is_collapsed(MenuId(2)));
        assert!(!kept.is_collapsed(MenuId(40)));
    }
}
