use crate::model::{MenuId, MenuNode, MenuTree};

/// Where a node sits inside a tree snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeLocation<'a> {
    pub node: &'a MenuNode,
    /// Direct parent, `None` at depth `0`.
    pub parent_id: Option<MenuId>,
    /// Parent of the parent, only present at depth `2`.
    pub grand_parent_id: Option<MenuId>,
    /// Zero-based position among the current siblings.
    pub index: usize,
    pub depth: usize,
}

impl NodeLocation<'_> {
    pub fn id(&self) -> MenuId {
        self.node.id
    }

    /// Whether `ancestor` is the parent or grandparent of this node.
    pub fn is_descendant_of(&self, ancestor: MenuId) -> bool {
        self.parent_id == Some(ancestor)
            || self.grand_parent_id == Some(ancestor)
    }

    /// Whether this node and `other` share the same sibling list.
    pub fn is_sibling_of(&self, other: &NodeLocation<'_>) -> bool {
        self.parent_id == other.parent_id
    }
}

/// Find `id` level by level, searching no deeper than grandchildren.
///
/// Returns `None` when no node carries the id; callers treat that as a
/// no-op signal.
pub fn locate(tree: &MenuTree, id: MenuId) -> Option<NodeLocation<'_>> {
    let roots = tree.roots();
    if let Some(index) = position(roots, id) {
        return Some(NodeLocation {
            node: &roots[index],
            parent_id: None,
            grand_parent_id: None,
            index,
            depth: 0,
        });
    }

    for root in roots {
        if let Some(index) = position(&root.children, id) {
            return Some(NodeLocation {
                node: &root.children[index],
                parent_id: Some(root.id),
                grand_parent_id: None,
                index,
                depth: 1,
            });
        }
    }

    for root in roots {
        for child in &root.children {
            if let Some(index) = position(&child.children, id) {
                return Some(NodeLocation {
                    node: &child.children[index],
                    parent_id: Some(child.id),
                    grand_parent_id: Some(root.id),
                    index,
                    depth: 2,
                });
            }
        }
    }

    None
}

/// Sibling list owned by `parent_id` (`None` is the root sequence).
pub fn siblings(
    tree: &MenuTree,
    parent_id: Option<MenuId>,
) -> Option<&[MenuNode]> {
    match parent_id {
        None => Some(tree.roots()),
        Some(id) => {
            locate(tree, id).map(|location| location.node.children.as_slice())
        },
    }
}

fn position(nodes: &[MenuNode], id: MenuId) -> Option<usize> {
    nodes.iter().position(|node| node.id == id)
}
