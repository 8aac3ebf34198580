//! Copy-on-write tree transformations.
//!
//! Every function takes the current snapshot by reference and returns a new
//! snapshot; the input is never modified. Internally each operation clones
//! the tree once and edits the clone in place.

use crate::classify::{DropKind, DropPlan};
use crate::errors::TreeError;
use crate::locate::locate;
use crate::model::{MAX_DEPTH, MenuId, MenuNode, MenuNodeFields, MenuTree};

/// Drop every node carrying `id`, at any depth, together with its subtree.
pub fn remove_by_id(tree: &MenuTree, id: MenuId) -> MenuTree {
    let mut next = tree.clone();
    retain_except(next.roots_mut(), id);
    next
}

/// Append `subtree` as the last child of `target_id`.
///
/// An unknown target leaves the tree unchanged.
pub fn insert_as_child(
    tree: &MenuTree,
    target_id: MenuId,
    subtree: MenuNode,
) -> MenuTree {
    let mut next = tree.clone();
    match find_mut(next.roots_mut(), target_id) {
        Some(target) => {
            target.children.push(subtree);
            next
        },
        None => tree.clone(),
    }
}

/// Prepend `subtree` to the root sequence, discarding its children.
pub fn insert_at_root(tree: &MenuTree, subtree: MenuNode) -> MenuTree {
    let mut next = tree.clone();
    let mut node = subtree;
    node.children.clear();
    next.roots_mut().insert(0, node);
    next
}

/// Append `subtree` to the end of the root sequence, children included.
pub fn append_at_root(tree: &MenuTree, subtree: MenuNode) -> MenuTree {
    let mut next = tree.clone();
    next.roots_mut().push(subtree);
    next
}

/// Move the element at `from` to the slot `to` refers to after removal.
///
/// This is an array move, not a two-element exchange: entries between the
/// two positions shift by one. Out-of-range indices return a plain copy.
pub fn swap_siblings<T: Clone>(
    siblings: &[T],
    from: usize,
    to: usize,
) -> Vec<T> {
    let mut moved = siblings.to_vec();
    if from >= moved.len() || to >= moved.len() || from == to {
        return moved;
    }

    let item = moved.remove(from);
    moved.insert(to, item);
    moved
}

/// Apply [`swap_siblings`] to the children of `parent_id` (`None` = roots).
pub fn reorder_siblings(
    tree: &MenuTree,
    parent_id: Option<MenuId>,
    from: usize,
    to: usize,
) -> MenuTree {
    let mut next = tree.clone();
    let Some(list) = sibling_list_mut(&mut next, parent_id) else {
        return next;
    };
    *list = swap_siblings(list.as_slice(), from, to);
    next
}

/// Execute a classified drop of `active_id`.
///
/// The moved subtree is read from `tree` itself, so a plan computed against
/// an older snapshot can never resurrect a deleted node.
pub fn apply_drop(
    tree: &MenuTree,
    active_id: MenuId,
    plan: &DropPlan,
) -> MenuTree {
    match plan.kind {
        DropKind::TopLevelInsert => {
            let Some(location) = locate(tree, active_id) else {
                return tree.clone();
            };
            let node = location.node.clone();
            insert_at_root(&remove_by_id(tree, active_id), node)
        },
        DropKind::Reorder {
            parent_id,
            from,
            to,
        } => reorder_siblings(tree, parent_id, from, to),
        DropKind::Reparent { parent_id } => {
            let Some(location) = locate(tree, active_id) else {
                return tree.clone();
            };
            let node = location.node.clone();
            insert_as_child(&remove_by_id(tree, active_id), parent_id, node)
        },
    }
}

/// Append a new node at the root (`parent_id == None`) or under a parent.
pub fn add_node(
    tree: &MenuTree,
    parent_id: Option<MenuId>,
    node: MenuNode,
) -> Result<MenuTree, TreeError> {
    if tree.contains(node.id) {
        return Err(TreeError::DuplicateId(node.id));
    }

    let depth = match parent_id {
        None => 0,
        Some(parent_id) => {
            let parent = locate(tree, parent_id)
                .ok_or(TreeError::NotFound(parent_id))?;
            parent.depth + 1
        },
    };
    let deepest = depth + node.subtree_height();
    if deepest > MAX_DEPTH {
        return Err(TreeError::DepthViolation {
            id: node.id,
            depth: deepest,
        });
    }

    Ok(match parent_id {
        Some(parent_id) => insert_as_child(tree, parent_id, node),
        None => append_at_root(tree, node),
    })
}

/// Replace the editable fields of `id`, keeping its place and children.
pub fn update_node(
    tree: &MenuTree,
    id: MenuId,
    fields: MenuNodeFields,
) -> Result<MenuTree, TreeError> {
    let mut next = tree.clone();
    let node =
        find_mut(next.roots_mut(), id).ok_or(TreeError::NotFound(id))?;
    node.apply_fields(fields);
    Ok(next)
}

fn retain_except(nodes: &mut Vec<MenuNode>, id: MenuId) {
    nodes.retain(|node| node.id != id);
    for node in nodes.iter_mut() {
        retain_except(&mut node.children, id);
    }
}

fn find_mut(nodes: &mut [MenuNode], id: MenuId) -> Option<&mut MenuNode> {
    for node in nodes.iter_mut() {
        if node.id == id {
            return Some(node);
        }
        if node.subtree_contains(id) {
            return find_mut(&mut node.children, id);
        }
    }
    None
}

fn sibling_list_mut(
    tree: &mut MenuTree,
    parent_id: Option<MenuId>,
) -> Option<&mut Vec<MenuNode>> {
    match parent_id {
        None => Some(tree.roots_mut()),
        Some(parent_id) => find_mut(tree.roots_mut(), parent_id)
            .map(|node| &mut node.children),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(nodes: &[MenuNode]) -> Vec<&str> {
        nodes.iter().map(|node| node.name.as_str()).collect()
    }

    fn fixture() -> MenuTree {
        MenuTree::new(vec![
            MenuNode::new(1, "Home"),
            MenuNode::new(2, "About").with_children(vec![
                MenuNode::new(3, "Team").child(MenuNode::new(4, "Alice")),
                MenuNode::new(5, "Jobs"),
            ]),
        ])
    }

    #[test]
    fn given_nested_node_when_removed_then_subtree_goes_with_it() {
        let tree = fixture();

        let next = remove_by_id(&tree, MenuId(3));

        assert!(!next.contains(MenuId(3)));
        assert!(!next.contains(MenuId(4)));
        assert_eq!(names(&next.roots()[1].children), vec!["Jobs"]);
        assert_eq!(tree, fixture());
    }

    #[test]
    fn given_unknown_id_when_removed_then_tree_is_unchanged() {
        let tree = fixture();

        assert_eq!(remove_by_id(&tree, MenuId(77)), tree);
    }

    #[test]
    fn given_target_when_inserting_child_then_it_is_appended_last() {
        let tree = fixture();

        let next = insert_as_child(&tree, MenuId(2), MenuNode::new(9, "Press"));

        assert_eq!(
            names(&next.roots()[1].children),
            vec!["Team", "Jobs", "Press"]
        );
    }

    #[test]
    fn given_unknown_target_when_inserting_child_then_tree_is_unchanged() {
        let tree = fixture();

        let next = insert_as_child(&tree, MenuId(99), MenuNode::new(9, "X"));

        assert_eq!(next, tree);
    }

    #[test]
    fn given_subtree_when_inserted_at_root_then_children_are_stripped() {
        let tree = fixture();
        let team = tree.roots()[1].children[0].clone();

        let next = insert_at_root(&remove_by_id(&tree, MenuId(3)), team);

        assert_eq!(names(next.roots()), vec!["Team", "Home", "About"]);
        assert!(next.roots()[0].children.is_empty());
        assert!(!next.contains(MenuId(4)));
    }

    #[test]
    fn given_distant_indices_when_swapping_then_array_move_is_applied() {
        let list = vec!['a', 'b', 'c', 'd'];

        assert_eq!(swap_siblings(&list, 0, 2), vec!['b', 'c', 'a', 'd']);
        assert_eq!(swap_siblings(&list, 3, 0), vec!['d', 'a', 'b', 'c']);
        assert_eq!(swap_siblings(&list, 1, 2), vec!['a', 'c', 'b', 'd']);
    }

    #[test]
    fn given_out_of_range_index_when_swapping_then_copy_is_returned() {
        let list = vec![1, 2, 3];

        assert_eq!(swap_siblings(&list, 3, 0), list);
        assert_eq!(swap_siblings(&list, 0, 5), list);
        assert_eq!(swap_siblings::<u8>(&[], 0, 0), Vec::<u8>::new());
    }

    #[test]
    fn given_any_move_when_swapping_then_sibling_multiset_is_preserved() {
        let list: Vec<u32> = (0..6).collect();

        for from in 0..list.len() {
            for to in 0..list.len() {
                let mut moved = swap_siblings(&list, from, to);
                assert_eq!(moved[to], list[from]);
                moved.sort_unstable();
                assert_eq!(moved, list);
            }
        }
    }

    #[test]
    fn given_parent_when_reordering_then_only_its_children_move() {
        let tree = fixture();

        let next = reorder_siblings(&tree, Some(MenuId(2)), 1, 0);

        assert_eq!(names(&next.roots()[1].children), vec!["Jobs", "Team"]);
        assert_eq!(names(next.roots()), vec!["Home", "About"]);
        assert_eq!(next.roots()[1].children[1].children.len(), 1);
    }

    #[test]
    fn given_grandchild_parent_when_adding_node_then_depth_is_violated() {
        let tree = fixture();

        let result = add_node(&tree, Some(MenuId(4)), MenuNode::new(9, "X"));

        assert!(matches!(
            result,
            Err(TreeError::DepthViolation {
                id: MenuId(9),
                depth: 3
            })
        ));
    }

    #[test]
    fn given_valid_parent_when_adding_node_then_it_is_appended() {
        let tree = fixture();

        let next = add_node(&tree, Some(MenuId(3)), MenuNode::new(9, "Bob"))
            .expect("child of depth-1 node is allowed");
        let next = add_node(&next, None, MenuNode::new(10, "Blog"))
            .expect("root insert is allowed");

        assert_eq!(names(&next.roots()[1].children[0].children), vec![
            "Alice", "Bob"
        ]);
        assert_eq!(names(next.roots()), vec!["Home", "About", "Blog"]);
    }

    #[test]
    fn given_existing_id_or_missing_parent_when_adding_then_error_is_returned()
    {
        let tree = fixture();

        assert!(matches!(
            add_node(&tree, None, MenuNode::new(5, "Dup")),
            Err(TreeError::DuplicateId(MenuId(5)))
        ));
        assert!(matches!(
            add_node(&tree, Some(MenuId(50)), MenuNode::new(9, "X")),
            Err(TreeError::NotFound(MenuId(50)))
        ));
    }

    #[test]
    fn given_fields_when_updating_node_then_structure_is_preserved() {
        let tree = fixture();
        let fields = MenuNodeFields {
            name: String::from("Our team"),
            path: String::from("/team"),
            show_icon: true,
            ..MenuNodeFields::default()
        };

        let next =
            update_node(&tree, MenuId(3), fields).expect("team should exist");

        let team = &next.roots()[1].children[0];
        assert_eq!(team.name, "Our team");
        assert_eq!(team.path, "/team");
        assert!(team.show_icon);
        assert_eq!(names(&team.children), vec!["Alice"]);
        assert!(matches!(
            update_node(&tree, MenuId(99), MenuNodeFields::default()),
            Err(TreeError::NotFound(MenuId(99)))
        ));
    }
}
