use menu_tree::{
    CollapseState, Direction, DragController, DragOutcome, DropKind,
    DropTarget, ManualMoveError, MenuId, MenuNode, MenuTree, append_at_root,
    classify, insert_as_child, locate, move_sibling, remove_by_id,
};

fn names(nodes: &[MenuNode]) -> Vec<&str> {
    nodes.iter().map(|node| node.name.as_str()).collect()
}

fn drop_on(tree: &MenuTree, active: u64, target: DropTarget) -> DragOutcome {
    let mut drag = DragController::new();
    assert!(drag.start(tree, MenuId(active)), "active node should exist");
    drag.hover(Some(target));
    drag.end(tree, Some(target))
}

fn sorted(tree: &MenuTree) -> MenuTree {
    fn sort_nodes(nodes: &[MenuNode]) -> Vec<MenuNode> {
        let mut nodes: Vec<MenuNode> = nodes
            .iter()
            .map(|node| node.clone().with_children(sort_nodes(&node.children)))
            .collect();
        nodes.sort_by_key(|node| node.id);
        nodes
    }

    MenuTree::new(sort_nodes(tree.roots()))
}

fn sample() -> MenuTree {
    MenuTree::new(vec![
        MenuNode::new(1, "Home"),
        MenuNode::new(2, "About").with_children(vec![
            MenuNode::new(3, "Team").with_children(vec![
                MenuNode::new(4, "Alice"),
                MenuNode::new(5, "Bob"),
            ]),
            MenuNode::new(6, "Jobs"),
        ]),
        MenuNode::new(7, "Blog").child(MenuNode::new(8, "Archive")),
    ])
}

#[test]
fn given_child_dragged_onto_other_root_when_dropped_then_it_is_reparented() {
    let tree = MenuTree::new(vec![
        MenuNode::new(1, "Home"),
        MenuNode::new(2, "About").child(MenuNode::new(3, "Team")),
    ]);

    let DragOutcome::Moved { tree: next, plan } =
        drop_on(&tree, 3, DropTarget::Row(MenuId(1)))
    else {
        panic!("team should move under home");
    };

    assert_eq!(plan.kind, DropKind::Reparent {
        parent_id: MenuId(1)
    });
    assert_eq!(names(next.roots()), vec!["Home", "About"]);
    assert_eq!(names(&next.roots()[0].children), vec!["Team"]);
    assert!(next.roots()[1].children.is_empty());
}

#[test]
fn given_root_siblings_when_last_dropped_on_first_then_it_moves_to_front() {
    let tree = MenuTree::new(vec![
        MenuNode::new(1, "A"),
        MenuNode::new(2, "B"),
        MenuNode::new(3, "C"),
    ]);

    let DragOutcome::Moved { tree: next, plan } =
        drop_on(&tree, 3, DropTarget::Row(MenuId(1)))
    else {
        panic!("c should reorder before a");
    };

    assert_eq!(plan.kind, DropKind::Reorder {
        parent_id: None,
        from: 2,
        to: 0
    });
    assert_eq!(names(next.roots()), vec!["C", "A", "B"]);
}

#[test]
fn given_children_when_moved_up_manually_then_boundary_stops_the_move() {
    let tree = MenuTree::new(vec![MenuNode::new(1, "A").with_children(vec![
        MenuNode::new(2, "X"),
        MenuNode::new(3, "Y"),
    ])]);

    let next = move_sibling(&tree, MenuId(3), Direction::Up)
        .expect("y can move above x");
    assert_eq!(names(&next.roots()[0].children), vec!["Y", "X"]);

    let again = move_sibling(&next, MenuId(3), Direction::Up);
    assert_eq!(
        again,
        Err(ManualMoveError::BoundaryHit {
            id: MenuId(3),
            direction: Direction::Up
        })
    );
    assert_eq!(names(&next.roots()[0].children), vec!["Y", "X"]);
}

#[test]
fn given_child_with_grandchildren_when_dropped_on_top_zone_then_it_is_flat()
{
    let tree = MenuTree::new(vec![MenuNode::new(1, "A").child(
        MenuNode::new(2, "X").child(MenuNode::new(3, "Deep")),
    )]);

    let DragOutcome::Moved { tree: next, plan } =
        drop_on(&tree, 2, DropTarget::TopLevel)
    else {
        panic!("top level drops always move");
    };

    assert_eq!(plan.kind, DropKind::TopLevelInsert);
    assert_eq!(names(next.roots()), vec!["X", "A"]);
    assert!(next.roots()[0].children.is_empty());
    assert!(next.roots()[1].children.is_empty());
    assert!(next.validate().is_ok());
}

#[test]
fn given_absent_ids_when_located_then_not_found() {
    let tree = sample();

    for id in 9..40 {
        assert!(locate(&tree, MenuId(id)).is_none());
    }
}

#[test]
fn given_any_node_when_removed_and_reinserted_then_tree_is_equal_up_to_order()
{
    let tree = sample();

    for (_, node) in tree.depth_first() {
        let location = locate(&tree, node.id).expect("node should be found");
        let removed = remove_by_id(&tree, node.id);
        let restored = match location.parent_id {
            Some(parent_id) => {
                insert_as_child(&removed, parent_id, location.node.clone())
            },
            None => append_at_root(&removed, location.node.clone()),
        };

        assert_eq!(sorted(&restored), sorted(&tree), "node {}", node.id);
    }
}

#[test]
fn given_every_drop_when_ended_then_invariants_still_hold() {
    let tree = sample();
    let ids: Vec<MenuId> =
        tree.depth_first().into_iter().map(|(_, node)| node.id).collect();

    for active in &ids {
        let mut targets = vec![DropTarget::TopLevel];
        for over in &ids {
            targets.push(DropTarget::Row(*over));
            targets.push(DropTarget::Inside(*over));
        }

        for target in targets {
            let outcome = drop_on(&tree, active.get(), target);
            let next = match outcome {
                DragOutcome::Moved { tree: next, .. } => next,
                DragOutcome::Cancelled(_) => continue,
            };

            assert!(
                next.validate().is_ok(),
                "drop of {active} on {target:?} broke the tree"
            );
            assert!(next.contains(*active));
        }
    }
}

#[test]
fn given_self_drop_when_classified_then_tree_never_changes() {
    let tree = sample();

    for (_, node) in tree.depth_first() {
        assert!(classify(&tree, node.id, DropTarget::Row(node.id)).is_err());
        let outcome = drop_on(&tree, node.id.get(), DropTarget::Row(node.id));
        assert!(matches!(outcome, DragOutcome::Cancelled(_)));
    }
}

#[test]
fn given_collapse_toggle_when_repeated_then_original_state_returns() {
    let state = CollapseState::default().toggle(MenuId(2));

    for (_, node) in sample().depth_first() {
        assert_eq!(state.toggle(node.id).toggle(node.id), state);
    }
}
