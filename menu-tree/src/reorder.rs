use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ManualMoveError;
use crate::locate::locate;
use crate::model::{MenuId, MenuTree};
use crate::mutate::reorder_siblings;

/// Direction of a pointer-free sibling move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Up => "up",
            Direction::Down => "down",
        };
        write!(f, "{label}")
    }
}

/// Exchange `id` with its preceding (`Up`) or following (`Down`) sibling.
///
/// Moving past either end of the sibling list yields
/// [`ManualMoveError::BoundaryHit`] and leaves the tree as it was.
pub fn move_sibling(
    tree: &MenuTree,
    id: MenuId,
    direction: Direction,
) -> Result<MenuTree, ManualMoveError> {
    let location = locate(tree, id).ok_or(ManualMoveError::NotFound(id))?;
    let sibling_count = match location.parent_id {
        None => tree.roots().len(),
        Some(parent_id) => locate(tree, parent_id)
            .map(|parent| parent.node.children.len())
            .ok_or(ManualMoveError::NotFound(parent_id))?,
    };

    let target = match direction {
        Direction::Up => location.index.checked_sub(1),
        Direction::Down => Some(location.index + 1)
            .filter(|index| *index < sibling_count),
    };
    let Some(target) = target else {
        return Err(ManualMoveError::BoundaryHit { id, direction });
    };

    // Adjacent indices: the array move is a plain exchange here.
    Ok(reorder_siblings(tree, location.parent_id, location.index, target))
}
