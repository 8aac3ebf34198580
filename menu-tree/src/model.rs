use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::TreeError;

/// Deepest level a node may occupy (`0` root, `1` child, `2` grandchild).
pub const MAX_DEPTH: usize = 2;

/// Stable identifier of a menu node, unique within one tree.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(transparent)]
pub struct MenuId(pub u64);

impl MenuId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for MenuId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Editable, non-structural fields of a menu node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNodeFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub icon_name: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(default, rename = "isIconPublish")]
    pub show_icon: bool,
    #[serde(default, rename = "isImagePublish")]
    pub show_image: bool,
}

/// One entry of the navigation menu.
///
/// The serialized shape is the persisted document shape; fields other than
/// `id` are optional on load and fall back to empty or unpublished values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    pub id: MenuId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub icon_name: String,
    #[serde(default)]
    pub image_path: String,
    #[serde(default, rename = "isIconPublish")]
    pub show_icon: bool,
    #[serde(default, rename = "isImagePublish")]
    pub show_image: bool,
    #[serde(default)]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create a leaf with the given label and empty presentation fields.
    pub fn new(id: impl Into<MenuId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: String::new(),
            icon_name: String::new(),
            image_path: String::new(),
            show_icon: false,
            show_image: false,
            children: Vec::new(),
        }
    }

    /// Create a leaf from editable fields.
    pub fn from_fields(id: MenuId, fields: MenuNodeFields) -> Self {
        let mut node = Self::new(id, String::new());
        node.apply_fields(fields);
        node
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn with_children(
        mut self,
        children: impl Into<Vec<MenuNode>>,
    ) -> Self {
        self.children = children.into();
        self
    }

    pub fn child(mut self, child: MenuNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Return the editable fields of this node.
    pub fn fields(&self) -> MenuNodeFields {
        MenuNodeFields {
            name: self.name.clone(),
            path: self.path.clone(),
            icon_name: self.icon_name.clone(),
            image_path: self.image_path.clone(),
            show_icon: self.show_icon,
            show_image: self.show_image,
        }
    }

    /// Replace the editable fields, leaving id and children untouched.
    pub fn apply_fields(&mut self, fields: MenuNodeFields) {
        self.name = fields.name;
        self.path = fields.path;
        self.icon_name = fields.icon_name;
        self.image_path = fields.image_path;
        self.show_icon = fields.show_icon;
        self.show_image = fields.show_image;
    }

    /// Return a copy of this node without its subtree.
    pub fn without_children(&self) -> Self {
        let mut node = self.clone();
        node.children.clear();
        node
    }

    /// Number of levels hanging below this node (`0` for a leaf).
    pub fn subtree_height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.subtree_height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Whether `id` names this node or one of its descendants.
    pub fn subtree_contains(&self, id: MenuId) -> bool {
        self.id == id
            || self.children.iter().any(|child| child.subtree_contains(id))
    }

    fn visit<'a>(
        &'a self,
        depth: usize,
        out: &mut Vec<(usize, &'a MenuNode)>,
    ) {
        out.push((depth, self));
        for child in &self.children {
            child.visit(depth + 1, out);
        }
    }
}

/// Ordered sequence of root-level menu nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTree {
    roots: Vec<MenuNode>,
}

impl MenuTree {
    pub fn new(roots: impl Into<Vec<MenuNode>>) -> Self {
        Self {
            roots: roots.into(),
        }
    }

    /// Parse a persisted document and check its invariants.
    pub fn from_json(payload: &str) -> Result<Self, TreeError> {
        let tree: MenuTree = serde_json::from_str(payload)?;
        tree.validate()?;
        Ok(tree)
    }

    /// Serialize the whole tree in the persisted document shape.
    pub fn to_json_pretty(&self) -> Result<String, TreeError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    pub(crate) fn roots_mut(&mut self) -> &mut Vec<MenuNode> {
        &mut self.roots
    }

    pub fn into_roots(self) -> Vec<MenuNode> {
        self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes at every depth.
    pub fn len(&self) -> usize {
        self.depth_first().len()
    }

    /// Every node paired with its depth, in depth-first order.
    pub fn depth_first(&self) -> Vec<(usize, &MenuNode)> {
        let mut out = Vec::new();
        for root in &self.roots {
            root.visit(0, &mut out);
        }
        out
    }

    pub fn contains(&self, id: MenuId) -> bool {
        self.roots.iter().any(|root| root.subtree_contains(id))
    }

    /// Largest id present in the tree.
    pub fn max_id(&self) -> Option<MenuId> {
        self.depth_first().into_iter().map(|(_, node)| node.id).max()
    }

    /// Check that ids are unique and no node sits below [`MAX_DEPTH`].
    pub fn validate(&self) -> Result<(), TreeError> {
        let mut seen = HashSet::new();
        for (depth, node) in self.depth_first() {
            if !seen.insert(node.id) {
                return Err(TreeError::DuplicateId(node.id));
            }
            if depth > MAX_DEPTH {
                return Err(TreeError::DepthViolation {
                    id: node.id,
                    depth,
                });
            }
        }
        Ok(())
    }
}

impl From<Vec<MenuNode>> for MenuTree {
    fn from(roots: Vec<MenuNode>) -> Self {
        Self::new(roots)
    }
}

/// Mints node ids that are never reused within one editing session.
///
/// Once `u64::MAX` has been handed out (or loaded) the allocator is
/// exhausted and refuses to mint rather than wrapping around.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: Option<u64>,
}

impl IdAllocator {
    /// Start after the largest id of `tree`.
    pub fn for_tree(tree: &MenuTree) -> Self {
        let next = match tree.max_id() {
            Some(max) => max.get().checked_add(1),
            None => Some(1),
        };
        Self { next }
    }

    pub fn mint(&mut self) -> Result<MenuId, TreeError> {
        let id = self.next.ok_or(TreeError::IdSpaceExhausted)?;
        self.next = id.checked_add(1);
        Ok(MenuId(id))
    }

    /// Make sure ids of an externally replaced tree are never minted again.
    pub fn observe(&mut self, tree: &MenuTree) {
        let Some(max) = tree.max_id() else {
            return;
        };
        self.next = match (self.next, max.get().checked_add(1)) {
            (Some(next), Some(after_max)) => Some(next.max(after_max)),
            _ => None,
        };
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}
