#![forbid(unsafe_code)]

//! Parent-chain access for resolving bubbled pointer targets.

#[cfg(feature = "tracing")]
use crate::logging::trace;
#[cfg(not(feature = "tracing"))]
use crate::trace;

/// Read-only view of a node hierarchy (a DOM, or an in-memory stand-in).
pub trait DropTree {
    type Node: Clone;

    /// Immediate parent, or `None` at the root.
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Node identity (not structural equality).
    fn same_node(&self, a: &Self::Node, b: &Self::Node) -> bool;
}

/// Resolve `descendant` to the node whose immediate parent is `container`.
///
/// Walks the parent chain starting at `descendant` itself, so a direct child
/// resolves to itself. Returns `None` when the root is reached without
/// meeting `container`, including when `descendant` is `container`.
pub fn get_direct_child<T>(tree: &T, container: &T::Node, descendant: &T::Node) -> Option<T::Node>
where
    T: DropTree + ?Sized,
{
    let mut current = descendant.clone();
    loop {
        let Some(parent) = tree.parent(&current) else {
            trace!("dnd.geometry.direct_child.uncontained");
            return None;
        };
        if tree.same_node(&parent, container) {
            return Some(current);
        }
        current = parent;
    }
}

/// Handle into an [`ArenaTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Reasons an [`ArenaTree`] refuses to create a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArenaTreeError {
    /// The parent handle was not issued by this tree.
    UnknownParent(NodeId),
    /// Every `u32` handle is in use.
    Full,
}

impl core::fmt::Display for ArenaTreeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownParent(parent) => write!(f, "unknown parent node {}", parent.0),
            Self::Full => write!(f, "arena tree is full"),
        }
    }
}

impl std::error::Error for ArenaTreeError {}

/// Append-only in-memory tree.
///
/// Nodes are created detached or under an existing parent; there is no
/// reparenting, so the parent chain is always acyclic. Handles are `u32`,
/// which caps the tree at `u32::MAX + 1` nodes.
#[derive(Debug, Clone, Default)]
pub struct ArenaTree {
    parents: Vec<Option<NodeId>>,
}

impl ArenaTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached root node.
    pub fn add_root(&mut self) -> Result<NodeId, ArenaTreeError> {
        self.push(None)
    }

    /// Create a node under `parent`.
    pub fn add_child(&mut self, parent: NodeId) -> Result<NodeId, ArenaTreeError> {
        if parent.index() >= self.parents.len() {
            return Err(ArenaTreeError::UnknownParent(parent));
        }
        self.push(Some(parent))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Every node in creation order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.parents.len()).filter_map(Self::id_at)
    }

    /// Children of `node` in creation order.
    pub fn children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter(move |(_, parent)| **parent == Some(node))
            .filter_map(|(idx, _)| Self::id_at(idx))
    }

    // `push` never stores past `u32::MAX`, so this only fails for indices
    // that were never issued.
    fn id_at(idx: usize) -> Option<NodeId> {
        u32::try_from(idx).ok().map(NodeId)
    }

    fn push(&mut self, parent: Option<NodeId>) -> Result<NodeId, ArenaTreeError> {
        let id = Self::id_at(self.parents.len()).ok_or(ArenaTreeError::Full)?;
        self.parents.push(parent);
        Ok(id)
    }
}

impl DropTree for ArenaTree {
    type Node = NodeId;

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.parents.get(node.index()).copied().flatten()
    }

    fn same_node(&self, a: &NodeId, b: &NodeId) -> bool {
        a == b
    }
}
