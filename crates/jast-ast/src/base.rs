//! Base types shared by every node: indices and ordered child lists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Index of a node inside a `NodeArena`.
///
/// `NodeIndex::NONE` stands for "absent": an empty optional slot, a missing
/// parent, or a null argument to a mutator.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(&self) -> bool {
        *self == NodeIndex::NONE
    }

    #[inline]
    pub fn is_some(&self) -> bool {
        *self != NodeIndex::NONE
    }

    /// `None` for the sentinel, `Some(self)` otherwise.
    #[inline]
    pub fn into_option(self) -> Option<NodeIndex> {
        if self.is_none() { None } else { Some(self) }
    }

    #[inline]
    pub(crate) fn slot(self) -> usize {
        self.0 as usize
    }
}

impl Default for NodeIndex {
    fn default() -> Self {
        NodeIndex::NONE
    }
}

impl From<Option<NodeIndex>> for NodeIndex {
    fn from(value: Option<NodeIndex>) -> Self {
        value.unwrap_or(NodeIndex::NONE)
    }
}

impl fmt::Debug for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            f.write_str("#none")
        } else {
            write!(f, "#{}", self.0)
        }
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// An ordered list of owned children.
///
/// The list itself is plain storage. Every element's parent link is kept in
/// sync by the arena, so lists inside the tree are only edited through
/// `NodeArena::list_mut`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeList {
    pub(crate) nodes: Vec<NodeIndex>,
}

impl NodeList {
    pub fn new() -> NodeList {
        NodeList { nodes: Vec::new() }
    }

    /// Build a list for a node that has not been added yet.
    pub fn from_vec(nodes: Vec<NodeIndex>) -> NodeList {
        NodeList { nodes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<NodeIndex> {
        self.nodes.get(index).copied()
    }

    /// Position of `node` in the list, matched by identity.
    pub fn position(&self, node: NodeIndex) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }

    #[inline]
    pub fn contains(&self, node: NodeIndex) -> bool {
        self.position(node).is_some()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = NodeIndex> + ExactSizeIterator + '_ {
        self.nodes.iter().copied()
    }

    pub fn as_slice(&self) -> &[NodeIndex] {
        &self.nodes
    }
}

impl From<Vec<NodeIndex>> for NodeList {
    fn from(nodes: Vec<NodeIndex>) -> Self {
        NodeList { nodes }
    }
}

impl FromIterator<NodeIndex> for NodeList {
    fn from_iter<I: IntoIterator<Item = NodeIndex>>(iter: I) -> Self {
        NodeList {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = NodeIndex;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NodeIndex>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}
