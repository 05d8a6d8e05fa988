//! NodeArena: storage for one tree and node construction.
//!
//! An arena owns every node of a tree handle. Nodes are addressed by
//! `NodeIndex`; children are owned through the slots of their parent, and the
//! parent link is a separate back-reference that only the mutation protocol
//! writes. Detached nodes stay allocated until the arena is dropped.

use crate::base::NodeIndex;
use crate::error::AstError;
use crate::kind::{SlotInfo, SlotShape, SyntaxKind};
use crate::node::{Node, NodeData, SlotMut, SlotRef};
use crate::observer::{AstEvent, ObserverRegistry};
use crate::property::PropertyTag;
use jast_common::TextRange;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

pub(crate) type UserValue = Arc<dyn Any + Send + Sync>;

/// Storage for one tree.
///
/// Removing or replacing a node only detaches it, so detached nodes and their
/// user data are kept until the arena is dropped. A long edit loop should
/// periodically move its tree into a fresh arena with `NodeArena::compact`.
#[derive(Default)]
pub struct NodeArena {
    pub(crate) nodes: Vec<Node>,
    pub(crate) observers: ObserverRegistry,
    pub(crate) user_data: FxHashMap<NodeIndex, FxHashMap<&'static str, UserValue>>,
}

impl fmt::Debug for NodeArena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeArena")
            .field("nodes", &self.nodes.len())
            .field("observers", &self.observers)
            .field("user_data", &self.user_data.len())
            .finish()
    }
}

impl NodeArena {
    /// Maximum pre-allocation to avoid capacity overflow on huge inputs.
    const MAX_NODE_PREALLOC: usize = 5_000_000;

    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn with_capacity(capacity: usize) -> NodeArena {
        NodeArena {
            nodes: Vec::with_capacity(capacity.min(Self::MAX_NODE_PREALLOC)),
            ..NodeArena::default()
        }
    }

    /// Number of nodes ever allocated, attached or not.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, index: NodeIndex) -> bool {
        index.is_some() && index.slot() < self.nodes.len()
    }

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            return None;
        }
        self.nodes.get(index.slot())
    }

    pub(crate) fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            return None;
        }
        self.nodes.get_mut(index.slot())
    }

    pub(crate) fn node(&self, index: NodeIndex) -> Result<&Node, AstError> {
        self.get(index).ok_or(AstError::InvalidIndex(index))
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.get(index).map(Node::kind)
    }

    /// Parent of `index`, or `NodeIndex::NONE` for roots, detached nodes and
    /// unknown indices.
    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.get(index).map_or(NodeIndex::NONE, |n| n.parent)
    }

    #[inline]
    pub fn range(&self, index: NodeIndex) -> Option<TextRange> {
        self.get(index).and_then(|n| n.range)
    }

    /// The occupant of the single-child slot `tag`. `NONE` if the slot is
    /// empty, is a list, or does not exist.
    pub fn child(&self, index: NodeIndex, tag: PropertyTag) -> NodeIndex {
        self.get(index)
            .and_then(|n| n.data.slot(tag))
            .and_then(|slot| slot.single())
            .unwrap_or(NodeIndex::NONE)
    }

    /// The list slot `tag` of `index`, if it has one.
    pub fn list(&self, index: NodeIndex, tag: PropertyTag) -> Option<&crate::base::NodeList> {
        self.get(index)
            .and_then(|n| n.data.slot(tag))
            .and_then(|slot| slot.list())
    }

    /// All children of `index` in slot order.
    pub fn children(&self, index: NodeIndex) -> SmallVec<[NodeIndex; 8]> {
        self.get(index)
            .map(|n| n.data.children())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }

    /// Add a parentless node without a source range.
    pub fn add(&mut self, data: impl Into<NodeData>) -> Result<NodeIndex, AstError> {
        self.add_with_range(data, None)
    }

    /// Add a node and adopt its children.
    ///
    /// Every required slot must be filled, and every child must exist, be
    /// parentless, be accepted by its slot and appear only once. On success
    /// each child's parent becomes the new node; observers see one
    /// `ParentChange` per child before that happens.
    pub fn add_with_range(
        &mut self,
        data: impl Into<NodeData>,
        range: Option<TextRange>,
    ) -> Result<NodeIndex, AstError> {
        let data = data.into();
        let kind = data.kind();
        check_identifier(&data)?;

        let index = NodeIndex(self.nodes.len() as u32);
        let mut seen = FxHashSet::default();
        let mut events = Vec::new();
        for (info, (_, slot)) in kind.slots().iter().zip(data.slots()) {
            let children: SmallVec<[NodeIndex; 4]> = match slot {
                SlotRef::Single(child) if child.is_none() => {
                    if info.shape == SlotShape::Required {
                        return Err(AstError::NullValue {
                            kind,
                            property: info.tag,
                        });
                    }
                    continue;
                }
                SlotRef::Single(child) => SmallVec::from_slice(&[child]),
                SlotRef::List(list) => list.iter().collect(),
            };
            for child in children {
                self.check_adoptable(kind, info, child)?;
                if !seen.insert(child) {
                    return Err(AstError::DuplicateChild(child));
                }
                events.push(AstEvent::ParentChange {
                    node: child,
                    old_parent: NodeIndex::NONE,
                    new_parent: index,
                });
            }
        }

        self.notify(&events)?;
        for event in &events {
            self.set_parent_raw(event.node(), index);
        }
        self.nodes.push(Node {
            data,
            parent: NodeIndex::NONE,
            range,
        });
        trace!(%index, %kind, children = events.len(), "node added");
        Ok(index)
    }

    /// Checks shared by construction and attachment: `child` exists, is
    /// detached and is accepted by the slot.
    fn check_adoptable(
        &self,
        kind: SyntaxKind,
        info: &SlotInfo,
        child: NodeIndex,
    ) -> Result<(), AstError> {
        if child.is_none() {
            return Err(AstError::NullValue {
                kind,
                property: info.tag,
            });
        }
        let node = self.node(child)?;
        if node.parent.is_some() {
            return Err(AstError::AlreadyParented {
                child,
                parent: node.parent,
            });
        }
        if !info.accepts_kind(node.kind()) {
            return Err(AstError::KindMismatch {
                kind,
                property: info.tag,
                found: node.kind(),
            });
        }
        Ok(())
    }

    /// Validate attaching `child` to slot `info` of the existing node `parent`.
    pub(crate) fn check_attach(
        &self,
        parent: NodeIndex,
        info: &SlotInfo,
        child: NodeIndex,
    ) -> Result<(), AstError> {
        let kind = self.node(parent)?.kind();
        self.check_adoptable(kind, info, child)?;
        if child == parent || self.is_ancestor_of(child, parent) {
            return Err(AstError::Cycle { child, parent });
        }
        Ok(())
    }

    /// Resolve `tag` to a slot of `index`, requiring a particular shape family.
    pub(crate) fn slot_info(
        &self,
        index: NodeIndex,
        tag: PropertyTag,
        list: bool,
    ) -> Result<&'static SlotInfo, AstError> {
        let kind = self.node(index)?.kind();
        let info = kind.slot(tag).ok_or(AstError::UnknownProperty {
            kind,
            property: tag,
        })?;
        if (info.shape == SlotShape::List) != list {
            return Err(AstError::SlotShape {
                kind,
                property: tag,
                shape: info.shape,
            });
        }
        Ok(info)
    }

    // -------------------------------------------------------------------------
    // Raw writes. Callers have validated and notified already.
    // -------------------------------------------------------------------------

    pub(crate) fn set_parent_raw(&mut self, index: NodeIndex, parent: NodeIndex) {
        if let Some(node) = self.get_mut(index) {
            node.parent = parent;
        }
    }

    pub(crate) fn write_single_raw(&mut self, index: NodeIndex, tag: PropertyTag, value: NodeIndex) {
        if let Some(SlotMut::Single(slot)) = self.get_mut(index).and_then(|n| n.data.slot_mut(tag)) {
            *slot = value;
        }
    }

    pub(crate) fn list_raw(&mut self, index: NodeIndex, tag: PropertyTag) -> Option<&mut Vec<NodeIndex>> {
        match self.get_mut(index).and_then(|n| n.data.slot_mut(tag)) {
            Some(SlotMut::List(list)) => Some(&mut list.nodes),
            _ => None,
        }
    }
}

pub(crate) fn check_identifier(data: &NodeData) -> Result<(), AstError> {
    match data.identifier() {
        Some(text) if text.is_empty() => Err(AstError::EmptyIdentifier { kind: data.kind() }),
        _ => Ok(()),
    }
}

#[cfg(test)]
#[path = "../tests/arena_tests.rs"]
mod tests;
