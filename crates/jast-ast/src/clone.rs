//! Deep clone as a visitor pass.
//!
//! `CloneVisitor` copies a subtree post-order into a `ClonedNodes` buffer
//! whose indices are local to the buffer. `NodeArena::graft` then moves the
//! buffer into an arena in one step. Clones carry every scalar, every child
//! and all per-node user data; they never carry a parent link or a source
//! range.

use crate::arena::{NodeArena, UserValue};
use crate::base::NodeIndex;
use crate::error::AstError;
use crate::node::{Node, NodeData, SlotMut};
use crate::traversal::TreeTraversal;
use crate::visitor::GenericVisitor;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Nodes produced by a clone pass, not yet placed in an arena.
#[derive(Default)]
pub struct ClonedNodes {
    nodes: Vec<NodeData>,
    user_data: Vec<(NodeIndex, FxHashMap<&'static str, UserValue>)>,
}

impl ClonedNodes {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Clones every kind the same way, so only `visit_default` is implemented.
pub struct CloneVisitor;

impl GenericVisitor<ClonedNodes> for CloneVisitor {
    /// Index of the copy inside the buffer.
    type Output = NodeIndex;

    fn visit_default(&mut self, arena: &NodeArena, node: NodeIndex, out: &mut ClonedNodes) -> NodeIndex {
        let Some(source) = arena.get(node) else {
            return NodeIndex::NONE;
        };
        let mut data = source.data().clone();
        for (_, slot) in data.slots_mut() {
            match slot {
                SlotMut::Single(child) => {
                    if child.is_some() {
                        *child = self.visit(arena, *child, out);
                    }
                }
                SlotMut::List(list) => {
                    for child in list.nodes.iter_mut() {
                        *child = self.visit(arena, *child, out);
                    }
                }
            }
        }

        let copy = NodeIndex(out.nodes.len() as u32);
        out.nodes.push(data);
        if let Some(entries) = arena.user_data.get(&node) {
            out.user_data.push((copy, entries.clone()));
        }
        copy
    }
}

impl NodeArena {
    /// Move cloned nodes into this arena and return the new index of `root`.
    ///
    /// Grafted nodes are new, so no notification is sent.
    pub fn graft(&mut self, cloned: ClonedNodes, root: NodeIndex) -> NodeIndex {
        let base = self.nodes.len() as u32;
        let shift = |index: &mut NodeIndex| {
            if index.is_some() {
                index.0 += base;
            }
        };

        self.nodes.reserve(cloned.nodes.len());
        for mut data in cloned.nodes {
            for (_, slot) in data.slots_mut() {
                match slot {
                    SlotMut::Single(child) => shift(child),
                    SlotMut::List(list) => list.nodes.iter_mut().for_each(shift),
                }
            }
            self.nodes.push(Node {
                data,
                parent: NodeIndex::NONE,
                range: None,
            });
        }

        for offset in 0..(self.nodes.len() as u32 - base) {
            let parent = NodeIndex(base + offset);
            for child in self.children(parent) {
                self.set_parent_raw(child, parent);
            }
        }

        for (mut node, entries) in cloned.user_data {
            shift(&mut node);
            self.user_data.insert(node, entries);
        }

        if root.is_none() {
            return NodeIndex::NONE;
        }
        NodeIndex(root.0 + base)
    }

    /// Clone the subtree rooted at `node` into this arena. The copy is a
    /// parentless root without source ranges.
    pub fn deep_clone(&mut self, node: NodeIndex) -> Result<NodeIndex, AstError> {
        let mut cloned = ClonedNodes::default();
        let root = clone_into_buffer(self, node, &mut cloned)?;
        Ok(self.graft(cloned, root))
    }

    /// Copy the tree under `root` into a fresh arena and return it with the
    /// new index of `root`.
    ///
    /// Detached nodes and their user data are left behind. Unlike
    /// `deep_clone`, source ranges are kept. Observers are not carried over.
    pub fn compact(&self, root: NodeIndex) -> Result<(NodeArena, NodeIndex), AstError> {
        let mut target = NodeArena::new();
        let copy = clone_subtree(self, root, &mut target)?;
        let originals = self.walk(root, TreeTraversal::PreOrder);
        let copies = target.walk(copy, TreeTraversal::PreOrder);
        for (original, copied) in originals.into_iter().zip(copies) {
            let range = self.range(original);
            if let Some(node) = target.get_mut(copied) {
                node.range = range;
            }
        }
        debug!(%root, before = self.len(), after = target.len(), "arena compacted");
        Ok((target, copy))
    }
}

/// Clone the subtree rooted at `node` in `source` into `target`.
pub fn clone_subtree(
    source: &NodeArena,
    node: NodeIndex,
    target: &mut NodeArena,
) -> Result<NodeIndex, AstError> {
    let mut cloned = ClonedNodes::default();
    let root = clone_into_buffer(source, node, &mut cloned)?;
    Ok(target.graft(cloned, root))
}

fn clone_into_buffer(
    arena: &NodeArena,
    node: NodeIndex,
    out: &mut ClonedNodes,
) -> Result<NodeIndex, AstError> {
    if !arena.contains(node) {
        return Err(AstError::InvalidIndex(node));
    }
    let root = CloneVisitor.visit(arena, node, out);
    debug!(%node, copied = out.len(), "subtree cloned");
    Ok(root)
}

#[cfg(test)]
#[path = "../tests/clone_tests.rs"]
mod tests;
