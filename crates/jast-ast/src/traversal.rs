//! Tree walks, ancestor queries and the parent-link consistency check.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::kind::SyntaxKind;
use crate::node::Node;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use thiserror::Error;

/// Order in which `NodeArena::walk` yields nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TreeTraversal {
    /// The node, then each child subtree in slot order.
    PreOrder,
    /// Each child subtree in slot order, then the node.
    PostOrder,
    /// Level by level, slot order within a level.
    BreadthFirst,
    /// The parent chain, nearest first. Excludes the start node.
    Parents,
    /// The children only, in slot order.
    DirectChildren,
}

/// Iterator over the parent chain of a node, nearest first.
pub struct Ancestors<'a> {
    arena: &'a NodeArena,
    next: NodeIndex,
    remaining: usize,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeIndex;

    fn next(&mut self) -> Option<NodeIndex> {
        if self.next.is_none() || self.remaining == 0 {
            return None;
        }
        let current = self.next;
        self.next = self.arena.parent(current);
        self.remaining -= 1;
        Some(current)
    }
}

impl NodeArena {
    /// Nodes reachable from `node` in the requested order.
    pub fn walk(&self, node: NodeIndex, order: TreeTraversal) -> Vec<NodeIndex> {
        if !self.contains(node) {
            return Vec::new();
        }
        match order {
            TreeTraversal::PreOrder => {
                let mut out = Vec::new();
                let mut stack = vec![node];
                while let Some(current) = stack.pop() {
                    out.push(current);
                    stack.extend(self.children(current).into_iter().rev());
                }
                out
            }
            TreeTraversal::PostOrder => {
                let mut out = Vec::new();
                let mut stack = vec![(node, false)];
                while let Some((current, expanded)) = stack.pop() {
                    if expanded {
                        out.push(current);
                        continue;
                    }
                    stack.push((current, true));
                    stack.extend(self.children(current).into_iter().rev().map(|c| (c, false)));
                }
                out
            }
            TreeTraversal::BreadthFirst => {
                let mut out = Vec::new();
                let mut queue = VecDeque::from([node]);
                while let Some(current) = queue.pop_front() {
                    out.push(current);
                    queue.extend(self.children(current));
                }
                out
            }
            TreeTraversal::Parents => self.ancestors(node).collect(),
            TreeTraversal::DirectChildren => self.children(node).into_vec(),
        }
    }

    /// Proper ancestors of `node`, nearest first.
    pub fn ancestors(&self, node: NodeIndex) -> Ancestors<'_> {
        Ancestors {
            arena: self,
            next: self.parent(node),
            remaining: self.nodes.len(),
        }
    }

    /// The topmost ancestor of `node`, or `node` itself when it has no parent.
    pub fn root_of(&self, node: NodeIndex) -> NodeIndex {
        self.ancestors(node).last().unwrap_or(node)
    }

    /// Nearest proper ancestor satisfying `predicate`.
    pub fn find_ancestor(
        &self,
        node: NodeIndex,
        mut predicate: impl FnMut(NodeIndex, &Node) -> bool,
    ) -> Option<NodeIndex> {
        self.ancestors(node)
            .find(|&a| self.get(a).is_some_and(|n| predicate(a, n)))
    }

    pub fn find_ancestor_of_kind(&self, node: NodeIndex, kinds: &[SyntaxKind]) -> Option<NodeIndex> {
        self.find_ancestor(node, |_, n| kinds.contains(&n.kind()))
    }

    /// Whether `ancestor` is a proper ancestor of `node`.
    pub fn is_ancestor_of(&self, ancestor: NodeIndex, node: NodeIndex) -> bool {
        ancestor.is_some() && self.ancestors(node).any(|a| a == ancestor)
    }

    /// Check the parent-link invariant over the whole arena: every child's
    /// parent is the node holding it, no node is held twice, and every parent
    /// link points at a node that holds the child.
    pub fn verify_parent_links(&self) -> Result<(), ParentLinkViolation> {
        let mut holder: FxHashMap<NodeIndex, NodeIndex> = FxHashMap::default();
        for (index, node) in self.iter() {
            for child in node.data.children() {
                let Some(child_node) = self.get(child) else {
                    return Err(ParentLinkViolation::DanglingChild {
                        parent: index,
                        child,
                    });
                };
                if let Some(previous) = holder.insert(child, index) {
                    return Err(ParentLinkViolation::SharedChild {
                        child,
                        first: previous,
                        second: index,
                    });
                }
                if child_node.parent != index {
                    return Err(ParentLinkViolation::WrongParent {
                        child,
                        holder: index,
                        recorded: child_node.parent,
                    });
                }
            }
        }
        for (index, node) in self.iter() {
            if node.parent.is_some() && holder.get(&index) != Some(&node.parent) {
                return Err(ParentLinkViolation::StaleParent {
                    child: index,
                    recorded: node.parent,
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParentLinkViolation {
    #[error("{parent} holds {child}, which does not exist")]
    DanglingChild { parent: NodeIndex, child: NodeIndex },
    #[error("{child} is held by both {first} and {second}")]
    SharedChild {
        child: NodeIndex,
        first: NodeIndex,
        second: NodeIndex,
    },
    #[error("{child} is held by {holder} but records parent {recorded}")]
    WrongParent {
        child: NodeIndex,
        holder: NodeIndex,
        recorded: NodeIndex,
    },
    #[error("{child} records parent {recorded}, which does not hold it")]
    StaleParent { child: NodeIndex, recorded: NodeIndex },
}

#[cfg(test)]
#[path = "../tests/traversal_tests.rs"]
mod tests;
