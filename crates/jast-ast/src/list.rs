//! Editing handle for a list slot.

use crate::arena::NodeArena;
use crate::base::{NodeIndex, NodeList};
use crate::error::AstError;
use crate::kind::SlotInfo;
use crate::mutation::reparent_event;
use crate::observer::{AstEvent, ListChange};
use crate::property::PropertyTag;
use tracing::debug;

/// A list slot of one node, borrowed for editing.
///
/// Every edit keeps parent links in sync: inserted nodes are adopted by the
/// owner, displaced and removed nodes are detached.
pub struct NodeListMut<'a> {
    arena: &'a mut NodeArena,
    owner: NodeIndex,
    info: &'static SlotInfo,
}

impl NodeArena {
    /// Borrow the list slot `tag` of `owner` for editing.
    pub fn list_mut(&mut self, owner: NodeIndex, tag: PropertyTag) -> Result<NodeListMut<'_>, AstError> {
        let info = self.slot_info(owner, tag, true)?;
        Ok(NodeListMut {
            arena: self,
            owner,
            info,
        })
    }
}

impl NodeListMut<'_> {
    #[inline]
    pub fn owner(&self) -> NodeIndex {
        self.owner
    }

    #[inline]
    pub fn property(&self) -> PropertyTag {
        self.info.tag
    }

    pub fn as_slice(&self) -> &[NodeIndex] {
        self.arena
            .list(self.owner, self.info.tag)
            .map(NodeList::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<NodeIndex> {
        self.as_slice().get(index).copied()
    }

    /// Append `child`.
    pub fn push(&mut self, child: NodeIndex) -> Result<(), AstError> {
        self.insert(self.len(), child)
    }

    /// Insert `child` at `index`, shifting later elements.
    pub fn insert(&mut self, index: usize, child: NodeIndex) -> Result<(), AstError> {
        let len = self.len();
        if index > len {
            return Err(self.out_of_bounds(index, len));
        }
        self.arena.check_attach(self.owner, self.info, child)?;
        self.arena.notify(&[
            AstEvent::ListChange {
                node: self.owner,
                property: self.info.tag,
                change: ListChange::Addition,
                index,
                child,
            },
            reparent_event(child, NodeIndex::NONE, self.owner),
        ])?;
        if let Some(list) = self.arena.list_raw(self.owner, self.info.tag) {
            list.insert(index, child);
        }
        self.arena.set_parent_raw(child, self.owner);
        debug!(owner = %self.owner, property = %self.info.tag, index, %child, "list insert");
        Ok(())
    }

    /// Replace the element at `index` with `child` and return the detached
    /// previous element. Setting an element to itself is a no-op.
    pub fn set(&mut self, index: usize, child: NodeIndex) -> Result<NodeIndex, AstError> {
        let len = self.len();
        let Some(old) = self.get(index) else {
            return Err(self.out_of_bounds(index, len));
        };
        if old == child {
            return Ok(old);
        }
        self.arena.check_attach(self.owner, self.info, child)?;
        self.arena.notify(&[
            AstEvent::ListReplacement {
                node: self.owner,
                property: self.info.tag,
                index,
                old,
                new: child,
            },
            reparent_event(old, self.owner, NodeIndex::NONE),
            reparent_event(child, NodeIndex::NONE, self.owner),
        ])?;
        if let Some(slot) = self
            .arena
            .list_raw(self.owner, self.info.tag)
            .and_then(|list| list.get_mut(index))
        {
            *slot = child;
        }
        self.arena.set_parent_raw(old, NodeIndex::NONE);
        self.arena.set_parent_raw(child, self.owner);
        debug!(owner = %self.owner, property = %self.info.tag, index, %old, %child, "list set");
        Ok(old)
    }

    /// Remove and detach the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<NodeIndex, AstError> {
        let len = self.len();
        let Some(child) = self.get(index) else {
            return Err(self.out_of_bounds(index, len));
        };
        self.arena.notify(&[
            AstEvent::ListChange {
                node: self.owner,
                property: self.info.tag,
                change: ListChange::Removal,
                index,
                child,
            },
            reparent_event(child, self.owner, NodeIndex::NONE),
        ])?;
        if let Some(list) = self.arena.list_raw(self.owner, self.info.tag) {
            list.remove(index);
        }
        self.arena.set_parent_raw(child, NodeIndex::NONE);
        debug!(owner = %self.owner, property = %self.info.tag, index, %child, "list remove");
        Ok(child)
    }

    /// Remove `child` by identity. `false` if it is not in the list.
    pub fn remove(&mut self, child: NodeIndex) -> Result<bool, AstError> {
        match self.as_slice().iter().position(|&n| n == child) {
            Some(index) => self.remove_at(index).map(|_| true),
            None => Ok(false),
        }
    }

    fn out_of_bounds(&self, index: usize, len: usize) -> AstError {
        AstError::IndexOutOfBounds {
            property: self.info.tag,
            index,
            len,
        }
    }
}

#[cfg(test)]
#[path = "../tests/list_tests.rs"]
mod tests;
