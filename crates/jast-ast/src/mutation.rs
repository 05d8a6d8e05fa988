//! The mutation protocol: single-slot writes, scalar writes, identity-based
//! `remove` and `replace`.
//!
//! Every mutator follows the same sequence: validate, build the events,
//! notify, commit. A failed call leaves the tree exactly as it was.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::error::AstError;
use crate::kind::SlotShape;
use crate::observer::{AstEvent, ListChange};
use crate::property::{PropertyTag, PropertyValue};
use jast_common::TextRange;
use tracing::{debug, trace};

impl NodeArena {
    /// Put `child` into the single-child slot `tag` of `parent` and return the
    /// previous occupant (`NONE` if the slot was empty).
    ///
    /// The previous occupant is detached. `NONE` clears an optional slot and
    /// is rejected for a required one. Setting the current occupant again is a
    /// no-op without notification.
    pub fn set_child(
        &mut self,
        parent: NodeIndex,
        tag: PropertyTag,
        child: NodeIndex,
    ) -> Result<NodeIndex, AstError> {
        let info = self.slot_info(parent, tag, false)?;
        let old = self.child(parent, tag);
        if old == child {
            return Ok(old);
        }
        if child.is_none() {
            if info.shape == SlotShape::Required {
                return Err(AstError::NullValue {
                    kind: self.node(parent)?.kind(),
                    property: tag,
                });
            }
        } else {
            self.check_attach(parent, info, child)?;
        }

        let mut events = vec![AstEvent::PropertyChange {
            node: parent,
            property: tag,
            old: PropertyValue::Node(old),
            new: PropertyValue::Node(child),
        }];
        push_reparent(&mut events, old, parent, NodeIndex::NONE);
        push_reparent(&mut events, child, NodeIndex::NONE, parent);
        self.notify(&events)?;

        self.write_single_raw(parent, tag, child);
        self.set_parent_raw(old, NodeIndex::NONE);
        self.set_parent_raw(child, parent);
        debug!(%parent, %tag, %old, %child, "child set");
        Ok(old)
    }

    /// Set a property from a value.
    ///
    /// Scalars take the value of their own type. A single-child slot takes
    /// `PropertyValue::Node` and behaves like `set_child`. `PropertyTag::Range`
    /// takes `PropertyValue::Range`. Returns `false` when the value equals the
    /// current one, in which case nothing is notified.
    pub fn set_property(
        &mut self,
        node: NodeIndex,
        tag: PropertyTag,
        value: impl Into<PropertyValue>,
    ) -> Result<bool, AstError> {
        let value = value.into();
        let kind = self.node(node)?.kind();

        if tag == PropertyTag::Range {
            return match value {
                PropertyValue::Range(range) => self.set_range(node, range),
                _ => Err(AstError::PropertyType {
                    kind,
                    property: tag,
                }),
            };
        }
        if kind.slot(tag).is_some() {
            let child = value.as_node().ok_or(AstError::PropertyType {
                kind,
                property: tag,
            })?;
            let old = self.set_child(node, tag, child)?;
            return Ok(old != child);
        }

        let unknown = AstError::UnknownProperty {
            kind,
            property: tag,
        };
        if !kind.has_scalar(tag) {
            return Err(unknown);
        }
        let current = self.node(node)?.data.scalar(tag).ok_or(unknown)?;
        if !current.same_type(&value) {
            return Err(AstError::PropertyType {
                kind,
                property: tag,
            });
        }
        if current == value {
            return Ok(false);
        }
        if tag == PropertyTag::Identifier && value.as_text().is_some_and(str::is_empty) {
            return Err(AstError::EmptyIdentifier { kind });
        }

        self.notify(&[AstEvent::PropertyChange {
            node,
            property: tag,
            old: current,
            new: value.clone(),
        }])?;
        if let Some(target) = self.get_mut(node) {
            target.data.write_scalar(tag, value);
        }
        trace!(%node, %tag, "property set");
        Ok(true)
    }

    /// Change the source range of `node`. Observable as a `Range` property
    /// change; returns `false` when the range is unchanged.
    pub fn set_range(&mut self, node: NodeIndex, range: Option<TextRange>) -> Result<bool, AstError> {
        let old = self.node(node)?.range;
        if old == range {
            return Ok(false);
        }
        self.notify(&[AstEvent::PropertyChange {
            node,
            property: PropertyTag::Range,
            old: PropertyValue::Range(old),
            new: PropertyValue::Range(range),
        }])?;
        if let Some(target) = self.get_mut(node) {
            target.range = range;
        }
        Ok(true)
    }

    /// Remove `target` from whichever slot of `parent` holds it, matched by
    /// identity.
    ///
    /// Slots are searched in declaration order. A list loses the element; an
    /// optional slot is cleared. Returns `false` without touching the tree if
    /// `target` is `NONE`, is not a child of `parent`, or sits in a required
    /// slot.
    pub fn remove(&mut self, parent: NodeIndex, target: NodeIndex) -> Result<bool, AstError> {
        if target.is_none() {
            return Ok(false);
        }
        let parent_node = self.node(parent)?;
        let Some((tag, position)) = parent_node.data.find_child(target) else {
            return Ok(false);
        };
        let kind = parent_node.kind();

        let events = match position {
            Some(index) => vec![
                AstEvent::ListChange {
                    node: parent,
                    property: tag,
                    change: ListChange::Removal,
                    index,
                    child: target,
                },
                reparent_event(target, parent, NodeIndex::NONE),
            ],
            None => {
                if kind.slot(tag).is_some_and(|info| info.shape == SlotShape::Required) {
                    debug!(%parent, %tag, %target, "refusing to empty a required slot");
                    return Ok(false);
                }
                vec![
                    AstEvent::PropertyChange {
                        node: parent,
                        property: tag,
                        old: PropertyValue::Node(target),
                        new: PropertyValue::Node(NodeIndex::NONE),
                    },
                    reparent_event(target, parent, NodeIndex::NONE),
                ]
            }
        };
        self.notify(&events)?;

        match position {
            Some(index) => {
                if let Some(list) = self.list_raw(parent, tag) {
                    list.remove(index);
                }
            }
            None => self.write_single_raw(parent, tag, NodeIndex::NONE),
        }
        self.set_parent_raw(target, NodeIndex::NONE);
        debug!(%parent, %tag, %target, "child removed");
        Ok(true)
    }

    /// Put `replacement` where `target` sits in `parent`, matched by identity.
    ///
    /// The replacement must be detached and accepted by the slot; otherwise
    /// the call fails and the tree is unchanged. Returns `false` if `target`
    /// is `NONE` or not a child of `parent`.
    pub fn replace(
        &mut self,
        parent: NodeIndex,
        target: NodeIndex,
        replacement: NodeIndex,
    ) -> Result<bool, AstError> {
        if target.is_none() {
            return Ok(false);
        }
        let parent_node = self.node(parent)?;
        let Some((tag, position)) = parent_node.data.find_child(target) else {
            return Ok(false);
        };
        let kind = parent_node.kind();
        let Some(info) = kind.slot(tag) else {
            return Ok(false);
        };
        if replacement == target {
            return Ok(true);
        }
        if replacement.is_none() {
            return Err(AstError::NullValue {
                kind,
                property: tag,
            });
        }
        self.check_attach(parent, info, replacement)?;

        let mut events = vec![match position {
            Some(index) => AstEvent::ListReplacement {
                node: parent,
                property: tag,
                index,
                old: target,
                new: replacement,
            },
            None => AstEvent::PropertyChange {
                node: parent,
                property: tag,
                old: PropertyValue::Node(target),
                new: PropertyValue::Node(replacement),
            },
        }];
        events.push(reparent_event(target, parent, NodeIndex::NONE));
        events.push(reparent_event(replacement, NodeIndex::NONE, parent));
        self.notify(&events)?;

        match position {
            Some(index) => {
                if let Some(slot) = self.list_raw(parent, tag).and_then(|list| list.get_mut(index)) {
                    *slot = replacement;
                }
            }
            None => self.write_single_raw(parent, tag, replacement),
        }
        self.set_parent_raw(target, NodeIndex::NONE);
        self.set_parent_raw(replacement, parent);
        debug!(%parent, %tag, %target, %replacement, "child replaced");
        Ok(true)
    }

    /// `remove` on `node`'s current parent. `false` for a parentless node.
    pub fn remove_from_parent(&mut self, node: NodeIndex) -> Result<bool, AstError> {
        let parent = self.parent(node);
        if parent.is_none() {
            return Ok(false);
        }
        self.remove(parent, node)
    }

    /// `replace` on `node`'s current parent. `false` for a parentless node.
    pub fn replace_in_parent(
        &mut self,
        node: NodeIndex,
        replacement: NodeIndex,
    ) -> Result<bool, AstError> {
        let parent = self.parent(node);
        if parent.is_none() {
            return Ok(false);
        }
        self.replace(parent, node, replacement)
    }
}

pub(crate) fn reparent_event(node: NodeIndex, old_parent: NodeIndex, new_parent: NodeIndex) -> AstEvent {
    AstEvent::ParentChange {
        node,
        old_parent,
        new_parent,
    }
}

fn push_reparent(events: &mut Vec<AstEvent>, node: NodeIndex, old_parent: NodeIndex, new_parent: NodeIndex) {
    if node.is_some() {
        events.push(reparent_event(node, old_parent, new_parent));
    }
}

#[cfg(test)]
#[path = "../tests/mutation_tests.rs"]
mod tests;
