//! Node data: one struct per kind and the `NodeData` sum type over them.
//!
//! Data structs are plain values. Build one, then hand it to
//! `NodeArena::add`, which validates the children and links their parents.
//! Once inside an arena, a node's data is only changed through the mutation
//! protocol.

use crate::base::{NodeIndex, NodeList};
use crate::kind::{SlotInfo, SyntaxKind};
use crate::property::{FromPropertyValue, PropertyTag, PropertyValue};
use jast_common::TextRange;
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Read access to one child slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotRef<'a> {
    Single(NodeIndex),
    List(&'a NodeList),
}

impl<'a> SlotRef<'a> {
    /// Position of `child` in this slot: `Some(None)` for a single slot
    /// holding it, `Some(Some(i))` for a list holding it at `i`.
    pub fn find(&self, child: NodeIndex) -> Option<Option<usize>> {
        match self {
            SlotRef::Single(node) => (*node == child).then_some(None),
            SlotRef::List(list) => list.position(child).map(Some),
        }
    }

    pub fn single(&self) -> Option<NodeIndex> {
        match self {
            SlotRef::Single(node) => Some(*node),
            SlotRef::List(_) => None,
        }
    }

    pub fn list(&self) -> Option<&'a NodeList> {
        match self {
            SlotRef::Single(_) => None,
            SlotRef::List(list) => Some(list),
        }
    }
}

/// Write access to one child slot. Crate-internal: only the mutation
/// protocol and cloning touch slots directly.
#[derive(Debug)]
pub(crate) enum SlotMut<'a> {
    Single(&'a mut NodeIndex),
    List(&'a mut NodeList),
}

pub(crate) trait SlotStorage {
    fn as_slot(&self) -> SlotRef<'_>;
    fn as_slot_mut(&mut self) -> SlotMut<'_>;
}

impl SlotStorage for NodeIndex {
    #[inline]
    fn as_slot(&self) -> SlotRef<'_> {
        SlotRef::Single(*self)
    }

    #[inline]
    fn as_slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::Single(self)
    }
}

impl SlotStorage for NodeList {
    #[inline]
    fn as_slot(&self) -> SlotRef<'_> {
        SlotRef::List(self)
    }

    #[inline]
    fn as_slot_mut(&mut self) -> SlotMut<'_> {
        SlotMut::List(self)
    }
}

pub type SlotVec<'a> = SmallVec<[(PropertyTag, SlotRef<'a>); 8]>;
pub(crate) type SlotMutVec<'a> = SmallVec<[(PropertyTag, SlotMut<'a>); 8]>;

macro_rules! define_node_data {
    ($(
        $(#[$meta:meta])*
        $kind:ident($data:ident) $visit:ident [$($cat:ident)|+] {
            scalars { $($sfield:ident : $sty:ty => $stag:ident),* $(,)? }
            slots { $($field:ident : $shape:ident($($accept:ident)|+) => $tag:ident),* $(,)? }
        }
    )*) => {
        $(
            $(#[$meta])*
            #[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
            pub struct $data {
                $(pub $sfield: $sty,)*
                $(pub $field: slot_storage!($shape),)*
            }

            impl $data {
                pub const KIND: SyntaxKind = SyntaxKind::$kind;
            }

            impl From<$data> for NodeData {
                fn from(data: $data) -> Self {
                    NodeData::$kind(data)
                }
            }
        )*

        /// The data of a node of any kind.
        #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
        pub enum NodeData {
            $($kind($data),)*
        }

        impl NodeData {
            pub fn kind(&self) -> SyntaxKind {
                match self {
                    $(NodeData::$kind(_) => SyntaxKind::$kind,)*
                }
            }

            /// The slot named `tag`, if this kind declares one.
            #[allow(unused_variables)]
            pub fn slot(&self, tag: PropertyTag) -> Option<SlotRef<'_>> {
                match self {
                    $(NodeData::$kind(data) => match tag {
                        $(PropertyTag::$tag => Some(data.$field.as_slot()),)*
                        _ => None,
                    },)*
                }
            }

            #[allow(unused_variables)]
            pub(crate) fn slot_mut(&mut self, tag: PropertyTag) -> Option<SlotMut<'_>> {
                match self {
                    $(NodeData::$kind(data) => match tag {
                        $(PropertyTag::$tag => Some(data.$field.as_slot_mut()),)*
                        _ => None,
                    },)*
                }
            }

            /// Every slot, in search order.
            #[allow(unused_variables)]
            pub fn slots(&self) -> SlotVec<'_> {
                match self {
                    $(NodeData::$kind(data) => smallvec![$((PropertyTag::$tag, data.$field.as_slot())),*],)*
                }
            }

            #[allow(unused_variables)]
            pub(crate) fn slots_mut(&mut self) -> SlotMutVec<'_> {
                match self {
                    $(NodeData::$kind(data) => smallvec![$((PropertyTag::$tag, data.$field.as_slot_mut())),*],)*
                }
            }

            /// Current value of the scalar property `tag`.
            #[allow(unused_variables)]
            pub fn scalar(&self, tag: PropertyTag) -> Option<PropertyValue> {
                match self {
                    $(NodeData::$kind(data) => match tag {
                        $(PropertyTag::$stag => Some(PropertyValue::from(data.$sfield.clone())),)*
                        _ => None,
                    },)*
                }
            }

            /// Overwrite a scalar. Returns `false` when the kind has no such
            /// scalar or the value has the wrong type.
            #[allow(unused_variables)]
            pub(crate) fn write_scalar(&mut self, tag: PropertyTag, value: PropertyValue) -> bool {
                match self {
                    $(NodeData::$kind(data) => match tag {
                        $(PropertyTag::$stag => match <$sty as FromPropertyValue>::from_property_value(value) {
                            Some(value) => {
                                data.$sfield = value;
                                true
                            }
                            None => false,
                        },)*
                        _ => false,
                    },)*
                }
            }
        }
    };
}

with_node_catalogue!(define_node_data);

impl NodeData {
    #[inline]
    pub fn slot_infos(&self) -> &'static [SlotInfo] {
        self.kind().slots()
    }

    /// All children, flattened in slot order. Empty optional slots are skipped.
    pub fn children(&self) -> SmallVec<[NodeIndex; 8]> {
        let mut children = SmallVec::new();
        for (_, slot) in self.slots() {
            match slot {
                SlotRef::Single(node) => {
                    if node.is_some() {
                        children.push(node);
                    }
                }
                SlotRef::List(list) => children.extend(list.iter()),
            }
        }
        children
    }

    /// The slot holding `child`, with its list position for list slots.
    pub fn find_child(&self, child: NodeIndex) -> Option<(PropertyTag, Option<usize>)> {
        if child.is_none() {
            return None;
        }
        self.slots()
            .into_iter()
            .find_map(|(tag, slot)| slot.find(child).map(|position| (tag, position)))
    }

    /// Identifier text of names, simple names and placeholders.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            NodeData::Name(data) => Some(&data.identifier),
            NodeData::SimpleName(data) => Some(&data.identifier),
            NodeData::PlaceholderExpr(data) => Some(&data.name),
            NodeData::PlaceholderType(data) => Some(&data.name),
            _ => None,
        }
    }
}

/// A node in the arena: its data plus the non-owning parent link and the
/// optional source range.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub(crate) data: NodeData,
    pub(crate) parent: NodeIndex,
    pub(crate) range: Option<TextRange>,
}

impl Node {
    #[inline]
    pub fn data(&self) -> &NodeData {
        &self.data
    }

    #[inline]
    pub fn kind(&self) -> SyntaxKind {
        self.data.kind()
    }

    /// The parent, or `NodeIndex::NONE` for a root or detached node.
    #[inline]
    pub fn parent(&self) -> NodeIndex {
        self.parent
    }

    #[inline]
    pub fn range(&self) -> Option<TextRange> {
        self.range
    }
}
