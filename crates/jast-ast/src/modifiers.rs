//! Modifier keywords and modifier sets.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::NodeData;
use crate::property::PropertyTag;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

/// A modifier keyword, as carried by a `Modifier` node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Keyword {
    #[default]
    Public,
    Protected,
    Private,
    Abstract,
    Static,
    Final,
    Transient,
    Volatile,
    Synchronized,
    Native,
    Strictfp,
    Transitive,
    Default,
    Sealed,
    NonSealed,
}

impl Keyword {
    pub const ALL: &'static [Keyword] = &[
        Keyword::Public,
        Keyword::Protected,
        Keyword::Private,
        Keyword::Abstract,
        Keyword::Static,
        Keyword::Final,
        Keyword::Transient,
        Keyword::Volatile,
        Keyword::Synchronized,
        Keyword::Native,
        Keyword::Strictfp,
        Keyword::Transitive,
        Keyword::Default,
        Keyword::Sealed,
        Keyword::NonSealed,
    ];

    /// Source spelling of the keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Public => "public",
            Keyword::Protected => "protected",
            Keyword::Private => "private",
            Keyword::Abstract => "abstract",
            Keyword::Static => "static",
            Keyword::Final => "final",
            Keyword::Transient => "transient",
            Keyword::Volatile => "volatile",
            Keyword::Synchronized => "synchronized",
            Keyword::Native => "native",
            Keyword::Strictfp => "strictfp",
            Keyword::Transitive => "transitive",
            Keyword::Default => "default",
            Keyword::Sealed => "sealed",
            Keyword::NonSealed => "non-sealed",
        }
    }

    pub fn from_source(text: &str) -> Option<Keyword> {
        Keyword::ALL.iter().copied().find(|k| k.as_str() == text)
    }

    #[inline]
    pub fn flag(self) -> ModifierFlags {
        ModifierFlags::from_bits_retain(1 << self as u32)
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags! {
    /// A set of modifier keywords. Bit `n` corresponds to `Keyword` discriminant `n`.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct ModifierFlags: u32 {
        const PUBLIC = 1 << 0;
        const PROTECTED = 1 << 1;
        const PRIVATE = 1 << 2;
        const ABSTRACT = 1 << 3;
        const STATIC = 1 << 4;
        const FINAL = 1 << 5;
        const TRANSIENT = 1 << 6;
        const VOLATILE = 1 << 7;
        const SYNCHRONIZED = 1 << 8;
        const NATIVE = 1 << 9;
        const STRICTFP = 1 << 10;
        const TRANSITIVE = 1 << 11;
        const DEFAULT = 1 << 12;
        const SEALED = 1 << 13;
        const NON_SEALED = 1 << 14;

        const ACCESS = Self::PUBLIC.bits() | Self::PROTECTED.bits() | Self::PRIVATE.bits();
    }
}

impl ModifierFlags {
    /// Keywords in the set, in `Keyword` declaration order.
    pub fn keywords(self) -> impl Iterator<Item = Keyword> {
        Keyword::ALL
            .iter()
            .copied()
            .filter(move |k| self.contains(k.flag()))
    }
}

impl FromIterator<Keyword> for ModifierFlags {
    fn from_iter<I: IntoIterator<Item = Keyword>>(iter: I) -> Self {
        iter.into_iter()
            .fold(ModifierFlags::empty(), |acc, k| acc | k.flag())
    }
}

impl NodeArena {
    /// Keywords of the `Modifier` children in `node`'s modifier list, in list order.
    ///
    /// Empty when the node has no modifier slot.
    pub fn modifier_keywords(&self, node: NodeIndex) -> SmallVec<[Keyword; 4]> {
        let Some(list) = self.list(node, PropertyTag::Modifiers) else {
            return SmallVec::new();
        };
        list.iter()
            .filter_map(|m| match self.get(m).map(|n| n.data()) {
                Some(NodeData::Modifier(data)) => Some(data.keyword),
                _ => None,
            })
            .collect()
    }

    pub fn modifier_flags(&self, node: NodeIndex) -> ModifierFlags {
        self.modifier_keywords(node).into_iter().collect()
    }

    #[inline]
    pub fn has_modifier(&self, node: NodeIndex, keyword: Keyword) -> bool {
        self.modifier_flags(node).contains(keyword.flag())
    }

    /// The `Modifier` child of `node` carrying `keyword`, if any.
    pub fn find_modifier(&self, node: NodeIndex, keyword: Keyword) -> Option<NodeIndex> {
        let list = self.list(node, PropertyTag::Modifiers)?;
        list.iter().find(|&m| {
            matches!(
                self.get(m).map(|n| n.data()),
                Some(NodeData::Modifier(data)) if data.keyword == keyword
            )
        })
    }
}
