//! Kind tags, super-kind categories and slot descriptors.

use crate::property::PropertyTag;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;

bitflags! {
    /// Super-kinds a node kind belongs to.
    ///
    /// A slot accepts a child when the child's categories intersect the
    /// slot's accepted categories. Special-value kinds carry the categories
    /// of everything they may stand in for.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct NodeCategory: u32 {
        const COMPILATION_UNIT = 1 << 0;
        const PACKAGE_DECLARATION = 1 << 1;
        const IMPORT_DECLARATION = 1 << 2;
        const NAME = 1 << 3;
        const SIMPLE_NAME = 1 << 4;
        const MODIFIER = 1 << 5;
        const ANNOTATION = 1 << 6;
        const EXPRESSION = 1 << 7;
        const STATEMENT = 1 << 8;
        const TYPE = 1 << 9;
        const CLASS_TYPE = 1 << 10;
        const BODY_DECLARATION = 1 << 11;
        const TYPE_DECLARATION = 1 << 12;
        const PARAMETER = 1 << 13;
        const VARIABLE_DECLARATOR = 1 << 14;
        const TYPE_PARAMETER = 1 << 15;
        const CATCH_CLAUSE = 1 << 16;
        const SWITCH_ENTRY = 1 << 17;
        const MODULE_DECLARATION = 1 << 18;
        const MODULE_DIRECTIVE = 1 << 19;
        const ENUM_CONSTANT = 1 << 20;
        const SPECIAL_VALUE = 1 << 21;
        const BLOCK = 1 << 22;
        const VARIABLE_DECLARATION = 1 << 23;
    }
}

/// Shape of a child slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotShape {
    /// Exactly one child, never absent.
    Required,
    /// Zero or one child.
    Optional,
    /// An ordered `NodeList`.
    List,
}

impl fmt::Display for SlotShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SlotShape::Required => "required",
            SlotShape::Optional => "optional",
            SlotShape::List => "list",
        })
    }
}

/// Static description of one declared child slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotInfo {
    pub tag: PropertyTag,
    pub shape: SlotShape,
    pub accepts: NodeCategory,
}

impl SlotInfo {
    #[inline]
    pub fn accepts_kind(&self, kind: SyntaxKind) -> bool {
        self.accepts.intersects(kind.categories())
    }
}

macro_rules! define_syntax_kinds {
    ($(
        $(#[$meta:meta])*
        $kind:ident($data:ident) $visit:ident [$($cat:ident)|+] {
            scalars { $($sfield:ident : $sty:ty => $stag:ident),* $(,)? }
            slots { $($field:ident : $shape:ident($($accept:ident)|+) => $tag:ident),* $(,)? }
        }
    )*) => {
        /// The closed set of node kinds.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum SyntaxKind {
            $($(#[$meta])* $kind,)*
        }

        impl SyntaxKind {
            pub const ALL: &'static [SyntaxKind] = &[$(SyntaxKind::$kind,)*];

            pub fn name(self) -> &'static str {
                match self {
                    $(SyntaxKind::$kind => stringify!($kind),)*
                }
            }

            pub fn categories(self) -> NodeCategory {
                match self {
                    $(SyntaxKind::$kind => categories!($($cat)|+),)*
                }
            }

            /// Declared child slots, in search order.
            pub fn slots(self) -> &'static [SlotInfo] {
                match self {
                    $(SyntaxKind::$kind => {
                        const SLOTS: &[SlotInfo] = &[$(
                            SlotInfo {
                                tag: PropertyTag::$tag,
                                shape: slot_shape!($shape),
                                accepts: categories!($($accept)|+),
                            },
                        )*];
                        SLOTS
                    })*
                }
            }

            /// Declared scalar properties.
            pub fn scalars(self) -> &'static [PropertyTag] {
                match self {
                    $(SyntaxKind::$kind => &[$(PropertyTag::$stag,)*],)*
                }
            }
        }
    };
}

with_node_catalogue!(define_syntax_kinds);

impl SyntaxKind {
    #[inline]
    pub fn is(self, category: NodeCategory) -> bool {
        self.categories().intersects(category)
    }

    pub fn slot(self, tag: PropertyTag) -> Option<&'static SlotInfo> {
        self.slots().iter().find(|slot| slot.tag == tag)
    }

    pub fn has_scalar(self, tag: PropertyTag) -> bool {
        self.scalars().contains(&tag)
    }

    /// Special-value kinds stand in for not-yet-concrete template fragments.
    #[inline]
    pub fn is_special_value(self) -> bool {
        self.is(NodeCategory::SPECIAL_VALUE)
    }

    pub fn from_name(name: &str) -> Option<SyntaxKind> {
        SyntaxKind::ALL.iter().copied().find(|k| k.name() == name)
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
