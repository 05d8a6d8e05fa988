//! Property tags and values.
//!
//! Every slot and scalar a node declares is addressed by a `PropertyTag`.
//! Change notifications carry the tag plus the old and new `PropertyValue`.

use crate::base::NodeIndex;
use crate::modifiers::Keyword;
use crate::operators::{AssignOperator, BinaryOperator, Primitive, UnaryOperator};
use jast_common::TextRange;
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! property_tags {
    ($($tag:ident => $name:literal),+ $(,)?) => {
        /// Name of a declared slot or scalar property.
        ///
        /// Tags are shared across kinds: `Name` is the name slot of every kind
        /// that has one.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum PropertyTag {
            $($tag),+
        }

        impl PropertyTag {
            pub const ALL: &'static [PropertyTag] = &[$(PropertyTag::$tag),+];

            /// camelCase name, as used in JSON dumps.
            pub fn name(self) -> &'static str {
                match self {
                    $(PropertyTag::$tag => $name),+
                }
            }
        }
    };
}

property_tags! {
    Package => "package",
    Imports => "imports",
    Types => "types",
    Module => "module",
    Annotations => "annotations",
    Name => "name",
    Static => "static",
    Asterisk => "asterisk",
    Identifier => "identifier",
    Qualifier => "qualifier",
    Keyword => "keyword",
    MemberValue => "memberValue",
    Interface => "interface",
    TypeParameters => "typeParameters",
    ExtendedTypes => "extendedTypes",
    ImplementedTypes => "implementedTypes",
    Members => "members",
    Modifiers => "modifiers",
    Entries => "entries",
    Arguments => "arguments",
    ClassBody => "classBody",
    Type => "type",
    DefaultValue => "defaultValue",
    Variables => "variables",
    Initializer => "initializer",
    Parameters => "parameters",
    ThrownExceptions => "thrownExceptions",
    Body => "body",
    VarArgs => "varArgs",
    TypeBound => "typeBound",
    Open => "open",
    Directives => "directives",
    ModuleNames => "moduleNames",
    With => "with",
    Statements => "statements",
    Expression => "expression",
    Label => "label",
    Statement => "statement",
    Condition => "condition",
    ThenStmt => "thenStmt",
    ElseStmt => "elseStmt",
    Initialization => "initialization",
    Compare => "compare",
    Update => "update",
    Variable => "variable",
    Iterable => "iterable",
    Selector => "selector",
    Labels => "labels",
    Resources => "resources",
    TryBlock => "tryBlock",
    CatchClauses => "catchClauses",
    FinallyBlock => "finallyBlock",
    Parameter => "parameter",
    ClassDeclaration => "classDeclaration",
    Check => "check",
    Message => "message",
    Value => "value",
    Operator => "operator",
    Left => "left",
    Right => "right",
    Target => "target",
    ThenExpr => "thenExpr",
    ElseExpr => "elseExpr",
    Inner => "inner",
    Scope => "scope",
    TypeArguments => "typeArguments",
    AnonymousClassBody => "anonymousClassBody",
    Index => "index",
    TypeName => "typeName",
    EnclosingParameters => "enclosingParameters",
    Primitive => "primitive",
    ComponentType => "componentType",
    ExtendedType => "extendedType",
    SuperType => "superType",
    Range => "range",
}

impl fmt::Display for PropertyTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of a property before or after a change.
///
/// Single-child slots report `Node` (with `NodeIndex::NONE` for an empty
/// optional slot); the source range reports `Range`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyValue {
    Bool(bool),
    Text(String),
    Keyword(Keyword),
    BinaryOperator(BinaryOperator),
    UnaryOperator(UnaryOperator),
    AssignOperator(AssignOperator),
    Primitive(Primitive),
    Node(NodeIndex),
    Range(Option<TextRange>),
}

impl PropertyValue {
    /// Whether both values are of the same variant.
    #[inline]
    pub fn same_type(&self, other: &PropertyValue) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }

    pub fn as_node(&self) -> Option<NodeIndex> {
        match self {
            PropertyValue::Node(node) => Some(*node),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

impl From<Option<TextRange>> for PropertyValue {
    fn from(value: Option<TextRange>) -> Self {
        PropertyValue::Range(value)
    }
}

/// Conversion from a `PropertyValue` back into a scalar field's type.
pub trait FromPropertyValue: Sized {
    fn from_property_value(value: PropertyValue) -> Option<Self>;
}

macro_rules! scalar_conversions {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for PropertyValue {
                fn from(value: $ty) -> Self {
                    PropertyValue::$variant(value)
                }
            }

            impl FromPropertyValue for $ty {
                fn from_property_value(value: PropertyValue) -> Option<Self> {
                    match value {
                        PropertyValue::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

scalar_conversions! {
    bool => Bool,
    String => Text,
    Keyword => Keyword,
    BinaryOperator => BinaryOperator,
    UnaryOperator => UnaryOperator,
    AssignOperator => AssignOperator,
    Primitive => Primitive,
    NodeIndex => Node,
}
