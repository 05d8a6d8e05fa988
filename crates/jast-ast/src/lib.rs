//! Mutable Java syntax trees.
//!
//! This crate contains:
//! - `NodeArena`, `NodeIndex` and `NodeList`: storage and ownership
//! - The variant catalogue: `SyntaxKind`, per-kind data structs and `NodeData`
//! - The mutation protocol (`set_child`, `set_property`, `remove`, `replace`,
//!   `list_mut`) with parent-link maintenance
//! - Change notification (`AstObserver`, `AstEvent`, `ObserverScope`)
//! - Visitor contracts (`GenericVisitor`, `VoidVisitor`) and the passes built
//!   on them: deep clone, structural equality, traversal, JSON dump

#[macro_use]
mod catalogue;

pub mod arena;
pub mod base;
pub mod clone;
pub mod data;
pub mod dump;
pub mod equality;
pub mod error;
pub mod kind;
pub mod list;
pub mod modifiers;
mod mutation;
pub mod node;
pub mod observer;
pub mod operators;
pub mod property;
pub mod traversal;
pub mod visitor;

pub use arena::NodeArena;
pub use base::{NodeIndex, NodeList};
pub use clone::{CloneVisitor, ClonedNodes, clone_subtree};
pub use data::DataKey;
pub use equality::structurally_equal;
pub use error::AstError;
pub use kind::{NodeCategory, SlotInfo, SlotShape, SyntaxKind};
pub use list::NodeListMut;
pub use modifiers::{Keyword, ModifierFlags};
pub use node::*;
pub use observer::{AstEvent, AstObserver, ListChange, ObserverError, ObserverId, ObserverScope};
pub use operators::{AssignOperator, BinaryOperator, Primitive, UnaryOperator};
pub use property::{FromPropertyValue, PropertyTag, PropertyValue};
pub use traversal::{Ancestors, ParentLinkViolation, TreeTraversal};
pub use visitor::{GenericVisitor, PreOrderWalker, VoidVisitor, walk_children};

pub use jast_common::TextRange;

#[cfg(test)]
#[path = "../tests/test_support.rs"]
pub(crate) mod test_support;
