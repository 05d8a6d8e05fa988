//! Visitor Pattern
//!
//! Two double-dispatch contracts over the closed set of node kinds:
//!
//! - [`GenericVisitor`] produces a value per node.
//! - [`VoidVisitor`] produces nothing; passes accumulate into the argument.
//!
//! Each has one `visit_<kind>` method per kind, and every one of them
//! defaults to the required `visit_default`. A pass therefore states its
//! policy for kinds it does not handle in exactly one place: fail naming the
//! kind, return a neutral value, or recurse.
//!
//! Visitors read the tree through `&NodeArena`. A pass that rewrites the tree
//! collects its edits in the argument and applies them after the walk.
//!
//! # Usage
//!
//! ```rust
//! use jast_ast::{GenericVisitor, NodeArena, NodeIndex, SimpleNameData};
//!
//! struct NameText;
//!
//! impl GenericVisitor<()> for NameText {
//!     type Output = Option<String>;
//!
//!     fn visit_default(&mut self, _: &NodeArena, _: NodeIndex, _: &mut ()) -> Self::Output {
//!         None
//!     }
//!
//!     fn visit_simple_name(
//!         &mut self,
//!         _: &NodeArena,
//!         _: NodeIndex,
//!         data: &SimpleNameData,
//!         _: &mut (),
//!     ) -> Self::Output {
//!         Some(data.identifier.clone())
//!     }
//! }
//! ```

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::node::*;

macro_rules! define_visitors {
    ($(
        $(#[$meta:meta])*
        $kind:ident($data:ident) $visit:ident [$($cat:ident)|+] {
            scalars { $($sfield:ident : $sty:ty => $stag:ident),* $(,)? }
            slots { $($field:ident : $shape:ident($($accept:ident)|+) => $tag:ident),* $(,)? }
        }
    )*) => {
        /// Value-producing visitor. `A` is the per-walk argument.
        pub trait GenericVisitor<A: ?Sized> {
            type Output;

            /// Called for every kind whose `visit_<kind>` is not overridden,
            /// and for indices that are not in the arena.
            fn visit_default(&mut self, arena: &NodeArena, node: NodeIndex, arg: &mut A) -> Self::Output;

            $(
                fn $visit(&mut self, arena: &NodeArena, node: NodeIndex, _data: &$data, arg: &mut A) -> Self::Output {
                    self.visit_default(arena, node, arg)
                }
            )*

            /// Dispatch on the kind of `node`.
            fn visit(&mut self, arena: &NodeArena, node: NodeIndex, arg: &mut A) -> Self::Output {
                let Some(target) = arena.get(node) else {
                    return self.visit_default(arena, node, arg);
                };
                match target.data() {
                    $(NodeData::$kind(data) => self.$visit(arena, node, data, arg),)*
                }
            }
        }

        /// Side-effecting visitor. `A` is the per-walk argument.
        pub trait VoidVisitor<A: ?Sized> {
            /// Called for every kind whose `visit_<kind>` is not overridden,
            /// and for indices that are not in the arena.
            fn visit_default(&mut self, arena: &NodeArena, node: NodeIndex, arg: &mut A);

            $(
                fn $visit(&mut self, arena: &NodeArena, node: NodeIndex, _data: &$data, arg: &mut A) {
                    self.visit_default(arena, node, arg)
                }
            )*

            /// Dispatch on the kind of `node`.
            fn visit(&mut self, arena: &NodeArena, node: NodeIndex, arg: &mut A) {
                let Some(target) = arena.get(node) else {
                    return self.visit_default(arena, node, arg);
                };
                match target.data() {
                    $(NodeData::$kind(data) => self.$visit(arena, node, data, arg),)*
                }
            }
        }
    };
}

with_node_catalogue!(define_visitors);

/// Visit every child of `node` in slot order.
pub fn walk_children<A, V>(visitor: &mut V, arena: &NodeArena, node: NodeIndex, arg: &mut A)
where
    A: ?Sized,
    V: VoidVisitor<A> + ?Sized,
{
    for child in arena.children(node) {
        visitor.visit(arena, child, arg);
    }
}

/// A `VoidVisitor` that walks the whole subtree pre-order and calls `f` on
/// every node.
pub struct PreOrderWalker<F>(pub F);

impl<A, F> VoidVisitor<A> for PreOrderWalker<F>
where
    A: ?Sized,
    F: FnMut(&NodeArena, NodeIndex, &mut A),
{
    fn visit_default(&mut self, arena: &NodeArena, node: NodeIndex, arg: &mut A) {
        if !arena.contains(node) {
            return;
        }
        (self.0)(arena, node, arg);
        walk_children(self, arena, node, arg);
    }
}

#[cfg(test)]
#[path = "../tests/visitor_tests.rs"]
mod tests;
