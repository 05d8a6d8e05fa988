//! The resolver extension point.
//!
//! A `SymbolResolver` is supplied from outside and bound to the root of a
//! tree. Lookups walk from a node to its current root, so a node can only be
//! resolved while it is attached under a root that carries a resolver.

use crate::error::ResolveError;
use crate::type_of::TypeOfVisitor;
use crate::types::{DeclarationKind, ResolvedDeclaration, ResolvedType};
use jast_ast::{DataKey, GenericVisitor, NodeArena, NodeIndex};
use std::sync::Arc;
use tracing::{debug, trace};

/// Name binding and typing backend.
pub trait SymbolResolver: Send + Sync {
    /// Resolve the declaration `node`, which `DeclarationKind::of` classified
    /// as `kind`.
    fn resolve_declaration(
        &self,
        arena: &NodeArena,
        node: NodeIndex,
        kind: DeclarationKind,
    ) -> Result<ResolvedDeclaration, ResolveError>;

    /// Resolve a type node, such as a `ClassOrInterfaceType`.
    fn to_resolved_type(&self, arena: &NodeArena, ty: NodeIndex) -> Result<ResolvedType, ResolveError>;

    /// The static type of an expression the type-of adapter cannot compute
    /// locally (names, calls, field accesses, object creations, `this`).
    fn calculate_type(&self, arena: &NodeArena, expr: NodeIndex) -> Result<ResolvedType, ResolveError>;
}

/// Per-node data key under which the resolver of a tree is stored.
pub const SYMBOL_RESOLVER_KEY: DataKey<Arc<dyn SymbolResolver>> = DataKey::new("symbolResolver");

/// Bind `resolver` to `root`. Returns whether a previous resolver was
/// replaced.
pub fn bind_symbol_resolver(
    arena: &mut NodeArena,
    root: NodeIndex,
    resolver: Arc<dyn SymbolResolver>,
) -> Result<bool, ResolveError> {
    if !arena.contains(root) {
        return Err(ResolveError::InvalidIndex(root));
    }
    if arena.parent(root).is_some() {
        return Err(ResolveError::NotARoot(root));
    }
    debug!(%root, "binding symbol resolver");
    Ok(arena.set_data(root, SYMBOL_RESOLVER_KEY, resolver)?)
}

/// Remove the resolver bound to `root`, if any.
pub fn unbind_symbol_resolver(arena: &mut NodeArena, root: NodeIndex) -> bool {
    arena.remove_data(root, SYMBOL_RESOLVER_KEY)
}

/// The resolver bound to the current root of `node`.
pub fn symbol_resolver(arena: &NodeArena, node: NodeIndex) -> Result<Arc<dyn SymbolResolver>, ResolveError> {
    if !arena.contains(node) {
        return Err(ResolveError::InvalidIndex(node));
    }
    let root = arena.root_of(node);
    trace!(%node, %root, "looking up symbol resolver");
    arena
        .data(root, SYMBOL_RESOLVER_KEY)
        .cloned()
        .ok_or(ResolveError::Unbound(node))
}

/// Resolution entry points on a tree.
pub trait Resolve {
    /// Resolve the declaration `node` through the resolver bound to its root.
    fn resolve(&self, node: NodeIndex) -> Result<ResolvedDeclaration, ResolveError>;

    /// The type of an expression or type node; `Ok(None)` for placeholders.
    fn type_of(&self, node: NodeIndex) -> Result<Option<ResolvedType>, ResolveError>;
}

impl Resolve for NodeArena {
    fn resolve(&self, node: NodeIndex) -> Result<ResolvedDeclaration, ResolveError> {
        let kind = self.kind(node).ok_or(ResolveError::InvalidIndex(node))?;
        let declaration = DeclarationKind::of(kind).ok_or(ResolveError::NotADeclaration(kind))?;
        let resolver = symbol_resolver(self, node)?;
        debug!(%node, ?declaration, "resolving declaration");
        resolver.resolve_declaration(self, node, declaration)
    }

    fn type_of(&self, node: NodeIndex) -> Result<Option<ResolvedType>, ResolveError> {
        let resolver = symbol_resolver(self, node)?;
        TypeOfVisitor::new(resolver.as_ref()).visit(self, node, &mut ())
    }
}

#[cfg(test)]
#[path = "../tests/resolver_tests.rs"]
mod tests;
