//! Symbol-resolution facade for jast syntax trees.
//!
//! The crate defines the interface a resolver backend implements
//! (`SymbolResolver`), binds a resolver to the root of a tree, and provides
//! `TypeOfVisitor`, the default type-of adapter. It contains no name binding
//! or type inference of its own.

pub mod error;
pub mod resolver;
pub mod type_of;
pub mod types;

pub use error::ResolveError;
pub use resolver::{
    Resolve, SYMBOL_RESOLVER_KEY, SymbolResolver, bind_symbol_resolver, symbol_resolver, unbind_symbol_resolver,
};
pub use type_of::{TypeOfVisitor, TypeResult};
pub use types::{DeclarationKind, ResolvedDeclaration, ResolvedType};

#[cfg(test)]
#[path = "../tests/test_support.rs"]
pub(crate) mod test_support;
