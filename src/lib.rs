//! jast: mutable Java syntax trees.
//!
//! This crate ties the workspace together:
//! - `ast` (`jast-ast`): the node arena, mutation protocol, change
//!   notification and visitors
//! - `validate` (`jast-validate`): the modifier validator
//! - `resolve` (`jast-resolve`): the symbol-resolution facade
//! - `common` (`jast-common`): spans, diagnostics and language levels
//!
//! and provides `tracing_config` for programs that want log output.

pub use jast_ast as ast;
pub use jast_common as common;
pub use jast_resolve as resolve;
pub use jast_validate as validate;

pub mod tracing_config;

pub use jast_ast::{
    AstError, AstEvent, AstObserver, GenericVisitor, NodeArena, NodeIndex, NodeList, ObserverScope, SyntaxKind,
    VoidVisitor,
};
pub use jast_common::{Diagnostic, LanguageLevel};
pub use jast_resolve::{Resolve, ResolveError, SymbolResolver, TypeOfVisitor, bind_symbol_resolver};
pub use jast_validate::{ModifierValidator, ProblemCollector, ValidationOptions, validate_modifiers};
