use jast_ast::{AstError, NodeIndex, SyntaxKind};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("node {0} does not exist in this arena")]
    InvalidIndex(NodeIndex),

    #[error("{0} is not a declaration")]
    NotADeclaration(SyntaxKind),

    /// The type-of adapter has no rule for this kind.
    #[error("cannot compute the type of a {0}")]
    Unsupported(SyntaxKind),

    #[error("no symbol resolver is bound to the tree containing {0}")]
    Unbound(NodeIndex),

    #[error("node {0} has a parent; a symbol resolver is bound to a root")]
    NotARoot(NodeIndex),

    /// Reported by a resolver backend.
    #[error("cannot resolve {node}: {reason}")]
    Unresolved { node: NodeIndex, reason: String },

    #[error(transparent)]
    Ast(#[from] AstError),
}
