use crate::base::NodeIndex;
use crate::kind::{SlotShape, SyntaxKind};
use crate::observer::ObserverError;
use crate::property::PropertyTag;
use thiserror::Error;

/// Failure of a construction or mutation call.
///
/// A call that returns an error has not changed the tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AstError {
    #[error("node {0} does not exist in this arena")]
    InvalidIndex(NodeIndex),

    #[error("{kind} has no property '{property}'")]
    UnknownProperty {
        kind: SyntaxKind,
        property: PropertyTag,
    },

    #[error("property '{property}' of {kind} cannot be absent")]
    NullValue {
        kind: SyntaxKind,
        property: PropertyTag,
    },

    #[error("property '{property}' of {kind} is a {shape} slot")]
    SlotShape {
        kind: SyntaxKind,
        property: PropertyTag,
        shape: SlotShape,
    },

    #[error("node {child} already has parent {parent}; detach it first")]
    AlreadyParented { child: NodeIndex, parent: NodeIndex },

    #[error("attaching {child} under {parent} would create a cycle")]
    Cycle { child: NodeIndex, parent: NodeIndex },

    #[error("property '{property}' of {kind} cannot hold a {found}")]
    KindMismatch {
        kind: SyntaxKind,
        property: PropertyTag,
        found: SyntaxKind,
    },

    #[error("wrong value type for property '{property}' of {kind}")]
    PropertyType {
        kind: SyntaxKind,
        property: PropertyTag,
    },

    #[error("identifier of {kind} must not be empty")]
    EmptyIdentifier { kind: SyntaxKind },

    #[error("index {index} is out of bounds for '{property}' of length {len}")]
    IndexOutOfBounds {
        property: PropertyTag,
        index: usize,
        len: usize,
    },

    #[error("node {0} appears more than once among the children")]
    DuplicateChild(NodeIndex),

    #[error(transparent)]
    Observer(#[from] ObserverError),
}
