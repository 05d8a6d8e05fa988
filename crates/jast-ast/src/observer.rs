//! Change notification.
//!
//! Observers are registered on an arena (one arena per tree handle) with a
//! scope. Every mutating call builds the complete list of events it is about
//! to cause, delivers them to every interested observer, and only then
//! applies the change. An observer that returns an error aborts the call
//! before anything is written.
//!
//! Observers get a shared borrow of the arena, so they can read the
//! pre-mutation state but cannot edit the tree from inside a callback.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::property::{PropertyTag, PropertyValue};
use smallvec::SmallVec;
use std::fmt;
use std::hash::BuildHasherDefault;
use thiserror::Error;
use tracing::trace;

type FxIndexMap<K, V> = indexmap::IndexMap<K, V, BuildHasherDefault<rustc_hash::FxHasher>>;

/// Direction of a list membership change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListChange {
    Addition,
    Removal,
}

/// A change that is about to be applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AstEvent {
    /// A scalar, a single-child slot or the source range of `node` changes.
    PropertyChange {
        node: NodeIndex,
        property: PropertyTag,
        old: PropertyValue,
        new: PropertyValue,
    },
    /// `child` is inserted at, or removed from, `index` of a list slot.
    ListChange {
        node: NodeIndex,
        property: PropertyTag,
        change: ListChange,
        index: usize,
        child: NodeIndex,
    },
    /// The element at `index` of a list slot is swapped for another node.
    ListReplacement {
        node: NodeIndex,
        property: PropertyTag,
        index: usize,
        old: NodeIndex,
        new: NodeIndex,
    },
    /// `node` is attached to or detached from a parent.
    ParentChange {
        node: NodeIndex,
        old_parent: NodeIndex,
        new_parent: NodeIndex,
    },
}

impl AstEvent {
    /// The node whose state changes.
    pub fn node(&self) -> NodeIndex {
        match self {
            AstEvent::PropertyChange { node, .. }
            | AstEvent::ListChange { node, .. }
            | AstEvent::ListReplacement { node, .. }
            | AstEvent::ParentChange { node, .. } => *node,
        }
    }

    pub fn property(&self) -> Option<PropertyTag> {
        match self {
            AstEvent::PropertyChange { property, .. }
            | AstEvent::ListChange { property, .. }
            | AstEvent::ListReplacement { property, .. } => Some(*property),
            AstEvent::ParentChange { .. } => None,
        }
    }

    /// Nodes used to decide which scoped observers see this event.
    fn subjects(&self) -> SmallVec<[NodeIndex; 3]> {
        let mut subjects = SmallVec::new();
        subjects.push(self.node());
        if let AstEvent::ParentChange {
            old_parent,
            new_parent,
            ..
        } = self
        {
            subjects.extend([*old_parent, *new_parent].into_iter().filter(|p| p.is_some()));
        }
        subjects
    }
}

/// Error returned by an observer to veto a mutation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("observer rejected the change: {message}")]
pub struct ObserverError {
    pub message: String,
}

impl ObserverError {
    pub fn new(message: impl Into<String>) -> ObserverError {
        ObserverError {
            message: message.into(),
        }
    }
}

pub trait AstObserver: Send {
    fn on_event(&mut self, arena: &NodeArena, event: &AstEvent) -> Result<(), ObserverError>;
}

struct FnObserver<F>(F);

impl<F> AstObserver for FnObserver<F>
where
    F: FnMut(&NodeArena, &AstEvent) -> Result<(), ObserverError> + Send,
{
    fn on_event(&mut self, arena: &NodeArena, event: &AstEvent) -> Result<(), ObserverError> {
        (self.0)(arena, event)
    }
}

/// Which events an observer receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObserverScope {
    /// Every event in the arena.
    Tree,
    /// Events touching `root` or any node below it at event time. Nodes
    /// attached under `root` later are covered automatically.
    Subtree(NodeIndex),
    /// Events whose subject is exactly this node.
    Node(NodeIndex),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(u32);

impl fmt::Display for ObserverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "observer#{}", self.0)
    }
}

struct RegisteredObserver {
    scope: ObserverScope,
    observer: Box<dyn AstObserver>,
}

/// Observers of one arena, in registration order.
#[derive(Default)]
pub(crate) struct ObserverRegistry {
    next_id: u32,
    entries: FxIndexMap<ObserverId, RegisteredObserver>,
}

impl ObserverRegistry {
    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for ObserverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(id, entry)| (id, entry.scope)))
            .finish()
    }
}

impl ObserverScope {
    fn matches(self, arena: &NodeArena, event: &AstEvent) -> bool {
        match self {
            ObserverScope::Tree => true,
            ObserverScope::Node(node) => event.node() == node,
            ObserverScope::Subtree(root) => event
                .subjects()
                .into_iter()
                .any(|subject| subject == root || arena.is_ancestor_of(root, subject)),
        }
    }
}

impl NodeArena {
    pub fn register_observer(
        &mut self,
        scope: ObserverScope,
        observer: impl AstObserver + 'static,
    ) -> ObserverId {
        let registry = &mut self.observers;
        let id = ObserverId(registry.next_id);
        registry.next_id += 1;
        registry.entries.insert(
            id,
            RegisteredObserver {
                scope,
                observer: Box::new(observer),
            },
        );
        trace!(%id, ?scope, "observer registered");
        id
    }

    /// Register a closure as an observer.
    pub fn register_fn<F>(&mut self, scope: ObserverScope, f: F) -> ObserverId
    where
        F: FnMut(&NodeArena, &AstEvent) -> Result<(), ObserverError> + Send + 'static,
    {
        self.register_observer(scope, FnObserver(f))
    }

    /// Remove an observer. Returns `false` if the id is not registered.
    pub fn unregister_observer(&mut self, id: ObserverId) -> bool {
        self.observers.entries.shift_remove(&id).is_some()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Deliver `events` in order, each to every interested observer in
    /// registration order. Stops at the first observer error.
    pub(crate) fn notify(&mut self, events: &[AstEvent]) -> Result<(), ObserverError> {
        if self.observers.is_empty() || events.is_empty() {
            return Ok(());
        }
        let mut registry = std::mem::take(&mut self.observers);
        let result = deliver(&mut registry, self, events);
        // Callbacks only see `&NodeArena`, so nothing registers while the
        // registry is taken out.
        self.observers = registry;
        result
    }
}

fn deliver(
    registry: &mut ObserverRegistry,
    arena: &NodeArena,
    events: &[AstEvent],
) -> Result<(), ObserverError> {
    for event in events {
        for (id, entry) in registry.entries.iter_mut() {
            if entry.scope.matches(arena, event) {
                trace!(%id, ?event, "delivering event");
                entry.observer.on_event(arena, event)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/observer_tests.rs"]
mod tests;
