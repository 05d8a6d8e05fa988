//! Typed per-node user data.
//!
//! Collaborators attach values to nodes under a `DataKey<T>`. The data is not
//! part of the tree's properties: setting it fires no notification.

use crate::arena::NodeArena;
use crate::base::NodeIndex;
use crate::error::AstError;
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A typed key for per-node data. Keys are compared by name.
pub struct DataKey<T> {
    name: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> DataKey<T> {
    pub const fn new(name: &'static str) -> DataKey<T> {
        DataKey {
            name,
            _marker: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }
}

impl<T> Clone for DataKey<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for DataKey<T> {}

impl<T> fmt::Debug for DataKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DataKey({})", self.name)
    }
}

impl NodeArena {
    /// Attach `value` to `node` under `key`, returning whether a previous
    /// value was replaced.
    pub fn set_data<T: Any + Send + Sync>(
        &mut self,
        node: NodeIndex,
        key: DataKey<T>,
        value: T,
    ) -> Result<bool, AstError> {
        if !self.contains(node) {
            return Err(AstError::InvalidIndex(node));
        }
        Ok(self
            .user_data
            .entry(node)
            .or_default()
            .insert(key.name, Arc::new(value))
            .is_some())
    }

    pub fn data<T: Any + Send + Sync>(&self, node: NodeIndex, key: DataKey<T>) -> Option<&T> {
        self.user_data
            .get(&node)?
            .get(key.name)?
            .downcast_ref::<T>()
    }

    pub fn contains_data<T: Any + Send + Sync>(&self, node: NodeIndex, key: DataKey<T>) -> bool {
        self.data(node, key).is_some()
    }

    /// Detach the value stored under `key`. Returns whether one was present.
    pub fn remove_data<T: Any + Send + Sync>(&mut self, node: NodeIndex, key: DataKey<T>) -> bool {
        let Some(entries) = self.user_data.get_mut(&node) else {
            return false;
        };
        let removed = entries.remove(key.name).is_some();
        if entries.is_empty() {
            self.user_data.remove(&node);
        }
        removed
    }

    /// Names of the keys set on `node`, sorted.
    pub fn data_keys(&self, node: NodeIndex) -> Vec<&'static str> {
        let mut keys: Vec<_> = self
            .user_data
            .get(&node)
            .map(|entries| entries.keys().copied().collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }
}
