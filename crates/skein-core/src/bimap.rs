//! Bidirectional map with a many-keys-per-value reverse index.
//!
//! Used for a file's symbol→rendered-name table, where declaration merging
//! lets two different symbols share one rendered name. Both directions
//! iterate in insertion order.

use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

#[derive(Clone, Debug)]
pub struct BiMap<K, V> {
    forward: IndexMap<K, V>,
    reverse: IndexMap<V, IndexSet<K>>,
}

impl<K, V> Default for BiMap<K, V> {
    fn default() -> Self {
        Self {
            forward: IndexMap::new(),
            reverse: IndexMap::new(),
        }
    }
}

impl<K, V> BiMap<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate `key` with `value`.
    ///
    /// If `key` pointed at a different value, it is detached from that
    /// value's key set first; a value left with no keys is dropped.
    pub fn set(&mut self, key: K, value: V) {
        if let Some(previous) = self.forward.insert(key.clone(), value.clone())
            && previous != value
        {
            self.detach(&key, &previous);
        }
        self.reverse.entry(value).or_default().insert(key);
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.forward.get(key)
    }

    /// Keys currently pointing at `value`, in insertion order.
    pub fn get_keys(&self, value: &V) -> Option<&IndexSet<K>> {
        self.reverse.get(value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.forward.contains_key(key)
    }

    pub fn contains_value(&self, value: &V) -> bool {
        self.reverse.contains_key(value)
    }

    /// Remove `key`, returning the value it pointed at.
    pub fn delete(&mut self, key: &K) -> Option<V> {
        let value = self.forward.shift_remove(key)?;
        self.detach(key, &value);
        Some(value)
    }

    /// Remove `value` and every key that pointed at it.
    pub fn delete_value(&mut self, value: &V) -> Option<IndexSet<K>> {
        let keys = self.reverse.shift_remove(value)?;
        for key in &keys {
            self.forward.shift_remove(key);
        }
        Some(keys)
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.forward.iter()
    }

    fn detach(&mut self, key: &K, value: &V) {
        let Some(keys) = self.reverse.get_mut(value) else {
            return;
        };
        keys.shift_remove(key);
        if keys.is_empty() {
            self.reverse.shift_remove(value);
        }
    }
}
