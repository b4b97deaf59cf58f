//! Identity arena behind the file and node registries.
//!
//! Entries are addressed by id or by a selector path. An entry is either
//! *referenced* (a stand-in created by lookup) or *registered* (received
//! real content). Promotion moves an id from the first set to the end of
//! the second. Entries are never removed.

use std::fmt::Debug;
use std::hash::Hash;

use indexmap::{IndexMap, IndexSet};

use crate::{Error, Result};

pub trait StoreId: Copy + Eq + Hash + Debug {
    fn from_index(index: usize) -> Self;
    fn index(self) -> usize;
}

/// Ordered path used as an alternate lookup key.
pub type Selector = Vec<String>;

#[derive(Debug)]
pub(crate) struct Store<I, T> {
    registry: &'static str,
    entries: Vec<T>,
    selectors: IndexMap<Selector, I>,
    registered: IndexSet<I>,
    referenced: IndexSet<I>,
}

impl<I: StoreId, T> Store<I, T> {
    pub fn new(registry: &'static str) -> Self {
        Self {
            registry,
            entries: Vec::new(),
            selectors: IndexMap::new(),
            registered: IndexSet::new(),
            referenced: IndexSet::new(),
        }
    }

    pub fn get(&self, id: I) -> Option<&T> {
        self.entries.get(id.index())
    }

    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.entries.get_mut(id.index())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Find an existing entry by id, falling back to the selector.
    ///
    /// An id wins over a selector. `Ok(None)` means neither matched.
    pub fn lookup(&self, id: Option<I>, selector: Option<&Selector>) -> Result<Option<I>> {
        if let Some(id) = id {
            if id.index() >= self.entries.len() {
                return Err(Error::UnknownId {
                    registry: self.registry,
                    id: id.index() as u32,
                });
            }
            return Ok(Some(id));
        }

        let Some(selector) = selector else {
            return Ok(None);
        };
        match self.selectors.get(selector) {
            None => Ok(None),
            Some(&id) if id.index() < self.entries.len() => Ok(Some(id)),
            Some(&id) => Err(Error::ConsistencyViolation {
                registry: self.registry,
                selector: selector.join("/"),
                id: id.index() as u32,
            }),
        }
    }

    /// Append a new entry built from its freshly minted id.
    pub fn insert(&mut self, selector: Option<Selector>, make: impl FnOnce(I) -> T) -> I {
        let id = I::from_index(self.entries.len());
        self.entries.push(make(id));
        if let Some(selector) = selector {
            self.selectors.insert(selector, id);
        }
        id
    }

    pub fn mark_registered(&mut self, id: I) {
        self.referenced.shift_remove(&id);
        self.registered.insert(id);
    }

    pub fn mark_referenced(&mut self, id: I) {
        if !self.registered.contains(&id) {
            self.referenced.insert(id);
        }
    }

    pub fn is_registered(&self, id: I) -> bool {
        self.registered.contains(&id)
    }

    pub fn registered(&self) -> impl Iterator<Item = I> + '_ {
        self.registered.iter().copied()
    }

    pub fn referenced(&self) -> impl Iterator<Item = I> + '_ {
        self.referenced.iter().copied()
    }

    #[cfg(test)]
    pub fn corrupt_selector(&mut self, selector: Selector, id: I) {
        self.selectors.insert(selector, id);
    }
}
