//! Canonical-identity store for declarations.
//!
//! Two entry states:
//! - **registered**: received a full registration; indexed by metadata
//! - **stub**: interned by [`SymbolRegistry::reference`] before its
//!   declaration exists; redirected to a canonical symbol by the first
//!   registration whose metadata is a superset of the stub's key
//!
//! Every read resolves the canonical link first. Writes to a redirected stub
//! fail with [`Error::StubMutation`].
//!
//! Queries go through an attribute index keyed by `(path, serialized value)`
//! and are memoized per normalized filter. Each cached filter records the
//! entries it depends on, and registration drops only the cached filters
//! sharing an entry with the new metadata.

use std::any::Any;

use indexmap::{IndexMap, IndexSet};

use super::meta::{
    IndexEntry, Meta, cache_key, index_entries, is_subset, serialize_entry, serialize_value,
};
use super::symbol::{Symbol, SymbolIn};
use super::kind::{ImportKind, SymbolKind};
use crate::ids::{FileId, NodeId, SymbolId};
use crate::{Error, Result};

const REGISTRY: &str = "symbol";

#[derive(Default)]
pub struct SymbolRegistry {
    pub(crate) symbols: Vec<Symbol>,
    registered: IndexSet<SymbolId>,
    stubs: IndexSet<SymbolId>,
    /// Filter cache key → unresolved stub interned for it.
    stub_cache: IndexMap<String, SymbolId>,
    /// Path → serialized value → symbols carrying that entry.
    indices: IndexMap<String, IndexMap<String, IndexSet<SymbolId>>>,
    query_cache: IndexMap<String, Vec<SymbolId>>,
    /// Cache key → serialized entries it was computed from.
    query_deps: IndexMap<String, Vec<String>>,
    /// Serialized entry → cache keys depending on it.
    dependents: IndexMap<String, IndexSet<String>>,
    values: IndexMap<SymbolId, Box<dyn Any>>,
}

impl SymbolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Follow the canonical link. Ids without one are their own canonical.
    pub fn canonical(&self, id: SymbolId) -> SymbolId {
        let mut current = id;
        while let Some(next) = self.symbols.get(current.index()).and_then(|s| s.canonical) {
            current = next;
        }
        current
    }

    /// The canonical symbol behind `id`.
    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(self.canonical(id).index())
    }

    /// Like [`get`](Self::get), for ids this registry minted.
    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        self.ensure_symbol(self.canonical(id))
    }

    pub fn is_registered(&self, id: SymbolId) -> bool {
        self.registered.contains(&self.canonical(id))
    }

    /// Still waiting for a matching registration.
    pub fn is_unresolved_stub(&self, id: SymbolId) -> bool {
        self.stubs.contains(&self.canonical(id))
    }

    /// Was redirected to a canonical symbol.
    pub fn is_redirected(&self, id: SymbolId) -> bool {
        self.symbols
            .get(id.index())
            .is_some_and(|s| s.canonical.is_some())
    }

    /// Registered symbols in registration order.
    pub fn registered(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.registered.iter().copied()
    }

    /// Unresolved stubs in creation order.
    pub fn stubs(&self) -> impl Iterator<Item = SymbolId> + '_ {
        self.stubs.iter().copied()
    }

    pub fn display(&self, id: SymbolId) -> String {
        match self.get(id) {
            Some(symbol) => symbol.display(),
            None => format!("<unknown>#{id}"),
        }
    }

    /// Final name of the canonical symbol, failing if naming has not run.
    pub fn final_name(&self, id: SymbolId) -> Result<&str> {
        let symbol = self.get(id).ok_or(Error::UnknownId {
            registry: REGISTRY,
            id: id.as_u32(),
        })?;
        symbol.final_name().ok_or_else(|| Error::UnresolvedName {
            symbol: symbol.display(),
        })
    }

    /// Registered symbols whose metadata is a superset of `filter`.
    ///
    /// The empty filter matches nothing.
    pub fn query(&mut self, filter: &Meta) -> Vec<SymbolId> {
        let entries = index_entries(filter);
        let key = cache_key(&entries);
        if let Some(ids) = self.query_cache.get(&key) {
            return ids.clone();
        }

        let mut acc: Option<IndexSet<SymbolId>> = None;
        for (path, value) in &entries {
            let Some(set) = self
                .indices
                .get(path)
                .and_then(|values| values.get(&serialize_value(value)))
            else {
                acc = Some(IndexSet::new());
                break;
            };
            acc = Some(match acc {
                None => set.clone(),
                Some(prev) => prev.into_iter().filter(|id| set.contains(id)).collect(),
            });
        }
        let ids: Vec<SymbolId> = acc.map(|set| set.into_iter().collect()).unwrap_or_default();

        let deps = entries.iter().map(serialize_entry).collect();
        self.cache_query(key, deps, ids.clone());
        ids
    }

    /// First registered match for `meta`, else the interned stub for it.
    ///
    /// Repeated calls with an equivalent key return the same id until a
    /// matching registration redirects the stub.
    pub fn reference(&mut self, meta: Meta) -> SymbolId {
        if let Some(&found) = self.query(&meta).first() {
            return found;
        }

        let key = cache_key(&index_entries(&meta));
        if let Some(&stub) = self.stub_cache.get(&key) {
            return stub;
        }

        let id = self.next_id();
        self.symbols.push(Symbol::stub(id, meta));
        self.stubs.insert(id);
        self.stub_cache.insert(key, id);
        tracing::trace!(symbol = %id, "interned stub");
        id
    }

    /// Create or promote an entry.
    ///
    /// With an id, the entry must exist: an unresolved stub is promoted in
    /// place and a registered symbol has its attributes overwritten. Without
    /// one, a new canonical symbol is created and every unresolved stub whose
    /// key it satisfies is redirected to it.
    pub fn register(&mut self, input: SymbolIn) -> Result<SymbolId> {
        match input.id {
            Some(id) => self.register_existing(id, input),
            None => Ok(self.register_new(input)),
        }
    }

    fn register_new(&mut self, input: SymbolIn) -> SymbolId {
        let id = self.next_id();
        self.symbols.push(Symbol::new(id, input));
        self.registered.insert(id);

        let entries = self.entries_of(id);
        if !entries.is_empty() {
            self.index(id, &entries);
            self.invalidate(&entries);
            self.replace_stubs(id, &entries);
        }
        id
    }

    fn register_existing(&mut self, id: SymbolId, input: SymbolIn) -> Result<SymbolId> {
        self.writable(id)?;

        if self.stubs.shift_remove(&id) {
            let key = cache_key(&self.entries_of(id));
            self.stub_cache.shift_remove(&key);
            tracing::debug!(symbol = %id, "promoted stub in place");
        }

        let previous = if self.registered.contains(&id) {
            self.entries_of(id)
        } else {
            Vec::new()
        };

        self.ensure_symbol_mut(id).fill(input);
        self.registered.insert(id);

        let entries = self.entries_of(id);
        if previous != entries {
            self.unindex(id, &previous);
            self.invalidate(&previous);
        }
        if !entries.is_empty() {
            self.index(id, &entries);
            self.invalidate(&entries);
            self.replace_stubs(id, &entries);
        }
        Ok(id)
    }

    pub fn set_final_name(&mut self, id: SymbolId, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let symbol = self.writable(id)?;
        if let Some(existing) = &symbol.final_name {
            if *existing != name {
                return Err(Error::WriteOnce {
                    field: "final name",
                    subject: symbol.display(),
                });
            }
            return Ok(());
        }
        symbol.final_name = Some(name);
        Ok(())
    }

    pub fn set_file(&mut self, id: SymbolId, file: FileId) -> Result<()> {
        let symbol = self.writable(id)?;
        if symbol.file.is_some_and(|existing| existing != file) {
            return Err(Error::WriteOnce {
                field: "file",
                subject: symbol.display(),
            });
        }
        symbol.file = Some(file);
        Ok(())
    }

    pub fn set_node(&mut self, id: SymbolId, node: NodeId) -> Result<()> {
        let symbol = self.writable(id)?;
        if symbol.node.is_some_and(|existing| existing != node) {
            return Err(Error::WriteOnce {
                field: "node",
                subject: symbol.display(),
            });
        }
        symbol.node = Some(node);
        Ok(())
    }

    pub fn set_name(&mut self, id: SymbolId, name: impl Into<String>) -> Result<()> {
        self.writable(id)?.name = name.into();
        Ok(())
    }

    pub fn set_kind(&mut self, id: SymbolId, kind: SymbolKind) -> Result<()> {
        self.writable(id)?.kind = kind;
        Ok(())
    }

    pub fn set_import_kind(&mut self, id: SymbolId, kind: ImportKind) -> Result<()> {
        self.writable(id)?.import_kind = kind;
        Ok(())
    }

    pub fn set_exported(&mut self, id: SymbolId, exported: bool) -> Result<()> {
        self.writable(id)?.exported = exported;
        Ok(())
    }

    pub fn set_export_from(&mut self, id: SymbolId, paths: Vec<String>) -> Result<()> {
        self.writable(id)?.export_from = paths;
        Ok(())
    }

    /// Attach a side value to `id`. Identity and indices are untouched.
    pub fn set_value<T: Any>(&mut self, id: SymbolId, value: T) {
        self.values.insert(id, Box::new(value));
    }

    pub fn get_value<T: Any>(&self, id: SymbolId) -> Option<&T> {
        self.values.get(&id).and_then(|v| v.downcast_ref())
    }

    pub fn has_value(&self, id: SymbolId) -> bool {
        self.values.contains_key(&id)
    }

    #[cfg(test)]
    pub(crate) fn is_cached(&self, filter: &Meta) -> bool {
        self.query_cache
            .contains_key(&cache_key(&index_entries(filter)))
    }

    fn next_id(&self) -> SymbolId {
        SymbolId::from_raw(self.symbols.len() as u32)
    }

    fn entries_of(&self, id: SymbolId) -> Vec<IndexEntry> {
        self.ensure_symbol(id)
            .meta
            .as_ref()
            .map(index_entries)
            .unwrap_or_default()
    }

    /// The entry behind `id` itself, refusing redirected stubs.
    fn writable(&mut self, id: SymbolId) -> Result<&mut Symbol> {
        let Some(symbol) = self.symbols.get(id.index()) else {
            return Err(Error::UnknownId {
                registry: REGISTRY,
                id: id.as_u32(),
            });
        };
        if let Some(canonical) = symbol.canonical {
            return Err(Error::StubMutation {
                stub: symbol.display(),
                canonical: self.display(canonical),
            });
        }
        Ok(self.ensure_symbol_mut(id))
    }

    fn index(&mut self, id: SymbolId, entries: &[IndexEntry]) {
        for (path, value) in entries {
            self.indices
                .entry(path.clone())
                .or_default()
                .entry(serialize_value(value))
                .or_default()
                .insert(id);
        }
    }

    fn unindex(&mut self, id: SymbolId, entries: &[IndexEntry]) {
        for (path, value) in entries {
            if let Some(set) = self
                .indices
                .get_mut(path)
                .and_then(|values| values.get_mut(&serialize_value(value)))
            {
                set.shift_remove(&id);
            }
        }
    }

    fn cache_query(&mut self, key: String, deps: Vec<String>, ids: Vec<SymbolId>) {
        for dep in &deps {
            self.dependents
                .entry(dep.clone())
                .or_default()
                .insert(key.clone());
        }
        self.query_deps.insert(key.clone(), deps);
        self.query_cache.insert(key, ids);
    }

    fn invalidate(&mut self, entries: &[IndexEntry]) {
        for entry in entries.iter().map(serialize_entry) {
            let Some(keys) = self.dependents.shift_remove(&entry) else {
                continue;
            };
            for key in keys {
                self.query_cache.shift_remove(&key);
                for dep in self.query_deps.shift_remove(&key).unwrap_or_default() {
                    if let Some(set) = self.dependents.get_mut(&dep) {
                        set.shift_remove(&key);
                    }
                }
                tracing::trace!(filter = %key, "query cache invalidated");
            }
        }
    }

    fn replace_stubs(&mut self, canonical: SymbolId, entries: &[IndexEntry]) {
        let matched: Vec<(SymbolId, String)> = self
            .stubs
            .iter()
            .copied()
            .filter(|&stub| stub != canonical)
            .filter_map(|stub| {
                let key = self.entries_of(stub);
                (!key.is_empty() && is_subset(&key, entries)).then(|| (stub, cache_key(&key)))
            })
            .collect();

        for (stub, key) in matched {
            self.stub_cache.shift_remove(&key);
            self.stubs.shift_remove(&stub);
            self.ensure_symbol_mut(stub).canonical = Some(canonical);
            tracing::debug!(stub = %stub, canonical = %canonical, "redirected stub");
        }
    }
}
