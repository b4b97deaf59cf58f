//! Lexical scope tree.
//!
//! Scopes live in an arena indexed by [`ScopeId`]; the root is always the
//! first entry. A child sees its ancestors' names, never the reverse.

use indexmap::{IndexMap, IndexSet};
use skein_core::Ref;

use crate::ids::{ScopeId, SymbolId};
use crate::symbols::SymbolKind;

/// Name → kinds currently declared under it.
pub type NameTable = IndexMap<String, IndexSet<SymbolKind>>;

/// Rebindable dependency edge.
pub type SymbolRef = Ref<SymbolId>;

/// Record `kind` under `name`.
pub fn declare(table: &mut NameTable, name: &str, kind: SymbolKind) {
    table.entry(name.to_string()).or_default().insert(kind);
}

#[derive(Debug, Default)]
pub struct Scope {
    parent: Option<ScopeId>,
    children: Vec<ScopeId>,
    pub names: NameTable,
    dependencies: Vec<SymbolRef>,
}

impl Scope {
    pub fn parent(&self) -> Option<ScopeId> {
        self.parent
    }

    pub fn children(&self) -> &[ScopeId] {
        &self.children
    }

    /// Dependencies recorded while this scope was open.
    pub fn dependencies(&self) -> &[SymbolRef] {
        &self.dependencies
    }
}

#[derive(Debug)]
pub struct ScopeTree {
    scopes: Vec<Scope>,
}

impl Default for ScopeTree {
    fn default() -> Self {
        Self {
            scopes: vec![Scope::default()],
        }
    }
}

impl ScopeTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> ScopeId {
        ScopeId::from_raw(0)
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn get(&self, id: ScopeId) -> &Scope {
        &self.scopes[id.index()]
    }

    pub fn get_mut(&mut self, id: ScopeId) -> &mut Scope {
        &mut self.scopes[id.index()]
    }

    /// Open a child of `parent`.
    pub fn push(&mut self, parent: ScopeId) -> ScopeId {
        let id = ScopeId::from_raw(self.scopes.len() as u32);
        self.scopes.push(Scope {
            parent: Some(parent),
            ..Scope::default()
        });
        self.get_mut(parent).children.push(id);
        id
    }

    pub fn add_dependency(&mut self, scope: ScopeId, dependency: SymbolRef) {
        self.get_mut(scope).dependencies.push(dependency);
    }

    /// Names visible at `scope`: its own table laid over its ancestors'.
    ///
    /// On a name declared at several levels, the innermost kinds win.
    pub fn local_names(&self, scope: ScopeId) -> NameTable {
        let mut chain = vec![scope];
        let mut current = scope;
        while let Some(parent) = self.get(current).parent {
            chain.push(parent);
            current = parent;
        }

        let mut merged = NameTable::new();
        for id in chain.into_iter().rev() {
            for (name, kinds) in &self.get(id).names {
                merged.insert(name.clone(), kinds.clone());
            }
        }
        merged
    }

    /// Depth-first, pre-order over every recorded dependency.
    pub fn walk(&self, mut f: impl FnMut(&SymbolRef, ScopeId)) {
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            let scope = self.get(id);
            for dependency in &scope.dependencies {
                f(dependency, id);
            }
            stack.extend(scope.children.iter().rev().copied());
        }
    }

    /// [`walk`](Self::walk), collected.
    pub fn dependencies(&self) -> Vec<(SymbolRef, ScopeId)> {
        let mut out = Vec::new();
        self.walk(|dependency, scope| out.push((dependency.clone(), scope)));
        out
    }
}
