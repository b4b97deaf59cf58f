use crate::ids::{NodeId, ScopeId, SymbolId};
use crate::symbols::SymbolRegistry;

use super::scope::{NameTable, ScopeTree, SymbolRef};

/// Kind of structural edge between two nodes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Relationship {
    /// The child is lexically nested in the parent.
    Container,
    /// The parent only points at the child.
    Reference,
}

/// Handed to [`Node::analyze`](crate::Node::analyze).
pub struct AnalysisContext<'a> {
    symbols: &'a SymbolRegistry,
    node: NodeId,
    symbol: Option<SymbolId>,
    scopes: ScopeTree,
    current: ScopeId,
    children: Vec<(NodeId, Relationship)>,
}

impl<'a> AnalysisContext<'a> {
    pub(crate) fn new(symbols: &'a SymbolRegistry, node: NodeId, symbol: Option<SymbolId>) -> Self {
        let scopes = ScopeTree::new();
        let current = scopes.root();
        Self {
            symbols,
            node,
            symbol: symbol.map(|id| symbols.canonical(id)),
            scopes,
            current,
            children: Vec::new(),
        }
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Canonical symbol of the node being analyzed.
    pub fn symbol(&self) -> Option<SymbolId> {
        self.symbol
    }

    pub fn symbols(&self) -> &SymbolRegistry {
        self.symbols
    }

    /// Currently open scope.
    pub fn scope(&self) -> ScopeId {
        self.current
    }

    pub fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }

    /// Record a dependency in the open scope. Self-edges are dropped.
    pub fn add_dependency(&mut self, dependency: SymbolRef) {
        let target = self.symbols.canonical(dependency.get());
        if Some(target) == self.symbol {
            return;
        }
        self.scopes.add_dependency(self.current, dependency);
    }

    pub fn push_scope(&mut self) -> ScopeId {
        self.current = self.scopes.push(self.current);
        self.current
    }

    /// Close the open scope. At the root this does nothing.
    pub fn pop_scope(&mut self) {
        if let Some(parent) = self.scopes.get(self.current).parent() {
            self.current = parent;
        }
    }

    pub fn add_child(&mut self, node: NodeId, relationship: Relationship) {
        self.children.push((node, relationship));
    }

    pub fn walk_scopes(&self, f: impl FnMut(&SymbolRef, ScopeId)) {
        self.scopes.walk(f);
    }

    pub fn local_names(&self, scope: ScopeId) -> NameTable {
        self.scopes.local_names(scope)
    }

    pub(crate) fn finish(self) -> (ScopeTree, Vec<(NodeId, Relationship)>) {
        (self.scopes, self.children)
    }
}
