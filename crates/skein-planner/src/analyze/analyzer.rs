use indexmap::IndexMap;

use super::context::{AnalysisContext, Relationship};
use super::scope::{ScopeTree, SymbolRef};
use crate::ids::{NodeId, ScopeId, SymbolId};
use crate::nodes::NodeRegistry;
use crate::symbols::SymbolRegistry;

/// Result of analyzing one node.
#[derive(Debug)]
pub struct Analysis {
    node: NodeId,
    symbol: Option<SymbolId>,
    scopes: ScopeTree,
}

impl Analysis {
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Canonical symbol declared by the node.
    pub fn symbol(&self) -> Option<SymbolId> {
        self.symbol
    }

    pub fn scopes(&self) -> &ScopeTree {
        &self.scopes
    }

    pub(crate) fn scopes_mut(&mut self) -> &mut ScopeTree {
        &mut self.scopes
    }

    pub fn dependencies(&self) -> Vec<(SymbolRef, ScopeId)> {
        self.scopes.dependencies()
    }
}

/// Runs each node's `analyze` once and keeps the results.
///
/// Structural edges are stored as id maps in both directions, so parents
/// and children never own each other.
#[derive(Debug, Default)]
pub struct Analyzer {
    analyses: IndexMap<NodeId, Analysis>,
    children: IndexMap<NodeId, Vec<(NodeId, Relationship)>>,
    parents: IndexMap<NodeId, NodeId>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze `id` unless it already was.
    pub fn analyze(
        &mut self,
        id: NodeId,
        nodes: &NodeRegistry,
        symbols: &SymbolRegistry,
    ) -> &Analysis {
        if !self.analyses.contains_key(&id) {
            let node = nodes.node(id);
            let mut ctx = AnalysisContext::new(symbols, id, node.symbol());
            node.analyze(&mut ctx);
            let symbol = ctx.symbol();
            let (scopes, children) = ctx.finish();

            for &(child, _) in &children {
                self.parents.entry(child).or_insert(id);
            }
            tracing::trace!(
                node = %id,
                scopes = scopes.len(),
                children = children.len(),
                "analyzed node"
            );
            self.children.insert(id, children);
            self.analyses.insert(
                id,
                Analysis {
                    node: id,
                    symbol,
                    scopes,
                },
            );
        }
        self.ensure_analysis(id)
    }

    pub fn analysis(&self, id: NodeId) -> Option<&Analysis> {
        self.analyses.get(&id)
    }

    pub(crate) fn analysis_mut(&mut self, id: NodeId) -> Option<&mut Analysis> {
        self.analyses.get_mut(&id)
    }

    pub fn children(&self, id: NodeId) -> &[(NodeId, Relationship)] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.analyses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.analyses.is_empty()
    }
}
