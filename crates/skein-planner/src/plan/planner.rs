//! Planner state and the pass sequence.

use indexmap::IndexSet;

use crate::Result;
use crate::analyze::{Analysis, Analyzer, SymbolRef};
use crate::ids::{NodeId, SymbolId};
use crate::project::Project;
use crate::render::RenderMeta;

/// Runs the planning passes over one project.
#[derive(Debug, Default)]
pub struct Planner {
    pub(super) analyzer: Analyzer,
    /// Symbols whose final name is settled.
    pub(super) resolved: IndexSet<SymbolId>,
    /// Registered nodes, in registration order.
    pub(super) nodes: Vec<NodeId>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Allocate files, assign names, resolve paths, then plan exports and
    /// imports.
    pub fn plan(&mut self, project: &mut Project, meta: Option<&RenderMeta>) -> Result<()> {
        self.resolved.clear();
        self.nodes = project.nodes.registered().collect();
        for id in self.nodes.clone() {
            self.analyze(project, id);
        }

        self.allocate_files(project)?;
        self.assign_names(project)?;
        self.resolve_file_paths(project, meta)?;
        self.plan_exports(project)?;
        self.plan_imports(project)?;

        tracing::debug!(
            nodes = self.nodes.len(),
            files = project.files.len(),
            symbols = project.symbols.len(),
            "planned project"
        );
        Ok(())
    }

    pub(super) fn analyze(&mut self, project: &Project, id: NodeId) -> &Analysis {
        self.analyzer.analyze(id, &project.nodes, &project.symbols)
    }
}

/// Canonical symbol behind a dependency edge.
///
/// `None` for stubs no registration ever matched: they have no file and no
/// name, so no pass can place them.
pub(super) fn resolve_dependency(project: &Project, dependency: &SymbolRef) -> Option<SymbolId> {
    let id = dependency.get();
    if project.symbols.is_unresolved_stub(id) {
        return None;
    }
    project.symbols.get(id).map(|symbol| symbol.id())
}
