//! Name assignment pass and the conflict resolution loop.

use super::planner::{Planner, resolve_dependency};
use crate::analyze::{NameTable, declare};
use crate::ids::{FileId, NodeId, ScopeId, SymbolId};
use crate::project::{NameConflict, Project};
use crate::symbols::{SymbolKind, can_share_name};
use crate::{Error, Result};

/// Which file table a file-scoped name is checked against.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(super) enum NameLookup {
    /// Declarations and re-exports.
    TopLevel,
    /// Imports, which must also avoid locals.
    AllNames,
}

impl Planner {
    /// Name every node symbol in its file, then every local symbol in the
    /// scope it was recorded in.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn assign_names(&mut self, project: &mut Project) -> Result<()> {
        for node in self.nodes.clone() {
            let Some(symbol) = self.analyzer.ensure_analysis(node).symbol() else {
                continue;
            };
            self.assign_file_scoped_name(project, Some(node), symbol, NameLookup::TopLevel)?;
        }

        for node in self.nodes.clone() {
            let Some(file) = project.nodes.file(node) else {
                continue;
            };
            let dependencies = self.analyzer.ensure_analysis(node).dependencies();
            for (dependency, scope) in dependencies {
                let Some(dep) = resolve_dependency(project, &dependency) else {
                    continue;
                };
                // file-scoped or external, named elsewhere
                if project.symbols.symbol(dep).file().is_some() {
                    continue;
                }
                self.assign_local_name(project, node, file, dep, scope)?;
            }
        }
        Ok(())
    }

    /// Name `symbol` in its own file and record it in the file's tables.
    ///
    /// `node` is the analysis whose root scope also receives the name.
    /// Symbols without a file are left alone.
    pub(super) fn assign_file_scoped_name(
        &mut self,
        project: &mut Project,
        node: Option<NodeId>,
        symbol: SymbolId,
        lookup: NameLookup,
    ) -> Result<()> {
        let Some(file) = project.symbols.symbol(symbol).file() else {
            return Ok(());
        };
        let visible = {
            let file = project.files.file(file);
            match lookup {
                NameLookup::TopLevel => file.top_level_names.clone(),
                NameLookup::AllNames => file.all_names.clone(),
            }
        };
        let Some(name) = self.resolve_name(project, symbol, file, &visible)? else {
            return Ok(());
        };

        let kind = project.symbols.symbol(symbol).kind();
        let file = project.files.file_mut(file);
        declare(&mut file.top_level_names, &name, kind);
        declare(&mut file.all_names, &name, kind);
        file.resolved_names.set(symbol, name.clone());
        if let Some(node) = node {
            let scopes = self.analyzer.ensure_analysis_mut(node).scopes_mut();
            let root = scopes.root();
            declare(&mut scopes.get_mut(root).names, &name, kind);
        }
        Ok(())
    }

    /// Name a symbol declared inside `node`, visible from `scope` and the
    /// enclosing file scope.
    pub(super) fn assign_local_name(
        &mut self,
        project: &mut Project,
        node: NodeId,
        file: FileId,
        symbol: SymbolId,
        scope: ScopeId,
    ) -> Result<()> {
        let mut visible = project.files.file(file).top_level_names.clone();
        let local = self.analyzer.ensure_analysis(node).scopes().local_names(scope);
        visible.extend(local);

        let Some(name) = self.resolve_name(project, symbol, file, &visible)? else {
            return Ok(());
        };

        let kind = project.symbols.symbol(symbol).kind();
        let scopes = self.analyzer.ensure_analysis_mut(node).scopes_mut();
        declare(&mut scopes.get_mut(scope).names, &name, kind);
        declare(&mut project.files.file_mut(file).all_names, &name, kind);
        Ok(())
    }

    /// Settle the final name of `symbol` against `visible`.
    ///
    /// Returns `None` when the symbol was already named during this run.
    fn resolve_name(
        &mut self,
        project: &mut Project,
        symbol: SymbolId,
        file: FileId,
        visible: &NameTable,
    ) -> Result<Option<String>> {
        if self.resolved.contains(&symbol) {
            return Ok(None);
        }

        let (base_name, kind, node) = {
            let symbol = project.symbols.symbol(symbol);
            (symbol.name().to_string(), symbol.kind(), symbol.node())
        };
        let node = node.and_then(|id| project.nodes.get(id));
        let sanitize = |name: &str| match node {
            Some(node) => node.sanitize_name(name),
            None => name.to_string(),
        };
        let language = node
            .and_then(|node| node.language())
            .or_else(|| project.files.file(file).language());
        let resolver = project.config.resolver_for(language);
        let max_attempts = project.config.max_name_attempts;

        let mut candidate = sanitize(&base_name);
        let mut attempt = 1;
        while !fits(visible, &candidate, kind) {
            let next = if attempt > max_attempts {
                None
            } else {
                resolver(NameConflict {
                    attempt,
                    base_name: &base_name,
                })
            };
            let Some(next) = next else {
                return Err(Error::UnresolvableNameConflict {
                    symbol: project.symbols.display(symbol),
                });
            };
            candidate = sanitize(&next);
            attempt += 1;
        }

        if attempt > 1 {
            tracing::trace!(symbol = %symbol, from = %base_name, to = %candidate, "renamed on conflict");
        }
        project.symbols.set_final_name(symbol, candidate.clone())?;
        self.resolved.insert(symbol);
        Ok(Some(candidate))
    }
}

/// No declaration already under `name` conflicts with `kind`.
fn fits(visible: &NameTable, name: &str, kind: SymbolKind) -> bool {
    visible
        .get(name)
        .is_none_or(|kinds| kinds.iter().all(|&other| can_share_name(kind, other)))
}
