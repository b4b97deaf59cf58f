//! File allocation pass.

use super::planner::{Planner, resolve_dependency};
use crate::Result;
use crate::files::FileIn;
use crate::ids::SymbolId;
use crate::project::Project;

impl Planner {
    /// Bind every node symbol to its home file and register the files that
    /// re-export targets and external dependencies live in.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn allocate_files(&mut self, project: &mut Project) -> Result<()> {
        for node in self.nodes.clone() {
            let analysis = self.analyzer.ensure_analysis(node);
            let Some(symbol) = analysis.symbol() else {
                continue;
            };
            let dependencies = analysis.dependencies();

            let language = project.nodes.node(node).language();
            let file = project.files.register(symbol_file_in(project, symbol))?;
            project.files.file_mut(file).add_node(node, language);
            project.nodes.set_file(node, file)?;
            project.symbols.set_file(symbol, file)?;
            tracing::trace!(symbol = %symbol, file = %file, "allocated home file");

            let file_language = project.files.file(file).language();
            for target in project.symbols.symbol(symbol).export_from().to_vec() {
                project
                    .files
                    .register(FileIn::new(target).language(file_language))?;
            }

            for (dependency, _) in dependencies {
                let Some(dep) = resolve_dependency(project, &dependency) else {
                    tracing::warn!(
                        node = %node,
                        dependency = %project.symbols.display(dependency.get()),
                        "skipping unresolved dependency"
                    );
                    continue;
                };
                let target = project.symbols.symbol(dep);
                if target.external().is_none() || target.file().is_some() {
                    continue;
                }
                let file = project.files.register(symbol_file_in(project, dep))?;
                project.symbols.set_file(dep, file)?;
            }
        }
        Ok(())
    }
}

/// Home file of `symbol`: its external module, else the configured
/// override, else its path hint, else the project default.
fn symbol_file_in(project: &Project, symbol: SymbolId) -> FileIn {
    let symbol = project.symbols.symbol(symbol);
    let language = symbol
        .node()
        .and_then(|node| project.nodes.get(node))
        .and_then(|node| node.language());

    if let Some(module) = symbol.external() {
        return FileIn::external(module).language(language);
    }

    let config = &project.config;
    let path = config
        .symbol_file
        .as_ref()
        .and_then(|f| f(symbol))
        .or_else(|| symbol.file_path().map(str::to_string))
        .unwrap_or_else(|| config.default_file_name.clone());
    FileIn::new(path).language(language)
}
