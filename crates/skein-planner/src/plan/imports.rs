//! Import planning pass.

use indexmap::IndexMap;

use super::naming::NameLookup;
use super::planner::{Planner, resolve_dependency};
use crate::Result;
use crate::files::{ImportMember, ImportModule};
use crate::ids::{FileId, SymbolId};
use crate::project::Project;
use crate::symbols::{ImportKind, SymbolIn, SymbolKind};

/// Source file, imported name, flavor, type-only.
type ImportKey = (FileId, String, ImportKind, bool);

struct ImportEntry {
    /// Import symbol bound in the consuming file.
    symbol: SymbolId,
    source: FileId,
    source_name: String,
    kind: SymbolKind,
}

impl Planner {
    /// Bind every cross-file dependency to an import symbol in the
    /// consuming file, then group the import symbols per source file.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn plan_imports(&mut self, project: &mut Project) -> Result<()> {
        let mut by_file: IndexMap<FileId, IndexMap<ImportKey, ImportEntry>> = IndexMap::new();

        for node in self.nodes.clone() {
            let analysis = self.analyzer.ensure_analysis(node);
            let Some(symbol) = analysis.symbol() else {
                continue;
            };
            let dependencies = analysis.dependencies();
            let Some(file) = project.symbols.symbol(symbol).file() else {
                continue;
            };

            for (dependency, _) in dependencies {
                let Some(dep) = resolve_dependency(project, &dependency) else {
                    continue;
                };
                let (dep_file, external) = {
                    let dep = project.symbols.symbol(dep);
                    (dep.file(), dep.external().is_some())
                };
                let Some(dep_file) = dep_file.filter(|&dep_file| dep_file != file) else {
                    continue;
                };

                if external {
                    self.assign_file_scoped_name(project, None, dep, NameLookup::TopLevel)?;
                }

                let source_name = project.symbols.final_name(dep)?.to_string();
                let source = project.symbols.symbol(dep);
                let (kind, import_kind) = (source.kind(), source.import_kind());
                let key = (dep_file, source_name.clone(), import_kind, kind.is_type_only());

                let seen = by_file.entry(file).or_default();
                let import = match seen.get(&key) {
                    Some(entry) => {
                        tracing::trace!(import = %entry.symbol, name = %source_name, "reused import");
                        entry.symbol
                    }
                    None => {
                        let input = SymbolIn::new(source_name.clone())
                            .exported(source.exported())
                            .kind(kind)
                            .import_kind(import_kind)
                            .external_opt(source.external().map(str::to_string));
                        let import = project.symbols.register(input)?;
                        project.symbols.set_file(import, file)?;
                        self.assign_file_scoped_name(
                            project,
                            Some(node),
                            import,
                            NameLookup::AllNames,
                        )?;
                        seen.insert(
                            key,
                            ImportEntry {
                                symbol: import,
                                source: dep_file,
                                source_name,
                                kind,
                            },
                        );
                        import
                    }
                };
                dependency.replace(import);
            }
        }

        for (file, entries) in by_file {
            let mut groups: IndexMap<FileId, ImportModule> = IndexMap::new();
            for entry in entries.into_values() {
                let symbol = project.symbols.symbol(entry.symbol);
                let local_name = project.symbols.final_name(entry.symbol)?.to_string();
                let type_only = entry.kind.is_type_only();

                let group = groups
                    .entry(entry.source)
                    .or_insert_with(|| ImportModule::new(entry.source));
                if symbol.import_kind() == ImportKind::Namespace {
                    group.imports.clear();
                    group.namespace_import = Some(local_name);
                } else {
                    group.push(ImportMember {
                        local_name,
                        source_name: entry.source_name,
                        kind: symbol.import_kind(),
                        type_only,
                    });
                }
                group.type_only &= type_only;
            }

            let file = project.files.file_mut(file);
            for group in groups.into_values() {
                file.add_import(group);
            }
        }
        Ok(())
    }
}
