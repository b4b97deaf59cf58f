//! Re-export planning pass.

use indexmap::{IndexMap, IndexSet};

use super::naming::NameLookup;
use super::planner::Planner;
use crate::Result;
use crate::files::{ExportMember, ExportModule, FileIn};
use crate::ids::{FileId, SymbolId};
use crate::project::Project;
use crate::symbols::{SymbolIn, SymbolKind};

/// Synthesized re-export, keyed by its exported name in the target file.
struct ExportEntry {
    symbol: SymbolId,
    source: FileId,
    kinds: IndexSet<SymbolKind>,
}

impl Planner {
    /// Synthesize a symbol in every re-export target of every exported node
    /// symbol, then group the synthesized symbols per source file.
    #[tracing::instrument(level = "debug", skip_all)]
    pub(super) fn plan_exports(&mut self, project: &mut Project) -> Result<()> {
        let mut by_target: IndexMap<FileId, IndexMap<String, ExportEntry>> = IndexMap::new();

        for node in self.nodes.clone() {
            let (exported, language) = {
                let node = project.nodes.node(node);
                (node.exported(), node.language())
            };
            if !exported {
                continue;
            }
            let Some(symbol) = self.analyzer.ensure_analysis(node).symbol() else {
                continue;
            };
            let Some(file) = project.nodes.file(node) else {
                continue;
            };

            let (targets, kind, input) = {
                let source = project.symbols.symbol(symbol);
                if source.export_from().is_empty() {
                    continue;
                }
                let input = SymbolIn::new(project.symbols.final_name(symbol)?)
                    .exported(true)
                    .kind(source.kind())
                    .import_kind(source.import_kind())
                    .external_opt(source.external().map(str::to_string));
                (source.export_from().to_vec(), source.kind(), input)
            };

            for target_path in targets {
                let target = project
                    .files
                    .register(FileIn::new(target_path).language(language))?;
                if target == file {
                    continue;
                }

                let exp = project.symbols.register(input.clone())?;
                project.symbols.set_file(exp, target)?;
                self.assign_file_scoped_name(project, None, exp, NameLookup::TopLevel)?;

                let exported_name = project.symbols.final_name(exp)?.to_string();
                by_target
                    .entry(target)
                    .or_default()
                    .entry(exported_name)
                    .or_insert_with(|| ExportEntry {
                        symbol: exp,
                        source: file,
                        kinds: IndexSet::new(),
                    })
                    .kinds
                    .insert(kind);
            }
        }

        for (target, entries) in by_target {
            let mut groups: IndexMap<FileId, ExportModule> = IndexMap::new();
            for (exported_name, entry) in entries {
                let symbol = project.symbols.symbol(entry.symbol);
                let source_name = symbol.name().to_string();
                let type_only = entry.kinds.iter().all(|kind| kind.is_type_only());

                let group = groups
                    .entry(entry.source)
                    .or_insert_with(|| ExportModule::new(entry.source));
                if source_name != exported_name {
                    group.can_export_all = false;
                }
                group.type_only &= type_only;
                group.exports.push(ExportMember {
                    exported_name,
                    source_name,
                    kind: symbol.import_kind(),
                    type_only,
                });
            }

            let file = project.files.file_mut(target);
            for group in groups.into_values() {
                file.add_export(group);
            }
        }
        Ok(())
    }
}
