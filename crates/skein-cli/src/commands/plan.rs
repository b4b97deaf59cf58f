use std::path::PathBuf;

use serde::Serialize;
use skein_core::Colors;
use skein_planner::files::{ExportModule, File, ImportModule};
use skein_planner::render::{module_specifier, python_module};
use skein_planner::{ImportKind, Language, Project, SymbolKind};

use super::project_loader::load_project;
use crate::error::Result;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

pub struct PlanArgs {
    pub manifest: PathBuf,
    pub root: Option<PathBuf>,
    pub format: ReportFormat,
    pub color: bool,
}

pub fn run(args: PlanArgs) {
    match execute(&args) {
        Ok(out) => print!("{out}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

pub fn execute(args: &PlanArgs) -> Result<String> {
    let mut project = load_project(&args.manifest, args.root.as_deref())?;
    project.plan(None)?;
    let report = PlanReport::build(&project)?;

    match args.format {
        ReportFormat::Text => Ok(report.to_text(Colors::new(args.color))),
        ReportFormat::Json => Ok(serde_json::to_string_pretty(&report)? + "\n"),
    }
}

/// Where every declaration landed and how the files are wired.
#[derive(Debug, Serialize)]
pub struct PlanReport {
    pub files: Vec<FileReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,
    pub final_path: Option<PathBuf>,
    pub language: Option<Language>,
    pub renderer: Option<String>,
    pub declarations: Vec<DeclarationReport>,
    pub imports: Vec<ImportReport>,
    pub exports: Vec<ExportReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclarationReport {
    pub name: String,
    pub final_name: String,
    pub kind: SymbolKind,
    pub exported: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub from: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub members: Vec<MemberReport>,
    pub type_only: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub from: String,
    pub members: Vec<MemberReport>,
    pub type_only: bool,
    pub can_export_all: bool,
}

/// One binding. `alias` is the local name for imports and the exported
/// name for re-exports.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberReport {
    pub name: String,
    pub alias: String,
    pub kind: ImportKind,
    pub type_only: bool,
}

impl PlanReport {
    pub fn build(project: &Project) -> Result<Self> {
        let mut files = Vec::new();
        for file in project.files().registered() {
            if file.is_external() {
                continue;
            }
            files.push(file_report(project, file)?);
        }
        Ok(Self { files })
    }

    pub fn to_text(&self, colors: Colors) -> String {
        let Colors {
            name: named,
            specifier,
            renamed,
            muted,
            reset,
        } = colors;

        let mut out = String::new();
        for (i, file) in self.files.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&colors.paint(named, &file.path));
            if let Some(path) = &file.final_path {
                out.push_str(&format!(" {muted}→{reset} {}", path.display()));
            }
            if let Some(renderer) = &file.renderer {
                out.push_str(&format!(" {muted}[{renderer}]{reset}"));
            }
            out.push('\n');

            for decl in &file.declarations {
                let name = if decl.final_name == decl.name {
                    format!("{named}{}{reset}", decl.name)
                } else {
                    format!(
                        "{named}{}{reset} {muted}→{reset} {renamed}{}{reset}",
                        decl.name, decl.final_name
                    )
                };
                out.push_str(&format!("  {muted}{}{reset} {name}\n", decl.kind));
            }
            for import in &file.imports {
                let clause = match &import.namespace {
                    Some(namespace) => format!("* as {namespace}"),
                    None => members_clause(&import.members, import.type_only),
                };
                out.push_str(&format!(
                    "  {muted}import {}{reset}{clause} {muted}from{reset} {specifier}'{}'{reset}\n",
                    type_keyword(import.type_only),
                    import.from
                ));
            }
            for export in &file.exports {
                out.push_str(&format!(
                    "  {muted}export {}{reset}{} {muted}from{reset} {specifier}'{}'{reset}\n",
                    type_keyword(export.type_only),
                    members_clause(&export.members, export.type_only),
                    export.from
                ));
            }
        }
        out
    }
}

fn file_report(project: &Project, file: &File) -> Result<FileReport> {
    let symbols = project.symbols();

    let mut declarations = Vec::new();
    for &node in file.nodes() {
        let Some(symbol) = project.nodes().node(node).symbol() else {
            continue;
        };
        let symbol = symbols.symbol(symbol);
        declarations.push(DeclarationReport {
            name: symbol.name().to_string(),
            final_name: symbols.final_name(symbol.id())?.to_string(),
            kind: symbol.kind(),
            exported: symbol.exported(),
        });
    }

    let renderer = file
        .renderer()
        .and_then(|index| project.config().renderers().get(index))
        .map(|renderer| renderer.name().to_string());

    Ok(FileReport {
        path: file.logical_path().to_string(),
        final_path: file.final_path().map(PathBuf::from),
        language: file.language(),
        renderer,
        declarations,
        imports: file
            .imports()
            .iter()
            .map(|group| import_report(project, file, group))
            .collect(),
        exports: file
            .exports()
            .iter()
            .map(|group| export_report(project, file, group))
            .collect(),
    })
}

/// How `file` spells a reference to `source` in its own language.
fn specifier(project: &Project, file: &File, source: skein_planner::FileId) -> String {
    let source = project.files().file(source);
    match file.language() {
        Some(Language::Python) => python_module(file, source),
        _ => module_specifier(file, source),
    }
}

fn import_report(project: &Project, file: &File, group: &ImportModule) -> ImportReport {
    ImportReport {
        from: specifier(project, file, group.from),
        namespace: group.namespace_import.clone(),
        members: group
            .imports
            .iter()
            .map(|member| MemberReport {
                name: member.source_name.clone(),
                alias: member.local_name.clone(),
                kind: member.kind,
                type_only: member.type_only,
            })
            .collect(),
        type_only: group.type_only,
    }
}

fn export_report(project: &Project, file: &File, group: &ExportModule) -> ExportReport {
    ExportReport {
        from: specifier(project, file, group.from),
        members: group
            .exports
            .iter()
            .map(|member| MemberReport {
                name: member.source_name.clone(),
                alias: member.exported_name.clone(),
                kind: member.kind,
                type_only: member.type_only,
            })
            .collect(),
        type_only: group.type_only,
        can_export_all: group.can_export_all,
    }
}

fn type_keyword(type_only: bool) -> &'static str {
    if type_only { "type " } else { "" }
}

fn members_clause(members: &[MemberReport], group_type_only: bool) -> String {
    let members: Vec<String> = members
        .iter()
        .map(|member| {
            let prefix = type_keyword(member.type_only && !group_type_only);
            let name = match member.kind {
                ImportKind::Default => "default",
                _ => member.name.as_str(),
            };
            if name == member.alias {
                format!("{prefix}{name}")
            } else {
                format!("{prefix}{name} as {}", member.alias)
            }
        })
        .collect();
    format!("{{ {} }}", members.join(", "))
}
