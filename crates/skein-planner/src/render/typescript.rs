//! ES module renderer for TypeScript and JavaScript files.

use super::specifier::module_specifier;
use super::{RenderContext, Renderer, final_extension, render_bodies};
use crate::Result;
use crate::files::{ExportModule, ImportMember, ImportModule};
use crate::symbols::ImportKind;

const EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts", "js", "jsx", "mjs", "cjs"];

/// Prints import groups, re-export groups, then node bodies.
#[derive(Clone, Copy, Debug, Default)]
pub struct TypeScriptRenderer;

impl TypeScriptRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TypeScriptRenderer {
    fn name(&self) -> &str {
        "typescript"
    }

    fn supports(&self, ctx: &RenderContext<'_>) -> bool {
        final_extension(ctx).is_some_and(|ext| EXTENSIONS.contains(&ext))
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let files = ctx.project.files();
        let mut sections = Vec::new();

        let imports: Vec<String> = ctx
            .file
            .imports()
            .iter()
            .map(|group| import_statement(group, &module_specifier(ctx.file, files.file(group.from))))
            .collect();
        if !imports.is_empty() {
            sections.push(imports.join("\n"));
        }

        let exports: Vec<String> = ctx
            .file
            .exports()
            .iter()
            .map(|group| export_statement(group, &module_specifier(ctx.file, files.file(group.from))))
            .collect();
        if !exports.is_empty() {
            sections.push(exports.join("\n"));
        }

        sections.extend(render_bodies(ctx)?);

        let mut out = sections.join("\n\n");
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}

fn type_prefix(flag: bool) -> &'static str {
    if flag { "type " } else { "" }
}

fn named_member(member: &ImportMember, group_type_only: bool) -> String {
    let prefix = type_prefix(member.type_only && !group_type_only);
    if member.local_name == member.source_name {
        format!("{prefix}{}", member.local_name)
    } else {
        format!("{prefix}{} as {}", member.source_name, member.local_name)
    }
}

fn import_statement(group: &ImportModule, specifier: &str) -> String {
    let keyword = type_prefix(group.type_only);
    if let Some(namespace) = &group.namespace_import {
        return format!("import {keyword}* as {namespace} from '{specifier}';");
    }

    // One default binding per statement; extra defaults get their own line.
    let mut defaults = group
        .imports
        .iter()
        .filter(|m| m.kind == ImportKind::Default)
        .map(|m| m.local_name.as_str());
    let mut clause = Vec::new();
    if let Some(default) = defaults.next() {
        clause.push(default.to_string());
    }
    let named: Vec<String> = group
        .imports
        .iter()
        .filter(|m| m.kind == ImportKind::Named)
        .map(|m| named_member(m, group.type_only))
        .collect();
    if !named.is_empty() {
        clause.push(format!("{{ {} }}", named.join(", ")));
    }
    if clause.is_empty() {
        return format!("import '{specifier}';");
    }

    let mut lines = vec![format!(
        "import {keyword}{} from '{specifier}';",
        clause.join(", ")
    )];
    lines.extend(defaults.map(|local| format!("import {keyword}{local} from '{specifier}';")));
    lines.join("\n")
}

fn export_statement(group: &ExportModule, specifier: &str) -> String {
    let members: Vec<String> = group
        .exports
        .iter()
        .map(|m| {
            let prefix = type_prefix(m.type_only && !group.type_only);
            if m.exported_name == m.source_name {
                format!("{prefix}{}", m.exported_name)
            } else {
                format!("{prefix}{} as {}", m.source_name, m.exported_name)
            }
        })
        .collect();
    format!(
        "export {}{{ {} }} from '{specifier}';",
        type_prefix(group.type_only),
        members.join(", ")
    )
}
