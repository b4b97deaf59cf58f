//! Python module renderer.

use super::specifier::python_module;
use super::{RenderContext, Renderer, final_extension, render_bodies};
use crate::Result;
use crate::files::{ImportMember, ImportModule};

/// Prints `import`/`from … import` lines, node bodies, re-exports and an
/// `__all__` list naming the re-exported bindings.
#[derive(Clone, Copy, Debug, Default)]
pub struct PythonRenderer;

impl PythonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for PythonRenderer {
    fn name(&self) -> &str {
        "python"
    }

    fn supports(&self, ctx: &RenderContext<'_>) -> bool {
        final_extension(ctx) == Some("py")
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<String> {
        let files = ctx.project.files();
        let mut sections = Vec::new();

        let imports: Vec<String> = ctx
            .file
            .imports()
            .iter()
            .map(|group| {
                let source = files.file(group.from);
                import_statement(group, &python_module(ctx.file, source), source.is_external())
            })
            .collect();
        if !imports.is_empty() {
            sections.push(imports.join("\n"));
        }

        sections.extend(render_bodies(ctx)?);

        let mut exported = Vec::new();
        let mut reexports = Vec::new();
        for group in ctx.file.exports() {
            let module = python_module(ctx.file, files.file(group.from));
            let names: Vec<String> = group
                .exports
                .iter()
                .map(|m| {
                    exported.push(format!("\"{}\"", m.exported_name));
                    alias(&m.source_name, &m.exported_name)
                })
                .collect();
            reexports.push(format!("from {module} import {}", names.join(", ")));
        }
        if !reexports.is_empty() {
            sections.push(reexports.join("\n"));
            sections.push(format!("__all__ = [{}]", exported.join(", ")));
        }

        let mut out = sections.join("\n\n");
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}

fn alias(source: &str, local: &str) -> String {
    if source == local {
        source.to_string()
    } else {
        format!("{source} as {local}")
    }
}

fn import_statement(group: &ImportModule, module: &str, external: bool) -> String {
    if let Some(namespace) = &group.namespace_import {
        if external {
            return format!("import {module} as {namespace}");
        }
        // `import .x` is not valid; bind the leaf module from its package.
        let (package, leaf) = split_relative(module);
        return format!("from {package} import {}", alias(leaf, namespace));
    }
    let names: Vec<String> = group
        .imports
        .iter()
        .map(|m: &ImportMember| alias(&m.source_name, &m.local_name))
        .collect();
    format!("from {module} import {}", names.join(", "))
}

/// `..shared.models` into (`..shared`, `models`), `.models` into (`.`, `models`).
fn split_relative(module: &str) -> (&str, &str) {
    let dots = module.len() - module.trim_start_matches('.').len();
    match module[dots..].rfind('.') {
        Some(pos) => (&module[..dots + pos], &module[dots + pos + 1..]),
        None => (&module[..dots], &module[dots..]),
    }
}
