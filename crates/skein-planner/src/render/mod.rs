//! Renderer contract and the bundled module renderers.
//!
//! The planner binds each file to the first renderer whose `supports`
//! accepts it; `render` runs only after planning, so every final name and
//! import record is available through the context.

mod python;
mod specifier;
mod typescript;


pub use python::PythonRenderer;
pub use specifier::{module_specifier, python_module, relative_specifier};
pub use typescript::TypeScriptRenderer;

use crate::Result;
use crate::files::File;
use crate::project::Project;

/// Caller-supplied metadata, passed through to renderers untouched.
pub type RenderMeta = serde_json::Map<String, serde_json::Value>;

pub struct RenderContext<'a> {
    pub file: &'a File,
    pub project: &'a Project,
    pub meta: Option<&'a RenderMeta>,
}

pub trait Renderer {
    /// Short label for reports and logs.
    fn name(&self) -> &str {
        "custom"
    }

    fn supports(&self, ctx: &RenderContext<'_>) -> bool;

    fn render(&self, ctx: &RenderContext<'_>) -> Result<String>;
}

/// Extension of the file's final path, without the dot.
pub(crate) fn final_extension<'a>(ctx: &RenderContext<'a>) -> Option<&'a str> {
    ctx.file
        .final_path()
        .and_then(|path| path.extension())
        .and_then(|ext| ext.to_str())
}

/// Render every node of the file, separated by blank lines.
pub(crate) fn render_bodies(ctx: &RenderContext<'_>) -> Result<Vec<String>> {
    let mut bodies = Vec::new();
    for &id in ctx.file.nodes() {
        if let Some(text) = ctx.project.nodes().node(id).render(ctx)? {
            bodies.push(text);
        }
    }
    Ok(bodies)
}
