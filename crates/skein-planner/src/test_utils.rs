//! Mock nodes and project builders shared by the planner tests.

use std::any::Any;

use skein_core::Ref;

use crate::analyze::{AnalysisContext, SymbolRef};
use crate::ids::{NodeId, SymbolId};
use crate::language::Language;
use crate::nodes::Node;
use crate::project::{Project, ProjectConfig};
use crate::render::RenderContext;
use crate::symbols::{SymbolIn, SymbolKind};
use crate::{Result, TypeScriptRenderer};

/// Declaration node with scripted dependencies.
///
/// `render` prints `<kind> <final name>` followed by the final names of its
/// dependencies, so tests can observe rebinding.
#[derive(Clone)]
pub struct MockNode {
    pub name: String,
    pub symbol: Option<SymbolId>,
    pub exported: bool,
    pub language: Option<Language>,
    pub dependencies: Vec<SymbolRef>,
    /// Recorded inside one nested scope.
    pub locals: Vec<SymbolRef>,
    pub children: Vec<NodeId>,
    pub sanitize: Option<fn(&str) -> String>,
}

impl MockNode {
    pub fn new(name: &str, symbol: Option<SymbolId>) -> Self {
        Self {
            name: name.to_string(),
            symbol,
            exported: true,
            language: Some(Language::TypeScript),
            dependencies: Vec::new(),
            locals: Vec::new(),
            children: Vec::new(),
            sanitize: None,
        }
    }

    pub fn depends_on(mut self, symbol: SymbolId) -> Self {
        self.dependencies.push(Ref::new(symbol));
        self
    }

    pub fn with_local(mut self, symbol: SymbolId) -> Self {
        self.locals.push(Ref::new(symbol));
        self
    }

    pub fn language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }
}

impl Node for MockNode {
    fn analyze(&self, ctx: &mut AnalysisContext<'_>) {
        for dependency in &self.dependencies {
            ctx.add_dependency(dependency.clone());
        }
        if !self.locals.is_empty() {
            ctx.push_scope();
            for local in &self.locals {
                ctx.add_dependency(local.clone());
            }
            ctx.pop_scope();
        }
        for &child in &self.children {
            ctx.add_child(child, crate::analyze::Relationship::Container);
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> Option<SymbolId> {
        self.symbol
    }

    fn exported(&self) -> bool {
        self.exported
    }

    fn language(&self) -> Option<Language> {
        self.language
    }

    fn sanitize_name(&self, name: &str) -> String {
        match self.sanitize {
            Some(f) => f(name),
            None => name.to_string(),
        }
    }

    fn clone_node(&self) -> Box<dyn Node> {
        Box::new(self.clone())
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Option<String>> {
        let symbols = ctx.project.symbols();
        let Some(symbol) = self.symbol else {
            return Ok(None);
        };
        let mut line = format!(
            "{} {}",
            symbols.symbol(symbol).kind(),
            symbols.final_name(symbol)?
        );
        for dependency in &self.dependencies {
            line.push_str(&format!(" {}", symbols.final_name(dependency.get())?));
        }
        Ok(Some(line))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Project rooted at `/root` rendering TypeScript.
pub fn project() -> Project {
    Project::new(ProjectConfig::new("/root").renderer(TypeScriptRenderer::new()))
}

/// Register an exported symbol homed in `file_path` and a node declaring it.
pub fn declare(project: &mut Project, name: &str, file_path: &str, kind: SymbolKind) -> SymbolId {
    declare_with(project, name, file_path, kind, |node| node)
}

/// Like [`declare`], letting the caller adjust the node first.
pub fn declare_with(
    project: &mut Project,
    name: &str,
    file_path: &str,
    kind: SymbolKind,
    f: impl FnOnce(MockNode) -> MockNode,
) -> SymbolId {
    let symbol = project
        .symbols_mut()
        .register(
            SymbolIn::new(name)
                .exported(true)
                .kind(kind)
                .file_path(file_path),
        )
        .unwrap();
    let node = f(MockNode::new(name, Some(symbol)));
    project.add_node(Box::new(node)).unwrap();
    symbol
}

/// A plain, file-less symbol for use as a local.
pub fn local(project: &mut Project, name: &str) -> SymbolId {
    project
        .symbols_mut()
        .register(SymbolIn::new(name))
        .unwrap()
}

/// The registered file whose name is `name`.
pub fn file_named<'a>(project: &'a Project, name: &str) -> &'a crate::files::File {
    project
        .files()
        .registered()
        .find(|file| file.name() == name)
        .unwrap_or_else(|| panic!("no file named {name}"))
}
