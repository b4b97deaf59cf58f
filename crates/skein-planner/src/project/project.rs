use std::path::PathBuf;

use super::config::ProjectConfig;
use crate::analyze::Analyzer;
use crate::files::FileRegistry;
use crate::ids::NodeId;
use crate::nodes::{Node, NodeIn, NodeRegistry};
use crate::plan::Planner;
use crate::render::{RenderContext, RenderMeta};
use crate::symbols::SymbolRegistry;
use crate::Result;

/// One rendered file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
    pub path: PathBuf,
    pub content: String,
}

/// Registries plus configuration for one compilation.
pub struct Project {
    pub(crate) config: ProjectConfig,
    pub(crate) symbols: SymbolRegistry,
    pub(crate) files: FileRegistry,
    pub(crate) nodes: NodeRegistry,
    planner: Option<Planner>,
}

impl Project {
    pub fn new(config: ProjectConfig) -> Self {
        Self {
            config,
            symbols: SymbolRegistry::new(),
            files: FileRegistry::new(),
            nodes: NodeRegistry::new(),
            planner: None,
        }
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }

    pub fn symbols(&self) -> &SymbolRegistry {
        &self.symbols
    }

    pub fn symbols_mut(&mut self) -> &mut SymbolRegistry {
        &mut self.symbols
    }

    pub fn files(&self) -> &FileRegistry {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut FileRegistry {
        &mut self.files
    }

    pub fn nodes(&self) -> &NodeRegistry {
        &self.nodes
    }

    /// Register a node and bind its symbol back to it.
    pub fn add_node(&mut self, node: Box<dyn Node>) -> Result<NodeId> {
        let symbol = node.symbol();
        let id = self.nodes.add(node);
        if let Some(symbol) = symbol {
            self.symbols.set_node(symbol, id)?;
        }
        Ok(id)
    }

    /// Like [`add_node`](Self::add_node), honoring an id or selector.
    pub fn register_node(&mut self, input: NodeIn) -> Result<NodeId> {
        let id = self.nodes.register(input)?;
        if let Some(symbol) = self.nodes.node(id).symbol() {
            self.symbols.set_node(symbol, id)?;
        }
        Ok(id)
    }

    pub fn is_planned(&self) -> bool {
        self.planner.is_some()
    }

    /// Analysis results, once planned.
    pub fn analyzer(&self) -> Option<&Analyzer> {
        self.planner.as_ref().map(Planner::analyzer)
    }

    /// Run the planner. Later calls do nothing.
    pub fn plan(&mut self, meta: Option<&RenderMeta>) -> Result<()> {
        if self.planner.is_some() {
            return Ok(());
        }
        let mut planner = Planner::new();
        planner.plan(self, meta)?;
        self.planner = Some(planner);
        Ok(())
    }

    /// Render every renderer-bound file, in file registration order.
    pub fn render(&mut self, meta: Option<&RenderMeta>) -> Result<Vec<Output>> {
        self.plan(meta)?;

        let mut outputs = Vec::new();
        for file in self.files.registered() {
            if file.is_external() {
                continue;
            }
            let (Some(index), Some(path)) = (file.renderer(), file.final_path()) else {
                continue;
            };
            let Some(renderer) = self.config.renderers.get(index) else {
                continue;
            };
            let ctx = RenderContext {
                file,
                project: self,
                meta,
            };
            let content = renderer.render(&ctx)?;
            outputs.push(Output {
                path: path.to_path_buf(),
                content,
            });
        }
        tracing::debug!(files = outputs.len(), "rendered project");
        Ok(outputs)
    }
}
