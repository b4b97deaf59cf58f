//! Skein planner: file placement, naming and module wiring for generated code.
//!
//! Language front ends contribute declaration nodes; the planner decides
//! which file each declaration lands in, gives every declaration a
//! conflict-free name and computes the import and export records that wire
//! files together. Renderers then print the planned files.
//!
//! - `symbols` - declaration identities, stubs and attribute queries
//! - `files` - output files and their import/export records
//! - `nodes` - the node contract and node registry
//! - `analyze` - dependency and scope discovery
//! - `plan` - the five planning passes
//! - `project` - configuration plus the plan/render entry points
//! - `render` - renderer contract and bundled renderers

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
mod error;
pub mod files;
pub mod ids;
mod invariants;
mod language;
pub mod nodes;
pub mod plan;
pub mod project;
pub mod render;
mod store;
pub mod symbols;

#[cfg(test)]
pub mod test_utils;

pub use analyze::{AnalysisContext, Relationship, SymbolRef};
pub use error::{Error, Result};
pub use files::{File, FileIn, FileRegistry};
pub use ids::{FileId, NodeId, ScopeId, SymbolId};
pub use language::Language;
pub use nodes::{Node, NodeIn, NodeRegistry};
pub use plan::Planner;
pub use project::{NameConflict, Output, Project, ProjectConfig};
pub use render::{PythonRenderer, RenderContext, RenderMeta, Renderer, TypeScriptRenderer};
pub use store::{Selector, StoreId};
pub use symbols::{ImportKind, Meta, Symbol, SymbolIn, SymbolKind, SymbolRegistry, meta_from};
