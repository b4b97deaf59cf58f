//! Dependency and scope discovery over the node graph.

mod analyzer;
mod context;
mod scope;

#[cfg(test)]
mod analyzer_tests;

pub use analyzer::{Analysis, Analyzer};
pub use context::{AnalysisContext, Relationship};
pub use scope::{NameTable, Scope, ScopeTree, SymbolRef, declare};
