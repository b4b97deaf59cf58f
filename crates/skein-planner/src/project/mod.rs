//! Project facade: configuration, registries, plan and render entry points.

mod config;
mod project;


pub use config::{
    FileNameFn, NameConflict, NameConflictResolver, ProjectConfig, SymbolFileFn, numeric_suffix,
    underscore_suffix,
};
pub use project::{Output, Project};
