//! Declaration identities: kinds, metadata and the symbol registry.

mod kind;
mod meta;
mod registry;
mod symbol;

#[cfg(test)]
mod meta_tests;

pub use kind::{ImportKind, SymbolKind, can_share_name};
pub use meta::{Meta, meta_from};
pub use registry::SymbolRegistry;
pub use symbol::{Symbol, SymbolIn};
