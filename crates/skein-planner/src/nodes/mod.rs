//! The node contract and the node registry.

mod node;
mod registry;

#[cfg(test)]
mod registry_tests;

pub use node::Node;
pub use registry::{NodeIn, NodeRegistry};
