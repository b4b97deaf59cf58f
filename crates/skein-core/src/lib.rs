#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Leaf data structures shared by the skein planner and CLI.
//!
//! - [`Ref`]: a shared, rebindable cell. Every holder observes a `replace`.
//! - [`BiMap`]: key→value map with a value→{keys} reverse index.
//! - [`utils`]: identifier case conversion.
//! - [`Colors`]: role-named ANSI styles for plan reports.

pub mod bimap;
pub mod cell;
pub mod colors;
pub mod utils;

#[cfg(test)]
mod bimap_tests;
#[cfg(test)]
mod cell_tests;
#[cfg(test)]
mod utils_tests;

pub use bimap::BiMap;
pub use cell::Ref;
pub use colors::Colors;
