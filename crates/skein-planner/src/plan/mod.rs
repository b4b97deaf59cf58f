//! Five-pass planner turning analyzed nodes into planned files.
//!
//! # Module Organization
//!
//! Each pass is an `impl Planner` block in its own module, run in order:
//! - `allocate`: home files for node symbols, re-export targets and
//!   external dependencies
//! - `naming`: conflict-free final names, file scope first, then locals
//! - `paths`: final paths and renderer binding
//! - `exports`: synthesized re-export symbols grouped per source file
//! - `imports`: deduplicated import symbols grouped per source file

mod allocate;
mod exports;
mod imports;
mod naming;
mod paths;
mod planner;

#[cfg(test)]
mod exports_tests;
#[cfg(test)]
mod naming_tests;

pub use planner::Planner;
