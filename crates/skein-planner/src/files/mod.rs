//! Output files and the import/export records attached to them.

mod bindings;
mod file;
mod registry;


pub use bindings::{ExportMember, ExportModule, ImportMember, ImportModule};
pub use file::{File, FileIn};
pub use registry::FileRegistry;
