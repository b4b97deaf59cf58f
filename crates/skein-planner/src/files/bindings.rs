//! Import and export records produced by the planner.

use crate::ids::FileId;
use crate::symbols::ImportKind;

/// One imported binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportMember {
    /// Name bound in the importing file.
    pub local_name: String,
    /// Name exported by the source file.
    pub source_name: String,
    pub kind: ImportKind,
    pub type_only: bool,
}

/// All bindings one file imports from one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportModule {
    pub from: FileId,
    pub imports: Vec<ImportMember>,
    /// Set for `import * as name`; excludes named members planned before it.
    pub namespace_import: Option<String>,
    /// Every member is type-only.
    pub type_only: bool,
}

impl ImportModule {
    pub(crate) fn new(from: FileId) -> Self {
        Self {
            from,
            imports: Vec::new(),
            namespace_import: None,
            type_only: true,
        }
    }

    /// Add a member, collapsing it into an existing one with the same
    /// local name, source name and flavor. The collapsed member stays
    /// type-only only if both were.
    pub(crate) fn push(&mut self, member: ImportMember) {
        if let Some(existing) = self.imports.iter_mut().find(|m| {
            m.local_name == member.local_name
                && m.source_name == member.source_name
                && m.kind == member.kind
        }) {
            existing.type_only &= member.type_only;
            return;
        }
        self.imports.push(member);
    }
}

/// One re-exported binding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportMember {
    /// Name visible to importers of the re-exporting file.
    pub exported_name: String,
    /// Name in the source file.
    pub source_name: String,
    pub kind: ImportKind,
    pub type_only: bool,
}

/// All bindings one file re-exports from one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportModule {
    pub from: FileId,
    pub exports: Vec<ExportMember>,
    /// No member is renamed, so `export *` would be equivalent.
    pub can_export_all: bool,
    pub type_only: bool,
}

impl ExportModule {
    pub(crate) fn new(from: FileId) -> Self {
        Self {
            from,
            exports: Vec::new(),
            can_export_all: true,
            type_only: true,
        }
    }
}
