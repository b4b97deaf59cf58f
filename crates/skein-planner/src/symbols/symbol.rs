use crate::ids::{FileId, NodeId, SymbolId};

use super::kind::{ImportKind, SymbolKind};
use super::meta::Meta;

/// A declaration identity.
///
/// Fields are only reachable through accessors; the owning
/// [`SymbolRegistry`](super::SymbolRegistry) hands out the canonical symbol
/// for any id, so a stub's accessors are never observed directly once it has
/// been redirected.
#[derive(Clone, Debug)]
pub struct Symbol {
    pub(super) id: SymbolId,
    pub(super) canonical: Option<SymbolId>,
    pub(super) name: String,
    pub(super) final_name: Option<String>,
    pub(super) kind: SymbolKind,
    pub(super) import_kind: ImportKind,
    pub(super) exported: bool,
    pub(super) external: Option<String>,
    pub(super) meta: Option<Meta>,
    pub(super) file: Option<FileId>,
    pub(super) node: Option<NodeId>,
    pub(super) export_from: Vec<String>,
    pub(super) file_path: Option<String>,
}

impl Symbol {
    pub(super) fn new(id: SymbolId, input: SymbolIn) -> Self {
        Self {
            id,
            canonical: None,
            name: input.name,
            final_name: None,
            kind: input.kind,
            import_kind: input.import_kind,
            exported: input.exported,
            external: input.external,
            meta: input.meta,
            file: None,
            node: None,
            export_from: input.export_from,
            file_path: input.file_path,
        }
    }

    pub(super) fn stub(id: SymbolId, meta: Meta) -> Self {
        Self::new(id, SymbolIn::new("").meta(meta))
    }

    /// Overwrite the mutable attributes from a later registration.
    pub(super) fn fill(&mut self, input: SymbolIn) {
        self.name = input.name;
        self.kind = input.kind;
        self.import_kind = input.import_kind;
        self.exported = input.exported;
        if input.external.is_some() {
            self.external = input.external;
        }
        if !input.export_from.is_empty() {
            self.export_from = input.export_from;
        }
        if input.file_path.is_some() {
            self.file_path = input.file_path;
        }
        if input.meta.is_some() {
            self.meta = input.meta;
        }
    }

    pub fn id(&self) -> SymbolId {
        self.id
    }

    /// Intended, pre-conflict-resolution name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Conflict-resolved name, once the naming pass has run.
    pub fn final_name(&self) -> Option<&str> {
        self.final_name.as_deref()
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn import_kind(&self) -> ImportKind {
        self.import_kind
    }

    pub fn exported(&self) -> bool {
        self.exported
    }

    /// Module this symbol is imported from, when not produced by the project.
    pub fn external(&self) -> Option<&str> {
        self.external.as_deref()
    }

    pub fn meta(&self) -> Option<&Meta> {
        self.meta.as_ref()
    }

    pub fn file(&self) -> Option<FileId> {
        self.file
    }

    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// Logical paths of files that re-export this symbol.
    pub fn export_from(&self) -> &[String] {
        &self.export_from
    }

    /// Logical home file path suggested by the producer.
    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    /// `name → final#id`, or the raw metadata when unnamed.
    pub fn display(&self) -> String {
        if self.name.is_empty() {
            let meta = self
                .meta
                .as_ref()
                .map(|m| serde_json::Value::Object(m.clone()).to_string())
                .unwrap_or_else(|| "{}".to_string());
            return format!("{meta}#{}", self.id);
        }
        match &self.final_name {
            Some(final_name) => format!("{} → {final_name}#{}", self.name, self.id),
            None => format!("{}#{}", self.name, self.id),
        }
    }
}

/// Registration input for a symbol.
#[derive(Clone, Debug, Default)]
pub struct SymbolIn {
    pub(super) id: Option<SymbolId>,
    pub(super) name: String,
    pub(super) kind: SymbolKind,
    pub(super) import_kind: ImportKind,
    pub(super) exported: bool,
    pub(super) external: Option<String>,
    pub(super) meta: Option<Meta>,
    pub(super) export_from: Vec<String>,
    pub(super) file_path: Option<String>,
}

impl SymbolIn {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Target an existing entry instead of creating a new one.
    pub fn id(mut self, id: SymbolId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn kind(mut self, kind: SymbolKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn import_kind(mut self, kind: ImportKind) -> Self {
        self.import_kind = kind;
        self
    }

    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    pub fn external(mut self, module: impl Into<String>) -> Self {
        self.external = Some(module.into());
        self
    }

    pub(crate) fn external_opt(mut self, module: Option<String>) -> Self {
        self.external = module;
        self
    }

    pub fn meta(mut self, meta: Meta) -> Self {
        self.meta = Some(meta);
        self
    }

    pub fn export_from<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.export_from = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn file_path(mut self, path: impl Into<String>) -> Self {
        self.file_path = Some(path.into());
        self
    }
}
