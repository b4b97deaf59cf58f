use std::path::{Path, PathBuf};

use skein_core::BiMap;

use super::bindings::{ExportModule, ImportModule};
use crate::analyze::NameTable;
use crate::ids::{FileId, NodeId, SymbolId};
use crate::language::Language;
use crate::store::Selector;
use crate::{Error, Result};

/// Selector prefix marking files provided by an external module.
const EXTERNAL_SELECTOR: &str = "@";

/// An output unit.
#[derive(Debug)]
pub struct File {
    id: FileId,
    logical_path: String,
    name: Option<String>,
    extension: Option<String>,
    language: Option<Language>,
    external: bool,
    final_path: Option<PathBuf>,
    nodes: Vec<NodeId>,
    imports: Vec<ImportModule>,
    exports: Vec<ExportModule>,
    renderer: Option<usize>,
    /// Names declared at file scope, with the kinds using each.
    pub top_level_names: NameTable,
    /// Every name bound anywhere in the file, imports and locals included.
    pub all_names: NameTable,
    /// Symbol → rendered local name.
    pub resolved_names: BiMap<SymbolId, String>,
}

impl File {
    pub(super) fn new(id: FileId, input: FileIn) -> Self {
        Self {
            id,
            logical_path: input.logical_path,
            name: input.name,
            extension: input.extension,
            language: input.language,
            external: input.external,
            final_path: None,
            nodes: Vec::new(),
            imports: Vec::new(),
            exports: Vec::new(),
            renderer: None,
            top_level_names: NameTable::new(),
            all_names: NameTable::new(),
            resolved_names: BiMap::new(),
        }
    }

    pub(super) fn merge(&mut self, input: FileIn) {
        if input.name.is_some() {
            self.name = input.name;
        }
        if input.extension.is_some() {
            self.extension = input.extension;
        }
        if self.language.is_none() {
            self.language = input.language;
        }
        self.external = input.external;
    }

    pub fn id(&self) -> FileId {
        self.id
    }

    /// `/`-separated path relative to the project root, or the module name
    /// for external files.
    pub fn logical_path(&self) -> &str {
        &self.logical_path
    }

    /// Explicit name, else the last logical path segment.
    pub fn name(&self) -> &str {
        if let Some(name) = &self.name {
            return name;
        }
        self.logical_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.logical_path)
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn language(&self) -> Option<Language> {
        self.language
    }

    pub fn is_external(&self) -> bool {
        self.external
    }

    /// Absolute path, set once by the planner.
    pub fn final_path(&self) -> Option<&Path> {
        self.final_path.as_deref()
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn imports(&self) -> &[ImportModule] {
        &self.imports
    }

    pub fn exports(&self) -> &[ExportModule] {
        &self.exports
    }

    /// Index of the bound renderer in the project's renderer list.
    pub fn renderer(&self) -> Option<usize> {
        self.renderer
    }

    /// Logical directories, name and extension joined with `/`.
    pub fn relative_path(&self, extension: Option<&str>) -> String {
        let file_name = format!("{}{}", self.name(), extension.unwrap_or(""));
        let mut parts: Vec<&str> = self.logical_path.split('/').collect();
        parts.pop();
        parts.push(&file_name);
        parts.join("/")
    }

    pub fn display(&self) -> String {
        format!("[File {}#{}]", self.logical_path, self.id)
    }

    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub(crate) fn set_extension(&mut self, extension: impl Into<String>) {
        self.extension = Some(extension.into());
    }

    pub(crate) fn set_renderer(&mut self, index: usize) {
        self.renderer = Some(index);
    }

    pub(crate) fn set_final_path(&mut self, path: PathBuf) -> Result<()> {
        if let Some(existing) = &self.final_path {
            if *existing != path {
                return Err(Error::WriteOnce {
                    field: "final path",
                    subject: self.display(),
                });
            }
            return Ok(());
        }
        self.final_path = Some(path);
        Ok(())
    }

    pub(crate) fn add_node(&mut self, node: NodeId, language: Option<Language>) {
        if !self.nodes.contains(&node) {
            self.nodes.push(node);
        }
        if self.language.is_none() {
            self.language = language;
        }
    }

    pub(crate) fn add_import(&mut self, group: ImportModule) {
        self.imports.push(group);
    }

    pub(crate) fn add_export(&mut self, group: ExportModule) {
        self.exports.push(group);
    }
}

/// Registration input for a file.
#[derive(Clone, Debug, Default)]
pub struct FileIn {
    pub(super) id: Option<FileId>,
    pub(super) logical_path: String,
    pub(super) name: Option<String>,
    pub(super) extension: Option<String>,
    pub(super) language: Option<Language>,
    pub(super) external: bool,
}

impl FileIn {
    pub fn new(logical_path: impl Into<String>) -> Self {
        Self {
            logical_path: normalize(&logical_path.into()),
            ..Self::default()
        }
    }

    /// A file standing for an external module.
    pub fn external(module: impl Into<String>) -> Self {
        Self {
            logical_path: module.into(),
            external: true,
            ..Self::default()
        }
    }

    pub fn id(mut self, id: FileId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn language(mut self, language: Option<Language>) -> Self {
        self.language = language;
        self
    }

    pub(super) fn selector(&self) -> Selector {
        if self.external {
            return vec![EXTERNAL_SELECTOR.to_string(), self.logical_path.clone()];
        }
        internal_selector(&self.logical_path)
    }
}

pub(super) fn internal_selector(path: &str) -> Selector {
    normalize(path).split('/').map(str::to_string).collect()
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/").trim_matches('/').to_string()
}
