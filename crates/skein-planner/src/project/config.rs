//! Project configuration.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::language::Language;
use crate::render::Renderer;
use crate::symbols::Symbol;

/// Input to a name conflict resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameConflict<'a> {
    /// Starts at 1 for the first conflict on a name.
    pub attempt: u32,
    /// The intended name, before sanitizing.
    pub base_name: &'a str,
}

/// Produces the next candidate name, or `None` to give up.
pub type NameConflictResolver = Box<dyn Fn(NameConflict<'_>) -> Option<String>>;

/// Maps a file's logical name to its emitted name.
pub type FileNameFn = Box<dyn Fn(&str) -> String>;

/// Picks the logical home file of a symbol, overriding its own path hint.
pub type SymbolFileFn = Box<dyn Fn(&Symbol) -> Option<String>>;

/// `Pet` → `Pet2`, `Pet3`, …
pub fn numeric_suffix(conflict: NameConflict<'_>) -> Option<String> {
    Some(format!("{}{}", conflict.base_name, conflict.attempt + 1))
}

/// `pet` → `pet_2`, `pet_3`, …
pub fn underscore_suffix(conflict: NameConflict<'_>) -> Option<String> {
    Some(format!("{}_{}", conflict.base_name, conflict.attempt + 1))
}

/// Resolver attempts before a conflict is declared unresolvable.
const MAX_NAME_ATTEMPTS: u32 = 10_000;

/// Configuration for a [`Project`](super::Project).
pub struct ProjectConfig {
    pub(crate) root: PathBuf,
    pub(crate) default_file_name: String,
    pub(crate) file_name: Option<FileNameFn>,
    pub(crate) symbol_file: Option<SymbolFileFn>,
    pub(crate) extensions: IndexMap<Language, String>,
    pub(crate) resolvers: IndexMap<Language, NameConflictResolver>,
    pub(crate) default_resolver: NameConflictResolver,
    pub(crate) renderers: Vec<Box<dyn Renderer>>,
    pub(crate) max_name_attempts: u32,
}

impl ProjectConfig {
    /// Defaults: file `main`, numeric suffixes, underscore suffixes for
    /// Python, no renderers.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let mut resolvers: IndexMap<Language, NameConflictResolver> = IndexMap::new();
        resolvers.insert(Language::Python, Box::new(underscore_suffix));
        Self {
            root: root.into(),
            default_file_name: "main".to_string(),
            file_name: None,
            symbol_file: None,
            extensions: IndexMap::new(),
            resolvers,
            default_resolver: Box::new(numeric_suffix),
            renderers: Vec::new(),
            max_name_attempts: MAX_NAME_ATTEMPTS,
        }
    }

    /// Logical path for symbols with no path hint.
    pub fn default_file_name(mut self, name: impl Into<String>) -> Self {
        self.default_file_name = name.into();
        self
    }

    /// Transform applied to every non-external file name. An empty result
    /// keeps the original name.
    pub fn file_name(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.file_name = Some(Box::new(f));
        self
    }

    /// Home file override, consulted before the symbol's own path hint.
    /// `None` falls through to the hint, then to the default file name.
    pub fn symbol_file(mut self, f: impl Fn(&Symbol) -> Option<String> + 'static) -> Self {
        self.symbol_file = Some(Box::new(f));
        self
    }

    /// Override the extension used for files in `language`.
    pub fn extension(mut self, language: Language, extension: impl Into<String>) -> Self {
        self.extensions.insert(language, extension.into());
        self
    }

    pub fn name_conflict_resolver(
        mut self,
        language: Language,
        f: impl Fn(NameConflict<'_>) -> Option<String> + 'static,
    ) -> Self {
        self.resolvers.insert(language, Box::new(f));
        self
    }

    /// Resolver for languages without their own.
    pub fn default_name_conflict_resolver(
        mut self,
        f: impl Fn(NameConflict<'_>) -> Option<String> + 'static,
    ) -> Self {
        self.default_resolver = Box::new(f);
        self
    }

    /// Append a renderer. Files bind to the first one that supports them.
    pub fn renderer(mut self, renderer: impl Renderer + 'static) -> Self {
        self.renderers.push(Box::new(renderer));
        self
    }

    pub fn max_name_attempts(mut self, attempts: u32) -> Self {
        self.max_name_attempts = attempts;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn renderers(&self) -> &[Box<dyn Renderer>] {
        &self.renderers
    }

    pub(crate) fn extension_for(&self, language: Option<Language>) -> Option<String> {
        let language = language?;
        Some(
            self.extensions
                .get(&language)
                .cloned()
                .unwrap_or_else(|| language.default_extension().to_string()),
        )
    }

    pub(crate) fn resolver_for(&self, language: Option<Language>) -> &NameConflictResolver {
        language
            .and_then(|language| self.resolvers.get(&language))
            .unwrap_or(&self.default_resolver)
    }
}
