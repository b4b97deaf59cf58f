//! JSON manifest describing the declarations one run plans and renders.
//!
//! ```json
//! {
//!   "language": "typescript",
//!   "fileCase": "kebab",
//!   "declarations": [
//!     { "name": "Pet", "kind": "interface", "file": "models/Pet" },
//!     { "name": "PetStore", "kind": "class", "file": "store", "uses": ["Pet"],
//!       "body": "export class {{self}} { pets: {{Pet}}[] = []; }" }
//!   ]
//! }
//! ```
//!
//! Uses are looked up by declaration name through the symbol registry, so a
//! declaration may use one that appears later in the list.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::json;
use skein_core::utils::{to_camel_case, to_kebab_case, to_pascal_case, to_snake_case};
use skein_planner::{
    ImportKind, Language, Meta, Project, ProjectConfig, PythonRenderer, SymbolId, SymbolIn,
    SymbolKind, TypeScriptRenderer, meta_from,
};

use crate::declaration::{Binding, DeclarationNode};
use crate::error::{Error, Result};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Manifest {
    /// Output root, relative to the manifest's directory.
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Language of declarations that do not name one.
    #[serde(default)]
    pub language: Option<Language>,
    /// Home file for declarations that do not name one.
    #[serde(default)]
    pub default_file_name: Option<String>,
    #[serde(default)]
    pub file_case: FileCase,
    /// Per-language extension overrides, dot included.
    #[serde(default)]
    pub extensions: HashMap<Language, String>,
    #[serde(default)]
    pub max_name_attempts: Option<u32>,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

/// Case applied to the last segment of every planned file name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileCase {
    #[default]
    Keep,
    Camel,
    Pascal,
    Snake,
    Kebab,
}

impl FileCase {
    pub fn apply(self, name: &str) -> String {
        match self {
            FileCase::Keep => name.to_string(),
            FileCase::Camel => to_camel_case(name),
            FileCase::Pascal => to_pascal_case(name),
            FileCase::Snake => to_snake_case(name),
            FileCase::Kebab => to_kebab_case(name),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Declaration {
    pub name: String,
    #[serde(default)]
    pub kind: SymbolKind,
    /// Logical home file, `/`-separated and without extension.
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default = "default_exported")]
    pub exported: bool,
    /// Logical files that re-export this declaration.
    #[serde(default)]
    pub export_from: Vec<String>,
    #[serde(default)]
    pub import_kind: ImportKind,
    #[serde(default)]
    pub language: Option<Language>,
    /// Names of other declarations this one refers to.
    #[serde(default)]
    pub uses: Vec<String>,
    #[serde(default)]
    pub external: Vec<ExternalRef>,
    #[serde(default)]
    pub locals: Vec<LocalDecl>,
    #[serde(default)]
    pub body: Option<String>,
}

fn default_exported() -> bool {
    true
}

/// A binding imported from a third-party module.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ExternalRef {
    pub module: String,
    pub name: String,
    #[serde(default)]
    pub kind: SymbolKind,
    #[serde(default)]
    pub import_kind: ImportKind,
}

/// A name bound inside the declaration body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LocalDecl {
    pub name: String,
    #[serde(default)]
    pub kind: SymbolKind,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// The override if given, else `root` against `base`, else `base`.
    pub fn resolve_root(&self, base: &Path, root_override: Option<&Path>) -> PathBuf {
        match (root_override, &self.root) {
            (Some(root), _) => root.to_path_buf(),
            (None, Some(root)) => base.join(root),
            (None, None) => base.to_path_buf(),
        }
    }

    pub fn config(&self, root: PathBuf) -> ProjectConfig {
        let mut config = ProjectConfig::new(root)
            .renderer(TypeScriptRenderer::new())
            .renderer(PythonRenderer::new());
        if let Some(name) = &self.default_file_name {
            config = config.default_file_name(name.clone());
        }
        for (&language, extension) in &self.extensions {
            config = config.extension(language, extension.clone());
        }
        if let Some(attempts) = self.max_name_attempts {
            config = config.max_name_attempts(attempts);
        }
        if self.file_case != FileCase::Keep {
            let case = self.file_case;
            config = config.file_name(move |name| case.apply(name));
        }
        config
    }

    /// Register every declaration with a fresh project rooted at `root`.
    #[tracing::instrument(level = "debug", skip_all, fields(declarations = self.declarations.len()))]
    pub fn into_project(self, root: PathBuf) -> Result<Project> {
        let mut project = Project::new(self.config(root));
        let default_language = self.language.unwrap_or(Language::TypeScript);

        let mut declared = HashSet::new();
        // (user, used name, referenced id), checked once every declaration is registered.
        let mut uses_to_check: Vec<(String, String, SymbolId)> = Vec::new();

        for decl in self.declarations {
            if !declared.insert(decl.name.clone()) {
                return Err(Error::DuplicateDeclaration { name: decl.name });
            }

            let mut uses = Vec::new();
            for used in &decl.uses {
                let id = project.symbols_mut().reference(declaration_meta(used));
                uses_to_check.push((decl.name.clone(), used.clone(), id));
                uses.push(Binding::new(used, id));
            }
            for external in &decl.external {
                let id = external_symbol(&mut project, external)?;
                uses.push(Binding::new(&external.name, id));
            }

            let mut locals = Vec::new();
            for local in &decl.locals {
                let id = project
                    .symbols_mut()
                    .register(SymbolIn::new(&local.name).kind(local.kind))?;
                locals.push(Binding::new(&local.name, id));
            }

            let mut input = SymbolIn::new(&decl.name)
                .kind(decl.kind)
                .import_kind(decl.import_kind)
                .exported(decl.exported)
                .export_from(decl.export_from)
                .meta(declaration_meta(&decl.name));
            if let Some(file) = decl.file {
                input = input.file_path(file);
            }
            let symbol = project.symbols_mut().register(input)?;
            tracing::debug!(declaration = %decl.name, %symbol, "registered declaration");

            project.add_node(Box::new(DeclarationNode {
                name: decl.name,
                symbol,
                kind: decl.kind,
                exported: decl.exported,
                language: decl.language.unwrap_or(default_language),
                uses,
                locals,
                body: decl.body,
            }))?;
        }

        for (user, name, id) in uses_to_check {
            if project.symbols().is_unresolved_stub(id) {
                return Err(Error::UnknownDeclaration { name, user });
            }
        }
        Ok(project)
    }
}

fn declaration_meta(name: &str) -> Meta {
    meta_from(json!({ "declaration": name }))
}

/// One symbol per module, name and binding flavor, shared by every user.
fn external_symbol(project: &mut Project, external: &ExternalRef) -> Result<SymbolId> {
    let meta = meta_from(json!({
        "external": {
            "module": external.module,
            "name": external.name,
            "importKind": external.import_kind,
        }
    }));
    if let Some(&id) = project.symbols_mut().query(&meta).first() {
        return Ok(id);
    }

    let input = SymbolIn::new(&external.name)
        .kind(external.kind)
        .import_kind(external.import_kind)
        .external(&external.module)
        .meta(meta);
    Ok(project.symbols_mut().register(input)?)
}
