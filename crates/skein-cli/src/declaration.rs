//! Manifest declarations as planner nodes.
//!
//! A declaration body is source text with `{{placeholder}}` slots. `{{self}}`
//! is the declaration's own final name; any other slot names a use, an
//! external or a local and is replaced by that symbol's final name in the
//! rendered file, which after planning may be an import alias.

use std::any::Any;
use std::collections::HashMap;

use skein_core::Ref;
use skein_planner::{
    AnalysisContext, Error, Language, Node, RenderContext, Result, SymbolId, SymbolKind, SymbolRef,
};

const SELF_PLACEHOLDER: &str = "self";

const TYPESCRIPT_RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
];

const PYTHON_RESERVED: &[&str] = &[
    "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class", "continue",
    "def", "del", "elif", "else", "except", "finally", "for", "from", "global", "if", "import",
    "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise", "return", "try", "while",
    "with", "yield",
];

/// A symbol a body can mention by placeholder.
#[derive(Clone, Debug)]
pub struct Binding {
    pub placeholder: String,
    pub symbol: SymbolRef,
}

impl Binding {
    pub fn new(placeholder: impl Into<String>, symbol: SymbolId) -> Self {
        Self {
            placeholder: placeholder.into(),
            symbol: Ref::new(symbol),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DeclarationNode {
    pub name: String,
    pub symbol: SymbolId,
    pub kind: SymbolKind,
    pub exported: bool,
    pub language: Language,
    /// Other declarations and externals, recorded in the root scope.
    pub uses: Vec<Binding>,
    /// Body-local symbols, recorded in one nested scope.
    pub locals: Vec<Binding>,
    pub body: Option<String>,
}

impl Node for DeclarationNode {
    fn analyze(&self, ctx: &mut AnalysisContext<'_>) {
        for binding in &self.uses {
            ctx.add_dependency(binding.symbol.clone());
        }
        if self.locals.is_empty() {
            return;
        }
        ctx.push_scope();
        for binding in &self.locals {
            ctx.add_dependency(binding.symbol.clone());
        }
        ctx.pop_scope();
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn symbol(&self) -> Option<SymbolId> {
        Some(self.symbol)
    }

    fn exported(&self) -> bool {
        self.exported
    }

    fn language(&self) -> Option<Language> {
        Some(self.language)
    }

    fn sanitize_name(&self, name: &str) -> String {
        sanitize_identifier(name, self.language)
    }

    fn clone_node(&self) -> Box<dyn Node> {
        Box::new(self.clone())
    }

    fn render(&self, ctx: &RenderContext<'_>) -> Result<Option<String>> {
        let symbols = ctx.project.symbols();
        let name = symbols.final_name(self.symbol)?;

        let Some(body) = &self.body else {
            return Ok(Some(default_declaration(
                self.language,
                self.kind,
                name,
                self.exported,
            )));
        };

        let mut names = HashMap::new();
        names.insert(SELF_PLACEHOLDER, name.to_string());
        for binding in self.uses.iter().chain(&self.locals) {
            let final_name = symbols.final_name(binding.symbol.get())?;
            names.insert(binding.placeholder.as_str(), final_name.to_string());
        }

        substitute(body, &names)
            .map(Some)
            .map_err(|message| Error::Render {
                path: ctx.file.display(),
                message: format!("{}: {message}", self.name),
            })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Replace every `{{key}}` in `template` with its value in `names`.
pub(crate) fn substitute(
    template: &str,
    names: &HashMap<&str, String>,
) -> std::result::Result<String, String> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            return Err("unterminated `{{` placeholder".to_string());
        };
        let key = after[..end].trim();
        match names.get(key) {
            Some(value) => out.push_str(value),
            None => return Err(format!("unknown placeholder `{key}`")),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Map `name` onto a legal identifier in `language`.
///
/// Illegal characters become `_`, a leading digit gets a `_` prefix and a
/// reserved word gets a `_` suffix.
pub(crate) fn sanitize_identifier(name: &str, language: Language) -> String {
    let (allow_dollar, reserved) = match language {
        Language::TypeScript | Language::JavaScript => (true, TYPESCRIPT_RESERVED),
        Language::Python => (false, PYTHON_RESERVED),
    };

    let mut out: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || (allow_dollar && c == '$') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if out.is_empty() || out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert(0, '_');
    }
    if reserved.contains(&out.as_str()) {
        out.push('_');
    }
    out
}

/// Placeholder source for declarations without a body.
pub(crate) fn default_declaration(
    language: Language,
    kind: SymbolKind,
    name: &str,
    exported: bool,
) -> String {
    if language == Language::Python {
        return match kind {
            SymbolKind::Function => format!("def {name}():\n    pass"),
            SymbolKind::Type => format!("{name} = object"),
            SymbolKind::Var => format!("{name} = None"),
            _ => format!("class {name}:\n    pass"),
        };
    }

    let export = if exported { "export " } else { "" };
    match kind {
        SymbolKind::Class => format!("{export}class {name} {{}}"),
        SymbolKind::Enum if language == Language::JavaScript => {
            format!("{export}const {name} = Object.freeze({{}});")
        }
        SymbolKind::Enum => format!("{export}enum {name} {{}}"),
        SymbolKind::Function => format!("{export}function {name}() {{}}"),
        SymbolKind::Interface | SymbolKind::Type if language == Language::JavaScript => {
            format!("/** @typedef {{unknown}} {name} */")
        }
        SymbolKind::Interface => format!("{export}interface {name} {{}}"),
        SymbolKind::Namespace if language == Language::JavaScript => {
            format!("{export}const {name} = {{}};")
        }
        SymbolKind::Namespace => format!("{export}namespace {name} {{}}"),
        SymbolKind::Type => format!("{export}type {name} = unknown;"),
        SymbolKind::Var => format!("{export}const {name} = undefined;"),
    }
}
