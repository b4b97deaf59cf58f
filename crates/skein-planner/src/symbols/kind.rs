use serde::{Deserialize, Serialize};

/// Declaration kind, used for declaration-merging compatibility.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Class,
    Enum,
    Function,
    Interface,
    Namespace,
    Type,
    #[default]
    Var,
}

impl SymbolKind {
    /// Kinds that exist only at compile time.
    pub fn is_type_only(self) -> bool {
        matches!(self, SymbolKind::Type | SymbolKind::Interface)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SymbolKind::Class => "class",
            SymbolKind::Enum => "enum",
            SymbolKind::Function => "function",
            SymbolKind::Interface => "interface",
            SymbolKind::Namespace => "namespace",
            SymbolKind::Type => "type",
            SymbolKind::Var => "var",
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a symbol is bound when imported from another module.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportKind {
    #[default]
    Named,
    Default,
    Namespace,
}

impl ImportKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ImportKind::Named => "named",
            ImportKind::Default => "default",
            ImportKind::Namespace => "namespace",
        }
    }
}

/// Whether declarations of kinds `a` and `b` may share one identifier.
///
/// The relation is symmetric. Interfaces merge with classes and interfaces,
/// namespaces with classes, enums, functions and namespaces, and type
/// aliases with functions and vars. Every other pair conflicts, including
/// two classes.
pub fn can_share_name(a: SymbolKind, b: SymbolKind) -> bool {
    merges_with(a, b) || merges_with(b, a)
}

fn merges_with(a: SymbolKind, b: SymbolKind) -> bool {
    use SymbolKind::*;
    match a {
        Interface => matches!(b, Class | Interface),
        Namespace => matches!(b, Class | Enum | Function | Namespace),
        Type => matches!(b, Function | Var),
        _ => false,
    }
}
