use serde::{Deserialize, Serialize};

/// Target language of a node or file.
///
/// Drives the default file extension and which name conflict resolver
/// applies to declarations in that language.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    TypeScript,
    JavaScript,
    Python,
}

impl Language {
    pub fn default_extension(self) -> &'static str {
        match self {
            Language::TypeScript => ".ts",
            Language::JavaScript => ".js",
            Language::Python => ".py",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Python => "python",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
