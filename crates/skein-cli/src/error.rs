use std::path::PathBuf;

/// Failures surfaced by the CLI, printed as `error: …` before exiting.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid manifest {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("declaration `{name}` is declared more than once")]
    DuplicateDeclaration { name: String },

    #[error("declaration `{user}` uses unknown declaration `{name}`")]
    UnknownDeclaration { name: String, user: String },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot serialize plan report: {0}")]
    Report(#[from] serde_json::Error),

    #[error(transparent)]
    Plan(#[from] skein_planner::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
