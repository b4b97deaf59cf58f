use std::path::PathBuf;

/// Errors raised by the registries and the planner.
///
/// None of these are recoverable mid-run: every variant aborts the current
/// planning pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An id was supplied that the registry never minted.
    #[error("{registry} registry has no entry with id {id}")]
    UnknownId { registry: &'static str, id: u32 },

    /// A selector mapped to an id that has no backing entry.
    #[error("{registry} registry selector `{selector}` points at missing id {id}")]
    ConsistencyViolation {
        registry: &'static str,
        selector: String,
        id: u32,
    },

    /// A write-once field was assigned a second, different value.
    #[error("{field} of {subject} is already set")]
    WriteOnce { field: &'static str, subject: String },

    /// A symbol redirected to a canonical symbol was written to.
    #[error("illegal mutation of stub symbol {stub} → canonical: {canonical}")]
    StubMutation { stub: String, canonical: String },

    /// The name conflict resolver gave up before finding a usable name.
    #[error("unresolvable name conflict: {symbol}")]
    UnresolvableNameConflict { symbol: String },

    /// A final name was read before the naming pass assigned it.
    #[error("final name of {symbol} read before it was resolved")]
    UnresolvedName { symbol: String },

    /// A planned file path could not be made absolute.
    #[error("cannot resolve path {}: {source}", path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A renderer failed to produce output for a file.
    #[error("render failed for {path}: {message}")]
    Render { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
