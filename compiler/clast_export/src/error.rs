//! Export errors.

use std::io;

use clast_ir::{DeclKind, Family, NodeRef};
use clast_writer::WriteError;

/// Failure of an export pass.
///
/// Configuration, root and output-open errors are reported before anything
/// is written. Every other variant aborts a pass midway; the partial output
/// is not usable.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Write(#[from] WriteError),

    #[error("cannot open export output: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("unknown {family} kind `{name}`")]
    UnknownKind { family: Family, name: String },

    #[error("{family} node has abstract kind `{name}`")]
    AbstractKind { family: Family, name: &'static str },

    #[error("`{kind}` node lacks the payload its kind requires ({expected})")]
    MissingPayload {
        kind: &'static str,
        expected: &'static str,
    },

    #[error("export root must be a translation unit, found `{0}`")]
    InvalidRoot(DeclKind),

    #[error("export root id is not in the context")]
    DanglingRoot,

    #[error("{0:?} is referenced but not in the context")]
    DanglingNode(NodeRef),

    #[error("export session is still in use by an unfinished export")]
    SessionInUse,
}

/// Invalid [`ExportOptions`](crate::ExportOptions).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("path prefix to strip is empty")]
    EmptyStripPrefix,

    #[error("path prefix to strip is not valid UTF-8: {0}")]
    NonUtf8Prefix(String),
}
