//! Writer errors.
//!
//! Apart from I/O failures every variant is an internal-consistency error:
//! the caller declared one shape and emitted another.

use std::io;

use crate::scope::ScopeKind;

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("I/O error while writing document: {0}")]
    Io(#[from] io::Error),

    #[error("{scope} declared {arity} elements but another one was emitted")]
    Overflow { scope: ScopeKind, arity: usize },

    #[error("{scope} closed after {emitted} of {arity} declared elements")]
    Underflow {
        scope: ScopeKind,
        arity: usize,
        emitted: usize,
    },

    #[error("object field value emitted without a preceding tag")]
    MissingTag,

    #[error("field tag emitted inside {0}; tags belong to objects")]
    TagOutsideObject(ScopeKind),

    #[error("second field tag emitted before the first one received a value")]
    DoubleTag,

    #[error("end of scope requested with no open scope")]
    NoOpenScope,

    #[error("document finished with {0} scopes still open")]
    Unclosed(usize),

    #[error("document finished without a value")]
    EmptyDocument,

    #[error("document already finished")]
    Finished,
}
