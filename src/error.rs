//! Errors raised while forcing a sequence.
//!
//! Building a sequence never fails. Every error here originates from a
//! generator pull, so it reaches whoever called the forcing operation
//! (`to_vec`, `reduce`, `fold`, `apply`).

use thiserror::Error;

/// Failures a traversal can run into.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeqError {
    /// `reduce` without an initial value over a sequence that produced nothing.
    #[error("cannot reduce an empty sequence without an initial value")]
    EmptySequence,

    /// A forcing operation gave up after `limit` values without seeing the end.
    #[error("sequence did not terminate within {limit} values")]
    InfiniteSequence { limit: usize },

    /// A combinator was built with an argument it cannot work with.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl SeqError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SeqError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SeqError>;
