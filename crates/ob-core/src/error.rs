//! Base error type.
//!
//! Sub-crates define their own error enums and either wrap `CoreError` as one
//! variant or keep them separate.  Prefer whichever keeps error sites clean.

use thiserror::Error;

use crate::{LocationId, PersonId};

/// The error type for `ob-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("person {0} not found")]
    PersonNotFound(PersonId),

    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `ob-core`.
pub type CoreResult<T> = Result<T, CoreError>;
