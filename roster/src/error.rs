//! Error types for roster operations

use thiserror::Error;

use crate::persistence::PersistenceError;

pub type RosterResult<T> = Result<T, RosterError>;

/// Outcome of a failed cache operation. In every case the cache is left
/// exactly as it was before the call.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Update or delete matched no stored row.
    #[error("No student with ID {id}")]
    NotFound { id: String },

    /// Storage rejected an insert on the primary key.
    #[error("A student with ID {id} already exists")]
    DuplicateId { id: String },

    /// Storage accepted an insert but reported no affected rows.
    #[error("Student {id} was not persisted")]
    NotPersisted { id: String },

    #[error("Storage error: {0}")]
    Persistence(#[from] PersistenceError),
}
