//! Async gateway trait for the `student` table.
//!
//! The cache only consumes row sets and affected-row counts. A count of zero
//! is the sole "nothing happened" signal; errors carry the reason.
//!
//! Methods return `impl Future + Send` rather than using `async fn` so that
//! the futures are guaranteed `Send` and callers can drive the cache from
//! `tokio::spawn`.

use super::{PersistenceError, StudentRow};
use crate::query::SortKey;
use std::future::Future;

/// Persistence boundary for student rows. Every call is self-contained:
/// implementations acquire and release their connection within the call.
pub trait StudentGateway: Send + Sync {
    /// Full table scan in storage row order.
    fn fetch_all(&self) -> impl Future<Output = Result<Vec<StudentRow>, PersistenceError>> + Send;

    /// Full table scan ordered by `key`.
    fn fetch_sorted(
        &self,
        key: SortKey,
    ) -> impl Future<Output = Result<Vec<StudentRow>, PersistenceError>> + Send;

    /// Insert a new row; returns the affected-row count. Primary key
    /// collisions surface as [`PersistenceError::UniqueViolation`].
    fn insert(
        &self,
        row: &StudentRow,
    ) -> impl Future<Output = Result<u64, PersistenceError>> + Send;

    /// Update name and scores of the row keyed by `row.sno`.
    fn update(
        &self,
        row: &StudentRow,
    ) -> impl Future<Output = Result<u64, PersistenceError>> + Send;

    fn delete(&self, sno: &str) -> impl Future<Output = Result<u64, PersistenceError>> + Send;
}
