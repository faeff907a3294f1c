//! Student roster library
//!
//! Keeps an in-memory [`RecordCache`] of student records coherent with a
//! relational `student` table. The cache is populated lazily on first access
//! and tracked incrementally by every mutating operation afterwards; a
//! mutation is applied to the cache only once storage reports at least one
//! affected row.
//!
//! # Example
//!
//! ```no_run
//! use roster::persistence::sqlite::{Database, SqliteStudentGateway};
//! use roster::{RecordCache, Scores, SortKey, StudentRecord};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::open(std::path::Path::new("roster.db"), 5).await?;
//!     let mut cache = RecordCache::new(SqliteStudentGateway::new(db.pool().clone()));
//!
//!     cache
//!         .add(StudentRecord::new("S1", "Kim", Scores::new(95, 85, 105, -10)))
//!         .await?;
//!     if let Some(student) = cache.find_by_id("S1").await? {
//!         println!("{} -> {}", student.name(), student.grade());
//!     }
//!     cache.sort(SortKey::TotalDesc);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod metrics;
pub mod persistence;
pub mod query;
pub mod record;

pub use cache::RecordCache;
pub use error::{RosterError, RosterResult};
pub use metrics::normalize;
pub use persistence::{PersistenceError, StudentGateway, StudentRow};
pub use query::SortKey;
pub use record::{Grade, ListingRow, Scores, StudentRecord, Subject};
