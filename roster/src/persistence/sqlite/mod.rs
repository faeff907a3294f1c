//! SQLite-backed gateway implementation.
//!
//! ## Database setup
//!
//! [`Database`] wraps a `sqlx::SqlitePool` configured with:
//! - **WAL mode** — allows one writer and multiple concurrent readers.
//! - **Embedded bootstrap** — `sqlx::migrate!` runs `migrations/001_initial_schema.sql`
//!   when [`Database::open`] is called. The script only creates the `student`
//!   table if it is missing.
//!
//! ## Gateway
//!
//! [`SqliteStudentGateway`] holds a clone of the pool and implements
//! [`StudentGateway`](crate::persistence::StudentGateway). Each call checks a
//! connection out of the pool for the duration of that call only; the
//! connection goes back on drop, on success and error paths alike.

mod database;
mod student_gateway;

pub use database::Database;
pub use student_gateway::SqliteStudentGateway;
