mod traits;
pub mod sqlite;

#[cfg(test)]
pub mod mock;

pub use traits::StudentGateway;

use crate::record::{ListingRow, Scores, StudentRecord};

/// Errors from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(String),
    #[error("Primary key already exists: {0}")]
    UniqueViolation(String),
}

/// One row of the `student` table exactly as stored. Scores are not
/// normalized; rows written by other tools may hold out-of-range values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRow {
    pub sno: String,
    pub name: String,
    pub korean: i64,
    pub english: i64,
    pub math: i64,
    pub science: i64,
}

impl StudentRow {
    pub fn scores(&self) -> Scores {
        Scores::new(self.korean, self.english, self.math, self.science)
    }

    /// Storage-verbatim listing; the total is the sum of the stored values.
    pub fn into_listing(self) -> ListingRow {
        let scores = self.scores();
        ListingRow {
            id: self.sno,
            name: self.name,
            scores,
            total: scores.sum(),
        }
    }
}

impl From<&StudentRecord> for StudentRow {
    fn from(record: &StudentRecord) -> Self {
        let scores = record.scores();
        Self {
            sno: record.id().to_string(),
            name: record.name().to_string(),
            korean: scores.korean,
            english: scores.english,
            math: scores.math,
            science: scores.science,
        }
    }
}

impl From<StudentRow> for StudentRecord {
    fn from(row: StudentRow) -> Self {
        let scores = row.scores();
        StudentRecord::new(row.sno, row.name, scores)
    }
}
