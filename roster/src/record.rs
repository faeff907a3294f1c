//! Student record types and the listing tuple handed to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::metrics;

/// The four graded subjects, in storage column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Korean,
    English,
    Math,
    Science,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Korean,
        Subject::English,
        Subject::Math,
        Subject::Science,
    ];
}

/// Raw or normalized scores for the four subjects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub korean: i64,
    pub english: i64,
    pub math: i64,
    pub science: i64,
}

impl Scores {
    pub fn new(korean: i64, english: i64, math: i64, science: i64) -> Self {
        Self {
            korean,
            english,
            math,
            science,
        }
    }

    pub fn get(&self, subject: Subject) -> i64 {
        match subject {
            Subject::Korean => self.korean,
            Subject::English => self.english,
            Subject::Math => self.math,
            Subject::Science => self.science,
        }
    }

    /// Clamp every subject into the valid score range.
    pub fn normalized(self) -> Self {
        Self {
            korean: metrics::normalize(self.korean),
            english: metrics::normalize(self.english),
            math: metrics::normalize(self.math),
            science: metrics::normalize(self.science),
        }
    }

    /// Sum of the four subjects. Saturates, since raw storage values are
    /// unbounded.
    pub fn sum(&self) -> i64 {
        Subject::ALL
            .iter()
            .fold(0i64, |acc, subject| acc.saturating_add(self.get(*subject)))
    }
}

/// Letter grade derived from the average score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Threshold lookup; each tier's lower bound is inclusive.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Grade::A
        } else if average >= 80.0 {
            Grade::B
        } else if average >= 70.0 {
            Grade::C
        } else if average >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One student's identity, normalized scores and derived metrics.
///
/// `total`, `average` and `grade` are only written by the functions in
/// [`crate::metrics`], so they always agree with `scores`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    id: String,
    name: String,
    scores: Scores,
    pub(crate) total: i64,
    pub(crate) average: f64,
    pub(crate) grade: Grade,
}

impl StudentRecord {
    /// Accept a record from caller or storage input. Scores are clamped and
    /// the derived metrics computed before the record is returned.
    pub fn new(id: impl Into<String>, name: impl Into<String>, scores: Scores) -> Self {
        let mut record = Self {
            id: id.into(),
            name: name.into(),
            scores: scores.normalized(),
            total: 0,
            average: 0.0,
            grade: Grade::F,
        };
        metrics::recompute(&mut record);
        record
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    /// Overwrite the mutable fields from `other` in place, keeping this
    /// record's identity.
    pub(crate) fn overwrite_from(&mut self, other: &StudentRecord) {
        self.name.clone_from(&other.name);
        self.scores = other.scores.normalized();
        metrics::recompute(self);
    }

    pub fn to_listing(&self) -> ListingRow {
        ListingRow {
            id: self.id.clone(),
            name: self.name.clone(),
            scores: self.scores,
            total: self.total,
        }
    }
}

/// The `(id, name, 4 scores, total)` tuple emitted by searches and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListingRow {
    pub id: String,
    pub name: String,
    pub scores: Scores,
    pub total: i64,
}
