//! Searching and ordering student records.
//!
//! `find_by_id`, `sort` and `listing` work on the cached view. The
//! storage-sorted listing is the one query that goes to the gateway on
//! every call and never reads or fills the cache.

use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::cache::RecordCache;
use crate::error::RosterResult;
use crate::persistence::StudentGateway;
use crate::record::{ListingRow, StudentRecord};

/// Ordering for cache sorts and storage listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Name ascending, lexicographic.
    Name,
    /// ID ascending, lexicographic.
    Id,
    /// Total score descending.
    TotalDesc,
}

impl SortKey {
    /// Map the roster menu codes: 1 = name, 2 = id, 3 = total.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(SortKey::Name),
            2 => Some(SortKey::Id),
            3 => Some(SortKey::TotalDesc),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Id => "id",
            SortKey::TotalDesc => "total",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort key '{0}' (expected name, id or total)")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "id" | "sno" => Ok(SortKey::Id),
            "total" => Ok(SortKey::TotalDesc),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// Stable in-place sort of `records` by `key`.
pub fn sort_records(records: &mut [StudentRecord], key: SortKey) {
    match key {
        SortKey::Name => records.sort_by(|a, b| a.name().cmp(b.name())),
        SortKey::Id => records.sort_by(|a, b| a.id().cmp(b.id())),
        SortKey::TotalDesc => records.sort_by_key(|r| Reverse(r.total())),
    }
}

impl<G: StudentGateway> RecordCache<G> {
    /// Look a student up by ID, loading the cache first if needed.
    ///
    /// `Ok(None)` means no such student; errors only come from the initial
    /// load.
    pub async fn find_by_id(&mut self, id: &str) -> RosterResult<Option<&StudentRecord>> {
        self.ensure_loaded().await?;
        Ok(self.records().iter().find(|record| record.id() == id))
    }

    /// Reorder the cache permanently by `key`.
    pub fn sort(&mut self, key: SortKey) {
        debug!(%key, records = self.len(), "Sorting record cache");
        sort_records(self.records_mut(), key);
    }

    /// Sort by menu code; codes outside 1..=3 leave the cache untouched.
    pub fn sort_by_code(&mut self, code: u8) {
        match SortKey::from_code(code) {
            Some(key) => self.sort(key),
            None => debug!(code, "Ignoring unknown sort code"),
        }
    }

    /// The cache in its current order as listing rows.
    pub fn listing(&self) -> Vec<ListingRow> {
        self.records().iter().map(StudentRecord::to_listing).collect()
    }

    /// Query storage directly, ordered by `key`. Rows are returned as stored
    /// (not normalized) and the cache is neither read nor populated.
    pub async fn list_all_sorted(&self, key: SortKey) -> RosterResult<Vec<ListingRow>> {
        let rows = self.gateway().fetch_sorted(key).await?;
        debug!(%key, rows = rows.len(), "Listed students from storage");
        Ok(rows.into_iter().map(|row| row.into_listing()).collect())
    }
}
