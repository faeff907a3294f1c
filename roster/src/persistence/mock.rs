//! In-memory gateway for testing - only compiled in test mode

use std::sync::{Mutex, MutexGuard, PoisonError};

use super::traits::StudentGateway;
use super::{PersistenceError, StudentRow};
use crate::query::SortKey;

/// A gateway call as recorded by [`MockGateway`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    FetchAll,
    FetchSorted { key: SortKey },
    Insert { sno: String },
    Update { sno: String },
    Delete { sno: String },
}

#[derive(Default)]
struct MockState {
    rows: Vec<StudentRow>,
    offline: bool,
    drop_inserts: bool,
}

/// Vec-backed stand-in for the `student` table with a call log.
///
/// Enforces the primary key like real storage and can be switched offline
/// to simulate connectivity failures.
#[derive(Default)]
pub struct MockGateway {
    state: Mutex<MockState>,
    call_log: Mutex<Vec<MockCall>>,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate storage, bypassing the call log.
    pub fn with_rows(self, rows: Vec<StudentRow>) -> Self {
        self.state().rows = rows;
        self
    }

    /// Make inserts report zero affected rows without storing anything.
    pub fn with_dropped_inserts(self) -> Self {
        self.state().drop_inserts = true;
        self
    }

    /// Fail every subsequent call with an IO error.
    pub fn set_offline(&self, offline: bool) {
        self.state().offline = offline;
    }

    /// Snapshot of the stored rows.
    pub fn rows(&self) -> Vec<StudentRow> {
        self.state().rows.clone()
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.log().clone()
    }

    /// Number of full-scan queries issued so far.
    pub fn fetch_all_count(&self) -> usize {
        self.log()
            .iter()
            .filter(|call| matches!(call, MockCall::FetchAll))
            .count()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn log(&self) -> MutexGuard<'_, Vec<MockCall>> {
        self.call_log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record the call, then hand out the state unless the gateway is offline.
    fn begin(&self, call: MockCall) -> Result<MutexGuard<'_, MockState>, PersistenceError> {
        self.log().push(call);
        let state = self.state();
        if state.offline {
            return Err(PersistenceError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "mock gateway is offline",
            )));
        }
        Ok(state)
    }
}

impl StudentGateway for MockGateway {
    async fn fetch_all(&self) -> Result<Vec<StudentRow>, PersistenceError> {
        let state = self.begin(MockCall::FetchAll)?;
        Ok(state.rows.clone())
    }

    async fn fetch_sorted(&self, key: SortKey) -> Result<Vec<StudentRow>, PersistenceError> {
        let state = self.begin(MockCall::FetchSorted { key })?;
        let mut rows = state.rows.clone();
        match key {
            SortKey::Name => rows.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Id => rows.sort_by(|a, b| a.sno.cmp(&b.sno)),
            SortKey::TotalDesc => rows.sort_by_key(|r| std::cmp::Reverse(r.scores().sum())),
        }
        Ok(rows)
    }

    async fn insert(&self, row: &StudentRow) -> Result<u64, PersistenceError> {
        let mut state = self.begin(MockCall::Insert {
            sno: row.sno.clone(),
        })?;
        if state.rows.iter().any(|r| r.sno == row.sno) {
            return Err(PersistenceError::UniqueViolation(row.sno.clone()));
        }
        if state.drop_inserts {
            return Ok(0);
        }
        state.rows.push(row.clone());
        Ok(1)
    }

    async fn update(&self, row: &StudentRow) -> Result<u64, PersistenceError> {
        let mut state = self.begin(MockCall::Update {
            sno: row.sno.clone(),
        })?;
        match state.rows.iter_mut().find(|r| r.sno == row.sno) {
            Some(stored) => {
                *stored = row.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, sno: &str) -> Result<u64, PersistenceError> {
        let mut state = self.begin(MockCall::Delete {
            sno: sno.to_string(),
        })?;
        let before = state.rows.len();
        state.rows.retain(|r| r.sno != sno);
        Ok((before - state.rows.len()) as u64)
    }
}
