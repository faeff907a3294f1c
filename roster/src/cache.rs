//! The record cache: an ordered in-memory mirror of the `student` table.
//!
//! The cache is loaded once, on first access, and from then on every
//! mutation is applied to storage first and mirrored into the cache only
//! when storage reports an affected row. There is no expiry and no reload.

use tracing::{debug, info, warn};

use crate::error::{RosterError, RosterResult};
use crate::persistence::{PersistenceError, StudentGateway, StudentRow};
use crate::record::StudentRecord;

/// Owned cache of student records over a [`StudentGateway`].
pub struct RecordCache<G> {
    gateway: G,
    records: Vec<StudentRecord>,
    loaded: bool,
}

impl<G: StudentGateway> RecordCache<G> {
    /// Create an empty, not-yet-loaded cache.
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            records: Vec::new(),
            loaded: false,
        }
    }

    /// Populate the cache from a full table scan on first access.
    ///
    /// Later calls are no-ops, even when deletions have emptied the cache:
    /// an emptied cache still mirrors storage.
    pub async fn ensure_loaded(&mut self) -> RosterResult<()> {
        if self.loaded {
            return Ok(());
        }

        let rows = self.gateway.fetch_all().await.inspect_err(|err| {
            warn!(%err, "Failed to load student records");
        })?;
        debug!(rows = rows.len(), "Loaded record cache");

        self.records.extend(rows.into_iter().map(StudentRecord::from));
        self.loaded = true;
        Ok(())
    }

    /// Persist a new record, then append it to the cache.
    ///
    /// The record's scores are already normalized by [`StudentRecord::new`],
    /// so the clamped values are what gets stored.
    pub async fn add(&mut self, record: StudentRecord) -> RosterResult<()> {
        self.ensure_loaded().await?;

        let id = record.id().to_string();
        let affected = match self.gateway.insert(&StudentRow::from(&record)).await {
            Ok(affected) => affected,
            Err(PersistenceError::UniqueViolation(_)) => {
                warn!(%id, "Insert rejected: duplicate student ID");
                return Err(RosterError::DuplicateId { id });
            }
            Err(err) => {
                warn!(%id, %err, "Insert failed");
                return Err(err.into());
            }
        };

        if affected == 0 {
            warn!(%id, "Insert affected no rows");
            return Err(RosterError::NotPersisted { id });
        }

        info!(%id, total = record.total(), grade = %record.grade(), "Added student");
        self.records.push(record);
        Ok(())
    }

    /// Persist new name and scores for an existing ID, then overwrite the
    /// first cached record with that ID in place.
    pub async fn apply_update(&mut self, record: &StudentRecord) -> RosterResult<()> {
        self.ensure_loaded().await?;

        let id = record.id();
        let affected = self
            .gateway
            .update(&StudentRow::from(record))
            .await
            .inspect_err(|err| warn!(%id, %err, "Update failed"))?;

        if affected == 0 {
            warn!(%id, "Update matched no stored student");
            return Err(RosterError::NotFound { id: id.to_string() });
        }

        match self.records.iter_mut().find(|cached| cached.id() == id) {
            Some(cached) => cached.overwrite_from(record),
            None => debug!(%id, "Updated student is not in the cache"),
        }
        info!(%id, total = record.total(), grade = %record.grade(), "Updated student");
        Ok(())
    }

    /// Delete a student from storage, then drop every cached record with
    /// that ID.
    pub async fn remove(&mut self, id: &str) -> RosterResult<()> {
        self.ensure_loaded().await?;

        let affected = self
            .gateway
            .delete(id)
            .await
            .inspect_err(|err| warn!(%id, %err, "Delete failed"))?;

        if affected == 0 {
            warn!(%id, "Delete matched no stored student");
            return Err(RosterError::NotFound { id: id.to_string() });
        }

        self.records.retain(|cached| cached.id() != id);
        info!(%id, affected, "Deleted student");
        Ok(())
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut Vec<StudentRecord> {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
