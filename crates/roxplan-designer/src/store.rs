//! Plan persistence.
//!
//! A [`PlanStore`] keeps an ordered list of plan records, newest first.
//! Writes are last-write-wins on a whole record; there is no versioning.

use chrono::Utc;
use roxplan_core::StoreError;
use std::path::{Path, PathBuf};

use crate::serialization::{PlanRecord, PlanSummary};

pub type StoreResult<T> = Result<T, StoreError>;

/// Suffix appended to the name of a duplicated plan.
pub const COPY_SUFFIX: &str = " (copy)";

pub trait PlanStore {
    /// Summaries in store order (most recently created first).
    fn list(&self) -> StoreResult<Vec<PlanSummary>>;

    fn get(&self, id: &str) -> StoreResult<PlanRecord>;

    /// Creates and stores a blank plan.
    fn create(&mut self, name: &str) -> StoreResult<PlanRecord>;

    /// Inserts or replaces a plan. An existing plan keeps its `createdAt`;
    /// `updatedAt` is set to now. Unknown plans are placed first.
    fn put(&mut self, record: PlanRecord) -> StoreResult<PlanRecord>;

    /// Copies a plan under a new id with `" (copy)"` appended to the name.
    fn duplicate(&mut self, id: &str) -> StoreResult<PlanRecord>;

    fn delete(&mut self, id: &str) -> StoreResult<()>;
}

fn find(plans: &[PlanRecord], id: &str) -> StoreResult<PlanRecord> {
    plans
        .iter()
        .find(|p| p.id == id)
        .cloned()
        .ok_or_else(|| StoreError::NotFound(id.to_string()))
}

fn upsert(plans: &mut Vec<PlanRecord>, mut record: PlanRecord) -> PlanRecord {
    let now = Utc::now();
    record.updated_at = now;
    match plans.iter_mut().find(|p| p.id == record.id) {
        Some(existing) => {
            record.created_at = existing.created_at;
            *existing = record.clone();
        }
        None => {
            record.created_at = now;
            plans.insert(0, record.clone());
        }
    }
    record
}

fn duplicate_in(plans: &mut Vec<PlanRecord>, id: &str) -> StoreResult<PlanRecord> {
    let mut copy = find(plans, id)?;
    let now = Utc::now();
    copy.id = uuid::Uuid::new_v4().to_string();
    copy.name.push_str(COPY_SUFFIX);
    copy.created_at = now;
    copy.updated_at = now;
    plans.insert(0, copy.clone());
    Ok(copy)
}

fn remove(plans: &mut Vec<PlanRecord>, id: &str) -> StoreResult<()> {
    let before = plans.len();
    plans.retain(|p| p.id != id);
    if plans.len() == before {
        return Err(StoreError::NotFound(id.to_string()));
    }
    Ok(())
}

/// Plans held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryPlanStore {
    plans: Vec<PlanRecord>,
}

impl MemoryPlanStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl PlanStore for MemoryPlanStore {
    fn list(&self) -> StoreResult<Vec<PlanSummary>> {
        Ok(self.plans.iter().map(PlanRecord::summary).collect())
    }

    fn get(&self, id: &str) -> StoreResult<PlanRecord> {
        find(&self.plans, id)
    }

    fn create(&mut self, name: &str) -> StoreResult<PlanRecord> {
        let record = PlanRecord::new_blank(name);
        self.plans.insert(0, record.clone());
        Ok(record)
    }

    fn put(&mut self, record: PlanRecord) -> StoreResult<PlanRecord> {
        Ok(upsert(&mut self.plans, record))
    }

    fn duplicate(&mut self, id: &str) -> StoreResult<PlanRecord> {
        duplicate_in(&mut self.plans, id)
    }

    fn delete(&mut self, id: &str) -> StoreResult<()> {
        remove(&mut self.plans, id)
    }
}

/// Plans held in a single JSON array file.
///
/// The file is read on every operation and rewritten on every change. A
/// missing file is an empty store.
#[derive(Debug, Clone)]
pub struct JsonFilePlanStore {
    path: PathBuf,
}

impl JsonFilePlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> StoreResult<Vec<PlanRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let plans: Vec<PlanRecord> = serde_json::from_str(&content)?;

        let duplicate = {
            let mut seen = std::collections::HashSet::new();
            plans
                .iter()
                .find(|p| !seen.insert(p.id.as_str()))
                .map(|p| p.id.clone())
        };
        if let Some(id) = duplicate {
            return Err(StoreError::Corrupted(format!("duplicate plan id {id}")));
        }
        Ok(plans)
    }

    fn write_all(&self, plans: &[PlanRecord]) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(plans)?;
        std::fs::write(&self.path, json)?;
        tracing::debug!("Wrote {} plan(s) to {}", plans.len(), self.path.display());
        Ok(())
    }
}

impl PlanStore for JsonFilePlanStore {
    fn list(&self) -> StoreResult<Vec<PlanSummary>> {
        Ok(self.read_all()?.iter().map(PlanRecord::summary).collect())
    }

    fn get(&self, id: &str) -> StoreResult<PlanRecord> {
        find(&self.read_all()?, id)
    }

    fn create(&mut self, name: &str) -> StoreResult<PlanRecord> {
        let mut plans = self.read_all()?;
        let record = PlanRecord::new_blank(name);
        plans.insert(0, record.clone());
        self.write_all(&plans)?;
        tracing::info!("Created plan '{}' ({})", record.name, record.id);
        Ok(record)
    }

    fn put(&mut self, record: PlanRecord) -> StoreResult<PlanRecord> {
        let mut plans = self.read_all()?;
        let stored = upsert(&mut plans, record);
        self.write_all(&plans)?;
        Ok(stored)
    }

    fn duplicate(&mut self, id: &str) -> StoreResult<PlanRecord> {
        let mut plans = self.read_all()?;
        let copy = duplicate_in(&mut plans, id)?;
        self.write_all(&plans)?;
        tracing::info!("Duplicated plan {} as {}", id, copy.id);
        Ok(copy)
    }

    fn delete(&mut self, id: &str) -> StoreResult<()> {
        let mut plans = self.read_all()?;
        remove(&mut plans, id)?;
        self.write_all(&plans)?;
        tracing::info!("Deleted plan {}", id);
        Ok(())
    }
}
