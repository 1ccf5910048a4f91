#![deny(unsafe_code)]

//! In-memory job store.
//!
//! Each normalization pass produces one job: the canonical records, the
//! summary, and the reference date they were aggregated against. Jobs are
//! immutable after creation; recomputation means storing a new job, not
//! patching an old one. Eviction is an explicit [`JobStore::sweep`] call
//! owned by the process, never a background timer.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;
use uuid::Uuid;

use asset_model::{AssetError, Record, Result, Summary};

/// One stored normalization result.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub reference_date: NaiveDate,
    pub records: Vec<Record>,
    pub summary: Summary,
}

/// Keyed job storage with explicit time-based sweep.
#[derive(Debug, Default)]
pub struct JobStore {
    jobs: HashMap<String, Job>,
}

impl JobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a normalization result under a fresh job id and returns the id.
    pub fn put(
        &mut self,
        records: Vec<Record>,
        summary: Summary,
        reference_date: NaiveDate,
    ) -> String {
        let id = Uuid::new_v4().to_string();
        let job = Job {
            id: id.clone(),
            created_at: Utc::now(),
            reference_date,
            records,
            summary,
        };
        info!(job_id = %id, records = job.records.len(), "stored job");
        self.jobs.insert(id.clone(), job);
        id
    }

    pub fn get(&self, id: &str) -> Option<&Job> {
        self.jobs.get(id)
    }

    /// Like [`Self::get`], but surfaces the miss as [`AssetError::JobNotFound`]
    /// for callers that report it upward.
    pub fn fetch(&self, id: &str) -> Result<&Job> {
        self.jobs
            .get(id)
            .ok_or_else(|| AssetError::JobNotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Removes jobs created before the cutoff; returns how many were evicted.
    pub fn sweep(&mut self, older_than: DateTime<Utc>) -> usize {
        let before = self.jobs.len();
        self.jobs.retain(|_, job| job.created_at >= older_than);
        let evicted = before - self.jobs.len();
        if evicted > 0 {
            info!(evicted, "swept expired jobs");
        }
        evicted
    }
}
