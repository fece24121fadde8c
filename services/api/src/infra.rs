use chrono::{NaiveDate, Utc};
use job_board::jobs::{
    check_constraints, parse_calendar_date, JobDraft, JobFilter, JobId, JobOrdering, JobRecord,
    JobRepository, JobStatus, RepositoryError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default)]
struct StoreInner {
    next_id: u64,
    records: BTreeMap<JobId, JobRecord>,
}

/// Process-local stand-in for the relational store. Ids are assigned in
/// insertion order; the map iterates in id order, which doubles as the
/// "stored" sort for unrecognized order keys.
#[derive(Default, Clone)]
pub(crate) struct InMemoryJobRepository {
    inner: Arc<Mutex<StoreInner>>,
}

impl InMemoryJobRepository {
    fn build_record(
        id: JobId,
        draft: JobDraft,
        status: JobStatus,
        created_at: chrono::DateTime<Utc>,
    ) -> JobRecord {
        JobRecord {
            id,
            title: draft.title,
            company: draft.company,
            location: draft.location,
            description: draft.description,
            salary_range: draft.salary_range,
            required_skills: draft.required_skills,
            posting_date: draft.posting_date,
            expiration_date: draft.expiration_date,
            status,
            created_at,
            updated_at: Utc::now(),
        }
    }
}

impl JobRepository for InMemoryJobRepository {
    fn insert(&self, draft: JobDraft, status: JobStatus) -> Result<JobRecord, RepositoryError> {
        check_constraints(&draft)?;
        let mut inner = self.inner.lock().expect("repository mutex poisoned");
        inner.next_id += 1;
        let record = Self::build_record(JobId(inner.next_id), draft, status, Utc::now());
        inner.records.insert(record.id, record.clone());
        Ok(record)
    }

    fn update(
        &self,
        id: JobId,
        draft: JobDraft,
        status: JobStatus,
    ) -> Result<JobRecord, RepositoryError> {
        check_constraints(&draft)?;
        let mut inner = self.inner.lock().expect("repository mutex poisoned");
        let created_at = inner
            .records
            .get(&id)
            .ok_or(RepositoryError::NotFound)?
            .created_at;
        let record = Self::build_record(id, draft, status, created_at);
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    fn fetch(&self, id: JobId) -> Result<Option<JobRecord>, RepositoryError> {
        let inner = self.inner.lock().expect("repository mutex poisoned");
        Ok(inner.records.get(&id).cloned())
    }

    fn delete(&self, id: JobId) -> Result<(), RepositoryError> {
        let mut inner = self.inner.lock().expect("repository mutex poisoned");
        inner
            .records
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }

    fn search(
        &self,
        filter: &JobFilter,
        ordering: JobOrdering,
    ) -> Result<Vec<JobRecord>, RepositoryError> {
        let inner = self.inner.lock().expect("repository mutex poisoned");
        let mut matched: Vec<JobRecord> = inner
            .records
            .values()
            .filter(|record| filter.matches(record))
            .cloned()
            .collect();
        ordering.sort(&mut matched);
        Ok(matched)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    parse_calendar_date(raw)
}
