use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{Duration, Local, NaiveDate, Utc};
use serde_json::Value;

use crate::jobs::domain::{JobDraft, JobId, JobRecord, JobStatus};
use crate::jobs::query::{JobFilter, JobOrdering};
use crate::jobs::repository::{check_constraints, JobRepository, RepositoryError};
use crate::jobs::service::JobDirectoryService;

#[derive(Default)]
struct MemoryInner {
    next_id: u64,
    records: BTreeMap<JobId, JobRecord>,
}

/// Mutex-guarded map standing in for the relational store.
#[derive(Default)]
pub(super) struct MemoryJobRepository {
    inner: Mutex<MemoryInner>,
}

impl JobRepository for MemoryJobRepository {
    fn insert(&self, draft: JobDraft, status: JobStatus) -> Result<JobRecord, RepositoryError> {
        check_constraints(&draft)?;
        let mut inner = self.inner.lock().expect("repository mutex poisoned");
        inner.next_id += 1;
        let now = Utc::now();
        let record = JobRecord {
            id: JobId(inner.next_id),
            title: draft.title,
            company: draft.company,
            location: draft.location,
            description: draft.description,
            salary_range: draft.salary_range,
            required_skills: draft.required_skills,
            posting_date: draft.posting_date,
            expiration_date: draft.expiration_date,
            status,
            created_at: now,
            updated_at: now,
        };
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
        let existing = inner.records.get(&id).ok_or(RepositoryError::NotFound)?;
        let record = JobRecord {
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
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };
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

pub(super) struct UnavailableRepository;

impl JobRepository for UnavailableRepository {
    fn insert(&self, _draft: JobDraft, _status: JobStatus) -> Result<JobRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(
        &self,
        _id: JobId,
        _draft: JobDraft,
        _status: JobStatus,
    ) -> Result<JobRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: JobId) -> Result<Option<JobRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn delete(&self, _id: JobId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn search(
        &self,
        _filter: &JobFilter,
        _ordering: JobOrdering,
    ) -> Result<Vec<JobRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub(super) fn draft(
    title: &str,
    company: &str,
    location: &str,
    description: &str,
    posting_offset_days: i64,
    expiration_offset_days: i64,
) -> JobDraft {
    JobDraft {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        salary_range: None,
        required_skills: Vec::new(),
        posting_date: today() + Duration::days(posting_offset_days),
        expiration_date: today() + Duration::days(expiration_offset_days),
    }
}

/// The three canonical fixture postings: one scheduled (posted tomorrow),
/// one active (posted today), one already expired.
pub(super) fn fixture_drafts() -> Vec<JobDraft> {
    vec![
        JobDraft {
            salary_range: Some("80,000 - 120,000 TWD".to_string()),
            required_skills: vec![
                "Python".to_string(),
                "Django".to_string(),
                "PostgreSQL".to_string(),
            ],
            ..draft(
                "Senior Python Developer",
                "Tech Corp",
                "Taipei, Taiwan",
                "We are looking for a senior Python developer...",
                1,
                31,
            )
        },
        JobDraft {
            salary_range: Some("60,000 - 90,000 TWD".to_string()),
            required_skills: vec![
                "React".to_string(),
                "TypeScript".to_string(),
                "CSS".to_string(),
            ],
            ..draft(
                "Frontend Developer",
                "Web Solutions",
                "Kaohsiung, Taiwan",
                "Looking for a frontend developer...",
                0,
                29,
            )
        },
        JobDraft {
            salary_range: Some("90,000 - 130,000 TWD".to_string()),
            required_skills: vec![
                "Docker".to_string(),
                "Kubernetes".to_string(),
                "AWS".to_string(),
            ],
            ..draft(
                "DevOps Engineer",
                "Cloud Tech",
                "Taipei, Taiwan",
                "DevOps engineer needed...",
                -2,
                -1,
            )
        },
    ]
}

pub(super) fn build_service() -> Arc<JobDirectoryService<MemoryJobRepository>> {
    Arc::new(JobDirectoryService::new(Arc::new(
        MemoryJobRepository::default(),
    )))
}

pub(super) fn seeded_service() -> Arc<JobDirectoryService<MemoryJobRepository>> {
    let service = build_service();
    for draft in fixture_drafts() {
        service.create(draft).expect("fixture posting stored");
    }
    service
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
