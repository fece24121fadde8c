use std::sync::Arc;

use chrono::Local;

use super::domain::{JobDraft, JobId, JobRecord, JobStatus};
use super::query::{JobFilter, JobOrdering, JobQuery, ListingPage};
use super::repository::{JobRepository, RepositoryError};

/// Facade over the storage collaborator: derives status on every write,
/// enforces company immutability, and runs the listing query engine.
///
/// Stateless per call; concurrent use needs no locking here.
pub struct JobDirectoryService<R> {
    repository: Arc<R>,
}

impl<R> JobDirectoryService<R>
where
    R: JobRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a posting. The stored status comes from the resolver, never
    /// from the payload.
    pub fn create(&self, draft: JobDraft) -> Result<JobRecord, JobDirectoryError> {
        let today = Local::now().date_naive();
        let status = JobStatus::resolve(draft.posting_date, draft.expiration_date, today);
        let stored = self.repository.insert(draft, status)?;
        Ok(stored)
    }

    /// Run the listing query: delegate the filtered, ordered scan to the
    /// store, then assemble the page envelope around it.
    pub fn list(&self, query: &JobQuery) -> Result<ListingPage, JobDirectoryError> {
        let filter = JobFilter::from_query(query);
        let ordering = JobOrdering::from_key(&query.order_by);
        let matched = self.repository.search(&filter, ordering)?;
        Ok(ListingPage::assemble(matched, query.page, query.page_size))
    }

    pub fn get(&self, id: JobId) -> Result<JobRecord, JobDirectoryError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(JobDirectoryError::NotFound)?;
        Ok(record)
    }

    /// Replace a posting's mutable fields and re-derive its status. The
    /// stored company always wins over the payload's.
    pub fn update(&self, id: JobId, mut draft: JobDraft) -> Result<JobRecord, JobDirectoryError> {
        let existing = self
            .repository
            .fetch(id)?
            .ok_or(JobDirectoryError::NotFound)?;
        draft.company = existing.company;

        let today = Local::now().date_naive();
        let status = JobStatus::resolve(draft.posting_date, draft.expiration_date, today);
        let updated = self.repository.update(id, draft, status)?;
        Ok(updated)
    }

    pub fn delete(&self, id: JobId) -> Result<(), JobDirectoryError> {
        self.repository.delete(id)?;
        Ok(())
    }
}

/// Error surfaced by the directory service.
#[derive(Debug, thiserror::Error)]
pub enum JobDirectoryError {
    #[error("job not found")]
    NotFound,
    #[error("invalid job payload: {0}")]
    InvalidInput(String),
    #[error("job storage failure: {0}")]
    Internal(String),
}

impl From<RepositoryError> for JobDirectoryError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Constraint(cause) => Self::InvalidInput(cause),
            RepositoryError::Unavailable(cause) => Self::Internal(cause),
        }
    }
}
