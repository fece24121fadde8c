use super::domain::{JobDraft, JobId, JobRecord, JobStatus};
use super::query::{JobFilter, JobOrdering};

/// Storage abstraction so the directory service can be exercised in
/// isolation. Implementations own id assignment, timestamps, and the
/// schema constraints below; each call is an independent unit of work.
pub trait JobRepository: Send + Sync {
    fn insert(&self, draft: JobDraft, status: JobStatus) -> Result<JobRecord, RepositoryError>;
    fn update(
        &self,
        id: JobId,
        draft: JobDraft,
        status: JobStatus,
    ) -> Result<JobRecord, RepositoryError>;
    fn fetch(&self, id: JobId) -> Result<Option<JobRecord>, RepositoryError>;
    fn delete(&self, id: JobId) -> Result<(), RepositoryError>;
    /// Return the snapshot of postings matching `filter`, already in
    /// `ordering` order. Pagination happens on the caller's side, which
    /// needs the full matched count first.
    fn search(
        &self,
        filter: &JobFilter,
        ordering: JobOrdering,
    ) -> Result<Vec<JobRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("constraint violation: {0}")]
    Constraint(String),
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

pub const MAX_TEXT_FIELD: usize = 255;
pub const MAX_SALARY_RANGE: usize = 100;
pub const MAX_SKILL: usize = 100;

/// Schema constraints shared by every store: length caps per column plus
/// required title and company. Violations surface as `Constraint`.
pub fn check_constraints(draft: &JobDraft) -> Result<(), RepositoryError> {
    if draft.title.trim().is_empty() {
        return Err(RepositoryError::Constraint(
            "title must not be empty".to_string(),
        ));
    }
    if draft.company.trim().is_empty() {
        return Err(RepositoryError::Constraint(
            "company must not be empty".to_string(),
        ));
    }
    if draft.title.chars().count() > MAX_TEXT_FIELD {
        return Err(RepositoryError::Constraint(format!(
            "title exceeds {MAX_TEXT_FIELD} characters"
        )));
    }
    if draft.company.chars().count() > MAX_TEXT_FIELD {
        return Err(RepositoryError::Constraint(format!(
            "company exceeds {MAX_TEXT_FIELD} characters"
        )));
    }
    if draft.location.chars().count() > MAX_TEXT_FIELD {
        return Err(RepositoryError::Constraint(format!(
            "location exceeds {MAX_TEXT_FIELD} characters"
        )));
    }
    if let Some(salary_range) = &draft.salary_range {
        if salary_range.chars().count() > MAX_SALARY_RANGE {
            return Err(RepositoryError::Constraint(format!(
                "salary_range exceeds {MAX_SALARY_RANGE} characters"
            )));
        }
    }
    for skill in &draft.required_skills {
        if skill.chars().count() > MAX_SKILL {
            return Err(RepositoryError::Constraint(format!(
                "skill '{skill}' exceeds {MAX_SKILL} characters"
            )));
        }
    }

    Ok(())
}
