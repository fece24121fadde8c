//! The job posting directory: entity, status derivation, listing query
//! engine, storage contract, service facade, and HTTP router.

pub mod domain;
pub mod import;
pub mod query;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{parse_calendar_date, JobDraft, JobId, JobRecord, JobStatus};
pub use query::{JobFilter, JobOrdering, JobQuery, ListingPage};
pub use repository::{check_constraints, JobRepository, RepositoryError};
pub use router::job_router;
pub use service::{JobDirectoryError, JobDirectoryService};
