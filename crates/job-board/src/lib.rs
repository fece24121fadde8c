//! Job posting directory: a small HTTP service core built around a listing
//! query engine (filter, sort, paginate) and a date-derived posting status.
//!
//! The `jobs` module owns the domain; `config` and `telemetry` carry the
//! service plumbing shared by every binary that embeds the directory.

pub mod config;
pub mod error;
pub mod jobs;
pub mod telemetry;
