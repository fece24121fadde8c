use serde::{Deserialize, Serialize};

use super::domain::JobRecord;

/// Raw listing parameters as they arrive on the wire.
///
/// Every field is optional and independently applicable; out-of-range
/// page values and unknown sort keys are normalized, never rejected.
#[derive(Debug, Clone, Deserialize)]
pub struct JobQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default = "JobQuery::default_order_by")]
    pub order_by: String,
    #[serde(default = "JobQuery::default_page")]
    pub page: i64,
    #[serde(default = "JobQuery::default_page_size")]
    pub page_size: i64,
}

impl JobQuery {
    fn default_order_by() -> String {
        "posting_date".to_string()
    }

    fn default_page() -> i64 {
        1
    }

    fn default_page_size() -> i64 {
        10
    }
}

impl Default for JobQuery {
    fn default() -> Self {
        Self {
            search: None,
            status: None,
            location: None,
            company: None,
            order_by: Self::default_order_by(),
            page: Self::default_page(),
            page_size: Self::default_page_size(),
        }
    }
}

/// Conjunctive filter over the posting collection.
///
/// Terms are lowercased once at construction; blank parameters are treated
/// as absent, matching the permissive wire contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilter {
    search: Option<String>,
    status: Option<String>,
    location: Option<String>,
    company: Option<String>,
}

impl JobFilter {
    pub fn from_query(query: &JobQuery) -> Self {
        Self {
            search: normalized_term(query.search.as_deref()),
            status: normalized_term(query.status.as_deref()),
            location: normalized_term(query.location.as_deref()),
            company: normalized_term(query.company.as_deref()),
        }
    }

    /// All present predicates must hold; `search` is an OR across title,
    /// description, and company.
    pub fn matches(&self, job: &JobRecord) -> bool {
        let search_hit = self.search.as_deref().map_or(true, |term| {
            contains_ci(&job.title, term)
                || contains_ci(&job.description, term)
                || contains_ci(&job.company, term)
        });

        let status_hit = self
            .status
            .as_deref()
            .map_or(true, |term| job.status.label() == term);

        let location_hit = self
            .location
            .as_deref()
            .map_or(true, |term| contains_ci(&job.location, term));

        let company_hit = self
            .company
            .as_deref()
            .map_or(true, |term| contains_ci(&job.company, term));

        search_hit && status_hit && location_hit && company_hit
    }
}

fn normalized_term(raw: Option<&str>) -> Option<String> {
    raw.filter(|value| !value.is_empty())
        .map(|value| value.to_lowercase())
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Result ordering derived from the `order_by` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobOrdering {
    /// `posting_date`: most recently posted first.
    NewestFirst,
    /// `expiration_date`: earliest-expiring first.
    ExpiringSoonest,
    /// Unrecognized key: leave the stored order untouched.
    Stored,
}

impl JobOrdering {
    pub fn from_key(key: &str) -> Self {
        match key {
            "posting_date" => Self::NewestFirst,
            "expiration_date" => Self::ExpiringSoonest,
            _ => Self::Stored,
        }
    }

    /// Sort in place. The id is the final tie-breaker so equal dates still
    /// order the same way on every call.
    pub fn sort(self, jobs: &mut [JobRecord]) {
        match self {
            Self::NewestFirst => jobs.sort_by(|a, b| {
                b.posting_date
                    .cmp(&a.posting_date)
                    .then_with(|| a.id.cmp(&b.id))
            }),
            Self::ExpiringSoonest => jobs.sort_by(|a, b| {
                a.expiration_date
                    .cmp(&b.expiration_date)
                    .then_with(|| a.id.cmp(&b.id))
            }),
            Self::Stored => {}
        }
    }
}

/// One page of listings plus the pagination bookkeeping, all reflecting
/// post-clamp values rather than the caller's raw input.
#[derive(Debug, Clone, Serialize)]
pub struct ListingPage {
    pub items: Vec<JobRecord>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

impl ListingPage {
    /// Slice the filtered, ordered collection down to the requested window.
    pub fn assemble(matched: Vec<JobRecord>, requested_page: i64, requested_size: i64) -> Self {
        let total = matched.len() as u64;
        let (page, page_size, total_pages) = page_window(total, requested_page, requested_size);

        let start = ((page - 1) * page_size) as usize;
        let items = matched
            .into_iter()
            .skip(start)
            .take(page_size as usize)
            .collect();

        Self {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }
}

/// Normalize the caller's page parameters against the matched total.
///
/// `page_size <= 0` means "everything on one page": the size becomes the
/// total and `total_pages` is pinned to 1 even when the total is zero, so
/// the arithmetic never divides by zero. The page lands in
/// `[1, max(1, total_pages)]`.
pub fn page_window(total: u64, requested_page: i64, requested_size: i64) -> (u64, u64, u64) {
    let (page_size, total_pages) = if requested_size <= 0 {
        (total, 1)
    } else {
        let size = requested_size as u64;
        (size, total.div_ceil(size))
    };

    let page = (requested_page.max(1) as u64).min(total_pages.max(1));

    (page, page_size, total_pages)
}
