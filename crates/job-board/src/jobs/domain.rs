use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned identifier for a posting.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle classification of a posting relative to the calendar.
///
/// Never supplied by clients; recomputed from the posting and expiration
/// dates on every write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Scheduled,
    Active,
    Expired,
}

impl JobStatus {
    /// Classify a posting for a given calendar day.
    ///
    /// A posting dated today is already live, and one expiring today is
    /// live through the end of the day; only strict inequalities move a
    /// posting out of `Active`.
    pub fn resolve(posting_date: NaiveDate, expiration_date: NaiveDate, today: NaiveDate) -> Self {
        if posting_date > today {
            Self::Scheduled
        } else if expiration_date < today {
            Self::Expired
        } else {
            Self::Active
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Active => "active",
            Self::Expired => "expired",
        }
    }
}

/// Client-supplied posting fields, shared by create and update payloads.
///
/// `status` is deliberately absent: it is derived at write time. On update
/// the `company` field is carried for payload symmetry but the stored value
/// wins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub posting_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_calendar_date")]
    pub expiration_date: NaiveDate,
}

/// Persisted posting as returned by the storage collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub salary_range: Option<String>,
    pub required_skills: Vec<String>,
    pub posting_date: NaiveDate,
    pub expiration_date: NaiveDate,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Parse a calendar date, truncating any time-of-day component.
///
/// Accepts `YYYY-MM-DD` as well as RFC 3339 datetimes; the date boundary
/// is what the status rule compares against.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    let date_part = trimmed
        .split(|c| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as a calendar date ({err})"))
}

pub(crate) fn deserialize_calendar_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_date(&raw).map_err(serde::de::Error::custom)
}
