//! CSV fixture handling for bulk-loading postings.
//!
//! The format mirrors the seed generator's output: one posting per row,
//! skills packed into a single `;`-separated column, dates as
//! `YYYY-MM-DD` (an RFC 3339 datetime is accepted and truncated).

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use serde::Deserialize;

use super::domain::{parse_calendar_date, JobDraft};

#[derive(Debug)]
pub enum JobImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidDate { row: usize, message: String },
}

impl std::fmt::Display for JobImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobImportError::Io(err) => write!(f, "failed to read job fixture: {}", err),
            JobImportError::Csv(err) => write!(f, "invalid job fixture CSV: {}", err),
            JobImportError::InvalidDate { row, message } => {
                write!(f, "bad date in fixture row {}: {}", row, message)
            }
        }
    }
}

impl std::error::Error for JobImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            JobImportError::Io(err) => Some(err),
            JobImportError::Csv(err) => Some(err),
            JobImportError::InvalidDate { .. } => None,
        }
    }
}

impl From<std::io::Error> for JobImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for JobImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

#[derive(Debug, Deserialize)]
struct FixtureRow {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Salary Range", default)]
    salary_range: Option<String>,
    #[serde(rename = "Required Skills", default)]
    required_skills: Option<String>,
    #[serde(rename = "Posting Date")]
    posting_date: String,
    #[serde(rename = "Expiration Date")]
    expiration_date: String,
}

impl FixtureRow {
    fn into_draft(self, row: usize) -> Result<JobDraft, JobImportError> {
        let posting_date = parse_calendar_date(&self.posting_date)
            .map_err(|message| JobImportError::InvalidDate { row, message })?;
        let expiration_date = parse_calendar_date(&self.expiration_date)
            .map_err(|message| JobImportError::InvalidDate { row, message })?;

        Ok(JobDraft {
            title: self.title,
            company: self.company,
            location: self.location,
            description: self.description,
            salary_range: self.salary_range.filter(|value| !value.trim().is_empty()),
            required_skills: split_skills(self.required_skills.as_deref()),
            posting_date,
            expiration_date,
        })
    }
}

fn split_skills(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(';')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read posting drafts from a fixture file.
pub fn drafts_from_path(path: &Path) -> Result<Vec<JobDraft>, JobImportError> {
    let file = File::open(path)?;
    drafts_from_reader(file)
}

/// Read posting drafts from any CSV source.
pub fn drafts_from_reader<R: Read>(reader: R) -> Result<Vec<JobDraft>, JobImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut drafts = Vec::new();
    for (index, record) in csv_reader.deserialize::<FixtureRow>().enumerate() {
        let row = record?;
        // Header is line 1; data rows start at 2.
        drafts.push(row.into_draft(index + 2)?);
    }

    Ok(drafts)
}

/// Write posting drafts in the fixture format accepted by
/// [`drafts_from_reader`].
pub fn drafts_to_writer<W: Write>(writer: W, drafts: &[JobDraft]) -> Result<(), JobImportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "Title",
        "Company",
        "Location",
        "Description",
        "Salary Range",
        "Required Skills",
        "Posting Date",
        "Expiration Date",
    ])?;

    for draft in drafts {
        let skills = draft.required_skills.join(";");
        let posting_date = draft.posting_date.format("%Y-%m-%d").to_string();
        let expiration_date = draft.expiration_date.format("%Y-%m-%d").to_string();
        csv_writer.write_record([
            draft.title.as_str(),
            draft.company.as_str(),
            draft.location.as_str(),
            draft.description.as_str(),
            draft.salary_range.as_deref().unwrap_or(""),
            skills.as_str(),
            posting_date.as_str(),
            expiration_date.as_str(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Cursor;

    const FIXTURE: &str = "\
Title,Company,Location,Description,Salary Range,Required Skills,Posting Date,Expiration Date
Backend Developer,Tech Corp,Taipei,Build APIs,60k-90k,Rust;PostgreSQL,2025-07-01,2025-08-01
Data Scientist,Web Solutions,Kaohsiung,Crunch numbers,,,2025-07-02T08:30:00Z,2025-09-01
";

    #[test]
    fn reads_fixture_rows_into_drafts() {
        let drafts = drafts_from_reader(Cursor::new(FIXTURE)).expect("fixture parses");
        assert_eq!(drafts.len(), 2);

        let first = &drafts[0];
        assert_eq!(first.title, "Backend Developer");
        assert_eq!(first.required_skills, vec!["Rust", "PostgreSQL"]);
        assert_eq!(first.salary_range.as_deref(), Some("60k-90k"));

        let second = &drafts[1];
        assert!(second.required_skills.is_empty());
        assert!(second.salary_range.is_none());
        // Datetime input truncates at the date boundary.
        assert_eq!(
            second.posting_date,
            NaiveDate::from_ymd_opt(2025, 7, 2).expect("valid date")
        );
    }

    #[test]
    fn reports_the_offending_row_for_bad_dates() {
        let fixture = "\
Title,Company,Location,Description,Salary Range,Required Skills,Posting Date,Expiration Date
Backend Developer,Tech Corp,Taipei,Build APIs,,,not-a-date,2025-08-01
";
        let err = drafts_from_reader(Cursor::new(fixture)).expect_err("bad date rejected");
        match err {
            JobImportError::InvalidDate { row, .. } => assert_eq!(row, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn writer_output_round_trips() {
        let drafts = drafts_from_reader(Cursor::new(FIXTURE)).expect("fixture parses");
        let mut buffer = Vec::new();
        drafts_to_writer(&mut buffer, &drafts).expect("fixture writes");
        let reread = drafts_from_reader(Cursor::new(buffer)).expect("rewritten fixture parses");
        assert_eq!(reread.len(), drafts.len());
        assert_eq!(reread[0].required_skills, drafts[0].required_skills);
    }
}
