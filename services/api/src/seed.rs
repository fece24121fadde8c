use clap::Args;
use job_board::error::AppError;
use job_board::jobs::import::drafts_to_writer;
use job_board::jobs::JobDraft;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use chrono::{Duration, Local, NaiveDate};

const COMPANIES: &[&str] = &[
    "Tech Solutions Inc.",
    "Digital Innovations",
    "Future Systems",
    "Smart Tech",
    "Global Software",
    "Innovative Solutions",
    "Tech Pioneers",
    "Digital Dynamics",
    "Future Technologies",
    "Smart Systems",
];

const JOB_TITLES: &[&str] = &[
    "Senior Python Developer",
    "Frontend Developer",
    "Backend Developer",
    "Full Stack Developer",
    "DevOps Engineer",
    "Data Scientist",
    "Machine Learning Engineer",
    "Mobile Developer",
    "UI/UX Designer",
    "Product Manager",
];

const LOCATIONS: &[&str] = &[
    "Taipei, Taiwan",
    "New Taipei, Taiwan",
    "Taichung, Taiwan",
    "Kaohsiung, Taiwan",
    "Hsinchu, Taiwan",
];

const SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "React",
    "Vue",
    "Angular",
    "Django",
    "Flask",
    "Node.js",
    "TypeScript",
    "Java",
    "Spring Boot",
    "PostgreSQL",
    "MongoDB",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "CI/CD",
    "Git",
    "REST API",
    "GraphQL",
    "Microservices",
];

const SALARY_RANGES: &[&str] = &[
    "60,000 - 90,000 TWD",
    "80,000 - 120,000 TWD",
    "100,000 - 150,000 TWD",
    "120,000 - 180,000 TWD",
    "150,000 - 200,000 TWD",
];

#[derive(Args, Debug)]
pub(crate) struct SeedArgs {
    /// Number of postings to generate
    #[arg(long, default_value_t = 120)]
    pub(crate) count: usize,
    /// Write the fixture to this path instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
    /// Anchor date for the posting window (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

/// Generate a deterministic fixture: postings spread from 60 days in the
/// past to 60 days ahead, expiring 30 to 90 days after posting, so the
/// set always contains scheduled, active, and expired listings.
pub(crate) fn generate_drafts(count: usize, today: NaiveDate) -> Vec<JobDraft> {
    (0..count)
        .map(|index| {
            let posting_offset = (index as i64 * 7) % 121 - 60;
            let posting_date = today + Duration::days(posting_offset);
            let expiration_date = posting_date + Duration::days(30 + (index as i64 * 11) % 61);

            let skill_count = 2 + index % 3;
            let required_skills = (0..skill_count)
                .map(|offset| SKILLS[(index * 5 + offset * 3) % SKILLS.len()].to_string())
                .collect();

            JobDraft {
                title: JOB_TITLES[index % JOB_TITLES.len()].to_string(),
                company: COMPANIES[index % COMPANIES.len()].to_string(),
                location: LOCATIONS[index % LOCATIONS.len()].to_string(),
                description: format!(
                    "This is a test job posting #{}. We are looking for a talented \
                     professional to join our team.",
                    index + 1
                ),
                salary_range: Some(SALARY_RANGES[index % SALARY_RANGES.len()].to_string()),
                required_skills,
                posting_date,
                expiration_date,
            }
        })
        .collect()
}

pub(crate) fn run_seed(args: SeedArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());
    let drafts = generate_drafts(args.count, today);

    match args.output {
        Some(path) => {
            let file = File::create(&path)?;
            drafts_to_writer(file, &drafts)?;
            eprintln!("wrote {} postings to {}", drafts.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            drafts_to_writer(&mut handle, &drafts)?;
            handle.flush()?;
        }
    }

    Ok(())
}
