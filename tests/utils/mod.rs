use std::path::PathBuf;

use job_insights::{JobPosting, JobTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SKILLS: [&str; 5] = ["Python", "Rust", "SQL", "Go", "other"];
pub const STATES: [&str; 6] = ["CA", "NY", "TX", "WY", "PR", "DC"];
pub const COMPANIES: [&str; 4] = ["CompanyA", "CompanyB", "CompanyC", "CompanyD"];
pub const LEVELS: [&str; 4] = ["Entry level", "Associate", "Director", "Not Specified"];
pub const WORK_TYPES: [&str; 3] = ["Full-time", "Part-time", "Contract"];

/// Build a table from rows, panicking on conversion failure
#[must_use]
pub fn table(postings: &[JobPosting]) -> JobTable {
    JobTable::from_postings(postings).expect("fixture rows convert to a table")
}

/// The Python/CA worked example plus a little noise elsewhere
#[must_use]
pub fn python_ca_table() -> JobTable {
    table(&[
        JobPosting::new("1", "CA", "Python", "CompanyA")
            .with_experience("Entry level")
            .with_work_type("Full-time"),
        JobPosting::new("2", "CA", "Python", "CompanyA")
            .with_experience("Entry level")
            .with_work_type("Full-time"),
        JobPosting::new("3", "CA", "Python", "CompanyB")
            .with_experience("Associate")
            .with_work_type("Part-time"),
        JobPosting::new("4", "NY", "Go", "CompanyC")
            .with_experience("Director")
            .with_work_type("Full-time"),
    ])
}

/// Rust is used by two companies, none of them in Wyoming
#[must_use]
pub fn rust_elsewhere_table() -> JobTable {
    table(&[
        JobPosting::new("1", "CA", "Rust", "CompanyA")
            .with_experience("Associate")
            .with_work_type("Full-time"),
        JobPosting::new("2", "TX", "Rust", "CompanyB")
            .with_experience("Director")
            .with_work_type("Full-time"),
        JobPosting::new("3", "WY", "Go", "CompanyC")
            .with_experience("Entry level")
            .with_work_type("Contract"),
    ])
}

/// Random postings drawn from the fixture vocabularies
///
/// Roughly one in ten numeric values is missing.
#[must_use]
pub fn random_postings(seed: u64, rows: usize) -> Vec<JobPosting> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..rows)
        .map(|i| {
            let mut posting = JobPosting::new(
                &i.to_string(),
                STATES[rng.random_range(0..STATES.len())],
                SKILLS[rng.random_range(0..SKILLS.len())],
                COMPANIES[rng.random_range(0..COMPANIES.len())],
            )
            .with_experience(LEVELS[rng.random_range(0..LEVELS.len())])
            .with_work_type(WORK_TYPES[rng.random_range(0..WORK_TYPES.len())]);

            let min = f64::from(rng.random_range(30..120_u32)) * 1000.0;
            let spread = f64::from(rng.random_range(0..60_u32)) * 1000.0;
            if rng.random_range(0..10) != 0 {
                posting = posting.with_salary(min, min + spread);
            }
            if rng.random_range(0..10) != 0 {
                posting = posting.with_applies(f64::from(rng.random_range(0..40_u32)));
            }
            if rng.random_range(0..10) != 0 {
                posting = posting.with_company_size(f64::from(rng.random_range(1..=7_u32)));
            }
            posting
        })
        .collect()
}

/// A per-test scratch file path in the system temp directory
#[must_use]
pub fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("job_insights_it_{}_{name}", std::process::id()))
}
