use job_insights::algorithm::{
    AppliesCategory, explode_salaries, salary_apply_distribution, skill_experience_flow,
    state_job_counts,
};
use job_insights::filter::skill_filter;
use job_insights::models::TextColumn;
use job_insights::reference::is_reference_state;
use job_insights::{DashboardConfig, JobPosting};

use crate::utils::{SKILLS, random_postings, table};

#[test]
fn state_counts_sum_to_reference_rows() -> job_insights::Result<()> {
    for seed in 0..10 {
        let table = table(&random_postings(seed, 80));
        for skill in SKILLS {
            let view = state_job_counts(&table, skill, 3)?;
            let rows = table.filter(&skill_filter(skill))?;
            let expected = rows
                .text(TextColumn::State)
                .iter()
                .flatten()
                .filter(|state| is_reference_state(state))
                .count();
            assert_eq!(view.total(), expected, "seed {seed}, skill {skill}");
            assert!(view.states.iter().all(|s| s.state != "PR"));
            assert!(view.states.iter().all(|s| s.bin < view.bins.len()));
        }
    }
    Ok(())
}

#[test]
fn identical_counts_still_produce_three_bins() -> job_insights::Result<()> {
    let table = table(&[
        JobPosting::new("1", "CA", "Go", "A"),
        JobPosting::new("2", "NY", "Go", "B"),
        JobPosting::new("3", "TX", "Go", "C"),
    ]);
    let view = state_job_counts(&table, "Go", 3)?;
    assert_eq!(view.bins.len(), 3);
    for bin in &view.bins {
        assert!(bin.lower.is_finite() && bin.upper.is_finite());
        assert!(bin.upper > bin.lower);
        assert!(!bin.label.is_empty());
    }
    assert!(view.states.iter().all(|s| s.bin == 0));
    Ok(())
}

#[test]
fn no_rows_for_skill_yields_unit_range() -> job_insights::Result<()> {
    let table = table(&[JobPosting::new("1", "CA", "Go", "A")]);
    let view = state_job_counts(&table, "Haskell", 3)?;
    assert!(view.states.is_empty());
    assert_eq!(view.bins.len(), 3);
    assert_eq!(view.bins[0].lower, 0.0);
    assert_eq!(view.bins[2].upper, 1.0);
    Ok(())
}

#[test]
fn explode_yields_two_observations_per_row() -> job_insights::Result<()> {
    let table = table(&random_postings(7, 60));
    for skill in SKILLS {
        let rows = table.filter(&skill_filter(skill))?;
        assert_eq!(explode_salaries(&rows).len(), 2 * rows.num_rows());
    }
    Ok(())
}

#[test]
fn applies_categories_partition_observations() -> job_insights::Result<()> {
    for seed in 20..30 {
        let table = table(&random_postings(seed, 120));
        for skill in SKILLS {
            let view = salary_apply_distribution(&table, skill, 3)?;
            let Some(applies) = view.applies else {
                assert!(view.observations.is_empty());
                continue;
            };
            for o in &view.observations {
                let expected = if o.applies == 0.0 {
                    AppliesCategory::NoApplications
                } else if o.applies <= applies.q3 {
                    AppliesCategory::Average
                } else {
                    AppliesCategory::AboveAverage
                };
                assert_eq!(o.applies_category, expected);
                assert!(view.company_sizes.contains(&o.company_size));
            }
            assert!(view.company_sizes.len() <= 3);
            assert!(view.company_sizes.windows(2).all(|w| w[0] < w[1]));
            let boxed: usize = view.boxes.iter().map(|b| b.salary.count).sum();
            assert_eq!(boxed, view.observations.len());
        }
    }
    Ok(())
}

#[test]
fn upper_quartile_boundary_is_average() -> job_insights::Result<()> {
    // Applies 0, 10, 10, 10: q3 is exactly 10.
    let rows: Vec<JobPosting> = [0.0, 10.0, 10.0, 10.0]
        .iter()
        .enumerate()
        .map(|(i, applies)| {
            JobPosting::new(&i.to_string(), "CA", "SQL", "A")
                .with_salary(50_000.0, 60_000.0)
                .with_applies(*applies)
                .with_company_size(2.0)
        })
        .collect();
    let view = salary_apply_distribution(&table(&rows), "SQL", 3)?;
    let q3 = view.applies.map(|q| q.q3);
    assert_eq!(q3, Some(10.0));
    assert!(
        view.observations
            .iter()
            .filter(|o| o.applies == 10.0)
            .all(|o| o.applies_category == AppliesCategory::Average)
    );
    Ok(())
}

#[test]
fn skill_flow_links_cover_ranked_rows() -> job_insights::Result<()> {
    let table = table(&random_postings(3, 150));
    let config = DashboardConfig::default();
    let flow = skill_experience_flow(&table, "CA", "Python", &config)?;
    assert!(flow.top_skills.len() <= 5);
    assert!(flow.top_skills.iter().all(|s| !s.eq_ignore_ascii_case("other")));
    for link in &flow.links {
        assert!(link.source < flow.top_skills.len());
        assert!(link.target >= flow.top_skills.len() && link.target < flow.nodes.len());
    }
    Ok(())
}
