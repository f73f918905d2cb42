use job_insights::algorithm::top_companies_by_experience;
use job_insights::filter::skill_and_state_filter;
use job_insights::models::TextColumn;
use job_insights::{FilterResolver, FilterScope};

use crate::utils::{SKILLS, STATES, python_ca_table, random_postings, rust_elsewhere_table, table};

#[test]
fn python_in_california_uses_both_filters() -> job_insights::Result<()> {
    let table = python_ca_table();
    let resolved = FilterResolver::new(&table).resolve("Python", "CA")?;
    assert_eq!(resolved.scope, FilterScope::Both);

    let view = top_companies_by_experience(
        &resolved,
        &resolved.rows.work_types(),
        Some("Full-time"),
        "Python",
        "California",
        5,
    )?;
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].company, "CompanyA");
    assert_eq!(view.rows[0].experience_level, "Entry level");
    assert_eq!(view.rows[0].job_count, 2);
    Ok(())
}

#[test]
fn rust_in_wyoming_falls_back_to_skill() -> job_insights::Result<()> {
    let table = rust_elsewhere_table();
    let resolved = FilterResolver::new(&table).resolve("Rust", "WY")?;
    assert_eq!(resolved.scope, FilterScope::SkillOnly);
    assert_eq!(resolved.rows.num_rows(), 2);

    let caption = resolved.scope.caption("Rust", "Wyoming", "Full-time");
    assert!(caption.contains("Rust"));
    assert!(!caption.contains("Wyoming"));
    Ok(())
}

#[test]
fn resolution_is_never_empty_for_a_non_empty_table() -> job_insights::Result<()> {
    for seed in 0..20 {
        let table = table(&random_postings(seed, 12));
        let resolver = FilterResolver::new(&table);
        for skill in SKILLS.iter().chain(["Cobol"].iter()) {
            for state in STATES {
                let resolved = resolver.resolve(skill, state)?;
                assert!(
                    !resolved.rows.is_empty(),
                    "seed {seed}: empty resolution for {skill}/{state}"
                );
            }
        }
    }
    Ok(())
}

#[test]
fn both_iff_intersection_has_two_companies() -> job_insights::Result<()> {
    for seed in 100..120 {
        let table = table(&random_postings(seed, 10));
        let resolver = FilterResolver::new(&table);
        for skill in SKILLS {
            for state in STATES {
                let direct = table.filter(&skill_and_state_filter(skill, state))?;
                let qualifies = direct.distinct_count(TextColumn::Company) > 1;
                let resolved = resolver.resolve(skill, state)?;
                assert_eq!(
                    resolved.scope == FilterScope::Both,
                    qualifies,
                    "seed {seed}: {skill}/{state}"
                );
                if resolved.scope != FilterScope::None {
                    assert!(resolved.rows.distinct_count(TextColumn::Company) > 1);
                }
                if !qualifies {
                    assert!(resolved.rows.num_rows() >= direct.num_rows());
                }
            }
        }
    }
    Ok(())
}
