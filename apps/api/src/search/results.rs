//! Result set builder — applies the match evaluator across the full job
//! collection. Stable: matched jobs keep their input order. The input is
//! never mutated and no result cap is applied; recomputation simply re-runs
//! to completion on every criteria or collection change.

use crate::models::job::Job;

use super::matcher::JobMatcher;

/// Filters the collection against a compiled query. Returns a new sequence
/// of the matching jobs in their original relative order.
pub fn filter_jobs(jobs: &[Job], query: &str, matcher: &dyn JobMatcher) -> Vec<Job> {
    jobs.iter()
        .filter(|job| matcher.matches(query, job))
        .cloned()
        .collect()
}

/// Admin table text filter: case-insensitive substring over title or
/// company name. Empty text returns the whole collection.
pub fn admin_filter_jobs(jobs: &[Job], text: &str) -> Vec<Job> {
    if text.is_empty() {
        return jobs.to_vec();
    }
    let needle = text.to_lowercase();
    jobs.iter()
        .filter(|job| {
            job.title.to_lowercase().contains(&needle)
                || job
                    .company_name()
                    .map(|name| name.to_lowercase().contains(&needle))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}
