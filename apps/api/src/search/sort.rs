//! Listing-view orderings. Applied after filtering; all sorts are stable,
//! and jobs missing the sort key sink to the end without reordering among
//! themselves.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::models::job::Job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Newest,
    SalaryHighToLow,
    SalaryLowToHigh,
    CompanyAz,
}

/// Reorders a filtered result set. Consumes and returns the vector — the
/// filter output is already an owned copy.
pub fn sort_jobs(mut jobs: Vec<Job>, key: SortKey) -> Vec<Job> {
    match key {
        SortKey::Newest => {
            jobs.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        SortKey::SalaryHighToLow => {
            jobs.sort_by(|a, b| compare_salary(b, a));
        }
        SortKey::SalaryLowToHigh => {
            jobs.sort_by(|a, b| compare_salary(a, b));
        }
        SortKey::CompanyAz => {
            jobs.sort_by(|a, b| compare_company(a, b));
        }
    }
    jobs
}

/// Missing salaries order after any present salary, in both directions.
fn compare_salary(a: &Job, b: &Job) -> Ordering {
    match (a.salary, b.salary) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_company(a: &Job, b: &Job) -> Ordering {
    match (a.company_name(), b.company_name()) {
        (Some(x), Some(y)) => x.to_lowercase().cmp(&y.to_lowercase()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
