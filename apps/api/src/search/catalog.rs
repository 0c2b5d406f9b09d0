#![allow(dead_code)]

//! Facet catalog — the fixed enumerated choices the filter UI offers.
//!
//! Served to clients via `GET /api/v1/catalog` so the front end never
//! hard-codes the lists. Membership is advisory: the store accepts job
//! types outside `JOB_TYPES` (open string set), and `is_known_choice`
//! exists for UI-side validation only.

use serde::Serialize;

use super::criteria::FacetKey;

pub const LOCATIONS: &[&str] = &[
    "Delhi NCR",
    "Bangalore",
    "Hyderabad",
    "Pune",
    "Mumbai",
    "Chennai",
    "Kolkata",
    "Ahmedabad",
];

pub const JOB_TYPES: &[&str] = &["Full Time", "Part Time", "Internship", "Contract", "Remote"];

pub const EXPERIENCE_BANDS: &[&str] =
    &["0-1 years", "1-3 years", "3-5 years", "5-10 years", "10+ years"];

pub const SALARY_RANGES: &[&str] = &["0-3 LPA", "3-6 LPA", "6-10 LPA", "10-15 LPA", "15+ LPA"];

pub const COMPANIES: &[&str] = &[
    "Google",
    "Microsoft",
    "Amazon",
    "Apple",
    "Meta",
    "Netflix",
    "Tesla",
    "Adobe",
];

/// Browse categories shown on the landing page carousel. Clicking one seeds
/// the free-text search term.
pub const CATEGORIES: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Data Science",
    "UI/UX Designer",
    "Full Stack Developer",
    "DevOps Engineer",
];

/// Full catalog payload for `GET /api/v1/catalog`.
#[derive(Debug, Clone, Serialize)]
pub struct FilterCatalog {
    pub locations: &'static [&'static str],
    pub job_types: &'static [&'static str],
    pub experience_bands: &'static [&'static str],
    pub salary_ranges: &'static [&'static str],
    pub companies: &'static [&'static str],
    pub categories: &'static [&'static str],
}

pub fn catalog() -> FilterCatalog {
    FilterCatalog {
        locations: LOCATIONS,
        job_types: JOB_TYPES,
        experience_bands: EXPERIENCE_BANDS,
        salary_ranges: SALARY_RANGES,
        companies: COMPANIES,
        categories: CATEGORIES,
    }
}

/// Choices for a single facet.
pub fn choices(key: FacetKey) -> &'static [&'static str] {
    match key {
        FacetKey::Location => LOCATIONS,
        FacetKey::JobType => JOB_TYPES,
        FacetKey::Experience => EXPERIENCE_BANDS,
        FacetKey::Salary => SALARY_RANGES,
        FacetKey::Company => COMPANIES,
    }
}

/// Whether `value` is one of the fixed enumerated choices for `key`.
pub fn is_known_choice(key: FacetKey, value: &str) -> bool {
    choices(key).iter().any(|c| *c == value)
}
