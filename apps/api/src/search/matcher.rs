#![allow(dead_code)]

//! Match evaluator — decides whether a job matches a compiled query.
//!
//! The compiled query concatenates unrelated facet values ("Bangalore Full
//! Time 3-5 years"), so no single field contains the whole string. Matching
//! is therefore a logical OR over independent per-field signals: a job is
//! included as soon as any one signal recognizes the query. False positives
//! on unintended fields are accepted behavior.
//!
//! `AppState` holds an `Arc<dyn JobMatcher>`, swapped at startup if a
//! stricter backend ever lands.

use serde::Serialize;

use crate::models::job::Job;

/// Literal phrases recognized by the job-type phrase signal. Stored job
/// types use hyphenated forms ("Full-Time"), so the exact-equality check in
/// `JobTypePhrase` only fires for jobs stored with the space-separated
/// form. Known discrepancy, preserved pending product clarification.
pub const JOB_TYPE_PHRASES: &[&str] =
    &["full time", "part time", "internship", "remote", "contract"];

/// The matcher seam. Implementations must be pure and synchronous —
/// evaluation runs inline on every criteria change.
pub trait JobMatcher: Send + Sync {
    fn matches(&self, query: &str, job: &Job) -> bool;
}

/// One independent match signal. Signals are evaluated in declaration
/// order and OR-ed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSignal {
    Title,
    Description,
    Location,
    CompanyName,
    JobType,
    Experience,
    Salary,
    JobTypePhrase,
}

impl MatchSignal {
    pub const ALL: [MatchSignal; 8] = [
        MatchSignal::Title,
        MatchSignal::Description,
        MatchSignal::Location,
        MatchSignal::CompanyName,
        MatchSignal::JobType,
        MatchSignal::Experience,
        MatchSignal::Salary,
        MatchSignal::JobTypePhrase,
    ];

    /// Evaluates this signal against an already lower-cased query.
    /// Absent fields (no company, no salary, no experience level) make the
    /// signal false rather than an error.
    fn holds(self, query: &str, job: &Job) -> bool {
        match self {
            MatchSignal::Title => job.title.to_lowercase().contains(query),
            MatchSignal::Description => job.description.to_lowercase().contains(query),
            MatchSignal::Location => job.location.to_lowercase().contains(query),
            MatchSignal::CompanyName => job
                .company_name()
                .map(|name| name.to_lowercase().contains(query))
                .unwrap_or(false),
            MatchSignal::JobType => job.job_type.to_lowercase().contains(query),
            MatchSignal::Experience => job
                .experience_level
                .map(|years| {
                    let rendered = years.to_string();
                    query.contains(&rendered) || rendered.contains(query)
                })
                .unwrap_or(false),
            MatchSignal::Salary => job
                .salary
                .map(|lpa| {
                    let rendered = lpa.to_string();
                    let digits: String = query.chars().filter(|c| c.is_ascii_digit()).collect();
                    digits.contains(&rendered) || query.contains(&rendered)
                })
                .unwrap_or(false),
            MatchSignal::JobTypePhrase => {
                let job_type = job.job_type.to_lowercase();
                JOB_TYPE_PHRASES
                    .iter()
                    .any(|phrase| query.contains(phrase) && job_type == *phrase)
            }
        }
    }
}

/// Signals that fire for a query/job pair. Empty query fires nothing —
/// callers handle the match-everything shortcut separately.
pub fn matching_signals(query: &str, job: &Job) -> Vec<MatchSignal> {
    let query = query.to_lowercase();
    MatchSignal::ALL
        .iter()
        .copied()
        .filter(|s| s.holds(&query, job))
        .collect()
}

/// Default substring-based matcher.
pub struct KeywordMatcher;

impl JobMatcher for KeywordMatcher {
    fn matches(&self, query: &str, job: &Job) -> bool {
        // Empty query means no filter is active: everything matches.
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        MatchSignal::ALL.iter().any(|s| s.holds(&query, job))
    }
}
