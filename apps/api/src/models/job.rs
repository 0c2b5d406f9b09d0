use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Company a job is posted under. Jobs hold an embedded copy — there is no
/// separate company lookup on the read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// A job posting as held in the in-memory store.
///
/// `company`, `experience_level`, and `salary` are optional: seed data and
/// recruiter posts may omit them, and the match evaluator treats an absent
/// field as a non-match rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub company: Option<Company>,
    /// Open string set ("Full-Time", "Internship", ...). Matched
    /// case-insensitively; never validated against the catalog.
    pub job_type: String,
    /// Years of experience required.
    #[serde(default)]
    pub experience_level: Option<u32>,
    /// Annual compensation in lakhs per annum.
    #[serde(default)]
    pub salary: Option<f64>,
    /// Number of open slots. Display-only — never consulted by matching.
    pub position: u32,
    /// Display/sort-only — never consulted by matching.
    pub created_at: DateTime<Utc>,
}

impl Job {
    /// Company name, if the company reference is present.
    pub fn company_name(&self) -> Option<&str> {
        self.company.as_ref().map(|c| c.name.as_str())
    }
}
