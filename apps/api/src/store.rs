//! In-memory job store. The job collection is fully resident in memory —
//! seeded from a JSON file at startup and appended to by recruiter posts.
//! Reads hand out cloned snapshots in insertion order; the search core
//! never sees the lock.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::models::job::Job;

#[derive(Clone, Default)]
pub struct JobStore {
    jobs: Arc<RwLock<Vec<Job>>>,
}

impl JobStore {
    pub fn new(jobs: Vec<Job>) -> Self {
        JobStore {
            jobs: Arc::new(RwLock::new(jobs)),
        }
    }

    /// Snapshot of the whole collection, insertion order preserved.
    pub async fn all(&self) -> Vec<Job> {
        self.jobs.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Job> {
        self.jobs.read().await.iter().find(|j| j.id == id).cloned()
    }

    pub async fn insert(&self, job: Job) {
        self.jobs.write().await.push(job);
    }

    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }
}

/// Loads the seed collection from a JSON file (an array of jobs).
pub fn load_seed(path: &Path) -> Result<Vec<Job>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file {}", path.display()))?;
    let jobs: Vec<Job> = serde_json::from_str(&raw)
        .with_context(|| format!("Seed file {} is not a valid job array", path.display()))?;
    info!("Loaded {} seed jobs from {}", jobs.len(), path.display());
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::io::Write;

    fn make_job(title: &str) -> Job {
        Job {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: String::new(),
            location: "Pune".to_string(),
            company: None,
            job_type: "Full-Time".to_string(),
            experience_level: None,
            salary: None,
            position: 1,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_preserves_order() {
        let store = JobStore::default();
        store.insert(make_job("first")).await;
        store.insert(make_job("second")).await;

        let all = store.all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "first");
        assert_eq!(all[1].title, "second");
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let job = make_job("wanted");
        let id = job.id;
        let store = JobStore::new(vec![job]);

        assert_eq!(store.get(id).await.unwrap().title, "wanted");
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }

    #[test]
    fn test_load_seed_round_trip() {
        let jobs = vec![make_job("seeded")];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&jobs).unwrap().as_bytes())
            .unwrap();

        let loaded = load_seed(file.path()).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].title, "seeded");
    }

    #[test]
    fn test_load_seed_missing_file_errors() {
        assert!(load_seed(Path::new("/nonexistent/seed.json")).is_err());
    }

    #[test]
    fn test_load_seed_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(load_seed(file.path()).is_err());
    }
}
