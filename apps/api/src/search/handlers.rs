use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{Company, Job};
use crate::search::catalog::{self, FilterCatalog};
use crate::search::criteria::{Criteria, FacetKey};
use crate::search::results::{admin_filter_jobs, filter_jobs};
use crate::search::session::SearchSession;
use crate::search::sort::{sort_jobs, SortKey};
use crate::state::AppState;

/// Browse parameters. Each facet param mirrors one sidebar facet; `keyword`
/// is the free-text search box. Facets override the keyword at compile
/// time, exactly as in the session model.
#[derive(Debug, Default, Deserialize)]
pub struct JobListQuery {
    pub keyword: Option<String>,
    pub location: Option<String>,
    pub job_type: Option<String>,
    pub experience: Option<String>,
    pub salary: Option<String>,
    pub company: Option<String>,
    pub sort: Option<SortKey>,
}

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    /// Matches shown out of the full collection ("Showing X of Y").
    pub count: usize,
    pub total: usize,
    /// The compiled query the evaluator ran.
    pub query: String,
}

fn criteria_from_params(params: &JobListQuery) -> Criteria {
    let mut criteria = Criteria::default();
    if let Some(keyword) = &params.keyword {
        criteria.set_search_term(keyword);
    }
    let facets = [
        (FacetKey::Location, &params.location),
        (FacetKey::JobType, &params.job_type),
        (FacetKey::Experience, &params.experience),
        (FacetKey::Salary, &params.salary),
        (FacetKey::Company, &params.company),
    ];
    for (key, value) in facets {
        if let Some(value) = value {
            criteria.set_facet(key, value);
        }
    }
    criteria
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobListQuery>,
) -> Result<Json<JobListResponse>, AppError> {
    let jobs = state.store.all().await;
    let session = SearchSession::new(criteria_from_params(&params));

    let mut matched = filter_jobs(&jobs, &session.query, state.matcher.as_ref());
    if let Some(key) = params.sort {
        matched = sort_jobs(matched, key);
    }

    Ok(Json(JobListResponse {
        count: matched.len(),
        total: jobs.len(),
        query: session.query,
        jobs: matched,
    }))
}

#[derive(Deserialize)]
pub struct LatestQuery {
    pub limit: Option<usize>,
}

/// GET /api/v1/jobs/latest — newest openings strip on the landing page.
pub async fn handle_latest_jobs(
    State(state): State<AppState>,
    Query(params): Query<LatestQuery>,
) -> Result<Json<Vec<Job>>, AppError> {
    let limit = params.limit.unwrap_or(6);
    let mut jobs = sort_jobs(state.store.all().await, SortKey::Newest);
    jobs.truncate(limit);
    Ok(Json(jobs))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>, AppError> {
    let job = state
        .store
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}

#[derive(Deserialize)]
pub struct PostJobRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub job_type: String,
    pub company_name: Option<String>,
    pub experience_level: Option<u32>,
    pub salary: Option<f64>,
    pub position: Option<u32>,
}

/// POST /api/v1/jobs — recruiter posting. `job_type` is an open string
/// set: catalog membership is not enforced.
pub async fn handle_post_job(
    State(state): State<AppState>,
    Json(req): Json<PostJobRequest>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    for (field, value) in [
        ("title", &req.title),
        ("description", &req.description),
        ("location", &req.location),
        ("job_type", &req.job_type),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{field} must not be empty")));
        }
    }

    let job = Job {
        id: Uuid::new_v4(),
        title: req.title,
        description: req.description,
        location: req.location,
        company: req.company_name.map(|name| Company {
            id: Uuid::new_v4(),
            name,
            location: None,
        }),
        job_type: req.job_type,
        experience_level: req.experience_level,
        salary: req.salary,
        position: req.position.unwrap_or(1),
        created_at: Utc::now(),
    };
    state.store.insert(job.clone()).await;
    Ok((StatusCode::CREATED, Json(job)))
}

#[derive(Deserialize)]
pub struct AdminFilterQuery {
    pub text: Option<String>,
}

/// GET /api/v1/jobs/admin — recruiter table filter over title/company.
pub async fn handle_admin_jobs(
    State(state): State<AppState>,
    Query(params): Query<AdminFilterQuery>,
) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = state.store.all().await;
    let filtered = admin_filter_jobs(&jobs, params.text.as_deref().unwrap_or(""));
    Ok(Json(filtered))
}

/// GET /api/v1/catalog
pub async fn handle_catalog() -> Json<FilterCatalog> {
    Json(catalog::catalog())
}
