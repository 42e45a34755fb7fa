use actix_web::{web, HttpResponse};
use std::sync::Arc;

use crate::core::Matcher;
use crate::error::RankerError;
use crate::models::{Dataset, ErrorResponse, HealthResponse, ReloadResponse};
use crate::services::SnapshotStore;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    /// Present when serving from an in-memory snapshot
    pub snapshot: Option<Arc<SnapshotStore>>,
}

impl AppState {
    pub fn new(matcher: Matcher) -> Self {
        Self {
            matcher,
            snapshot: None,
        }
    }

    pub fn with_snapshot(snapshot: Arc<SnapshotStore>) -> Self {
        Self {
            matcher: snapshot.matcher().clone(),
            snapshot: Some(snapshot),
        }
    }

    /// Run `f` on the blocking pool against the snapshot, or a fresh load
    async fn with_dataset<T, F>(&self, f: F) -> Result<T, RankerError>
    where
        F: FnOnce(&Matcher, &Dataset) -> Result<T, RankerError> + Send + 'static,
        T: Send + 'static,
    {
        let matcher = self.matcher.clone();
        let snapshot = self.snapshot.clone();
        run_blocking(move || {
            let dataset = match snapshot {
                Some(store) => store.current(),
                None => Arc::new(matcher.load_dataset()?),
            };
            f(&matcher, &*dataset)
        })
        .await
    }
}

async fn run_blocking<T, F>(f: F) -> Result<T, RankerError>
where
    F: FnOnce() -> Result<T, RankerError> + Send + 'static,
    T: Send + 'static,
{
    web::block(f)
        .await
        .map_err(|e| RankerError::Blocking(e.to_string()))?
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match_jobs", web::get().to(match_jobs))
        .route("/employers", web::get().to(list_employers))
        .route("/employers/{employer_id}/candidates", web::get().to(ranked_candidates))
        .route("/reload", web::post().to(reload));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let sources = state.matcher.sources();
    let healthy = sources.employers.is_file() && sources.candidates.is_file();

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank all candidates for every employer
///
/// GET /api/match_jobs
async fn match_jobs(state: web::Data<AppState>) -> Result<HttpResponse, RankerError> {
    let results = state
        .with_dataset(|matcher, dataset| Ok(matcher.match_all(dataset)))
        .await?;

    tracing::info!("Returning rankings for {} employers", results.len());
    Ok(HttpResponse::Ok().json(results))
}

/// Employer directory
///
/// GET /api/employers
async fn list_employers(state: web::Data<AppState>) -> Result<HttpResponse, RankerError> {
    let employers = match &state.snapshot {
        Some(store) => store.current().employers.clone(),
        None => {
            let matcher = state.matcher.clone();
            run_blocking(move || matcher.load_employers()).await?
        }
    };

    Ok(HttpResponse::Ok().json(employers))
}

/// Ranked candidates for one employer
///
/// GET /api/employers/{employer_id}/candidates
async fn ranked_candidates(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, RankerError> {
    let employer_id = path.into_inner();

    let ranked = state
        .with_dataset(move |matcher, dataset| matcher.match_employer(dataset, employer_id))
        .await?;

    if ranked.is_empty() {
        tracing::info!("No ranked candidates for employer {}", employer_id);
        return Ok(HttpResponse::NotFound().json(ErrorResponse {
            error: "not_found".to_string(),
            message: "No candidates found for the given employer ID".to_string(),
            status_code: 404,
        }));
    }

    Ok(HttpResponse::Ok().json(ranked))
}

/// Reload the in-memory snapshot
///
/// POST /api/reload
async fn reload(state: web::Data<AppState>) -> Result<HttpResponse, RankerError> {
    let store = match &state.snapshot {
        Some(store) => store.clone(),
        None => {
            return Ok(HttpResponse::NotFound().json(ErrorResponse {
                error: "snapshot_disabled".to_string(),
                message: "Data is reloaded on every request; enable data.snapshot to use reload"
                    .to_string(),
                status_code: 404,
            }));
        }
    };

    let snapshot = run_blocking(move || store.refresh()).await?;

    Ok(HttpResponse::Ok().json(ReloadResponse {
        employers: snapshot.dataset.employers.len(),
        candidates: snapshot.dataset.candidates.len(),
        loaded_at: snapshot.loaded_at,
    }))
}
