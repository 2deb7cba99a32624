use crate::core::exams::{validate_exam_score, ExamScore, ExamScoreRequest};
use crate::core::search::{SearchPage, SearchService};
use crate::domain::model::Record;
use crate::domain::query::UniversityQuery;
use crate::utils::error::{ApiError, Result};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
}

impl AppState {
    pub fn new(search: SearchService) -> Self {
        Self {
            search: Arc::new(search),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub status: String,
    pub service: String,
    pub storage: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if self.is_client_error() {
            tracing::debug!("Request rejected ({}): {}", status, self);
        } else {
            tracing::error!("❌ Request failed: {}", self);
        }
        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Empty origin list means any origin.
pub fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    if allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|e| ApiError::InvalidConfigValueError {
                    field: "cors.allowed_origins".to_string(),
                    value: origin.clone(),
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/universities", get(handle_list_universities))
        .route("/universities/:id", get(handle_get_university))
        .route("/exams/validate", post(handle_validate_exam))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 啟動 HTTP 服務，收到 Ctrl+C 後優雅關閉
pub async fn serve(listener: TcpListener, router: Router) -> std::io::Result<()> {
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("🛑 Shutdown signal received");
        })
        .await
}

pub async fn handle_root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        status: "ok".to_string(),
        service: "unisearch-backend".to_string(),
        storage: "json".to_string(),
    })
}

pub async fn handle_list_universities(
    State(state): State<AppState>,
    Query(query): Query<UniversityQuery>,
) -> Result<Json<SearchPage>> {
    let page = state.search.search(&query).await?;
    tracing::info!(
        "📋 /universities: {} of {} (page {}, sort {})",
        page.count,
        page.total,
        page.page,
        page.sort
    );
    Ok(Json(page))
}

pub async fn handle_get_university(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Record>> {
    let record = state.search.find_by_id(&id).await?;
    Ok(Json(record))
}

pub async fn handle_validate_exam(Json(request): Json<ExamScoreRequest>) -> Result<Json<ExamScore>> {
    let result = validate_exam_score(&request)?;
    tracing::debug!("✅ exam {} score {} accepted", result.exam, result.score);
    Ok(Json(result))
}
