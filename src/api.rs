use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::LottoError;
use crate::page::render_index;
use crate::types::Draw;
use crate::use_cases::DrawUseCase;

#[derive(Clone)]
pub struct AppState {
    pub draws: Arc<DrawUseCase>,
}

pub fn router(draws: Arc<DrawUseCase>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/numbers", get(new_draw).post(new_draw))
        .route("/leaderboard", get(leaderboard))
        .route("/draws", get(recent_draws))
        .with_state(AppState { draws })
}

#[derive(Debug)]
pub struct ServerError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ServerError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "bad_request",
            message: message.into(),
        }
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        Self::bad_request(rejection.body_text())
    }
}

impl From<LottoError> for ServerError {
    fn from(err: LottoError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: err.code(),
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            error: ErrorBody {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<(u8, u64)>,
    pub draws: usize,
}

#[derive(Debug, Serialize)]
pub struct DrawsResponse {
    pub draws: Vec<Draw>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub draws: u64,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
}

/// Dates on the page are UTC; the server's own timezone is not consulted.
async fn index() -> Html<String> {
    Html(render_index(Utc::now().date_naive()))
}

async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ServerError> {
    let draws = state.draws.draw_count().await?;
    Ok(Json(HealthResponse { status: "ok", draws }))
}

async fn new_draw(State(state): State<AppState>) -> Result<Json<Draw>, ServerError> {
    let draw = state.draws.request_new_draw().await?;
    Ok(Json(draw))
}

async fn leaderboard(
    State(state): State<AppState>,
) -> Result<Json<LeaderboardResponse>, ServerError> {
    let report = state.draws.request_frequency_report().await?;
    Ok(Json(LeaderboardResponse {
        leaderboard: report
            .entries
            .iter()
            .map(|entry| (entry.number, entry.count))
            .collect(),
        draws: report.draws,
    }))
}

async fn recent_draws(
    State(state): State<AppState>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<DrawsResponse>, ServerError> {
    let Query(query) = query?;
    let draws = state.draws.recent_draws(query.limit).await?;
    Ok(Json(DrawsResponse { draws }))
}
