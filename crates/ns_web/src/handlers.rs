use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use ns_core::{Article, Report};
use ns_inference::narration;
use serde::Serialize;
use serde_json::json;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct NewsResponse {
    pub company: String,
    pub articles: Vec<Article>,
}

#[derive(Debug)]
pub enum ApiError {
    NoArticles(String),
    Synthesis(ns_core::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NoArticles(company) => {
                (StatusCode::NOT_FOUND, format!("No articles found for {}", company))
            }
            ApiError::Synthesis(e) => {
                (StatusCode::BAD_GATEWAY, format!("Error generating audio: {}", e))
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
) -> Json<NewsResponse> {
    let articles = state.fetcher.fetch_news(&company).await;
    Json(NewsResponse { company, articles })
}

pub async fn analyze_company(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
) -> Json<Report> {
    let articles = state.fetcher.fetch_news(&company).await;
    Json(state.reports.build_report(&company, &articles).await)
}

pub async fn get_narration(
    State(state): State<Arc<AppState>>,
    Path(company): Path<String>,
) -> Result<Response, ApiError> {
    let articles = state.fetcher.fetch_news(&company).await;
    let report = state.reports.build_report(&company, &articles).await;
    if report.is_empty() {
        return Err(ApiError::NoArticles(company));
    }

    let audio = state.speech.synthesize(&narration(&report)).await.map_err(|e| {
        tracing::error!("❌ Narration for {} failed: {}", company, e);
        ApiError::Synthesis(e)
    })?;
    Ok(([(header::CONTENT_TYPE, audio.content_type)], audio.bytes).into_response())
}
