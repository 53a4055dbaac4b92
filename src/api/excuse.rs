//! REST API endpoints for excuse generation and history

use actix_web::{get, post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::db::models::{ListExcusesQuery, NewExcuse};
use crate::model::{ExcuseRequest, Language, Urgency};

fn default_category() -> String {
    "work".to_string()
}

fn default_scenario() -> String {
    "general".to_string()
}

fn default_user_id() -> i64 {
    1
}

/// Body of a generation request; every field has a sensible default.
#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateExcuseRequest {
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_scenario")]
    pub scenario: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_user_id")]
    pub user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateExcuseResponse {
    pub success: bool,
    pub excuse_id: i64,
    pub excuse: String,
    pub believability_score: f64,
    pub category: String,
    pub urgency: Urgency,
}

/// Generate an excuse and persist it for the user
#[utoipa::path(
    post,
    path = "/api/generate-excuse",
    request_body = GenerateExcuseRequest,
    responses(
        (status = 200, description = "Excuse generated and saved", body = GenerateExcuseResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "excuses"
)]
#[post("/api/generate-excuse")]
pub async fn generate_excuse(
    state: web::Data<AppState>,
    body: web::Json<GenerateExcuseRequest>,
) -> Result<impl Responder, ApiError> {
    let body = body.into_inner();

    tracing::info!(
        category = %body.category,
        urgency = %body.urgency,
        language = %body.language,
        "Generating excuse"
    );

    let request = ExcuseRequest {
        category: body.category,
        scenario: body.scenario,
        urgency: body.urgency,
        language: body.language,
    };

    let mut rng = rand::rng();
    let generated = state.generator.generate(&mut rng, &request).await;

    let user = state.users.ensure_exists(body.user_id).await?;

    let excuse_id = state
        .excuses
        .insert(&NewExcuse {
            user_id: user.id,
            category: generated.category.clone(),
            scenario: generated.scenario.clone(),
            excuse_text: generated.text.clone(),
            believability_score: generated.believability_score,
            urgency_level: generated.urgency.as_str().to_string(),
            language: request.language.as_str().to_string(),
        })
        .await?;

    Ok(HttpResponse::Ok().json(GenerateExcuseResponse {
        success: true,
        excuse_id,
        excuse: generated.text,
        believability_score: generated.believability_score,
        category: generated.category,
        urgency: generated.urgency,
    }))
}

/// Query parameters for the excuse history listing
#[derive(Debug, Deserialize, IntoParams)]
pub struct HistoryParams {
    /// User whose excuses to list (default: 1)
    pub user_id: Option<i64>,
    /// Page number (1-indexed, default: 1)
    pub page: Option<u32>,
    /// Page size (default: 10, max: 100)
    pub per_page: Option<u32>,
}

/// Summary of one excuse in the history listing
#[derive(Debug, Serialize, ToSchema)]
pub struct ExcuseSummary {
    pub id: i64,
    pub category: String,
    pub scenario: String,
    pub excuse_text: String,
    pub believability_score: f64,
    pub times_used: i32,
    pub is_favorite: bool,
    pub created_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HistoryResponse {
    pub success: bool,
    pub excuses: Vec<ExcuseSummary>,
    pub total: i64,
    pub pages: u32,
    pub current_page: u32,
}

/// List a user's excuses, newest first
#[utoipa::path(
    get,
    path = "/api/excuse-history",
    params(HistoryParams),
    responses(
        (status = 200, description = "Excuse history retrieved", body = HistoryResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "excuses"
)]
#[get("/api/excuse-history")]
pub async fn excuse_history(
    state: web::Data<AppState>,
    query: web::Query<HistoryParams>,
) -> Result<impl Responder, ApiError> {
    let paginated = state
        .excuses
        .list(ListExcusesQuery {
            user_id: query.user_id.unwrap_or(1),
            page: query.page.unwrap_or(1),
            per_page: query.per_page.unwrap_or(10),
        })
        .await?;

    let excuses: Vec<ExcuseSummary> = paginated
        .excuses
        .into_iter()
        .map(|row| ExcuseSummary {
            id: row.id,
            category: row.category,
            scenario: row.scenario,
            excuse_text: row.excuse_text,
            believability_score: row.believability_score,
            times_used: row.times_used,
            is_favorite: row.is_favorite,
            created_at: row.created_at.to_rfc3339(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(HistoryResponse {
        success: true,
        excuses,
        total: paginated.total_count,
        pages: paginated.total_pages,
        current_page: paginated.page,
    }))
}

/// Configure excuse routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_excuse).service(excuse_history);
}
