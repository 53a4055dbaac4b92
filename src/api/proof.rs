//! REST API endpoint for proof document generation

use actix_web::{post, web, HttpResponse, Responder};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::db::DbError;
use crate::model::ProofType;

#[derive(Debug, Deserialize, ToSchema)]
pub struct GenerateProofRequest {
    pub excuse_id: i64,
    #[serde(default)]
    pub proof_type: ProofType,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GenerateProofResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proof_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateProofResponse {
    fn failure(error: &str) -> Self {
        Self {
            success: false,
            proof_path: None,
            download_url: None,
            error: Some(error.to_string()),
        }
    }
}

/// Render a proof document for an excuse
///
/// Every proof type, including the email layout, is written as a PDF
/// file; `download_url` always points at a `.pdf`. Unknown excuse ids and
/// renderer failures are business failures: the request itself succeeds
/// with `success: false` and no proof row is written.
#[utoipa::path(
    post,
    path = "/api/generate-proof",
    request_body = GenerateProofRequest,
    responses(
        (status = 200, description = "Proof generated, or structured failure", body = GenerateProofResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "proofs"
)]
#[post("/api/generate-proof")]
pub async fn generate_proof(
    state: web::Data<AppState>,
    body: web::Json<GenerateProofRequest>,
) -> Result<impl Responder, ApiError> {
    let request = body.into_inner();

    let excuse = match state.excuses.get_by_id(request.excuse_id).await {
        Ok(excuse) => excuse,
        Err(DbError::NotFound(_)) => {
            return Ok(HttpResponse::Ok().json(GenerateProofResponse::failure("Excuse not found")));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(
        excuse_id = excuse.id,
        proof_type = request.proof_type.as_str(),
        "Generating proof document"
    );

    let mut rng = rand::rng();
    let path = match state
        .renderer
        .render(&excuse, request.proof_type, Utc::now(), &mut rng)
    {
        Ok(path) => path,
        Err(e) => {
            tracing::error!(error = %e, excuse_id = excuse.id, "Proof rendering failed");
            return Ok(HttpResponse::Ok()
                .json(GenerateProofResponse::failure("Failed to generate proof")));
        }
    };

    let proof_path = path.to_string_lossy().into_owned();
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let proof = state
        .proofs
        .insert(excuse.id, request.proof_type.as_str(), &proof_path)
        .await?;
    state.excuses.mark_proof_generated(excuse.id).await?;

    tracing::info!(proof_id = proof.id, excuse_id = excuse.id, "Proof document recorded");

    Ok(HttpResponse::Ok().json(GenerateProofResponse {
        success: true,
        proof_path: Some(proof_path),
        download_url: Some(format!("/static/proofs/{filename}")),
        error: None,
    }))
}

/// Configure proof routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(generate_proof);
}
