//! OpenAPI specification endpoints

use actix_web::{get, HttpResponse, Responder};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::excuse::generate_excuse,
        crate::api::excuse::excuse_history,
        crate::api::proof::generate_proof,
        crate::api::voice::voice_excuse,
        crate::api::health::liveness,
        crate::api::health::readiness,
    ),
    components(schemas(
        crate::api::excuse::GenerateExcuseRequest,
        crate::api::excuse::GenerateExcuseResponse,
        crate::api::excuse::ExcuseSummary,
        crate::api::excuse::HistoryResponse,
        crate::api::proof::GenerateProofRequest,
        crate::api::proof::GenerateProofResponse,
        crate::api::voice::VoiceExcuseRequest,
        crate::api::voice::VoiceExcuseResponse,
        crate::model::Urgency,
        crate::model::Language,
        crate::model::ProofType,
    )),
    tags(
        (name = "excuses", description = "Excuse generation and history"),
        (name = "proofs", description = "Proof document rendering"),
        (name = "voice", description = "Speech synthesis"),
        (name = "health", description = "Service health probes")
    )
)]
pub struct ApiDoc;

/// Serve OpenAPI JSON specification
#[get("/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Serve OpenAPI YAML specification
#[get("/openapi.yaml")]
pub async fn openapi_yaml() -> impl Responder {
    match ApiDoc::openapi().to_yaml() {
        Ok(yaml) => HttpResponse::Ok().content_type("text/yaml").body(yaml),
        Err(e) => {
            tracing::error!(error = %e, "Failed to serialize OpenAPI spec");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Configure OpenAPI routes
pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(openapi_json).service(openapi_yaml);
}
