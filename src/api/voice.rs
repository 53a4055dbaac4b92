//! REST API endpoint for speech synthesis of excuses

use actix_web::{post, web, HttpResponse, Responder};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::error::ApiError;
use crate::app::AppState;
use crate::db::DbError;
use crate::model::Language;

#[derive(Debug, Deserialize, ToSchema)]
pub struct VoiceExcuseRequest {
    pub excuse_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VoiceExcuseResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl VoiceExcuseResponse {
    fn failure(error: String) -> Self {
        Self {
            success: false,
            audio_url: None,
            message: None,
            error: Some(error),
        }
    }
}

/// Synthesize speech for an excuse
///
/// Entirely unavailable when no TTS backend is configured; that case is a
/// structured failure naming the missing configuration.
#[utoipa::path(
    post,
    path = "/api/voice-excuse",
    request_body = VoiceExcuseRequest,
    responses(
        (status = 200, description = "Audio generated, or structured failure", body = VoiceExcuseResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "voice"
)]
#[post("/api/voice-excuse")]
pub async fn voice_excuse(
    state: web::Data<AppState>,
    body: web::Json<VoiceExcuseRequest>,
) -> Result<impl Responder, ApiError> {
    let excuse_id = body.excuse_id;

    let excuse = match state.excuses.get_by_id(excuse_id).await {
        Ok(excuse) => excuse,
        Err(DbError::NotFound(_)) => {
            return Ok(HttpResponse::Ok()
                .json(VoiceExcuseResponse::failure("Excuse not found".to_string())));
        }
        Err(e) => return Err(e.into()),
    };

    let Some(speech) = state.speech.as_ref() else {
        return Ok(HttpResponse::Ok().json(VoiceExcuseResponse::failure(
            "Voice features not available. Set TTS_BASE_URL to enable speech synthesis."
                .to_string(),
        )));
    };

    // Non-catalog languages fall back to English for synthesis.
    let language = Language::from_code(&excuse.language);

    tracing::info!(excuse_id, language = %language, "Synthesizing excuse audio");

    let audio = match speech.synthesize(&excuse.excuse_text, language).await {
        Ok(audio) => audio,
        Err(e) => {
            tracing::error!(error = %e, excuse_id, "Speech synthesis failed");
            return Ok(HttpResponse::Ok().json(VoiceExcuseResponse::failure(format!(
                "Voice generation failed: {e}"
            ))));
        }
    };

    let audio_dir = state.config.audio_dir();
    let filename = format!("excuse_{}_{}.mp3", excuse_id, Utc::now().format("%Y%m%d_%H%M%S"));
    let path = audio_dir.join(&filename);

    if let Err(e) = std::fs::create_dir_all(&audio_dir).and_then(|_| std::fs::write(&path, &audio))
    {
        tracing::error!(error = %e, path = %path.display(), "Failed to write audio file");
        return Ok(HttpResponse::Ok().json(VoiceExcuseResponse::failure(format!(
            "Voice generation failed: {e}"
        ))));
    }

    tracing::info!(path = %path.display(), "Voice file generated");

    Ok(HttpResponse::Ok().json(VoiceExcuseResponse {
        success: true,
        audio_url: Some(format!("/static/audio/{filename}")),
        message: Some(format!("Voice file generated successfully in {language}!")),
        error: None,
    }))
}

/// Configure voice routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(voice_excuse);
}
