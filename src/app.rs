//! Application state and service initialization
//!
//! Centralizes service construction and dependency injection so handlers
//! receive one `web::Data<AppState>`.

use sqlx::PgPool;

use crate::db::repository::{ExcuseRepository, ProofDocumentRepository, UserRepository};
use crate::model::Config;
use crate::render::ProofRenderer;
use crate::service::{ExcuseCatalog, ExcuseGenerator, LlmClient, SpeechClient};

/// Application state shared across workers.
pub struct AppState {
    pub config: Config,
    pub db_pool: PgPool,
    pub generator: ExcuseGenerator,
    pub renderer: ProofRenderer,
    /// Present only when a TTS backend is configured.
    pub speech: Option<SpeechClient>,
    pub users: UserRepository,
    pub excuses: ExcuseRepository,
    pub proofs: ProofDocumentRepository,
}

impl AppState {
    /// Initialize all services and build application state.
    ///
    /// 1. Database connection and schema bootstrap
    /// 2. Fallback catalog load (degrades to built-in table)
    /// 3. Optional LLM client (absent key means fallback-only mode)
    /// 4. Optional speech client
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let db_pool = crate::db::create_pool(&config.database_url)
            .await
            .map_err(|e| AppError::DatabaseInit(e.to_string()))?;

        crate::db::init_schema(&db_pool)
            .await
            .map_err(|e| AppError::DatabaseInit(e.to_string()))?;

        let catalog = ExcuseCatalog::load(&config.excuses_path);

        let llm = match config.openai_api_key.as_deref() {
            Some(api_key) => {
                tracing::info!(model = %config.model, "LLM generation enabled");
                Some(LlmClient::new(api_key, &config.model))
            }
            None => {
                tracing::info!("No OPENAI_API_KEY set, excuses come from the fallback catalog");
                None
            }
        };

        let speech = match config.tts_base_url.clone() {
            Some(base_url) => {
                tracing::info!(base_url = %base_url, "Speech synthesis enabled");
                Some(SpeechClient::new(base_url))
            }
            None => {
                tracing::info!("No TTS_BASE_URL set, voice endpoint disabled");
                None
            }
        };

        let generator = ExcuseGenerator::new(llm, catalog);
        let renderer = ProofRenderer::new(config.proofs_dir());

        Ok(Self {
            db_pool: db_pool.clone(),
            generator,
            renderer,
            speech,
            users: UserRepository::new(db_pool.clone()),
            excuses: ExcuseRepository::new(db_pool.clone()),
            proofs: ProofDocumentRepository::new(db_pool),
            config,
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Database initialization failed
    #[error("Database initialization failed: {0}")]
    DatabaseInit(String),
}
