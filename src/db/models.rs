//! Database models for users, excuses and proof documents

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database representation of a user
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub phone: Option<String>,
    pub preferences: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Database representation of an excuse
#[derive(Debug, Clone, FromRow)]
pub struct ExcuseRow {
    pub id: i64,
    pub user_id: i64,
    pub category: String,
    pub scenario: String,
    pub excuse_text: String,
    pub believability_score: f64,
    pub urgency_level: String,
    pub language: String,
    pub proof_generated: bool,
    pub times_used: i32,
    pub effectiveness_rating: f64,
    pub is_favorite: bool,
    pub created_at: DateTime<Utc>,
    pub last_used: Option<DateTime<Utc>>,
}

/// Fields for inserting a freshly generated excuse
#[derive(Debug, Clone)]
pub struct NewExcuse {
    pub user_id: i64,
    pub category: String,
    pub scenario: String,
    pub excuse_text: String,
    pub believability_score: f64,
    pub urgency_level: String,
    pub language: String,
}

/// Database representation of a proof document
#[derive(Debug, Clone, FromRow)]
pub struct ProofDocumentRow {
    pub id: i64,
    pub excuse_id: i64,
    pub document_type: String,
    pub file_path: String,
    pub generated_at: DateTime<Utc>,
}

/// Query parameters for listing a user's excuses
#[derive(Debug, Clone)]
pub struct ListExcusesQuery {
    pub user_id: i64,
    pub page: u32,
    pub per_page: u32,
}

/// Paginated excuse listing
#[derive(Debug, Clone)]
pub struct PaginatedExcuses {
    pub excuses: Vec<ExcuseRow>,
    pub total_count: i64,
    pub total_pages: u32,
    pub page: u32,
}

/// Fixture row for template and renderer tests.
#[cfg(test)]
pub fn test_excuse(category: &str, text: &str) -> ExcuseRow {
    ExcuseRow {
        id: 1,
        user_id: 1,
        category: category.to_string(),
        scenario: "general".to_string(),
        excuse_text: text.to_string(),
        believability_score: 7.0,
        urgency_level: "medium".to_string(),
        language: "en".to_string(),
        proof_generated: false,
        times_used: 0,
        effectiveness_rating: 0.0,
        is_favorite: false,
        created_at: Utc::now(),
        last_used: None,
    }
}
