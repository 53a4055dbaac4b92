//! Proof document rendering
//!
//! Three template-fillers (email, receipt, medical note) build data-driven
//! layouts which the PDF backend writes to disk. Filenames embed the
//! excuse id and a second-precision timestamp, so concurrent renders do
//! not collide.

pub mod email;
pub mod layout;
pub mod medical;
pub mod pdf;
pub mod receipt;

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::db::models::ExcuseRow;
use crate::model::ProofType;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),

    #[error("rendering backend error: {0}")]
    Backend(String),
}

/// Renders proof documents into a fixed proofs directory.
#[derive(Clone)]
pub struct ProofRenderer {
    proofs_dir: PathBuf,
}

impl ProofRenderer {
    pub fn new(proofs_dir: impl Into<PathBuf>) -> Self {
        Self {
            proofs_dir: proofs_dir.into(),
        }
    }

    /// Render one proof document for the excuse, returning the written
    /// file path.
    pub fn render<R: Rng + ?Sized>(
        &self,
        excuse: &ExcuseRow,
        proof_type: ProofType,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<PathBuf, RenderError> {
        let layout = match proof_type {
            ProofType::Email => email::email_layout(excuse, now),
            ProofType::Receipt => receipt::receipt_layout(excuse, now, rng),
            ProofType::MedicalNote => medical::medical_note_layout(excuse, now, rng),
        };

        std::fs::create_dir_all(&self.proofs_dir)?;

        let filename = format!(
            "{}_{}_{}.pdf",
            proof_type.file_prefix(),
            excuse.id,
            now.format("%Y%m%d_%H%M%S")
        );
        let path = self.proofs_dir.join(filename);

        pdf::render_pdf(&layout, proof_type.as_str(), &path)?;

        tracing::info!(
            excuse_id = excuse.id,
            proof_type = proof_type.as_str(),
            path = %path.display(),
            "Rendered proof document"
        );

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::test_excuse;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn writes_files_with_id_and_timestamp_in_name() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = ProofRenderer::new(dir.path());
        let mut excuse = test_excuse("work", "I am unwell and staying home to recover.");
        excuse.id = 42;
        let now = Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 5).unwrap();
        let mut rng = StdRng::seed_from_u64(41);

        for (proof_type, prefix) in [
            (ProofType::Email, "email"),
            (ProofType::Receipt, "receipt"),
            (ProofType::MedicalNote, "medical"),
        ] {
            let path = renderer.render(&excuse, proof_type, now, &mut rng).unwrap();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert_eq!(name, format!("{prefix}_42_20260314_093005.pdf"));
            assert!(path.exists());
        }
    }

    #[test]
    fn creates_proofs_directory_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("static").join("proofs");
        let renderer = ProofRenderer::new(&nested);
        let excuse = test_excuse("work", "Short.");
        let now = Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        renderer
            .render(&excuse, ProofType::Email, now, &mut rng)
            .unwrap();
        assert!(nested.is_dir());
    }
}
