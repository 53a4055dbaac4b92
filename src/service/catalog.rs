//! Static fallback excuse catalog
//!
//! Loaded once at startup from a JSON file (language -> category -> urgency
//! -> candidate texts) and immutable afterwards. This is the path used when
//! no LLM credential is configured or the remote call fails.

use std::collections::HashMap;
use std::path::Path;

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::model::{GeneratedExcuse, Language, Urgency};

/// Candidate lists keyed by language, category and urgency.
type CatalogTable = HashMap<String, HashMap<String, HashMap<String, Vec<String>>>>;

/// Last-resort text when a category has neither the requested urgency nor
/// a medium list.
const DEFAULT_EXCUSE: &str = "I need to handle something important today.";

/// Sentinel returned when candidate selection itself fails (empty list).
const SENTINEL_EXCUSE: &str = "I have an unexpected situation that requires my attention.";
const SENTINEL_SCORE: f64 = 7.0;

/// Jitter applied on top of the urgency base score.
const JITTER_RANGE: std::ops::Range<f64> = -0.8..1.2;

/// Fallback scores are clamped into this band.
const SCORE_FLOOR: f64 = 5.0;
const SCORE_CEILING: f64 = 10.0;

#[derive(Debug, Clone)]
pub struct ExcuseCatalog {
    table: CatalogTable,
}

impl ExcuseCatalog {
    /// Load the catalog from a JSON file.
    ///
    /// A missing or unparsable file degrades to a minimal built-in English
    /// work table with a warning, never an error.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str::<CatalogTable>(&contents) {
                Ok(table) => {
                    let languages = table.len();
                    tracing::info!(path = %path.display(), languages, "Loaded excuse catalog");
                    Self { table }
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Invalid excuse catalog, using built-in fallbacks");
                    Self::builtin()
                }
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Excuse catalog not found, using built-in fallbacks");
                Self::builtin()
            }
        }
    }

    /// Minimal catalog used when no file is available.
    pub fn builtin() -> Self {
        let mut urgencies = HashMap::new();
        urgencies.insert(
            "medium".to_string(),
            vec!["I'm not feeling well and need to rest today.".to_string()],
        );
        urgencies.insert(
            "high".to_string(),
            vec!["I have an emergency that requires immediate attention.".to_string()],
        );
        urgencies.insert(
            "low".to_string(),
            vec!["I have some personal matters to attend to.".to_string()],
        );

        let mut categories = HashMap::new();
        categories.insert("work".to_string(), urgencies);

        let mut table = HashMap::new();
        table.insert("en".to_string(), categories);

        Self { table }
    }

    #[cfg(test)]
    pub fn from_table(table: CatalogTable) -> Self {
        Self { table }
    }

    /// Pick one candidate for the request, degrading gracefully at every
    /// lookup level: unknown language -> en, unknown category -> work,
    /// unlisted urgency -> medium -> a hardcoded default.
    ///
    /// The score is the urgency base (6.5 / 7.5 / 8.5) plus uniform jitter
    /// in [-0.8, 1.2), clamped into [5.0, 10.0].
    pub fn pick<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        category: &str,
        scenario: &str,
        urgency: Urgency,
        language: Language,
    ) -> GeneratedExcuse {
        let resolved = self
            .table
            .get(language.as_str())
            .or_else(|| self.table.get("en"))
            .and_then(|languages| {
                languages
                    .get(category)
                    .or_else(|| languages.get("work"))
            })
            .and_then(|categories| {
                categories
                    .get(urgency.as_str())
                    .or_else(|| categories.get("medium"))
            });

        let default_options = vec![DEFAULT_EXCUSE.to_string()];
        let options = resolved.unwrap_or(&default_options);

        match options.choose(rng) {
            Some(text) => {
                let base = match urgency {
                    Urgency::Low => 6.5,
                    Urgency::Medium => 7.5,
                    Urgency::High => 8.5,
                };
                let score = (base + rng.random_range(JITTER_RANGE)).clamp(SCORE_FLOOR, SCORE_CEILING);

                tracing::debug!(
                    category,
                    urgency = %urgency,
                    language = %language,
                    "Selected fallback excuse"
                );

                GeneratedExcuse {
                    text: text.clone(),
                    believability_score: score,
                    category: category.to_string(),
                    scenario: scenario.to_string(),
                    urgency,
                }
            }
            None => {
                tracing::warn!(category, urgency = %urgency, "Empty candidate list, using sentinel excuse");
                GeneratedExcuse {
                    text: SENTINEL_EXCUSE.to_string(),
                    believability_score: SENTINEL_SCORE,
                    category: category.to_string(),
                    scenario: scenario.to_string(),
                    urgency,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_catalog() -> ExcuseCatalog {
        let mut high = HashMap::new();
        high.insert(
            "high".to_string(),
            vec![
                "My car broke down on the highway.".to_string(),
                "There is a family emergency I must deal with.".to_string(),
            ],
        );
        high.insert(
            "medium".to_string(),
            vec!["I have a doctor appointment this afternoon.".to_string()],
        );

        let mut categories = HashMap::new();
        categories.insert("work".to_string(), high);

        let mut table = HashMap::new();
        table.insert("en".to_string(), categories);
        ExcuseCatalog::from_table(table)
    }

    #[test]
    fn picks_only_from_resolved_list() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let excuse = catalog.pick(&mut rng, "work", "x", Urgency::High, Language::En);
            assert!(
                excuse.text == "My car broke down on the highway."
                    || excuse.text == "There is a family emergency I must deal with."
            );
            assert!((5.0..=10.0).contains(&excuse.believability_score));
        }
    }

    #[test]
    fn unknown_category_degrades_to_work() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let excuse = catalog.pick(&mut rng, "quantum", "x", Urgency::Medium, Language::En);
        assert_eq!(excuse.text, "I have a doctor appointment this afternoon.");
        assert_eq!(excuse.category, "quantum");
    }

    #[test]
    fn missing_language_degrades_to_english() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(2);
        let excuse = catalog.pick(&mut rng, "work", "x", Urgency::Medium, Language::De);
        assert_eq!(excuse.text, "I have a doctor appointment this afternoon.");
    }

    #[test]
    fn unlisted_urgency_degrades_to_medium() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(3);
        // The sample table has no "low" list.
        let excuse = catalog.pick(&mut rng, "work", "x", Urgency::Low, Language::En);
        assert_eq!(excuse.text, "I have a doctor appointment this afternoon.");
    }

    #[test]
    fn bare_category_uses_hardcoded_default() {
        let mut table: HashMap<String, HashMap<String, HashMap<String, Vec<String>>>> =
            HashMap::new();
        table.insert("en".to_string(), {
            let mut c = HashMap::new();
            c.insert("work".to_string(), HashMap::new());
            c
        });
        let catalog = ExcuseCatalog::from_table(table);
        let mut rng = StdRng::seed_from_u64(4);
        let excuse = catalog.pick(&mut rng, "work", "x", Urgency::High, Language::En);
        assert_eq!(excuse.text, DEFAULT_EXCUSE);
    }

    #[test]
    fn empty_candidate_list_returns_sentinel() {
        let mut table: HashMap<String, HashMap<String, HashMap<String, Vec<String>>>> =
            HashMap::new();
        table.insert("en".to_string(), {
            let mut c = HashMap::new();
            let mut u = HashMap::new();
            u.insert("medium".to_string(), Vec::new());
            c.insert("work".to_string(), u);
            c
        });
        let catalog = ExcuseCatalog::from_table(table);
        let mut rng = StdRng::seed_from_u64(5);
        let excuse = catalog.pick(&mut rng, "work", "x", Urgency::Medium, Language::En);
        assert_eq!(excuse.text, SENTINEL_EXCUSE);
        assert_eq!(excuse.believability_score, SENTINEL_SCORE);
    }

    #[test]
    fn score_band_by_urgency() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(6);
        for _ in 0..200 {
            let excuse = catalog.pick(&mut rng, "work", "x", Urgency::High, Language::En);
            // 8.5 base, jitter in [-0.8, 1.2), ceiling 10.0
            assert!((7.7..=10.0).contains(&excuse.believability_score));
        }
    }

    #[test]
    fn shipped_catalog_file_parses_and_covers_languages() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("excuses.json");
        let catalog = ExcuseCatalog::load(&path);
        let mut rng = StdRng::seed_from_u64(9);
        // German table is only present when the file actually loaded.
        let excuse = catalog.pick(&mut rng, "work", "x", Urgency::High, Language::De);
        assert!(excuse.text.contains("Notfall"));
    }

    #[test]
    fn builtin_catalog_covers_all_urgencies() {
        let catalog = ExcuseCatalog::builtin();
        let mut rng = StdRng::seed_from_u64(8);
        for urgency in [Urgency::Low, Urgency::Medium, Urgency::High] {
            let excuse = catalog.pick(&mut rng, "work", "x", urgency, Language::En);
            assert_ne!(excuse.text, DEFAULT_EXCUSE);
        }
    }
}
