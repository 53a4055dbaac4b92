//! Emergency service receipt template
//!
//! Single US-letter page with a random receipt number and service ID.
//! The excuse text is truncated to 60 characters in the description field.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::db::models::ExcuseRow;
use crate::render::layout::{title_case, truncate_with_ellipsis, DocumentLayout};

// US letter in points
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;

const LEFT_MARGIN: f32 = 100.0;

/// Maximum excuse characters shown in the description field.
pub const DESCRIPTION_MAX_CHARS: usize = 60;

pub fn receipt_layout<R: Rng + ?Sized>(
    excuse: &ExcuseRow,
    now: DateTime<Utc>,
    rng: &mut R,
) -> DocumentLayout {
    let receipt_number: u32 = rng.random_range(100_000..=999_999);
    let service_id: u32 = rng.random_range(1_000..=9_999);

    let mut layout = DocumentLayout::new(PAGE_WIDTH, PAGE_HEIGHT);

    layout.bold_text(LEFT_MARGIN, 100.0, 16.0, "EMERGENCY SERVICE RECEIPT");

    layout.text(
        LEFT_MARGIN,
        130.0,
        12.0,
        format!("Date: {}", now.format("%Y-%m-%d %H:%M")),
    );
    layout.text(
        LEFT_MARGIN,
        150.0,
        12.0,
        format!("Receipt #: ESR-{receipt_number}"),
    );
    layout.text(
        LEFT_MARGIN,
        170.0,
        12.0,
        format!("Service ID: SVC-{service_id}"),
    );

    layout.bold_text(LEFT_MARGIN, 210.0, 12.0, "Service Details:");
    layout.text(
        LEFT_MARGIN,
        235.0,
        11.0,
        format!(
            "Category: {} Emergency Response",
            title_case(&excuse.category)
        ),
    );
    layout.text(
        LEFT_MARGIN,
        255.0,
        11.0,
        format!(
            "Description: {}",
            truncate_with_ellipsis(&excuse.excuse_text, DESCRIPTION_MAX_CHARS)
        ),
    );
    layout.text(LEFT_MARGIN, 275.0, 11.0, "Status: Service Completed");
    layout.text(LEFT_MARGIN, 295.0, 11.0, "Priority: Urgent");
    layout.text(
        LEFT_MARGIN,
        315.0,
        11.0,
        "Amount: No Charge (Emergency Service)",
    );

    layout.bold_text(LEFT_MARGIN, 360.0, 10.0, "Emergency Services Provider");
    layout.bold_text(
        LEFT_MARGIN,
        380.0,
        10.0,
        "Available 24/7 for urgent situations",
    );
    layout.bold_text(
        LEFT_MARGIN,
        400.0,
        10.0,
        "Thank you for using our emergency response service",
    );

    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::test_excuse;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 30, 0).unwrap()
    }

    fn description_field(layout: &DocumentLayout) -> &str {
        layout
            .fields
            .iter()
            .find(|f| f.text.starts_with("Description: "))
            .map(|f| f.text.as_str())
            .unwrap()
    }

    #[test]
    fn description_truncates_long_excuse_text() {
        let long = "a".repeat(500);
        let excuse = test_excuse("work", &long);
        let mut rng = StdRng::seed_from_u64(21);
        let layout = receipt_layout(&excuse, fixed_now(), &mut rng);

        let description = description_field(&layout);
        let body = description.strip_prefix("Description: ").unwrap();
        assert_eq!(body.len(), DESCRIPTION_MAX_CHARS + 3);
        assert!(body.ends_with("..."));
        assert!(body.starts_with(&"a".repeat(DESCRIPTION_MAX_CHARS)));
    }

    #[test]
    fn identifiers_use_expected_ranges() {
        let excuse = test_excuse("work", "Feeling unwell.");
        let mut rng = StdRng::seed_from_u64(22);
        for _ in 0..20 {
            let layout = receipt_layout(&excuse, fixed_now(), &mut rng);
            let text = layout.full_text();

            let receipt_no: u32 = text
                .lines()
                .find_map(|l| l.strip_prefix("Receipt #: ESR-"))
                .unwrap()
                .parse()
                .unwrap();
            assert!((100_000..=999_999).contains(&receipt_no));

            let service_id: u32 = text
                .lines()
                .find_map(|l| l.strip_prefix("Service ID: SVC-"))
                .unwrap()
                .parse()
                .unwrap();
            assert!((1_000..=9_999).contains(&service_id));
        }
    }

    #[test]
    fn category_line_is_title_cased() {
        let excuse = test_excuse("family event", "Need to be away.");
        let mut rng = StdRng::seed_from_u64(23);
        let layout = receipt_layout(&excuse, fixed_now(), &mut rng);
        assert!(layout
            .full_text()
            .contains("Category: Family Event Emergency Response"));
    }
}
