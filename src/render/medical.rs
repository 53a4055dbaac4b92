//! Medical consultation note template
//!
//! Single US-letter page embedding the full excuse text as the condition,
//! a random reference and license number, and a follow-up review date
//! three days after generation.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::db::models::ExcuseRow;
use crate::render::layout::DocumentLayout;

// US letter in points
const PAGE_WIDTH: f32 = 612.0;
const PAGE_HEIGHT: f32 = 792.0;

const LEFT_MARGIN: f32 = 100.0;

/// Days until the stated follow-up review.
pub const REVIEW_OFFSET_DAYS: i64 = 3;

pub fn medical_note_layout<R: Rng + ?Sized>(
    excuse: &ExcuseRow,
    now: DateTime<Utc>,
    rng: &mut R,
) -> DocumentLayout {
    let reference: u32 = rng.random_range(10_000..=99_999);
    let license: u32 = rng.random_range(100_000..=999_999);
    let next_review = now + Duration::days(REVIEW_OFFSET_DAYS);

    let mut layout = DocumentLayout::new(PAGE_WIDTH, PAGE_HEIGHT);

    layout.bold_text(LEFT_MARGIN, 100.0, 16.0, "MEDICAL CONSULTATION NOTE");
    layout.bold_text(LEFT_MARGIN, 130.0, 12.0, "Healthcare Services Center");
    layout.bold_text(LEFT_MARGIN, 150.0, 12.0, "Professional Medical Care");

    layout.text(
        LEFT_MARGIN,
        180.0,
        11.0,
        format!("Date: {}", now.format("%Y-%m-%d")),
    );
    layout.text(
        LEFT_MARGIN,
        200.0,
        11.0,
        format!("Time: {}", now.format("%H:%M")),
    );
    layout.text(
        LEFT_MARGIN,
        220.0,
        11.0,
        format!("Reference: MED-{reference}"),
    );

    layout.bold_text(LEFT_MARGIN, 260.0, 12.0, "Medical Assessment:");
    layout.text(
        LEFT_MARGIN,
        285.0,
        11.0,
        "Patient consultation has been completed.",
    );
    layout.text(
        LEFT_MARGIN,
        305.0,
        11.0,
        format!("Condition: {}", excuse.excuse_text),
    );
    layout.text(
        LEFT_MARGIN,
        325.0,
        11.0,
        "Medical recommendation: Rest and recovery as advised",
    );
    layout.text(LEFT_MARGIN, 345.0, 11.0, "Follow-up: As medically necessary");
    layout.text(
        LEFT_MARGIN,
        365.0,
        11.0,
        format!("Next review: {}", next_review.format("%Y-%m-%d")),
    );

    layout.text(LEFT_MARGIN, 420.0, 10.0, "Healthcare Professional");
    layout.text(LEFT_MARGIN, 440.0, 10.0, "Licensed Medical Provider");
    layout.text(LEFT_MARGIN, 460.0, 10.0, format!("License #: MP-{license}"));

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
        Utc.with_ymd_and_hms(2026, 12, 30, 16, 45, 0).unwrap()
    }

    #[test]
    fn condition_embeds_full_excuse_text() {
        let text = "I woke up with a severe migraine and my doctor advised a full day of rest.";
        let excuse = test_excuse("health", text);
        let mut rng = StdRng::seed_from_u64(31);
        let layout = medical_note_layout(&excuse, fixed_now(), &mut rng);
        assert!(layout.full_text().contains(&format!("Condition: {text}")));
    }

    #[test]
    fn next_review_is_three_days_ahead() {
        // Crosses a year boundary on purpose.
        let excuse = test_excuse("health", "Resting.");
        let mut rng = StdRng::seed_from_u64(32);
        let layout = medical_note_layout(&excuse, fixed_now(), &mut rng);
        assert!(layout.full_text().contains("Next review: 2027-01-02"));
    }

    #[test]
    fn reference_and_license_use_expected_ranges() {
        let excuse = test_excuse("health", "Resting.");
        let mut rng = StdRng::seed_from_u64(33);
        for _ in 0..20 {
            let layout = medical_note_layout(&excuse, fixed_now(), &mut rng);
            let text = layout.full_text();

            let reference: u32 = text
                .lines()
                .find_map(|l| l.strip_prefix("Reference: MED-"))
                .unwrap()
                .parse()
                .unwrap();
            assert!((10_000..=99_999).contains(&reference));

            let license: u32 = text
                .lines()
                .find_map(|l| l.strip_prefix("License #: MP-"))
                .unwrap()
                .parse()
                .unwrap();
            assert!((100_000..=999_999).contains(&license));
        }
    }
}
