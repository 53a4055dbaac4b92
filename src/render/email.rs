//! Fake email screenshot template
//!
//! Fixed 800x600 layout: a header band with From/To/Subject/Date fields,
//! the excuse text word-wrapped at 70 characters, and a signature block.

use chrono::{DateTime, Utc};

use crate::db::models::ExcuseRow;
use crate::render::layout::{title_case, wrap_text, DocumentLayout};

const PAGE_WIDTH: f32 = 800.0;
const PAGE_HEIGHT: f32 = 600.0;
const HEADER_BAND_HEIGHT: f32 = 120.0;

/// Body text wraps at this character width.
pub const BODY_WRAP_WIDTH: usize = 70;

const BODY_START_Y: f32 = 150.0;
const BODY_LINE_STEP: f32 = 30.0;

pub fn email_layout(excuse: &ExcuseRow, now: DateTime<Utc>) -> DocumentLayout {
    let mut layout =
        DocumentLayout::new(PAGE_WIDTH, PAGE_HEIGHT).with_header_band(HEADER_BAND_HEIGHT);

    // Header fields
    layout.bold_text(20.0, 20.0, 12.0, "From: emergency@company.com");
    layout.text(20.0, 45.0, 12.0, "To: manager@workplace.com");
    layout.bold_text(
        20.0,
        70.0,
        12.0,
        format!("Subject: {} - Unable to attend", title_case(&excuse.category)),
    );
    layout.text(
        20.0,
        95.0,
        12.0,
        format!("Date: {}", now.format("%Y-%m-%d %H:%M")),
    );

    // Body
    let mut y = BODY_START_Y;
    for line in wrap_text(&excuse.excuse_text, BODY_WRAP_WIDTH) {
        layout.text(30.0, y, 12.0, line);
        y += BODY_LINE_STEP;
    }

    // Signature block
    layout.text(30.0, y + 50.0, 12.0, "Best regards,");
    layout.text(30.0, y + 80.0, 12.0, "Emergency Contact");

    layout
}
