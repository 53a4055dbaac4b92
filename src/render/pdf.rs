//! PDF rendering backend
//!
//! Draws a `DocumentLayout` onto a single PDF page with the builtin
//! Helvetica fonts. Layout coordinates are points from the top-left; PDF
//! space is bottom-up, so y is flipped here.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Color, Line, Mm, PdfDocument, Point, Pt, Rgb};

use crate::render::layout::DocumentLayout;
use crate::render::RenderError;

pub fn render_pdf(layout: &DocumentLayout, title: &str, path: &Path) -> Result<(), RenderError> {
    let width = Mm::from(Pt(layout.width));
    let height = Mm::from(Pt(layout.height));

    let (doc, page, layer_index) = PdfDocument::new(title, width, height, "content");
    let layer = doc.get_page(page).get_layer(layer_index);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Backend(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| RenderError::Backend(e.to_string()))?;

    if let Some(band_height) = layout.header_band {
        // Stroke the band outline across the top of the page
        layer.set_outline_color(Color::Rgb(Rgb::new(0.87, 0.89, 0.90, None)));
        let band = Line {
            points: vec![
                (point(0.0, 0.0, layout.height), false),
                (point(layout.width, 0.0, layout.height), false),
                (point(layout.width, band_height, layout.height), false),
                (point(0.0, band_height, layout.height), false),
            ],
            is_closed: true,
        };
        layer.add_line(band);
    }

    for field in &layout.fields {
        let font = if field.bold { &bold } else { &regular };
        // Shift down by the font size so y acts like a top-anchored origin.
        let baseline = layout.height - field.y - field.size;
        layer.use_text(
            &field.text,
            field.size,
            Mm::from(Pt(field.x)),
            Mm::from(Pt(baseline)),
            font,
        );
    }

    let file = File::create(path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| RenderError::Backend(e.to_string()))?;

    Ok(())
}

/// Build a point from top-anchored coordinates.
fn point(x: f32, y_from_top: f32, page_height: f32) -> Point {
    Point::new(Mm::from(Pt(x)), Mm::from(Pt(page_height - y_from_top)))
}
