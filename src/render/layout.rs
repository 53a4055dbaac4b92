//! Data-driven document layouts
//!
//! A proof template produces a `DocumentLayout`: a page size plus an
//! ordered list of positioned text fields. Tests inspect layouts directly;
//! the PDF backend is the only code that turns them into files.

/// y coordinates are measured in points from the top of the page; the
/// backend flips them into PDF space.
#[derive(Debug, Clone, PartialEq)]
pub struct TextField {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub bold: bool,
    pub text: String,
}

/// A fixed-size page with positioned text and an optional header band.
#[derive(Debug, Clone)]
pub struct DocumentLayout {
    pub width: f32,
    pub height: f32,
    /// Height of a decorative band across the top of the page, if any.
    pub header_band: Option<f32>,
    pub fields: Vec<TextField>,
}

impl DocumentLayout {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            header_band: None,
            fields: Vec::new(),
        }
    }

    pub fn with_header_band(mut self, height: f32) -> Self {
        self.header_band = Some(height);
        self
    }

    pub fn text(&mut self, x: f32, y: f32, size: f32, text: impl Into<String>) {
        self.fields.push(TextField {
            x,
            y,
            size,
            bold: false,
            text: text.into(),
        });
    }

    pub fn bold_text(&mut self, x: f32, y: f32, size: f32, text: impl Into<String>) {
        self.fields.push(TextField {
            x,
            y,
            size,
            bold: true,
            text: text.into(),
        });
    }

    /// Concatenated text of every field, for content assertions.
    pub fn full_text(&self) -> String {
        self.fields
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Greedy word wrap at a fixed character-width threshold.
///
/// Words are never split; a word longer than the threshold gets its own
/// line. Empty input yields no lines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        if !line.is_empty() && line.len() + word.len() >= width {
            lines.push(line.trim_end().to_string());
            line.clear();
        }
        line.push_str(word);
        line.push(' ');
    }

    if !line.trim().is_empty() {
        lines.push(line.trim_end().to_string());
    }

    lines
}

/// First `max` characters of the text followed by an ellipsis. The
/// ellipsis is appended unconditionally, matching the receipt template.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    let mut truncated: String = text.chars().take(max).collect();
    truncated.push_str("...");
    truncated
}

/// Capitalize the first letter of every whitespace-separated word.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_never_splits_words_or_emits_empty_lines() {
        let text = "I have an emergency that requires immediate attention and will not \
                    be able to attend the meeting scheduled for this afternoon at all";
        let lines = wrap_text(text, 70);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(!line.is_empty());
            assert!(line.len() <= 70 + 1, "line too long: {line:?}");
            for word in line.split(' ') {
                assert!(text.contains(word), "word {word:?} was split");
            }
        }
    }

    #[test]
    fn wrap_of_short_text_is_single_line() {
        let lines = wrap_text("Feeling unwell today.", 70);
        assert_eq!(lines, vec!["Feeling unwell today."]);
    }

    #[test]
    fn wrap_of_empty_text_is_empty() {
        assert!(wrap_text("", 70).is_empty());
        assert!(wrap_text("   ", 70).is_empty());
    }

    #[test]
    fn truncate_caps_long_text() {
        let long = "x".repeat(500);
        let out = truncate_with_ellipsis(&long, 60);
        assert_eq!(out.len(), 63);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn truncate_appends_ellipsis_even_when_short() {
        assert_eq!(truncate_with_ellipsis("short", 60), "short...");
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("family emergency"), "Family Emergency");
        assert_eq!(title_case("work"), "Work");
    }

    #[test]
    fn full_text_joins_fields_in_order() {
        let mut layout = DocumentLayout::new(100.0, 100.0);
        layout.bold_text(0.0, 0.0, 12.0, "first");
        layout.text(0.0, 20.0, 10.0, "second");
        assert_eq!(layout.full_text(), "first\nsecond");
    }
}
