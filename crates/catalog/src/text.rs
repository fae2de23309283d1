//! Display helpers shared with the presentation layer.

/// Star glyph for a rating display.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Break a 0–5 rating into five star glyphs (half star at `.5` and up).
pub fn star_breakdown(rating: f32) -> [Star; 5] {
    let rating = rating.clamp(0.0, 5.0);
    let full = rating.floor() as usize;
    let has_half = rating.fract() >= 0.5;

    let mut stars = [Star::Empty; 5];
    for star in stars.iter_mut().take(full) {
        *star = Star::Full;
    }
    if has_half && full < 5 {
        stars[full] = Star::Half;
    }
    stars
}

/// Turn arbitrary text into a URL-safe slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_was_dash = true; // suppress leading dashes
    for c in text.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
            last_was_dash = false;
        } else if (c.is_whitespace() || c == '-' || c == '_') && !last_was_dash {
            slug.push('-');
            last_was_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// Truncate to `max_chars`, trimming trailing whitespace and appending `...`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}...", cut.trim_end())
}
