//! Small formatting utilities shared by the views.

use unicode_width::UnicodeWidthStr;

/// Format a population count with thousands separators.
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncate a string to a display width, adding "..." if needed.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

/// Flag emoji for an uppercase two-letter country code, built from
/// regional indicator symbols. Unknown shapes get an empty string.
pub fn flag_emoji(code: &str) -> String {
    if code.len() != 2 || !code.bytes().all(|b| b.is_ascii_uppercase()) {
        return String::new();
    }
    code.bytes()
        .map(|b| char::from_u32(0x1F1E6 + (b - b'A') as u32).unwrap_or(' '))
        .collect()
}
