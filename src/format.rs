//! Date and number formatting for display strings.

use chrono::{DateTime, Utc};

/// Format a model confidence as a percentage with one decimal place.
///
/// Values outside `0.0..=1.0` are clamped; NaN renders as `0.0%`.
pub fn format_confidence(confidence: f32) -> String {
    let clamped = if confidence.is_nan() {
        0.0
    } else {
        confidence.clamp(0.0, 1.0)
    };
    format!("{:.1}%", clamped * 100.0)
}

/// Format a count with comma thousands separators, e.g. `12,345`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Format a date as `Oct 16, 2026`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Navigation title for a page of results, e.g. `Page: 2/5`.
pub fn format_page_title(page: u32, page_count: u32) -> String {
    format!("Page: {}/{}", page, page_count)
}
