//! Shared formatting utilities for console output

use console::Emoji;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::catalog::TimeOfDay;

/// Rocket emoji for launch/start operations
pub const ROCKET: Emoji = Emoji("🚀", ">");

/// Checkmark emoji for success and selected steps
pub const CHECKMARK: Emoji = Emoji("✅", "[x]");

/// Empty box for unselected steps
pub const UNCHECKED: Emoji = Emoji("⬜", "[ ]");

/// Sparkles emoji for quiz results
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Sunrise emoji for the morning routine
pub const SUNRISE: Emoji = Emoji("🌅", "AM");

/// Moon emoji for the evening routine
pub const MOON: Emoji = Emoji("🌙", "PM");

/// Stopwatch emoji for time estimates
pub const STOPWATCH: Emoji = Emoji("⏱️", "~");

/// Star emoji for ratings
pub const STAR: Emoji = Emoji("⭐", "*");

/// Leaf emoji for ingredients
pub const LEAF: Emoji = Emoji("🌿", "-");

static EMOJI_ENABLED: AtomicBool = AtomicBool::new(true);

/// Turn emoji output on or off for the rest of the process
pub fn set_emoji_enabled(enabled: bool) {
    EMOJI_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Returns false once `--no-emoji` has been seen
pub fn emoji_enabled() -> bool {
    EMOJI_ENABLED.load(Ordering::Relaxed)
}

/// Render an emoji, or its fallback when emoji are disabled
///
/// console already falls back on terminals that cannot show emoji; this
/// adds the explicit opt-out.
pub fn icon(emoji: &Emoji<'static, 'static>) -> String {
    if emoji_enabled() {
        emoji.to_string()
    } else {
        emoji.1.to_string()
    }
}

/// Catalog-supplied icon, or nothing when emoji are disabled
pub fn catalog_icon(icon: Option<&str>) -> &str {
    match icon {
        Some(icon) if emoji_enabled() => icon,
        _ => "",
    }
}

/// Emoji for a time-of-day tab
pub fn time_icon(time: TimeOfDay) -> Emoji<'static, 'static> {
    match time {
        TimeOfDay::Morning => SUNRISE,
        TimeOfDay::Evening => MOON,
        TimeOfDay::Both => STOPWATCH,
    }
}

/// Format a routine duration
///
/// # Examples
///
/// ```
/// use velura::fmt::format_minutes;
///
/// assert_eq!(format_minutes(0), "0 min");
/// assert_eq!(format_minutes(10), "~10 min");
/// ```
pub fn format_minutes(minutes: u32) -> String {
    if minutes == 0 {
        "0 min".to_string()
    } else {
        format!("~{} min", minutes)
    }
}

/// Format a whole-dollar price
///
/// # Examples
///
/// ```
/// use velura::fmt::format_price;
///
/// assert_eq!(format_price(68), "$68");
/// ```
pub fn format_price(dollars: u32) -> String {
    format!("${}", dollars)
}

/// Format a count with thousands separators
///
/// # Examples
///
/// ```
/// use velura::fmt::format_count;
///
/// assert_eq!(format_count(999), "999");
/// assert_eq!(format_count(2341), "2,341");
/// assert_eq!(format_count(1_000_000), "1,000,000");
/// ```
pub fn format_count(count: u32) -> String {
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

/// Format a star rating with its review count
pub fn format_rating(rating: f32, reviews: u32) -> String {
    format!("{:.1} ({} reviews)", rating, format_count(reviews))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routine::MINUTES_PER_STEP;

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0 min");
        assert_eq!(format_minutes(2), "~2 min");
        assert_eq!(format_minutes(5 * MINUTES_PER_STEP), "~10 min");
    }

    #[test]
    fn test_format_count_various_sizes() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(12), "12");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(12_345), "12,345");
        assert_eq!(format_count(123_456), "123,456");
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(format_rating(4.9, 1523), "4.9 (1,523 reviews)");
        assert_eq!(format_rating(5.0, 3), "5.0 (3 reviews)");
    }

    #[test]
    fn test_time_icons_have_text_fallbacks() {
        assert_eq!(time_icon(TimeOfDay::Morning).1, "AM");
        assert_eq!(time_icon(TimeOfDay::Evening).1, "PM");
    }

    #[test]
    fn test_catalog_icon_passthrough() {
        assert_eq!(catalog_icon(None), "");
    }
}
