use unicode_width::UnicodeWidthChar;

/// Number of glyphs in every usage bar.
pub const BAR_WIDTH: usize = 20;

const UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Human readable size: the largest unit in which the value is below 1024,
/// with one decimal place. `1536.0` → `1.5KB`.
pub fn format_bytes(bytes: f64) -> String {
    let mut value = if bytes.is_finite() && bytes > 0.0 { bytes } else { 0.0 };
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{:.1}{}", value, unit);
        }
        value /= 1024.0;
    }
    format!("{:.1}{}", value, UNITS[UNITS.len() - 1])
}

pub fn format_rate(bytes_per_sec: f64) -> String {
    format!("{}/s", format_bytes(bytes_per_sec))
}

/// How many of the [`BAR_WIDTH`] glyphs are filled for `percent`.
pub fn filled_cells(percent: f32) -> usize {
    if !percent.is_finite() {
        return 0;
    }
    ((percent / 5.0).round() as usize).min(BAR_WIDTH)
}

pub fn usage_bar(percent: f32, filled: char, empty: char) -> String {
    let n = filled_cells(percent);
    let mut bar = String::with_capacity(BAR_WIDTH * 4);
    bar.extend(std::iter::repeat(filled).take(n));
    bar.extend(std::iter::repeat(empty).take(BAR_WIDTH - n));
    bar
}

/// `90061` → `1d 1h 1m`
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;
    format!("{}d {}h {}m", days, hours, minutes)
}

/// Cut `s` down to at most `max` display columns.
pub fn truncate_width(s: &str, max: usize) -> &str {
    let mut width = 0;
    for (i, ch) in s.char_indices() {
        width += ch.width().unwrap_or(0);
        if width > max {
            return &s[..i];
        }
    }
    s
}
