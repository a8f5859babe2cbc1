//! Time utilities: offset parsing, shift-length parsing, minute formatting.

use chrono::FixedOffset;

/// Parse a UTC offset written as "+HH:MM" or "-HH:MM".
pub fn parse_offset(s: &str) -> Option<FixedOffset> {
    let (sign, rest) = match s.bytes().next()? {
        b'+' => (1, &s[1..]),
        b'-' => (-1, &s[1..]),
        _ => return None,
    };

    let (h, m) = rest.split_once(':')?;
    let hours: i32 = h.parse().ok()?;
    let minutes: i32 = m.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }

    let secs = sign * (hours * 3600 + minutes * 60);
    if secs >= 0 {
        FixedOffset::east_opt(secs)
    } else {
        FixedOffset::west_opt(-secs)
    }
}

/// Parse a shift length written as "7h30", "8h" or a bare minute count.
pub fn parse_shift_minutes(s: &str) -> Option<i64> {
    let s = s.trim().to_lowercase();

    if let Some((h, m)) = s.split_once('h') {
        let hours: i64 = h.parse().ok()?;
        let minutes: i64 = if m.is_empty() { 0 } else { m.parse().ok()? };
        if minutes > 59 {
            return None;
        }
        return Some(hours * 60 + minutes);
    }

    s.parse().ok()
}

/// Unsigned H:MM rendering, e.g. 450 → "7:30".
pub fn format_minutes(mins: i64) -> String {
    let m = mins.abs();
    format!("{}:{:02}", m / 60, m % 60)
}

/// Signed H:MM rendering relative to a baseline.
/// Positive → "+H:MM", negative → "-H:MM", zero → "0:00".
pub fn format_signed_minutes(mins: i64) -> String {
    if mins == 0 {
        return "0:00".to_string();
    }
    let sign = if mins > 0 { "+" } else { "-" };
    format!("{}{}", sign, format_minutes(mins))
}
