//! Display strings for erg telemetry.
//!
//! All functions are total. An absent value never renders as a bare `0`; it
//! becomes a placeholder or, where the caller should skip the field
//! altogether, `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::workout::MachineType;

/// Placeholder for any missing scalar.
pub const PLACEHOLDER: &str = "--";
/// Placeholder for a missing time or pace.
pub const NO_TIME: &str = "--:--";

fn tenths_of(seconds: Option<f64>) -> Option<u64> {
    seconds
        .filter(|s| s.is_finite() && *s > 0.0)
        .map(|s| (s * 10.0).round() as u64)
        .filter(|t| *t > 0)
}

fn whole(value: Option<f64>) -> Option<u64> {
    value
        .filter(|v| v.is_finite() && *v > 0.0)
        .map(|v| v.round() as u64)
        .filter(|n| *n > 0)
}

/// `M:SS[.t]`, or `H:MM:SS[.t]` from one hour up. A zero tenths digit is
/// dropped, so 600 seconds is `10:00`.
pub fn format_time_clean(seconds: Option<f64>) -> String {
    let Some(tenths) = tenths_of(seconds) else {
        return NO_TIME.to_string();
    };
    let hours = tenths / 36_000;
    let minutes = (tenths % 36_000) / 600;
    let secs = (tenths % 600) / 10;
    let frac = tenths % 10;

    let mut out = if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    };
    if frac > 0 {
        out.push('.');
        out.push_str(&frac.to_string());
    }
    out
}

/// `M:SS.t` pace. Input is canonical tenths per 500m; bikes are shown per
/// 1000m so the value is doubled first.
pub fn format_pace(pace_tenths: Option<f64>, machine: MachineType) -> String {
    let factor = if machine.is_bike() { 2.0 } else { 1.0 };
    let Some(tenths) = whole(pace_tenths.map(|p| p * factor)) else {
        return NO_TIME.to_string();
    };
    let minutes = tenths / 600;
    let secs = (tenths % 600) / 10;
    let frac = tenths % 10;
    format!("{minutes}:{secs:02}.{frac}")
}

/// `10K` for whole kilometres, otherwise `1,169m`.
pub fn format_distance(meters: Option<f64>) -> String {
    match whole(meters) {
        None => PLACEHOLDER.to_string(),
        Some(m) if m >= 1000 && m % 1000 == 0 => format!("{}K", m / 1000),
        Some(m) => format!("{}m", group_thousands(m)),
    }
}

/// Rest duration for a rest row: `M:SS` from one minute up, `:SS` below.
/// Absent rest yields `None` so the caller can drop the field.
pub fn format_rest(rest_tenths: Option<f64>) -> Option<String> {
    let secs = whole(rest_tenths.map(|t| t / 10.0))?;
    Some(if secs >= 60 {
        format!("{}:{:02}", secs / 60, secs % 60)
    } else {
        format!(":{secs:02}")
    })
}

/// Whiteboard notation: `11'`, `1'30"`, `45"`.
pub fn format_time_coach(seconds: Option<f64>) -> Option<String> {
    let secs = whole(seconds)?;
    Some(if secs >= 60 {
        let (m, s) = (secs / 60, secs % 60);
        if s == 0 {
            format!("{m}'")
        } else {
            format!("{m}'{s:02}\"")
        }
    } else {
        format!("{secs}\"")
    })
}

/// Coach notation for a rest given in tenths: `1'r`, `30"r`, `1'30"r`.
pub fn format_rest_coach(rest_tenths: Option<f64>) -> Option<String> {
    format_time_coach(rest_tenths.map(|t| t / 10.0)).map(|s| s + "r")
}

/// Rounded integer for watts, heart rate, stroke rate and calories.
pub fn format_count(value: Option<f64>) -> String {
    whole(value).map_or_else(|| PLACEHOLDER.to_string(), group_thousands)
}

/// `Feb 10, 2026` for ISO-8601 dates and timestamps; anything else is
/// returned as given.
pub fn format_date(date: Option<&str>) -> Option<String> {
    let raw = date.map(str::trim).filter(|d| !d.is_empty())?;
    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));
    Some(match parsed {
        Ok(day) => day.format("%b %d, %Y").to_string(),
        Err(_) => raw.to_string(),
    })
}

/// `1st`, `2nd`, `3rd`, `4th`, `11th`, `21st`.
pub fn format_ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Season volume: `2.85M m` from a million metres up, `189,833 m` below.
pub fn format_volume(meters: Option<f64>) -> String {
    match whole(meters) {
        None => PLACEHOLDER.to_string(),
        Some(m) if m >= 1_000_000 => format!("{:.2}M m", m as f64 / 1_000_000.0),
        Some(m) => format!("{} m", group_thousands(m)),
    }
}

/// Training time from minutes: `238h 0m`, `45m`.
pub fn format_hours(minutes: Option<f64>) -> String {
    match whole(minutes) {
        None => PLACEHOLDER.to_string(),
        Some(m) if m >= 60 => format!("{}h {}m", m / 60, m % 60),
        Some(m) => format!("{m}m"),
    }
}

/// Race margin in seconds with one decimal: `3.1s`.
pub fn format_margin(seconds: Option<f64>) -> Option<String> {
    seconds
        .filter(|s| s.is_finite() && *s > 0.0)
        .map(|s| format!("{s:.1}s"))
}

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
