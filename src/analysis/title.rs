//! Short workout titles: `7x11' / 1'r`, `10K`, `1,169m`.

use crate::formatter::{format_distance, format_rest_coach, format_time_coach};
use crate::workout::{Classification, Split, WorkoutRecord, WorkoutShape, WorkoutType};

use super::rest::{rest_profile, RestProfile};

/// Build the card title. First matching rule wins.
pub fn build_title(record: &WorkoutRecord, c: &Classification) -> String {
    if c.interval && !record.splits.is_empty() {
        interval_title(&record.splits, c)
    } else {
        continuous_title(record, c)
    }
}

fn interval_title(splits: &[Split], c: &Classification) -> String {
    let n = splits.len();
    let variable = c.is_variable();
    let rest = rest_suffix(splits, variable);

    match c.shape {
        WorkoutShape::FixedDistance => {
            if let Some(d) = uniform_distance(splits) {
                return format!("{n}x{}{rest}", format_distance(Some(d)));
            }
        }
        WorkoutShape::FixedTime => {
            if let Some(work) = uniform_duration(splits).and_then(|t| format_time_coach(Some(t))) {
                return format!("{n}x{work}{rest}");
            }
        }
        WorkoutShape::Variable => {
            return match uniform_distance(splits) {
                Some(d) => format!("{n}x{}{rest}", format_distance(Some(d))),
                None => format!("{n} pieces"),
            };
        }
        WorkoutShape::Continuous => {}
    }
    format!("{n} intervals{rest}")
}

fn continuous_title(record: &WorkoutRecord, c: &Classification) -> String {
    let programmed = match record.workout_type {
        WorkoutType::FixedTimeSplits => format_time_coach(record.duration_seconds),
        WorkoutType::FixedDistanceSplits => record.distance_m.map(|d| format_distance(Some(d))),
        _ => None,
    };
    programmed
        .or_else(|| record.distance_m.map(|d| format_distance(Some(d))))
        .or_else(|| format_time_coach(record.duration_seconds))
        .unwrap_or_else(|| c.machine.label().to_string())
}

/// ` / 1'r` for uniform rests, ` / ~1'15"r` for varied ones, empty when no
/// programmed rest was recorded. `approximate` forces the `~` form.
pub fn rest_suffix(splits: &[Split], approximate: bool) -> String {
    let (tenths, approx) = match rest_profile(splits) {
        RestProfile::NoRest => return String::new(),
        RestProfile::Uniform(t) => (t, approximate),
        RestProfile::Varied { mean } => (mean, true),
    };
    match format_rest_coach(Some(tenths)) {
        Some(rest) if approx => format!(" / ~{rest}"),
        Some(rest) => format!(" / {rest}"),
        None => String::new(),
    }
}

fn uniform_by(splits: &[Split], value: impl Fn(&Split) -> Option<f64>, scale: f64) -> Option<f64> {
    let first = value(splits.first()?)?;
    let key = |v: f64| (v * scale).round() as i64;
    splits
        .iter()
        .all(|s| value(s).is_some_and(|v| key(v) == key(first)))
        .then_some(first)
}

/// Common split distance, to the metre.
pub fn uniform_distance(splits: &[Split]) -> Option<f64> {
    uniform_by(splits, |s| s.distance_m, 1.0)
}

/// Common split duration, to the tenth of a second.
pub fn uniform_duration(splits: &[Split]) -> Option<f64> {
    uniform_by(splits, |s| s.time_seconds, 10.0)
}
