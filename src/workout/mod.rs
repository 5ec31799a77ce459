//! Workout records as handed to the engine by its caller.
//!
//! Erg telemetry uses `0` to mean "not recorded". Every numeric field here is
//! an `Option` and the deserializers map `0`, `null`, negative numbers and
//! missing keys to `None`, so no downstream code ever has to guess whether a
//! zero is real.

pub mod classify;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::fields::{present, present_text};

pub use classify::{Classification, MachineType, WorkoutShape};

/// Programmed workout type as reported by the monitor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WorkoutType {
    #[default]
    JustRow,
    FixedTimeSplits,
    FixedDistanceSplits,
    FixedTimeInterval,
    FixedDistanceInterval,
    VariableInterval,
    VariableIntervalUndefinedRest,
    /// Any name outside the table above, kept verbatim.
    Other(String),
}

const WORKOUT_TYPE_NAMES: &[(&str, WorkoutType)] = &[
    ("JustRow", WorkoutType::JustRow),
    ("FixedTimeSplits", WorkoutType::FixedTimeSplits),
    ("FixedDistanceSplits", WorkoutType::FixedDistanceSplits),
    ("FixedTimeInterval", WorkoutType::FixedTimeInterval),
    ("FixedDistanceInterval", WorkoutType::FixedDistanceInterval),
    ("VariableInterval", WorkoutType::VariableInterval),
    (
        "VariableIntervalUndefinedRest",
        WorkoutType::VariableIntervalUndefinedRest,
    ),
];

impl WorkoutType {
    /// Map a type name onto the closed set. Only the exact name or its
    /// snake_case spelling (`fixed_time_interval`, as older payloads send it)
    /// match; anything else is kept as [`WorkoutType::Other`].
    pub fn parse(name: &str) -> Self {
        let name = name.trim();
        WORKOUT_TYPE_NAMES
            .iter()
            .find(|(known, _)| *known == name || snake_case(known) == name)
            .map(|(_, ty)| ty.clone())
            .unwrap_or_else(|| WorkoutType::Other(name.to_string()))
    }

    pub fn name(&self) -> &str {
        match self {
            WorkoutType::Other(name) => name,
            known => WORKOUT_TYPE_NAMES
                .iter()
                .find(|(_, ty)| ty == known)
                .map_or("JustRow", |(name, _)| name),
        }
    }
}

fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

impl Serialize for WorkoutType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for WorkoutType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(name
            .filter(|n| !n.trim().is_empty())
            .map(|n| WorkoutType::parse(&n))
            .unwrap_or_default())
    }
}

/// One measured segment of a workout.
///
/// `rest_time` is in tenths of a second, `pace_tenths` in tenths of a second
/// per 500m regardless of machine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Split {
    #[serde(alias = "split_number", deserialize_with = "split_number")]
    pub split_number: u32,
    #[serde(alias = "distance_m", deserialize_with = "present")]
    pub distance_m: Option<f64>,
    #[serde(alias = "time_seconds", deserialize_with = "present")]
    pub time_seconds: Option<f64>,
    #[serde(alias = "pace_tenths", deserialize_with = "present")]
    pub pace_tenths: Option<f64>,
    #[serde(deserialize_with = "present")]
    pub watts: Option<f64>,
    #[serde(alias = "stroke_rate", deserialize_with = "present")]
    pub stroke_rate: Option<f64>,
    #[serde(alias = "heart_rate", deserialize_with = "present")]
    pub heart_rate: Option<f64>,
    #[serde(alias = "rest_time", deserialize_with = "present")]
    pub rest_time: Option<f64>,
    #[serde(alias = "rest_distance", deserialize_with = "present")]
    pub rest_distance: Option<f64>,
    #[serde(alias = "heart_rate_rest", deserialize_with = "present")]
    pub heart_rate_rest: Option<f64>,
    #[serde(alias = "heart_rate_ending", deserialize_with = "present")]
    pub heart_rate_ending: Option<f64>,
}

impl Split {
    /// Label shown in the table gutter. Falls back to the position when the
    /// record carried no split number.
    pub fn display_number(&self, index: usize) -> u32 {
        if self.split_number > 0 {
            self.split_number
        } else {
            u32::try_from(index + 1).unwrap_or(u32::MAX)
        }
    }

    /// Whether this split has anything worth a rest row.
    pub fn has_recovery(&self) -> bool {
        self.rest_time.is_some() || self.rest_distance.is_some() || self.heart_rate_rest.is_some()
    }
}

/// A complete workout as received from the caller. Never mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkoutRecord {
    #[serde(alias = "workout_type")]
    pub workout_type: WorkoutType,
    /// Explicit interval flag; when set it wins over the type name.
    #[serde(alias = "is_interval")]
    pub is_interval: Option<bool>,
    #[serde(alias = "machine_type", deserialize_with = "present_text")]
    pub machine_type: Option<String>,
    #[serde(alias = "raw_machine_type", deserialize_with = "present_text")]
    pub raw_machine_type: Option<String>,
    #[serde(alias = "distance_m", deserialize_with = "present")]
    pub distance_m: Option<f64>,
    #[serde(alias = "duration_seconds", deserialize_with = "present")]
    pub duration_seconds: Option<f64>,
    #[serde(alias = "avg_pace_tenths", deserialize_with = "present")]
    pub avg_pace_tenths: Option<f64>,
    #[serde(alias = "avg_watts", deserialize_with = "present")]
    pub avg_watts: Option<f64>,
    #[serde(alias = "avg_heart_rate", deserialize_with = "present")]
    pub avg_heart_rate: Option<f64>,
    #[serde(
        alias = "stroke_rate",
        alias = "avg_stroke_rate",
        deserialize_with = "present"
    )]
    pub stroke_rate: Option<f64>,
    #[serde(deserialize_with = "present")]
    pub calories: Option<f64>,
    #[serde(alias = "drag_factor", deserialize_with = "present")]
    pub drag_factor: Option<f64>,
    #[serde(deserialize_with = "present_text")]
    pub date: Option<String>,
    pub splits: Vec<Split>,
    #[serde(
        alias = "athlete_name",
        alias = "athleteName",
        deserialize_with = "present_text"
    )]
    pub athlete: Option<String>,
}

impl WorkoutRecord {
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

fn split_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| v.is_finite() && *v >= 1.0 && *v <= f64::from(u32::MAX))
        .map_or(0, |v| v.round() as u32))
}
