//! Table column sets keyed on workout shape.

use serde::Serialize;

use crate::formatter::{format_count, format_distance, format_pace, format_time_clean, PLACEHOLDER};
use crate::rendering::paint::Align;
use crate::workout::{Classification, MachineType, Split, WorkoutShape};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKey {
    Distance,
    Time,
    Pace,
    Watts,
    Rate,
    HeartRate,
}

impl ColumnKey {
    /// Relative share of the table width.
    fn weight(self) -> f32 {
        match self {
            ColumnKey::Distance | ColumnKey::Time => 1.1,
            ColumnKey::Pace => 1.2,
            ColumnKey::Watts => 0.9,
            ColumnKey::Rate | ColumnKey::HeartRate => 0.8,
        }
    }

    fn align(self) -> Align {
        match self {
            ColumnKey::Distance | ColumnKey::Time | ColumnKey::Pace => Align::Left,
            ColumnKey::Watts | ColumnKey::Rate | ColumnKey::HeartRate => Align::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub key: ColumnKey,
    pub header: String,
    pub align: Align,
    pub weight: f32,
    #[serde(skip)]
    machine: MachineType,
}

impl Column {
    pub fn new(key: ColumnKey, machine: MachineType) -> Self {
        let header = match key {
            ColumnKey::Distance => "DIST".to_string(),
            ColumnKey::Time => "TIME".to_string(),
            ColumnKey::Pace => {
                if machine.is_bike() {
                    "PACE /1Km".to_string()
                } else {
                    "PACE /500m".to_string()
                }
            }
            ColumnKey::Watts => "WATTS".to_string(),
            ColumnKey::Rate => machine.rate_unit().to_string(),
            ColumnKey::HeartRate => "HR".to_string(),
        };
        Self {
            key,
            header,
            align: key.align(),
            weight: key.weight(),
            machine,
        }
    }

    /// Cell text for one split; `--` when the value is missing.
    pub fn cell(&self, split: &Split) -> String {
        let missing = || PLACEHOLDER.to_string();
        match self.key {
            ColumnKey::Distance => split
                .distance_m
                .map_or_else(missing, |d| format_distance(Some(d))),
            ColumnKey::Time => split
                .time_seconds
                .map_or_else(missing, |t| format_time_clean(Some(t))),
            ColumnKey::Pace => split
                .pace_tenths
                .map_or_else(missing, |p| format_pace(Some(p), self.machine)),
            ColumnKey::Watts => format_count(split.watts),
            ColumnKey::Rate => format_count(split.stroke_rate),
            ColumnKey::HeartRate => format_count(split.heart_rate),
        }
    }
}

/// Ordered columns, left to right, for the workout's shape.
pub fn select_columns(c: &Classification) -> Vec<Column> {
    use ColumnKey::{Distance, HeartRate, Pace, Rate, Time, Watts};

    let keys: &[ColumnKey] = match c.shape {
        WorkoutShape::FixedTime => &[Distance, Pace, Watts, Rate, HeartRate],
        WorkoutShape::FixedDistance => &[Time, Pace, Watts, Rate, HeartRate],
        WorkoutShape::Variable => &[Distance, Time, Pace, Watts, Rate, HeartRate],
        WorkoutShape::Continuous => &[Pace, Watts, Rate, HeartRate],
    };
    keys.iter().map(|k| Column::new(*k, c.machine)).collect()
}
