//! Headline metric selection.

use serde::Serialize;

use crate::formatter::{format_count, format_pace, format_time_clean};
use crate::workout::{Classification, WorkoutRecord};

/// Standard erg test distances, in metres. Continuous pieces over one of
/// these are headlined by their total time.
pub const TEST_DISTANCES: [u32; 5] = [500, 1000, 2000, 5000, 6000];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hero {
    pub value: String,
    pub label: String,
}

impl Hero {
    fn new(value: String, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

pub fn is_test_distance(meters: Option<f64>) -> bool {
    meters
        .filter(|m| m.is_finite() && *m > 0.0)
        .map(|m| m.round() as u32)
        .is_some_and(|m| TEST_DISTANCES.contains(&m))
}

/// Pick the headline value and label; rules are checked in order.
pub fn select_hero(record: &WorkoutRecord, c: &Classification) -> Hero {
    if !c.interval && is_test_distance(record.distance_m) {
        return Hero::new(format_time_clean(record.duration_seconds), "TOTAL TIME");
    }
    if c.interval && c.is_fixed_time() && c.is_bike() && record.avg_watts.is_some() {
        return Hero::new(format_count(record.avg_watts), "AVG WATTS");
    }
    let pace = format_pace(record.avg_pace_tenths, c.machine);
    let unit = c.machine.pace_unit();
    if c.interval {
        Hero::new(pace, format!("AVG SPLIT {unit}"))
    } else {
        Hero::new(pace, format!("AVG PACE {unit}"))
    }
}
