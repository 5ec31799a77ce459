//! Workout shape and machine classification.
//!
//! Every other component consumes a [`Classification`] instead of looking at
//! the raw type or machine strings itself.

use log::debug;
use serde::Serialize;

use super::{WorkoutRecord, WorkoutType};

/// Normalized ergometer family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MachineType {
    #[default]
    Rower,
    SkiErg,
    Bike,
    /// Dynamic rowers and slides; paced like a rower.
    Dynamic,
}

impl MachineType {
    pub fn is_bike(self) -> bool {
        self == MachineType::Bike
    }

    /// Reference distance used for pace, as a display suffix.
    pub fn pace_unit(self) -> &'static str {
        if self.is_bike() {
            "/1000m"
        } else {
            "/500m"
        }
    }

    /// Cadence unit: revolutions for the bike, strokes for everything else.
    pub fn rate_unit(self) -> &'static str {
        if self.is_bike() {
            "RPM"
        } else {
            "SPM"
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MachineType::Rower => "RowErg",
            MachineType::SkiErg => "SkiErg",
            MachineType::Bike => "BikeErg",
            MachineType::Dynamic => "Dynamic RowErg",
        }
    }
}

/// Which dimension of the workout was programmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutShape {
    /// Time was fixed, distance varies per split.
    FixedTime,
    /// Distance was fixed, time varies per split.
    FixedDistance,
    /// Both vary from piece to piece.
    Variable,
    /// Nothing was programmed.
    Continuous,
}

/// Result of classifying one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub workout_type: WorkoutType,
    pub interval: bool,
    pub shape: WorkoutShape,
    pub machine: MachineType,
}

impl Classification {
    pub fn of(record: &WorkoutRecord) -> Self {
        let c = Self {
            workout_type: record.workout_type.clone(),
            interval: is_interval(record),
            shape: shape(record),
            machine: machine_category(record),
        };
        debug!(
            "classified workout type={} interval={} shape={:?} machine={:?}",
            c.workout_type.name(),
            c.interval,
            c.shape,
            c.machine
        );
        c
    }

    pub fn is_bike(&self) -> bool {
        self.machine.is_bike()
    }

    pub fn is_fixed_time(&self) -> bool {
        self.shape == WorkoutShape::FixedTime
    }

    pub fn is_variable(&self) -> bool {
        self.shape == WorkoutShape::Variable
    }
}

/// True when the explicit flag is set or the type name says "interval".
///
/// Names outside the known table still count when they contain "interval"
/// in any case. This keeps the looser contract older payloads relied on.
pub fn is_interval(record: &WorkoutRecord) -> bool {
    if record.is_interval == Some(true) {
        return true;
    }
    match &record.workout_type {
        WorkoutType::FixedTimeInterval
        | WorkoutType::FixedDistanceInterval
        | WorkoutType::VariableInterval
        | WorkoutType::VariableIntervalUndefinedRest => true,
        WorkoutType::Other(name) => name.to_ascii_lowercase().contains("interval"),
        WorkoutType::JustRow
        | WorkoutType::FixedTimeSplits
        | WorkoutType::FixedDistanceSplits => false,
    }
}

pub fn is_fixed_time(record: &WorkoutRecord) -> bool {
    matches!(
        record.workout_type,
        WorkoutType::FixedTimeSplits | WorkoutType::FixedTimeInterval
    )
}

pub fn is_fixed_distance(record: &WorkoutRecord) -> bool {
    matches!(
        record.workout_type,
        WorkoutType::FixedDistanceSplits | WorkoutType::FixedDistanceInterval
    )
}

pub fn is_variable(record: &WorkoutRecord) -> bool {
    matches!(
        record.workout_type,
        WorkoutType::VariableInterval | WorkoutType::VariableIntervalUndefinedRest
    )
}

fn shape(record: &WorkoutRecord) -> WorkoutShape {
    if is_fixed_time(record) {
        WorkoutShape::FixedTime
    } else if is_fixed_distance(record) {
        WorkoutShape::FixedDistance
    } else if is_variable(record) {
        WorkoutShape::Variable
    } else {
        WorkoutShape::Continuous
    }
}

/// Normalize `rawMachineType` (preferred) or `machineType`. Absent or
/// unrecognized machines are treated as rowers.
pub fn machine_category(record: &WorkoutRecord) -> MachineType {
    let raw = record
        .raw_machine_type
        .as_deref()
        .or(record.machine_type.as_deref())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match raw.as_str() {
        "bike" | "bikeerg" | "bikerg" => MachineType::Bike,
        "skierg" | "ski" => MachineType::SkiErg,
        "dynamic" | "slides" | "dynamicrower" => MachineType::Dynamic,
        _ => MachineType::Rower,
    }
}

pub fn is_bike(record: &WorkoutRecord) -> bool {
    machine_category(record).is_bike()
}
