//! Content decisions for a card: what text to show and in which order.
//!
//! Everything here is a pure function of the [`WorkoutRecord`] and its
//! [`Classification`]; pixel geometry lives in `rendering`.

pub mod columns;
pub mod hero;
pub mod pace;
pub mod rest;
pub mod title;

use serde::Serialize;

use crate::workout::{Classification, WorkoutRecord};

pub use columns::{select_columns, Column, ColumnKey};
pub use hero::{select_hero, Hero};
pub use pace::{pace_deviations, PaceDeviation, PaceTrend};
pub use rest::{RestProfile, RestRowPolicy};
pub use title::build_title;

/// All content decisions for one record.
#[derive(Debug, Clone, Serialize)]
pub struct CardAnalysis {
    pub classification: Classification,
    pub title: String,
    pub hero: Hero,
    pub columns: Vec<Column>,
    #[serde(skip)]
    pub rest_rows: RestRowPolicy,
    pub deviations: Vec<Option<PaceDeviation>>,
}

impl CardAnalysis {
    pub fn of(record: &WorkoutRecord) -> Self {
        let classification = Classification::of(record);
        Self {
            title: build_title(record, &classification),
            hero: select_hero(record, &classification),
            columns: select_columns(&classification),
            rest_rows: RestRowPolicy::evaluate(&classification, &record.splits),
            deviations: pace_deviations(&record.splits),
            classification,
        }
    }
}
