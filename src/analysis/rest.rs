//! Rest/recovery profiling for interval workouts.
//!
//! The final split's rest is the cooldown, not a programmed rest. It is left
//! out of every uniformity check and never gets a rest row.

use log::debug;

use crate::workout::{Classification, Split};

/// Shape of the programmed rests across a workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RestProfile {
    /// No split before the last one carries a rest.
    NoRest,
    /// Every recorded rest is the same, in tenths of a second.
    Uniform(f64),
    /// Rests differ; `mean` is their arithmetic mean in tenths.
    Varied { mean: f64 },
}

impl RestProfile {
    pub fn is_uniform(&self) -> bool {
        !matches!(self, RestProfile::Varied { .. })
    }
}

/// Rests of every split except the last, skipping splits with none.
pub fn programmed_rests(splits: &[Split]) -> impl Iterator<Item = f64> + '_ {
    let programmed = splits.len().saturating_sub(1);
    splits[..programmed].iter().filter_map(|s| s.rest_time)
}

pub fn rest_profile(splits: &[Split]) -> RestProfile {
    let rests: Vec<f64> = programmed_rests(splits).collect();
    let Some(first) = rests.first() else {
        return RestProfile::NoRest;
    };
    let key = |t: f64| t.round() as i64;
    if rests.iter().all(|t| key(*t) == key(*first)) {
        RestProfile::Uniform(*first)
    } else {
        let mean = rests.iter().sum::<f64>() / rests.len() as f64;
        RestProfile::Varied { mean }
    }
}

pub fn is_uniform_rest(splits: &[Split]) -> bool {
    rest_profile(splits).is_uniform()
}

/// True when any split carries recovery heart rate.
pub fn has_valuable_rest_data(splits: &[Split]) -> bool {
    splits.iter().any(|s| s.heart_rate_rest.is_some())
}

/// Decision on whether intervals get a secondary rest row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestRowPolicy {
    pub show: bool,
    pub uniform: bool,
    pub valuable: bool,
}

impl RestRowPolicy {
    /// Uniform, data-free rests are already stated in the title; anything
    /// else on an interval workout earns its own row.
    pub fn evaluate(classification: &Classification, splits: &[Split]) -> Self {
        let uniform = is_uniform_rest(splits);
        let valuable = has_valuable_rest_data(splits);
        let show = classification.interval && (!uniform || valuable);
        debug!("rest rows show={show} uniform={uniform} valuable={valuable}");
        Self {
            show,
            uniform,
            valuable,
        }
    }

    /// Whether split `index` of `splits` is followed by a rest row.
    pub fn has_row(&self, splits: &[Split], index: usize) -> bool {
        self.show && index + 1 < splits.len() && splits[index].has_recovery()
    }

    /// Rest rows among the first `shown` splits.
    pub fn row_count(&self, splits: &[Split], shown: usize) -> usize {
        (0..shown.min(splits.len()))
            .filter(|i| self.has_row(splits, *i))
            .count()
    }
}
