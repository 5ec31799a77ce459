//! Per-split pace deviation from the workout average.

use serde::Serialize;

use crate::workout::Split;

/// Deviations inside this band (as a fraction of the average) count as even.
pub const EVEN_BAND: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceTrend {
    /// Faster than average (lower pace).
    Ahead,
    /// Slower than average.
    Behind,
    Even,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaceDeviation {
    /// `(pace - avg) / avg`; positive is slower.
    pub deviation: f64,
    pub trend: PaceTrend,
}

impl PaceDeviation {
    pub fn from_deviation(deviation: f64) -> Self {
        let trend = if deviation < -EVEN_BAND {
            PaceTrend::Ahead
        } else if deviation > EVEN_BAND {
            PaceTrend::Behind
        } else {
            PaceTrend::Even
        };
        Self { deviation, trend }
    }
}

/// Mean pace over the splits that recorded one.
pub fn average_pace(splits: &[Split]) -> Option<f64> {
    let paces: Vec<f64> = splits.iter().filter_map(|s| s.pace_tenths).collect();
    if paces.is_empty() {
        return None;
    }
    Some(paces.iter().sum::<f64>() / paces.len() as f64)
}

/// One entry per split, `None` where the split has no pace.
pub fn pace_deviations(splits: &[Split]) -> Vec<Option<PaceDeviation>> {
    let Some(avg) = average_pace(splits).filter(|a| *a > 0.0) else {
        return vec![None; splits.len()];
    };
    splits
        .iter()
        .map(|s| {
            s.pace_tenths
                .map(|p| PaceDeviation::from_deviation((p - avg) / avg))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paced(paces: &[Option<f64>]) -> Vec<Split> {
        paces
            .iter()
            .map(|p| Split {
                pace_tenths: *p,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn slow_last_split_is_behind() {
        let devs = pace_deviations(&paced(&[Some(100.0), Some(100.0), Some(100.0), Some(130.0)]));
        let last = devs[3].unwrap();
        assert!(last.deviation > 0.0);
        assert_eq!(last.trend, PaceTrend::Behind);
        assert_eq!(devs[0].unwrap().trend, PaceTrend::Ahead);
    }

    #[test]
    fn uniform_paces_are_even() {
        let devs = pace_deviations(&paced(&[Some(955.0); 6]));
        assert!(devs
            .iter()
            .all(|d| d.unwrap().trend == PaceTrend::Even && d.unwrap().deviation.abs() <= EVEN_BAND));
    }

    #[test]
    fn small_jitter_stays_inside_band() {
        let devs = pace_deviations(&paced(&[Some(1000.0), Some(1004.0), Some(996.0)]));
        assert!(devs.iter().all(|d| d.unwrap().trend == PaceTrend::Even));
    }

    #[test]
    fn missing_paces_get_no_signal() {
        let devs = pace_deviations(&paced(&[Some(950.0), None, Some(960.0)]));
        assert!(devs[1].is_none());
        assert!(devs[0].is_some());
        assert_eq!(pace_deviations(&paced(&[None, None])), vec![None, None]);
    }
}
