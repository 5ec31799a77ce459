//! Year-in-review totals for one athlete.

use serde::{Deserialize, Serialize};

use crate::fields::{or_default, present, present_label, present_text, present_whole};
use crate::formatter::NO_TIME;

/// The single largest drop in a test time over the season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BiggestGain {
    #[serde(alias = "test_type", deserialize_with = "present_text")]
    pub test_type: Option<String>,
    /// Seconds taken off; positive.
    #[serde(alias = "delta_seconds", deserialize_with = "present")]
    pub delta_seconds: Option<f64>,
}

impl BiggestGain {
    /// `Biggest gain: 2K (-12.3s)`.
    pub fn line(&self) -> Option<String> {
        let test = self.test_type.as_deref()?;
        let delta = self.delta_seconds?;
        Some(format!("Biggest gain: {test} (-{delta:.1}s)"))
    }
}

/// A test piece that got faster.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Improvement {
    #[serde(alias = "test_type", deserialize_with = "present_text")]
    pub test_type: Option<String>,
    #[serde(alias = "old_time", deserialize_with = "present_label")]
    pub old_time: Option<String>,
    #[serde(alias = "new_time", deserialize_with = "present_label")]
    pub new_time: Option<String>,
    /// Pre-formatted, e.g. `-12.3s`.
    #[serde(deserialize_with = "present_label")]
    pub delta: Option<String>,
}

impl Improvement {
    /// `6:34.4 → 6:22.1`.
    pub fn transition(&self) -> String {
        let old = self.old_time.as_deref().unwrap_or(NO_TIME);
        let new = self.new_time.as_deref().unwrap_or(NO_TIME);
        format!("{old} → {new}")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonRecap {
    /// `Fall 2025`.
    #[serde(alias = "season_name", deserialize_with = "present_text")]
    pub season_name: Option<String>,
    /// `Sep 1 - Dec 15, 2025`, shown as given.
    #[serde(alias = "date_range", deserialize_with = "present_text")]
    pub date_range: Option<String>,
    #[serde(alias = "total_meters", deserialize_with = "present")]
    pub total_meters: Option<f64>,
    #[serde(alias = "total_minutes", deserialize_with = "present")]
    pub total_minutes: Option<f64>,
    #[serde(alias = "workout_count", deserialize_with = "present")]
    pub workout_count: Option<f64>,
    #[serde(alias = "prs_set", deserialize_with = "present_whole")]
    pub prs_set: Option<u32>,
    #[serde(alias = "total_calories", deserialize_with = "present")]
    pub total_calories: Option<f64>,
    #[serde(alias = "avg_weekly_meters", deserialize_with = "present")]
    pub avg_weekly_meters: Option<f64>,
    /// `RowErg`, `BikeErg`, `SkiErg`.
    #[serde(alias = "favorite_machine", deserialize_with = "present_text")]
    pub favorite_machine: Option<String>,
    #[serde(alias = "biggest_improvement", deserialize_with = "or_default")]
    pub biggest_improvement: BiggestGain,
    #[serde(deserialize_with = "or_default")]
    pub improvements: Vec<Improvement>,
    #[serde(
        alias = "athlete_name",
        alias = "athleteName",
        deserialize_with = "present_text"
    )]
    pub athlete: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn snake_case_recap_decodes() {
        let recap: SeasonRecap = serde_json::from_value(json!({
            "season_name": "Fall 2025",
            "date_range": "Sep 1 - Dec 15, 2025",
            "total_meters": 2847500,
            "workout_count": 156,
            "prs_set": 8,
            "biggest_improvement": {"test_type": "2K", "delta_seconds": 12.3},
            "improvements": [
                {"test_type": "2K", "old_time": "6:34.4", "new_time": "6:22.1", "delta": "-12.3s"}
            ],
            "athlete_name": "Marcus Chen"
        }))
        .unwrap();
        assert_eq!(recap.season_name.as_deref(), Some("Fall 2025"));
        assert_eq!(recap.prs_set, Some(8));
        assert_eq!(
            recap.biggest_improvement.line().as_deref(),
            Some("Biggest gain: 2K (-12.3s)")
        );
        assert_eq!(recap.improvements[0].transition(), "6:34.4 → 6:22.1");
        assert_eq!(recap.athlete.as_deref(), Some("Marcus Chen"));
    }

    #[test]
    fn partial_gain_has_no_line() {
        let gain = BiggestGain {
            test_type: Some("6K".into()),
            delta_seconds: None,
        };
        assert_eq!(gain.line(), None);
        let recap: SeasonRecap =
            serde_json::from_value(json!({"biggestImprovement": null, "prsSet": 0})).unwrap();
        assert_eq!(recap.biggest_improvement, BiggestGain::default());
        assert_eq!(recap.prs_set, None);
        assert_eq!(Improvement::default().transition(), "--:-- → --:--");
    }
}
