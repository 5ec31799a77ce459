//! Team rankings for one metric over a period.

use serde::{Deserialize, Deserializer, Serialize};

use crate::fields::{or_default, present_label, present_text, present_whole};

/// Movement since the previous ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    New,
    #[default]
    Same,
}

impl Trend {
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Trend::Up => Some("↑"),
            Trend::Down => Some("↓"),
            Trend::New => Some("★"),
            Trend::Same => None,
        }
    }
}

impl<'de> Deserialize<'de> for Trend {
    /// Unrecognized or missing trends read as `Same`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref() {
            Some("up") => Trend::Up,
            Some("down") => Trend::Down,
            Some("new") => Trend::New,
            _ => Trend::Same,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardEntry {
    #[serde(deserialize_with = "present_whole")]
    pub rank: Option<u32>,
    #[serde(
        alias = "athlete_name",
        alias = "athleteName",
        deserialize_with = "present_text"
    )]
    pub athlete: Option<String>,
    /// Pre-formatted, e.g. `6:22.1` or `412,500 m`.
    #[serde(alias = "metric_value", deserialize_with = "present_label")]
    pub metric_value: Option<String>,
    pub trend: Trend,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamLeaderboard {
    #[serde(alias = "team_name", deserialize_with = "present_text")]
    pub team_name: Option<String>,
    /// `January 2026`, `Week of Feb 3`.
    #[serde(deserialize_with = "present_text")]
    pub period: Option<String>,
    /// `2K Times`, `Total Meters`.
    #[serde(alias = "leaderboard_type", deserialize_with = "present_text")]
    pub leaderboard_type: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub entries: Vec<LeaderboardEntry>,
}

impl TeamLeaderboard {
    /// Rank to print for the entry at `index`; entries without one take their
    /// list position.
    pub fn rank_of(&self, index: usize) -> u32 {
        self.entries
            .get(index)
            .and_then(|e| e.rank)
            .unwrap_or(index as u32 + 1)
    }

    pub fn leader(&self) -> Option<&LeaderboardEntry> {
        self.entries.first()
    }
}
