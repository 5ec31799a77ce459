//! Regatta results: one race, or every race a club entered at a regatta.

use serde::{Deserialize, Serialize};

use crate::fields::{names, or_default, present, present_label, present_text, present_whole};
use crate::formatter::{format_date, format_margin, format_ordinal};

/// Podium finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    pub fn for_place(place: u32) -> Option<Medal> {
        match place {
            1 => Some(Medal::Gold),
            2 => Some(Medal::Silver),
            3 => Some(Medal::Bronze),
            _ => None,
        }
    }
}

/// `Boston, MA • Oct 18, 2026`, skipping whichever half is missing.
pub fn location_line(location: Option<&str>, date: Option<&str>) -> Option<String> {
    let parts: Vec<String> = [location.map(str::to_string), format_date(date)]
        .into_iter()
        .flatten()
        .collect();
    (!parts.is_empty()).then(|| parts.join(" • "))
}

/// A single race result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegattaResult {
    #[serde(alias = "regatta_name", deserialize_with = "present_text")]
    pub regatta_name: Option<String>,
    #[serde(deserialize_with = "present_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "present_text")]
    pub date: Option<String>,
    #[serde(alias = "event_name", deserialize_with = "present_text")]
    pub event_name: Option<String>,
    #[serde(deserialize_with = "present_whole")]
    pub placement: Option<u32>,
    #[serde(alias = "total_entries", deserialize_with = "present_whole")]
    pub total_entries: Option<u32>,
    /// Pre-formatted finish time.
    #[serde(deserialize_with = "present_label")]
    pub time: Option<String>,
    /// Seconds behind the winner.
    #[serde(rename = "marginAhead", alias = "margin_ahead", deserialize_with = "present")]
    pub behind_leader: Option<f64>,
    /// Seconds ahead of the next crew; only meaningful for the winner.
    #[serde(rename = "marginBehind", alias = "margin_behind", deserialize_with = "present")]
    pub winning_margin: Option<f64>,
    #[serde(rename = "crewList", alias = "crew_list", deserialize_with = "names")]
    pub crew: Vec<String>,
    /// `Head Race`, `Sprint`, `2K`.
    #[serde(alias = "event_type", deserialize_with = "present_text")]
    pub event_type: Option<String>,
}

impl RegattaResult {
    pub fn medal(&self) -> Option<Medal> {
        self.placement.and_then(Medal::for_place)
    }

    /// `out of 24 entries`.
    pub fn entries_line(&self) -> Option<String> {
        self.total_entries.map(|n| match n {
            1 => "out of 1 entry".to_string(),
            n => format!("out of {n} entries"),
        })
    }

    /// `Won by 3.1s` for a winner with a recorded margin, otherwise the gap
    /// to the leader. The flag is true for the winning form.
    pub fn margin_line(&self) -> Option<(String, bool)> {
        if self.placement == Some(1) {
            return format_margin(self.winning_margin).map(|m| (format!("Won by {m}"), true));
        }
        format_margin(self.behind_leader).map(|m| (format!("{m} behind leader"), false))
    }

    pub fn placement_label(&self) -> Option<String> {
        self.placement.map(format_ordinal)
    }
}

/// One line of a regatta summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RaceResult {
    #[serde(alias = "event_name", deserialize_with = "present_text")]
    pub event_name: Option<String>,
    #[serde(deserialize_with = "present_whole")]
    pub placement: Option<u32>,
    #[serde(deserialize_with = "present_label")]
    pub time: Option<String>,
    /// Pre-formatted, e.g. `Won by 3.1s` or `2.4s behind`.
    #[serde(deserialize_with = "present_text")]
    pub margin: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MedalCount {
    pub gold: usize,
    pub silver: usize,
    pub bronze: usize,
}

impl MedalCount {
    pub fn total(&self) -> usize {
        self.gold + self.silver + self.bronze
    }
}

/// Every race from one regatta.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegattaSummary {
    #[serde(alias = "regatta_name", deserialize_with = "present_text")]
    pub regatta_name: Option<String>,
    #[serde(deserialize_with = "present_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "present_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "or_default")]
    pub races: Vec<RaceResult>,
}

impl RegattaSummary {
    pub fn medals(&self) -> MedalCount {
        self.races
            .iter()
            .filter_map(|r| r.placement.and_then(Medal::for_place))
            .fold(MedalCount::default(), |mut count, medal| {
                match medal {
                    Medal::Gold => count.gold += 1,
                    Medal::Silver => count.silver += 1,
                    Medal::Bronze => count.bronze += 1,
                }
                count
            })
    }

    /// Best placement among races that recorded one.
    pub fn best_placement(&self) -> Option<u32> {
        self.races.iter().filter_map(|r| r.placement).min()
    }
}
