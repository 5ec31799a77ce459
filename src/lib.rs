//! Sharecard
//!
//! Adaptive layout and data-classification engine for rowing share cards.
//! Given a workout record it decides what to show, in which order, with
//! which wording and how densely, so the card always fits a fixed canvas.
//! Regatta results, season recaps and team leaderboards are laid out by the
//! same pipeline.
//!
//! # Features
//!
//! - **Classification**: interval vs. continuous, fixed-time vs.
//!   fixed-distance vs. variable, rower vs. bike
//! - **Content selection**: title, hero metric, table columns and rest rows
//! - **Adaptive table**: clamp-and-truncate row/font sizing
//! - **Backend agnostic**: produces a [`LayoutPlan`] that any [`Canvas`]
//!   implementation can replay
//!
//! # Example
//!
//! ```
//! use sharecard::{render_request_json, MonospaceMeasurer};
//!
//! # fn main() -> Result<(), sharecard::Error> {
//! let body = r#"{
//!     "cardType": "erg_summary",
//!     "format": "1:1",
//!     "workoutData": {
//!         "workoutType": "FixedDistanceSplits",
//!         "distanceM": 2000,
//!         "durationSeconds": 382.1,
//!         "avgPaceTenths": 955
//!     }
//! }"#;
//!
//! let plan = render_request_json(body, &MonospaceMeasurer)?;
//! assert_eq!(plan.title, "2K");
//! assert_eq!(plan.hero.value, "6:22.1");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod error;
pub use error::{Error, Result};

pub mod analysis;
mod fields;
pub mod formatter;
pub mod leaderboard;
pub mod regatta;
pub mod rendering;
pub mod request;
pub mod season;
pub mod workout;

pub use rendering::raster::{plan_digest, replay};
pub use rendering::{
    Canvas, LayoutPlan, MonospaceMeasurer, RecordingCanvas, SectionKind, StyleConfig,
    TableBounds, TextMeasurer,
};
pub use leaderboard::TeamLeaderboard;
pub use regatta::{RegattaResult, RegattaSummary};
pub use request::{CardRequest, ValidatedRequest};
pub use season::SeasonRecap;
pub use workout::{Split, WorkoutRecord, WorkoutType};

/// Output canvas format.
///
/// Both formats share the 2160px base width; the story format is taller and
/// gives the split table more room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Format {
    #[default]
    #[serde(rename = "1:1")]
    Square,
    #[serde(rename = "9:16")]
    Story,
}

impl Format {
    pub const ALL: [Format; 2] = [Format::Square, Format::Story];

    pub fn key(self) -> &'static str {
        match self {
            Format::Square => "1:1",
            Format::Story => "9:16",
        }
    }

    /// Canvas size in pixels, `(width, height)`.
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            Format::Square => (2160, 2160),
            Format::Story => (2160, 3840),
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Format::ALL
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Card design. The two erg designs share one layout engine and differ only
/// in palette; every other type has its own assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    #[default]
    ErgSummary,
    ErgSummaryAlt,
    RegattaResult,
    RegattaSummary,
    SeasonRecap,
    TeamLeaderboard,
}

impl CardType {
    pub const ALL: [CardType; 6] = [
        CardType::ErgSummary,
        CardType::ErgSummaryAlt,
        CardType::RegattaResult,
        CardType::RegattaSummary,
        CardType::SeasonRecap,
        CardType::TeamLeaderboard,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CardType::ErgSummary => "erg_summary",
            CardType::ErgSummaryAlt => "erg_summary_alt",
            CardType::RegattaResult => "regatta_result",
            CardType::RegattaSummary => "regatta_summary",
            CardType::SeasonRecap => "season_recap",
            CardType::TeamLeaderboard => "team_leaderboard",
        }
    }

    /// True for the card types that take a workout record.
    pub fn is_erg(self) -> bool {
        matches!(self, CardType::ErgSummary | CardType::ErgSummaryAlt)
    }

    pub fn style(self) -> StyleConfig {
        match self {
            CardType::ErgSummary => StyleConfig::evolved(),
            CardType::ErgSummaryAlt => StyleConfig::editorial(),
            CardType::RegattaResult | CardType::RegattaSummary | CardType::TeamLeaderboard => {
                StyleConfig::podium()
            }
            CardType::SeasonRecap => StyleConfig::celebration(),
        }
    }
}

impl FromStr for CardType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        CardType::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| Error::UnknownCardType(s.to_string()))
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Rendering options supplied with a request.
///
/// # Examples
///
/// ```
/// let opts = sharecard::CardOptions::default();
/// assert!(opts.show_attribution && opts.show_name);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardOptions {
    /// Draw the `Made with oarbit` line in the footer
    #[serde(alias = "show_attribution")]
    pub show_attribution: bool,
    /// Draw the athlete's name in the footer when the record has one
    #[serde(alias = "show_name")]
    pub show_name: bool,
    /// `#RRGGBB` accent override
    #[serde(alias = "team_color")]
    pub team_color: Option<String>,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            show_attribution: true,
            show_name: true,
            team_color: None,
        }
    }
}

/// Everything needed to lay out a card besides the workout itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardConfig {
    pub format: Format,
    pub card_type: CardType,
    pub options: CardOptions,
    /// Split-table clamp bounds
    pub table: TableBounds,
}

impl CardConfig {
    /// Palette for replay: the card type's preset with any team color applied.
    pub fn style(&self) -> StyleConfig {
        self.card_type
            .style()
            .with_team_color(self.options.team_color.as_deref())
    }
}

/// Decoded card payload, one variant per kind of data.
#[derive(Debug, Clone, PartialEq)]
pub enum CardData {
    Erg(WorkoutRecord),
    RegattaResult(RegattaResult),
    RegattaSummary(RegattaSummary),
    SeasonRecap(SeasonRecap),
    TeamLeaderboard(TeamLeaderboard),
}

impl CardData {
    /// Decode `value` as the payload `card_type` lays out.
    pub fn decode(card_type: CardType, value: Value) -> serde_json::Result<Self> {
        Ok(match card_type {
            CardType::ErgSummary | CardType::ErgSummaryAlt => {
                CardData::Erg(WorkoutRecord::from_json(value)?)
            }
            CardType::RegattaResult => CardData::RegattaResult(serde_json::from_value(value)?),
            CardType::RegattaSummary => CardData::RegattaSummary(serde_json::from_value(value)?),
            CardType::SeasonRecap => CardData::SeasonRecap(serde_json::from_value(value)?),
            CardType::TeamLeaderboard => CardData::TeamLeaderboard(serde_json::from_value(value)?),
        })
    }

    /// Rows the card may tabulate.
    pub fn row_count(&self) -> usize {
        match self {
            CardData::Erg(record) => record.splits.len(),
            CardData::RegattaResult(result) => result.crew.len(),
            CardData::RegattaSummary(summary) => summary.races.len(),
            CardData::SeasonRecap(recap) => recap.improvements.len(),
            CardData::TeamLeaderboard(board) => board.entries.len(),
        }
    }
}

impl From<WorkoutRecord> for CardData {
    fn from(record: WorkoutRecord) -> Self {
        CardData::Erg(record)
    }
}

/// Lay out `record` as an erg card. Never fails: missing data degrades to
/// placeholders and overflow to truncation.
pub fn render_plan<M: TextMeasurer + ?Sized>(
    record: &WorkoutRecord,
    config: &CardConfig,
    measurer: &M,
) -> LayoutPlan {
    rendering::assemble_plan(record, config, measurer)
}

/// Lay out any card. The data decides the assembler; `config` supplies the
/// format, options and table bounds.
pub fn render_card<M: TextMeasurer + ?Sized>(
    data: &CardData,
    config: &CardConfig,
    measurer: &M,
) -> LayoutPlan {
    match data {
        CardData::Erg(record) => render_plan(record, config, measurer),
        CardData::RegattaResult(result) => rendering::regatta::assemble_result(result, config, measurer),
        CardData::RegattaSummary(summary) => {
            rendering::regatta::assemble_summary(summary, config, measurer)
        }
        CardData::SeasonRecap(recap) => rendering::season::assemble_recap(recap, config, measurer),
        CardData::TeamLeaderboard(board) => {
            rendering::leaderboard::assemble_leaderboard(board, config, measurer)
        }
    }
}

/// Parse and validate a JSON request envelope, then lay it out.
pub fn render_request_json<M: TextMeasurer + ?Sized>(body: &str, measurer: &M) -> Result<LayoutPlan> {
    let ValidatedRequest { config, data } = CardRequest::from_json(body)?.validate()?;
    Ok(render_card(&data, &config, measurer))
}

/// Lay out `data` using `canvas` for measurement, then draw it in the
/// palette of the card that was laid out.
pub fn draw_card(data: &CardData, config: &CardConfig, canvas: &mut dyn Canvas) -> Result<LayoutPlan> {
    let plan = render_card(data, config, &*canvas);
    let style = plan
        .card_type
        .style()
        .with_team_color(config.options.team_color.as_deref());
    replay(&plan, &style, canvas)?;
    Ok(plan)
}
