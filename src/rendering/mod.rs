//! Rendering pipeline: analysis -> layout -> draw instructions -> canvas.

pub mod assemble;
pub(crate) mod builder;
pub mod canvas;
pub mod layout;
pub mod leaderboard;
pub mod paint;
pub mod raster;
pub mod regatta;
pub mod season;
pub mod style;

use serde::Serialize;

use crate::analysis::Hero;
use crate::{CardType, Format};

pub use assemble::assemble_plan;
pub use builder::ATTRIBUTION;
pub use canvas::{Canvas, MonospaceMeasurer, RecordingCanvas, TextExtent, TextMeasurer};
pub use layout::{layout_list, layout_table, Rect, TableBounds, TableLayout};
pub use paint::{Align, ColorRole, DrawCommand, Font, FontFamily, FontWeight};
pub use style::{Rgb, StyleConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Background,
    Header,
    Hero,
    Metrics,
    Table,
    /// Crew names under a regatta result.
    Crew,
    /// Records and improvements on a season recap.
    Progress,
    Legend,
    Footer,
}

/// A named group of draw instructions, painted in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanSection {
    pub kind: SectionKind,
    pub commands: Vec<DrawCommand>,
}

/// What happened to the card's table, for truncation messaging.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSummary {
    pub layout: TableLayout,
    pub rest_rows_shown: usize,
    pub truncation: Option<String>,
}

impl TableSummary {
    pub fn rows_shown(&self) -> usize {
        self.layout.rows_shown
    }

    pub fn rows_omitted(&self) -> usize {
        self.layout.rows_omitted
    }
}

/// Positioned draw instructions for one card, independent of any backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutPlan {
    pub card_type: CardType,
    pub format: Format,
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub hero: Hero,
    pub columns: Vec<String>,
    pub sections: Vec<PlanSection>,
    /// `None` when there were no rows to tabulate.
    pub table: Option<TableSummary>,
}

impl LayoutPlan {
    pub fn section(&self, kind: SectionKind) -> Option<&PlanSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn commands(&self) -> impl Iterator<Item = &DrawCommand> {
        self.sections.iter().flat_map(|s| s.commands.iter())
    }

    /// Every text run in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands().filter_map(DrawCommand::text)
    }

    pub fn rows_shown(&self) -> usize {
        self.table.as_ref().map_or(0, TableSummary::rows_shown)
    }

    pub fn rows_omitted(&self) -> usize {
        self.table.as_ref().map_or(0, TableSummary::rows_omitted)
    }
}
