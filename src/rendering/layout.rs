//! Layout primitives and the adaptive split-table sizing.
//!
//! Table sizing is two-phase: derive an ideal row height from the space
//! available, clamp it, then rescale everything down if the clamped rows
//! still overflow. Rows and fonts never drop below their floors; past that
//! point rows are truncated instead.

use log::{debug, info};
use serde::Serialize;

/// Slack for float error when checking whether rows fit exactly.
const FIT_EPSILON: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Shrink by `dx` on the left/right and `dy` on the top/bottom.
    pub fn inset(&self, dx: f32, dy: f32) -> Rect {
        Rect {
            x: self.x + dx,
            y: self.y + dy,
            width: (self.width - 2.0 * dx).max(0.0),
            height: (self.height - 2.0 * dy).max(0.0),
        }
    }
}

/// Clamp bounds for the split table, in pixels at the 2160px base width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableBounds {
    pub min_row: f32,
    pub max_row: f32,
    pub min_rest_row: f32,
    pub max_rest_row: f32,
    pub min_font: f32,
    pub max_font: f32,
    /// Data font size as a fraction of the data row height.
    pub font_ratio: f32,
    /// Rest row font size as a fraction of the data font size.
    pub rest_font_ratio: f32,
    pub min_rest_font: f32,
    /// Spacing between data rows when no rest rows are shown.
    pub small_gap: f32,
    /// Row height used when there is nothing to divide the space by.
    pub default_row: f32,
}

impl Default for TableBounds {
    fn default() -> Self {
        Self {
            min_row: 56.0,
            max_row: 120.0,
            min_rest_row: 28.0,
            max_rest_row: 56.0,
            min_font: 26.0,
            max_font: 52.0,
            font_ratio: 0.42,
            rest_font_ratio: 0.75,
            min_rest_font: 20.0,
            small_gap: 4.0,
            default_row: 80.0,
        }
    }
}

/// Computed sizing for the split table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TableLayout {
    pub data_row_height: f32,
    pub rest_row_height: f32,
    pub font_size: f32,
    pub rest_font_size: f32,
    /// Rows that fit in the available height; never below 1.
    pub max_rows: usize,
    pub rows_shown: usize,
    pub rows_omitted: usize,
}

impl TableLayout {
    pub fn is_truncated(&self) -> bool {
        self.rows_omitted > 0
    }

    /// `+ 3 more intervals` when rows were dropped.
    pub fn truncation_label(&self, interval: bool) -> Option<String> {
        if interval {
            self.truncation_note("interval", "intervals")
        } else {
            self.truncation_note("split", "splits")
        }
    }

    /// `+ 1 more {one}` or `+ N more {many}` when rows were dropped.
    pub fn truncation_note(&self, one: &str, many: &str) -> Option<String> {
        match self.rows_omitted {
            0 => None,
            1 => Some(format!("+ 1 more {one}")),
            n => Some(format!("+ {n} more {many}")),
        }
    }
}

/// Size `rows` data rows and `rest_rows` rest rows into `available` pixels.
pub fn layout_table(
    bounds: &TableBounds,
    available: f32,
    rows: usize,
    rest_rows: usize,
    show_rest: bool,
) -> TableLayout {
    let available = if available.is_finite() { available } else { 0.0 };
    let rest_rows = if show_rest { rest_rows } else { 0 };
    // Without rest rows each data row carries a small fixed gap below it.
    let gap = if show_rest { 0.0 } else { bounds.small_gap };
    let units = rows as f32 + rest_rows as f32 * 0.5;

    let ideal = if units > 0.0 && available > 0.0 {
        available / units - gap
    } else {
        bounds.default_row
    };

    let mut data = ideal.clamp(bounds.min_row, bounds.max_row);
    let mut rest = (data * 0.5).clamp(bounds.min_rest_row, bounds.max_rest_row);
    let mut font = (data * bounds.font_ratio).clamp(bounds.min_font, bounds.max_font);

    let fixed = rows as f32 * gap;
    let total = fixed + rows as f32 * data + rest_rows as f32 * rest;
    if available > 0.0 && total > available {
        let scale = ((available - fixed) / (total - fixed)).max(0.0);
        data = (data * scale).max(bounds.min_row);
        rest = (rest * scale).max(bounds.min_rest_row);
        font = (font * scale).max(bounds.min_font);
    }

    let max_rows = if available > 0.0 {
        let budget = available + FIT_EPSILON;
        let pitch = data + if show_rest { rest } else { gap };
        let paired = (budget / pitch).floor() as usize;
        let fit = if show_rest && paired >= rest_rows {
            // once every rest row is paid for, further rows cost only their own height
            let left = budget - rest_rows as f32 * pitch;
            rest_rows + (left / data).floor() as usize
        } else {
            paired
        };
        fit.max(1)
    } else {
        1
    };
    let rows_shown = rows.min(max_rows);
    let layout = TableLayout {
        data_row_height: data,
        rest_row_height: rest,
        font_size: font,
        rest_font_size: (font * bounds.rest_font_ratio).max(bounds.min_rest_font),
        max_rows,
        rows_shown,
        rows_omitted: rows - rows_shown,
    };

    debug!(
        "table layout available={available} rows={rows} rest_rows={rest_rows} row={data:.1} font={font:.1} max_rows={max_rows}"
    );
    if layout.is_truncated() {
        info!(
            "split table truncated: showing {} of {rows} rows",
            layout.rows_shown
        );
    }
    layout
}

/// Size a plain list of `rows` that shows at most `limit` of them. Rows
/// are sized for the ones that can be shown, so a long list is cut rather
/// than squeezed.
pub fn layout_list(bounds: &TableBounds, available: f32, rows: usize, limit: usize) -> TableLayout {
    let sized = layout_table(bounds, available, rows.min(limit.max(1)), 0, false);
    TableLayout {
        rows_omitted: rows - sized.rows_shown,
        ..sized
    }
}
