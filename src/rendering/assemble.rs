//! Erg summary assembly: turns a workout record into positioned draw
//! instructions.
//!
//! The card is laid out top to bottom with a running `y` cursor. Header, hero
//! and metrics take what they need; the split table gets whatever is left
//! above the footer and adapts its rows to that height.

use log::debug;

use super::builder::{attribution, fit_font_size, line_height, SectionBuilder, TextStyle};
use super::canvas::TextMeasurer;
use super::layout::{layout_table, Rect};
use super::paint::{Align, ColorRole, DrawCommand, Font, FontWeight, GradientDirection};
use super::{LayoutPlan, PlanSection, SectionKind, TableSummary};
use crate::analysis::{CardAnalysis, Column, ColumnKey, PaceTrend};
use crate::formatter::{format_count, format_date, format_distance, format_rest, format_time_clean};
use crate::workout::{Split, WorkoutRecord};
use crate::{CardConfig, CardType, Format};

const HEADER_TOP: f32 = 100.0;
const ACCENT_STRIPE: f32 = 6.0;
const PANEL_PADDING: f32 = 40.0;
const PANEL_RADIUS: f32 = 24.0;
const GUTTER_WIDTH: f32 = 140.0;
const CELL_PADDING: f32 = 16.0;
/// Space kept free under the rows for the `+ N more` line.
const TRUNCATION_RESERVE: f32 = 48.0;

const DATE: TextStyle = TextStyle::new(Font::sans(FontWeight::Regular), 40.0, ColorRole::TextSecondary);
const HERO_LABEL: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 40.0, ColorRole::Accent);
const METRIC_VALUE: TextStyle = TextStyle::new(Font::mono(FontWeight::SemiBold), 64.0, ColorRole::TextPrimary);
const METRIC_LABEL: TextStyle = TextStyle::new(Font::sans(FontWeight::Regular), 28.0, ColorRole::TextMuted);
const TABLE_HEADING: TextStyle = TextStyle::new(Font::sans(FontWeight::Bold), 40.0, ColorRole::Accent);
const COLUMN_HEADER: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 28.0, ColorRole::TextMuted);
const ATHLETE: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 40.0, ColorRole::TextSecondary);

/// Per-format vertical budget.
#[derive(Debug, Clone, Copy)]
struct Geometry {
    margin: f32,
    title_max: f32,
    title_min: f32,
    hero_size: f32,
    metric_row: f32,
    footer: f32,
}

impl Geometry {
    fn for_format(format: Format) -> Self {
        match format {
            Format::Square => Geometry {
                margin: 120.0,
                title_max: 96.0,
                title_min: 56.0,
                hero_size: 180.0,
                metric_row: 150.0,
                footer: 180.0,
            },
            Format::Story => Geometry {
                margin: 120.0,
                title_max: 112.0,
                title_min: 64.0,
                hero_size: 240.0,
                metric_row: 180.0,
                footer: 260.0,
            },
        }
    }
}

/// Build the full draw plan for `record`.
pub fn assemble_plan<M: TextMeasurer + ?Sized>(
    record: &WorkoutRecord,
    config: &CardConfig,
    measurer: &M,
) -> LayoutPlan {
    let analysis = CardAnalysis::of(record);
    let (width, height) = config.format.dimensions();
    let (w, h) = (width as f32, height as f32);
    let geo = Geometry::for_format(config.format);
    let content = Rect::new(geo.margin, 0.0, w - 2.0 * geo.margin, h);
    let center = content.center_x();

    // header
    let mut header = SectionBuilder::new(SectionKind::Header);
    let mut y = HEADER_TOP;
    let title_font = Font::sans(FontWeight::Bold);
    let title_size = fit_font_size(
        measurer,
        &analysis.title,
        title_font,
        geo.title_max,
        geo.title_min,
        content.width,
    );
    let title_style = TextStyle::new(title_font, title_size, ColorRole::TextPrimary);
    header.text(analysis.title.clone(), title_style, center, y, Align::Center);
    y += line_height(title_size) + 16.0;
    if let Some(date) = format_date(record.date.as_deref()) {
        header.text(date, DATE, center, y, Align::Center);
        y += line_height(DATE.size) + 24.0;
    }

    // hero
    let mut hero = SectionBuilder::new(SectionKind::Hero);
    let hero_font = Font::mono(FontWeight::Bold);
    let hero_size = fit_font_size(
        measurer,
        &analysis.hero.value,
        hero_font,
        geo.hero_size,
        geo.hero_size / 2.0,
        content.width,
    );
    let hero_style = TextStyle::new(hero_font, hero_size, ColorRole::TextPrimary);
    hero.text(analysis.hero.value.clone(), hero_style, center, y, Align::Center);
    y += line_height(hero_size) + 8.0;
    hero.text(analysis.hero.label.clone(), HERO_LABEL, center, y, Align::Center);
    y += line_height(HERO_LABEL.size) + 48.0;

    let band = y;
    let mut background = SectionBuilder::new(SectionKind::Background);
    background.push(DrawCommand::SolidRect {
        x: 0.0,
        y: 0.0,
        width: w,
        height: h,
        color: ColorRole::Background,
    });
    background.push(DrawCommand::GradientRect {
        x: 0.0,
        y: 0.0,
        width: w,
        height: band,
        from: ColorRole::HeaderStart,
        to: ColorRole::HeaderEnd,
        direction: GradientDirection::Vertical,
    });
    background.push(DrawCommand::SolidRect {
        x: 0.0,
        y: band,
        width: w,
        height: ACCENT_STRIPE,
        color: ColorRole::Accent,
    });
    y = band + ACCENT_STRIPE + 56.0;

    // metrics
    let mut metrics = SectionBuilder::new(SectionKind::Metrics);
    let machine = analysis.classification.machine;
    let grid = [
        [
            (format_count(record.avg_watts), "AVG WATTS"),
            (format_count(record.avg_heart_rate), "AVG HR"),
            (format_count(record.stroke_rate), machine.rate_unit()),
        ],
        [
            (format_distance(record.distance_m), "DISTANCE"),
            (format_time_clean(record.duration_seconds), "DURATION"),
            (format_count(record.calories), "CALORIES"),
        ],
    ];
    for row in grid {
        for (i, (value, label)) in row.into_iter().enumerate() {
            let cx = content.x + content.width * (i as f32 + 0.5) / 3.0;
            metrics.text(value, METRIC_VALUE, cx, y, Align::Center);
            let label_y = y + line_height(METRIC_VALUE.size) + 8.0;
            metrics.text(label, METRIC_LABEL, cx, label_y, Align::Center);
        }
        y += geo.metric_row;
    }
    y += 40.0;

    let footer_top = h - geo.footer;
    let (table, summary) = if record.splits.is_empty() {
        (None, None)
    } else {
        let panel = Rect::new(content.x, y, content.width, (footer_top - 24.0 - y).max(0.0));
        let (section, summary) = build_table(record, &analysis, config, panel);
        (Some(section), Some(summary))
    };

    // footer
    let mut footer = SectionBuilder::new(SectionKind::Footer);
    if config.options.show_name {
        if let Some(name) = record.athlete.as_deref() {
            footer.text(name, ATHLETE, center, footer_top + 32.0, Align::Center);
        }
    }
    if config.options.show_attribution {
        attribution(&mut footer, w, h, 60.0);
    }

    let mut sections = vec![
        background.finish(),
        header.finish(),
        hero.finish(),
        metrics.finish(),
    ];
    sections.extend(table);
    sections.push(footer.finish());

    // a workout always lays out as an erg card
    let card_type = if config.card_type.is_erg() {
        config.card_type
    } else {
        CardType::ErgSummary
    };
    debug!(
        "assembled {} {} card: title={:?} hero={:?} rows={}/{}",
        card_type.key(),
        config.format.key(),
        analysis.title,
        analysis.hero.value,
        summary.as_ref().map_or(0, TableSummary::rows_shown),
        record.splits.len()
    );

    LayoutPlan {
        card_type,
        format: config.format,
        width,
        height,
        title: analysis.title.clone(),
        hero: analysis.hero.clone(),
        columns: analysis.columns.iter().map(|c| c.header.clone()).collect(),
        sections,
        table: summary,
    }
}

/// Anchor x for each column: left edge for left-aligned columns, right edge
/// (less padding) for right-aligned ones.
fn column_anchors(columns: &[Column], left: f32, width: f32) -> Vec<f32> {
    let total: f32 = columns.iter().map(|c| c.weight).sum();
    if total <= 0.0 {
        return vec![left; columns.len()];
    }
    let mut start = left;
    columns
        .iter()
        .map(|c| {
            let span = width * c.weight / total;
            let anchor = match c.align {
                Align::Left => start,
                Align::Center => start + span / 2.0,
                Align::Right => start + span - CELL_PADDING,
            };
            start += span;
            anchor
        })
        .collect()
}

fn trend_color(trend: PaceTrend) -> ColorRole {
    match trend {
        PaceTrend::Ahead => ColorRole::Ahead,
        PaceTrend::Behind => ColorRole::Behind,
        PaceTrend::Even => ColorRole::Even,
    }
}

/// `REST 1:00   +120m   HR 128` for whatever the split recorded.
fn rest_line(split: &Split) -> String {
    let mut parts = Vec::new();
    if let Some(rest) = format_rest(split.rest_time) {
        parts.push(format!("REST {rest}"));
    }
    if let Some(d) = split.rest_distance {
        parts.push(format!("+{}", format_distance(Some(d))));
    }
    if let Some(hr) = split.heart_rate_rest {
        parts.push(format!("HR {}", format_count(Some(hr))));
    }
    parts.join("   ")
}

fn build_table(
    record: &WorkoutRecord,
    analysis: &CardAnalysis,
    config: &CardConfig,
    panel: Rect,
) -> (PlanSection, TableSummary) {
    let splits = &record.splits;
    let interval = analysis.classification.interval;
    let policy = analysis.rest_rows;
    let inner = panel.inset(PANEL_PADDING, PANEL_PADDING);
    let mut body = SectionBuilder::new(SectionKind::Table);
    let mut y = inner.y;

    let heading = if interval { "INTERVALS" } else { "SPLITS" };
    body.text(heading, TABLE_HEADING, inner.x, y, Align::Left);
    y += line_height(TABLE_HEADING.size) + 24.0;

    let cols_left = inner.x + GUTTER_WIDTH;
    let anchors = column_anchors(&analysis.columns, cols_left, inner.width - GUTTER_WIDTH);
    for (col, x) in analysis.columns.iter().zip(&anchors) {
        body.text(col.header.clone(), COLUMN_HEADER, *x, y, col.align);
    }
    y += line_height(COLUMN_HEADER.size) + 16.0;
    body.push(DrawCommand::Line {
        x1: inner.x,
        y1: y,
        x2: inner.right(),
        y2: y,
        thickness: 2.0,
        color: ColorRole::TextMuted,
    });
    y += 12.0;

    let available = (inner.bottom() - TRUNCATION_RESERVE - y).max(0.0);
    let rest_total = policy.row_count(splits, splits.len());
    let layout = layout_table(&config.table, available, splits.len(), rest_total, policy.show);

    let cell = TextStyle::new(
        Font::mono(FontWeight::Regular),
        layout.font_size,
        ColorRole::TextSecondary,
    );
    let pace_cell = TextStyle::new(
        Font::mono(FontWeight::SemiBold),
        layout.font_size,
        ColorRole::TextPrimary,
    );
    let number = cell.with_color(ColorRole::TextMuted);
    let rest = TextStyle::new(
        Font::sans(FontWeight::Regular),
        layout.rest_font_size,
        ColorRole::TextMuted,
    );

    let mut rest_rows_shown = 0;
    for (i, split) in splits.iter().take(layout.rows_shown).enumerate() {
        let row_h = layout.data_row_height;
        let text_y = y + (row_h - line_height(layout.font_size)) / 2.0;
        body.text(split.display_number(i).to_string(), number, inner.x, text_y, Align::Left);
        if let Some(dev) = analysis.deviations.get(i).copied().flatten() {
            body.push(DrawCommand::Dot {
                cx: cols_left - 36.0,
                cy: y + row_h / 2.0,
                radius: (layout.font_size * 0.2).max(6.0),
                color: trend_color(dev.trend),
            });
        }
        for (col, x) in analysis.columns.iter().zip(&anchors) {
            let style = if col.key == ColumnKey::Pace { pace_cell } else { cell };
            body.text(col.cell(split), style, *x, text_y, col.align);
        }
        y += row_h;

        if policy.has_row(splits, i) {
            let rest_y = y + (layout.rest_row_height - line_height(rest.size)) / 2.0;
            body.text(rest_line(split), rest, cols_left, rest_y, Align::Left);
            y += layout.rest_row_height;
            rest_rows_shown += 1;
        } else if !policy.show {
            y += config.table.small_gap;
        }
    }

    let truncation = layout.truncation_label(interval);
    if let Some(label) = &truncation {
        let style = rest.with_color(ColorRole::TextSecondary);
        body.text(label.clone(), style, inner.center_x(), y + 8.0, Align::Center);
        y += line_height(rest.size) + 16.0;
    }

    let mut commands = Vec::with_capacity(body.commands.len() + 1);
    commands.push(DrawCommand::Panel {
        x: panel.x,
        y: panel.y,
        width: panel.width,
        height: (y + PANEL_PADDING - panel.y).min(panel.height),
        radius: PANEL_RADIUS,
        fill: ColorRole::Panel,
        border: Some(ColorRole::Accent),
    });
    commands.append(&mut body.commands);

    let summary = TableSummary {
        layout,
        rest_rows_shown,
        truncation,
    };
    (
        PlanSection {
            kind: SectionKind::Table,
            commands,
        },
        summary,
    )
}
