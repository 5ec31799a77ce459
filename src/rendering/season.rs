//! Season recap card: volume totals, then personal records and test-piece
//! improvements.

use log::debug;

use super::builder::{attribution, backdrop, fit_font_size, line_height, SectionBuilder, TextStyle};
use super::canvas::TextMeasurer;
use super::paint::{Align, ColorRole, DrawCommand, Font, FontWeight};
use super::{LayoutPlan, SectionKind};
use crate::analysis::Hero;
use crate::formatter::{format_count, format_hours, format_volume, PLACEHOLDER};
use crate::season::SeasonRecap;
use crate::{CardConfig, CardType, Format};

const MARGIN: f32 = 120.0;
const STAT_GAP: f32 = 200.0;
const IMPROVEMENT_X: f32 = 200.0;
const TOP_IMPROVEMENTS: usize = 3;

const KICKER: TextStyle = TextStyle::new(Font::sans(FontWeight::Bold), 56.0, ColorRole::Accent);
const DATE_RANGE: TextStyle = TextStyle::new(Font::sans(FontWeight::Regular), 38.0, ColorRole::TextSecondary);
const SECTION: TextStyle = TextStyle::new(Font::sans(FontWeight::Bold), 44.0, ColorRole::TextMuted);
const STAT_VALUE: TextStyle = TextStyle::new(Font::mono(FontWeight::Bold), 96.0, ColorRole::Gold);
const STAT_LABEL: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 36.0, ColorRole::TextMuted);
const FAVORITE: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 40.0, ColorRole::TextSecondary);
const PR_COUNT: TextStyle = TextStyle::new(Font::mono(FontWeight::Bold), 100.0, ColorRole::Gold);
const PR_LABEL: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 36.0, ColorRole::TextPrimary);
const GAIN: TextStyle = TextStyle::new(Font::sans(FontWeight::Bold), 48.0, ColorRole::Highlight);
const TEST_TYPE: TextStyle = TextStyle::new(Font::sans(FontWeight::Bold), 42.0, ColorRole::TextPrimary);
const TRANSITION: TextStyle = TextStyle::new(Font::mono(FontWeight::Regular), 38.0, ColorRole::TextSecondary);
const DELTA: TextStyle = TextStyle::new(Font::mono(FontWeight::Bold), 42.0, ColorRole::Gold);
const ATHLETE: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 52.0, ColorRole::TextSecondary);

/// Large value with its label underneath.
fn stat(section: &mut SectionBuilder, value: String, label: &str, color: ColorRole, x: f32, y: f32) {
    section.text(value, STAT_VALUE.with_color(color), x, y, Align::Center);
    section.text(label, STAT_LABEL, x, y + 120.0, Align::Center);
}

pub fn assemble_recap<M: TextMeasurer + ?Sized>(
    recap: &SeasonRecap,
    config: &CardConfig,
    measurer: &M,
) -> LayoutPlan {
    let (width, height) = config.format.dimensions();
    let (w, h) = (width as f32, height as f32);
    let center = w / 2.0;
    let story = config.format == Format::Story;
    let title = recap.season_name.clone().unwrap_or_else(|| "Season".into());

    let mut header = SectionBuilder::new(SectionKind::Header);
    let mut y = 120.0;
    header.text("SEASON RECAP", KICKER, center, y, Align::Center);
    y += 90.0;
    let title_font = Font::sans(FontWeight::Bold);
    let title_size = fit_font_size(measurer, &title, title_font, 88.0, 56.0, w - 2.0 * MARGIN);
    header.text(
        title.clone(),
        TextStyle::new(title_font, title_size, ColorRole::TextPrimary),
        center,
        y,
        Align::Center,
    );
    y += line_height(title_size) + 16.0;
    if let Some(range) = &recap.date_range {
        header.text(range.clone(), DATE_RANGE, center, y, Align::Center);
        y += DATE_RANGE.line_height() + 56.0;
    }
    header.separator(center, y, 800.0, ColorRole::Gold, ColorRole::Accent);
    y += 80.0;

    // volume
    let mut numbers = SectionBuilder::new(SectionKind::Metrics);
    numbers.text("YOUR YEAR IN NUMBERS", SECTION, center, y, Align::Center);
    y += 100.0;
    let distance = format_volume(recap.total_meters);
    let workouts = format_count(recap.workout_count);
    let hours = format_hours(recap.total_minutes);
    let calories = format_count(recap.total_calories);
    let (left, right) = (w * 0.33, w * 0.67);
    if story {
        stat(&mut numbers, distance.clone(), "TOTAL DISTANCE", ColorRole::Gold, center, y);
        y += STAT_GAP;
        stat(&mut numbers, workouts, "WORKOUTS", ColorRole::Highlight, left, y);
        stat(&mut numbers, hours, "TIME", ColorRole::Highlight, right, y);
        y += STAT_GAP;
        stat(&mut numbers, calories, "CALORIES", ColorRole::Accent, left, y);
        let weekly = format_volume(recap.avg_weekly_meters);
        stat(&mut numbers, weekly, "AVG/WEEK", ColorRole::Accent, right, y);
        y += STAT_GAP + 60.0;
        if let Some(machine) = &recap.favorite_machine {
            numbers.text(format!("Favorite: {machine}"), FAVORITE, center, y, Align::Center);
            y += 120.0;
        }
    } else {
        stat(&mut numbers, distance.clone(), "TOTAL DISTANCE", ColorRole::Gold, left, y);
        stat(&mut numbers, workouts, "WORKOUTS", ColorRole::Highlight, right, y);
        y += STAT_GAP;
        stat(&mut numbers, hours, "TIME", ColorRole::Accent, left, y);
        stat(&mut numbers, calories, "CALORIES", ColorRole::Accent, right, y);
        y += STAT_GAP;
    }

    // progress
    let mut progress = SectionBuilder::new(SectionKind::Progress);
    progress.text("YOUR PROGRESS", SECTION, center, y, Align::Center);
    y += 100.0;
    if let Some(prs) = recap.prs_set {
        let panel = (600.0, 220.0);
        progress.push(DrawCommand::Panel {
            x: center - panel.0 / 2.0,
            y,
            width: panel.0,
            height: panel.1,
            radius: 24.0,
            fill: ColorRole::Panel,
            border: Some(ColorRole::Gold),
        });
        progress.text(prs.to_string(), PR_COUNT, center, y + 16.0, Align::Center);
        let label = if prs == 1 { "PERSONAL RECORD SET" } else { "PERSONAL RECORDS SET" };
        progress.text(label, PR_LABEL, center, y + 150.0, Align::Center);
        y += panel.1 + 60.0;
    }
    if let Some(line) = recap.biggest_improvement.line() {
        progress.text(line, GAIN, center, y, Align::Center);
        y += 100.0;
    }
    let mut improvements_shown = 0;
    if !recap.improvements.is_empty() && (story || y < h - 700.0) {
        y += 40.0;
        progress.text("TOP IMPROVEMENTS", SECTION.with_size(36.0), center, y, Align::Center);
        y += 80.0;
        for item in recap.improvements.iter().take(TOP_IMPROVEMENTS) {
            let test = item.test_type.as_deref().unwrap_or(PLACEHOLDER);
            progress.text(test, TEST_TYPE, IMPROVEMENT_X, y, Align::Left);
            progress.text(item.transition(), TRANSITION, IMPROVEMENT_X + 280.0, y, Align::Left);
            if let Some(delta) = &item.delta {
                progress.text(delta.clone(), DELTA, w - IMPROVEMENT_X, y, Align::Right);
            }
            y += 80.0;
            improvements_shown += 1;
        }
    }

    let mut footer = SectionBuilder::new(SectionKind::Footer);
    if config.options.show_name {
        if let Some(name) = &recap.athlete {
            footer.text(name.clone(), ATHLETE, center, h - 220.0, Align::Center);
        }
    }
    if config.options.show_attribution {
        attribution(&mut footer, w, h, 60.0);
    }

    debug!(
        "assembled season recap {:?}: distance={distance} improvements={improvements_shown}/{} end_y={y}",
        title,
        recap.improvements.len()
    );

    LayoutPlan {
        card_type: CardType::SeasonRecap,
        format: config.format,
        width,
        height,
        title,
        hero: Hero {
            value: distance,
            label: "TOTAL DISTANCE".into(),
        },
        columns: Vec::new(),
        sections: vec![
            backdrop(w, h).finish(),
            header.finish(),
            numbers.finish(),
            progress.finish(),
            footer.finish(),
        ],
        table: None,
    }
}
