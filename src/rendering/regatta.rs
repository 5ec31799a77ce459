//! Regatta cards: one race result with its placement badge, and the
//! results table for every race entered at a regatta.

use log::debug;

use super::builder::{
    attribution, backdrop, fit_font_size, line_height, medal_color, place_color, wrap_words,
    SectionBuilder, TextStyle,
};
use super::canvas::TextMeasurer;
use super::layout::{layout_list, layout_table};
use super::paint::{Align, ColorRole, DrawCommand, Font, FontWeight};
use super::{LayoutPlan, SectionKind, TableSummary};
use crate::analysis::Hero;
use crate::formatter::{format_ordinal, NO_TIME, PLACEHOLDER};
use crate::regatta::{location_line, RegattaResult, RegattaSummary};
use crate::{CardConfig, CardType, Format};

const MARGIN: f32 = 120.0;
const PANEL_INSET: f32 = 160.0;
const PANEL_RADIUS: f32 = 24.0;
const CREW_LINES: usize = 6;
const SQUARE_RACES: usize = 6;
/// Space kept under the result rows for the `+ N more` line.
const TRUNCATION_RESERVE: f32 = 80.0;
/// Gap, stats panel and padding below the results.
const STATS_BLOCK: f32 = 420.0;
const FOOTER: f32 = 200.0;

const LOCATION: TextStyle = TextStyle::new(Font::sans(FontWeight::Regular), 36.0, ColorRole::TextSecondary);
const EVENT: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 44.0, ColorRole::TextMuted);
const ENTRIES: TextStyle = TextStyle::new(Font::sans(FontWeight::Regular), 36.0, ColorRole::TextMuted);
const FINISH_TIME: TextStyle = TextStyle::new(Font::mono(FontWeight::Bold), 120.0, ColorRole::Highlight);
const PANEL_LABEL: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 40.0, ColorRole::TextSecondary);
const MARGIN_LINE: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 48.0, ColorRole::TextSecondary);
const SUBHEADING: TextStyle = TextStyle::new(Font::sans(FontWeight::Bold), 40.0, ColorRole::TextMuted);
const CREW: TextStyle = TextStyle::new(Font::sans(FontWeight::Regular), 32.0, ColorRole::TextSecondary);
const EVENT_TYPE: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 32.0, ColorRole::TextMuted);
const COLUMN_HEADER: TextStyle = TextStyle::new(Font::sans(FontWeight::Bold), 32.0, ColorRole::TextMuted);
const STAT_VALUE: TextStyle = TextStyle::new(Font::mono(FontWeight::Bold), 72.0, ColorRole::Highlight);
const STAT_LABEL: TextStyle = TextStyle::new(Font::sans(FontWeight::SemiBold), 32.0, ColorRole::TextMuted);
const MEDAL_COUNT: TextStyle = TextStyle::new(Font::mono(FontWeight::Bold), 56.0, ColorRole::TextPrimary);

/// Placement badge: podium places large in their medal color, others
/// smaller and muted.
fn badge_style(result: &RegattaResult) -> TextStyle {
    let font = Font::sans(FontWeight::Bold);
    match result.medal() {
        Some(medal) => TextStyle::new(font, 280.0, medal_color(medal)),
        None => TextStyle::new(font, 200.0, ColorRole::TextMuted),
    }
}

/// Lay out a single race result.
pub fn assemble_result<M: TextMeasurer + ?Sized>(
    result: &RegattaResult,
    config: &CardConfig,
    measurer: &M,
) -> LayoutPlan {
    let (width, height) = config.format.dimensions();
    let (w, h) = (width as f32, height as f32);
    let center = w / 2.0;
    let title = result.regatta_name.clone().unwrap_or_else(|| "Regatta".into());

    // header
    let mut header = SectionBuilder::new(SectionKind::Header);
    let mut y = 120.0;
    let title_font = Font::sans(FontWeight::Bold);
    let title_size = fit_font_size(measurer, &title, title_font, 72.0, 48.0, w - 2.0 * MARGIN);
    header.text(
        title.clone(),
        TextStyle::new(title_font, title_size, ColorRole::TextPrimary),
        center,
        y,
        Align::Center,
    );
    y += line_height(title_size) + 20.0;
    if let Some(line) = location_line(result.location.as_deref(), result.date.as_deref()) {
        header.text(line, LOCATION, center, y, Align::Center);
        y += LOCATION.line_height() + 40.0;
    }
    if let Some(event) = &result.event_name {
        header.text(event.clone(), EVENT, center, y, Align::Center);
        y += EVENT.line_height() + 80.0;
    }

    // placement badge
    let mut hero = SectionBuilder::new(SectionKind::Hero);
    let badge = badge_style(result);
    let placement = result.placement_label().unwrap_or_else(|| PLACEHOLDER.to_string());
    hero.text(placement.clone(), badge, center, y, Align::Center);
    y += badge.line_height() + 8.0;
    let entries = result.entries_line();
    if let Some(line) = &entries {
        hero.text(line.clone(), ENTRIES, center, y, Align::Center);
        y += ENTRIES.line_height() + 60.0;
    }

    // finish time and margin
    let mut metrics = SectionBuilder::new(SectionKind::Metrics);
    let panel_height = 280.0;
    metrics.push(DrawCommand::Panel {
        x: PANEL_INSET,
        y,
        width: w - 2.0 * PANEL_INSET,
        height: panel_height,
        radius: PANEL_RADIUS,
        fill: ColorRole::Panel,
        border: None,
    });
    let time = result.time.as_deref().unwrap_or(NO_TIME);
    metrics.text(time, FINISH_TIME, center, y + 40.0, Align::Center);
    metrics.text("FINISH TIME", PANEL_LABEL, center, y + 200.0, Align::Center);
    y += panel_height + 80.0;
    if let Some((line, won)) = result.margin_line() {
        let style = if won { MARGIN_LINE.with_color(ColorRole::Gold) } else { MARGIN_LINE };
        metrics.text(line, style, center, y, Align::Center);
        y += MARGIN_LINE.line_height() + 60.0;
    }

    // crew, when there is room for it
    let footer_top = h - 320.0;
    let mut crew = SectionBuilder::new(SectionKind::Crew);
    if !result.crew.is_empty() && (config.format == Format::Story || y < h - 600.0) {
        y += 60.0;
        crew.text("CREW", SUBHEADING, center, y, Align::Center);
        y += 70.0;
        let joined = result.crew.join(" • ");
        let lines = wrap_words(measurer, &joined, CREW, w - 2.0 * PANEL_INSET);
        let pitch = 50.0;
        let room = ((footer_top - y) / pitch).floor().max(0.0) as usize;
        for line in lines.into_iter().take(CREW_LINES.min(room)) {
            crew.text(line, CREW, center, y, Align::Center);
            y += pitch;
        }
    }

    let mut footer = SectionBuilder::new(SectionKind::Footer);
    if let Some(kind) = &result.event_type {
        footer.text(kind.to_uppercase(), EVENT_TYPE, center, h - 280.0, Align::Center);
    }
    if config.options.show_attribution {
        attribution(&mut footer, w, h, 60.0);
    }

    debug!(
        "assembled regatta result for {:?}: place={placement} crew={}",
        title,
        result.crew.len()
    );

    let mut sections = vec![
        backdrop(w, h).finish(),
        header.finish(),
        hero.finish(),
        metrics.finish(),
    ];
    if !crew.is_empty() {
        sections.push(crew.finish());
    }
    sections.push(footer.finish());

    LayoutPlan {
        card_type: CardType::RegattaResult,
        format: config.format,
        width,
        height,
        title,
        hero: Hero {
            value: placement,
            label: entries.unwrap_or_else(|| "PLACE".into()),
        },
        columns: Vec::new(),
        sections,
        table: None,
    }
}

/// Lay out every race from one regatta with a medal tally underneath.
pub fn assemble_summary<M: TextMeasurer + ?Sized>(
    summary: &RegattaSummary,
    config: &CardConfig,
    measurer: &M,
) -> LayoutPlan {
    let (width, height) = config.format.dimensions();
    let (w, h) = (width as f32, height as f32);
    let center = w / 2.0;
    let title = summary.regatta_name.clone().unwrap_or_else(|| "Regatta".into());

    let mut header = SectionBuilder::new(SectionKind::Header);
    let mut y = 140.0;
    let title_font = Font::sans(FontWeight::Bold);
    let title_size = fit_font_size(measurer, &title, title_font, 72.0, 48.0, w - 2.0 * MARGIN);
    header.text(
        title.clone(),
        TextStyle::new(title_font, title_size, ColorRole::TextPrimary),
        center,
        y,
        Align::Center,
    );
    y += line_height(title_size) + 20.0;
    if let Some(line) = location_line(summary.location.as_deref(), summary.date.as_deref()) {
        let style = LOCATION.with_size(40.0);
        header.text(line, style, center, y, Align::Center);
        y += style.line_height() + 60.0;
    }
    header.separator(center, y, 600.0, ColorRole::Accent, ColorRole::Highlight);
    y += 80.0;

    let columns = [
        ("EVENT", 140.0, Align::Left),
        ("PLACE", w * 0.55, Align::Left),
        ("TIME", w * 0.70, Align::Left),
        ("MARGIN", w - 140.0, Align::Right),
    ];

    let races = &summary.races;
    let mut table = None;
    let mut results = SectionBuilder::new(SectionKind::Table);
    if !races.is_empty() {
        for (label, x, align) in columns {
            results.text(label, COLUMN_HEADER, x, y, align);
        }
        y += 60.0;

        let available = (h - FOOTER - STATS_BLOCK - TRUNCATION_RESERVE - y).max(0.0);
        let layout = match config.format {
            Format::Square => layout_list(&config.table, available, races.len(), SQUARE_RACES),
            Format::Story => layout_table(&config.table, available, races.len(), 0, false),
        };

        let row_h = layout.data_row_height;
        let font = layout.font_size;
        let text_y = |top: f32| top + (row_h - line_height(font)) / 2.0;
        for (i, race) in races.iter().take(layout.rows_shown).enumerate() {
            if i % 2 == 1 {
                results.push(DrawCommand::SolidRect {
                    x: 80.0,
                    y,
                    width: w - 160.0,
                    height: row_h,
                    color: ColorRole::Panel,
                });
            }
            let ty = text_y(y);
            let name = race.event_name.as_deref().unwrap_or(PLACEHOLDER);
            let name_style = TextStyle::new(Font::sans(FontWeight::SemiBold), font, ColorRole::TextPrimary);
            results.text(name, name_style, 140.0, ty, Align::Left);

            let place = race.placement.map_or_else(|| PLACEHOLDER.to_string(), format_ordinal);
            let place_style = TextStyle::new(Font::mono(FontWeight::Bold), font, place_color(race.placement));
            results.text(place, place_style, w * 0.55, ty, Align::Left);

            let time_style = TextStyle::new(Font::mono(FontWeight::Regular), font, ColorRole::TextSecondary);
            results.text(race.time.as_deref().unwrap_or(NO_TIME), time_style, w * 0.70, ty, Align::Left);

            if let Some(margin) = &race.margin {
                let margin_style =
                    TextStyle::new(Font::sans(FontWeight::Regular), font * 0.85, ColorRole::TextMuted);
                results.text(margin.clone(), margin_style, w - 140.0, ty, Align::Right);
            }
            y += row_h + config.table.small_gap;
        }

        let truncation = layout.truncation_note("event", "events");
        if let Some(note) = &truncation {
            results.text(note.clone(), ENTRIES, center, y + 20.0, Align::Center);
            y += TRUNCATION_RESERVE;
        }
        table = Some(TableSummary {
            layout,
            rest_rows_shown: 0,
            truncation,
        });
    }

    // stats panel
    y += 100.0;
    let mut stats = SectionBuilder::new(SectionKind::Metrics);
    stats.push(DrawCommand::Panel {
        x: 140.0,
        y,
        width: w - 280.0,
        height: 280.0,
        radius: PANEL_RADIUS,
        fill: ColorRole::Panel,
        border: None,
    });
    let stat_y = y + 60.0;
    let label_y = stat_y + STAT_VALUE.line_height() + 14.0;
    stats.text(races.len().to_string(), STAT_VALUE, w * 0.25, stat_y, Align::Center);
    stats.text("EVENTS", STAT_LABEL, w * 0.25, label_y, Align::Center);

    let medals = summary.medals();
    let tally = [
        (medals.gold, ColorRole::Gold),
        (medals.silver, ColorRole::Silver),
        (medals.bronze, ColorRole::Bronze),
    ];
    for (i, (count, color)) in tally.into_iter().enumerate() {
        let x = w * 0.50 + (i as f32 - 1.0) * 100.0;
        stats.text(count.to_string(), MEDAL_COUNT.with_color(color), x, stat_y + 10.0, Align::Center);
    }
    stats.text("MEDALS", STAT_LABEL, w * 0.50, label_y, Align::Center);

    let best = summary.best_placement();
    let best_label = best.map_or_else(|| PLACEHOLDER.to_string(), format_ordinal);
    if best.is_some() {
        let style = STAT_VALUE.with_color(place_color(best));
        stats.text(best_label.clone(), style, w * 0.75, stat_y, Align::Center);
        stats.text("BEST", STAT_LABEL, w * 0.75, label_y, Align::Center);
    }

    let mut footer = SectionBuilder::new(SectionKind::Footer);
    if config.options.show_attribution {
        attribution(&mut footer, w, h, 60.0);
    }

    debug!(
        "assembled regatta summary for {:?}: races={} medals={}",
        title,
        races.len(),
        medals.total()
    );

    let mut sections = vec![backdrop(w, h).finish(), header.finish()];
    if !results.is_empty() {
        sections.push(results.finish());
    }
    sections.push(stats.finish());
    sections.push(footer.finish());

    LayoutPlan {
        card_type: CardType::RegattaSummary,
        format: config.format,
        width,
        height,
        title,
        hero: Hero {
            value: best_label,
            label: "BEST".into(),
        },
        columns: columns.iter().map(|(label, _, _)| label.to_string()).collect(),
        sections,
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::builder::ATTRIBUTION;
    use crate::rendering::canvas::MonospaceMeasurer;
    use crate::regatta::RaceResult;

    fn config(format: Format) -> CardConfig {
        CardConfig {
            format,
            card_type: CardType::RegattaResult,
            ..Default::default()
        }
    }

    fn charles(placement: u32) -> RegattaResult {
        RegattaResult {
            regatta_name: Some("Head of the Charles".into()),
            location: Some("Boston, MA".into()),
            date: Some("2026-10-18".into()),
            event_name: Some("Men's Championship 8+".into()),
            placement: Some(placement),
            total_entries: Some(24),
            time: Some("14:42.3".into()),
            behind_leader: (placement > 1).then_some(12.8),
            winning_margin: (placement == 1).then_some(3.1),
            crew: ["Chen (8)", "Lopez (7)", "Park (6)", "Williams (5)", "Cox: Miller"]
                .map(String::from)
                .to_vec(),
            event_type: Some("Head Race".into()),
        }
    }

    fn text_run<'a>(plan: &'a LayoutPlan, text: &str) -> Option<&'a DrawCommand> {
        plan.commands().find(|c| c.text() == Some(text))
    }

    #[test]
    fn winner_gets_a_gold_badge_and_margin_of_victory() {
        let plan = assemble_result(&charles(1), &config(Format::Square), &MonospaceMeasurer);
        assert_eq!(plan.card_type, CardType::RegattaResult);
        assert_eq!(plan.title, "Head of the Charles");
        assert_eq!(plan.hero.value, "1st");
        assert_eq!(plan.hero.label, "out of 24 entries");
        let Some(DrawCommand::Text { color, size, .. }) = text_run(&plan, "1st") else {
            panic!("badge drawn");
        };
        assert_eq!((*color, *size), (ColorRole::Gold, 280.0));
        let Some(DrawCommand::Text { color, .. }) = text_run(&plan, "Won by 3.1s") else {
            panic!("margin drawn");
        };
        assert_eq!(*color, ColorRole::Gold);
        let Some(DrawCommand::Text { color, .. }) = text_run(&plan, "14:42.3") else {
            panic!("time drawn");
        };
        assert_eq!(*color, ColorRole::Highlight);
        assert!(text_run(&plan, "Boston, MA • Oct 18, 2026").is_some());
        assert!(text_run(&plan, "HEAD RACE").is_some());
        assert!(text_run(&plan, ATTRIBUTION).is_some());
        assert!(plan.section(SectionKind::Crew).is_some());
    }

    #[test]
    fn lower_places_are_muted_and_report_the_gap() {
        let silver = assemble_result(&charles(2), &config(Format::Square), &MonospaceMeasurer);
        let Some(DrawCommand::Text { color, .. }) = text_run(&silver, "2nd") else {
            panic!("badge drawn");
        };
        assert_eq!(*color, ColorRole::Silver);

        let plan = assemble_result(&charles(7), &config(Format::Square), &MonospaceMeasurer);
        let Some(DrawCommand::Text { color, size, .. }) = text_run(&plan, "7th") else {
            panic!("badge drawn");
        };
        assert_eq!((*color, *size), (ColorRole::TextMuted, 200.0));
        let Some(DrawCommand::Text { color, .. }) = text_run(&plan, "12.8s behind leader") else {
            panic!("gap drawn");
        };
        assert_eq!(*color, ColorRole::TextSecondary);
        assert!(plan.texts().all(|t| !t.starts_with("Won by")));
    }

    #[test]
    fn sparse_result_still_lays_out() {
        let plan = assemble_result(&RegattaResult::default(), &config(Format::Story), &MonospaceMeasurer);
        assert_eq!(plan.title, "Regatta");
        assert_eq!(plan.hero.value, "--");
        assert_eq!(plan.hero.label, "PLACE");
        assert!(text_run(&plan, NO_TIME).is_some());
        assert!(plan.section(SectionKind::Crew).is_none());
    }

    #[test]
    fn crew_stays_above_the_footer() {
        let mut result = charles(1);
        result.crew = (1..=40).map(|i| format!("Athlete Number {i}")).collect();
        for format in Format::ALL {
            let plan = assemble_result(&result, &config(format), &MonospaceMeasurer);
            let crew = plan.section(SectionKind::Crew).expect("crew");
            // heading plus at most six lines
            assert!(crew.commands.len() <= 7);
            for cmd in &crew.commands {
                if let DrawCommand::Text { y, .. } = cmd {
                    assert!(*y < plan.height as f32 - 320.0);
                }
            }
        }
    }

    fn summary(n: usize) -> RegattaSummary {
        RegattaSummary {
            regatta_name: Some("Head of the Charles".into()),
            location: Some("Boston, MA".into()),
            date: Some("2026-10-18".into()),
            races: (0..n)
                .map(|i| RaceResult {
                    event_name: Some(format!("Event {}", i + 1)),
                    placement: Some(i as u32 + 1),
                    time: Some("15:01.2".into()),
                    margin: (i > 0).then(|| format!("{}.0s behind", i)),
                })
                .collect(),
        }
    }

    #[test]
    fn square_summary_shows_six_races() {
        let cfg = config(Format::Square);
        let plan = assemble_summary(&summary(9), &cfg, &MonospaceMeasurer);
        assert_eq!(plan.card_type, CardType::RegattaSummary);
        assert_eq!(plan.columns, ["EVENT", "PLACE", "TIME", "MARGIN"]);
        assert_eq!(plan.rows_shown(), 6);
        assert_eq!(plan.rows_omitted(), 3);
        let table = plan.table.as_ref().expect("table");
        assert_eq!(table.truncation.as_deref(), Some("+ 3 more events"));
        assert!(plan.texts().any(|t| t == "+ 3 more events"));
        assert_eq!(plan.hero.value, "1st");

        let story = assemble_summary(&summary(9), &config(Format::Story), &MonospaceMeasurer);
        assert_eq!(story.rows_shown(), 9);
        assert!(story.table.as_ref().and_then(|t| t.truncation.as_ref()).is_none());
    }

    #[test]
    fn stats_count_medals_by_color() {
        let plan = assemble_summary(&summary(4), &config(Format::Square), &MonospaceMeasurer);
        let stats = plan.section(SectionKind::Metrics).expect("stats");
        let colored: Vec<(&str, ColorRole)> = stats
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, color, .. } => Some((text.as_str(), *color)),
                _ => None,
            })
            .collect();
        assert!(colored.contains(&("4", ColorRole::Highlight)));
        assert!(colored.contains(&("1", ColorRole::Gold)));
        assert!(colored.contains(&("1", ColorRole::Silver)));
        assert!(colored.contains(&("1", ColorRole::Bronze)));
        assert!(colored.contains(&("1st", ColorRole::Gold)));
    }

    #[test]
    fn empty_regatta_has_no_table() {
        let plan = assemble_summary(&RegattaSummary::default(), &config(Format::Square), &MonospaceMeasurer);
        assert!(plan.table.is_none());
        assert!(plan.section(SectionKind::Table).is_none());
        assert_eq!(plan.hero.value, "--");
        assert!(plan.texts().all(|t| t != "BEST"));
    }

    #[test]
    fn summary_rows_fit_above_the_stats() {
        for format in Format::ALL {
            let plan = assemble_summary(&summary(40), &config(format), &MonospaceMeasurer);
            let table = plan.section(SectionKind::Table).expect("table");
            let stats = plan.section(SectionKind::Metrics).expect("stats");
            let Some(DrawCommand::Panel { y: panel_top, height, .. }) = stats.commands.first() else {
                panic!("stats start with a panel");
            };
            for cmd in &table.commands {
                if let DrawCommand::Text { y, size, .. } = cmd {
                    assert!(y + line_height(*size) <= *panel_top);
                }
            }
            assert!(panel_top + height <= plan.height as f32 - FOOTER);
        }
    }
}
