//! Team leaderboard card. The top three rows get podium treatment; the rest
//! share the adaptive row sizing used by the split table.

use log::debug;

use super::builder::{
    attribution, backdrop, fit_font_size, line_height, place_color, SectionBuilder, TextStyle,
};
use super::canvas::TextMeasurer;
use super::layout::layout_list;
use super::paint::{Align, ColorRole, Font, FontWeight};
use super::{LayoutPlan, SectionKind, TableSummary};
use crate::analysis::Hero;
use crate::formatter::PLACEHOLDER;
use crate::leaderboard::{TeamLeaderboard, Trend};
use crate::{CardConfig, CardType, Format};

pub const LEGEND: &str = "↑ Improving  ↓ Dropped  ★ New";

const MARGIN: f32 = 120.0;
const PODIUM: usize = 3;
/// Extra height of each podium row over a regular row.
const PODIUM_EXTRA: f32 = 30.0;
const PODIUM_SCALE: f32 = 1.3;
const RANK_X: f32 = 180.0;
const NAME_X: f32 = 320.0;
const TRUNCATION_RESERVE: f32 = 60.0;

const PERIOD: TextStyle = TextStyle::new(Font::sans(FontWeight::Regular), 40.0, ColorRole::TextSecondary);
const KIND: TextStyle = TextStyle::new(Font::sans(FontWeight::Bold), 48.0, ColorRole::Accent);
const NOTE: TextStyle = TextStyle::new(Font::sans(FontWeight::Regular), 36.0, ColorRole::TextMuted);
const LEGEND_STYLE: TextStyle = TextStyle::new(Font::sans(FontWeight::Regular), 32.0, ColorRole::TextMuted);

fn max_entries(format: Format) -> usize {
    match format {
        Format::Square => 8,
        Format::Story => 15,
    }
}

fn trend_color(trend: Trend) -> ColorRole {
    match trend {
        Trend::Up => ColorRole::Gold,
        Trend::Down => ColorRole::Behind,
        Trend::New => ColorRole::Ahead,
        Trend::Same => ColorRole::TextMuted,
    }
}

pub fn assemble_leaderboard<M: TextMeasurer + ?Sized>(
    board: &TeamLeaderboard,
    config: &CardConfig,
    measurer: &M,
) -> LayoutPlan {
    let (width, height) = config.format.dimensions();
    let (w, h) = (width as f32, height as f32);
    let center = w / 2.0;
    let title = board.team_name.clone().unwrap_or_else(|| "Team".into());
    let kind = board
        .leaderboard_type
        .as_deref()
        .unwrap_or("Leaderboard")
        .to_uppercase();

    let mut header = SectionBuilder::new(SectionKind::Header);
    let mut y = 120.0;
    let title_font = Font::sans(FontWeight::Bold);
    let title_size = fit_font_size(measurer, &title, title_font, 64.0, 44.0, w - 2.0 * MARGIN);
    header.text(
        title.clone(),
        TextStyle::new(title_font, title_size, ColorRole::TextPrimary),
        center,
        y,
        Align::Center,
    );
    y += 100.0;
    if let Some(period) = &board.period {
        header.text(period.clone(), PERIOD, center, y, Align::Center);
        y += 100.0;
    }
    header.text(kind.clone(), KIND, center, y, Align::Center);
    y += 100.0;
    header.separator(center, y, 700.0, ColorRole::Accent, ColorRole::Gold);
    y += 80.0;

    let legend_y = h - 300.0;
    let entries = &board.entries;
    let mut rows = SectionBuilder::new(SectionKind::Table);
    let mut table = None;
    if !entries.is_empty() {
        let podium = entries.len().min(PODIUM);
        let available =
            (legend_y - 40.0 - TRUNCATION_RESERVE - y - podium as f32 * PODIUM_EXTRA).max(0.0);
        let layout = layout_list(&config.table, available, entries.len(), max_entries(config.format));

        for (i, entry) in entries.iter().take(layout.rows_shown).enumerate() {
            let is_podium = i < PODIUM;
            let (row_h, size) = if is_podium {
                (layout.data_row_height + PODIUM_EXTRA, layout.font_size * PODIUM_SCALE)
            } else {
                (layout.data_row_height, layout.font_size)
            };
            let ty = y + (row_h - line_height(size)) / 2.0;
            let rank = board.rank_of(i);
            let rank_color = place_color(Some(rank));
            let weight = if is_podium { FontWeight::Bold } else { FontWeight::SemiBold };

            rows.text(
                rank.to_string(),
                TextStyle::new(Font::mono(weight), size, rank_color),
                RANK_X,
                ty,
                Align::Left,
            );
            rows.text(
                entry.athlete.as_deref().unwrap_or(PLACEHOLDER),
                TextStyle::new(Font::sans(weight), size, ColorRole::TextPrimary),
                NAME_X,
                ty,
                Align::Left,
            );
            rows.text(
                entry.metric_value.as_deref().unwrap_or(PLACEHOLDER),
                TextStyle::new(Font::mono(FontWeight::Bold), size, rank_color),
                w * 0.65,
                ty,
                Align::Left,
            );
            if let Some(symbol) = entry.trend.symbol() {
                rows.text(
                    symbol,
                    TextStyle::new(Font::sans(FontWeight::Bold), size, trend_color(entry.trend)),
                    w - 200.0,
                    ty,
                    Align::Right,
                );
            }
            y += row_h + config.table.small_gap;
        }

        let truncation = layout.truncation_note("athlete", "athletes");
        if let Some(note) = &truncation {
            rows.text(note.clone(), NOTE, center, y + 16.0, Align::Center);
        }
        table = Some(TableSummary {
            layout,
            rest_rows_shown: 0,
            truncation,
        });
    }

    let mut legend = SectionBuilder::new(SectionKind::Legend);
    legend.text(LEGEND, LEGEND_STYLE, center, legend_y, Align::Center);

    let mut footer = SectionBuilder::new(SectionKind::Footer);
    if config.options.show_attribution {
        attribution(&mut footer, w, h, 60.0);
    }

    debug!(
        "assembled leaderboard {:?} ({kind}): rows={}/{}",
        title,
        table.as_ref().map_or(0, TableSummary::rows_shown),
        entries.len()
    );

    let hero = Hero {
        value: board
            .leader()
            .and_then(|e| e.metric_value.clone())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        label: kind,
    };
    let mut sections = vec![backdrop(w, h).finish(), header.finish()];
    if !rows.is_empty() {
        sections.push(rows.finish());
    }
    sections.push(legend.finish());
    sections.push(footer.finish());

    LayoutPlan {
        card_type: CardType::TeamLeaderboard,
        format: config.format,
        width,
        height,
        title,
        hero,
        columns: Vec::new(),
        sections,
        table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::LeaderboardEntry;
    use crate::rendering::canvas::MonospaceMeasurer;
    use crate::rendering::DrawCommand;

    fn board(n: usize) -> TeamLeaderboard {
        let trends = [Trend::Up, Trend::Up, Trend::Same, Trend::Down, Trend::New];
        TeamLeaderboard {
            team_name: Some("Varsity Men".into()),
            period: Some("January 2026".into()),
            leaderboard_type: Some("2K Times".into()),
            entries: (0..n)
                .map(|i| LeaderboardEntry {
                    rank: Some(i as u32 + 1),
                    athlete: Some(format!("Athlete {}", i + 1)),
                    metric_value: Some(format!("6:{:02}.0", 22 + i)),
                    trend: trends[i % trends.len()],
                })
                .collect(),
        }
    }

    fn config(format: Format) -> CardConfig {
        CardConfig {
            format,
            card_type: CardType::TeamLeaderboard,
            ..Default::default()
        }
    }

    fn run(plan: &LayoutPlan, text: &str) -> (ColorRole, f32) {
        match plan.commands().find(|c| c.text() == Some(text)) {
            Some(DrawCommand::Text { color, size, .. }) => (*color, *size),
            _ => panic!("{text} not drawn"),
        }
    }

    #[test]
    fn podium_rows_are_larger_and_medal_colored() {
        let plan = assemble_leaderboard(&board(8), &config(Format::Square), &MonospaceMeasurer);
        assert_eq!(plan.card_type, CardType::TeamLeaderboard);
        assert_eq!(plan.hero.value, "6:22.0");
        assert_eq!(plan.hero.label, "2K TIMES");
        assert_eq!(plan.rows_shown(), 8);

        let (gold, podium_size) = run(&plan, "1");
        assert_eq!(gold, ColorRole::Gold);
        assert_eq!(run(&plan, "2").0, ColorRole::Silver);
        assert_eq!(run(&plan, "3").0, ColorRole::Bronze);
        let (fourth, regular_size) = run(&plan, "4");
        assert_eq!(fourth, ColorRole::TextSecondary);
        assert!(podium_size > regular_size);
        assert_eq!(run(&plan, "6:22.0").0, ColorRole::Gold);
    }

    #[test]
    fn trend_symbols_are_colored() {
        let plan = assemble_leaderboard(&board(5), &config(Format::Square), &MonospaceMeasurer);
        let symbols: Vec<(&str, ColorRole)> = plan
            .section(SectionKind::Table)
            .expect("rows")
            .commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, color, .. } if ["↑", "↓", "★"].contains(&text.as_str()) => {
                    Some((text.as_str(), *color))
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            symbols,
            [
                ("↑", ColorRole::Gold),
                ("↑", ColorRole::Gold),
                ("↓", ColorRole::Behind),
                ("★", ColorRole::Ahead),
            ]
        );
        assert!(plan.texts().any(|t| t == LEGEND));
    }

    #[test]
    fn long_boards_are_capped_per_format() {
        let square = assemble_leaderboard(&board(20), &config(Format::Square), &MonospaceMeasurer);
        assert_eq!(square.rows_shown(), 8);
        assert!(square.texts().any(|t| t == "+ 12 more athletes"));

        let story = assemble_leaderboard(&board(20), &config(Format::Story), &MonospaceMeasurer);
        assert_eq!(story.rows_shown(), 15);
        assert!(story.texts().any(|t| t == "+ 5 more athletes"));

        let one_over = assemble_leaderboard(&board(9), &config(Format::Square), &MonospaceMeasurer);
        assert!(one_over.texts().any(|t| t == "+ 1 more athlete"));
    }

    #[test]
    fn rows_end_above_the_legend() {
        for format in Format::ALL {
            for n in [1, 3, 8, 15, 60] {
                let plan = assemble_leaderboard(&board(n), &config(format), &MonospaceMeasurer);
                let legend_y = plan.height as f32 - 300.0;
                for cmd in &plan.section(SectionKind::Table).expect("rows").commands {
                    if let DrawCommand::Text { y, size, .. } = cmd {
                        assert!(y + line_height(*size) <= legend_y, "{format} n={n}");
                    }
                }
            }
        }
    }

    #[test]
    fn empty_board_keeps_header_and_legend() {
        let plan = assemble_leaderboard(&TeamLeaderboard::default(), &config(Format::Square), &MonospaceMeasurer);
        assert_eq!(plan.title, "Team");
        assert_eq!(plan.hero.value, "--");
        assert_eq!(plan.hero.label, "LEADERBOARD");
        assert!(plan.table.is_none());
        assert!(plan.section(SectionKind::Legend).is_some());
    }
}
