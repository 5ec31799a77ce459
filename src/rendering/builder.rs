//! Shared pieces for the card assemblers: text styles, section builders and
//! the text-fitting helpers every card uses.

use super::canvas::TextMeasurer;
use super::paint::{Align, ColorRole, DrawCommand, Font, FontWeight, GradientDirection};
use super::{PlanSection, SectionKind};
use crate::regatta::Medal;

pub const ATTRIBUTION: &str = "Made with oarbit";

/// Step used when shrinking a title to fit.
pub(crate) const TITLE_STEP: f32 = 4.0;

pub(crate) const BRANDING: TextStyle =
    TextStyle::new(Font::sans(FontWeight::Regular), 30.0, ColorRole::TextMuted);

#[derive(Debug, Clone, Copy)]
pub(crate) struct TextStyle {
    pub font: Font,
    pub size: f32,
    pub color: ColorRole,
}

impl TextStyle {
    pub const fn new(font: Font, size: f32, color: ColorRole) -> Self {
        Self { font, size, color }
    }

    pub fn with_color(self, color: ColorRole) -> Self {
        Self { color, ..self }
    }

    pub fn with_size(self, size: f32) -> Self {
        Self { size, ..self }
    }

    pub fn line_height(self) -> f32 {
        line_height(self.size)
    }
}

pub(crate) struct SectionBuilder {
    kind: SectionKind,
    pub commands: Vec<DrawCommand>,
}

impl SectionBuilder {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn text(&mut self, text: impl Into<String>, style: TextStyle, x: f32, y: f32, align: Align) {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            font: style.font,
            size: style.size,
            x,
            y,
            color: style.color,
            align,
        });
    }

    /// Horizontal gradient rule centred on `cx`.
    pub fn separator(&mut self, cx: f32, y: f32, width: f32, from: ColorRole, to: ColorRole) {
        self.commands.push(DrawCommand::GradientRect {
            x: cx - width / 2.0,
            y,
            width,
            height: 4.0,
            from,
            to,
            direction: GradientDirection::Horizontal,
        });
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn finish(self) -> PlanSection {
        PlanSection {
            kind: self.kind,
            commands: self.commands,
        }
    }
}

pub(crate) fn line_height(size: f32) -> f32 {
    size * 1.2
}

/// Largest size in `[min, max]`, stepping down, at which `text` fits `width`.
pub(crate) fn fit_font_size<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    font: Font,
    max: f32,
    min: f32,
    width: f32,
) -> f32 {
    let mut size = max;
    while size > min && measurer.measure_text(text, font, size).width > width {
        size = (size - TITLE_STEP).max(min);
    }
    size
}

/// Greedy word wrap at `width`. A single word wider than the line gets a
/// line of its own.
pub(crate) fn wrap_words<M: TextMeasurer + ?Sized>(
    measurer: &M,
    text: &str,
    style: TextStyle,
    width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if current.is_empty() || measurer.measure_text(&candidate, style.font, style.size).width <= width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Full-bleed background: solid base with a vertical wash over it.
pub(crate) fn backdrop(width: f32, height: f32) -> SectionBuilder {
    let mut background = SectionBuilder::new(SectionKind::Background);
    background.push(DrawCommand::SolidRect {
        x: 0.0,
        y: 0.0,
        width,
        height,
        color: ColorRole::Background,
    });
    background.push(DrawCommand::GradientRect {
        x: 0.0,
        y: 0.0,
        width,
        height,
        from: ColorRole::HeaderStart,
        to: ColorRole::HeaderEnd,
        direction: GradientDirection::Vertical,
    });
    background
}

pub(crate) fn medal_color(medal: Medal) -> ColorRole {
    match medal {
        Medal::Gold => ColorRole::Gold,
        Medal::Silver => ColorRole::Silver,
        Medal::Bronze => ColorRole::Bronze,
    }
}

/// Medal color for a podium place, secondary text otherwise.
pub(crate) fn place_color(place: Option<u32>) -> ColorRole {
    place
        .and_then(Medal::for_place)
        .map_or(ColorRole::TextSecondary, medal_color)
}

/// `Made with oarbit`, bottom centre.
pub(crate) fn attribution(footer: &mut SectionBuilder, width: f32, height: f32, bottom: f32) {
    let y = height - bottom - BRANDING.line_height();
    footer.text(ATTRIBUTION, BRANDING, width / 2.0, y, Align::Center);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::canvas::MonospaceMeasurer;

    #[test]
    fn long_titles_shrink_but_stay_above_minimum() {
        let m = MonospaceMeasurer;
        let font = Font::sans(FontWeight::Bold);
        let short = fit_font_size(&m, "2K", font, 96.0, 56.0, 1920.0);
        assert_eq!(short, 96.0);
        let long = "x".repeat(40);
        let fitted = fit_font_size(&m, &long, font, 96.0, 56.0, 1920.0);
        assert!(fitted < 96.0);
        assert!(m.measure_text(&long, font, fitted).width <= 1920.0);
        let huge = "x".repeat(400);
        assert_eq!(fit_font_size(&m, &huge, font, 96.0, 56.0, 1920.0), 56.0);
    }

    #[test]
    fn wrap_keeps_lines_inside_the_width() {
        let m = MonospaceMeasurer;
        let style = TextStyle::new(Font::sans(FontWeight::Regular), 10.0, ColorRole::TextSecondary);
        // 5.5px per char: at most 20 chars in 112px
        let lines = wrap_words(&m, "Chen (8) • Lopez (7) • Park (6) • Williams (5)", style, 112.0);
        assert_eq!(lines, ["Chen (8) • Lopez (7)", "• Park (6) •", "Williams (5)"]);
        for line in &lines {
            assert!(m.measure_text(line, style.font, style.size).width <= 112.0);
        }
        assert!(wrap_words(&m, "   ", style, 112.0).is_empty());
        assert_eq!(wrap_words(&m, "Supercalifragilistic", style, 20.0), ["Supercalifragilistic"]);
    }

    #[test]
    fn podium_places_get_medal_colors() {
        assert_eq!(place_color(Some(1)), ColorRole::Gold);
        assert_eq!(place_color(Some(2)), ColorRole::Silver);
        assert_eq!(place_color(Some(3)), ColorRole::Bronze);
        assert_eq!(place_color(Some(4)), ColorRole::TextSecondary);
        assert_eq!(place_color(None), ColorRole::TextSecondary);
    }

    #[test]
    fn separators_run_left_to_right_around_the_center() {
        let mut header = SectionBuilder::new(SectionKind::Header);
        header.separator(1080.0, 400.0, 600.0, ColorRole::Accent, ColorRole::Highlight);
        match header.finish().commands.as_slice() {
            [DrawCommand::GradientRect { x, width, direction, from, to, .. }] => {
                assert_eq!((*x, *width), (780.0, 600.0));
                assert_eq!(*direction, GradientDirection::Horizontal);
                assert_eq!((*from, *to), (ColorRole::Accent, ColorRole::Highlight));
            }
            other => panic!("unexpected commands {other:?}"),
        }
    }
}
