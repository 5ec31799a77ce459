//! Draw instructions emitted by the assembler and replayed onto a canvas.
//!
//! Instructions carry font and color *roles*; concrete colors come from the
//! `StyleConfig` at replay time.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Sans,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Regular,
    SemiBold,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Font {
    pub family: FontFamily,
    pub weight: FontWeight,
}

impl Font {
    pub const fn sans(weight: FontWeight) -> Self {
        Self {
            family: FontFamily::Sans,
            weight,
        }
    }

    pub const fn mono(weight: FontWeight) -> Self {
        Self {
            family: FontFamily::Mono,
            weight,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Left edge of a run of `width` anchored at `x`.
    pub fn left_edge(self, x: f32, width: f32) -> f32 {
        match self {
            Align::Left => x,
            Align::Center => x - width / 2.0,
            Align::Right => x - width,
        }
    }
}

/// Semantic color slots resolved through the style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    Background,
    HeaderStart,
    HeaderEnd,
    Panel,
    Accent,
    Highlight,
    TextPrimary,
    TextSecondary,
    TextMuted,
    Ahead,
    Behind,
    Even,
    Gold,
    Silver,
    Bronze,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientDirection {
    Vertical,
    Horizontal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    SolidRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: ColorRole,
    },
    GradientRect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        from: ColorRole,
        to: ColorRole,
        direction: GradientDirection,
    },
    /// Rounded panel with an optional border.
    Panel {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radius: f32,
        fill: ColorRole,
        border: Option<ColorRole>,
    },
    Line {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        thickness: f32,
        color: ColorRole,
    },
    Dot {
        cx: f32,
        cy: f32,
        radius: f32,
        color: ColorRole,
    },
    /// Text anchored at `(x, y)`: `y` is the top of the run, `x` is the left
    /// edge, center or right edge depending on `align`.
    Text {
        text: String,
        font: Font,
        size: f32,
        x: f32,
        y: f32,
        color: ColorRole,
        align: Align,
    },
}

impl DrawCommand {
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawCommand::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}
