//! The drawing surface the engine targets.
//!
//! Rasterization is not done here. Backends implement [`Canvas`]; the engine
//! only needs [`TextMeasurer`] while assembling a plan so it can size text to
//! fit. Two deterministic implementations ship with the crate for tests and
//! the CLI.

use serde::Serialize;

use super::layout::Rect;
use super::paint::{Font, FontFamily, FontWeight, GradientDirection};
use super::style::Rgb;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

pub trait TextMeasurer {
    fn measure_text(&self, text: &str, font: Font, size: f32) -> TextExtent;
}

/// Drawing operations a backend must provide. Text is always positioned by
/// its left edge; alignment is resolved before the call.
pub trait Canvas: TextMeasurer {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<()>;

    fn fill_gradient(
        &mut self,
        rect: Rect,
        from: Rgb,
        to: Rgb,
        direction: GradientDirection,
    ) -> Result<()>;

    fn fill_panel(&mut self, rect: Rect, radius: f32, fill: Rgb, border: Option<Rgb>) -> Result<()>;

    fn draw_line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Rgb)
        -> Result<()>;

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) -> Result<()>;

    fn draw_text(&mut self, text: &str, font: Font, size: f32, x: f32, y: f32, color: Rgb)
        -> Result<()>;
}

/// Fixed advance-width estimate per font family.
///
/// Good enough to keep titles inside the card; a real backend should measure
/// with its shaper.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonospaceMeasurer;

impl MonospaceMeasurer {
    pub fn new() -> Self {
        MonospaceMeasurer
    }

    fn advance(font: Font) -> f32 {
        let base = match font.family {
            FontFamily::Mono => 0.60,
            FontFamily::Sans => 0.55,
        };
        match font.weight {
            FontWeight::Regular => base,
            FontWeight::SemiBold => base + 0.02,
            FontWeight::Bold => base + 0.04,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure_text(&self, text: &str, font: Font, size: f32) -> TextExtent {
        let chars = text.chars().count() as f32;
        TextExtent {
            width: chars * size * Self::advance(font),
            height: size * 1.2,
        }
    }
}

/// One call received by a [`RecordingCanvas`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum CanvasOp {
    FillRect {
        rect: Rect,
        color: Rgb,
    },
    FillGradient {
        rect: Rect,
        from: Rgb,
        to: Rgb,
        direction: GradientDirection,
    },
    FillPanel {
        rect: Rect,
        radius: f32,
        fill: Rgb,
        border: Option<Rgb>,
    },
    DrawLine {
        from: (f32, f32),
        to: (f32, f32),
        thickness: f32,
        color: Rgb,
    },
    FillCircle {
        cx: f32,
        cy: f32,
        radius: f32,
        color: Rgb,
    },
    DrawText {
        text: String,
        font: Font,
        size: f32,
        x: f32,
        y: f32,
        color: Rgb,
    },
}

/// Canvas that records every call instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    measurer: MonospaceMeasurer,
    pub ops: Vec<CanvasOp>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            CanvasOp::DrawText { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl TextMeasurer for RecordingCanvas {
    fn measure_text(&self, text: &str, font: Font, size: f32) -> TextExtent {
        self.measurer.measure_text(text, font, size)
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> Result<()> {
        self.ops.push(CanvasOp::FillRect { rect, color });
        Ok(())
    }

    fn fill_gradient(
        &mut self,
        rect: Rect,
        from: Rgb,
        to: Rgb,
        direction: GradientDirection,
    ) -> Result<()> {
        self.ops.push(CanvasOp::FillGradient {
            rect,
            from,
            to,
            direction,
        });
        Ok(())
    }

    fn fill_panel(&mut self, rect: Rect, radius: f32, fill: Rgb, border: Option<Rgb>) -> Result<()> {
        self.ops.push(CanvasOp::FillPanel {
            rect,
            radius,
            fill,
            border,
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        thickness: f32,
        color: Rgb,
    ) -> Result<()> {
        self.ops.push(CanvasOp::DrawLine {
            from,
            to,
            thickness,
            color,
        });
        Ok(())
    }

    fn fill_circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgb) -> Result<()> {
        self.ops.push(CanvasOp::FillCircle {
            cx,
            cy,
            radius,
            color,
        });
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        font: Font,
        size: f32,
        x: f32,
        y: f32,
        color: Rgb,
    ) -> Result<()> {
        self.ops.push(CanvasOp::DrawText {
            text: text.to_string(),
            font,
            size,
            x,
            y,
            color,
        });
        Ok(())
    }
}
