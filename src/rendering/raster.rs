//! Replays a [`LayoutPlan`] onto a [`Canvas`] and fingerprints plans for
//! golden tests.

use log::debug;
use sha2::{Digest, Sha256};

use super::canvas::{Canvas, TextMeasurer};
use super::layout::Rect;
use super::paint::DrawCommand;
use super::style::StyleConfig;
use super::LayoutPlan;
use crate::Result;

/// Drive `canvas` through every instruction of `plan`, in order, resolving
/// color roles through `style` and text alignment through the canvas's own
/// measurements.
pub fn replay(plan: &LayoutPlan, style: &StyleConfig, canvas: &mut dyn Canvas) -> Result<()> {
    let mut count = 0usize;
    for command in plan.commands() {
        match command {
            DrawCommand::SolidRect {
                x,
                y,
                width,
                height,
                color,
            } => canvas.fill_rect(Rect::new(*x, *y, *width, *height), style.resolve(*color))?,
            DrawCommand::GradientRect {
                x,
                y,
                width,
                height,
                from,
                to,
                direction,
            } => canvas.fill_gradient(
                Rect::new(*x, *y, *width, *height),
                style.resolve(*from),
                style.resolve(*to),
                *direction,
            )?,
            DrawCommand::Panel {
                x,
                y,
                width,
                height,
                radius,
                fill,
                border,
            } => canvas.fill_panel(
                Rect::new(*x, *y, *width, *height),
                *radius,
                style.resolve(*fill),
                border.map(|b| style.resolve(b)),
            )?,
            DrawCommand::Line {
                x1,
                y1,
                x2,
                y2,
                thickness,
                color,
            } => canvas.draw_line((*x1, *y1), (*x2, *y2), *thickness, style.resolve(*color))?,
            DrawCommand::Dot {
                cx,
                cy,
                radius,
                color,
            } => canvas.fill_circle(*cx, *cy, *radius, style.resolve(*color))?,
            DrawCommand::Text {
                text,
                font,
                size,
                x,
                y,
                color,
                align,
            } => {
                let extent = canvas.measure_text(text, *font, *size);
                let left = align.left_edge(*x, extent.width);
                canvas.draw_text(text, *font, *size, left, *y, style.resolve(*color))?;
            }
        }
        count += 1;
    }
    debug!("replayed {count} draw commands with style {}", style.name);
    Ok(())
}

/// SHA-256 of the plan's JSON form, hex encoded.
pub fn plan_digest(plan: &LayoutPlan) -> Result<String> {
    let json = serde_json::to_vec(plan)?;
    let mut hasher = Sha256::new();
    hasher.update(&json);
    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::canvas::{CanvasOp, MonospaceMeasurer, RecordingCanvas};
    use crate::rendering::{assemble_plan, paint::ColorRole};
    use crate::workout::WorkoutRecord;
    use crate::CardConfig;

    fn plan() -> LayoutPlan {
        let record = WorkoutRecord {
            distance_m: Some(2000.0),
            duration_seconds: Some(382.1),
            avg_pace_tenths: Some(955.0),
            ..Default::default()
        };
        assemble_plan(&record, &CardConfig::default(), &MonospaceMeasurer)
    }

    #[test]
    fn replay_visits_every_command() {
        let plan = plan();
        let mut canvas = RecordingCanvas::new();
        replay(&plan, &StyleConfig::evolved(), &mut canvas).unwrap();
        assert_eq!(canvas.ops.len(), plan.commands().count());
        assert_eq!(
            canvas.ops.first(),
            Some(&CanvasOp::FillRect {
                rect: Rect::new(0.0, 0.0, 2160.0, 2160.0),
                color: StyleConfig::evolved().resolve(ColorRole::Background),
            })
        );
    }

    #[test]
    fn centered_text_is_shifted_by_half_its_width() {
        let plan = plan();
        let mut canvas = RecordingCanvas::new();
        replay(&plan, &StyleConfig::default(), &mut canvas).unwrap();
        let Some(CanvasOp::DrawText { text, font, size, x, .. }) = canvas
            .ops
            .iter()
            .find(|op| matches!(op, CanvasOp::DrawText { text, .. } if text == "6:22.1"))
        else {
            panic!("hero value not drawn");
        };
        let width = canvas.measure_text(text, *font, *size).width;
        assert!((x + width / 2.0 - 1080.0).abs() < 1e-3);
    }

    #[test]
    fn digest_is_stable_and_content_addressed() {
        let a = plan_digest(&plan()).unwrap();
        assert_eq!(a, plan_digest(&plan()).unwrap());
        assert_eq!(a.len(), 64);

        let mut other = plan();
        other.title.push('!');
        assert_ne!(a, plan_digest(&other).unwrap());
    }
}
