//! Paint context - the drawing surface handed to effects
//!
//! Effects never rasterize. They record [`PaintCommand`]s that the host
//! renderer replays, which also lets tests count and inspect draw calls.

use crate::color::Color;
use crate::gradient::Gradient;
use crate::path::{rounded_rect_path, Path, Point};
use crate::primitives::*;

/// Fill style for shapes
#[derive(Clone, Debug, PartialEq)]
pub enum FillStyle {
    Color(Color),
    Gradient(Gradient),
}

impl FillStyle {
    /// Alpha of a solid fill, or of the first gradient stop
    pub fn alpha(&self) -> f32 {
        match self {
            FillStyle::Color(color) => color.a,
            FillStyle::Gradient(gradient) => gradient.stops().first().map_or(0.0, |s| s.color.a),
        }
    }
}

impl From<Color> for FillStyle {
    fn from(color: Color) -> Self {
        FillStyle::Color(color)
    }
}

impl From<Gradient> for FillStyle {
    fn from(gradient: Gradient) -> Self {
        FillStyle::Gradient(gradient)
    }
}

/// Stroke style
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// A paint command for the renderer
#[derive(Clone, Debug, PartialEq)]
pub enum PaintCommand {
    FillRect { rect: Rect, style: FillStyle },
    FillPath { path: Path, style: FillStyle },
    StrokePath { path: Path, style: StrokeStyle },
    FillCircle { circle: Circle, style: FillStyle },
    PushClip { rect: Rect },
    PopClip,
    PushTranslate { dx: f32, dy: f32 },
    PopTranslate,
}

impl PaintCommand {
    /// Whether this command puts pixels on the surface
    pub fn is_draw(&self) -> bool {
        !matches!(
            self,
            PaintCommand::PushClip { .. }
                | PaintCommand::PopClip
                | PaintCommand::PushTranslate { .. }
                | PaintCommand::PopTranslate
        )
    }
}

/// The paint context used for effect drawing
pub struct PaintContext {
    commands: Vec<PaintCommand>,
    clip_stack: Vec<Rect>,
    translate_stack: Vec<(f32, f32)>,
}

impl PaintContext {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            clip_stack: Vec::new(),
            translate_stack: Vec::new(),
        }
    }

    /// Get all recorded commands
    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Take ownership of recorded commands
    pub fn take_commands(&mut self) -> Vec<PaintCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands that draw (clip bookkeeping excluded)
    pub fn draw_call_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_draw()).count()
    }

    // === Shape drawing ===

    pub fn fill_rect(&mut self, rect: Rect, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillRect {
            rect,
            style: style.into(),
        });
    }

    /// Fill a rounded rectangle using the shared outline routine
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: f32, style: impl Into<FillStyle>) {
        self.fill_path(rounded_rect_path(rect, radius), style);
    }

    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32, color: Color, width: f32) {
        self.stroke_path(rounded_rect_path(rect, radius), color, width);
    }

    pub fn fill_circle(&mut self, center: Point, radius: f32, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillCircle {
            circle: Circle::new(center, radius),
            style: style.into(),
        });
    }

    // === Path drawing ===

    pub fn fill_path(&mut self, path: Path, style: impl Into<FillStyle>) {
        self.commands.push(PaintCommand::FillPath {
            path,
            style: style.into(),
        });
    }

    pub fn stroke_path(&mut self, path: Path, color: Color, width: f32) {
        self.commands.push(PaintCommand::StrokePath {
            path,
            style: StrokeStyle { color, width },
        });
    }

    // === Clipping ===

    pub fn push_clip(&mut self, rect: Rect) {
        self.clip_stack.push(rect);
        self.commands.push(PaintCommand::PushClip { rect });
    }

    pub fn pop_clip(&mut self) {
        if self.clip_stack.pop().is_some() {
            self.commands.push(PaintCommand::PopClip);
        }
    }

    /// Current innermost clip, if any
    pub fn clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Run `draw` with `rect` pushed as the clip
    pub fn with_clip(&mut self, rect: Rect, draw: impl FnOnce(&mut Self)) {
        self.push_clip(rect);
        draw(self);
        self.pop_clip();
    }

    // === Transforms ===

    pub fn push_translate(&mut self, dx: f32, dy: f32) {
        self.translate_stack.push((dx, dy));
        self.commands.push(PaintCommand::PushTranslate { dx, dy });
    }

    pub fn pop_translate(&mut self) {
        if self.translate_stack.pop().is_some() {
            self.commands.push(PaintCommand::PopTranslate);
        }
    }

    /// Accumulated translation of everything drawn from here on
    pub fn origin(&self) -> Point {
        let (x, y) = self
            .translate_stack
            .iter()
            .fold((0.0, 0.0), |(x, y), (dx, dy)| (x + dx, y + dy));
        Point::new(x, y)
    }

    /// Run `draw` in a coordinate space shifted by `(dx, dy)`
    pub fn with_translation(&mut self, dx: f32, dy: f32, draw: impl FnOnce(&mut Self)) {
        self.push_translate(dx, dy);
        draw(self);
        self.pop_translate();
    }
}

impl Default for PaintContext {
    fn default() -> Self {
        Self::new()
    }
}
