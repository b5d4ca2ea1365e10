//! Path building and representation

use smallvec::SmallVec;

use crate::primitives::Rect;

/// A 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Path command
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Circular arc. A renderer connects the current point to the arc start
    /// with a straight segment, the way canvas `arc` does.
    ArcTo {
        center: Point,
        radius: f32,
        /// Start angle in radians, clockwise from +x (y points down)
        start_angle: f32,
        /// Sweep in radians
        sweep_angle: f32,
    },
    Close,
}

/// A 2D path composed of commands
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: SmallVec<[PathCommand; 16]>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Arc commands in outline order
    pub fn arcs(&self) -> impl Iterator<Item = &PathCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::ArcTo { .. }))
    }
}

/// Builder for constructing paths
pub struct PathBuilder {
    path: Path,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self { path: Path::new() }
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.path.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Append an arc; angles are given in degrees
    pub fn arc_deg(mut self, cx: f32, cy: f32, radius: f32, start: f32, sweep: f32) -> Self {
        self.path.commands.push(PathCommand::ArcTo {
            center: Point::new(cx, cy),
            radius,
            start_angle: start.to_radians(),
            sweep_angle: sweep.to_radians(),
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.path.commands.push(PathCommand::Close);
        self
    }

    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the closed outline of a rounded rectangle.
///
/// Four 90° corner arcs are appended clockwise: top-left from 180°,
/// top-right from 270°, bottom-right from 0° and bottom-left from 90°, so
/// every shape sharing this routine has the same winding. A radius of zero or
/// less yields a plain rectangle.
pub fn rounded_rect_path(rect: Rect, radius: f32) -> Path {
    if radius <= 0.0 {
        return PathBuilder::new()
            .move_to(rect.x, rect.y)
            .line_to(rect.right(), rect.y)
            .line_to(rect.right(), rect.bottom())
            .line_to(rect.x, rect.bottom())
            .close()
            .build();
    }

    let r = radius;
    PathBuilder::new()
        .arc_deg(rect.x + r, rect.y + r, r, 180.0, 90.0)
        .arc_deg(rect.right() - r, rect.y + r, r, 270.0, 90.0)
        .arc_deg(rect.right() - r, rect.bottom() - r, r, 0.0, 90.0)
        .arc_deg(rect.x + r, rect.bottom() - r, r, 90.0, 90.0)
        .close()
        .build()
}
