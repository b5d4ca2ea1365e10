//! Lustre Paint API
//!
//! The drawing side of the effects engine. Effects record commands against a
//! [`PaintContext`]; the host renderer replays them.
//!
//! # Features
//!
//! - Shape primitives (rect, circle, rounded rect)
//! - A single rounded-rectangle outline routine shared by every shape
//! - Solid and gradient fills, strokes, clipping
//! - Material elevation shadows (ambient, key, composite)

pub mod color;
pub mod context;
pub mod gradient;
pub mod path;
pub mod primitives;
pub mod shadow;

pub use color::Color;
pub use context::{FillStyle, PaintCommand, PaintContext, StrokeStyle};
pub use gradient::{Gradient, GradientStop};
pub use path::{rounded_rect_path, Path, PathBuilder, PathCommand, Point};
pub use primitives::*;
pub use shadow::{
    draw_ambient_shadow, draw_key_shadow, draw_material_shadow, draw_shadow, ElevationSpec,
    ShadowCompositor, ShadowLayer, ShadowStyle,
};
