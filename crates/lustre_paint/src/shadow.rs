//! Elevation shadows
//!
//! Material-style drop shadows approximated by stacked, alpha-blended
//! rounded rectangles. Two components make up the default material shadow:
//!
//! - **Ambient**: an isotropic halo, inflated by its blur radius and filled
//!   with a radial fade from a solid center to a transparent edge.
//! - **Key**: a directional shadow cast by a single overhead light, drawn as
//!   concentric layers that shrink toward the silhouette while their alpha
//!   rises toward the target opacity.
//!
//! Opacities are 8-bit channel values. Every function here is stateless and
//! only issues commands on the supplied [`PaintContext`]; an elevation of
//! zero or less draws nothing.

use smallvec::SmallVec;

use crate::color::Color;
use crate::context::{FillStyle, PaintContext, StrokeStyle};
use crate::gradient::Gradient;
use crate::path::rounded_rect_path;
use crate::primitives::Rect;

/// Upper bound on ambient shadow opacity (8-bit)
pub const AMBIENT_MAX_ALPHA: u8 = 40;
/// Upper bound on key shadow opacity (8-bit)
pub const KEY_MAX_ALPHA: u8 = 60;
/// Inset between consecutive key shadow layers
pub const KEY_LAYER_STEP: f32 = 2.0;

/// Input to the compositor: where the surface is and how high it floats
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElevationSpec {
    pub bounds: Rect,
    pub level: i32,
    pub corner_radius: i32,
}

impl ElevationSpec {
    pub const fn new(bounds: Rect, level: i32, corner_radius: i32) -> Self {
        Self {
            bounds,
            level,
            corner_radius,
        }
    }

    /// A flat surface casts no shadow
    pub fn is_flat(&self) -> bool {
        self.level <= 0
    }

    /// Corner radius in pixels, negatives treated as square
    pub fn radius(&self) -> f32 {
        self.corner_radius.max(0) as f32
    }
}

/// Which shadow component produced a layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadowKind {
    Basic,
    Ambient,
    Key,
}

/// One translucent fill of a composited shadow
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowLayer {
    pub kind: ShadowKind,
    pub rect: Rect,
    pub corner_radius: f32,
    pub alpha: u8,
    pub blur_radius: f32,
}

pub type ShadowLayers = SmallVec<[ShadowLayer; 8]>;

/// Ambient blur radius: `elevation * 2`
pub fn ambient_blur(level: i32) -> f32 {
    level.max(0).saturating_mul(2) as f32
}

/// Ambient opacity: `min(40, 10 + elevation * 5)`
pub fn ambient_alpha(level: i32) -> u8 {
    if level <= 0 {
        return 0;
    }
    level
        .saturating_mul(5)
        .saturating_add(10)
        .min(i32::from(AMBIENT_MAX_ALPHA)) as u8
}

/// Key blur radius: `elevation * 3`
pub fn key_blur(level: i32) -> f32 {
    level.max(0).saturating_mul(3) as f32
}

/// Key shadow vertical offset: `elevation * 2`
pub fn key_offset(level: i32) -> f32 {
    level.max(0).saturating_mul(2) as f32
}

/// Key opacity: `min(60, 20 + elevation * 8)`
pub fn key_alpha(level: i32) -> u8 {
    if level <= 0 {
        return 0;
    }
    level
        .saturating_mul(8)
        .saturating_add(20)
        .min(i32::from(KEY_MAX_ALPHA)) as u8
}

/// Layers of the simple stacked shadow
pub fn basic_layers(spec: &ElevationSpec) -> ShadowLayers {
    let mut layers = ShadowLayers::new();
    if spec.is_flat() {
        return layers;
    }

    let level = spec.level;
    let target = f32::from(ambient_alpha(level));
    let base = spec.bounds.offset(0.0, level as f32);
    for i in 1..=level {
        let inflate = (level - i) as f32;
        layers.push(ShadowLayer {
            kind: ShadowKind::Basic,
            rect: base.inflate(inflate),
            corner_radius: spec.radius() + inflate,
            alpha: (target * i as f32 / level as f32).round() as u8,
            blur_radius: level as f32,
        });
    }
    layers
}

/// The single ambient halo layer
pub fn ambient_layers(spec: &ElevationSpec) -> ShadowLayers {
    let mut layers = ShadowLayers::new();
    if spec.is_flat() {
        return layers;
    }

    let blur = ambient_blur(spec.level);
    layers.push(ShadowLayer {
        kind: ShadowKind::Ambient,
        rect: spec.bounds.offset(0.0, spec.level as f32).inflate(blur),
        corner_radius: spec.radius() + blur,
        alpha: ambient_alpha(spec.level),
        blur_radius: blur,
    });
    layers
}

/// Concentric key layers, outermost (faintest) first
pub fn key_layers(spec: &ElevationSpec) -> ShadowLayers {
    let mut layers = ShadowLayers::new();
    if spec.is_flat() {
        return layers;
    }

    let blur = key_blur(spec.level);
    let target = f32::from(key_alpha(spec.level));
    let base = spec.bounds.offset(0.0, key_offset(spec.level));
    let count = (blur / KEY_LAYER_STEP).ceil() as usize;

    for i in 0..count {
        let inflate = blur - KEY_LAYER_STEP * i as f32;
        layers.push(ShadowLayer {
            kind: ShadowKind::Key,
            rect: base.inflate(inflate),
            corner_radius: spec.radius() + inflate,
            alpha: (target * (i + 1) as f32 / count as f32).round() as u8,
            blur_radius: blur,
        });
    }
    layers
}

/// Shadow appearance supplied by the theme
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowStyle {
    /// Base color; its alpha is replaced by each layer's opacity
    pub color: Color,
}

impl Default for ShadowStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
        }
    }
}

/// Draws shadow layers with a fixed style
#[derive(Clone, Copy, Debug, Default)]
pub struct ShadowCompositor {
    style: ShadowStyle,
}

impl ShadowCompositor {
    pub fn new(style: ShadowStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &ShadowStyle {
        &self.style
    }

    /// Simple stacked shadow
    pub fn draw_shadow(&self, ctx: &mut PaintContext, spec: &ElevationSpec) {
        self.draw_layers(ctx, &basic_layers(spec));
    }

    pub fn draw_ambient(&self, ctx: &mut PaintContext, spec: &ElevationSpec) {
        self.draw_layers(ctx, &ambient_layers(spec));
    }

    pub fn draw_key(&self, ctx: &mut PaintContext, spec: &ElevationSpec) {
        self.draw_layers(ctx, &key_layers(spec));
    }

    /// Ambient halo followed by the key shadow
    pub fn draw_material(&self, ctx: &mut PaintContext, spec: &ElevationSpec) {
        if spec.is_flat() {
            return;
        }
        tracing::trace!(level = spec.level, "compositing material shadow");
        self.draw_ambient(ctx, spec);
        self.draw_key(ctx, spec);
    }

    /// Paint a complete elevated surface in z-order:
    /// shadow, fill, border, then clipped content.
    pub fn paint_elevated_surface(
        &self,
        ctx: &mut PaintContext,
        spec: &ElevationSpec,
        fill: impl Into<FillStyle>,
        border: Option<&StrokeStyle>,
        content: impl FnOnce(&mut PaintContext),
    ) {
        let radius = spec.radius();
        self.draw_material(ctx, spec);
        ctx.fill_rounded_rect(spec.bounds, radius, fill);
        if let Some(border) = border.filter(|b| b.width > 0.0) {
            ctx.stroke_rounded_rect(spec.bounds, radius, border.color, border.width);
        }
        ctx.with_clip(spec.bounds, content);
    }

    fn draw_layers(&self, ctx: &mut PaintContext, layers: &[ShadowLayer]) {
        for layer in layers {
            let color = self.style.color.with_alpha8(layer.alpha);
            let path = rounded_rect_path(layer.rect, layer.corner_radius);
            match layer.kind {
                ShadowKind::Ambient => {
                    let radius = layer.rect.width.max(layer.rect.height) / 2.0;
                    let fade = Gradient::radial(
                        layer.rect.center(),
                        radius,
                        color,
                        color.with_alpha(0.0),
                    );
                    ctx.fill_path(path, fade);
                }
                ShadowKind::Basic | ShadowKind::Key => ctx.fill_path(path, color),
            }
        }
    }
}

/// Simple stacked shadow with the default style
pub fn draw_shadow(ctx: &mut PaintContext, bounds: Rect, elevation: i32, corner_radius: i32) {
    let spec = ElevationSpec::new(bounds, elevation, corner_radius);
    ShadowCompositor::default().draw_shadow(ctx, &spec);
}

/// Ambient component with the default style
pub fn draw_ambient_shadow(ctx: &mut PaintContext, bounds: Rect, elevation: i32, corner_radius: i32) {
    let spec = ElevationSpec::new(bounds, elevation, corner_radius);
    ShadowCompositor::default().draw_ambient(ctx, &spec);
}

/// Key component with the default style
pub fn draw_key_shadow(ctx: &mut PaintContext, bounds: Rect, elevation: i32, corner_radius: i32) {
    let spec = ElevationSpec::new(bounds, elevation, corner_radius);
    ShadowCompositor::default().draw_key(ctx, &spec);
}

/// Ambient + key with the default style
pub fn draw_material_shadow(ctx: &mut PaintContext, bounds: Rect, elevation: i32, corner_radius: i32) {
    let spec = ElevationSpec::new(bounds, elevation, corner_radius);
    ShadowCompositor::default().draw_material(ctx, &spec);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::PaintCommand;

    const BOUNDS: Rect = Rect::new(10.0, 10.0, 100.0, 50.0);

    #[test]
    fn test_flat_surface_draws_nothing() {
        for level in [0, -1, -20] {
            let mut ctx = PaintContext::new();
            draw_shadow(&mut ctx, BOUNDS, level, 4);
            draw_ambient_shadow(&mut ctx, BOUNDS, level, 4);
            draw_key_shadow(&mut ctx, BOUNDS, level, 4);
            draw_material_shadow(&mut ctx, BOUNDS, level, 4);
            assert!(ctx.commands().is_empty(), "level {level} drew something");
        }
    }

    #[test]
    fn test_blur_strictly_increases_with_elevation() {
        for level in 1..24 {
            assert!(ambient_blur(level + 1) > ambient_blur(level));
            assert!(key_blur(level + 1) > key_blur(level));
        }
    }

    #[test]
    fn test_alpha_increases_until_clamp() {
        assert_eq!(ambient_alpha(1), 15);
        assert_eq!(ambient_alpha(5), 35);
        assert_eq!(ambient_alpha(6), AMBIENT_MAX_ALPHA);
        assert_eq!(ambient_alpha(50), AMBIENT_MAX_ALPHA);

        assert_eq!(key_alpha(1), 28);
        assert_eq!(key_alpha(4), 52);
        assert_eq!(key_alpha(5), KEY_MAX_ALPHA);
        assert_eq!(key_alpha(i32::MAX), KEY_MAX_ALPHA);

        for level in 1..5 {
            assert!(ambient_alpha(level + 1) > ambient_alpha(level));
            assert!(key_alpha(level + 1) > key_alpha(level));
        }
    }

    #[test]
    fn test_ambient_layer_geometry() {
        let spec = ElevationSpec::new(BOUNDS, 3, 4);
        let layers = ambient_layers(&spec);
        assert_eq!(layers.len(), 1);

        let layer = layers[0];
        assert_eq!(layer.blur_radius, 6.0);
        assert_eq!(layer.alpha, 25);
        // offset down by 3, inflated by 6
        assert_eq!(layer.rect, Rect::new(4.0, 7.0, 112.0, 62.0));
    }

    #[test]
    fn test_key_layers_shrink_toward_silhouette() {
        let spec = ElevationSpec::new(BOUNDS, 2, 0);
        let layers = key_layers(&spec);

        // blur 6 -> layers inflated by 6, 4, 2
        assert_eq!(layers.len(), 3);
        let widths: Vec<f32> = layers.iter().map(|l| l.rect.width).collect();
        assert_eq!(widths, vec![112.0, 108.0, 104.0]);

        for layer in &layers {
            assert_eq!(layer.rect.center().y, BOUNDS.center().y + 4.0);
        }

        let alphas: Vec<u8> = layers.iter().map(|l| l.alpha).collect();
        assert!(alphas.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(*alphas.last().unwrap(), key_alpha(2));
    }

    #[test]
    fn test_basic_layers_fade_outward() {
        let layers = basic_layers(&ElevationSpec::new(BOUNDS, 4, 2));
        assert_eq!(layers.len(), 4);
        assert_eq!(layers[3].rect, BOUNDS.offset(0.0, 4.0));
        assert_eq!(layers[3].alpha, ambient_alpha(4));
        assert!(layers.windows(2).all(|w| w[0].alpha < w[1].alpha));
    }

    #[test]
    fn test_material_draws_ambient_before_key() {
        let mut ctx = PaintContext::new();
        draw_material_shadow(&mut ctx, BOUNDS, 2, 4);

        let commands = ctx.commands();
        let key_count = key_layers(&ElevationSpec::new(BOUNDS, 2, 4)).len();
        assert_eq!(commands.len(), 1 + key_count);
        assert!(matches!(
            &commands[0],
            PaintCommand::FillPath {
                style: FillStyle::Gradient(Gradient::Radial { .. }),
                ..
            }
        ));
        assert!(commands[1..].iter().all(|c| matches!(
            c,
            PaintCommand::FillPath {
                style: FillStyle::Color(_),
                ..
            }
        )));
    }

    #[test]
    fn test_custom_style_keeps_layer_alpha() {
        let compositor = ShadowCompositor::new(ShadowStyle {
            color: Color::rgb(0.2, 0.0, 0.4),
        });
        let mut ctx = PaintContext::new();
        compositor.draw_key(&mut ctx, &ElevationSpec::new(BOUNDS, 1, 0));

        match ctx.commands().last() {
            Some(PaintCommand::FillPath {
                style: FillStyle::Color(color),
                ..
            }) => {
                assert_eq!(color.alpha8(), key_alpha(1));
                assert_eq!(color.r, 0.2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_elevated_surface_z_order() {
        let mut ctx = PaintContext::new();
        let spec = ElevationSpec::new(BOUNDS, 1, 4);
        let border = StrokeStyle {
            color: Color::BLACK,
            width: 1.0,
        };

        ShadowCompositor::default().paint_elevated_surface(
            &mut ctx,
            &spec,
            Color::WHITE,
            Some(&border),
            |ctx| ctx.fill_rect(Rect::new(12.0, 12.0, 4.0, 4.0), Color::BLACK),
        );

        let shadow_count = ambient_layers(&spec).len() + key_layers(&spec).len();
        let commands = ctx.commands();
        match &commands[shadow_count] {
            PaintCommand::FillPath {
                style: FillStyle::Color(color),
                ..
            } => assert_eq!(*color, Color::WHITE),
            other => panic!("expected surface fill, got {other:?}"),
        }
        assert!(matches!(&commands[shadow_count + 1], PaintCommand::StrokePath { .. }));
        assert!(matches!(&commands[shadow_count + 2], PaintCommand::PushClip { .. }));
        assert!(matches!(&commands[shadow_count + 3], PaintCommand::FillRect { .. }));
        assert!(matches!(&commands[shadow_count + 4], PaintCommand::PopClip));
    }
}
