//! Material surfaces
//!
//! A [`MaterialSurface`] is the composition a control builds on: elevation
//! shadow, background fill, optional border, clipped content and a ripple
//! overlay. Controls customize it through a [`SurfaceDelegate`] rather than
//! by overriding paint methods.

use std::time::Duration;

use lustre_animation::Tween;
use lustre_core::events::{event_types, Event, EventData};
use lustre_paint::{
    Color, ElevationSpec, PaintContext, Rect, ShadowCompositor, Size, StrokeStyle,
};

use crate::config::EffectsConfig;
use crate::layer::{EffectId, EffectLayer};
use crate::ripple::Ripple;

/// Pointer interaction state of a surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct InteractionState {
    pub hovered: bool,
    pub pressed: bool,
}

/// Per-control customization hooks
pub trait SurfaceDelegate: Send {
    /// Fill color the background should animate toward
    fn current_fill_color(&self, state: InteractionState) -> Color;

    /// Paint the background. The default is a plain rounded-rect fill.
    fn render_background(&self, ctx: &mut PaintContext, bounds: Rect, radius: f32, fill: Color) {
        ctx.fill_rounded_rect(bounds, radius, fill);
    }

    /// Paint content inside the surface clip
    fn render_content(&self, _ctx: &mut PaintContext, _bounds: Rect) {}

    fn on_hover_changed(&mut self, _hovered: bool) {}

    fn on_press_changed(&mut self, _pressed: bool) {}
}

/// Delegate with fixed colors per state
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolidFill {
    pub normal: Color,
    pub hovered: Color,
    pub pressed: Color,
}

impl SolidFill {
    pub fn new(normal: Color) -> Self {
        Self {
            normal,
            hovered: normal,
            pressed: normal,
        }
    }

    pub fn hovered(mut self, color: Color) -> Self {
        self.hovered = color;
        self
    }

    pub fn pressed(mut self, color: Color) -> Self {
        self.pressed = color;
        self
    }
}

impl SurfaceDelegate for SolidFill {
    fn current_fill_color(&self, state: InteractionState) -> Color {
        if state.pressed {
            self.pressed
        } else if state.hovered {
            self.hovered
        } else {
            self.normal
        }
    }
}

/// An elevated, ripple-bearing surface
pub struct MaterialSurface<D: SurfaceDelegate> {
    id: u64,
    bounds: Rect,
    elevation: i32,
    corner_radius: i32,
    border: Option<StrokeStyle>,
    compositor: ShadowCompositor,
    delegate: D,
    state: InteractionState,
    fill: Tween<Color>,
    layer: EffectLayer,
    ripple: EffectId,
}

impl<D: SurfaceDelegate> MaterialSurface<D> {
    pub fn new(id: u64, bounds: Rect, delegate: D) -> Self {
        Self::with_config(id, bounds, delegate, &EffectsConfig::default())
    }

    pub fn with_config(id: u64, bounds: Rect, delegate: D, config: &EffectsConfig) -> Self {
        let ripple_config = config.ripple_config();
        let mut layer = EffectLayer::new(id, bounds.size()).with_ripple_config(ripple_config);
        let ripple = layer.attach(Ripple::new(bounds.size(), ripple_config));
        let fill = Tween::new(
            delegate.current_fill_color(InteractionState::default()),
            config.animation.hover_duration_ms,
        )
        .with_easing(config.hover_easing());

        Self {
            id,
            bounds,
            elevation: 0,
            corner_radius: 0,
            border: None,
            compositor: ShadowCompositor::new(config.shadow_style()),
            delegate,
            state: InteractionState::default(),
            fill,
            layer,
            ripple,
        }
    }

    pub fn with_elevation(mut self, elevation: i32) -> Self {
        self.elevation = elevation;
        self
    }

    pub fn with_corner_radius(mut self, radius: i32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_border(mut self, border: StrokeStyle) -> Self {
        self.border = Some(border);
        self
    }

    // === Accessors ===

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn elevation(&self) -> i32 {
        self.elevation
    }

    pub fn set_elevation(&mut self, elevation: i32) {
        self.elevation = elevation;
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    pub fn layer(&self) -> &EffectLayer {
        &self.layer
    }

    pub fn layer_mut(&mut self) -> &mut EffectLayer {
        &mut self.layer
    }

    /// Handle of the surface's own persistent ripple. Stale after unmount.
    pub fn ripple_id(&self) -> EffectId {
        self.ripple
    }

    /// Override the ripple color, e.g. to contrast with a themed fill
    pub fn set_ripple_color(&mut self, color: Color) {
        self.layer.set_ripple_color(color);
    }

    /// Current (possibly mid-animation) background color
    pub fn fill_color(&self) -> Color {
        self.fill.value()
    }

    pub fn elevation_spec(&self) -> ElevationSpec {
        ElevationSpec::new(self.bounds, self.elevation, self.corner_radius)
    }

    pub fn is_animating(&self) -> bool {
        self.fill.is_playing() || self.layer.is_animating()
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layer.resize(bounds.size());
    }

    // === Input ===

    /// Handle a host event addressed to this surface. Returns false for
    /// events meant for another surface.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if event.target != self.id {
            return false;
        }
        match event.event_type {
            event_types::POINTER_ENTER => self.set_hovered(true),
            event_types::POINTER_LEAVE => {
                self.set_hovered(false);
                if self.state.pressed {
                    self.set_pressed(false);
                    self.layer.dispatch(&Event::pointer_up(self.id, 0.0, 0.0));
                }
            }
            event_types::POINTER_DOWN => {
                self.set_pressed(true);
                self.layer.dispatch(event);
            }
            event_types::POINTER_UP => {
                self.set_pressed(false);
                self.layer.dispatch(event);
            }
            event_types::RESIZE => {
                if let EventData::Resize { width, height } = event.data {
                    let size = Size::new(width, height);
                    self.bounds = Rect::new(self.bounds.x, self.bounds.y, size.width, size.height);
                }
                self.layer.dispatch(event);
            }
            event_types::UNMOUNT => {
                self.state = InteractionState::default();
                self.fill.snap(self.delegate.current_fill_color(self.state));
                self.layer.dispatch(event);
            }
            _ => {}
        }
        true
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if self.state.hovered == hovered {
            return;
        }
        self.state.hovered = hovered;
        self.delegate.on_hover_changed(hovered);
        self.retarget_fill();
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        if self.state.pressed == pressed {
            return;
        }
        self.state.pressed = pressed;
        self.delegate.on_press_changed(pressed);
        self.retarget_fill();
    }

    fn retarget_fill(&mut self) {
        let target = self.delegate.current_fill_color(self.state);
        tracing::debug!(surface = self.id, state = ?self.state, "fill retargeted");
        self.fill.retarget(target);
    }

    // === Frame ===

    /// Advance animations. Returns true if the surface needs repainting.
    pub fn advance(&mut self, dt: Duration) -> bool {
        let tweening = self.fill.tick(dt.as_secs_f32() * 1000.0);
        let repaints = self.layer.advance(dt);
        tweening || repaints > 0
    }

    /// Paint in z-order: shadow, background, border, clipped content, ripple
    pub fn paint(&self, ctx: &mut PaintContext) {
        let spec = self.elevation_spec();
        let radius = spec.radius();
        let bounds = self.bounds;

        self.compositor.draw_material(ctx, &spec);
        self.delegate
            .render_background(ctx, bounds, radius, self.fill.value());
        if let Some(border) = self.border.as_ref().filter(|b| b.width > 0.0) {
            ctx.stroke_rounded_rect(bounds, radius, border.color, border.width);
        }
        ctx.with_clip(bounds, |ctx| {
            self.delegate.render_content(ctx, bounds);
            ctx.with_translation(bounds.x, bounds.y, |ctx| self.layer.paint(ctx));
        });
    }
}
