//! Per-surface effect layer
//!
//! An [`EffectLayer`] owns every effect attached to one host surface. It
//! routes pointer events to them, converts elapsed frame time into ticks via
//! each effect's own [`FrameTimer`], paints them in attach order and requests
//! a repaint from the host whenever a tick changed something visible.
//!
//! Attaching returns an [`EffectId`]. Detaching closes that handle exactly
//! once; dropping the layer disposes whatever is still attached.

use std::time::Duration;

use lustre_core::error::{CoreError, Result};
use lustre_core::events::{event_types, Event, EventData};
use lustre_core::timer::FrameTimer;
use lustre_paint::{Color, PaintContext, Point, Size};
use slotmap::{new_key_type, SlotMap};

use crate::ripple::{Ripple, RippleConfig};

new_key_type! {
    /// Subscription handle for an effect attached to a layer
    pub struct EffectId;
}

/// Something a layer can drive: receives pointer input, ticks, paints.
pub trait SurfaceEffect: Send {
    fn on_pointer_down(&mut self, _position: Point) {}

    fn on_pointer_up(&mut self, _position: Point) {}

    fn on_resize(&mut self, _size: Size) {}

    /// Recolor the effect. Effects without a color ignore this.
    fn set_color(&mut self, _color: Color) {}

    /// Advance one frame; true if a repaint is needed
    fn tick(&mut self) -> bool;

    fn paint(&self, ctx: &mut PaintContext);

    fn timer(&self) -> &FrameTimer;

    fn timer_mut(&mut self) -> &mut FrameTimer;

    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;

    /// Whether the effect currently has anything in flight
    fn is_active(&self) -> bool {
        self.timer().is_running()
    }
}

impl SurfaceEffect for Ripple {
    fn on_pointer_down(&mut self, position: Point) {
        self.start_ripple(position);
    }

    fn on_pointer_up(&mut self, _position: Point) {
        self.start_fade();
    }

    fn on_resize(&mut self, size: Size) {
        self.set_surface_size(size);
    }

    fn set_color(&mut self, color: Color) {
        Ripple::set_color(self, color);
    }

    fn tick(&mut self) -> bool {
        Ripple::tick(self)
    }

    fn paint(&self, ctx: &mut PaintContext) {
        Ripple::paint(self, ctx)
    }

    fn timer(&self) -> &FrameTimer {
        Ripple::timer(self)
    }

    fn timer_mut(&mut self) -> &mut FrameTimer {
        Ripple::timer_mut(self)
    }

    fn dispose(&mut self) {
        Ripple::dispose(self)
    }

    fn is_disposed(&self) -> bool {
        Ripple::is_disposed(self)
    }

    fn is_active(&self) -> bool {
        Ripple::is_active(self)
    }
}

/// Repaint request callback supplied by the host
pub type RepaintCallback = Box<dyn FnMut() + Send>;

/// Effects bound to one host surface
pub struct EffectLayer {
    surface_id: u64,
    size: Size,
    ripple_config: RippleConfig,
    effects: SlotMap<EffectId, Box<dyn SurfaceEffect>>,
    on_repaint: Option<RepaintCallback>,
}

impl EffectLayer {
    pub fn new(surface_id: u64, size: Size) -> Self {
        Self {
            surface_id,
            size,
            ripple_config: RippleConfig::default(),
            effects: SlotMap::with_key(),
            on_repaint: None,
        }
    }

    /// Config used for ripples spawned by this layer
    pub fn with_ripple_config(mut self, config: RippleConfig) -> Self {
        self.ripple_config = config;
        self
    }

    pub fn surface_id(&self) -> u64 {
        self.surface_id
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn ripple_config(&self) -> &RippleConfig {
        &self.ripple_config
    }

    /// Install the host's repaint trigger
    pub fn on_repaint<F>(&mut self, callback: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.on_repaint = Some(Box::new(callback));
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn contains(&self, id: EffectId) -> bool {
        self.effects.contains_key(id)
    }

    pub fn get(&self, id: EffectId) -> Option<&dyn SurfaceEffect> {
        self.effects.get(id).map(|effect| effect.as_ref())
    }

    pub fn get_mut(&mut self, id: EffectId) -> Option<&mut (dyn SurfaceEffect + 'static)> {
        self.effects.get_mut(id).map(|effect| effect.as_mut())
    }

    /// Recolor every attached effect and any ripple spawned later
    pub fn set_ripple_color(&mut self, color: Color) {
        self.ripple_config.color = color;
        for effect in self.effects.values_mut() {
            effect.set_color(color);
        }
    }

    /// Whether any attached effect still has work in flight
    pub fn is_animating(&self) -> bool {
        self.effects.values().any(|effect| effect.is_active())
    }

    // === Subscriptions ===

    /// Attach an effect, sized to the surface
    pub fn attach<E>(&mut self, mut effect: E) -> EffectId
    where
        E: SurfaceEffect + 'static,
    {
        effect.on_resize(self.size);
        let id = self.effects.insert(Box::new(effect));
        tracing::debug!(surface = self.surface_id, ?id, "effect attached");
        id
    }

    /// Detach and dispose an effect. Each handle can be closed exactly once.
    pub fn detach(&mut self, id: EffectId) -> Result<()> {
        let mut effect = self.effects.remove(id).ok_or(CoreError::StaleHandle)?;
        effect.dispose();
        tracing::debug!(surface = self.surface_id, ?id, "effect detached");
        Ok(())
    }

    /// Dispose and remove every attached effect
    pub fn clear(&mut self) {
        for (id, mut effect) in self.effects.drain() {
            effect.dispose();
            tracing::debug!(surface = self.surface_id, ?id, "effect disposed");
        }
    }

    /// Start a ripple at `point` that fades on its own and removes itself
    /// from the layer once it has faded out
    pub fn spawn_one_shot(&mut self, point: Point) -> EffectId {
        let mut ripple = Ripple::one_shot(self.size, self.ripple_config);
        ripple.trigger_at(point);
        self.attach(ripple)
    }

    // === Host hooks ===

    /// Route a pointer or resize event to every effect. Unmount disposes
    /// and removes them all. Events addressed to another surface are ignored.
    pub fn dispatch(&mut self, event: &Event) {
        if event.target != self.surface_id {
            return;
        }
        match (event.event_type, &event.data) {
            (event_types::POINTER_DOWN, EventData::Pointer { x, y, .. }) => {
                let point = Point::new(*x, *y);
                for effect in self.effects.values_mut() {
                    effect.on_pointer_down(point);
                }
            }
            (event_types::POINTER_UP, EventData::Pointer { x, y, .. }) => {
                let point = Point::new(*x, *y);
                for effect in self.effects.values_mut() {
                    effect.on_pointer_up(point);
                }
            }
            (event_types::RESIZE, EventData::Resize { width, height }) => {
                self.resize(Size::new(*width, *height));
            }
            (event_types::UNMOUNT, _) => {
                tracing::debug!(
                    surface = self.surface_id,
                    effects = self.len(),
                    "surface unmounted"
                );
                self.clear();
            }
            _ => {}
        }
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
        for effect in self.effects.values_mut() {
            effect.on_resize(size);
        }
    }

    /// Feed elapsed frame time. Returns the number of repaints requested.
    pub fn advance(&mut self, dt: Duration) -> usize {
        self.run_ticks(|timer| timer.advance(dt))
    }

    /// Deliver exactly one frame tick to every running effect
    pub fn tick_frame(&mut self) -> usize {
        self.run_ticks(|timer| u32::from(timer.fire()))
    }

    /// Paint every drawable effect in attach order
    pub fn paint(&self, ctx: &mut PaintContext) {
        for effect in self.effects.values() {
            effect.paint(ctx);
        }
    }

    fn run_ticks(&mut self, mut due: impl FnMut(&mut FrameTimer) -> u32) -> usize {
        let mut repaints = 0;
        let mut finished = Vec::new();

        for (id, effect) in self.effects.iter_mut() {
            for _ in 0..due(effect.timer_mut()) {
                if effect.tick() {
                    repaints += 1;
                }
                if effect.is_disposed() {
                    break;
                }
            }
            if effect.is_disposed() {
                finished.push(id);
            }
        }

        for id in finished {
            self.effects.remove(id);
            tracing::debug!(surface = self.surface_id, ?id, "finished effect removed");
        }

        if let Some(callback) = self.on_repaint.as_mut() {
            for _ in 0..repaints {
                callback();
            }
        }
        repaints
    }
}

impl Drop for EffectLayer {
    fn drop(&mut self) {
        self.clear();
    }
}
