//! Ripple touch feedback
//!
//! A ripple is a translucent circle anchored at the contact point. It grows
//! each tick until it covers the farthest corner of its surface, then fades
//! out once the contact is released (or after a short delay when triggered
//! programmatically).
//!
//! ```text
//!          start_ripple / trigger_ripple
//!   Idle ────────────────────────────────▶ Expanding ──┐ radius += expand_speed
//!    ▲                                         │  ◀────┘
//!    │                            start_fade / │ auto-fade
//!    │          alpha <= 0                     ▼
//!    └─────────────────────────────────────  Fading ──┐ alpha -= fade_speed
//!                                                ◀────┘
//! ```
//!
//! The same machine serves both persistent ripples bound to a control and
//! one-shot ripples spawned per press; only the [`DisposalPolicy`] differs.

use std::time::Duration;

use lustre_core::timer::{FrameTimer, DEFAULT_TICK_INTERVAL};
use lustre_paint::color::unit_to_u8;
use lustre_paint::{Color, PaintContext, Point, Rect, Size};

/// Ripple tuning parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleConfig {
    /// Radius growth per tick, in pixels
    pub expand_speed: f32,
    /// Alpha lost per tick while fading
    pub fade_speed: f32,
    /// Alpha at the moment of contact
    pub initial_alpha: f32,
    pub color: Color,
    pub tick_interval: Duration,
    /// How long a programmatic trigger stays at full alpha before fading
    pub auto_fade_delay: Duration,
}

impl Default for RippleConfig {
    fn default() -> Self {
        Self {
            expand_speed: 15.0,
            fade_speed: 0.03,
            initial_alpha: 0.3,
            color: Color::WHITE,
            tick_interval: DEFAULT_TICK_INTERVAL,
            auto_fade_delay: Duration::from_millis(150),
        }
    }
}

impl RippleConfig {
    /// Copy with speeds and alpha forced into the ranges the ripple can run
    /// with. Non-finite values count as zero growth and an instant fade.
    pub fn sanitized(self) -> Self {
        let finite_or = |value: f32, fallback: f32| {
            if value.is_finite() {
                value
            } else {
                fallback
            }
        };
        Self {
            expand_speed: finite_or(self.expand_speed, 0.0).max(0.0),
            fade_speed: finite_or(self.fade_speed, 1.0).clamp(0.0, 1.0),
            initial_alpha: finite_or(self.initial_alpha, 0.0).clamp(0.0, 1.0),
            ..self
        }
    }
}

/// Lifecycle phase of a ripple
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RipplePhase {
    #[default]
    Idle,
    Expanding,
    Fading,
}

/// What happens once a ripple has fully faded
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DisposalPolicy {
    /// Return to idle and wait for the next contact
    #[default]
    Reusable,
    /// Dispose after the first complete cycle
    OneShot,
}

/// Expanding, fading circular overlay bound to one surface
#[derive(Clone, Debug)]
pub struct Ripple {
    config: RippleConfig,
    policy: DisposalPolicy,
    surface: Size,
    center: Point,
    radius: f32,
    max_radius: f32,
    alpha: f32,
    phase: RipplePhase,
    timer: FrameTimer,
    /// Ticks left before a programmatic trigger starts fading
    auto_fade_in: Option<u32>,
    disposed: bool,
}

impl Ripple {
    /// Create an idle ripple for a surface of the given size
    pub fn new(surface: Size, config: RippleConfig) -> Self {
        let sanitized = config.sanitized();
        if sanitized != config {
            tracing::warn!(?config, "ripple config out of range, clamped");
        }
        let config = sanitized;
        let timer = FrameTimer::new(config.tick_interval).unwrap_or_else(|err| {
            tracing::warn!(%err, "invalid ripple tick interval, using default");
            FrameTimer::default()
        });
        Self {
            config,
            policy: DisposalPolicy::Reusable,
            surface,
            center: Point::ZERO,
            radius: 0.0,
            max_radius: 0.0,
            alpha: 0.0,
            phase: RipplePhase::Idle,
            timer,
            auto_fade_in: None,
            disposed: false,
        }
    }

    /// Create a ripple that disposes itself after one cycle
    pub fn one_shot(surface: Size, config: RippleConfig) -> Self {
        Self::new(surface, config).with_policy(DisposalPolicy::OneShot)
    }

    pub fn with_policy(mut self, policy: DisposalPolicy) -> Self {
        self.policy = policy;
        self
    }

    // === Accessors ===

    pub fn config(&self) -> &RippleConfig {
        &self.config
    }

    pub fn policy(&self) -> DisposalPolicy {
        self.policy
    }

    pub fn phase(&self) -> RipplePhase {
        self.phase
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn color(&self) -> Color {
        self.config.color
    }

    /// Override the ripple color, e.g. for a themed control
    pub fn set_color(&mut self, color: Color) {
        self.config.color = color;
    }

    pub fn surface_size(&self) -> Size {
        self.surface
    }

    /// Update the surface size. Takes effect at the next start.
    pub fn set_surface_size(&mut self, size: Size) {
        self.surface = size;
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut FrameTimer {
        &mut self.timer
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    pub fn is_active(&self) -> bool {
        self.phase != RipplePhase::Idle
    }

    /// Whether a paint call would draw anything
    pub fn is_drawable(&self) -> bool {
        self.is_active() && self.alpha > 0.0 && self.radius > 0.0
    }

    // === Transitions ===

    /// Begin a ripple at `point`, restarting any ripple in flight
    pub fn start_ripple(&mut self, point: Point) {
        if self.disposed {
            return;
        }
        let bounds = Rect::from_size(self.surface);
        self.center = point;
        self.max_radius = bounds
            .corners()
            .iter()
            .map(|corner| point.distance(*corner))
            .fold(0.0, f32::max);
        self.radius = 0.0;
        self.alpha = self.config.initial_alpha;
        self.auto_fade_in = None;
        self.phase = RipplePhase::Expanding;
        self.timer.start();

        tracing::debug!(
            x = point.x,
            y = point.y,
            max_radius = self.max_radius,
            "ripple expanding"
        );
    }

    /// Start a ripple at `point` that fades on its own after the auto-fade delay
    pub fn trigger_at(&mut self, point: Point) {
        self.start_ripple(point);
        if self.disposed {
            return;
        }
        let interval = self.timer.interval().as_millis().max(1);
        let delay = self.config.auto_fade_delay.as_millis();
        let ticks = u32::try_from(delay.div_ceil(interval)).unwrap_or(u32::MAX);
        if ticks == 0 {
            self.start_fade();
        } else {
            self.auto_fade_in = Some(ticks);
        }
    }

    /// Programmatic ripple anchored at the surface center
    pub fn trigger_ripple(&mut self) {
        self.trigger_at(Rect::from_size(self.surface).center());
    }

    /// Release: begin fading. Only meaningful while expanding.
    pub fn start_fade(&mut self) {
        if self.disposed || self.phase != RipplePhase::Expanding {
            return;
        }
        self.auto_fade_in = None;
        self.phase = RipplePhase::Fading;
        tracing::debug!(radius = self.radius, alpha = self.alpha, "ripple fading");
    }

    /// Stop the timer for good. Later ticks and starts are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.timer.dispose();
        self.phase = RipplePhase::Idle;
        self.radius = 0.0;
        self.alpha = 0.0;
        self.auto_fade_in = None;
        tracing::debug!(policy = ?self.policy, "ripple disposed");
    }

    /// Advance one frame. Returns true if the visible state changed and the
    /// surface should be repainted.
    pub fn tick(&mut self) -> bool {
        if self.disposed {
            return false;
        }
        match self.phase {
            RipplePhase::Idle => false,
            RipplePhase::Expanding => {
                let grew = self.grow();
                if let Some(remaining) = self.auto_fade_in {
                    if remaining <= 1 {
                        self.start_fade();
                    } else {
                        self.auto_fade_in = Some(remaining - 1);
                    }
                }
                tracing::trace!(radius = self.radius, "ripple tick");
                grew
            }
            RipplePhase::Fading => {
                self.grow();
                if self.config.fade_speed > 0.0 {
                    self.alpha -= self.config.fade_speed;
                } else {
                    self.alpha = 0.0;
                }
                tracing::trace!(radius = self.radius, alpha = self.alpha, "ripple tick");
                if self.alpha <= 0.0 {
                    self.finish();
                }
                true
            }
        }
    }

    /// Draw the overlay, clipped to the surface
    pub fn paint(&self, ctx: &mut PaintContext) {
        if !self.is_drawable() {
            return;
        }
        let color = self.config.color.with_alpha8(unit_to_u8(self.alpha));
        let (center, radius) = (self.center, self.radius);
        ctx.with_clip(Rect::from_size(self.surface), |ctx| {
            ctx.fill_circle(center, radius, color);
        });
    }

    fn grow(&mut self) -> bool {
        let next = (self.radius + self.config.expand_speed).clamp(0.0, self.max_radius);
        if next == self.radius {
            return false;
        }
        self.radius = next;
        true
    }

    fn finish(&mut self) {
        self.alpha = 0.0;
        self.radius = 0.0;
        self.phase = RipplePhase::Idle;
        self.timer.stop();
        tracing::debug!("ripple idle");

        if self.policy == DisposalPolicy::OneShot {
            self.dispose();
        }
    }
}
