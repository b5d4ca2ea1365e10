//! Property tweens
//!
//! A [`Tween`] interpolates a value between two endpoints over a fixed
//! duration through an [`Easing`] curve. Retargeting mid-flight restarts from
//! the current value so there is never a visible jump.

use lustre_paint::{Color, Size};

use crate::easing::Easing;

/// A value that can be linearly interpolated
pub trait Animatable: Clone {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for Color {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Color::lerp(from, to, t)
    }
}

impl Animatable for Size {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Size::new(
            f32::lerp(&from.width, &to.width, t),
            f32::lerp(&from.height, &to.height, t),
        )
    }
}

/// A single-property tween
#[derive(Clone, Debug)]
pub struct Tween<T: Animatable> {
    from: T,
    to: T,
    duration_ms: u32,
    easing: Easing,
    current_time: f32,
    playing: bool,
}

impl<T: Animatable> Tween<T> {
    /// Create a tween resting at `value`
    pub fn new(value: T, duration_ms: u32) -> Self {
        Self {
            from: value.clone(),
            to: value,
            duration_ms,
            easing: Easing::default(),
            current_time: 0.0,
            playing: false,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn target(&self) -> &T {
        &self.to
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Linear progress through the duration (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        (self.current_time / self.duration_ms as f32).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> T {
        let eased = self.easing.apply(self.progress());
        T::lerp(&self.from, &self.to, eased)
    }

    /// Animate from `from` to `to`
    pub fn start(&mut self, from: T, to: T) {
        self.from = from;
        self.to = to;
        self.current_time = 0.0;
        self.playing = self.duration_ms > 0;
    }

    /// Animate from wherever the tween currently is to `to`
    pub fn retarget(&mut self, to: T) {
        let current = self.value();
        self.start(current, to);
    }

    /// Jump to `value` without animating
    pub fn snap(&mut self, value: T) {
        self.from = value.clone();
        self.to = value;
        self.current_time = self.duration_ms as f32;
        self.playing = false;
    }

    /// Advance by `dt_ms`. Returns true while the value is still changing.
    pub fn tick(&mut self, dt_ms: f32) -> bool {
        if !self.playing {
            return false;
        }
        self.current_time += dt_ms;
        if self.current_time >= self.duration_ms as f32 {
            self.current_time = self.duration_ms as f32;
            self.playing = false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_tween_midpoint() {
        let mut tween = Tween::new(0.0f32, 100).with_easing(Easing::Linear);
        tween.start(0.0, 10.0);
        tween.tick(50.0);
        assert!((tween.value() - 5.0).abs() < 1e-5);
        assert!(tween.is_playing());
    }

    #[test]
    fn test_tween_finishes_at_target() {
        let mut tween = Tween::new(0.0f32, 100);
        tween.start(0.0, 1.0);
        assert!(tween.tick(60.0));
        assert!(tween.tick(60.0));
        assert!(!tween.is_playing());
        assert_eq!(tween.value(), 1.0);
        assert!(!tween.tick(16.0));
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut tween = Tween::new(0.0f32, 100).with_easing(Easing::Linear);
        tween.start(0.0, 10.0);
        tween.tick(50.0);
        tween.retarget(0.0);

        assert!((tween.value() - 5.0).abs() < 1e-5);
        tween.tick(100.0);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut tween = Tween::new(Color::BLACK, 0);
        tween.start(Color::BLACK, Color::WHITE);
        assert!(!tween.is_playing());
        assert_eq!(tween.value(), Color::WHITE);
    }

    #[test]
    fn test_size_tween() {
        let mut tween = Tween::new(Size::ZERO, 10).with_easing(Easing::Linear);
        tween.start(Size::ZERO, Size::new(20.0, 40.0));
        tween.tick(5.0);
        assert_eq!(tween.value(), Size::new(10.0, 20.0));
    }
}
