//! Lustre Animation System
//!
//! Named easing curves and property tweens.
//!
//! # Features
//!
//! - **Easing Registry**: Every standard curve addressable by a case-insensitive
//!   name, with a safe `easeOutCubic` fallback for unknown names
//! - **Material Aliases**: `standard`, `emphasized`, `decelerate`, `accelerate`
//! - **Tweens**: Interruptible single-property animations over `f32`, colors
//!   and sizes
//!
//! # Example
//!
//! ```rust
//! use lustre_animation::{ease, Easing};
//!
//! assert_eq!(Easing::from_name("EaseInQuad"), Easing::EaseInQuad);
//! assert_eq!(ease("easeInQuad", 0.5), 0.25);
//!
//! // Unknown names never fail
//! assert_eq!(Easing::from_name("wobble"), Easing::EaseOutCubic);
//! ```

pub mod curves;
pub mod easing;
pub mod tween;

pub use easing::{ease, get_by_name, Easing, EasingFn};
pub use tween::{Animatable, Tween};
