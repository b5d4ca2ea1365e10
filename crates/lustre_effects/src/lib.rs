//! Lustre Effects
//!
//! Material touch feedback and elevated surfaces.
//!
//! # Features
//!
//! - **Ripples**: Expanding, fading contact overlays driven by a frame timer,
//!   either persistent per control or one-shot per press
//! - **Effect Layers**: Per-surface registries that route pointer events,
//!   convert frame time into ticks and request repaints
//! - **Material Surfaces**: Shadow, background, border, content and ripple
//!   composed in a fixed z-order, customized through a delegate
//! - **Configuration**: TOML-backed defaults for ripple, shadow and hover
//!   animation parameters
//!
//! # Example
//!
//! ```rust
//! use lustre_effects::{Ripple, RippleConfig, RipplePhase};
//! use lustre_paint::{Point, Size};
//!
//! let mut ripple = Ripple::new(Size::new(100.0, 50.0), RippleConfig::default());
//! ripple.start_ripple(Point::new(10.0, 10.0));
//! assert_eq!(ripple.phase(), RipplePhase::Expanding);
//!
//! ripple.tick();
//! assert_eq!(ripple.radius(), 15.0);
//! ```

pub mod config;
pub mod layer;
pub mod ripple;
pub mod surface;

pub use config::{ConfigError, EffectsConfig};
pub use layer::{EffectId, EffectLayer, SurfaceEffect};
pub use ripple::{DisposalPolicy, Ripple, RippleConfig, RipplePhase};
pub use surface::{InteractionState, MaterialSurface, SolidFill, SurfaceDelegate};
