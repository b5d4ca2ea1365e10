//! Named easing functions
//!
//! Curves are addressed by name from theme and widget configuration. Lookup
//! is case-insensitive and never fails: an unrecognized name resolves to
//! [`Easing::FALLBACK`] (`easeOutCubic`) so animation call sites stay
//! crash-free when handed a bad curve name.

use crate::curves;

/// A pure easing curve
pub type EasingFn = fn(f32) -> f32;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    #[default]
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
    EaseInSine,
    EaseOutSine,
    EaseInOutSine,
    EaseInExpo,
    EaseOutExpo,
    EaseInOutExpo,
    EaseInCirc,
    EaseOutCirc,
    EaseInOutCirc,
    EaseInBack,
    EaseOutBack,
    EaseInOutBack,
    EaseInElastic,
    EaseOutElastic,
    EaseInOutElastic,
    EaseInBounce,
    EaseOutBounce,
    EaseInOutBounce,
}

/// Name → curve table, canonical names first, then Material aliases
const REGISTRY: &[(&str, Easing)] = &[
    ("linear", Easing::Linear),
    ("easeInQuad", Easing::EaseInQuad),
    ("easeOutQuad", Easing::EaseOutQuad),
    ("easeInOutQuad", Easing::EaseInOutQuad),
    ("easeInCubic", Easing::EaseInCubic),
    ("easeOutCubic", Easing::EaseOutCubic),
    ("easeInOutCubic", Easing::EaseInOutCubic),
    ("easeInQuart", Easing::EaseInQuart),
    ("easeOutQuart", Easing::EaseOutQuart),
    ("easeInOutQuart", Easing::EaseInOutQuart),
    ("easeInQuint", Easing::EaseInQuint),
    ("easeOutQuint", Easing::EaseOutQuint),
    ("easeInOutQuint", Easing::EaseInOutQuint),
    ("easeInSine", Easing::EaseInSine),
    ("easeOutSine", Easing::EaseOutSine),
    ("easeInOutSine", Easing::EaseInOutSine),
    ("easeInExpo", Easing::EaseInExpo),
    ("easeOutExpo", Easing::EaseOutExpo),
    ("easeInOutExpo", Easing::EaseInOutExpo),
    ("easeInCirc", Easing::EaseInCirc),
    ("easeOutCirc", Easing::EaseOutCirc),
    ("easeInOutCirc", Easing::EaseInOutCirc),
    ("easeInBack", Easing::EaseInBack),
    ("easeOutBack", Easing::EaseOutBack),
    ("easeInOutBack", Easing::EaseInOutBack),
    ("easeInElastic", Easing::EaseInElastic),
    ("easeOutElastic", Easing::EaseOutElastic),
    ("easeInOutElastic", Easing::EaseInOutElastic),
    ("easeInBounce", Easing::EaseInBounce),
    ("easeOutBounce", Easing::EaseOutBounce),
    ("easeInOutBounce", Easing::EaseInOutBounce),
    // Material motion aliases
    ("standard", Easing::EaseInOutCubic),
    ("emphasized", Easing::EaseInOutQuart),
    ("decelerate", Easing::EaseOutCubic),
    ("accelerate", Easing::EaseInCubic),
];

/// Number of canonical (non-alias) entries at the head of `REGISTRY`
const CANONICAL_COUNT: usize = 31;

impl Easing {
    /// Curve used when a name is not recognized
    pub const FALLBACK: Easing = Easing::EaseOutCubic;

    /// Resolve a name, falling back to [`Easing::FALLBACK`]
    pub fn from_name(name: &str) -> Self {
        Self::lookup(name).unwrap_or_else(|| {
            tracing::debug!(name, fallback = Self::FALLBACK.name(), "unknown easing name");
            Self::FALLBACK
        })
    }

    /// Resolve a name without fallback
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.trim();
        REGISTRY
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, easing)| *easing)
    }

    /// Canonical registry name
    pub fn name(&self) -> &'static str {
        REGISTRY[..CANONICAL_COUNT]
            .iter()
            .find(|(_, easing)| easing == self)
            .map_or("easeOutCubic", |(key, _)| key)
    }

    /// Every curve, in registry order
    pub fn all() -> impl Iterator<Item = Easing> {
        REGISTRY[..CANONICAL_COUNT].iter().map(|(_, easing)| *easing)
    }

    /// Whether the curve may leave `[0, 1]` between its endpoints
    pub fn overshoots(&self) -> bool {
        matches!(
            self,
            Easing::EaseInBack
                | Easing::EaseOutBack
                | Easing::EaseInOutBack
                | Easing::EaseInElastic
                | Easing::EaseOutElastic
                | Easing::EaseInOutElastic
        )
    }

    /// Plain function pointer for this curve
    pub fn function(&self) -> EasingFn {
        match self {
            Easing::Linear => curves::linear,
            Easing::EaseInQuad => curves::ease_in_quad,
            Easing::EaseOutQuad => curves::ease_out_quad,
            Easing::EaseInOutQuad => curves::ease_in_out_quad,
            Easing::EaseInCubic => curves::ease_in_cubic,
            Easing::EaseOutCubic => curves::ease_out_cubic,
            Easing::EaseInOutCubic => curves::ease_in_out_cubic,
            Easing::EaseInQuart => curves::ease_in_quart,
            Easing::EaseOutQuart => curves::ease_out_quart,
            Easing::EaseInOutQuart => curves::ease_in_out_quart,
            Easing::EaseInQuint => curves::ease_in_quint,
            Easing::EaseOutQuint => curves::ease_out_quint,
            Easing::EaseInOutQuint => curves::ease_in_out_quint,
            Easing::EaseInSine => curves::ease_in_sine,
            Easing::EaseOutSine => curves::ease_out_sine,
            Easing::EaseInOutSine => curves::ease_in_out_sine,
            Easing::EaseInExpo => curves::ease_in_expo,
            Easing::EaseOutExpo => curves::ease_out_expo,
            Easing::EaseInOutExpo => curves::ease_in_out_expo,
            Easing::EaseInCirc => curves::ease_in_circ,
            Easing::EaseOutCirc => curves::ease_out_circ,
            Easing::EaseInOutCirc => curves::ease_in_out_circ,
            Easing::EaseInBack => curves::ease_in_back,
            Easing::EaseOutBack => curves::ease_out_back,
            Easing::EaseInOutBack => curves::ease_in_out_back,
            Easing::EaseInElastic => curves::ease_in_elastic,
            Easing::EaseOutElastic => curves::ease_out_elastic,
            Easing::EaseInOutElastic => curves::ease_in_out_elastic,
            Easing::EaseInBounce => curves::ease_in_bounce,
            Easing::EaseOutBounce => curves::ease_out_bounce,
            Easing::EaseInOutBounce => curves::ease_in_out_bounce,
        }
    }

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        (self.function())(t)
    }
}

/// Look up a curve by name, falling back to `easeOutCubic`
pub fn get_by_name(name: &str) -> EasingFn {
    Easing::from_name(name).function()
}

/// Evaluate the named curve at `t`
pub fn ease(name: &str, t: f32) -> f32 {
    get_by_name(name)(t)
}

/// Every name the registry accepts, aliases included
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(key, _)| *key)
}
