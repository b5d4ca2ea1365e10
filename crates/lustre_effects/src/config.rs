//! Effects configuration file handling
//!
//! ```toml
//! [ripple]
//! expand_speed = 15.0
//! fade_speed = 0.03
//! initial_alpha = 0.3
//! color = "#FFFFFF"
//! tick_interval_ms = 16
//! auto_fade_delay_ms = 150
//!
//! [shadow]
//! color = "#000000"
//!
//! [animation]
//! hover_duration_ms = 150
//! easing = "standard"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use lustre_animation::Easing;
use lustre_paint::{Color, ShadowStyle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ripple::RippleConfig;

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse effects config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize effects config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level effects configuration
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct EffectsConfig {
    #[serde(default)]
    pub ripple: RippleSection,
    #[serde(default)]
    pub shadow: ShadowSection,
    #[serde(default)]
    pub animation: AnimationSection,
}

/// `[ripple]` section
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct RippleSection {
    /// Radius growth per tick, in pixels
    #[serde(default = "default_expand_speed")]
    pub expand_speed: f32,
    /// Alpha lost per tick while fading
    #[serde(default = "default_fade_speed")]
    pub fade_speed: f32,
    /// Alpha at the moment of contact
    #[serde(default = "default_initial_alpha")]
    pub initial_alpha: f32,
    #[serde(default = "default_ripple_color")]
    pub color: String,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    /// Delay before a programmatic trigger starts fading on its own
    #[serde(default = "default_auto_fade_delay_ms")]
    pub auto_fade_delay_ms: u64,
}

fn default_expand_speed() -> f32 {
    15.0
}

fn default_fade_speed() -> f32 {
    0.03
}

fn default_initial_alpha() -> f32 {
    0.3
}

fn default_ripple_color() -> String {
    "#FFFFFF".to_string()
}

fn default_tick_interval_ms() -> u64 {
    16
}

fn default_auto_fade_delay_ms() -> u64 {
    150
}

impl Default for RippleSection {
    fn default() -> Self {
        Self {
            expand_speed: default_expand_speed(),
            fade_speed: default_fade_speed(),
            initial_alpha: default_initial_alpha(),
            color: default_ripple_color(),
            tick_interval_ms: default_tick_interval_ms(),
            auto_fade_delay_ms: default_auto_fade_delay_ms(),
        }
    }
}

/// `[shadow]` section
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ShadowSection {
    #[serde(default = "default_shadow_color")]
    pub color: String,
}

fn default_shadow_color() -> String {
    "#000000".to_string()
}

impl Default for ShadowSection {
    fn default() -> Self {
        Self {
            color: default_shadow_color(),
        }
    }
}

/// `[animation]` section
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct AnimationSection {
    #[serde(default = "default_hover_duration_ms")]
    pub hover_duration_ms: u32,
    /// Easing name; unknown names fall back to `easeOutCubic`
    #[serde(default = "default_easing")]
    pub easing: String,
}

fn default_hover_duration_ms() -> u32 {
    150
}

fn default_easing() -> String {
    "standard".to_string()
}

impl Default for AnimationSection {
    fn default() -> Self {
        Self {
            hover_duration_ms: default_hover_duration_ms(),
            easing: default_easing(),
        }
    }
}

impl EffectsConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EffectsConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading effects config");
        Self::from_toml_str(&content)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the effects cannot run with
    pub fn validate(&self) -> Result<()> {
        let ripple = &self.ripple;
        if !(ripple.expand_speed.is_finite() && ripple.expand_speed > 0.0) {
            return Err(invalid("ripple.expand_speed", "must be a positive number"));
        }
        if !(ripple.fade_speed > 0.0 && ripple.fade_speed <= 1.0) {
            return Err(invalid("ripple.fade_speed", "must be in (0, 1]"));
        }
        if !(ripple.initial_alpha > 0.0 && ripple.initial_alpha <= 1.0) {
            return Err(invalid("ripple.initial_alpha", "must be in (0, 1]"));
        }
        if ripple.tick_interval_ms == 0 {
            return Err(invalid("ripple.tick_interval_ms", "must be greater than zero"));
        }
        if Color::parse_hex(&ripple.color).is_none() {
            return Err(invalid("ripple.color", "expected #RRGGBB or #RRGGBBAA"));
        }
        if Color::parse_hex(&self.shadow.color).is_none() {
            return Err(invalid("shadow.color", "expected #RRGGBB or #RRGGBBAA"));
        }
        if Easing::lookup(&self.animation.easing).is_none() {
            tracing::warn!(
                easing = %self.animation.easing,
                "unknown easing name, hover animations will use easeOutCubic"
            );
        }
        Ok(())
    }

    /// Ripple parameters resolved from the `[ripple]` section
    pub fn ripple_config(&self) -> RippleConfig {
        let defaults = RippleConfig::default();
        RippleConfig {
            expand_speed: self.ripple.expand_speed,
            fade_speed: self.ripple.fade_speed,
            initial_alpha: self.ripple.initial_alpha,
            color: Color::parse_hex(&self.ripple.color).unwrap_or(defaults.color),
            tick_interval: Duration::from_millis(self.ripple.tick_interval_ms),
            auto_fade_delay: Duration::from_millis(self.ripple.auto_fade_delay_ms),
        }
    }

    pub fn shadow_style(&self) -> ShadowStyle {
        let defaults = ShadowStyle::default();
        ShadowStyle {
            color: Color::parse_hex(&self.shadow.color).unwrap_or(defaults.color),
        }
    }

    pub fn hover_easing(&self) -> Easing {
        Easing::from_name(&self.animation.easing)
    }
}

fn invalid(field: &'static str, reason: &str) -> ConfigError {
    tracing::warn!(field, reason, "rejected effects config value");
    ConfigError::Invalid {
        field,
        reason: reason.to_string(),
    }
}
