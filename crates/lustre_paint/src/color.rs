//! Color types and utilities

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Parse `#RRGGBB` / `#RRGGBBAA` (leading `#` optional)
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.trim().trim_start_matches('#');
        if !matches!(digits.len(), 6 | 8) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        if digits.len() == 8 {
            Some(Self::from_rgba8(
                (value >> 24) as u8,
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            ))
        } else {
            Some(Self::from_hex(value))
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Set alpha from an 8-bit channel value
    pub fn with_alpha8(self, alpha: u8) -> Self {
        self.with_alpha(f32::from(alpha) / 255.0)
    }

    /// Alpha as an 8-bit channel value, rounded to nearest
    pub fn alpha8(&self) -> u8 {
        unit_to_u8(self.a)
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            unit_to_u8(self.r),
            unit_to_u8(self.g),
            unit_to_u8(self.b),
            unit_to_u8(self.a),
        ]
    }
}

/// Scale a 0..1 channel to 0..255, rounding and clamping
pub fn unit_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_variants() {
        assert_eq!(Color::parse_hex("#FFFFFF"), Some(Color::WHITE));
        assert_eq!(Color::parse_hex("000000"), Some(Color::BLACK));
        assert_eq!(
            Color::parse_hex("#00000080").map(|c| c.alpha8()),
            Some(0x80)
        );
        assert_eq!(Color::parse_hex("#FFF"), None);
        assert_eq!(Color::parse_hex("#GGGGGG"), None);
    }

    #[test]
    fn test_alpha8_rounds() {
        assert_eq!(Color::WHITE.with_alpha(0.3).alpha8(), 77);
        assert_eq!(Color::WHITE.with_alpha(1.5).alpha8(), 255);
        assert_eq!(Color::WHITE.with_alpha(-0.2).alpha8(), 0);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert_eq!(mid.to_rgba8(), [128, 128, 128, 255]);
    }
}
