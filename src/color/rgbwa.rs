use std::ops::{Add, Mul};

/// RGBW color with opacity, as driven onto an addressable strip.
///
/// Channels are in `[0, 255]` and `opacity` in `[0, 1]`. Values live in premultiplied
/// space: pure red at 50% opacity is `(127.5, 0, 0, 0, 0.5)`, not `(255, 0, 0, 0, 0.5)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    /// Red channel.
    pub red: f64,
    /// Green channel.
    pub green: f64,
    /// Blue channel.
    pub blue: f64,
    /// Dedicated white LED channel.
    #[serde(default)]
    pub white: f64,
    /// Source alpha before white mixing.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

fn default_opacity() -> f64 {
    1.0
}

impl Color {
    /// Opaque color with no white component.
    pub fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgbw(red, green, blue, 0.0)
    }

    /// Opaque color with an explicit white component.
    pub fn rgbw(red: f64, green: f64, blue: f64, white: f64) -> Self {
        Self {
            red,
            green,
            blue,
            white,
            opacity: 1.0,
        }
    }

    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            red: 0.0,
            green: 0.0,
            blue: 0.0,
            white: 0.0,
            opacity: 0.0,
        }
    }

    /// Opaque black; the backdrop every scene is composited onto.
    pub fn opaque_black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Pack into a WS281x pixel word: `W << 24 | R << 16 | G << 8 | B`.
    pub fn to_ws281x(self) -> u32 {
        fn channel(v: f64) -> u32 {
            // Truncate like an integer cast, then keep the byte in its lane.
            if v.is_nan() {
                return 0;
            }
            v.trunc().clamp(0.0, 255.0) as u32
        }

        channel(self.white) << 24
            | channel(self.red) << 16
            | channel(self.green) << 8
            | channel(self.blue)
    }

    pub(crate) fn is_finite(self) -> bool {
        [self.red, self.green, self.blue, self.white, self.opacity]
            .iter()
            .all(|v| v.is_finite())
    }
}

impl Mul<f64> for Color {
    type Output = Color;

    fn mul(self, scale: f64) -> Color {
        Color {
            red: self.red * scale,
            green: self.green * scale,
            blue: self.blue * scale,
            white: self.white * scale,
            opacity: self.opacity * scale,
        }
    }
}

impl Mul<Color> for f64 {
    type Output = Color;

    fn mul(self, color: Color) -> Color {
        color * self
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, other: Color) -> Color {
        Color {
            red: self.red + other.red,
            green: self.green + other.green,
            blue: self.blue + other.blue,
            white: self.white + other.white,
            opacity: self.opacity + other.opacity,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/rgbwa.rs"]
mod tests;
