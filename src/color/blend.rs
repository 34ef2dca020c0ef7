//! White-channel blending for on-screen previews.
//!
//! Screens have no white LED, so an RGBW [`Color`] is shown as a straight-alpha CSS
//! `rgba()` value: the white amount is pre-mixed into every channel and into the alpha,
//! and the mixed channels are then divided by the mixed alpha.

use std::fmt;

use crate::{
    color::rgbwa::Color,
    foundation::error::{LedError, LedResult},
    foundation::number::JsNumber,
};

/// Straight-alpha RGBA produced by [`blend_white`].
///
/// Channels are not rounded; `Display` renders `rgba(r, g, b, a)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlendedColor {
    /// Red, `[0, 255]` for in-range input.
    pub r: f64,
    /// Green, `[0, 255]` for in-range input.
    pub g: f64,
    /// Blue, `[0, 255]` for in-range input.
    pub b: f64,
    /// Alpha, `[0, 1]` for in-range input.
    pub a: f64,
}

impl BlendedColor {
    /// Fully transparent black.
    pub fn transparent() -> Self {
        Self {
            r: 0.0,
            g: 0.0,
            b: 0.0,
            a: 0.0,
        }
    }
}

impl fmt::Display for BlendedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            JsNumber(self.r),
            JsNumber(self.g),
            JsNumber(self.b),
            JsNumber(self.a)
        )
    }
}

/// Mix `white` into one channel: `white/2 + channel * (1 - white/255/2)`.
pub fn mix_white_to_channel(channel: f64, white: f64) -> f64 {
    white / 2.0 + channel * (1.0 - white / 255.0 / 2.0)
}

/// Mix `white` into the alpha: `white/255/2 + alpha * (1 - white/255/2)`.
pub fn mix_white_to_alpha(alpha: f64, white: f64) -> f64 {
    white / 255.0 / 2.0 + alpha * (1.0 - white / 255.0 / 2.0)
}

/// White-mixed channel divided by the white-mixed alpha.
///
/// No guard here: a zero mixed alpha yields `inf`/`NaN`. [`blend_white`] checks first.
pub fn mix_white_and_alpha(channel: f64, white: f64, alpha: f64) -> f64 {
    mix_white_to_channel(channel, white) / mix_white_to_alpha(alpha, white)
}

/// Convert an RGBW color to straight-alpha RGBA.
///
/// Out-of-range inputs pass through to out-of-range outputs. An effective alpha of zero
/// (e.g. `white == 0 && opacity == 0`), or any output field that is not finite (a
/// vanishing alpha or an infinite channel), is rejected with [`LedError::InvalidInput`]
/// instead of emitting `NaN`/`Infinity`.
pub fn blend_white(color: &Color) -> LedResult<BlendedColor> {
    let a = mix_white_to_alpha(color.opacity, color.white);
    if a == 0.0 {
        return Err(LedError::invalid_input(format!(
            "effective alpha is 0 (white={}, opacity={}); color has no visible rgba form",
            color.white, color.opacity
        )));
    }

    let blended = BlendedColor {
        r: mix_white_and_alpha(color.red, color.white, color.opacity),
        g: mix_white_and_alpha(color.green, color.white, color.opacity),
        b: mix_white_and_alpha(color.blue, color.white, color.opacity),
        a,
    };
    if ![blended.r, blended.g, blended.b, blended.a]
        .iter()
        .all(|v| v.is_finite())
    {
        return Err(LedError::invalid_input(format!(
            "blending {color:?} gives non-finite {blended:?}"
        )));
    }
    Ok(blended)
}

/// Like [`blend_white`], but maps rejected input to transparent black.
pub fn blend_white_lossy(color: &Color) -> BlendedColor {
    match blend_white(color) {
        Ok(blended) => blended,
        Err(err) => {
            tracing::debug!(%err, "falling back to transparent");
            BlendedColor::transparent()
        }
    }
}

/// CSS `rgba(r, g, b, a)` string for `color`.
pub fn to_css_rgba(color: &Color) -> LedResult<String> {
    Ok(blend_white(color)?.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/color/blend.rs"]
mod tests;
