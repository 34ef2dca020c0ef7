use crate::{
    color::rgbwa::Color,
    foundation::error::{LedError, LedResult},
};

/// Values that can be interpolated between two stops.
pub trait Lerp: Sized {
    /// Weighted average `(1 - t) * a + t * b`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        (1.0 - t) * a + t * b
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        *a * (1.0 - t) + *b * t
    }
}

/// A stop on a continuous 1D spectrum (animation keyframe or gradient color stop).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    /// Location on the spectrum; seconds for animations, `[0, 1]` for gradients.
    pub position: f64,
    /// Value at `position`.
    pub value: T,
}

impl<T> Keyframe<T> {
    /// Construct a keyframe.
    pub fn new(position: f64, value: T) -> Self {
        Self { position, value }
    }
}

/// Check that `keys` is non-empty, finite and sorted by position.
pub fn validate_keys<T>(keys: &[Keyframe<T>]) -> LedResult<()> {
    if keys.is_empty() {
        return Err(LedError::animation("keyframes must not be empty"));
    }
    if keys.iter().any(|k| !k.position.is_finite()) {
        return Err(LedError::animation("keyframe positions must be finite"));
    }
    if !keys.windows(2).all(|w| w[0].position <= w[1].position) {
        return Err(LedError::animation(
            "keyframes must be sorted by position",
        ));
    }
    Ok(())
}

/// Sample `keys` at `position` with linear interpolation.
///
/// Positions before the first key hold the first value, positions at or past the last key
/// hold the last value. A NaN position is an error.
pub fn blend<T>(keys: &[Keyframe<T>], position: f64) -> LedResult<T>
where
    T: Lerp + Clone,
{
    let (first, last) = match (keys.first(), keys.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(LedError::animation("cannot blend empty keyframes")),
    };
    if position.is_nan() {
        return Err(LedError::animation("cannot blend at a NaN position"));
    }

    if position < first.position {
        return Ok(first.value.clone());
    }
    if position >= last.position {
        return Ok(last.value.clone());
    }

    // First key strictly after `position`; in 1..len for sorted, finite keys.
    let idx = keys.partition_point(|k| k.position <= position);
    let (Some(a), Some(b)) = (idx.checked_sub(1).and_then(|i| keys.get(i)), keys.get(idx))
    else {
        return Err(LedError::animation(format!(
            "keyframe positions are not sorted around {position}"
        )));
    };
    let span = b.position - a.position;
    if span <= 0.0 {
        return Ok(a.value.clone());
    }

    let t = (position - a.position) / span;
    Ok(T::lerp(&a.value, &b.value, t))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/keyframe.rs"]
mod tests;
