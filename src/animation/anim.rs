use crate::{
    animation::keyframe::{Keyframe, Lerp, blend, validate_keys},
    animation::sensor::{SampleCtx, Sensor},
    foundation::error::{LedError, LedResult},
};

/// Keyframed value driven by a sensor.
///
/// The sensor reading is the position on the keyframe spectrum. The keyframe span repeats
/// `repeat` times and then holds at the end of the span.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Animation<T> {
    /// Stops sorted by position.
    pub keyframes: Vec<Keyframe<T>>,
    /// Number of iterations; `inf` repeats forever.
    #[serde(default = "default_repeat")]
    pub repeat: f64,
    /// Position source.
    pub sensor: Sensor,
}

fn default_repeat() -> f64 {
    1.0
}

impl<T> Animation<T>
where
    T: Lerp + Clone,
{
    /// Construct an animation.
    pub fn new(keyframes: Vec<Keyframe<T>>, repeat: f64, sensor: Sensor) -> Self {
        Self {
            keyframes,
            repeat,
            sensor,
        }
    }

    /// Distance between first and last keyframe.
    pub fn length(&self) -> f64 {
        match (self.keyframes.first(), self.keyframes.last()) {
            (Some(first), Some(last)) => last.position - first.position,
            _ => 0.0,
        }
    }

    /// Keys must be non-empty, finite and sorted; `repeat` must be `>= 0` (infinity allowed).
    pub fn validate(&self) -> LedResult<()> {
        validate_keys(&self.keyframes)?;
        if self.repeat.is_nan() || self.repeat < 0.0 {
            return Err(LedError::animation("repeat must be >= 0"));
        }
        Ok(())
    }

    /// Value at the sensor's current reading.
    pub fn sample(&self, ctx: SampleCtx) -> LedResult<T> {
        let pos = self.sensor.value(ctx);
        let length = self.length();
        if length <= 0.0 {
            return self
                .keyframes
                .first()
                .map(|k| k.value.clone())
                .ok_or_else(|| LedError::animation("animation has no keyframes"));
        }

        let at = if pos <= self.repeat * length {
            pos.rem_euclid(length)
        } else {
            length
        };
        blend(&self.keyframes, at)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
