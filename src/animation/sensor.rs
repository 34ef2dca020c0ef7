use std::time::{SystemTime, UNIX_EPOCH};

/// Input for one sampling pass.
///
/// Time is passed in rather than read inside the model so a frame is a pure function of
/// `(installation, ctx)`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SampleCtx {
    /// Wall-clock time in seconds since the UNIX epoch.
    pub now: f64,
}

impl SampleCtx {
    /// Context at an explicit time.
    pub fn at(now: f64) -> Self {
        Self { now }
    }

    /// Context at the current system time.
    pub fn wall_clock() -> Self {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Self { now }
    }
}

/// Source of an animation's position.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Sensor {
    /// Seconds elapsed since `reference`.
    Clock {
        /// Start time, seconds since the UNIX epoch.
        reference: f64,
        /// Playback length of one iteration in seconds.
        #[serde(default)]
        duration: f64,
    },
}

impl Sensor {
    /// Clock sensor started at `reference`.
    pub fn clock(reference: f64, duration: f64) -> Self {
        Self::Clock {
            reference,
            duration,
        }
    }

    /// Current reading.
    pub fn value(&self, ctx: SampleCtx) -> f64 {
        match self {
            Self::Clock { reference, .. } => ctx.now - reference,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sensor.rs"]
mod tests;
