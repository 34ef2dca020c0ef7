//! Declarative playback descriptions for clock-driven animations.
//!
//! A browser preview can hand a [`Timeline`] straight to a Web Animations style
//! `element.animate(keyframes, timing)` call instead of sampling the model every frame.

use crate::{
    animation::anim::Animation,
    animation::sensor::{SampleCtx, Sensor},
    color::blend::blend_white_lossy,
    color::rgbwa::Color,
    foundation::error::LedResult,
};

/// One exported keyframe.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimelineKeyframe<V> {
    /// Fraction of one iteration, `[0, 1]`.
    pub offset: f64,
    pub value: V,
}

/// How the timeline behaves outside its active interval.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Fill {
    /// Hold the first keyframe before start and the last one after the end.
    #[default]
    Both,
}

/// Playback schedule for a [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Timing {
    /// One iteration, in milliseconds.
    pub duration_ms: f64,
    /// Iteration count; infinite repeats serialize as `"Infinity"`.
    #[serde(serialize_with = "serialize_iterations")]
    pub iterations: f64,
    pub fill: Fill,
    /// Negative when the animation is already running.
    pub delay_ms: f64,
}

fn serialize_iterations<S>(v: &f64, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    // JSON has no infinity literal; the Web Animations API accepts the string form.
    if v.is_infinite() {
        s.serialize_str("Infinity")
    } else {
        s.serialize_f64(*v)
    }
}

/// Keyframes plus timing, ready for a Web Animations style `animate` call.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Timeline<V> {
    pub keyframes: Vec<TimelineKeyframe<V>>,
    pub timing: Timing,
}

/// Describe `anim` as a keyframe list plus timing, mapping each value through `transform`.
///
/// Only clock-driven animations have a fixed schedule; anything else yields `None`.
pub fn export_timeline<T, V, F>(
    anim: &Animation<T>,
    ctx: SampleCtx,
    mut transform: F,
) -> LedResult<Option<Timeline<V>>>
where
    F: FnMut(&T) -> LedResult<V>,
{
    #[allow(irrefutable_let_patterns)]
    let Sensor::Clock {
        reference,
        duration,
    } = anim.sensor
    else {
        return Ok(None);
    };

    let keyframes = anim
        .keyframes
        .iter()
        .map(|k| {
            Ok(TimelineKeyframe {
                offset: k.position,
                value: transform(&k.value)?,
            })
        })
        .collect::<LedResult<Vec<_>>>()?;

    Ok(Some(Timeline {
        keyframes,
        timing: Timing {
            duration_ms: duration * 1000.0,
            iterations: anim.repeat,
            fill: Fill::Both,
            delay_ms: (reference - ctx.now) * 1000.0,
        },
    }))
}

/// [`export_timeline`] with colors rendered as CSS `rgba()` strings.
///
/// Fully transparent keyframes (fade in/out) become `rgba(0, 0, 0, 0)`.
pub fn css_color_timeline(
    anim: &Animation<Color>,
    ctx: SampleCtx,
) -> LedResult<Option<Timeline<String>>> {
    export_timeline(anim, ctx, |c| Ok(blend_white_lossy(c).to_string()))
}

#[cfg(test)]
#[path = "../../tests/unit/export/timeline.rs"]
mod tests;
