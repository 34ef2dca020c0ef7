//! ledscene models addressable LED strip installations (WS281x / SK6812 RGBW).
//!
//! # Model overview
//!
//! 1. **Color**: premultiplied RGBW plus opacity ([`Color`]).
//! 2. **Animate**: keyframes driven by a sensor ([`Animation`], [`Sensor`]).
//! 3. **Compose**: images placed as layers on the `[0, 1]` strip axis, composited over black
//!    ([`Scene`]).
//! 4. **Render**: sample a scene at every LED center ([`render_frame`]) and pack WS281x words.
//!
//! Screens have no white LED, so previews convert colors with [`blend_white`] /
//! [`to_css_rgba`], and clock-driven animations can be exported as declarative timelines
//! ([`css_color_timeline`]).
//!
//! Sampling never reads the clock on its own: every entry point takes a [`SampleCtx`], so a
//! frame is a pure function of its inputs.
#![forbid(unsafe_code)]

mod animation;
mod color;
mod config;
mod device;
mod export;
mod foundation;
mod scene;

pub use animation::anim::Animation;
pub use animation::keyframe::{Keyframe, Lerp, blend, validate_keys};
pub use animation::sensor::{SampleCtx, Sensor};
pub use color::blend::{
    BlendedColor, blend_white, blend_white_lossy, mix_white_and_alpha, mix_white_to_alpha,
    mix_white_to_channel, to_css_rgba,
};
pub use color::rgbwa::Color;
pub use config::installation::Installation;
pub use device::render::{Frame, RenderThreading, render_frame, render_frames};
pub use device::strip::{Device, StripType};
pub use export::timeline::{
    Fill, Timeline, TimelineKeyframe, Timing, css_color_timeline, export_timeline,
};
pub use foundation::error::{LedError, LedResult};
pub use foundation::number::JsNumber;
pub use scene::model::{Dimension, Image, Layer, Scene};
