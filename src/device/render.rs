use rayon::prelude::*;

use crate::{
    animation::sensor::SampleCtx,
    color::rgbwa::Color,
    device::strip::StripType,
    foundation::error::{LedError, LedResult},
    scene::model::Scene,
};

/// Colors for every LED of a strip at one instant, index 0 first.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Frame {
    /// Sample time, seconds since the UNIX epoch.
    pub at: f64,
    /// One premultiplied color per LED.
    pub pixels: Vec<Color>,
}

impl Frame {
    /// All-transparent frame, as shown by a device with no scene.
    pub fn blank(led_count: u32, ctx: SampleCtx) -> Self {
        Self {
            at: ctx.now,
            pixels: vec![Color::transparent(); led_count as usize],
        }
    }

    /// Pack every pixel into a WS281x word; RGB-only strips get no white byte.
    pub fn to_ws281x(&self, strip: StripType) -> Vec<u32> {
        self.pixels
            .iter()
            .map(|c| {
                let word = c.to_ws281x();
                if strip.has_white() {
                    word
                } else {
                    word & 0x00ff_ffff
                }
            })
            .collect()
    }
}

/// Sample `scene` at the center of each LED.
#[tracing::instrument(skip(scene), fields(scene = %scene.name))]
pub fn render_frame(scene: &Scene, led_count: u32, ctx: SampleCtx) -> LedResult<Frame> {
    if led_count == 0 {
        return Err(LedError::validation("led_count must be > 0"));
    }

    let n = f64::from(led_count);
    let pixels = (0..led_count)
        .map(|i| scene.color_at((f64::from(i) + 0.5) / n, ctx))
        .collect::<LedResult<Vec<_>>>()?;
    Ok(Frame { at: ctx.now, pixels })
}

/// Threading controls for multi-frame rendering.
#[derive(Clone, Debug, Default)]
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

/// Render one frame per sample time, in the order given.
pub fn render_frames(
    scene: &Scene,
    led_count: u32,
    times: &[SampleCtx],
    threading: &RenderThreading,
) -> LedResult<Vec<Frame>> {
    scene.validate()?;

    if !threading.parallel {
        return times
            .iter()
            .map(|ctx| render_frame(scene, led_count, *ctx))
            .collect();
    }

    let pool = build_thread_pool(threading.threads)?;
    pool.install(|| {
        times
            .par_iter()
            .map(|ctx| render_frame(scene, led_count, *ctx))
            .collect()
    })
}

fn build_thread_pool(threads: Option<usize>) -> LedResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(LedError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| LedError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/device/render.rs"]
mod tests;
