use crate::{
    animation::anim::Animation,
    animation::keyframe::{Keyframe, blend, validate_keys},
    animation::sensor::SampleCtx,
    color::rgbwa::Color,
    foundation::error::{LedError, LedResult},
};

/// A scalar layer property (offset or size) on the `[0, 1]` strip axis.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Dimension {
    /// Fixed value.
    Static {
        /// The value.
        value: f64,
    },
    /// Keyframed value driven by a sensor.
    Animated(Animation<f64>),
}

impl Dimension {
    /// Fixed-value dimension.
    pub fn fixed(value: f64) -> Self {
        Self::Static { value }
    }

    /// Current value.
    pub fn value(&self, ctx: SampleCtx) -> LedResult<f64> {
        match self {
            Self::Static { value } => Ok(*value),
            Self::Animated(anim) => anim.sample(ctx),
        }
    }

    pub fn validate(&self) -> LedResult<()> {
        match self {
            Self::Static { value } if !value.is_finite() => {
                Err(LedError::validation("static dimension must be finite"))
            }
            Self::Static { .. } => Ok(()),
            Self::Animated(anim) => anim.validate(),
        }
    }
}

/// What a layer paints across its extent.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Image {
    /// One solid color.
    Color(Color),
    /// A color changing over time.
    ColorAnimation(Animation<Color>),
    /// Colors blended across the layer, stop positions in `[0, 1]`.
    Gradient {
        /// Stops sorted by position.
        colorstops: Vec<Keyframe<Color>>,
    },
}

impl Image {
    /// Color at `pos` (`[0, 1]` within one layer tile).
    pub fn color_at(&self, pos: f64, ctx: SampleCtx) -> LedResult<Color> {
        match self {
            Self::Color(c) => Ok(*c),
            Self::ColorAnimation(anim) => anim.sample(ctx),
            Self::Gradient { colorstops } => blend(colorstops, pos),
        }
    }

    pub fn validate(&self) -> LedResult<()> {
        match self {
            Self::Color(c) if !c.is_finite() => {
                Err(LedError::validation("color channels must be finite"))
            }
            Self::Color(_) => Ok(()),
            Self::ColorAnimation(anim) => anim.validate(),
            Self::Gradient { colorstops } => validate_keys(colorstops),
        }
    }
}

/// An image placed on the strip.
///
/// The image tile starts at `left`, spans `size`, and is repeated `repeat` times. A
/// negative `size` mirrors the tile so it extends to the left of `left`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Layer {
    pub image: Image,
    /// Start of the first tile on the strip axis.
    #[serde(default = "default_left")]
    pub left: Dimension,
    /// Extent of one tile; must not be zero, negative mirrors the tile.
    #[serde(default = "default_size")]
    pub size: Dimension,
    /// Number of tiles, fractional allowed. Beyond the last one the layer is transparent.
    #[serde(default = "default_repeat")]
    pub repeat: f64,
}

fn default_left() -> Dimension {
    Dimension::fixed(0.0)
}

fn default_size() -> Dimension {
    Dimension::fixed(1.0)
}

fn default_repeat() -> f64 {
    1.0
}

impl Layer {
    /// Layer covering the whole strip once.
    pub fn full(image: Image) -> Self {
        Self {
            image,
            left: default_left(),
            size: default_size(),
            repeat: default_repeat(),
        }
    }

    /// Color at strip position `pos`; transparent beyond the last repetition.
    pub fn color_at(&self, pos: f64, ctx: SampleCtx) -> LedResult<Color> {
        let left = self.left.value(ctx)?;
        let size = self.size.value(ctx)?;
        if size == 0.0 || !size.is_finite() {
            return Err(LedError::evaluation(format!(
                "layer size must be finite and non-zero, got {size}"
            )));
        }

        let offset = pos - left;
        if offset / size <= self.repeat {
            // Remainder takes the sign of `size`, so a mirrored tile still maps into [0, 1).
            let within = offset - size * (offset / size).floor();
            self.image.color_at(within / size, ctx)
        } else {
            Ok(Color::transparent())
        }
    }

    pub fn validate(&self) -> LedResult<()> {
        if self.repeat.is_nan() || self.repeat < 0.0 {
            return Err(LedError::validation("layer repeat must be >= 0"));
        }
        if matches!(self.size, Dimension::Static { value } if value == 0.0) {
            return Err(LedError::validation("layer size must be non-zero"));
        }
        self.image.validate()?;
        self.left.validate()?;
        self.size.validate()
    }
}

/// Ordered stack of layers, bottom first.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    pub name: String,
    #[serde(default)]
    pub layers: Vec<Layer>,
}

impl Scene {
    /// Composite every layer at `pos` over opaque black.
    ///
    /// Colors are premultiplied, so "over" is `acc * (1 - src.opacity) + src`.
    pub fn color_at(&self, pos: f64, ctx: SampleCtx) -> LedResult<Color> {
        let mut acc = Color::opaque_black();
        for layer in &self.layers {
            let src = layer.color_at(pos, ctx)?;
            acc = acc * (1.0 - src.opacity) + src;
        }
        Ok(acc)
    }

    /// Validate every layer; errors name the scene and the layer index.
    pub fn validate(&self) -> LedResult<()> {
        for (idx, layer) in self.layers.iter().enumerate() {
            layer.validate().map_err(|err| {
                LedError::validation(format!("scene '{}' layer {idx}: {err}", self.name))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
