use crate::foundation::error::{LedError, LedResult};

/// LED chipset family, named after the `rpi_ws281x` strip constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StripType {
    /// WS2811 wired RGB.
    Ws2811Rgb,
    /// WS2812 / WS2812B (GRB on the wire).
    Ws2812,
    /// SK6812 with a separate white LED.
    #[default]
    Sk6812Rgbw,
    /// SK6812 warm-white variant.
    Sk6812W,
}

impl StripType {
    /// Whether the chipset drives a dedicated white LED.
    pub fn has_white(self) -> bool {
        matches!(self, Self::Sk6812Rgbw | Self::Sk6812W)
    }
}

/// One physical LED strip.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Device {
    pub name: String,
    pub led_count: u32,
    pub gpio_pin: u8,
    #[serde(default)]
    pub strip_type: StripType,
    /// Key into the installation's scene table.
    #[serde(default)]
    pub scene: Option<String>,
}

impl Device {
    pub fn validate(&self) -> LedResult<()> {
        if self.led_count == 0 {
            return Err(LedError::validation(format!(
                "device '{}' must have at least one LED",
                self.name
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/device/strip.rs"]
mod tests;
