use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::sensor::SampleCtx,
    device::render::{Frame, render_frame},
    device::strip::Device,
    foundation::error::{LedError, LedResult},
    scene::model::Scene,
};

/// Every strip and scene of one controller, as stored on disk.
///
/// Devices reference scenes by key, so one scene can drive several strips.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Installation {
    #[serde(default)]
    pub devices: BTreeMap<String, Device>,
    #[serde(default)]
    pub scenes: BTreeMap<String, Scene>,
}

impl Installation {
    /// Parse an installation from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> LedResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| LedError::serde(format!("parse installation JSON: {e}")))
    }

    /// Parse an installation from a JSON string.
    pub fn from_json_str(s: &str) -> LedResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| LedError::serde(format!("parse installation JSON: {e}")))
    }

    /// Parse an installation from a JSON file on disk.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> LedResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open installation JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> LedResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| LedError::serde(e.to_string()))
    }

    pub fn validate(&self) -> LedResult<()> {
        for (key, device) in &self.devices {
            device.validate()?;
            if let Some(scene) = &device.scene
                && !self.scenes.contains_key(scene)
            {
                return Err(LedError::validation(format!(
                    "device '{key}' references unknown scene '{scene}'"
                )));
            }
        }
        for scene in self.scenes.values() {
            scene.validate()?;
        }
        Ok(())
    }

    /// Point `device` at `scene`, or clear its scene with `None`.
    pub fn set_scene(&mut self, device: &str, scene: Option<&str>) -> LedResult<&Device> {
        if let Some(scene) = scene
            && !self.scenes.contains_key(scene)
        {
            return Err(LedError::validation(format!("unknown scene '{scene}'")));
        }
        let entry = self
            .devices
            .get_mut(device)
            .ok_or_else(|| LedError::validation(format!("unknown device '{device}'")))?;

        entry.scene = scene.map(str::to_owned);
        tracing::debug!(device, scene = ?entry.scene, "scene assigned");
        Ok(&*entry)
    }

    /// The scene currently assigned to `device`, if any.
    pub fn scene_for(&self, device: &str) -> LedResult<Option<&Scene>> {
        let entry = self
            .devices
            .get(device)
            .ok_or_else(|| LedError::validation(format!("unknown device '{device}'")))?;
        match &entry.scene {
            None => Ok(None),
            Some(key) => self.scenes.get(key).map(Some).ok_or_else(|| {
                LedError::validation(format!(
                    "device '{device}' references unknown scene '{key}'"
                ))
            }),
        }
    }

    /// Render one frame for `device`; a device without a scene is dark.
    #[tracing::instrument(skip(self))]
    pub fn render_device(&self, device: &str, ctx: SampleCtx) -> LedResult<Frame> {
        let led_count = self
            .devices
            .get(device)
            .map(|d| d.led_count)
            .ok_or_else(|| LedError::validation(format!("unknown device '{device}'")))?;

        match self.scene_for(device)? {
            Some(scene) => render_frame(scene, led_count, ctx),
            None => Ok(Frame::blank(led_count, ctx)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/installation.rs"]
mod tests;
