//! Configuration of the grid a [`GamutSampler`](crate::GamutSampler) renders.

use serde::Deserialize;

use crate::{color::Component, Error};

/// Side length of the sample grid used when nothing else is configured.
pub const DEFAULT_RESOLUTION: usize = 210;

/// Size of the sample grid and the range each free axis covers across it.
/// Missing fields take their [`Default`] value when deserialized.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    /// Number of cells along each side of the square sample grid.
    pub resolution: usize,
    /// Hue covered by a free hue axis, in degrees.
    pub hue_span: Component,
    /// Chroma covered by a free chroma axis.
    pub chroma_span: Component,
    /// Lightness covered by a free lightness axis. This reaches past 1 so the
    /// top of the slice shows where light colors leave the gamut.
    pub lightness_span: Component,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            hue_span: 360.0,
            chroma_span: 5.0,
            lightness_span: 1.7,
        }
    }
}

impl SamplerConfig {
    /// Check that the grid has at least one cell, that its cells can be
    /// counted, and every span is a positive finite number.
    pub fn validate(&self) -> Result<(), Error> {
        if self.resolution == 0 {
            return Err(Error::ZeroResolution);
        }

        if self.resolution.checked_mul(self.resolution).is_none() {
            return Err(Error::ResolutionTooLarge(self.resolution));
        }

        for (axis, value) in [
            ("hue", self.hue_span),
            ("chroma", self.chroma_span),
            ("lightness", self.lightness_span),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidSpan { axis, value });
            }
        }

        Ok(())
    }
}
