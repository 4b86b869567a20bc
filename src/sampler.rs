//! Sampling of a two dimensional slice through the HCL color space.
//!
//! Two of hue, chroma and lightness vary across the grid while the third is
//! held at a fixed value. The resulting colors are kept in a square buffer
//! that a display layer can rasterize and query by pixel position.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::{
    color::{Color, Component},
    config::SamplerConfig,
    math::fuzzy_eq,
    models::Hcl,
    Error,
};

/// Which two axes of the HCL space vary across the sample grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Hue varies along x and lightness along y. Chroma is fixed.
    #[default]
    Hlc,
    /// Chroma varies along x and lightness along y. Hue is fixed.
    Clh,
    /// Hue varies along x and chroma along y. Lightness is fixed.
    Hcl,
}

impl ViewMode {
    /// Return the HCL coordinates of the grid cell at `x`, `y` with the fixed
    /// axis set to `fixed`.
    pub fn hcl_at(&self, config: &SamplerConfig, x: usize, y: usize, fixed: Component) -> Hcl {
        let n = config.resolution as Component;
        let u = x as Component / n;
        let v = y as Component / n;

        match self {
            Self::Hlc => Hcl::new(u * config.hue_span, fixed, v * config.lightness_span),
            Self::Clh => Hcl::new(fixed, u * config.chroma_span, v * config.lightness_span),
            Self::Hcl => Hcl::new(u * config.hue_span, v * config.chroma_span, fixed),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::Hlc => "hlc",
            Self::Clh => "clh",
            Self::Hcl => "hcl",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ViewMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hlc" => Ok(Self::Hlc),
            "clh" => Ok(Self::Clh),
            "hcl" => Ok(Self::Hcl),
            _ => Err(Error::UnknownViewMode(s.to_owned())),
        }
    }
}

/// Notifications sent to the observers of a [`GamutSampler`].
#[derive(Clone, Debug, PartialEq)]
pub enum SamplerEvent {
    /// The view mode was changed.
    ModeChanged(ViewMode),
    /// The value of the fixed axis was changed.
    ValueChanged(Component),
    /// The buffer was filled with a new set of colors.
    ColorsUpdated {
        /// The generation of the new buffer.
        generation: u64,
    },
}

type Observer = Box<dyn FnMut(&SamplerEvent)>;

/// Owns the buffer of colors for one slice of the HCL color space and keeps
/// it up to date with the view mode and fixed value.
pub struct GamutSampler {
    config: SamplerConfig,
    mode: ViewMode,
    value: Component,
    pixels: Vec<Color>,
    generation: u64,
    observers: Vec<Observer>,
}

impl GamutSampler {
    /// Create a sampler with the default configuration, in [`ViewMode::Hlc`]
    /// with a fixed value of 0.
    pub fn new() -> Self {
        Self::build(SamplerConfig::default(), ViewMode::default(), 0.0)
    }

    /// Create a sampler with the given configuration.
    pub fn with_config(config: SamplerConfig) -> Result<Self, Error> {
        Self::with_view(config, ViewMode::default(), 0.0)
    }

    /// Create a sampler with the given configuration that starts out showing
    /// `mode` at the fixed `value`. The buffer is only computed once.
    pub fn with_view(
        config: SamplerConfig,
        mode: ViewMode,
        value: Component,
    ) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self::build(config, mode, value))
    }

    fn build(config: SamplerConfig, mode: ViewMode, value: Component) -> Self {
        let mut sampler = Self {
            config,
            pixels: Vec::new(),
            mode,
            value,
            generation: 0,
            observers: Vec::new(),
        };
        sampler.regenerate();
        sampler
    }

    /// Register a function that is called for every [`SamplerEvent`].
    pub fn subscribe(&mut self, observer: impl FnMut(&SamplerEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, event: SamplerEvent) {
        for observer in &mut self.observers {
            observer(&event);
        }
    }

    /// Number of cells along each side of the grid.
    pub fn resolution(&self) -> usize {
        self.config.resolution
    }

    /// The configuration the sampler was created with.
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// The current view mode.
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    /// The current value of the fixed axis.
    pub fn fixed_value(&self) -> Component {
        self.value
    }

    /// Incremented each time the buffer is regenerated. Starts at 1 once the
    /// sampler is created.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The colors of the grid in row major order, cell `(x, y)` at index
    /// `y * resolution + x`. Out of gamut cells are included.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Return the stored color of a cell, whether it is valid or not.
    pub fn cell(&self, x: usize, y: usize) -> Option<Color> {
        let n = self.resolution();
        if x >= n || y >= n {
            return None;
        }
        self.pixels.get(y * n + x).copied()
    }

    /// Number of cells that are out of the sRGB gamut.
    pub fn invalid_count(&self) -> usize {
        self.pixels.iter().filter(|c| !c.is_valid()).count()
    }

    /// Change the view mode. Returns false if the mode was already set.
    pub fn set_mode(&mut self, mode: ViewMode) -> bool {
        if self.mode == mode {
            trace!(%mode, "view mode unchanged");
            return false;
        }

        debug!(from = %self.mode, to = %mode, "view mode changed");
        self.mode = mode;
        self.emit(SamplerEvent::ModeChanged(mode));
        self.regenerate();
        true
    }

    /// Change the value of the fixed axis. Values that are within rounding
    /// noise of the current value are ignored. Returns false if nothing
    /// changed.
    ///
    /// NOTE: NaN never equals the current value, so setting NaN always
    ///       regenerates and notifies, even when the value already is NaN.
    pub fn set_fixed_value(&mut self, value: Component) -> bool {
        if fuzzy_eq(self.value, value) {
            trace!(current = self.value, value, "fixed value unchanged");
            return false;
        }

        debug!(from = self.value, to = value, "fixed value changed");
        self.value = value;
        self.emit(SamplerEvent::ValueChanged(value));
        self.regenerate();
        true
    }

    /// Compute every cell of the grid for the current mode and fixed value.
    ///
    /// Cells are computed into a new buffer that replaces the old one once it
    /// is complete, so the buffer is never seen partially filled.
    pub fn regenerate(&mut self) {
        let n = self.resolution();
        let (mode, value, config) = (self.mode, self.value, &self.config);

        let pixels = (0..n * n)
            .into_par_iter()
            .map(|i| mode.hcl_at(config, i % n, i / n, value).to_color())
            .collect::<Vec<_>>();

        self.pixels = pixels;
        self.generation += 1;

        debug!(
            generation = self.generation,
            %mode,
            value,
            invalid = self.invalid_count(),
            "regenerated colors"
        );

        self.emit(SamplerEvent::ColorsUpdated {
            generation: self.generation,
        });
    }

    /// Return the color under a pixel of a viewport that displays the whole
    /// grid stretched to `width` by `height`.
    ///
    /// Returns `None` for positions outside of the grid, and for cells that
    /// are out of gamut.
    pub fn lookup(
        &self,
        x: Component,
        y: Component,
        width: Component,
        height: Component,
    ) -> Option<Color> {
        let n = self.resolution();
        let column = grid_index(x, width, n)?;
        let row = grid_index(y, height, n)?;
        self.cell(column, row).filter(Color::is_valid)
    }
}

impl Default for GamutSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GamutSampler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GamutSampler")
            .field("config", &self.config)
            .field("mode", &self.mode)
            .field("value", &self.value)
            .field("generation", &self.generation)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

/// Scale a position along a viewport of length `extent` to a grid index.
fn grid_index(position: Component, extent: Component, resolution: usize) -> Option<usize> {
    if !position.is_finite() || position < 0.0 || !extent.is_finite() || extent <= 0.0 {
        return None;
    }

    let index = (position / extent * resolution as Component).floor();
    if index < resolution as Component {
        Some(index as usize)
    } else {
        None
    }
}
