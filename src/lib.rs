//! hcl-gamut converts points of the cylindrical HCL (hue, chroma, lightness)
//! color space to displayable sRGB, and samples two dimensional slices of the
//! space into a buffer of colors for display.
//!
//! ```rust
//! use hcl_gamut::{convert, GamutSampler, ViewMode};
//!
//! let color = convert(120.0, 1.0, 0.5);
//! assert_eq!(color.to_hex(), "#406639");
//!
//! let mut sampler = GamutSampler::new();
//! sampler.set_mode(ViewMode::Clh);
//! sampler.set_fixed_value(240.0);
//! let picked = sampler.lookup(10.0, 10.0, 420.0, 420.0);
//! assert!(picked.is_some());
//! ```

#![deny(missing_docs)]

mod color;
mod config;
mod convert;
mod error;
mod math;
pub mod models;
mod sampler;

pub use color::{format_hex, Color, Component, Components, Flags};
pub use config::{SamplerConfig, DEFAULT_RESOLUTION};
pub use convert::convert;
pub use error::Error;
pub use sampler::{GamutSampler, SamplerEvent, ViewMode};
