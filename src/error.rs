use thiserror::Error;

use crate::color::Component;

/// Errors from configuring a sampler or parsing its inputs. Conversions and
/// lookups never fail.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// The sample grid has no cells.
    #[error("Sampler resolution must be at least 1")]
    ZeroResolution,
    /// The sample grid has more cells than can be addressed.
    #[error("Sampler resolution {0} is too large")]
    ResolutionTooLarge(usize),
    /// An axis span is not a positive finite number.
    #[error("The {axis} span must be a positive finite number (got {value})")]
    InvalidSpan {
        /// Name of the axis.
        axis: &'static str,
        /// The rejected span.
        value: Component,
    },
    /// The name does not match any [`ViewMode`](crate::ViewMode).
    #[error("Unknown view mode {0:?} (expected one of hlc, clh, hcl)")]
    UnknownViewMode(String),
    /// The string is not a `#rrggbb` color.
    #[error("{0:?} is not a #rrggbb color")]
    InvalidHex(String),
}
