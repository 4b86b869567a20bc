//! Models are structs that represent a color in each of the coordinate
//! spaces the HCL to sRGB conversion passes through. Every conversion step is
//! a method (or `From` implementation) on the model it starts from.
//!
//! ```rust
//! use hcl_gamut::models::{Hcl, SrgbLinear};
//! let linear = SrgbLinear::from(  // linear light sRGB.
//!     Hcl::new(120.0, 1.0, 0.5)   // create color in hcl.
//!         .to_lab()               // convert to lab.
//!         .to_xyz(),              // convert to xyz.
//! );
//! let flags = linear.gamut_flags();
//! let color = linear.to_gamma_encoded().quantize(flags);
//! assert!(color.is_valid());
//! ```

mod hcl;
mod lab;
mod rgb;
mod xyz;

pub use hcl::*;
pub use lab::*;
pub use rgb::*;
pub use xyz::*;
