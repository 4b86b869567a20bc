//! Model a color in the CIE-XYZ color space.

use crate::{
    color::{Component, Components},
    math::{transform, transform_3x3, Transform},
    models::SrgbLinear,
};

/// The X, Y and Z tristimulus values of the reference white.
///
/// These fix the illuminant of the Lab-like space. Colors produced by the
/// sampler depend on these exact values.
pub const REFERENCE_WHITE: Components = Components(0.96421, 1.0, 0.82519);

hcl_gamut_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl From<Xyz> for SrgbLinear {
    fn from(value: Xyz) -> Self {
        #[rustfmt::skip]
        const FROM_XYZ: Transform = transform_3x3(
             3.2406, -0.9689,  0.0557,
            -1.5372,  1.8758, -0.2040,
            -0.4986,  0.0415,  1.0570,
        );

        transform(&FROM_XYZ, value.to_components()).into()
    }
}
