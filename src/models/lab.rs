//! Model for the rectangular Lab-like form, with lightness scaled to `[0, 1]`.

use crate::{
    color::Component,
    models::xyz::{Xyz, REFERENCE_WHITE},
};

const DELTA: Component = 6.0 / 29.0;

/// Inverse of the CIE nonlinear response function.
fn finv(t: Component) -> Component {
    if t > DELTA {
        t * t * t
    } else {
        3.0 * DELTA * DELTA * (t - 4.0 / 29.0)
    }
}

hcl_gamut_macros::gen_model! {
    /// The model for a color in the rectangular orthogonal form.
    pub struct Lab {
        /// The lightness component.
        lightness: Component,
        /// The a (green-red) component.
        a: Component,
        /// The b (blue-yellow) component.
        b: Component,
    }
}

impl Lab {
    /// Convert to CIE-XYZ relative to [`REFERENCE_WHITE`].
    pub fn to_xyz(&self) -> Xyz {
        let f1 = (self.lightness + 0.16) / 1.16;
        let f0 = f1 + self.a / 5.0;
        let f2 = f1 - self.b / 2.0;

        Xyz::new(
            REFERENCE_WHITE.0 * finv(f0),
            REFERENCE_WHITE.1 * finv(f1),
            REFERENCE_WHITE.2 * finv(f2),
        )
    }
}
