//! Model for the cylindrical hue, chroma, lightness form.

use std::f64::consts::TAU;

use crate::{color::Component, models::Lab};

hcl_gamut_macros::gen_model! {
    /// A point in the cylindrical HCL space.
    pub struct Hcl {
        /// Hue in degrees. Values outside of `[0, 360)` are not wrapped.
        hue: Component,
        /// Distance from the achromatic axis.
        chroma: Component,
        /// Lightness, nominally in `[0, 1]`.
        lightness: Component,
    }
}

impl Hcl {
    /// Convert this cylindrical model into its rectangular Lab form.
    ///
    /// The parameterization is tuned so that lightness in `[0, 1]` and small
    /// positive chroma values map to perceptually spaced points.
    pub fn to_lab(&self) -> Lab {
        let turns = self.hue / 360.0;
        let lightness = self.lightness * 0.61 + 0.09;
        let angle = TAU / 6.0 - turns * TAU;
        let radius = (self.lightness * 0.311 + 0.125) * self.chroma;

        Lab::new(lightness, angle.sin() * radius, angle.cos() * radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn zero_chroma_has_no_opponent_axes() {
        for hue in [0.0, 45.0, 180.0, 359.0] {
            let lab = Hcl::new(hue, 0.0, 0.5).to_lab();
            assert_component_eq!(lab.lightness, 0.395);
            assert_eq!(lab.a, 0.0);
            assert_eq!(lab.b, 0.0);
        }
    }

    #[test]
    fn hue_rotates_clockwise_from_sixty_degrees() {
        // At hue 0 the angle is a sixth of a turn.
        let lab = Hcl::new(0.0, 1.0, 0.0).to_lab();
        assert_component_eq!(lab.a, (TAU / 6.0).sin() * 0.125);
        assert_component_eq!(lab.b, (TAU / 6.0).cos() * 0.125);

        // A quarter turn of hue moves the angle back by a quarter turn.
        let lab = Hcl::new(90.0, 1.0, 0.0).to_lab();
        assert_component_eq!(lab.a, (-TAU / 12.0).sin() * 0.125);
        assert_component_eq!(lab.b, (-TAU / 12.0).cos() * 0.125);
    }

    #[test]
    fn hue_is_periodic() {
        let a = Hcl::new(30.0, 2.0, 0.7).to_lab();
        let b = Hcl::new(390.0, 2.0, 0.7).to_lab();
        assert_component_eq!(a.a, b.a);
        assert_component_eq!(a.b, b.b);
    }

    #[test]
    fn radius_grows_with_lightness() {
        let radius = |lightness| {
            let lab = Hcl::new(10.0, 1.0, lightness).to_lab();
            (lab.a * lab.a + lab.b * lab.b).sqrt()
        };
        assert_component_eq!(radius(0.0), 0.125);
        assert_component_eq!(radius(1.0), 0.436);
    }
}
