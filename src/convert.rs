//! Conversion from the HCL color space to displayable sRGB.
//!
//! The conversion chains the [`models`](crate::models): HCL is unrolled into
//! rectangular Lab, mapped through the inverse CIE response to XYZ, through a
//! fixed matrix to linear sRGB, then gamma encoded and scaled to 8 bits.
//!
//! Colors that land outside of the sRGB gamut are clipped and flagged; see
//! [`Color::is_valid`].
//!
//! NOTE: Non-finite input is passed through the arithmetic as is. A NaN
//!       channel compares as inside the gamut and quantizes to 0, infinite
//!       channels are flagged and clipped. A NaN fixed value on a
//!       [`GamutSampler`](crate::GamutSampler) never compares equal, so
//!       setting it again always regenerates.

use crate::{
    color::{Color, Component},
    models::{Hcl, SrgbLinear},
};

impl Hcl {
    /// Convert this color to 8-bit sRGB.
    pub fn to_color(&self) -> Color {
        let linear = SrgbLinear::from(self.to_lab().to_xyz());

        let flags = linear.gamut_flags();
        let linear = if flags.is_empty() {
            linear
        } else {
            linear.clip()
        };

        linear.to_gamma_encoded().quantize(flags)
    }
}

/// Convert a point in the HCL color space to 8-bit sRGB.
///
/// `hue` is in degrees, `lightness` nominally in `[0, 1]` and `chroma` a small
/// positive number. Any input is accepted.
pub fn convert(hue: Component, chroma: Component, lightness: Component) -> Color {
    Hcl::new(hue, chroma, lightness).to_color()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Flags;

    #[test]
    fn known_colors() {
        assert_eq!(convert(0.0, 0.0, 0.0), Color::new(28, 25, 20));
        assert_eq!(convert(0.0, 0.0, 0.5), Color::new(101, 92, 79));
        assert_eq!(convert(0.0, 0.0, 1.0), Color::new(184, 169, 148));
        assert_eq!(convert(0.0, 1.0, 0.5), Color::new(140, 75, 60));
        assert_eq!(convert(120.0, 1.0, 0.5), Color::new(64, 102, 57));
        assert_eq!(convert(240.0, 1.0, 0.5), Color::new(78, 94, 121));
        assert_eq!(convert(300.0, 2.0, 0.2), Color::new(89, 27, 68));
    }

    #[test]
    fn out_of_gamut_is_clipped_and_flagged() {
        let color = convert(0.0, 5.0, 0.5);
        assert_eq!((color.red, color.green, color.blue), (255, 0, 0));
        assert_eq!(
            color.flags,
            Flags::RED_OUT_OF_GAMUT | Flags::GREEN_OUT_OF_GAMUT | Flags::BLUE_OUT_OF_GAMUT
        );
        assert_eq!(color.alpha(), Color::TRANSPARENT);

        let color = convert(0.0, 0.0, 1.7);
        assert_eq!((color.red, color.green, color.blue), (255, 255, 253));
        assert_eq!(color.flags, Flags::RED_OUT_OF_GAMUT | Flags::GREEN_OUT_OF_GAMUT);
    }

    #[test]
    fn validity_flips_past_the_tolerance_not_at_one() {
        // Red lands at 1.0002 linear.
        let color = convert(0.0, 0.0, 1.3919);
        assert!(color.is_valid());
        assert_eq!(color.red, 255);

        // Red lands at 1.0005 linear.
        assert!(convert(0.0, 0.0, 1.39208).is_valid());

        // Red lands at 1.0015 linear.
        let color = convert(0.0, 0.0, 1.39268);
        assert_eq!(color.flags, Flags::RED_OUT_OF_GAMUT);
        assert_eq!(color.red, 255);
    }

    #[test]
    fn zero_chroma_ignores_hue() {
        for lightness in [0.0, 0.25, 0.5, 0.75, 1.0] {
            let reference = convert(0.0, 0.0, lightness);
            for hue in (0..360).step_by(15) {
                assert_eq!(convert(hue as Component, 0.0, lightness), reference);
            }
        }
    }

    #[test]
    fn nominal_range_is_in_bounds() {
        // Channels are u8, so the range holds by type; this sweeps the
        // nominal input space for panics and checks validity is consistent.
        for hue in (0..360).step_by(20) {
            for chroma in 0..=10 {
                for lightness in 0..=10 {
                    let color = convert(
                        hue as Component,
                        chroma as Component / 2.0,
                        lightness as Component / 10.0,
                    );
                    assert_eq!(color.is_valid(), color.alpha() == Color::OPAQUE);
                }
            }
        }
    }

    #[test]
    fn lightness_is_monotonic() {
        let luminance = |c: Color| {
            let (r, g, b) = (c.red as Component, c.green as Component, c.blue as Component);
            0.2126 * r + 0.7152 * g + 0.0722 * b
        };

        for chroma in [0.0, 0.25, 0.5, 1.0, 2.0] {
            for hue in (0..360).step_by(10) {
                let mut previous = Component::NEG_INFINITY;
                for step in 0..=1000 {
                    let color = convert(hue as Component, chroma, step as Component / 1000.0);
                    if !color.is_valid() {
                        previous = Component::NEG_INFINITY;
                        continue;
                    }

                    let y = luminance(color);
                    assert!(
                        y >= previous,
                        "hue {hue} chroma {chroma} step {step}: {y} < {previous}"
                    );
                    previous = y;
                }
            }
        }
    }

    #[test]
    fn zero_chroma_is_in_gamut_up_to_full_lightness() {
        for step in 0..=100 {
            assert!(convert(0.0, 0.0, step as Component / 100.0).is_valid());
        }
    }

    #[test]
    fn formatted_output_is_hex() {
        for hue in (0..360).step_by(30) {
            for chroma in [0.0, 1.0, 3.0, 5.0] {
                let hex = convert(hue as Component, chroma, 0.6).to_hex();
                assert_eq!(hex.len(), 7);
                assert!(hex.starts_with('#'));
                assert!(hex[1..]
                    .bytes()
                    .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
            }
        }
    }

    #[test]
    fn deterministic() {
        assert_eq!(convert(123.4, 1.7, 0.42), convert(123.4, 1.7, 0.42));
    }

    #[test]
    fn non_finite_input() {
        let color = convert(Component::NAN, 1.0, 0.5);
        assert_eq!(color, Color::new(0, 0, 0));

        let color = convert(0.0, Component::INFINITY, 0.5);
        assert_eq!((color.red, color.green, color.blue), (255, 0, 0));
        assert_eq!(color.flags, Flags::RED_OUT_OF_GAMUT | Flags::GREEN_OUT_OF_GAMUT);
    }
}
