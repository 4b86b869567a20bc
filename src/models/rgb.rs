//! Model a color in the sRGB color space, with and without gamma encoding.

use crate::color::{Color, Component, Flags};

/// Lowest linear value that is still considered inside the gamut.
pub const GAMUT_MIN: Component = -0.001;

/// Highest linear value that is still considered inside the gamut.
pub const GAMUT_MAX: Component = 1.001;

/// The alpha in the sRGB companding function.
const ALPHA: Component = 0.055;

/// Linear value below which the companding function is linear.
const BETA: Component = 0.0031308;

fn out_of_gamut(value: Component) -> bool {
    value < GAMUT_MIN || value > GAMUT_MAX
}

fn gamma_encode(value: Component) -> Component {
    if value <= BETA {
        12.92 * value
    } else {
        (1.0 + ALPHA) * value.powf(1.0 / 2.4) - ALPHA
    }
}

fn quantize_channel(value: Component) -> u8 {
    // NaN saturates to 0 on the cast.
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

hcl_gamut_macros::gen_model! {
    /// A color in the sRGB color space with no gamma encoding.
    pub struct SrgbLinear {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl SrgbLinear {
    /// Return the flags for every channel outside of
    /// [`GAMUT_MIN`]..=[`GAMUT_MAX`].
    ///
    /// The margin around `[0, 1]` absorbs floating point noise for colors
    /// that sit exactly on the gamut boundary. NaN compares as inside.
    pub fn gamut_flags(&self) -> Flags {
        let mut flags = Flags::empty();
        flags.set(Flags::RED_OUT_OF_GAMUT, out_of_gamut(self.red));
        flags.set(Flags::GREEN_OUT_OF_GAMUT, out_of_gamut(self.green));
        flags.set(Flags::BLUE_OUT_OF_GAMUT, out_of_gamut(self.blue));
        flags
    }

    /// Return a color with each of the components clipped (clamped to [0..1]).
    /// NOTE: This is a lossy operation.
    pub fn clip(&self) -> Self {
        self.to_components().map(|v| v.clamp(0.0, 1.0)).into()
    }

    /// Convert this model from linear light to gamma encoded.
    pub fn to_gamma_encoded(&self) -> Srgb {
        self.to_components().map(gamma_encode).into()
    }
}

hcl_gamut_macros::gen_model! {
    /// A color in the sRGB color space with gamma encoding, components in
    /// `[0, 1]`.
    pub struct Srgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Srgb {
    /// Scale each component to 8 bits, rounding to the nearest integer, and
    /// attach the gamut `flags` the components were computed with.
    pub fn quantize(&self, flags: Flags) -> Color {
        Color::with_flags(
            quantize_channel(self.red),
            quantize_channel(self.green),
            quantize_channel(self.blue),
            flags,
        )
    }
}
