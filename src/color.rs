//! A [`Color`] is the displayable result of converting a point in the HCL
//! color space to sRGB.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

use crate::Error;

/// A 64-bit floating point value that all coordinates are computed with.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

bitflags! {
    /// Flags to mark the linear channels of a [`Color`] that fell outside of
    /// the sRGB gamut before gamma encoding.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Flags : u8 {
        /// Set when the linear red channel was out of gamut.
        const RED_OUT_OF_GAMUT = 1 << 0;
        /// Set when the linear green channel was out of gamut.
        const GREEN_OUT_OF_GAMUT = 1 << 1;
        /// Set when the linear blue channel was out of gamut.
        const BLUE_OUT_OF_GAMUT = 1 << 2;
    }
}

/// An 8-bit sRGB color along with the gamut flags gathered while it was
/// computed.
///
/// A color with any flag set is *invalid*: its channels hold the clipped
/// approximation and its alpha is transparent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// Channels that were out of gamut.
    pub flags: Flags,
}

impl Color {
    /// Alpha of a valid color.
    pub const OPAQUE: u8 = u8::MAX;
    /// Alpha of a color that could not be represented in sRGB.
    pub const TRANSPARENT: u8 = 0;

    /// Create a new valid color.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self::with_flags(red, green, blue, Flags::empty())
    }

    /// Create a new color with the given gamut flags.
    pub const fn with_flags(red: u8, green: u8, blue: u8, flags: Flags) -> Self {
        Self {
            red,
            green,
            blue,
            flags,
        }
    }

    /// Return the red channel.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Return the green channel.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Return the blue channel.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Returns true if the color was inside the sRGB gamut.
    pub fn is_valid(&self) -> bool {
        self.flags.is_empty()
    }

    /// Return the alpha channel, [`Color::OPAQUE`] for valid colors and
    /// [`Color::TRANSPARENT`] for the rest.
    pub fn alpha(&self) -> u8 {
        if self.is_valid() {
            Self::OPAQUE
        } else {
            Self::TRANSPARENT
        }
    }

    /// Return the color as `[red, green, blue, alpha]` bytes.
    pub fn to_rgba(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha()]
    }

    /// Format the color as `#rrggbb`. The alpha channel is not included.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

/// Format the channels as a lowercase `#rrggbb` string.
pub fn format_hex(red: u8, green: u8, blue: u8) -> String {
    Color::new(red, green, blue).to_string()
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parse a `#rrggbb` string. The `#` is optional and digits can be in any
    /// case. Parsed colors are always valid.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_owned()));
        }

        let channel = |at: usize| {
            u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| Error::InvalidHex(s.to_owned()))
        };

        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}
