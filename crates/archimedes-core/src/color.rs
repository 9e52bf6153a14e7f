use std::fmt;

use crate::constants::CHANNEL_LEVEL_MAX;

/// 8-bit-per-channel color as produced by the composer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[inline]
fn clamp_level(level: i32) -> u8 {
    level.clamp(0, CHANNEL_LEVEL_MAX) as u8
}

impl Rgb {
    /// Build from raw channel levels, clamping each into `[0, 255]`.
    pub fn from_levels(red: i32, green: i32, blue: i32) -> Self {
        Self {
            r: clamp_level(red),
            g: clamp_level(green),
            b: clamp_level(blue),
        }
    }

    /// `0xRRGGBB`
    pub fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Inverse of [`Rgb::to_packed`]; bits above 24 are ignored.
    pub fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    /// Lowercase `rrggbb` without a leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Merge three channel levels into a packed 24-bit color.
pub fn compose(red: i32, green: i32, blue: i32) -> u32 {
    Rgb::from_levels(red, green, blue).to_packed()
}
