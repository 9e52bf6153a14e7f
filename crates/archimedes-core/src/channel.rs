use crate::constants::*;
use crate::spiral::PolarCoordinate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelHue {
    Red,
    Green,
    Blue,
}

impl ChannelHue {
    pub const ALL: [ChannelHue; 3] = [ChannelHue::Red, ChannelHue::Green, ChannelHue::Blue];

    pub fn angle(self) -> f64 {
        match self {
            ChannelHue::Red => HUE_RED,
            ChannelHue::Green => HUE_GREEN,
            ChannelHue::Blue => HUE_BLUE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ChannelHue::Red => "red",
            ChannelHue::Green => "green",
            ChannelHue::Blue => "blue",
        }
    }
}

/// One primary of the wheel. Brightness depends on how far the point is from
/// the channel's hue and how far it is from the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Channel {
    pub hue: ChannelHue,
    brightness_max: f64,
}

impl Channel {
    pub fn new(hue: ChannelHue, brightness_max: u8) -> Self {
        Self {
            hue,
            brightness_max: brightness_max as f64,
        }
    }

    pub fn brightness_max(&self) -> f64 {
        self.brightness_max
    }

    /// Shortest circular distance from `phi` to this hue, in degrees.
    /// Corrects a single wrap only.
    pub fn distance(&self, phi: f64) -> f64 {
        let d = (phi - self.hue.angle()).abs();
        if d <= HALF_TURN {
            d
        } else {
            (d - FULL_TURN).abs()
        }
    }

    /// Level on the rim of the wheel, ignoring the radius.
    pub fn outer_level(&self, phi: f64) -> i32 {
        let d = self.distance(phi);
        let max = self.brightness_max;
        if d <= FULL_LEVEL_SPAN {
            max as i32
        } else if d <= FADE_OUT_SPAN {
            (2.0 * max - max * d / FULL_LEVEL_SPAN).round() as i32
        } else {
            0
        }
    }

    /// Blend the rim level toward full brightness as `r` shrinks. `r` is not
    /// clamped, so radii past the ceiling extrapolate.
    pub fn actual_level(&self, outer_level: i32, r: f64) -> i32 {
        let max = self.brightness_max;
        ((outer_level as f64 - max) * r / max + max).round() as i32
    }

    pub fn level(&self, at: PolarCoordinate) -> i32 {
        self.actual_level(self.outer_level(at.phi), at.r)
    }
}
