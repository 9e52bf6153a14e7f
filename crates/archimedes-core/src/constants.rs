// Color wheel geometry shared by every mapper instance.

// Hue angles of the three primaries, in degrees
pub const HUE_RED: f64 = 90.0;
pub const HUE_GREEN: f64 = 330.0;
pub const HUE_BLUE: f64 = 210.0;

// A channel stays fully lit within this distance of its hue
pub const FULL_LEVEL_SPAN: f64 = 60.0;
// ...and fades out linearly until this distance
pub const FADE_OUT_SPAN: f64 = 120.0;

pub const HALF_TURN: f64 = 180.0;
pub const FULL_TURN: f64 = 360.0;

// Composed colors are 8 bits per channel regardless of the configured ceiling
pub const CHANNEL_LEVEL_MAX: i32 = 255;
