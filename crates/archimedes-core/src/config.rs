//! Scale parameters for a single mapper.
//!
//! The config is a plain value: callers build it with struct-literal syntax and
//! hand it over by copy. A mapper never sees later edits to the caller's copy.

use crate::error::ConfigurationError;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchimedesConfig {
    /// Readings at or below this value sit on the inner edge of the spiral.
    pub value_min: f64,
    /// Readings above this value are treated as equal to it.
    pub value_max: f64,
    /// Angle (degrees) for `value_min`. Not reduced modulo 360.
    pub angle_min: f64,
    /// Angle (degrees) for `value_max`. Not reduced modulo 360.
    pub angle_max: f64,
    pub radius_min: f64,
    pub radius_max: f64,
    /// Ceiling applied to every channel.
    pub brightness_max: u8,
}

impl ArchimedesConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        for (field, v) in [
            ("value_min", self.value_min),
            ("value_max", self.value_max),
            ("angle_min", self.angle_min),
            ("angle_max", self.angle_max),
            ("radius_min", self.radius_min),
            ("radius_max", self.radius_max),
        ] {
            if !v.is_finite() {
                return Err(ConfigurationError::NonFinite { field });
            }
        }
        if self.value_max <= self.value_min {
            return Err(ConfigurationError::DegenerateValueDomain {
                value_min: self.value_min,
                value_max: self.value_max,
            });
        }
        if self.angle_max == self.angle_min {
            return Err(ConfigurationError::DegenerateAngleDomain {
                angle: self.angle_min,
            });
        }
        if self.radius_min < 0.0 {
            return Err(ConfigurationError::NegativeRadius {
                radius_min: self.radius_min,
            });
        }
        if self.radius_max < self.radius_min {
            return Err(ConfigurationError::InvertedRadius {
                radius_min: self.radius_min,
                radius_max: self.radius_max,
            });
        }
        if self.brightness_max == 0 {
            return Err(ConfigurationError::ZeroBrightness);
        }
        Ok(())
    }
}
