//! Projection of a scalar reading onto the spiral.
//!
//! Readings are laid out along an Archimedean-style spiral: the angle grows
//! linearly with the value and the radius grows linearly with the angle.
//! Readings between 0 and `value_min` all share the starting angle and fade in
//! from the center, so a calm reading reads as near-white.
//!
//! Arc length of a real Archimedean spiral is not linear in the angle. The
//! linear value-to-angle map is an approximation and is good enough for a
//! gauge.

use crate::config::ArchimedesConfig;
use crate::error::DegenerateScaleError;
use crate::scale::LinearScale;

/// A point on the color wheel. `phi` is in degrees and may lie outside
/// `[0, 360)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarCoordinate {
    pub phi: f64,
    pub r: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spiral {
    value_min: f64,
    value_max: f64,
    angle_min: f64,
    radius_min: f64,
    phi_scale: LinearScale,
    r_scale: LinearScale,
}

impl Spiral {
    pub fn new(cfg: &ArchimedesConfig) -> Result<Self, DegenerateScaleError> {
        let phi_scale =
            LinearScale::solve(cfg.value_min, cfg.value_max, cfg.angle_min, cfg.angle_max)?;
        let r_scale =
            LinearScale::solve(cfg.angle_min, cfg.angle_max, cfg.radius_min, cfg.radius_max)?;
        Ok(Self {
            value_min: cfg.value_min,
            value_max: cfg.value_max,
            angle_min: cfg.angle_min,
            radius_min: cfg.radius_min,
            phi_scale,
            r_scale,
        })
    }

    /// Value to angle coefficients.
    pub fn phi_scale(&self) -> LinearScale {
        self.phi_scale
    }

    /// Angle to radius coefficients.
    pub fn r_scale(&self) -> LinearScale {
        self.r_scale
    }

    /// Clamp a raw reading into `[0, value_max]`. NaN maps to 0.
    /// If `value_max` is negative every reading collapses onto `value_max`.
    pub fn clamp_value(&self, value: f64) -> f64 {
        // f64::max drops NaN; f64::clamp would panic on an inverted range
        value.max(0.0).min(self.value_max)
    }

    /// Where `value` lands on the wheel. Total over all inputs.
    pub fn position(&self, value: f64) -> PolarCoordinate {
        let value = self.clamp_value(value);
        let phi = if value <= self.value_min {
            self.angle_min
        } else {
            self.phi_scale.apply(value)
        };
        let r = if value < self.value_min {
            // below threshold: fade in from the center toward the inner edge
            self.radius_min * value / self.value_min
        } else {
            self.r_scale.apply(phi)
        };
        PolarCoordinate { phi, r }
    }
}
