use crate::error::DegenerateScaleError;

/// Affine map `f(x) = k * x + b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub k: f64,
    pub b: f64,
}

impl LinearScale {
    /// Solve for the map taking `domain_min` to `range_min` and `domain_max`
    /// to `range_max`.
    pub fn solve(
        domain_min: f64,
        domain_max: f64,
        range_min: f64,
        range_max: f64,
    ) -> Result<Self, DegenerateScaleError> {
        let width = domain_max - domain_min;
        if width == 0.0 {
            return Err(DegenerateScaleError {
                domain_min,
                domain_max,
            });
        }
        let k = (range_max - range_min) / width;
        let b = range_min - k * domain_min;
        Ok(Self { k, b })
    }

    #[inline]
    pub fn apply(&self, x: f64) -> f64 {
        self.k * x + self.b
    }
}
