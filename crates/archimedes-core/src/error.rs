use thiserror::Error;

/// Raised by [`LinearScale::solve`](crate::LinearScale::solve) when the
/// domain collapses to a single point.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("degenerate linear scale: domain [{domain_min}, {domain_max}] has zero width")]
pub struct DegenerateScaleError {
    pub domain_min: f64,
    pub domain_max: f64,
}

/// Everything that can go wrong while building an
/// [`Archimedes`](crate::Archimedes) mapper. Nothing past construction fails.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("`{field}` must be a finite number")]
    NonFinite { field: &'static str },
    #[error("value_max ({value_max}) must be greater than value_min ({value_min})")]
    DegenerateValueDomain { value_min: f64, value_max: f64 },
    #[error("angle_max must differ from angle_min (both are {angle})")]
    DegenerateAngleDomain { angle: f64 },
    #[error("radius_min ({radius_min}) must not be negative")]
    NegativeRadius { radius_min: f64 },
    #[error("radius_max ({radius_max}) must not be less than radius_min ({radius_min})")]
    InvertedRadius { radius_min: f64, radius_max: f64 },
    #[error("brightness_max must be greater than zero")]
    ZeroBrightness,
    #[error(transparent)]
    Scale(#[from] DegenerateScaleError),
}
