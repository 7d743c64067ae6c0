use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("mean motion must be positive and finite, got {0} rad/s")]
    NonPositiveMeanMotion(f64),
    #[error("semi-major axis must be positive and finite, got {0} km")]
    NonPositiveSemiMajorAxis(f64),
    #[error("inclination must lie in [0, π] rad, got {0}")]
    InclinationOutOfRange(f64),
    #[error("eccentricity must lie in [0, 1) for a closed orbit, got {0}")]
    EccentricityOutOfRange(f64),
    #[error("position vector has zero radius")]
    ZeroRadius,
    #[error("position vector has a non-finite component")]
    NonFinitePosition,
}
