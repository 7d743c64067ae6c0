use std::f64::consts::PI;

use serde::Serialize;
use utoipa::ToSchema;

use super::constants::{MU_EARTH_KM3_S2, REV_PER_DAY_TO_RAD_S};
use super::error::DomainError;

/// Orbital elements decoded from one TLE record.
///
/// The semi-major axis is derived from the mean motion on construction and
/// there is no way to set it independently, so `a = (MU / n²)^(1/3)` always
/// holds.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElementSet {
    name: String,
    inclination_rad: f64,
    eccentricity: f64,
    mean_motion_rad_s: f64,
    semi_major_axis_km: f64,
}

impl OrbitalElementSet {
    pub fn new(
        name: impl Into<String>,
        inclination_rad: f64,
        eccentricity: f64,
        mean_motion_rad_s: f64,
    ) -> Result<Self, DomainError> {
        if !(0.0..=PI).contains(&inclination_rad) {
            return Err(DomainError::InclinationOutOfRange(inclination_rad));
        }
        check_eccentricity(eccentricity)?;
        let semi_major_axis_km = semi_major_axis_km(mean_motion_rad_s)?;
        Ok(Self {
            name: name.into(),
            inclination_rad,
            eccentricity,
            mean_motion_rad_s,
            semi_major_axis_km,
        })
    }

    /// Build from the units a TLE carries: degrees and revolutions per day.
    pub fn from_tle_units(
        name: impl Into<String>,
        inclination_deg: f64,
        eccentricity: f64,
        mean_motion_rev_day: f64,
    ) -> Result<Self, DomainError> {
        Self::new(
            name,
            inclination_deg.to_radians(),
            eccentricity,
            mean_motion_rev_day * REV_PER_DAY_TO_RAD_S,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn inclination_rad(&self) -> f64 {
        self.inclination_rad
    }

    pub fn inclination_deg(&self) -> f64 {
        self.inclination_rad.to_degrees()
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn mean_motion_rad_s(&self) -> f64 {
        self.mean_motion_rad_s
    }

    pub fn mean_motion_rev_day(&self) -> f64 {
        self.mean_motion_rad_s / REV_PER_DAY_TO_RAD_S
    }

    pub fn semi_major_axis_km(&self) -> f64 {
        self.semi_major_axis_km
    }

    pub fn summary(&self) -> ElementSummary {
        summarize(self.semi_major_axis_km, self.eccentricity)
    }
}

/// Size of the orbit derived from mean motion and eccentricity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct ElementSummary {
    pub semi_major_axis_km: f64,
    pub perigee_km: f64,
    pub apogee_km: f64,
}

pub fn compute_elements(
    mean_motion_rad_s: f64,
    eccentricity: f64,
) -> Result<ElementSummary, DomainError> {
    check_eccentricity(eccentricity)?;
    let a = semi_major_axis_km(mean_motion_rad_s)?;
    Ok(summarize(a, eccentricity))
}

fn check_eccentricity(eccentricity: f64) -> Result<(), DomainError> {
    if (0.0..1.0).contains(&eccentricity) {
        Ok(())
    } else {
        Err(DomainError::EccentricityOutOfRange(eccentricity))
    }
}

/// Kepler's third law, `a = (MU / n²)^(1/3)`.
pub fn semi_major_axis_km(mean_motion_rad_s: f64) -> Result<f64, DomainError> {
    if !(mean_motion_rad_s.is_finite() && mean_motion_rad_s > 0.0) {
        return Err(DomainError::NonPositiveMeanMotion(mean_motion_rad_s));
    }
    Ok((MU_EARTH_KM3_S2 / (mean_motion_rad_s * mean_motion_rad_s)).cbrt())
}

/// Inverse of [`semi_major_axis_km`], `n = sqrt(MU / a³)`.
pub fn mean_motion_from_semi_major_axis(semi_major_axis_km: f64) -> Result<f64, DomainError> {
    if !(semi_major_axis_km.is_finite() && semi_major_axis_km > 0.0) {
        return Err(DomainError::NonPositiveSemiMajorAxis(semi_major_axis_km));
    }
    Ok((MU_EARTH_KM3_S2 / semi_major_axis_km.powi(3)).sqrt())
}

/// Semi-major axis as the old histogram tool computed it.
///
/// That tool took mean motion in rad/min, scaled it to rad/hour and then
/// applied a degrees to arcseconds-per-hour factor before Kepler's law, which
/// overstates `a` by `(180/π)^(2/3)`. Only for reproducing historical output.
pub fn legacy_histogram_semi_major_axis_km(mean_motion_rad_s: f64) -> Result<f64, DomainError> {
    if !(mean_motion_rad_s.is_finite() && mean_motion_rad_s > 0.0) {
        return Err(DomainError::NonPositiveMeanMotion(mean_motion_rad_s));
    }
    let rad_per_min = mean_motion_rad_s * 60.0;
    let rad_per_hour = rad_per_min * 60.0;
    let n = rad_per_hour * PI / 180.0 / 3600.0;
    Ok((MU_EARTH_KM3_S2 / (n * n)).cbrt())
}

fn summarize(a: f64, e: f64) -> ElementSummary {
    ElementSummary {
        semi_major_axis_km: a,
        perigee_km: a * (1.0 - e),
        apogee_km: a * (1.0 + e),
    }
}
