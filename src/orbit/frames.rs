use super::constants::{EARTH_RADIUS_KM, EARTH_ROTATION_DEG_S};
use super::elements::OrbitalElementSet;
use super::error::DomainError;
use super::propagator::propagate;
use super::types::{Cartesian, Geodetic, PositionSample};

/// Spherical latitude/longitude (degrees) of an inertial position.
///
/// On the polar axis `atan2(0, 0)` evaluates to 0, so the longitude of a
/// point straight above a pole is reported as 0°.
pub fn to_lat_lon(position: Cartesian) -> Result<Geodetic, DomainError> {
    if !position.is_finite() {
        return Err(DomainError::NonFinitePosition);
    }
    let r = position.norm();
    if r == 0.0 {
        return Err(DomainError::ZeroRadius);
    }
    Ok(Geodetic {
        latitude_deg: (position.z / r).asin().to_degrees(),
        longitude_deg: position.y.atan2(position.x).to_degrees(),
    })
}

/// Earth-fixed point on the mean-radius sphere below `latitude_deg`,
/// `longitude_deg`, after the Earth has turned for `t` seconds.
pub fn geodetic_to_earth_fixed(latitude_deg: f64, longitude_deg: f64, t: f64) -> Cartesian {
    geodetic_to_earth_fixed_on(latitude_deg, longitude_deg, t, EARTH_RADIUS_KM)
}

pub fn geodetic_to_earth_fixed_on(
    latitude_deg: f64,
    longitude_deg: f64,
    t: f64,
    radius_km: f64,
) -> Cartesian {
    let lon = (longitude_deg - EARTH_ROTATION_DEG_S * t).to_radians();
    let lat = latitude_deg.to_radians();

    let (sin_lat, cos_lat) = lat.sin_cos();
    let (sin_lon, cos_lon) = lon.sin_cos();
    Cartesian::new(
        radius_km * cos_lat * cos_lon,
        radius_km * cos_lat * sin_lon,
        radius_km * sin_lat,
    )
}

/// Propagate to `t` and project onto the rotating Earth with the same `t`.
pub fn ground_track(elements: &OrbitalElementSet, t: f64) -> Result<PositionSample, DomainError> {
    let inertial = propagate(elements, t);
    let geodetic = to_lat_lon(inertial)?;
    let earth_fixed = geodetic_to_earth_fixed(geodetic.latitude_deg, geodetic.longitude_deg, t);
    Ok(PositionSample {
        elapsed_s: t,
        inertial,
        geodetic,
        earth_fixed: Some(earth_fixed),
    })
}

/// Like [`ground_track`] without the Earth-fixed projection.
pub fn inertial_sample(
    elements: &OrbitalElementSet,
    t: f64,
) -> Result<PositionSample, DomainError> {
    let inertial = propagate(elements, t);
    Ok(PositionSample {
        elapsed_s: t,
        inertial,
        geodetic: to_lat_lon(inertial)?,
        earth_fixed: None,
    })
}
