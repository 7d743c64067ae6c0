use std::f64::consts::PI;

/// Earth's standard gravitational parameter (km³/s²)
pub const MU_EARTH_KM3_S2: f64 = 398_600.441_8;

/// Mean Earth radius used for ground-track projection (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const SOLAR_DAY_S: f64 = 86_400.0;

/// One rotation of the Earth relative to the stars
pub const SIDEREAL_DAY_S: f64 = 86_164.0;

/// Earth rotation rate used by the ground-track correction (deg/s)
pub const EARTH_ROTATION_DEG_S: f64 = 360.0 / SIDEREAL_DAY_S;

/// rev/day -> rad/s
pub const REV_PER_DAY_TO_RAD_S: f64 = 2.0 * PI / SOLAR_DAY_S;
