//! Two-body orbit model: element derivation, propagation and the
//! inertial / geodetic / Earth-fixed frame conversions.

pub mod constants;
mod elements;
mod error;
mod frames;
mod propagator;
mod types;

pub use elements::{
    compute_elements, legacy_histogram_semi_major_axis_km, mean_motion_from_semi_major_axis,
    semi_major_axis_km, ElementSummary, OrbitalElementSet,
};
pub use error::DomainError;
pub use frames::{
    geodetic_to_earth_fixed, geodetic_to_earth_fixed_on, ground_track, inertial_sample, to_lat_lon,
};
pub use propagator::{orbit_path, orbital_period_s, orbital_radius, propagate};
pub use types::{Cartesian, Geodetic, PositionSample};
