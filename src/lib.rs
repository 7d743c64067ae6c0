//! TLE catalog decoding, two-body propagation and ground tracks.
//!
//! ```
//! use orbit_o_mat::orbit::{ground_track, propagate};
//! use orbit_o_mat::tle::parse_tle;
//!
//! let iss = parse_tle(&[
//!     "ISS (ZARYA)",
//!     "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927",
//!     "2 25544  51.6400 208.9163 0006317  69.9862  25.2906 15.49560609123456",
//! ])
//! .unwrap();
//!
//! let inertial = propagate(&iss, 600.0);
//! let sample = ground_track(&iss, 600.0).unwrap();
//! assert_eq!(sample.inertial, inertial);
//! ```

pub mod animation;
pub mod config;
pub mod elements_file;
pub mod orbit;
pub mod tle;
pub mod web;
