use std::f64::consts::TAU;

use super::elements::OrbitalElementSet;
use super::types::Cartesian;

/// Inertial position `t` seconds after the element epoch.
///
/// Two-body approximation: the mean anomaly `n * t`, reduced to [0, 2π), is
/// used directly as the true anomaly. This only holds for near-circular
/// orbits. The orbital plane is tilted by the inclination about the x axis;
/// node and perigee rotations are not applied.
pub fn propagate(elements: &OrbitalElementSet, t: f64) -> Cartesian {
    let mean_anomaly = elements.mean_motion_rad_s() * t;
    let theta = mean_anomaly.rem_euclid(TAU);
    position_at_angle(elements, theta)
}

/// Conic radius `a(1-e²)/(1+e·cos θ)` at plane angle `theta`.
pub fn orbital_radius(semi_major_axis_km: f64, eccentricity: f64, theta: f64) -> f64 {
    semi_major_axis_km * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * theta.cos())
}

pub fn orbital_period_s(elements: &OrbitalElementSet) -> f64 {
    TAU / elements.mean_motion_rad_s()
}

/// One full orbit sampled at `points` evenly spaced plane angles, for static
/// orbit plots.
pub fn orbit_path(elements: &OrbitalElementSet, points: usize) -> Vec<Cartesian> {
    (0..points)
        .map(|k| {
            let theta = TAU * k as f64 / points as f64;
            position_at_angle(elements, theta)
        })
        .collect()
}

fn position_at_angle(elements: &OrbitalElementSet, theta: f64) -> Cartesian {
    let r = orbital_radius(
        elements.semi_major_axis_km(),
        elements.eccentricity(),
        theta,
    );
    let x_orb = r * theta.cos();
    let y_orb = r * theta.sin();

    let (sin_i, cos_i) = elements.inclination_rad().sin_cos();
    Cartesian::new(x_orb, y_orb * cos_i, y_orb * sin_i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn starlink() -> OrbitalElementSet {
        OrbitalElementSet::from_tle_units("STARLINK-1007", 53.05, 0.000_142_3, 15.064_005_31)
            .unwrap()
    }

    fn eccentric() -> OrbitalElementSet {
        OrbitalElementSet::from_tle_units("MOLNIYA", 63.4, 0.72, 2.006).unwrap()
    }

    #[test]
    fn test_epoch_position_on_x_axis() {
        for sat in [starlink(), eccentric()] {
            let p = propagate(&sat, 0.0);
            let perigee = sat.summary().perigee_km;
            assert_relative_eq!(p.x, perigee, max_relative = 1e-12);
            assert_abs_diff_eq!(p.y, 0.0);
            assert_abs_diff_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_periodicity() {
        for sat in [starlink(), eccentric()] {
            let period = orbital_period_s(&sat);
            for t in [0.0, 17.0, 1234.5, 86_400.0] {
                let a = propagate(&sat, t);
                for k in [1.0, 3.0, 10.0] {
                    let b = propagate(&sat, t + k * period);
                    assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-3);
                    assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-3);
                    assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-3);
                }
            }
        }
    }

    #[test]
    fn test_circular_radius_constant() {
        for k in 0..64 {
            let theta = TAU * k as f64 / 64.0;
            assert_relative_eq!(orbital_radius(7000.0, 0.0, theta), 7000.0);
        }

        let sat = OrbitalElementSet::from_tle_units("CIRC", 97.6, 0.0, 14.2).unwrap();
        for t in [0.0, 300.0, 2000.0, 5555.5] {
            assert_relative_eq!(
                propagate(&sat, t).norm(),
                sat.semi_major_axis_km(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn test_inclination_tilts_plane() {
        let sat = starlink();
        let quarter = orbital_period_s(&sat) / 4.0;
        let p = propagate(&sat, quarter);
        let i = sat.inclination_rad();
        assert_relative_eq!(p.z / p.y, i.tan(), max_relative = 1e-9);

        let equatorial = OrbitalElementSet::from_tle_units("EQ", 0.0, 0.0, 1.0027).unwrap();
        for t in [0.0, 1000.0, 40_000.0] {
            assert_abs_diff_eq!(propagate(&equatorial, t).z, 0.0);
        }
    }

    #[test]
    fn test_apogee_at_half_period() {
        let sat = eccentric();
        let p = propagate(&sat, orbital_period_s(&sat) / 2.0);
        assert_relative_eq!(p.norm(), sat.summary().apogee_km, max_relative = 1e-9);
    }

    #[test]
    fn test_orbit_path_samples() {
        let sat = starlink();
        let path = orbit_path(&sat, 100);
        assert_eq!(path.len(), 100);
        assert_eq!(path[0], propagate(&sat, 0.0));
        let quarter = path[25];
        let expected = propagate(&sat, orbital_period_s(&sat) / 4.0);
        assert_abs_diff_eq!(quarter.y, expected.y, epsilon = 1e-6);
        assert_abs_diff_eq!(quarter.z, expected.z, epsilon = 1e-6);
        assert!(orbit_path(&sat, 0).is_empty());
    }
}
