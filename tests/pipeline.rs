use approx::assert_relative_eq;
use std::time::Duration;

use orbit_o_mat::animation::{Animation, InputEvent, SessionState, Timeline};
use orbit_o_mat::elements_file::{self, ElementKey, ElementRow};
use orbit_o_mat::orbit::{constants::EARTH_RADIUS_KM, ground_track};
use orbit_o_mat::tle::{self, NamePrefix, ParseError};

const CATALOG: &str = "\
ISS (ZARYA)
1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927
2 25544  51.6400 208.9163 0006317  69.9862  25.2906 15.49560609123456
STARLINK-1007
1 44713U 19074A   24001.00000000  .00001000  00000-0  10000-3 0  9990
STARLINK-BROKEN
1 44714U 19074B   24001.00000000  .00001000  00000-0  10000-3 0  9991
";

fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("orbit-o-mat-{}-{}", std::process::id(), name))
}

#[test]
fn test_catalog_to_element_file() {
    let report = tle::parse_catalog(CATALOG);
    assert_eq!(report.satellites.len(), 1);
    assert_eq!(report.failures.len(), 2);
    assert!(report
        .failures
        .iter()
        .all(|f| f.error == ParseError::MissingLine2));

    let rows: Vec<ElementRow> = report.satellites.iter().map(ElementRow::from).collect();
    let path = temp_path("elements.txt");
    elements_file::write_element_file(&path, &rows).unwrap();
    let back = elements_file::read_element_file(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(back.len(), 1);
    assert_relative_eq!(back[0].a, 6796.15, epsilon = 0.01);
    let incl = elements_file::select(&back, ElementKey::Inclination, Some(50.0), Some(52.0));
    assert_eq!(incl, vec![51.64]);
}

#[test]
fn test_cleanup_then_parse_two_line_records() {
    let cleaned = tle::clean_catalog(CATALOG);
    assert!(cleaned.lines().all(|l| l.starts_with("1 ") || l.starts_with("2 ")));

    let report = tle::parse_catalog(&cleaned);
    assert_eq!(report.satellites.len(), 1);
    assert_eq!(report.satellites[0].name(), "NORAD 25544");
}

#[test]
fn test_prefix_filter() {
    let prefix = NamePrefix::new("starlink");
    let report = tle::parse_catalog_filtered(CATALOG, |name| prefix.matches(name));
    assert!(report.satellites.is_empty());
    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.skipped, 1);
}

#[test]
fn test_ground_track_and_animation() {
    let report = tle::parse_catalog(CATALOG);
    let iss = report.satellites[0].clone();

    let timeline = Timeline::new(Duration::from_secs(600), Duration::from_secs(60)).unwrap();
    for t in timeline.times() {
        let sample = ground_track(&iss, t).unwrap();
        assert!(sample.geodetic.latitude_deg.abs() <= 51.64 + 1e-9);
        assert_relative_eq!(
            sample.earth_fixed.unwrap().norm(),
            EARTH_RADIUS_KM,
            max_relative = 1e-12
        );
    }

    let mut animation = Animation::new(report.satellites, timeline, 3);
    let session = SessionState::default().apply(InputEvent::SpeedUp);
    let mut last = None;
    for _ in 0..5 {
        last = Some(animation.advance(&session));
    }
    let frame = last.unwrap();
    assert_eq!(frame.index, 4);
    assert_eq!(frame.t, 480.0);
    assert_eq!(frame.satellites[0].trail.len(), 3);
    assert_eq!(
        frame.satellites[0].position,
        Some(ground_track(&iss, 480.0).unwrap().inertial)
    );
}
