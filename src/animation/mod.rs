//! Frame driver for animated ground-track shells.
//!
//! The renderer owns the window and input handling; this module turns a frame
//! index plus the current [`SessionState`] into satellite positions and
//! Earth-fixed trails.

mod session;
mod timeline;
mod trail;

use serde::Serialize;

use crate::orbit::{ground_track, Cartesian, DomainError, OrbitalElementSet, PositionSample};

pub use session::{InputEvent, SessionState};
pub use timeline::{Timeline, TimelineError};
pub use trail::{TrailBuffer, DEFAULT_TRAIL_LENGTH};

#[derive(Debug, Clone, Serialize)]
pub struct SatelliteFrame {
    pub name: String,
    /// Inertial position, or the last valid one when `held` is set.
    pub position: Option<Cartesian>,
    pub held: bool,
    /// Earth-fixed trail, empty while trails are disabled.
    pub trail: Vec<Cartesian>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Frame {
    pub index: usize,
    /// Simulated seconds since epoch, already scaled by the speed multiplier.
    pub t: f64,
    pub satellites: Vec<SatelliteFrame>,
}

#[derive(Debug, Clone)]
struct SatelliteTrack {
    trail: TrailBuffer,
    last_position: Option<Cartesian>,
}

impl SatelliteTrack {
    fn new(trail_length: usize) -> Self {
        Self {
            trail: TrailBuffer::new(trail_length),
            last_position: None,
        }
    }

    /// Fold one ground-track result in. Errors keep the previous position.
    fn record(
        &mut self,
        name: &str,
        result: Result<PositionSample, DomainError>,
        session: &SessionState,
    ) -> SatelliteFrame {
        let held = match result {
            Ok(sample) => {
                self.last_position = Some(sample.inertial);
                if let Some(ground) = sample.earth_fixed {
                    self.trail.push(ground);
                }
                false
            }
            Err(e) => {
                log::warn!("{}: {}, holding last position", name, e);
                true
            }
        };

        SatelliteFrame {
            name: name.to_string(),
            position: self.last_position,
            held,
            trail: if session.trail_enabled {
                self.trail.points().copied().collect()
            } else {
                Vec::new()
            },
        }
    }
}

pub struct Animation {
    satellites: Vec<OrbitalElementSet>,
    tracks: Vec<SatelliteTrack>,
    timeline: Timeline,
    cursor: usize,
}

impl Animation {
    pub fn new(satellites: Vec<OrbitalElementSet>, timeline: Timeline, trail_length: usize) -> Self {
        let tracks = satellites
            .iter()
            .map(|_| SatelliteTrack::new(trail_length))
            .collect();
        Self {
            satellites,
            tracks,
            timeline,
            cursor: 0,
        }
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Largest semi-major axis in the set, for framing a 3D view.
    pub fn extent_km(&self) -> Option<f64> {
        self.satellites
            .iter()
            .map(OrbitalElementSet::semi_major_axis_km)
            .reduce(f64::max)
    }

    /// Compute frame `index`. Inertial motion and Earth rotation both use
    /// `t = frame_time(index) * speed_multiplier`.
    pub fn frame(&mut self, index: usize, session: &SessionState) -> Frame {
        let t = self.timeline.frame_time(index) * session.speed_multiplier;

        let satellites = self
            .satellites
            .iter()
            .zip(self.tracks.iter_mut())
            .map(|(sat, track)| track.record(sat.name(), ground_track(sat, t), session))
            .collect();

        Frame {
            index,
            t,
            satellites,
        }
    }

    /// Compute the frame under the cursor and move the cursor on unless the
    /// session is paused. Wraps around at the end of the timeline.
    pub fn advance(&mut self, session: &SessionState) -> Frame {
        let frame = self.frame(self.cursor, session);
        if !session.paused {
            let count = self.timeline.frame_count().max(1);
            self.cursor = (self.cursor + 1) % count;
        }
        frame
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        for track in &mut self.tracks {
            track.trail.clear();
            track.last_position = None;
        }
    }
}
