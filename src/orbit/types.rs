use serde::Serialize;
use utoipa::ToSchema;

/// Cartesian position in km. The frame is given by context.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, ToSchema)]
pub struct Cartesian {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Cartesian {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y).hypot(self.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Geodetic {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
}

/// Satellite state at one elapsed time since the element epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct PositionSample {
    pub elapsed_s: f64,
    pub inertial: Cartesian,
    pub geodetic: Geodetic,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earth_fixed: Option<Cartesian>,
}
