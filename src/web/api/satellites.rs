use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::animation::Timeline;
use crate::config::parse_duration;
use crate::orbit::{
    ground_track, orbit_path, orbital_period_s, Cartesian, OrbitalElementSet, PositionSample,
};
use crate::web::api::error::{ApiError, ApiResult, ErrorResponse};
use crate::web::server::AppState;

const MAX_TRACK_SAMPLES: usize = 100_000;
const MAX_ORBIT_POINTS: usize = 10_000;

#[derive(Debug, Serialize, ToSchema)]
pub struct SatelliteResponse {
    pub name: String,
    pub inclination_deg: f64,
    pub eccentricity: f64,
    pub mean_motion_rev_day: f64,
    pub semi_major_axis_km: f64,
    pub perigee_km: f64,
    pub apogee_km: f64,
    pub period_s: f64,
}

impl From<&OrbitalElementSet> for SatelliteResponse {
    fn from(set: &OrbitalElementSet) -> Self {
        let summary = set.summary();
        Self {
            name: set.name().to_string(),
            inclination_deg: set.inclination_deg(),
            eccentricity: set.eccentricity(),
            mean_motion_rev_day: set.mean_motion_rev_day(),
            semi_major_axis_km: summary.semi_major_axis_km,
            perigee_km: summary.perigee_km,
            apogee_km: summary.apogee_km,
            period_s: orbital_period_s(set),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PositionQuery {
    #[serde(default)]
    pub t: f64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TrackQuery {
    pub duration: Option<String>,
    pub step: Option<String>,
    pub start: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrackPoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub sample: PositionSample,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TrackResponse {
    pub name: String,
    pub points: Vec<TrackPoint>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrbitQuery {
    pub points: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/satellites",
    tag = "satellites",
    responses(
        (status = 200, description = "Loaded satellites", body = Vec<SatelliteResponse>)
    )
)]
pub async fn list_satellites(State(state): State<AppState>) -> Json<Vec<SatelliteResponse>> {
    Json(state.satellites.iter().map(SatelliteResponse::from).collect())
}

#[utoipa::path(
    get,
    path = "/api/satellites/{name}/position",
    tag = "satellites",
    params(
        ("name" = String, Path, description = "Satellite name"),
        ("t" = Option<f64>, Query, description = "Seconds since element epoch (default 0)")
    ),
    responses(
        (status = 200, description = "Ground-track sample", body = PositionSample),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 404, description = "Unknown satellite", body = ErrorResponse),
        (status = 422, description = "Degenerate elements", body = ErrorResponse)
    )
)]
pub async fn position(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<PositionQuery>,
) -> ApiResult<Json<PositionSample>> {
    let sat = state.find(&name)?;
    if !(query.t.is_finite() && query.t >= 0.0) {
        return Err(ApiError::Validation(format!(
            "t must be a non-negative number, got {}",
            query.t
        )));
    }
    Ok(Json(ground_track(sat, query.t)?))
}

#[utoipa::path(
    get,
    path = "/api/satellites/{name}/track",
    tag = "satellites",
    params(
        ("name" = String, Path, description = "Satellite name"),
        ("duration" = Option<String>, Query, description = "Window length, e.g. 90m (default from config)"),
        ("step" = Option<String>, Query, description = "Sample spacing, e.g. 30s (default from config)"),
        ("start" = Option<String>, Query, description = "RFC3339 time of the element epoch, used to timestamp samples")
    ),
    responses(
        (status = 200, description = "Ground track", body = TrackResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 404, description = "Unknown satellite", body = ErrorResponse),
        (status = 422, description = "Degenerate elements", body = ErrorResponse)
    )
)]
pub async fn track(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<TrackQuery>,
) -> ApiResult<Json<TrackResponse>> {
    let sat = state.find(&name)?;

    let duration = match query.duration.as_deref() {
        Some(s) => parse_duration(s).map_err(ApiError::Validation)?,
        None => state.animation.duration,
    };
    let step = match query.step.as_deref() {
        Some(s) => parse_duration(s).map_err(ApiError::Validation)?,
        None => state.animation.step,
    };
    let timeline =
        Timeline::new(duration, step).map_err(|e| ApiError::Validation(e.to_string()))?;
    if timeline.frame_count() > MAX_TRACK_SAMPLES {
        return Err(ApiError::Validation(format!(
            "track would have {} samples, limit is {}",
            timeline.frame_count(),
            MAX_TRACK_SAMPLES
        )));
    }

    let points = timeline
        .times()
        .map(|t| -> ApiResult<TrackPoint> {
            let sample = ground_track(sat, t)?;
            let timestamp = query
                .start
                .map(|start| {
                    timestamp_after(start, t).ok_or_else(|| {
                        ApiError::Validation(format!(
                            "{} plus {} s is outside the supported date range",
                            start, t
                        ))
                    })
                })
                .transpose()?;
            Ok(TrackPoint { timestamp, sample })
        })
        .collect::<ApiResult<Vec<_>>>()?;

    Ok(Json(TrackResponse {
        name: sat.name().to_string(),
        points,
    }))
}

fn timestamp_after(start: DateTime<Utc>, elapsed_s: f64) -> Option<DateTime<Utc>> {
    let ms = (elapsed_s * 1000.0).round();
    if !(ms.abs() < i64::MAX as f64) {
        return None;
    }
    start.checked_add_signed(chrono::Duration::try_milliseconds(ms as i64)?)
}

#[utoipa::path(
    get,
    path = "/api/satellites/{name}/orbit",
    tag = "satellites",
    params(
        ("name" = String, Path, description = "Satellite name"),
        ("points" = Option<usize>, Query, description = "Number of samples around the orbit")
    ),
    responses(
        (status = 200, description = "Inertial orbit path", body = Vec<Cartesian>),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 404, description = "Unknown satellite", body = ErrorResponse)
    )
)]
pub async fn orbit(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<OrbitQuery>,
) -> ApiResult<Json<Vec<Cartesian>>> {
    let sat = state.find(&name)?;
    let points = query.points.unwrap_or(state.orbit_points);
    if points == 0 || points > MAX_ORBIT_POINTS {
        return Err(ApiError::Validation(format!(
            "points must be between 1 and {}",
            MAX_ORBIT_POINTS
        )));
    }
    Ok(Json(orbit_path(sat, points)))
}
