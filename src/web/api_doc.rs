use utoipa::OpenApi;

use super::api::error::ErrorResponse;
use super::api::satellites::{SatelliteResponse, TrackPoint, TrackResponse};
use crate::orbit::{Cartesian, Geodetic, PositionSample};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::satellites::list_satellites,
        super::api::satellites::position,
        super::api::satellites::track,
        super::api::satellites::orbit,
    ),
    components(
        schemas(
            SatelliteResponse,
            TrackPoint,
            TrackResponse,
            ErrorResponse,
            Cartesian,
            Geodetic,
            PositionSample,
        )
    ),
    info(
        title = "Orbit-O-Mat API",
        description = "Two-body orbit propagation and ground tracks for TLE catalogs",
        version = "0.1.0"
    ),
    tags(
        (name = "satellites", description = "Element sets, positions and ground tracks")
    )
)]
pub struct ApiDoc;
