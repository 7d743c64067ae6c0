use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{AnimationConfig, Config};
use crate::orbit::OrbitalElementSet;

use super::api::error::ApiError;
use super::api::satellites as satellite_handlers;
use super::api_doc::ApiDoc;

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub satellites: Arc<Vec<OrbitalElementSet>>,
    pub animation: AnimationConfig,
    pub orbit_points: usize,
}

impl AppState {
    pub fn new(config: &Config, satellites: Vec<OrbitalElementSet>) -> Self {
        Self {
            satellites: Arc::new(satellites),
            animation: config.animation.clone(),
            orbit_points: config.orbit.points,
        }
    }

    pub fn find(&self, name: &str) -> Result<&OrbitalElementSet, ApiError> {
        self.satellites
            .iter()
            .find(|s| s.name() == name)
            .ok_or_else(|| ApiError::NotFound(name.to_string()))
    }
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/satellites", get(satellite_handlers::list_satellites))
        .route(
            "/api/satellites/{name}/position",
            get(satellite_handlers::position),
        )
        .route("/api/satellites/{name}/track", get(satellite_handlers::track))
        .route("/api/satellites/{name}/orbit", get(satellite_handlers::orbit))
        // OpenAPI / Swagger
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run_server(config: Config, satellites: Vec<OrbitalElementSet>) -> std::io::Result<()> {
    let bind_addr = config.web.bind.clone();
    let state = AppState::new(&config, satellites);
    log::info!("Serving {} satellites", state.satellites.len());

    let app = router(state);

    log::info!("Starting server on {}", bind_addr);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, app).await
}
