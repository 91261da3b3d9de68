//! # API REST
//!
//! REST API for the appointment lookup service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! The binary owns the listener; this crate only builds the [`Router`].

#![warn(rust_2018_idioms)]

use api_shared::{AppointmentRes, HealthRes, HealthService};
use appointments_core::{AppointmentAssembler, AppointmentError, RemoteError};
use axum::{
    extract::{Path as AxumPath, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Application state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    assembler: AppointmentAssembler,
}

impl AppState {
    pub fn new(assembler: AppointmentAssembler) -> Self {
        Self { assembler }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, list_appointments),
    components(schemas(HealthRes, AppointmentRes))
)]
pub struct ApiDoc;

/// Build the application router with Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/appointments/:patient_id", get(list_appointments))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Liveness check. Does not contact the FHIR server.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/api/appointments/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "FHIR logical id of the patient")
    ),
    responses(
        (status = 200, description = "Up to ten most recent appointments, newest first", body = [AppointmentRes]),
        (status = 400, description = "Invalid patient id"),
        (status = 502, description = "FHIR server returned an error or an unreadable response"),
        (status = 503, description = "FHIR server unreachable")
    )
)]
/// List a patient's most recent appointments
///
/// Results are served from the per-patient cache when present; otherwise the
/// appointments are searched on the FHIR server and their practitioner and location
/// references resolved to display names.
///
/// # Errors
/// Returns:
/// - `400 Bad Request` if the patient id is not a valid FHIR id,
/// - `502 Bad Gateway` if the FHIR server answered the search with an error,
/// - `503 Service Unavailable` if the FHIR server could not be reached.
#[axum::debug_handler]
async fn list_appointments(
    State(state): State<AppState>,
    AxumPath(patient_id): AxumPath<String>,
) -> Result<Json<Vec<AppointmentRes>>, (StatusCode, &'static str)> {
    match state.assembler.fetch(&patient_id).await {
        Ok(views) => Ok(Json(views.iter().map(AppointmentRes::from).collect())),
        Err(e) => {
            let (status, message) = error_response(&e);
            if status.is_server_error() {
                tracing::error!("List appointments error: {:?}", e);
            } else {
                tracing::warn!("List appointments rejected: {}", e);
            }
            Err((status, message))
        }
    }
}

fn error_response(err: &AppointmentError) -> (StatusCode, &'static str) {
    match err.remote() {
        None => (StatusCode::BAD_REQUEST, "Invalid patient id"),
        Some(RemoteError::Unavailable { .. }) => {
            (StatusCode::SERVICE_UNAVAILABLE, "FHIR server unavailable")
        }
        Some(
            RemoteError::Failed { .. }
            | RemoteError::InvalidResponse { .. }
            | RemoteError::NotFound { .. },
        ) => (StatusCode::BAD_GATEWAY, "FHIR server error"),
    }
}
