use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Health check response body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Simple health service shared by the API surfaces.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Report the service as alive. Does not contact the FHIR server.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "Appointments service is alive".into(),
        }
    }
}
