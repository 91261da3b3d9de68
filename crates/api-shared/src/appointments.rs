use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One appointment as returned to API clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRes {
    /// Appointment start as sent by the FHIR server, or `null` if it has none.
    #[schema(example = "2025-01-03T09:00:00Z")]
    pub appointment_date: Option<String>,

    /// Practitioner display name, or `Unknown`.
    #[schema(example = "Dr Jane Smith")]
    pub practitioner: String,

    /// Location display name, or `Unknown`.
    #[schema(example = "Outpatient Clinic 3")]
    pub location: String,
}
