use crate::constants::UNKNOWN_NAME;

/// Denormalised view of one appointment: when, with whom, where.
///
/// Immutable once built. Names default to [`UNKNOWN_NAME`] when the reference is absent
/// or could not be resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentView {
    appointment_date: Option<String>,
    practitioner: String,
    location: String,
}

impl AppointmentView {
    pub fn new(
        appointment_date: Option<String>,
        practitioner: Option<String>,
        location: Option<String>,
    ) -> Self {
        Self {
            appointment_date,
            practitioner: practitioner.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
            location: location.unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        }
    }

    /// Start instant as sent by the FHIR server; `None` if the appointment has no start.
    pub fn appointment_date(&self) -> Option<&str> {
        self.appointment_date.as_deref()
    }

    pub fn practitioner(&self) -> &str {
        &self.practitioner
    }

    pub fn location(&self) -> &str {
        &self.location
    }
}

impl From<&AppointmentView> for api_shared::AppointmentRes {
    fn from(view: &AppointmentView) -> Self {
        api_shared::AppointmentRes {
            appointment_date: view.appointment_date.clone(),
            practitioner: view.practitioner.clone(),
            location: view.location.clone(),
        }
    }
}
