use fhir::{FhirError, ResourceId, ResourceKind};
use std::sync::Arc;

/// Failures talking to the remote FHIR server.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    #[error("FHIR server unreachable at {url}: {reason}")]
    Unavailable { url: String, reason: String },

    #[error("FHIR server returned HTTP {status} for {url}: {body}")]
    Failed {
        url: String,
        status: u16,
        body: String,
    },

    #[error("{kind}/{id} not found")]
    NotFound { kind: ResourceKind, id: ResourceId },

    #[error("invalid response from {url}: {source}")]
    InvalidResponse {
        url: String,
        #[source]
        source: FhirError,
    },
}

pub type RemoteResult<T> = std::result::Result<T, RemoteError>;

/// Failures surfaced by `AppointmentAssembler::fetch`.
#[derive(Debug, thiserror::Error)]
pub enum AppointmentError {
    #[error("invalid patient id: {0}")]
    InvalidPatientId(#[source] FhirError),

    /// The appointment search failed. Shared because every caller waiting on the same
    /// in-flight assembly receives the same failure.
    #[error("appointment search failed: {0}")]
    Search(#[source] Arc<RemoteError>),
}

impl AppointmentError {
    /// The underlying remote failure, if this error came from the FHIR server.
    pub fn remote(&self) -> Option<&RemoteError> {
        match self {
            AppointmentError::Search(e) => Some(e),
            AppointmentError::InvalidPatientId(_) => None,
        }
    }
}

pub type AppointmentResult<T> = std::result::Result<T, AppointmentError>;

/// Invalid startup configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid FHIR base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
