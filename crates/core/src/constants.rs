//! Constants used throughout the appointments core crate.

/// Public HAPI FHIR R4 test server used when no base URL is configured.
pub const DEFAULT_FHIR_BASE_URL: &str = "https://hapi.fhir.org/baseR4";

/// User-Agent sent to the FHIR server when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!("appointments/", env!("CARGO_PKG_VERSION"));

/// Placeholder for a practitioner or location that could not be resolved.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Media type requested from the FHIR server.
pub const FHIR_JSON_MIME: &str = "application/fhir+json";

/// Error bodies longer than this are truncated before being logged or surfaced.
pub const MAX_ERROR_BODY_CHARS: usize = 512;
