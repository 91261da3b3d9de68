//! FHIR R4 wire/boundary support for the appointment lookup service.
//!
//! This crate provides **wire models** and **translation helpers** for the JSON resources
//! returned by a remote FHIR server:
//! - `Bundle` search results containing `Appointment` resources
//! - `Practitioner` and `Location` point reads
//! - typed references between resources
//!
//! This crate focuses on:
//! - decoding FHIR JSON into small, read-only domain records
//! - validating identifiers before they are placed into request URLs
//! - turning string references (`Practitioner/123`) into a closed set of kinds
//!
//! It does NOT perform any HTTP transport; see `appointments-core` for the client.

pub mod appointment;
pub mod id;
pub mod location;
pub mod practitioner;
pub mod reference;

mod wire;

// Re-export facades
pub use appointment::Appointment;
pub use location::Location;
pub use practitioner::Practitioner;

// Re-export public domain-level types
pub use appointment::{AppointmentRecord, SEARCH_PAGE_SIZE};
pub use id::ResourceId;
pub use location::LocationRecord;
pub use practitioner::PractitionerRecord;
pub use reference::{ParticipantRef, ResourceKind};

/// Errors returned by the `fhir` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum FhirError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("translation error: {0}")]
    Translation(String),

    #[error("invalid resource id: {0}")]
    InvalidId(String),
}

/// Type alias for Results that can fail with a [`FhirError`].
pub type FhirResult<T> = Result<T, FhirError>;
