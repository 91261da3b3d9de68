//! # Appointments Core
//!
//! Core business logic for the appointment lookup service.
//!
//! This crate contains:
//! - [`RemoteRecordClient`], the read-only seam to a remote FHIR server, and its HTTP
//!   implementation [`FhirClient`]
//! - [`AppointmentAssembler`], which turns a patient's appointments into denormalised
//!   [`AppointmentView`]s behind a per-patient read-through cache
//! - startup configuration ([`CoreConfig`])
//!
//! **No API concerns**: HTTP servers, routing and status codes belong in `api-rest`.

pub mod assembler;
pub mod cache;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod view;

pub use assembler::AppointmentAssembler;
pub use cache::{AppointmentCache, AppointmentViews};
pub use client::{FhirClient, RemoteRecordClient};
pub use config::{CacheConfig, CoreConfig};
pub use constants::{DEFAULT_FHIR_BASE_URL, UNKNOWN_NAME};
pub use error::{
    AppointmentError, AppointmentResult, ConfigError, ConfigResult, RemoteError, RemoteResult,
};
pub use view::AppointmentView;
