//! # API Shared
//!
//! Shared response types for the appointment lookup APIs.
//!
//! Contains:
//! - JSON response bodies with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `appointments-core`, `api-rest` and the CLI so every surface serialises
//! appointments identically.

pub mod appointments;
pub mod health;

pub use appointments::AppointmentRes;
pub use health::{HealthRes, HealthService};
