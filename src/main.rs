use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{AppState, router};
use appointments_core::{AppointmentAssembler, AppointmentCache, CoreConfig, FhirClient};

/// Main entry point for the appointments service
///
/// Resolves configuration from the environment, wires the FHIR client and cache into the
/// assembler, and serves the REST API.
///
/// # Environment Variables
/// - `FHIR_BASE_URL`: FHIR R4 server base (default: public HAPI test server)
/// - `APPOINTMENTS_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `APPOINTMENTS_CACHE_TTL_SECS`: cache entry lifetime in seconds (default: no expiry)
/// - `APPOINTMENTS_CACHE_CAPACITY`: maximum cached patients (default: unbounded)
/// - `FHIR_USER_AGENT`: User-Agent sent to the FHIR server
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - any configuration value is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("appointments_run=info".parse()?)
                .add_directive("appointments_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = CoreConfig::from_env_values(
        std::env::var("FHIR_BASE_URL").ok(),
        std::env::var("FHIR_USER_AGENT").ok(),
        std::env::var("APPOINTMENTS_CACHE_TTL_SECS").ok(),
        std::env::var("APPOINTMENTS_CACHE_CAPACITY").ok(),
    )?;
    let rest_addr =
        std::env::var("APPOINTMENTS_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());

    tracing::info!("++ Using FHIR server {}", cfg.fhir_base_url());
    tracing::info!("++ Starting appointments REST on {}", rest_addr);

    let client = FhirClient::from_config(&cfg)?;
    let cache = AppointmentCache::new(cfg.cache());
    let assembler = AppointmentAssembler::new(Arc::new(client), cache);
    let app = router(AppState::new(assembler));

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
