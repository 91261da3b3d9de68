use std::sync::Arc;

use api_shared::AppointmentRes;
use appointments_core::{
    AppointmentAssembler, AppointmentCache, CoreConfig, FhirClient, RemoteRecordClient,
    UNKNOWN_NAME,
};
use clap::{Parser, Subcommand};
use fhir::ResourceId;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "appointments")]
#[command(about = "Appointment lookup CLI for a FHIR R4 server")]
struct Cli {
    /// FHIR server base URL
    #[arg(long, global = true, env = "FHIR_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a patient's most recent appointments as JSON
    Fetch {
        /// Patient logical id
        patient_id: ResourceId,
    },
    /// Print a practitioner's display name
    Practitioner {
        /// Practitioner logical id
        id: ResourceId,
    },
    /// Print a location's display name
    Location {
        /// Location logical id
        id: ResourceId,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = CoreConfig::from_env_values(cli.base_url, None, None, None)?;
    let client = Arc::new(FhirClient::from_config(&cfg)?);

    match cli.command {
        Some(Commands::Fetch { patient_id }) => {
            let assembler = AppointmentAssembler::new(client, AppointmentCache::unbounded());
            let views = assembler.fetch_for(&patient_id).await?;
            let body: Vec<AppointmentRes> = views.iter().map(AppointmentRes::from).collect();
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Some(Commands::Practitioner { id }) => {
            let record = client.lookup_practitioner(&id).await?;
            println!("{}", record.display_name.as_deref().unwrap_or(UNKNOWN_NAME));
        }
        Some(Commands::Location { id }) => {
            let record = client.lookup_location(&id).await?;
            println!("{}", record.display_name.as_deref().unwrap_or(UNKNOWN_NAME));
        }
        None => {
            println!("Use 'appointments --help' for commands");
        }
    }

    Ok(())
}
