//! Access to the remote FHIR record store.
//!
//! [`RemoteRecordClient`] is the seam between assembly logic and transport; the assembler
//! only ever sees this trait. [`FhirClient`] is the HTTP implementation used in production.

use async_trait::async_trait;
use fhir::{
    Appointment, AppointmentRecord, Location, LocationRecord, Practitioner, PractitionerRecord,
    ResourceId, ResourceKind, SEARCH_PAGE_SIZE,
};
use reqwest::{header::ACCEPT, Client, StatusCode};

use crate::config::CoreConfig;
use crate::constants::{FHIR_JSON_MIME, MAX_ERROR_BODY_CHARS};
use crate::{ConfigError, ConfigResult, RemoteError, RemoteResult};

/// Read-only operations against a remote record store.
#[async_trait]
pub trait RemoteRecordClient: Send + Sync {
    /// The most recent appointments of `patient`, newest first, at most ten.
    ///
    /// # Errors
    ///
    /// - [`RemoteError::Unavailable`] if the store cannot be reached
    /// - [`RemoteError::Failed`] if the store answers with a non-success status
    /// - [`RemoteError::InvalidResponse`] if the answer is not a readable Bundle
    async fn search(&self, patient: &ResourceId) -> RemoteResult<Vec<AppointmentRecord>>;

    /// Point read of a practitioner.
    ///
    /// # Errors
    ///
    /// [`RemoteError::NotFound`] if the id does not resolve; otherwise as for `search`.
    async fn lookup_practitioner(&self, id: &ResourceId) -> RemoteResult<PractitionerRecord>;

    /// Point read of a location. Same failure modes as `lookup_practitioner`.
    async fn lookup_location(&self, id: &ResourceId) -> RemoteResult<LocationRecord>;
}

/// HTTP client for a FHIR R4 server.
///
/// Stateless apart from reqwest's connection pool; cheap to clone.
#[derive(Clone, Debug)]
pub struct FhirClient {
    base_url: String,
    http: Client,
}

impl FhirClient {
    /// Build a client for the base URL and user agent in `cfg`.
    pub fn from_config(cfg: &CoreConfig) -> ConfigResult<Self> {
        let http = Client::builder()
            .user_agent(cfg.user_agent())
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            base_url: cfg.fhir_base_url().to_string(),
            http,
        })
    }

    fn resource_url(&self, kind: &ResourceKind, id: &ResourceId) -> String {
        format!("{}/{}/{}", self.base_url, kind.type_name(), id)
    }

    /// GET `url` and return the body of a successful response.
    ///
    /// Non-success statuses are returned as `Err(Failed)` with a truncated body; callers
    /// that treat some statuses specially inspect it.
    async fn get_text(&self, url: &str, query: &[(&str, String)]) -> RemoteResult<String> {
        tracing::debug!(url, ?query, "FHIR request");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, FHIR_JSON_MIME)
            .query(query)
            .send()
            .await
            .map_err(|e| RemoteError::Unavailable {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| RemoteError::Unavailable {
            url: url.to_string(),
            reason: format!("failed reading response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(RemoteError::Failed {
                url: url.to_string(),
                status: status.as_u16(),
                body: truncate_for_log(&body, MAX_ERROR_BODY_CHARS),
            });
        }

        Ok(body)
    }

    /// Point read shared by practitioner and location lookups.
    async fn read(&self, kind: ResourceKind, id: &ResourceId) -> RemoteResult<String> {
        let url = self.resource_url(&kind, id);
        match self.get_text(&url, &[]).await {
            Err(RemoteError::Failed { status, .. }) if is_missing(status) => {
                Err(RemoteError::NotFound {
                    kind,
                    id: id.clone(),
                })
            }
            other => other,
        }
    }
}

#[async_trait]
impl RemoteRecordClient for FhirClient {
    async fn search(&self, patient: &ResourceId) -> RemoteResult<Vec<AppointmentRecord>> {
        let url = format!("{}/Appointment", self.base_url);
        let query = Appointment::search_params(patient, SEARCH_PAGE_SIZE);
        let body = self.get_text(&url, &query).await?;

        Appointment::parse_search_bundle(&body)
            .map_err(|source| RemoteError::InvalidResponse { url, source })
    }

    async fn lookup_practitioner(&self, id: &ResourceId) -> RemoteResult<PractitionerRecord> {
        let body = self.read(ResourceKind::Practitioner, id).await?;
        Practitioner::parse(&body).map_err(|source| RemoteError::InvalidResponse {
            url: self.resource_url(&ResourceKind::Practitioner, id),
            source,
        })
    }

    async fn lookup_location(&self, id: &ResourceId) -> RemoteResult<LocationRecord> {
        let body = self.read(ResourceKind::Location, id).await?;
        Location::parse(&body).map_err(|source| RemoteError::InvalidResponse {
            url: self.resource_url(&ResourceKind::Location, id),
            source,
        })
    }
}

/// 404 for unknown ids, 410 for deleted resources.
fn is_missing(status: u16) -> bool {
    status == StatusCode::NOT_FOUND.as_u16() || status == StatusCode::GONE.as_u16()
}

fn truncate_for_log(input: &str, max_chars: usize) -> String {
    let mut out = String::new();
    for (idx, ch) in input.chars().enumerate() {
        if idx >= max_chars {
            out.push_str("...");
            break;
        }
        out.push(ch);
    }
    out
}
