//! Assembly of denormalised appointment views for a patient.
//!
//! An appointment only carries references to its practitioner and location. The assembler
//! searches a patient's appointments, follows those references with point reads, and
//! flattens the result into [`AppointmentView`]s. Whole results are cached per patient.
//!
//! Failure policy:
//! - a failed search fails the whole request and nothing is cached
//! - a failed reference lookup is logged and the field keeps its current value

use fhir::{AppointmentRecord, ParticipantRef, ResourceId, ResourceKind};
use std::sync::Arc;

use crate::cache::{AppointmentCache, AppointmentViews};
use crate::client::RemoteRecordClient;
use crate::view::AppointmentView;
use crate::{AppointmentError, AppointmentResult, RemoteResult};

/// Produces cached appointment views for patients.
#[derive(Clone)]
pub struct AppointmentAssembler {
    client: Arc<dyn RemoteRecordClient>,
    cache: AppointmentCache,
}

impl AppointmentAssembler {
    pub fn new(client: Arc<dyn RemoteRecordClient>, cache: AppointmentCache) -> Self {
        Self { client, cache }
    }

    /// The ten most recent appointments of `patient_id`, newest first.
    ///
    /// # Errors
    ///
    /// - [`AppointmentError::InvalidPatientId`] if `patient_id` is not a valid FHIR id
    /// - [`AppointmentError::Search`] if the appointment search failed
    pub async fn fetch(&self, patient_id: &str) -> AppointmentResult<AppointmentViews> {
        let patient = ResourceId::new(patient_id).map_err(AppointmentError::InvalidPatientId)?;
        self.fetch_for(&patient).await
    }

    /// As [`fetch`](Self::fetch) for an already validated id.
    pub async fn fetch_for(&self, patient: &ResourceId) -> AppointmentResult<AppointmentViews> {
        if let Some(views) = self.cache.get(patient).await {
            tracing::debug!(%patient, "appointment cache hit");
            return Ok(views);
        }

        tracing::debug!(%patient, "appointment cache miss");
        self.cache
            .get_or_try_insert(patient, self.assemble(patient))
            .await
            .map_err(AppointmentError::Search)
    }

    async fn assemble(&self, patient: &ResourceId) -> RemoteResult<AppointmentViews> {
        let records = self.client.search(patient).await?;

        let mut views = Vec::with_capacity(records.len());
        for record in &records {
            views.push(self.assemble_view(record).await);
        }

        tracing::info!(%patient, count = views.len(), "assembled appointments");
        Ok(views.into())
    }

    /// Lookups run one at a time in participant order; a later successful lookup
    /// overwrites an earlier one of the same kind.
    async fn assemble_view(&self, record: &AppointmentRecord) -> AppointmentView {
        let mut practitioner = None;
        let mut location = None;

        for participant in &record.participants {
            match participant.kind {
                ResourceKind::Practitioner => {
                    let resolved = self
                        .client
                        .lookup_practitioner(&participant.id)
                        .await
                        .map(|p| p.display_name);
                    if let Some(name) = absorb_failure(participant, resolved) {
                        practitioner = Some(name);
                    }
                }
                ResourceKind::Location => {
                    let resolved = self
                        .client
                        .lookup_location(&participant.id)
                        .await
                        .map(|l| l.display_name);
                    if let Some(name) = absorb_failure(participant, resolved) {
                        location = Some(name);
                    }
                }
                ResourceKind::Other(_) => {}
            }
        }

        AppointmentView::new(record.start.clone(), practitioner, location)
    }
}

fn absorb_failure(
    participant: &ParticipantRef,
    resolved: RemoteResult<Option<String>>,
) -> Option<String> {
    match resolved {
        Ok(Some(name)) => Some(name),
        Ok(None) => {
            tracing::warn!(%participant, "referenced resource has no display name");
            None
        }
        Err(e) => {
            tracing::warn!(%participant, error = %e, "failed to resolve participant");
            None
        }
    }
}
