//! FHIR-aligned appointment wire models and translation helpers.
//!
//! Responsibilities:
//! - Describe the search the service issues against `Appointment`
//! - Decode a `searchset` Bundle into [`AppointmentRecord`]s, preserving server order
//! - Extract typed participant references from each appointment
//!
//! Notes:
//! - Wire structs accept unknown fields; remote servers return far more than is read here
//! - Non-`Appointment` entries (e.g. an `OperationOutcome` in `outcome` mode) are skipped

use crate::wire::{decode_resource, decode_value};
use crate::{FhirError, ParticipantRef, ResourceId};
use serde::Deserialize;

/// Number of appointments requested per search.
pub const SEARCH_PAGE_SIZE: usize = 10;

// ============================================================================
// Public domain-level types
// ============================================================================

/// Domain-level carrier for one appointment returned by a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppointmentRecord {
    /// Server-assigned logical id, when present and valid.
    pub id: Option<ResourceId>,

    /// Start instant exactly as sent by the server (FHIR `instant` string).
    pub start: Option<String>,

    /// Participant actors in the order they appear on the resource.
    pub participants: Vec<ParticipantRef>,
}

// ============================================================================
// Public Appointment operations
// ============================================================================

/// Appointment resource operations.
///
/// This is a zero-sized type used for namespacing appointment-related operations.
pub struct Appointment;

impl Appointment {
    /// Query parameters for "the most recent appointments of `patient`".
    ///
    /// Results are sorted by date descending and capped at `count`.
    pub fn search_params(patient: &ResourceId, count: usize) -> Vec<(&'static str, String)> {
        vec![
            ("patient", patient.to_string()),
            ("_sort", "-date".to_string()),
            ("_count", count.to_string()),
        ]
    }

    /// Parse a search result Bundle into appointment records.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError`] if:
    /// - the text is not JSON,
    /// - the document is not a `Bundle`,
    /// - an `Appointment` entry does not match the wire schema.
    pub fn parse_search_bundle(json_text: &str) -> Result<Vec<AppointmentRecord>, FhirError> {
        let bundle: BundleWire = decode_resource(json_text, "Bundle")?;

        let mut records = Vec::with_capacity(bundle.entry.len());
        for (index, entry) in bundle.entry.into_iter().enumerate() {
            let Some(resource) = entry.resource else {
                continue;
            };
            let is_appointment = resource
                .get("resourceType")
                .and_then(|v| v.as_str())
                .is_some_and(|t| t == "Appointment");
            if !is_appointment {
                continue;
            }

            let wire: AppointmentWire =
                decode_value(resource, &format!("Bundle entry[{index}] Appointment"))?;
            records.push(wire_to_domain(wire));
        }

        Ok(records)
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Debug, Deserialize)]
struct BundleWire {
    #[serde(default)]
    entry: Vec<BundleEntryWire>,
}

#[derive(Debug, Deserialize)]
struct BundleEntryWire {
    #[serde(default)]
    resource: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct AppointmentWire {
    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    start: Option<String>,

    #[serde(default)]
    participant: Vec<ParticipantWire>,
}

#[derive(Debug, Deserialize)]
struct ParticipantWire {
    #[serde(default)]
    actor: Option<ReferenceWire>,
}

#[derive(Debug, Deserialize)]
struct ReferenceWire {
    #[serde(default)]
    reference: Option<String>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn wire_to_domain(wire: AppointmentWire) -> AppointmentRecord {
    let participants = wire
        .participant
        .into_iter()
        .filter_map(|p| p.actor?.reference)
        .filter_map(|r| ParticipantRef::parse(&r))
        .collect();

    AppointmentRecord {
        id: wire.id.and_then(|id| ResourceId::new(id).ok()),
        start: wire.start,
        participants,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResourceKind;

    const SEARCHSET: &str = r#"{
  "resourceType": "Bundle",
  "type": "searchset",
  "total": 2,
  "link": [{ "relation": "self", "url": "https://example.org/Appointment?patient=p1" }],
  "entry": [
    {
      "fullUrl": "https://example.org/Appointment/a2",
      "resource": {
        "resourceType": "Appointment",
        "id": "a2",
        "status": "booked",
        "start": "2025-01-02T09:00:00Z",
        "participant": [
          { "actor": { "reference": "Patient/p1" }, "status": "accepted" },
          { "actor": { "reference": "Practitioner/dr1", "display": "Dr One" } },
          { "actor": { "reference": "Location/loc1" } }
        ]
      },
      "search": { "mode": "match" }
    },
    {
      "resource": {
        "resourceType": "Appointment",
        "id": "a1",
        "start": "2025-01-01T09:00:00Z"
      }
    }
  ]
}"#;

    #[test]
    fn parses_searchset_in_server_order() {
        let records = Appointment::parse_search_bundle(SEARCHSET).expect("parse bundle");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].start.as_deref(), Some("2025-01-02T09:00:00Z"));
        assert_eq!(records[1].start.as_deref(), Some("2025-01-01T09:00:00Z"));
        assert_eq!(records[0].id.as_ref().map(|i| i.as_str()), Some("a2"));
    }

    #[test]
    fn extracts_participants_in_order() {
        let records = Appointment::parse_search_bundle(SEARCHSET).expect("parse bundle");
        let kinds: Vec<_> = records[0].participants.iter().map(|p| p.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ResourceKind::Other("Patient".into()),
                ResourceKind::Practitioner,
                ResourceKind::Location
            ]
        );
        assert!(records[1].participants.is_empty());
    }

    #[test]
    fn empty_bundle_yields_no_records() {
        let input = r#"{"resourceType":"Bundle","type":"searchset","total":0}"#;
        let records = Appointment::parse_search_bundle(input).expect("parse empty bundle");
        assert!(records.is_empty());
    }

    #[test]
    fn skips_non_appointment_entries_and_actorless_participants() {
        let input = r##"{
  "resourceType": "Bundle",
  "entry": [
    { "resource": { "resourceType": "OperationOutcome", "issue": [] }, "search": { "mode": "outcome" } },
    { "resource": {
        "resourceType": "Appointment",
        "participant": [
          { "type": [{ "text": "no actor" }] },
          { "actor": { "display": "display only" } },
          { "actor": { "reference": "#contained" } },
          { "actor": { "reference": "Location/x" } }
        ]
    } },
    { "fullUrl": "urn:uuid:no-resource" }
  ]
}"##;
        let records = Appointment::parse_search_bundle(input).expect("parse bundle");
        assert_eq!(records.len(), 1);
        assert!(records[0].id.is_none());
        assert!(records[0].start.is_none());
        assert_eq!(records[0].participants.len(), 1);
        assert_eq!(records[0].participants[0].kind, ResourceKind::Location);
    }

    #[test]
    fn rejects_non_bundle_document() {
        let input = r#"{"resourceType":"OperationOutcome","issue":[]}"#;
        let err = Appointment::parse_search_bundle(input).expect_err("should reject");
        match err {
            FhirError::InvalidInput(msg) => assert!(msg.contains("OperationOutcome")),
            other => panic!("expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn reports_path_of_wrong_types() {
        let input = r#"{
  "resourceType": "Bundle",
  "entry": [ { "resource": { "resourceType": "Appointment", "participant": "nope" } } ]
}"#;
        let err = Appointment::parse_search_bundle(input).expect_err("should reject");
        match err {
            FhirError::Translation(msg) => {
                assert!(msg.contains("entry[0]"));
                assert!(msg.contains("participant"));
            }
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_text_that_is_not_json() {
        let err = Appointment::parse_search_bundle("<html>502</html>").expect_err("not json");
        assert!(matches!(err, FhirError::InvalidJson(_)));
    }

    #[test]
    fn search_params_sort_newest_first_and_cap_results() {
        let patient = ResourceId::new("example").expect("valid id");
        let params = Appointment::search_params(&patient, SEARCH_PAGE_SIZE);
        assert_eq!(
            params,
            vec![
                ("patient", "example".to_string()),
                ("_sort", "-date".to_string()),
                ("_count", "10".to_string()),
            ]
        );
    }
}
