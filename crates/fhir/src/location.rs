//! FHIR-aligned location wire models and translation helpers.

use crate::wire::decode_resource;
use crate::{FhirError, ResourceId};
use serde::Deserialize;

/// Domain-level carrier for a location point read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationRecord {
    pub id: Option<ResourceId>,

    /// The location's `name`; `None` if absent or blank.
    pub display_name: Option<String>,
}

/// Location resource operations.
pub struct Location;

impl Location {
    /// Parse a location resource from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError`] if the text is not JSON, does not match the wire schema, or
    /// its `resourceType` is not `Location`.
    pub fn parse(json_text: &str) -> Result<LocationRecord, FhirError> {
        let wire: LocationWire = decode_resource(json_text, "Location")?;

        Ok(LocationRecord {
            id: wire.id.and_then(|id| ResourceId::new(id).ok()),
            display_name: wire
                .name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct LocationWire {
    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_name() {
        let input = r#"{
  "resourceType": "Location",
  "id": "loc1",
  "status": "active",
  "name": "South Wing, second floor",
  "address": { "city": "Den Burg" }
}"#;
        let record = Location::parse(input).expect("parse location");
        assert_eq!(record.id.as_ref().map(|i| i.as_str()), Some("loc1"));
        assert_eq!(record.display_name.as_deref(), Some("South Wing, second floor"));
    }

    #[test]
    fn blank_name_is_none() {
        let input = r#"{"resourceType":"Location","id":"loc2","name":"   "}"#;
        assert!(Location::parse(input).expect("parse").display_name.is_none());
    }

    #[test]
    fn rejects_wrong_resource_type() {
        let input = r#"{"resourceType":"Practitioner","id":"loc3"}"#;
        let err = Location::parse(input).expect_err("should reject");
        match err {
            FhirError::InvalidInput(msg) => assert!(msg.contains("Location")),
            other => panic!("expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn wrong_resource_type_wins_over_schema_mismatch() {
        let input = r#"{"resourceType":"Practitioner","id":"dr1","name":[{"family":"Smith"}]}"#;
        let err = Location::parse(input).expect_err("should reject");
        match err {
            FhirError::InvalidInput(msg) => assert!(msg.contains("Practitioner")),
            other => panic!("expected InvalidInput error, got {other:?}"),
        }
    }

    #[test]
    fn missing_resource_type_is_a_translation_error() {
        let err = Location::parse(r#"{"id":"loc4","name":"Ward"}"#).expect_err("should reject");
        assert!(matches!(err, FhirError::Translation(_)));
    }
}
