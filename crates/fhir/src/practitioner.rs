//! FHIR-aligned practitioner wire models and translation helpers.
//!
//! Only the identity and the first `name` entry are read. The display name is rendered
//! as a single string: the name's `text` when present, otherwise its prefixes, given
//! names, family name and suffixes joined by single spaces.

use crate::wire::decode_resource;
use crate::{FhirError, ResourceId};
use serde::Deserialize;

// ============================================================================
// Public domain-level types
// ============================================================================

/// Domain-level carrier for a practitioner point read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PractitionerRecord {
    pub id: Option<ResourceId>,

    /// First name entry rendered as a single string; `None` if the resource has no
    /// usable name.
    pub display_name: Option<String>,
}

// ============================================================================
// Public Practitioner operations
// ============================================================================

/// Practitioner resource operations.
pub struct Practitioner;

impl Practitioner {
    /// Parse a practitioner resource from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError`] if the text is not JSON, does not match the wire schema, or
    /// its `resourceType` is not `Practitioner`.
    pub fn parse(json_text: &str) -> Result<PractitionerRecord, FhirError> {
        let wire: PractitionerWire = decode_resource(json_text, "Practitioner")?;

        Ok(PractitionerRecord {
            id: wire.id.and_then(|id| ResourceId::new(id).ok()),
            display_name: wire.name.first().and_then(HumanNameWire::as_single_string),
        })
    }
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Debug, Deserialize)]
struct PractitionerWire {
    #[serde(default)]
    id: Option<String>,

    #[serde(default)]
    name: Vec<HumanNameWire>,
}

#[derive(Debug, Deserialize)]
struct HumanNameWire {
    #[serde(default)]
    text: Option<String>,

    #[serde(default)]
    family: Option<String>,

    #[serde(default)]
    given: Vec<String>,

    #[serde(default)]
    prefix: Vec<String>,

    #[serde(default)]
    suffix: Vec<String>,
}

impl HumanNameWire {
    fn as_single_string(&self) -> Option<String> {
        if let Some(text) = self.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            return Some(text.to_string());
        }

        let joined = self
            .prefix
            .iter()
            .chain(self.given.iter())
            .chain(self.family.iter())
            .chain(self.suffix.iter())
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if joined.is_empty() {
            None
        } else {
            Some(joined)
        }
    }
}
