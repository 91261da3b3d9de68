//! Typed references between FHIR resources.
//!
//! A FHIR `Reference.reference` is a string such as `Practitioner/123`. This module turns
//! that string into a [`ParticipantRef`] carrying a closed [`ResourceKind`] and a validated
//! [`ResourceId`], so callers dispatch with a `match` instead of comparing type names.

use crate::ResourceId;

/// The kinds of resource an appointment participant can point at.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Practitioner,
    Location,
    /// Any other resource type (Patient, Device, HealthcareService, ...).
    Other(String),
}

impl ResourceKind {
    /// Parse from the FHIR resource type name. Matching is case-sensitive, as in FHIR.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "Practitioner" => ResourceKind::Practitioner,
            "Location" => ResourceKind::Location,
            other => ResourceKind::Other(other.to_string()),
        }
    }

    /// The FHIR resource type name.
    pub fn type_name(&self) -> &str {
        match self {
            ResourceKind::Practitioner => "Practitioner",
            ResourceKind::Location => "Location",
            ResourceKind::Other(name) => name,
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A reference from an appointment to one of its participants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRef {
    pub kind: ResourceKind,
    pub id: ResourceId,
}

impl ParticipantRef {
    pub fn new(kind: ResourceKind, id: ResourceId) -> Self {
        Self { kind, id }
    }

    /// Parse a literal reference string.
    ///
    /// Accepts relative (`Location/1`), versioned (`Location/1/_history/3`) and absolute
    /// (`https://host/fhir/Location/1`) forms. Returns `None` for contained references
    /// (`#loc`), URNs, and anything without a `Type/id` pair or with an invalid id.
    pub fn parse(reference: &str) -> Option<Self> {
        let reference = reference.trim();
        if reference.is_empty() || reference.starts_with('#') || reference.starts_with("urn:")
        {
            return None;
        }

        let path = reference.split(['?', '#']).next().unwrap_or("");
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        // Drop a trailing `_history/{vid}` pair.
        if segments.len() >= 4 && segments[segments.len() - 2] == "_history" {
            segments.truncate(segments.len() - 2);
        }

        let (type_name, id) = match segments.as_slice() {
            [.., type_name, id] => (*type_name, *id),
            _ => return None,
        };

        if !looks_like_type_name(type_name) {
            return None;
        }

        let id = ResourceId::new(id).ok()?;
        Some(Self::new(ResourceKind::from_type_name(type_name), id))
    }
}

impl std::fmt::Display for ParticipantRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

/// FHIR resource type names are upper camel case ASCII letters.
fn looks_like_type_name(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ResourceId {
        ResourceId::new(s).expect("valid id")
    }

    #[test]
    fn parses_relative_reference() {
        let r = ParticipantRef::parse("Practitioner/123").expect("parse");
        assert_eq!(r, ParticipantRef::new(ResourceKind::Practitioner, id("123")));
    }

    #[test]
    fn parses_versioned_reference() {
        let r = ParticipantRef::parse("Location/abc/_history/2").expect("parse");
        assert_eq!(r.kind, ResourceKind::Location);
        assert_eq!(r.id.as_str(), "abc");
    }

    #[test]
    fn parses_absolute_reference() {
        let r = ParticipantRef::parse("https://hapi.fhir.org/baseR4/Practitioner/p-9")
            .expect("parse absolute reference");
        assert_eq!(r.kind, ResourceKind::Practitioner);
        assert_eq!(r.id.as_str(), "p-9");
    }

    #[test]
    fn other_kinds_are_preserved() {
        let r = ParticipantRef::parse("Patient/example").expect("parse");
        assert_eq!(r.kind, ResourceKind::Other("Patient".into()));
        assert_eq!(r.to_string(), "Patient/example");
    }

    #[test]
    fn rejects_unresolvable_forms() {
        for raw in [
            "",
            "#contained",
            "urn:uuid:3a1f2c7e-0000-4000-8000-000000000000",
            "123",
            "practitioner/123",
            "Practitioner/",
            "Practitioner/bad id",
        ] {
            assert!(ParticipantRef::parse(raw).is_none(), "{raw:?}");
        }
    }

    #[test]
    fn kind_round_trips_through_type_name() {
        for name in ["Practitioner", "Location", "Device"] {
            assert_eq!(ResourceKind::from_type_name(name).type_name(), name);
        }
    }
}
