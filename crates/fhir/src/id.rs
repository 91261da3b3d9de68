//! Validated FHIR logical ids.
//!
//! Ids arrive from two untrusted places: the inbound REST path (`/api/appointments/{id}`)
//! and references embedded in remote resources. Both are placed into outbound request
//! URLs, so they are validated against the FHIR `id` datatype before use.

use crate::FhirError;

/// Maximum length of a FHIR logical id.
pub const MAX_ID_LEN: usize = 64;

/// A FHIR logical id.
///
/// Guarantees the FHIR `id` grammar: 1 to 64 characters drawn from `A-Z`, `a-z`, `0-9`,
/// `-` and `.`. Leading and trailing whitespace is trimmed during construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(String);

impl ResourceId {
    /// Creates a new `ResourceId` from the given input.
    ///
    /// # Errors
    ///
    /// Returns [`FhirError::InvalidId`] if the trimmed input is empty, longer than
    /// [`MAX_ID_LEN`], or contains characters outside the FHIR id alphabet.
    pub fn new(input: impl AsRef<str>) -> Result<Self, FhirError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FhirError::InvalidId("id cannot be empty".into()));
        }
        if trimmed.len() > MAX_ID_LEN {
            return Err(FhirError::InvalidId(format!(
                "id exceeds {MAX_ID_LEN} characters"
            )));
        }
        if let Some(bad) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '.'))
        {
            return Err(FhirError::InvalidId(format!(
                "id '{trimmed}' contains illegal character '{bad}'"
            )));
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ResourceId {
    type Err = FhirError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for ResourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
