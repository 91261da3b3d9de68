//! Shared decoding helpers for FHIR JSON wire models.

use crate::{FhirError, FhirResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Decode a single FHIR resource of type `expected` from `json_text`.
///
/// The `resourceType` discriminator is checked before the body is matched against the
/// wire schema, so a resource of the wrong type is always [`FhirError::InvalidInput`].
/// Schema mismatches go through `serde_path_to_error` and name the failing field
/// (e.g. `name[0].given`). Text that is not JSON is [`FhirError::InvalidJson`].
pub(crate) fn decode_resource<T: DeserializeOwned>(
    json_text: &str,
    expected: &str,
) -> FhirResult<T> {
    let value: serde_json::Value = serde_json::from_str(json_text)?;

    let header: ResourceHeader = serde_path_to_error::deserialize(&value).map_err(|err| {
        let path = err.path().to_string();
        schema_mismatch(expected, &path, err.inner())
    })?;
    expect_resource_type(&header.resource_type, expected)?;

    decode_value(value, expected)
}

/// Decode an already-parsed JSON value into a wire struct.
pub(crate) fn decode_value<T: DeserializeOwned>(
    value: serde_json::Value,
    label: &str,
) -> FhirResult<T> {
    serde_path_to_error::deserialize::<_, T>(value).map_err(|err| {
        let path = err.path().to_string();
        schema_mismatch(label, &path, err.inner())
    })
}

#[derive(Debug, Deserialize)]
struct ResourceHeader {
    #[serde(rename = "resourceType")]
    resource_type: String,
}

fn expect_resource_type(actual: &str, expected: &str) -> FhirResult<()> {
    if actual != expected {
        return Err(FhirError::InvalidInput(format!(
            "Expected resourceType '{expected}', got '{actual}'"
        )));
    }
    Ok(())
}

fn schema_mismatch(label: &str, path: &str, source: &serde_json::Error) -> FhirError {
    let path = if path.is_empty() || path == "." {
        "<root>"
    } else {
        path
    };
    FhirError::Translation(format!("{label} schema mismatch at {path}: {source}"))
}
