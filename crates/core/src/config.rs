//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services.
//! Nothing in this crate reads environment variables; binaries read them and hand the raw
//! values to the `*_from_env_value` helpers below.

use crate::constants::{DEFAULT_FHIR_BASE_URL, DEFAULT_USER_AGENT};
use crate::{ConfigError, ConfigResult};
use std::time::Duration;

/// Cache sizing and expiry.
///
/// Both limits are optional. With neither set, entries live for the lifetime of the
/// process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheConfig {
    pub time_to_live: Option<Duration>,
    pub max_capacity: Option<u64>,
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    fhir_base_url: String,
    user_agent: String,
    cache: CacheConfig,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The base URL must be an absolute `http` or `https` URL. A trailing `/` is removed so
    /// resource paths can be appended uniformly.
    pub fn new(fhir_base_url: &str, user_agent: &str, cache: CacheConfig) -> ConfigResult<Self> {
        let trimmed = fhir_base_url.trim().trim_end_matches('/');
        let invalid = |reason: &str| ConfigError::InvalidBaseUrl {
            url: fhir_base_url.to_string(),
            reason: reason.to_string(),
        };

        if trimmed.is_empty() {
            return Err(invalid("cannot be empty"));
        }
        let parsed = reqwest::Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("must not contain a query or fragment"));
        }

        if user_agent.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                name: "user_agent",
                reason: "cannot be empty".into(),
            });
        }

        Ok(Self {
            fhir_base_url: trimmed.to_string(),
            user_agent: user_agent.trim().to_string(),
            cache,
        })
    }

    /// Build a configuration from raw environment values, applying defaults for anything
    /// unset or blank.
    pub fn from_env_values(
        fhir_base_url: Option<String>,
        user_agent: Option<String>,
        cache_ttl_secs: Option<String>,
        cache_capacity: Option<String>,
    ) -> ConfigResult<Self> {
        let base_url = non_blank(fhir_base_url).unwrap_or_else(|| DEFAULT_FHIR_BASE_URL.into());
        let user_agent = non_blank(user_agent).unwrap_or_else(|| DEFAULT_USER_AGENT.into());
        let cache = CacheConfig {
            time_to_live: cache_ttl_from_env_value(cache_ttl_secs)?,
            max_capacity: cache_capacity_from_env_value(cache_capacity)?,
        };
        Self::new(&base_url, &user_agent, cache)
    }

    pub fn fhir_base_url(&self) -> &str {
        &self.fhir_base_url
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn cache(&self) -> &CacheConfig {
        &self.cache
    }
}

/// Parse the cache time-to-live (whole seconds) from an optional string value.
///
/// `None` or blank means "no expiry". Zero is rejected: it would make the cache useless.
pub fn cache_ttl_from_env_value(value: Option<String>) -> ConfigResult<Option<Duration>> {
    parse_positive(value, "APPOINTMENTS_CACHE_TTL_SECS").map(|v| v.map(Duration::from_secs))
}

/// Parse the maximum number of cached patients from an optional string value.
///
/// `None` or blank means "unbounded".
pub fn cache_capacity_from_env_value(value: Option<String>) -> ConfigResult<Option<u64>> {
    parse_positive(value, "APPOINTMENTS_CACHE_CAPACITY")
}

fn parse_positive(value: Option<String>, name: &'static str) -> ConfigResult<Option<u64>> {
    let Some(value) = non_blank(value) else {
        return Ok(None);
    };
    let parsed = value.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
        name,
        reason: format!("'{value}' is not a whole number: {e}"),
    })?;
    if parsed == 0 {
        return Err(ConfigError::InvalidValue {
            name,
            reason: "must be greater than zero".into(),
        });
    }
    Ok(Some(parsed))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = CoreConfig::from_env_values(None, None, None, None).expect("defaults");
        assert_eq!(cfg.fhir_base_url(), DEFAULT_FHIR_BASE_URL);
        assert_eq!(cfg.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(cfg.cache(), &CacheConfig::default());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let cfg = CoreConfig::from_env_values(
            Some("  ".into()),
            Some("".into()),
            Some(" ".into()),
            Some("".into()),
        )
        .expect("defaults");
        assert_eq!(cfg.fhir_base_url(), DEFAULT_FHIR_BASE_URL);
        assert!(cfg.cache().time_to_live.is_none());
        assert!(cfg.cache().max_capacity.is_none());
    }

    #[test]
    fn trailing_slash_is_removed() {
        let cfg = CoreConfig::new("http://localhost:8080/fhir/", "ua", CacheConfig::default())
            .expect("valid");
        assert_eq!(cfg.fhir_base_url(), "http://localhost:8080/fhir");
    }

    #[test]
    fn rejects_bad_base_urls() {
        for url in ["", "not a url", "ftp://example.org/fhir", "https://x/fhir?a=b"] {
            let err = CoreConfig::new(url, "ua", CacheConfig::default()).expect_err(url);
            assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }), "{url}");
        }
    }

    #[test]
    fn parses_cache_limits() {
        assert_eq!(
            cache_ttl_from_env_value(Some("300".into())).expect("ttl"),
            Some(Duration::from_secs(300))
        );
        assert_eq!(
            cache_capacity_from_env_value(Some(" 1000 ".into())).expect("capacity"),
            Some(1000)
        );
    }

    #[test]
    fn rejects_zero_and_garbage_cache_limits() {
        assert!(cache_ttl_from_env_value(Some("0".into())).is_err());
        assert!(cache_ttl_from_env_value(Some("5m".into())).is_err());
        match cache_capacity_from_env_value(Some("-1".into())) {
            Err(ConfigError::InvalidValue { name, .. }) => {
                assert_eq!(name, "APPOINTMENTS_CACHE_CAPACITY")
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }
}
