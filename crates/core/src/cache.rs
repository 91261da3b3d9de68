//! Read-through cache of assembled appointment views, keyed by patient id.

use fhir::ResourceId;
use moka::future::Cache as MokaCache;
use std::future::Future;
use std::sync::Arc;

use crate::config::CacheConfig;
use crate::view::AppointmentView;
use crate::RemoteError;

/// An assembled, immutable sequence of views in search order.
pub type AppointmentViews = Arc<[AppointmentView]>;

/// Owned cache from patient id to assembled views.
///
/// Concurrent misses on the same key are coalesced: exactly one initialiser runs and
/// every caller waiting on it receives its outcome. Failed initialisations are not
/// stored. Cloning is cheap and clones share storage.
#[derive(Clone)]
pub struct AppointmentCache {
    inner: MokaCache<ResourceId, AppointmentViews>,
}

impl AppointmentCache {
    pub fn new(config: &CacheConfig) -> Self {
        let mut builder = MokaCache::builder();
        if let Some(capacity) = config.max_capacity {
            builder = builder.max_capacity(capacity);
        }
        if let Some(ttl) = config.time_to_live {
            builder = builder.time_to_live(ttl);
        }
        Self {
            inner: builder.build(),
        }
    }

    /// Cache without size bound or expiry.
    pub fn unbounded() -> Self {
        Self::new(&CacheConfig::default())
    }

    pub async fn get(&self, patient: &ResourceId) -> Option<AppointmentViews> {
        self.inner.get(patient).await
    }

    /// Return the cached views for `patient`, or run `init` to produce and store them.
    pub async fn get_or_try_insert<F>(
        &self,
        patient: &ResourceId,
        init: F,
    ) -> Result<AppointmentViews, Arc<RemoteError>>
    where
        F: Future<Output = Result<AppointmentViews, RemoteError>>,
    {
        self.inner.try_get_with(patient.clone(), init).await
    }
}

impl Default for AppointmentCache {
    fn default() -> Self {
        Self::unbounded()
    }
}
