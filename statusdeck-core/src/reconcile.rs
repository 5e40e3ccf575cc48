//! URL reconciliation between declared projects and monitored services.
//!
//! Project URLs and monitoring URLs are written down independently, so the
//! same site can show up as `https://www.Example.com/` in one place and
//! `example.com` in the other. Both sides are reduced to a normalized key
//! with [`normalize_url`] and matched through a [`ServiceIndex`].

use std::collections::HashMap;

use tracing::debug;

use crate::models::Service;

const SCHEMES: [&str; 2] = ["https://", "http://"];
const WWW: &str = "www.";

// ============================================================================
// Normalization
// ============================================================================

/// Reduces a URL to its comparison key.
///
/// Lowercases, then strips a leading `http://`/`https://`, a leading `www.`
/// and trailing slashes. Works on text only; malformed input is returned in
/// its stripped form rather than rejected. Idempotent.
pub fn normalize_url(url: &str) -> String {
    let lowered = url.to_lowercase();

    let mut rest = lowered.as_str();
    // Strip to a fixpoint so a second pass never finds another prefix.
    loop {
        if let Some(stripped) = SCHEMES.iter().find_map(|s| rest.strip_prefix(s)) {
            rest = stripped;
        } else if let Some(stripped) = rest.strip_prefix(WWW) {
            rest = stripped;
        } else {
            break;
        }
    }

    rest.trim_end_matches('/').to_string()
}

// ============================================================================
// Service Index
// ============================================================================

/// Services keyed by normalized URL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceIndex {
    services: HashMap<String, Service>,
}

impl ServiceIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from services in backend order.
    ///
    /// When two services normalize to the same key the later one wins.
    pub fn build<I>(services: I) -> Self
    where
        I: IntoIterator<Item = Service>,
    {
        let mut index = Self::new();
        for service in services {
            index.insert(service);
        }
        index
    }

    /// Inserts a service, replacing any service with the same key.
    pub fn insert(&mut self, service: Service) -> Option<Service> {
        let key = normalize_url(&service.url);
        let replaced = self.services.insert(key.clone(), service);
        if let Some(previous) = &replaced {
            debug!(
                key = %key,
                replaced = %previous.name,
                "Duplicate service URL, keeping the later entry"
            );
        }
        replaced
    }

    /// Looks up the service monitoring `url`, in any formatting.
    pub fn lookup(&self, url: &str) -> Option<&Service> {
        self.services.get(&normalize_url(url))
    }

    /// Returns the number of distinct keys.
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns true if the index holds no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Builds a [`ServiceIndex`] from a slice of services.
pub fn build_index(services: &[Service]) -> ServiceIndex {
    ServiceIndex::build(services.iter().cloned())
}

/// Looks up the service for `project_url` in `index`.
pub fn lookup<'a>(index: &'a ServiceIndex, project_url: &str) -> Option<&'a Service> {
    index.lookup(project_url)
}

// ============================================================================
// Tests
// ============================================================================
