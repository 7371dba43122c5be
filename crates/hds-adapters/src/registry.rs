//! Adapter lookup by key.
//!
//! The registry is an explicit value built once at startup and handed to
//! whoever runs the pipeline. It maps each adapter key to a constructor, so
//! building an adapter also validates its descriptor.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::adapter::{Adapter, SourceDescriptor};
use crate::error::{AdapterError, Result};
use crate::fetch::{Fetcher, LocalFetcher};
use crate::sources::{self, HttpCsvAdapter, IndiansAdapter, NhanesAdapter, PimaAdapter};

/// Constructor for one adapter kind.
pub type AdapterFactory =
    Box<dyn Fn(SourceDescriptor) -> Result<Box<dyn Adapter>> + Send + Sync>;

/// Registry of adapter constructors indexed by key.
pub struct AdapterRegistry {
    factories: BTreeMap<&'static str, AdapterFactory>,
}

impl AdapterRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Creates a registry with every built-in adapter.
    ///
    /// `fetcher` serves URL-addressed sources (`http_csv`).
    pub fn builtin(fetcher: Arc<dyn Fetcher>) -> Self {
        let mut registry = Self::new();
        registry.register(sources::pima::KIND, |descriptor| {
            Ok(Box::new(PimaAdapter::new(descriptor)?))
        });
        registry.register(sources::indians::KIND, |descriptor| {
            Ok(Box::new(IndiansAdapter::new(descriptor)?))
        });
        registry.register(sources::http_csv::KIND, move |descriptor| {
            Ok(Box::new(HttpCsvAdapter::new(descriptor, Arc::clone(&fetcher))?))
        });
        registry.register(sources::nhanes::KIND, |descriptor| {
            Ok(Box::new(NhanesAdapter::new(descriptor)))
        });
        registry
    }

    /// Registers a constructor under `kind`, replacing any previous one.
    pub fn register<F>(&mut self, kind: &'static str, factory: F)
    where
        F: Fn(SourceDescriptor) -> Result<Box<dyn Adapter>> + Send + Sync + 'static,
    {
        self.factories.insert(kind, Box::new(factory));
    }

    /// Builds the adapter registered under `kind`.
    ///
    /// # Errors
    ///
    /// [`AdapterError::UnknownAdapter`] for an unregistered key, or the
    /// adapter's own configuration error.
    pub fn build(&self, kind: &str, descriptor: SourceDescriptor) -> Result<Box<dyn Adapter>> {
        let factory = self
            .factories
            .get(kind)
            .ok_or_else(|| AdapterError::UnknownAdapter(kind.to_string()))?;
        factory(descriptor)
    }

    pub fn contains(&self, kind: &str) -> bool {
        self.factories.contains_key(kind)
    }

    /// Registered keys in sorted order.
    pub fn kinds(&self) -> Vec<&'static str> {
        self.factories.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl Default for AdapterRegistry {
    /// Built-in adapters with a local-only fetcher.
    fn default() -> Self {
        Self::builtin(Arc::new(LocalFetcher))
    }
}
