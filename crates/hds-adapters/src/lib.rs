//! Source adapters for the health dataset silver pipeline.
//!
//! An [`Adapter`] reads one raw source and maps it onto the canonical silver
//! schema. Adapters are looked up by key through an [`AdapterRegistry`]:
//!
//! ```ignore
//! use hds_adapters::{AdapterRegistry, SourceDescriptor};
//! use hds_model::Provenance;
//!
//! let registry = AdapterRegistry::default();
//! let descriptor = SourceDescriptor::new(Provenance::new("US", 1990, "pima"))
//!     .with_path("data/bronze/pima.csv");
//! let adapter = registry.build("pima", descriptor)?;
//! let silver = adapter.to_silver(&adapter.load_raw()?)?;
//! ```

pub mod adapter;
pub mod error;
pub mod fetch;
pub mod registry;
pub mod sources;

pub use adapter::{Adapter, SourceDescriptor};
pub use error::{AdapterError, Result};
pub use fetch::{Fetcher, LocalFetcher, is_remote};
pub use registry::{AdapterFactory, AdapterRegistry};
