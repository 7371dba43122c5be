//! Byte fetching for URL-addressed sources.
//!
//! Adapters never open network connections themselves; they ask a [`Fetcher`]
//! for the bytes behind a location. The crate only ships [`LocalFetcher`];
//! callers that need HTTP supply their own implementation.

use std::io::ErrorKind;
use std::path::Path;

use crate::error::{AdapterError, Result};

/// Resolves a location to its raw bytes.
pub trait Fetcher: Send + Sync {
    fn fetch(&self, location: &str) -> Result<Vec<u8>>;
}

/// Reads `file://` URLs and plain paths from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFetcher;

impl Fetcher for LocalFetcher {
    fn fetch(&self, location: &str) -> Result<Vec<u8>> {
        if is_remote(location) {
            return Err(AdapterError::Unimplemented {
                component: "local fetcher",
                operation: "http(s) fetch",
            });
        }
        let path = location.strip_prefix("file://").unwrap_or(location);
        std::fs::read(Path::new(path)).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AdapterError::NotFound {
                location: location.to_string(),
            },
            _ => AdapterError::Fetch {
                location: location.to_string(),
                message: e.to_string(),
            },
        })
    }
}

/// Whether `location` is an http or https URL.
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
