//! HTTP(S) fetching for URL-addressed sources.

use std::time::Duration;

use hds_adapters::{AdapterError, Fetcher, LocalFetcher, is_remote};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::USER_AGENT;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Fetches http(s) URLs with a blocking client; other locations are read locally.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> reqwest::Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, location: &str) -> hds_adapters::Result<Vec<u8>> {
        if !is_remote(location) {
            return LocalFetcher.fetch(location);
        }

        tracing::info!(url = location, "downloading source");
        let response = self
            .client
            .get(location)
            .header(USER_AGENT, concat!("hds/", env!("CARGO_PKG_VERSION")))
            .send()
            .map_err(|e| request_error(location, &e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND || status == StatusCode::GONE {
            return Err(AdapterError::NotFound {
                location: location.to_string(),
            });
        }
        if !status.is_success() {
            return Err(AdapterError::Fetch {
                location: location.to_string(),
                message: format!("HTTP {status}"),
            });
        }

        let body = response
            .bytes()
            .map_err(|e| request_error(location, &e))?;
        tracing::debug!(url = location, bytes = body.len(), "downloaded source");
        Ok(body.to_vec())
    }
}

fn request_error(location: &str, err: &reqwest::Error) -> AdapterError {
    if err.is_connect() || err.is_timeout() {
        AdapterError::NotFound {
            location: location.to_string(),
        }
    } else {
        AdapterError::Fetch {
            location: location.to_string(),
            message: err.to_string(),
        }
    }
}
