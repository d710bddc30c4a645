use std::time::Duration;

use crate::cache::Cache;
use crate::error::FetchError;

/// Cache-first HTTP fetcher.
///
/// Every fetch goes through the on-disk [`Cache`]: a hit short-circuits the
/// network entirely, a miss performs a blocking GET and stores the raw body
/// before returning it. With `offline` set, a miss is an error instead of a
/// request.
pub struct Fetcher {
    cache: Cache,
    client: reqwest::blocking::Client,
    offline: bool,
}

impl Fetcher {
    /// Request timeout for upstream fetches.
    const TIMEOUT: Duration = Duration::from_secs(30);

    /// Creates a fetcher over `cache`.
    pub fn new(cache: Cache, offline: bool) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()?;
        Ok(Self {
            cache,
            client,
            offline,
        })
    }

    /// Fetches `url`, caching the raw body under `key`.
    pub fn get(&self, key: &str, url: &str) -> Result<Vec<u8>, FetchError> {
        if let Some(cached) = self.cache.get(key)? {
            tracing::debug!(key, "cache hit");
            return Ok(cached);
        }
        if self.offline {
            return Err(FetchError::NotCached {
                key: key.to_string(),
            });
        }
        tracing::info!(url, "fetching");
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes()?.to_vec();
        self.cache.put(key, &body)?;
        Ok(body)
    }
}
