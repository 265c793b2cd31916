//! Test helpers para vortex-client.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::json;
use vortex_client::{ConfigFetcher, ConfigResponse, FetchError, PropertySource};

/// Builds a realistic response with one property source.
pub fn sample_response(application: &str, profile: &str, label: &str) -> ConfigResponse {
    let mut source = IndexMap::new();
    source.insert("app.name".to_string(), json!(application));
    source.insert("server.port".to_string(), json!(8080));

    ConfigResponse::empty(application, vec![profile.to_string()])
        .with_label(label)
        .with_property_source(PropertySource::new(
            format!("application-{profile}.yml"),
            source,
        ))
}

/// Fetcher that counts calls and always succeeds.
///
/// Each response carries the call number in `version`, so tests can tell
/// refetched entries apart from cached ones.
pub struct CountingFetcher {
    calls: AtomicU32,
}

impl CountingFetcher {
    pub fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigFetcher for CountingFetcher {
    async fn fetch(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<ConfigResponse, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(sample_response(application, profile, label).with_version(call.to_string()))
    }

    fn name(&self) -> &str {
        "counting"
    }
}

/// Fetcher whose failure mode can be toggled from the test.
pub struct SwitchableFetcher {
    calls: AtomicU32,
    failing: AtomicBool,
}

impl SwitchableFetcher {
    pub fn new() -> Self {
        Self {
            calls: AtomicU32::new(0),
            failing: AtomicBool::new(false),
        }
    }

    pub fn failing() -> Self {
        let fetcher = Self::new();
        fetcher.set_failing(true);
        fetcher
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigFetcher for SwitchableFetcher {
    async fn fetch(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<ConfigResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(FetchError::unavailable("fetcher switched to failing"));
        }

        Ok(sample_response(application, profile, label))
    }

    fn name(&self) -> &str {
        "switchable"
    }
}

/// Fetcher that blocks on a barrier until `parties` calls are in flight.
///
/// Proves that concurrent misses each reach the fetcher: if the cache
/// coalesced them, the barrier would never release.
pub struct BarrierFetcher {
    calls: AtomicU32,
    barrier: tokio::sync::Barrier,
}

impl BarrierFetcher {
    pub fn new(parties: usize) -> Self {
        Self {
            calls: AtomicU32::new(0),
            barrier: tokio::sync::Barrier::new(parties),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConfigFetcher for BarrierFetcher {
    async fn fetch(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<ConfigResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.barrier.wait().await;
        Ok(sample_response(application, profile, label))
    }

    fn name(&self) -> &str {
        "barrier"
    }
}
