//! Walk-through del cache con un fetcher en memoria (sin red).
//!
//! Run with: `cargo run --example cached_fetch`

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use indexmap::IndexMap;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use vortex_client::{
    CacheConfig, CachedClient, ConfigFetcher, ConfigResponse, FetchError, PropertySource,
};

/// Fetcher de ejemplo: sirve una sola identidad desde memoria.
struct InMemoryFetcher {
    calls: AtomicU32,
}

#[async_trait]
impl ConfigFetcher for InMemoryFetcher {
    async fn fetch(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<ConfigResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if application != "myapp" {
            return Err(FetchError::not_found(application, profile, label));
        }

        let mut source = IndexMap::new();
        source.insert(
            "spring.datasource.host".to_string(),
            serde_json::json!("localhost"),
        );
        source.insert("spring.datasource.port".to_string(), serde_json::json!(5432));
        source.insert("app.debug".to_string(), serde_json::json!(true));

        Ok(ConfigResponse::empty(application, vec![profile.to_string()])
            .with_label(label)
            .with_property_source(PropertySource::new(
                format!("application-{profile}.yml"),
                source,
            )))
    }

    fn name(&self) -> &str {
        "in-memory"
    }
}

#[tokio::main]
async fn main() -> Result<(), FetchError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let fetcher = Arc::new(InMemoryFetcher {
        calls: AtomicU32::new(0),
    });
    let client = CachedClient::new(
        fetcher.clone(),
        CacheConfig::with_ttl(Duration::from_secs(300)),
    );

    // Primera llamada: va al fetcher
    let config = client.get_config("myapp", "dev", "master").await?;
    println!("fetched (1st call): {}", config.name);
    println!(
        "datasource: {}:{}",
        config.get_string("spring.datasource.host").unwrap(),
        config.get_i64("spring.datasource.port").unwrap()
    );

    // Segunda llamada: hit, el fetcher no se toca
    let config = client.get_config("myapp", "dev", "master").await?;
    println!("fetched (2nd call, from cache): {}", config.name);

    // Clear y refetch
    client.clear_cache();
    println!("cache cleared");

    let config = client.get_config("myapp", "dev", "master").await?;
    println!("fetched (3rd call, after clear): {}", config.name);

    println!(
        "fetcher calls: {}, hit rate: {:.0}%",
        fetcher.calls.load(Ordering::SeqCst),
        client.metrics().hit_rate() * 100.0
    );

    println!("\nmerged view as YAML:\n{}", config.to_yaml().unwrap());

    Ok(())
}
