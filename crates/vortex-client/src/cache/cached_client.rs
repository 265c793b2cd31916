//! Read-through TTL cache over a configuration fetcher.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info};

use crate::cache::keys::CacheKey;
use crate::error::FetchError;
use crate::fetcher::ConfigFetcher;
use crate::metrics::CacheMetrics;
use vortex_client_core::ConfigResponse;

/// TTL aplicado cuando la configuracion no especifica uno (5 minutos).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Configuracion del cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Tiempo de vida de cada entry. `Duration::ZERO` usa el default.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl: DEFAULT_TTL }
    }
}

impl CacheConfig {
    /// Creates a config with the given TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl }
    }
}

/// One cached configuration with its expiry instant.
#[derive(Debug, Clone)]
struct CacheEntry {
    response: Arc<ConfigResponse>,
    expires_at: Instant,
}

impl CacheEntry {
    /// An entry is live strictly before its expiry instant.
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// Cache TTL read-through delante de un [`ConfigFetcher`].
///
/// Live entries are served from memory without touching the fetcher; a
/// miss or an expired entry triggers a fetch whose result overwrites the
/// entry with a fresh expiry (`now + ttl`). Fetch errors propagate
/// unchanged and never touch the store: nothing is cached for the key and
/// an already-expired entry stays where it is until overwritten or
/// explicitly cleared.
///
/// The fetch happens outside any lock. Concurrent misses for the same key
/// each invoke the fetcher independently and each overwrite the entry;
/// there is no single-flight deduplication. Expired entries are reaped
/// lazily, on the next successful refresh of the same key; there is no
/// background sweep.
///
/// Cloning the client is cheap and clones share the same store.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use vortex_client::{CacheConfig, CachedClient};
/// # use vortex_client::{ConfigFetcher, ConfigResponse, FetchError};
/// # struct HttpFetcher;
/// # #[async_trait::async_trait]
/// # impl ConfigFetcher for HttpFetcher {
/// #     async fn fetch(&self, a: &str, p: &str, _l: &str) -> Result<ConfigResponse, FetchError> {
/// #         Ok(ConfigResponse::empty(a, vec![p.to_string()]))
/// #     }
/// #     fn name(&self) -> &str { "http" }
/// # }
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), FetchError> {
/// let client = CachedClient::new(Arc::new(HttpFetcher), CacheConfig::default());
///
/// let config = client.get_config("myapp", "dev", "master").await?;
/// println!("fetched {}", config.name);
///
/// // Forzar refresh en el proximo acceso
/// client.invalidate_cache("myapp", "dev", "master");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CachedClient {
    fetcher: Arc<dyn ConfigFetcher>,
    entries: Arc<RwLock<HashMap<CacheKey, CacheEntry>>>,
    ttl: Duration,
    name: String,
    metrics: CacheMetrics,
}

impl CachedClient {
    /// Crea un nuevo cache delante del fetcher dado.
    ///
    /// Un TTL de cero en la configuracion se reemplaza por
    /// [`DEFAULT_TTL`]. La construccion nunca falla.
    pub fn new(fetcher: Arc<dyn ConfigFetcher>, config: CacheConfig) -> Self {
        let ttl = if config.ttl.is_zero() {
            DEFAULT_TTL
        } else {
            config.ttl
        };
        let name = format!("cached-{}", fetcher.name());

        Self {
            fetcher,
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
            name,
            metrics: CacheMetrics::new(),
        }
    }

    /// Crea un cache con el TTL por defecto (5 minutos).
    pub fn with_default_ttl(fetcher: Arc<dyn ConfigFetcher>) -> Self {
        Self::new(fetcher, CacheConfig::default())
    }

    /// Obtiene la configuracion para la tripleta dada.
    ///
    /// Devuelve la entry cacheada si sigue viva; si no, consulta el
    /// fetcher, guarda el resultado con expiracion `now + ttl` y lo
    /// devuelve. Errores del fetcher se propagan sin modificar y no
    /// alteran el store.
    pub async fn get_config(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<Arc<ConfigResponse>, FetchError> {
        let key = CacheKey::new(application, profile, label);

        if let Some(response) = self.lookup_live(&key) {
            debug!(key = %key, "cache hit");
            self.metrics.record_hit();
            return Ok(response);
        }

        self.metrics.record_miss();
        debug!(key = %key, fetcher = self.fetcher.name(), "cache miss, fetching");

        // Fetch fuera del lock: misses concurrentes para la misma key
        // llaman al fetcher cada uno por su cuenta y el ultimo write gana.
        let start = Instant::now();
        let response = self.fetcher.fetch(application, profile, label).await?;
        self.metrics
            .record_operation_duration("fetch", start.elapsed());

        let response = Arc::new(response);
        let entry = CacheEntry {
            response: Arc::clone(&response),
            expires_at: Instant::now() + self.ttl,
        };

        let count = {
            let mut entries = self.entries.write();
            entries.insert(key, entry);
            entries.len()
        };
        self.metrics.update_entry_count(count as u64);

        Ok(response)
    }

    /// Vacia el cache por completo.
    ///
    /// Reemplaza el store por uno vacio de forma atomica. Fetches ya en
    /// vuelo no se ven afectados: sus resultados se escribiran igualmente
    /// al llegar.
    pub fn clear_cache(&self) {
        {
            let mut entries = self.entries.write();
            *entries = HashMap::new();
        }
        self.metrics.record_invalidation("clear");
        self.metrics.update_entry_count(0);

        info!("cache cleared");
    }

    /// Invalida la entry para la tripleta dada, si existe.
    ///
    /// No afecta a otras keys; es un no-op si la key no esta presente.
    pub fn invalidate_cache(&self, application: &str, profile: &str, label: &str) {
        let key = CacheKey::new(application, profile, label);

        let (removed, count) = {
            let mut entries = self.entries.write();
            let removed = entries.remove(&key).is_some();
            (removed, entries.len())
        };

        if removed {
            self.metrics.record_invalidation("key");
            self.metrics.update_entry_count(count as u64);
            info!(key = %key, "cache entry invalidated");
        } else {
            debug!(key = %key, "invalidation for absent key ignored");
        }
    }

    /// Retorna el numero de entries en el store, expiradas incluidas.
    pub fn entry_count(&self) -> usize {
        self.entries.read().len()
    }

    /// Retorna el TTL efectivo del cache.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Retorna las metricas para acceso externo.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// Busca una entry viva bajo la key, sin tocar el fetcher.
    fn lookup_live(&self, key: &CacheKey) -> Option<Arc<ConfigResponse>> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;

        entry
            .is_live(Instant::now())
            .then(|| Arc::clone(&entry.response))
    }
}

/// Un cache es a su vez un fetcher, por lo que puede ocupar el lugar de
/// cualquier [`ConfigFetcher`] (composicion, dobles de test).
#[async_trait]
impl ConfigFetcher for CachedClient {
    async fn fetch(
        &self,
        application: &str,
        profile: &str,
        label: &str,
    ) -> Result<ConfigResponse, FetchError> {
        let response = self.get_config(application, profile, label).await?;
        Ok((*response).clone())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
