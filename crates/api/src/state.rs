use std::sync::Arc;

use heritageguard_core::catalog::SiteCatalog;
use heritageguard_core::latency::Latency;
use heritageguard_core::random::RandomSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is `Copy`).
#[derive(Clone)]
pub struct AppState {
    /// Read-only heritage site catalog, built once at startup.
    pub catalog: Arc<SiteCatalog>,
    /// Server configuration (bind address, CORS, timeouts).
    pub config: Arc<ServerConfig>,
    /// Source of per-request random generators.
    pub random: Arc<RandomSource>,
    /// Simulated inference latency strategy.
    pub latency: Latency,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            catalog: Arc::new(SiteCatalog::default()),
            random: Arc::new(RandomSource::from_seed(config.rng_seed)),
            latency: Latency::from_flag(config.simulate_latency),
            config: Arc::new(config),
        }
    }
}
