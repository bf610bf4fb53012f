use axum::http::HeaderValue;

/// Which browser origins may call the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin (`CORS_ORIGINS=*`).
    Any,
    /// Only the listed origins.
    List(Vec<HeaderValue>),
}

/// Errors raised while reading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got '{value}'")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("Invalid CORS origin '{0}'")]
    InvalidCorsOrigin(String),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running the demo locally.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors: CorsPolicy,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Whether the AI endpoints wait out their simulated inference time.
    pub simulate_latency: bool,
    /// Seed for reproducible responses; entropy when unset.
    pub rng_seed: Option<u64>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `5000`    |
    /// | `CORS_ORIGINS`         | `*`       |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    /// | `SIMULATE_LATENCY`     | `true`    |
    /// | `RNG_SEED`             | unset     |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = parse_var(&lookup, "PORT", "u16")?.unwrap_or(5000);

        let cors = parse_cors(&lookup("CORS_ORIGINS").unwrap_or_else(|| "*".into()))?;

        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", "u64")?.unwrap_or(30);

        let simulate_latency = parse_var(&lookup, "SIMULATE_LATENCY", "bool")?.unwrap_or(true);

        let rng_seed = parse_var(&lookup, "RNG_SEED", "u64")?;

        Ok(Self {
            host,
            port,
            cors,
            request_timeout_secs,
            simulate_latency,
            rng_seed,
        })
    }
}

fn parse_var<F, T>(
    lookup: &F,
    name: &'static str,
    expected: &'static str,
) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                name,
                expected,
                value,
            }),
    }
}

fn parse_cors(raw: &str) -> Result<CorsPolicy, ConfigError> {
    let origins: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if origins.is_empty() || origins.contains(&"*") {
        return Ok(CorsPolicy::Any);
    }

    origins
        .into_iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidCorsOrigin(o.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsPolicy::List)
}
