use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub search: SearchConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Profile directory for the file backend.
    pub profile_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    /// Artificial delay before directory results come back, standing in for
    /// a network round trip.
    pub delay_ms: u64,
    /// Probability that a search finds no service on the route.
    pub no_service_probability: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub otp_ttl_seconds: u64,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Defaults first, so the engine runs with no config files at all
            .set_default("storage.profile_dir", ".yatra")?
            .set_default("search.delay_ms", 1000_u64)?
            .set_default("search.no_service_probability", 0.2_f64)?
            .set_default("auth.otp_ttl_seconds", 300_u64)?
            // Optional configuration files, most specific last
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Environment overrides: `YATRA_SEARCH__DELAY_MS=0`
            .add_source(config::Environment::with_prefix("YATRA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
