//! Configuration for Products API

use core_config::{app_info, env_parse_optional, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Seed for the demo catalogue. Unset means a fresh random seed per start.
pub const PRODUCTS_SEED: &str = "PRODUCTS_SEED";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub products_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let products_seed = env_parse_optional(PRODUCTS_SEED)?;

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            products_seed,
        })
    }
}
