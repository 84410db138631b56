use axum_helpers::JwtConfig;
use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration.
/// Composes shared config components from the `core_config` and `database`
/// libraries.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let server = ServerConfig::from_env()?;
        let jwt = JwtConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            server,
            jwt,
            environment,
        })
    }
}
