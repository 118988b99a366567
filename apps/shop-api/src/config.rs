use core_config::{AppInfo, ConfigError, FromEnv, app_info, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Which store variables were present at startup, as reported by `/test`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatabaseEnv {
    pub url_set: bool,
    pub name_set: bool,
}

impl DatabaseEnv {
    pub fn from_env() -> Self {
        Self {
            url_set: std::env::var_os("DATABASE_URL").is_some(),
            name_set: std::env::var_os("DATABASE_NAME").is_some(),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when the connection string or database name is missing
    pub mongodb: Option<MongoConfig>,
    pub database_env: DatabaseEnv,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = optional(MongoConfig::from_env())?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            database_env: DatabaseEnv::from_env(),
            server,
            environment,
        })
    }
}

/// Treat a missing variable as "not configured" but keep parse failures fatal
fn optional<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ConfigError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_missing() => Ok(None),
        Err(e) => Err(e),
    }
}
