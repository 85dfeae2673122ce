#[cfg(feature = "ssr")]
mod config_impl {
    use leptos::logging::log;
    use leptos::LeptosOptions;
    use thiserror::Error;

    pub const DATABASE_PATH_VAR: &str = "CARNUM_DATABASE_PATH";
    pub const DEFAULT_DATABASE_PATH: &str = "carnum.db";

    #[derive(Error, Debug)]
    pub enum ConfigError {
        #[error("Leptos configuration error: {0}")]
        Leptos(String),
    }

    /// Server settings: the Leptos site options plus our own environment knobs.
    #[derive(Debug, Clone)]
    pub struct ServerConfig {
        pub leptos_options: LeptosOptions,
        pub database_path: String,
    }

    impl ServerConfig {
        /// Loads `.env` if present, then reads the Leptos configuration
        /// (`[package.metadata.leptos]`, overridable with `LEPTOS_*`).
        pub async fn load() -> Result<Self, ConfigError> {
            if let Ok(path) = dotenvy::dotenv() {
                log!("[CONFIG] Loaded environment from {}", path.display());
            }
            let conf = leptos::get_configuration(None)
                .await
                .map_err(|e| ConfigError::Leptos(e.to_string()))?;
            Ok(Self {
                leptos_options: conf.leptos_options,
                database_path: database_path_from(std::env::var(DATABASE_PATH_VAR).ok()),
            })
        }
    }

    fn database_path_from(value: Option<String>) -> String {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string())
    }

}

#[cfg(feature = "ssr")]
pub use config_impl::{ConfigError, ServerConfig, DATABASE_PATH_VAR, DEFAULT_DATABASE_PATH};
