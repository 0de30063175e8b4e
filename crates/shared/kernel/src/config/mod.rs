use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::info;

/// Base name of the configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "server";
/// Prefix for structured environment overrides (`NUMERUS__SERVER__PORT`).
pub const ENV_PREFIX: &str = "NUMERUS";
/// Bare variable overriding `server.port`, as most hosting platforms set it.
pub const PORT_ENV: &str = "PORT";

/// Custom error type for config loading.
#[numerus_derive::numerus_error]
pub enum ConfigError {
    #[error("Config error{}: {source}", format_context(.context))]
    Config { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

/// Loads configuration from layered sources.
///
/// Layers, lowest precedence first:
/// 1. **File**: `path` (any format the `config` crate understands, extension optional).
///    Defaults to `server` in the working directory. A missing file is not an error.
/// 2. **Environment**: variables prefixed with `NUMERUS__`, nested with double
///    underscores (e.g., `NUMERUS__SERVER__ADDRESS` maps to `server.address`).
/// 3. **`PORT`**: when set and non-empty, overrides `server.port`.
///
/// # Errors
/// Returns [`ConfigError::Config`] if a source is malformed or the merged values do not
/// match the structure of `T`.
///
/// # Example
/// ```rust
/// use numerus_kernel::config::load_config;
///
/// #[derive(Default, serde::Deserialize)]
/// struct AppConfig {
///     port: u16,
/// }
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let port_override = std::env::var(PORT_ENV).ok().filter(|value| !value.trim().is_empty());

    info!(
        path = %effective_path.display(),
        port_override = port_override.is_some(),
        "Loading config"
    );

    let config = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX).separator("__").convert_case(config::Case::Snake),
        )
        .set_override_option("server.port", port_override)
        .context(format!("Invalid {PORT_ENV} override"))?
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
