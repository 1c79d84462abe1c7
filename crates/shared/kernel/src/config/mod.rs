use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::info;

/// Custom error type for config loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The underlying loader failed to read or deserialize a source.
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Environment variable prefix for overrides.
const ENV_PREFIX: &str = "BEACON";

/// Base file stem looked up in the working directory when no path is given.
const DEFAULT_FILE_STEM: &str = "beacon";

/// A reusable configuration loader that combines file-based settings with environment overrides.
///
/// This function implements a layered configuration strategy:
/// 1. **Base file**: settings from a file. An explicit `path` is required to exist;
///    without one, an optional `beacon.*` file in the working directory is used,
///    and its absence is a normal outcome (all values fall back to defaults).
/// 2. **Environment overrides**: values from environment variables prefixed with `BEACON__`.
///    Nested structures are accessed using double underscores
///    (e.g., `BEACON__GA4__MEASUREMENT_ID` maps to `ga4.measurement_id`).
///
/// A host that configures nothing at all gets the default configuration back,
/// never an error: missing configuration must degrade to "feature off", not
/// break startup.
///
/// # Type Parameters
/// * `T`: The target configuration structure. Must implement [`serde::Deserialize`].
///
/// # Arguments
/// * `path`: An optional file path to the configuration source.
///
/// # Errors
/// This function will return an error if:
/// * An explicitly provided configuration file cannot be found.
/// * The content of a source does not match the structure of type `T`.
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, ConfigError>
where
    T: DeserializeOwned,
{
    let base = path.as_ref().map_or_else(
        || File::with_name(DEFAULT_FILE_STEM).required(false),
        |p| File::from(p.as_ref()).required(true),
    );

    match path {
        Some(ref p) => info!("Loading config from {}", p.as_ref().display()),
        None => info!("Loading config from optional {DEFAULT_FILE_STEM}.* and environment"),
    }

    let config = Config::builder()
        .add_source(base)
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake),
        )
        .build()?
        .try_deserialize::<T>()?;

    Ok(config)
}
