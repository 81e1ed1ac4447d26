use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod models;
pub use models::*;

/// Loads the layered application configuration.
///
/// Sources, in order of increasing precedence:
/// `config/default` file, `config/{RUN_ENV}` file, environment variables
/// with the `AKSHARA` prefix (`__` as the section separator, e.g.
/// `AKSHARA_WEBHOOK__BOOKING_URL`). A `.env` file is loaded into the
/// environment first, once per process.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| "AKSHARA".to_string());

    let workspace_root = workspace_root();
    let default_path = workspace_root.join("config/default");
    let env_path = workspace_root.join(format!("config/{}", run_env));

    debug!("config: workspace_root: {}", workspace_root.display());
    debug!("config: default_path: {}", default_path.display());
    debug!("config: env_path: {}", env_path.display());

    let default_source = default_path.to_str().map(|p| File::with_name(p).required(false));
    let env_source = env_path.to_str().map(|p| File::with_name(p).required(false));

    let mut builder = Config::builder();
    if let Some(source) = default_source {
        builder = builder.add_source(source);
    }
    if let Some(source) = env_source {
        builder = builder.add_source(source);
    }
    let builder = builder.add_source(Environment::with_prefix(&prefix).separator("__"));

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    Ok(raw_config)
}

// Resolved relative to the crate manifest when running under cargo,
// falling back to the current directory for installed binaries.
fn workspace_root() -> PathBuf {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."));
    manifest_dir
        .ancestors()
        .nth(2) // go from crates/akshara_config to workspace root
        .map(PathBuf::from)
        .unwrap_or(manifest_dir)
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file path can be overridden with `DOTENV_OVERRIDE`; otherwise a
/// file named `.env` is used. Loading happens at most once per process.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
