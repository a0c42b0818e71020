//! Process start-up.
//!
//! [`run`] is the single entry point: load the optional config file, resolve
//! paths, initialise tracing, then wire the client.

pub mod config;
pub mod tracing;
pub mod wiring;

use std::path::PathBuf;

use ll_core::app_dirs::AppPaths;
use ll_core::ports::AppDirsPort;
use ll_core::ClientConfig;
use ll_platform::DirsAppDirsAdapter;

use crate::client::LittleLemonClient;

pub use config::load_config;
pub use wiring::wire_client;

/// Start the client core.
///
/// `config_path` may point at a missing file, in which case defaults apply.
/// Must be called from within a tokio runtime.
pub fn run(config_path: Option<PathBuf>) -> anyhow::Result<LittleLemonClient> {
    let config = match config_path {
        Some(path) => config::load_config_or_default(path)?,
        None => ClientConfig::default(),
    };

    let app_dirs = DirsAppDirsAdapter::new().get_app_dirs()?;
    let paths = AppPaths::resolve(&app_dirs, &config.storage);

    if let Err(err) = self::tracing::init_tracing_subscriber(&config.logging, &paths.logs_dir) {
        eprintln!("Tracing already initialised or unavailable: {err}");
    }

    ::tracing::info!(
        store = %paths.store_path.display(),
        logs = %paths.logs_dir.display(),
        "starting little lemon client"
    );

    Ok(wire_client(paths))
}
