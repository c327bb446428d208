pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod sync;
pub mod theme;

#[cfg(test)]
mod test_support;
pub use error::{AppError, AppResult};

use crate::storage::FileStorage;
use crate::sync::CssVariableSync;
use crate::theme::ThemeStore;

/// Entrypoint used by the command-line binary.
pub fn run<I: IntoIterator<Item = String>>(args: I) -> AppResult<()> {
    logging::init();

    let command = cli::Command::parse(args)?;
    let config = config::load_app_config();
    let storage_dir = config
        .storage_dir()
        .map_err(|_| AppError::MissingHomeDirectory)?;
    tracing::debug!(dir = %storage_dir.display(), ?command, "starting");

    let mut store = ThemeStore::with_preset(
        FileStorage::with_dir(storage_dir),
        CssVariableSync::default(),
        config.initial_preset(),
    );
    store.load_saved_theme();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::execute(command, &mut store, &config, &mut out)
}
