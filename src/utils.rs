use std::{env, fs, path::Path, path::PathBuf, sync::Once};

use dirs::home_dir;

use crate::errors::ExpenseError;

const DEFAULT_DIR_NAME: &str = ".expense_core";
const ENTRIES_FILE: &str = "entries.json";
const CONFIG_FILE: &str = "config.json";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("expense_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

/// Returns the application-specific data directory, defaulting to `~/.expense_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Fixed path of the persisted entry collection inside a data directory.
pub fn entries_file_in(base: &Path) -> PathBuf {
    base.join(ENTRIES_FILE)
}

/// Fixed path of the configuration file inside a data directory.
pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

pub fn ensure_dir(path: &Path) -> Result<(), ExpenseError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
