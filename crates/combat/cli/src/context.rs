//! Data directory resolution.

use std::path::PathBuf;

use combat_content::ContentFactory;

/// Environment variable naming the content data directory.
pub const DATA_DIR_ENV: &str = "COMBAT_DATA_DIR";

/// Data shipped with the content crate, relative to the workspace root.
const DEFAULT_DATA_DIR: &str = "crates/combat/content/data";

/// `--data-dir`, else `COMBAT_DATA_DIR`, else the shipped data.
pub fn data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

pub fn factory(explicit: Option<PathBuf>) -> ContentFactory {
    let dir = data_dir(explicit);
    tracing::debug!(data_dir = %dir.display(), "using content directory");
    ContentFactory::new(dir)
}
