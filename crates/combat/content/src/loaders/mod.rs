//! Content loaders for reading combat data from files.
//!
//! Each loader parses one file format and returns `combat-core` types; the
//! [`ContentFactory`] knows where those files live inside a data directory.

pub mod config;
pub mod factory;
pub mod moves;
pub mod palette;
pub mod profile;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use moves::MoveLoader;
pub use palette::PaletteLoader;
pub use profile::{BindingSpec, ComboProfile, ComboProfileLoader, NodeSpec, TransitionSpec};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
