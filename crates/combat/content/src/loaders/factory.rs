//! Content factory for building combat data from a data directory.

use std::path::{Path, PathBuf};

use combat_core::{CombatConfig, ComboGraph, MoveCatalog, SlotPalette};

use crate::loaders::{
    ComboProfile, ComboProfileLoader, ConfigLoader, LoadResult, MoveLoader, PaletteLoader,
};

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── moves.ron
/// ├── combos/
/// │   └── sword.ron
/// └── palettes/
///     └── default.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat configuration from `config.toml`, or defaults if the file is absent.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load and classify the move catalog from `moves.ron`.
    pub fn load_moves(&self, config: &CombatConfig) -> LoadResult<MoveCatalog> {
        let path = self.data_dir.join("moves.ron");
        MoveLoader::load(&path, config)
    }

    /// Load a combo profile from `combos/{name}.ron` without building it.
    pub fn load_profile(&self, name: &str) -> LoadResult<ComboProfile> {
        ComboProfileLoader::load(&self.profile_path(name))
    }

    /// Load and build the combo graph described by `combos/{name}.ron`.
    pub fn load_graph(
        &self,
        name: &str,
        catalog: &MoveCatalog,
        config: &CombatConfig,
    ) -> LoadResult<ComboGraph> {
        self.load_profile(name)?.build(catalog, config)
    }

    /// Load a slot palette from `palettes/{name}.ron`.
    pub fn load_palette(&self, name: &str) -> LoadResult<SlotPalette> {
        let path = self.data_dir.join("palettes").join(format!("{}.ron", name));
        PaletteLoader::load(&path)
    }

    /// Names of every profile under `combos/`, sorted.
    pub fn profile_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("combos");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.extension().is_some_and(|ext| ext == "ron") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.data_dir.join("combos").join(format!("{}.ron", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.profile_path("sword"),
            Path::new("/tmp/data/combos/sword.ron")
        );
    }
}
