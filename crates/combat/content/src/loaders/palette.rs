//! Slot palette loader.

use std::path::Path;

use combat_core::{SlotPalette, SlotPaletteRecord};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{LoadResult, read_file};

/// Palette structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteRows {
    pub slots: Vec<SlotPaletteRecord>,
}

/// Loader for slot palettes from RON files.
pub struct PaletteLoader;

impl PaletteLoader {
    /// Load a palette. Rows with an out-of-range slot index are skipped.
    pub fn load(path: &Path) -> LoadResult<SlotPalette> {
        let content = read_file(path)?;
        let palette = Self::parse(&content)?;
        info!(path = %path.display(), bound = palette.len(), "loaded slot palette");
        Ok(palette)
    }

    pub fn parse(content: &str) -> LoadResult<SlotPalette> {
        let rows: PaletteRows = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse palette RON: {}", e))?;
        Ok(SlotPalette::from_records(&rows.slots))
    }
}
