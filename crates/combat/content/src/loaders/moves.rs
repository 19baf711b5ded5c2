//! Attack move catalog loader.

use std::path::Path;

use combat_core::{AttackMoveRecord, CombatConfig, MoveCatalog};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{LoadResult, read_file};

/// Move rows structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRows {
    pub moves: Vec<AttackMoveRecord>,
}

/// Loader for flat attack move rows from RON files.
pub struct MoveLoader;

impl MoveLoader {
    /// Load the raw rows without classifying them.
    pub fn load_records(path: &Path) -> LoadResult<Vec<AttackMoveRecord>> {
        let content = read_file(path)?;
        Self::parse_records(&content)
    }

    pub fn parse_records(content: &str) -> LoadResult<Vec<AttackMoveRecord>> {
        let rows: MoveRows = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse move rows RON: {}", e))?;
        Ok(rows.moves)
    }

    /// Load and classify every row. The first invalid row fails the load.
    pub fn load(path: &Path, config: &CombatConfig) -> LoadResult<MoveCatalog> {
        let records = Self::load_records(path)?;
        let catalog = MoveCatalog::from_records(&records, config)
            .map_err(|e| anyhow::anyhow!("Invalid move catalog {}: {}", path.display(), e))?;

        for (class, count) in catalog.class_counts() {
            info!(class = %class, count, "classified attack moves");
        }
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::MoveClass;

    #[test]
    fn omitted_fields_default_to_zero() {
        let records = MoveLoader::parse_records(
            r#"(moves: [
                (name: "slash", range: 2.0, base_damage: 10.0),
                (name: "bolt", range: 20.0, projectile_speed: 30.0, requires_target: false),
            ])"#,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].mana_cost, 0.0);
        assert!(records[0].requires_target);
        assert!(!records[1].requires_target);

        let catalog = MoveCatalog::from_records(&records, &CombatConfig::default()).unwrap();
        assert_eq!(catalog.get("bolt").unwrap().class(), MoveClass::Projectile);
    }

    #[test]
    fn malformed_rows_fail() {
        assert!(MoveLoader::parse_records("(moves: [(name: 3)])").is_err());
    }
}
