//! Classified move catalog.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::config::CombatConfig;

use super::{AttackMove, AttackMoveRecord, MoveClass, MoveError, classify};

/// Every classified move, loaded once and read-only afterwards.
///
/// Moves keep their source order; lookups by name go through an index.
#[derive(Clone, Debug, Default)]
pub struct MoveCatalog {
    moves: Vec<AttackMove>,
    by_name: HashMap<String, usize>,
}

impl MoveCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classifies every row. The first invalid row aborts the whole load.
    pub fn from_records<'a, I>(records: I, config: &CombatConfig) -> Result<Self, MoveError>
    where
        I: IntoIterator<Item = &'a AttackMoveRecord>,
    {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(classify(record, config)?)?;
        }
        Ok(catalog)
    }

    /// Adds a directly authored move. Names must be unique.
    pub fn insert(&mut self, attack: AttackMove) -> Result<(), MoveError> {
        if self.by_name.contains_key(attack.name()) {
            return Err(MoveError::DuplicateName(attack.name().to_owned()));
        }
        self.by_name.insert(attack.name().to_owned(), self.moves.len());
        self.moves.push(attack);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&AttackMove> {
        self.by_name.get(name).map(|&index| &self.moves[index])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttackMove> {
        self.moves.iter()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of moves per class, in declaration order of [`MoveClass`].
    pub fn class_counts(&self) -> Vec<(MoveClass, usize)> {
        MoveClass::iter()
            .map(|class| (class, self.iter().filter(|m| m.class() == class).count()))
            .collect()
    }
}
