//! Deterministic combat core: timed combo graphs, attack move descriptors
//! and input slot palettes.
//!
//! Everything here is pure in-memory computation. Graphs and catalogs are
//! built once and shared read-only; each actor owns a [`ComboState`] that
//! its simulation task advances every tick. Loading authored data from disk
//! lives in `combat-content`.

pub mod combo;
pub mod config;
pub mod error;
pub mod input;
pub mod moves;
pub mod slot;
pub mod window;

pub use combo::{
    ComboError, ComboEvent, ComboEvents, ComboGraph, ComboGraphBuilder, ComboGraphSettings,
    ComboNode, ComboState, ComboTransition, NodeIndex, TransitionIndex,
};
pub use config::CombatConfig;
pub use error::{CombatError, ErrorSeverity};
pub use input::{ALL_SLOTS, ChordParseError, InputSlots};
pub use moves::{
    AreaShape, AttackMove, AttackMoveKind, AttackMoveRecord, MeleeShape, MoveCatalog, MoveClass,
    MoveCosts, MoveError, ProjectileShape, SpellShape, classify,
};
pub use slot::{
    MovementActions, SlotBinding, SlotBindingKind, SlotOracle, SlotPalette, SlotPaletteRecord,
};
pub use window::{CancelWindow, DamageWindow, InputWindow, TimeWindow, WindowError};
