//! Authored combat content and its loaders.
//!
//! Reads RON/TOML data files into `combat-core` types at build time:
//! - Attack move rows (RON) classified into a `MoveCatalog`
//! - Combo profiles (RON) built into shared `ComboGraph`s
//! - Slot palettes (RON)
//! - Combat configuration (TOML)
//!
//! Nothing here runs per tick. Loaded content is handed to the simulation
//! once and never mutated afterwards.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    BindingSpec, ComboProfile, ComboProfileLoader, ConfigLoader, ContentFactory, MoveLoader,
    NodeSpec, PaletteLoader, TransitionSpec,
};
