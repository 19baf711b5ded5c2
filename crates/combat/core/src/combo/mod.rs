//! Combo graph: the timed state machine that chains attack moves.
//!
//! A [`ComboGraph`] is built once through [`ComboGraphBuilder`], wrapped in an
//! `Arc` and shared read-only by every actor. Each actor owns one
//! [`ComboState`] and drives it with the pressed slots and elapsed time of
//! every tick.
//!
//! ```text
//!        Slot1 [0.10, 0.40]        Slot1 [0.10, 0.40]
//! idle ──────────────────▶ light_1 ──────────────────▶ light_2
//!   ▲                                                    │
//!   └──────────── idle for reset_to_entry_after ─────────┘
//! ```

mod error;
mod event;
mod graph;
mod node;
mod state;
mod transition;

pub use error::ComboError;
pub use event::{ComboEvent, ComboEvents};
pub use graph::{ComboGraph, ComboGraphBuilder, ComboGraphSettings};
pub use node::{ComboNode, NodeIndex};
pub use state::ComboState;
pub use transition::{ComboTransition, TransitionIndex};
