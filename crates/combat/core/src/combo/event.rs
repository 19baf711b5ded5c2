use arrayvec::ArrayVec;

use crate::config::CombatConfig;

use super::{NodeIndex, TransitionIndex};

/// State change reported by [`super::ComboState::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComboEvent {
    /// Idle decay moved the state back to the entry node.
    ResetToEntry { from: NodeIndex },

    /// A transition fired. `transition` indexes into `from`'s transition list.
    Transitioned {
        from: NodeIndex,
        to: NodeIndex,
        transition: TransitionIndex,
    },
}

/// Events of a single step: at most one reset followed by one transition.
pub type ComboEvents = ArrayVec<ComboEvent, { CombatConfig::MAX_EVENTS_PER_STEP }>;
