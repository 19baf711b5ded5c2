//! Movement actions resolved from pressed slots.

use crate::input::InputSlots;

use super::{SlotBinding, SlotBindingKind, SlotOracle};

/// Movement requests for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovementActions {
    pub jump: bool,
    pub boost: bool,
    pub dash: bool,
}

impl MovementActions {
    pub fn resolve<O>(oracle: &O, pressed: InputSlots) -> Self
    where
        O: SlotOracle + ?Sized,
    {
        let mut actions = Self::default();
        for (_, binding) in oracle.pressed_bindings(pressed) {
            actions.jump |= is_jump(binding);
            actions.boost |= is_boost(binding);
            actions.dash |= is_dash(binding);
        }
        actions
    }

    pub fn any(&self) -> bool {
        self.jump || self.boost || self.dash
    }
}

pub fn is_jump(binding: &SlotBinding) -> bool {
    matches_movement(binding, SlotBindingKind::MovementJump, "Jump")
}

pub fn is_boost(binding: &SlotBinding) -> bool {
    matches_movement(binding, SlotBindingKind::MovementBoost, "Boost")
}

pub fn is_dash(binding: &SlotBinding) -> bool {
    matches_movement(binding, SlotBindingKind::MovementDash, "Dash")
}

/// A dedicated kind always matches; a generic `MovementAction` matches by id.
fn matches_movement(binding: &SlotBinding, dedicated: SlotBindingKind, action_id: &str) -> bool {
    binding.kind == dedicated
        || (binding.kind == SlotBindingKind::MovementAction
            && binding.id.eq_ignore_ascii_case(action_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::SlotPalette;

    fn palette() -> SlotPalette {
        SlotPalette::from_bindings([
            (
                InputSlots::SLOT1,
                SlotBinding::new(SlotBindingKind::MovementAction, "jump"),
            ),
            (
                InputSlots::SLOT2,
                SlotBinding::new(SlotBindingKind::MovementBoost, "anything"),
            ),
            (
                InputSlots::SLOT3,
                SlotBinding::new(SlotBindingKind::MovementAction, "Roll"),
            ),
            (
                InputSlots::SLOT4,
                SlotBinding::new(SlotBindingKind::Spell, "Dash"),
            ),
        ])
    }

    #[test]
    fn generic_movement_matches_id_case_insensitively() {
        let actions = palette().movement_actions(InputSlots::SLOT1);
        assert_eq!(
            actions,
            MovementActions {
                jump: true,
                boost: false,
                dash: false
            }
        );
    }

    #[test]
    fn dedicated_kind_ignores_id() {
        let actions = palette().movement_actions(InputSlots::SLOT2);
        assert!(actions.boost);
        assert!(!actions.jump);
    }

    #[test]
    fn unrelated_bindings_request_nothing() {
        let actions = palette().movement_actions(InputSlots::SLOT3 | InputSlots::SLOT4);
        assert!(!actions.any());
    }

    #[test]
    fn unpressed_slots_are_ignored() {
        assert!(!palette().movement_actions(InputSlots::empty()).any());
        let all = palette().movement_actions(InputSlots::all());
        assert!(all.jump && all.boost && !all.dash);
    }
}
