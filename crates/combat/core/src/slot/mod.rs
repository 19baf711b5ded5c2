//! Slot palette: what each of the twelve input slots is bound to.
//!
//! A palette is built when an actor's equipment and skills load, replaced
//! wholesale on re-equip, and owned by that actor alone. The input-mapping
//! layer reads it through [`SlotOracle`] to turn a pressed-slot mask into
//! bindings before any combo logic runs.

mod movement;

pub use movement::MovementActions;

use tracing::warn;

use crate::config::CombatConfig;
use crate::input::{ALL_SLOTS, InputSlots};

/// What kind of action a slot is bound to.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SlotBindingKind {
    /// Unbound.
    #[default]
    None,
    Spell,
    Item,
    /// Generic movement action identified by its binding id ("Jump", "Dash", ...).
    MovementAction,
    MovementJump,
    MovementBoost,
    MovementDash,
}

/// An action bound to one slot, e.g. `(Spell, "Spell_Fireball")`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotBinding {
    pub kind: SlotBindingKind,
    pub id: String,
}

static UNBOUND: SlotBinding = SlotBinding::unbound();

impl SlotBinding {
    pub fn new(kind: SlotBindingKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub const fn unbound() -> Self {
        Self {
            kind: SlotBindingKind::None,
            id: String::new(),
        }
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.kind != SlotBindingKind::None
    }
}

/// Read access to slot bindings.
///
/// Lookups never fail: an unbound or unknown slot yields the unbound binding.
pub trait SlotOracle {
    /// Binding of a single slot.
    fn binding(&self, slot: InputSlots) -> &SlotBinding;

    /// Bound bindings of every pressed slot, in slot order.
    fn pressed_bindings(
        &self,
        pressed: InputSlots,
    ) -> impl Iterator<Item = (InputSlots, &SlotBinding)> {
        pressed
            .slots()
            .map(move |slot| (slot, self.binding(slot)))
            .filter(|(_, binding)| binding.is_bound())
    }

    /// True if any pressed slot's binding satisfies `predicate`.
    fn is_action_down<F>(&self, pressed: InputSlots, predicate: F) -> bool
    where
        F: Fn(&SlotBinding) -> bool,
    {
        self.pressed_bindings(pressed)
            .any(|(_, binding)| predicate(binding))
    }

    /// Movement actions requested by the pressed slots.
    fn movement_actions(&self, pressed: InputSlots) -> MovementActions {
        MovementActions::resolve(self, pressed)
    }
}

/// A persisted palette row: `{slot_index, kind, binding_id}` with a 1-based index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotPaletteRecord {
    pub slot_index: u8,
    pub kind: SlotBindingKind,
    pub binding_id: String,
}

/// In-memory palette backed by a fixed array indexed by slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotPalette {
    bindings: [Option<SlotBinding>; CombatConfig::MAX_INPUT_SLOTS],
}

impl SlotPalette {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a palette from initial pairs. Unbound pairs are skipped.
    pub fn from_bindings<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = (InputSlots, SlotBinding)>,
    {
        let mut palette = Self::new();
        for (slot, binding) in initial {
            palette.set(slot, binding);
        }
        palette
    }

    /// Builds a palette from persisted rows. Rows whose index is outside
    /// `1..=12` are skipped.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a SlotPaletteRecord>,
    {
        let mut palette = Self::new();
        for record in records {
            let slot = InputSlots::from_index(record.slot_index);
            if slot.is_empty() {
                warn!(
                    slot_index = record.slot_index,
                    binding = %record.binding_id,
                    "skipping palette row with out-of-range slot index"
                );
                continue;
            }
            palette.set(slot, SlotBinding::new(record.kind, record.binding_id.clone()));
        }
        palette
    }

    /// Returns the binding for `slot`, or the unbound binding if absent.
    pub fn get(&self, slot: InputSlots) -> &SlotBinding {
        match slot.index() {
            0 => &UNBOUND,
            index => self.bindings[index as usize - 1]
                .as_ref()
                .unwrap_or(&UNBOUND),
        }
    }

    /// Binds `slot`. A binding of kind `None` removes the mapping.
    ///
    /// `slot` must name exactly one slot; anything else is ignored.
    pub fn set(&mut self, slot: InputSlots, binding: SlotBinding) {
        let index = slot.index();
        if index == 0 {
            warn!(bits = slot.bits(), "ignoring binding for a non-single slot mask");
            return;
        }
        let entry = &mut self.bindings[index as usize - 1];
        *entry = binding.is_bound().then_some(binding);
    }

    /// Iterates bound slots in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (InputSlots, &SlotBinding)> {
        ALL_SLOTS
            .iter()
            .zip(self.bindings.iter())
            .filter_map(|(slot, binding)| binding.as_ref().map(|b| (*slot, b)))
    }

    pub fn len(&self) -> usize {
        self.bindings.iter().filter(|b| b.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SlotOracle for SlotPalette {
    fn binding(&self, slot: InputSlots) -> &SlotBinding {
        self.get(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fireball() -> SlotBinding {
        SlotBinding::new(SlotBindingKind::Spell, "Spell_Fireball")
    }

    #[test]
    fn absent_slot_reads_as_unbound() {
        let palette = SlotPalette::new();
        let binding = palette.get(InputSlots::SLOT4);
        assert_eq!(binding.kind, SlotBindingKind::None);
        assert!(binding.id.is_empty());
        assert!(palette.is_empty());
    }

    #[test]
    fn set_inserts_replaces_and_removes() {
        let mut palette = SlotPalette::new();
        palette.set(InputSlots::SLOT2, fireball());
        assert_eq!(palette.get(InputSlots::SLOT2), &fireball());

        let potion = SlotBinding::new(SlotBindingKind::Item, "Item_HealthPotion");
        palette.set(InputSlots::SLOT2, potion.clone());
        assert_eq!(palette.get(InputSlots::SLOT2), &potion);
        assert_eq!(palette.len(), 1);

        palette.set(InputSlots::SLOT2, SlotBinding::new(SlotBindingKind::None, "ignored"));
        assert!(!palette.get(InputSlots::SLOT2).is_bound());
        assert!(palette.is_empty());
    }

    #[test]
    fn chords_are_neither_readable_nor_bindable() {
        let mut palette = SlotPalette::new();
        let chord = InputSlots::SLOT1 | InputSlots::SLOT2;
        palette.set(chord, fireball());
        assert!(palette.is_empty());
        assert!(!palette.get(chord).is_bound());
        assert!(!palette.get(InputSlots::empty()).is_bound());
    }

    #[test]
    fn initial_bindings_skip_unbound_pairs() {
        let palette = SlotPalette::from_bindings([
            (InputSlots::SLOT1, fireball()),
            (InputSlots::SLOT3, SlotBinding::unbound()),
        ]);
        let bound: Vec<_> = palette.iter().map(|(slot, _)| slot).collect();
        assert_eq!(bound, vec![InputSlots::SLOT1]);
    }

    #[test]
    fn records_with_bad_indices_are_skipped() {
        let records = vec![
            SlotPaletteRecord {
                slot_index: 1,
                kind: SlotBindingKind::MovementJump,
                binding_id: "Jump".into(),
            },
            SlotPaletteRecord {
                slot_index: 0,
                kind: SlotBindingKind::Spell,
                binding_id: "Spell_Lost".into(),
            },
            SlotPaletteRecord {
                slot_index: 13,
                kind: SlotBindingKind::Spell,
                binding_id: "Spell_Lost".into(),
            },
            SlotPaletteRecord {
                slot_index: 12,
                kind: SlotBindingKind::Item,
                binding_id: "Item_Bomb".into(),
            },
        ];
        let palette = SlotPalette::from_records(&records);
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(InputSlots::SLOT12).id, "Item_Bomb");
    }

    #[test]
    fn pressed_bindings_skip_unbound_slots() {
        let palette = SlotPalette::from_bindings([
            (InputSlots::SLOT5, fireball()),
            (
                InputSlots::SLOT1,
                SlotBinding::new(SlotBindingKind::Item, "Item_HealthPotion"),
            ),
        ]);
        let pressed = InputSlots::SLOT1 | InputSlots::SLOT3 | InputSlots::SLOT5;
        let ids: Vec<_> = palette
            .pressed_bindings(pressed)
            .map(|(_, b)| b.id.as_str())
            .collect();
        assert_eq!(ids, vec!["Item_HealthPotion", "Spell_Fireball"]);

        assert!(palette.is_action_down(pressed, |b| b.kind == SlotBindingKind::Spell));
        assert!(!palette.is_action_down(InputSlots::SLOT1, |b| b.kind == SlotBindingKind::Spell));
    }

    #[test]
    fn binding_kind_parses_snake_case() {
        assert_eq!(
            "movement_jump".parse::<SlotBindingKind>().unwrap(),
            SlotBindingKind::MovementJump
        );
        assert_eq!(SlotBindingKind::MovementDash.to_string(), "movement_dash");
    }
}
