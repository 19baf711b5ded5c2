//! Logical input slots and chord masks.
//!
//! The input-mapping layer turns raw packets into an [`InputSlots`] mask of the
//! slots held down this tick. Bit positions match the transport layout, so a
//! mask can be taken straight off the wire with [`InputSlots::from_bits_truncate`].

use bitflags::bitflags;

use crate::config::CombatConfig;
use crate::error::{CombatError, ErrorSeverity};

bitflags! {
    /// Set of held input slots. The empty set means nothing is pressed.
    ///
    /// A single flag names one slot; a union names a chord.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct InputSlots: u32 {
        const SLOT1  = 1 << 5;
        const SLOT2  = 1 << 6;
        const SLOT3  = 1 << 7;
        const SLOT4  = 1 << 8;
        const SLOT5  = 1 << 9;
        const SLOT6  = 1 << 10;
        const SLOT7  = 1 << 11;
        const SLOT8  = 1 << 12;
        const SLOT9  = 1 << 13;
        const SLOT10 = 1 << 14;
        const SLOT11 = 1 << 15;
        const SLOT12 = 1 << 16;
    }
}

/// Every slot flag in index order (Slot1 first).
pub const ALL_SLOTS: [InputSlots; CombatConfig::MAX_INPUT_SLOTS] = [
    InputSlots::SLOT1,
    InputSlots::SLOT2,
    InputSlots::SLOT3,
    InputSlots::SLOT4,
    InputSlots::SLOT5,
    InputSlots::SLOT6,
    InputSlots::SLOT7,
    InputSlots::SLOT8,
    InputSlots::SLOT9,
    InputSlots::SLOT10,
    InputSlots::SLOT11,
    InputSlots::SLOT12,
];

/// Bit position of `SLOT1`.
const FIRST_SLOT_SHIFT: u32 = 5;

impl InputSlots {
    /// Maps a 1-based slot index to its flag. Out-of-range yields the empty set.
    pub const fn from_index(index: u8) -> Self {
        if index == 0 || index as usize > CombatConfig::MAX_INPUT_SLOTS {
            return Self::empty();
        }
        Self::from_bits_retain(1 << (FIRST_SLOT_SHIFT + index as u32 - 1))
    }

    /// Returns the 1-based index of a single slot, or `0` for the empty set
    /// and multi-slot chords.
    pub const fn index(self) -> u8 {
        let bits = self.bits();
        if bits.count_ones() != 1 || bits & Self::all().bits() == 0 {
            return 0;
        }
        (bits.trailing_zeros() - FIRST_SLOT_SHIFT + 1) as u8
    }

    /// True when exactly one known slot is set.
    pub const fn is_single(self) -> bool {
        self.index() != 0
    }

    /// True when every bit of `required` is held. Extra held bits are ignored.
    #[inline]
    pub const fn satisfies(self, required: InputSlots) -> bool {
        self.bits() & required.bits() == required.bits()
    }

    /// Iterates the held slots in index order.
    pub fn slots(self) -> impl Iterator<Item = InputSlots> {
        ALL_SLOTS.into_iter().filter(move |slot| self.contains(*slot))
    }

    /// Parses a chord description such as `"Slot1"`, `"slot1+slot3"` or
    /// `"Slot2 | Slot4"`. Names are case-insensitive.
    pub fn parse_chord(description: &str) -> Result<Self, ChordParseError> {
        let mut chord = Self::empty();
        for token in description.split(['+', '|']) {
            let token = token.trim();
            if token.is_empty() {
                return Err(ChordParseError::EmptyToken(description.to_owned()));
            }
            let index = token
                .get(..4)
                .filter(|prefix| prefix.eq_ignore_ascii_case("slot"))
                .and_then(|_| token[4..].parse::<u8>().ok())
                .map(Self::from_index)
                .filter(|slot| !slot.is_empty())
                .ok_or_else(|| ChordParseError::UnknownSlot(token.to_owned()))?;
            chord |= index;
        }
        Ok(chord)
    }
}

/// Errors raised while parsing an authored chord description.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChordParseError {
    #[error("chord description '{0}' contains an empty token")]
    EmptyToken(String),

    #[error("unknown input slot '{0}' (expected Slot1..Slot12)")]
    UnknownSlot(String),
}

impl CombatError for ChordParseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyToken(_) => "CHORD_EMPTY_TOKEN",
            Self::UnknownSlot(_) => "CHORD_UNKNOWN_SLOT",
        }
    }
}
