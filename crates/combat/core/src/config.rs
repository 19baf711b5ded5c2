/// Combat configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Fixed simulation rate driving `ComboState::step`.
    pub tick_rate: u32,

    /// Idle-decay timeout used when a combo profile does not specify one.
    /// `0.0` disables auto-reset.
    pub default_reset_to_entry_after_seconds: f32,

    /// Collision radius given to projectile spells built from persisted rows.
    pub default_collision_radius: f32,
}

impl CombatConfig {
    // ===== compile-time constants =====
    /// Number of bindable input slots.
    pub const MAX_INPUT_SLOTS: usize = 12;
    /// Upper bound of events produced by a single `ComboState::step`
    /// (one idle reset followed by one transition).
    pub const MAX_EVENTS_PER_STEP: usize = 2;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_TICK_RATE: u32 = 30;
    pub const DEFAULT_RESET_TO_ENTRY_AFTER_SECONDS: f32 = 0.0;
    pub const DEFAULT_COLLISION_RADIUS: f32 = 0.25;

    pub fn new() -> Self {
        Self {
            tick_rate: Self::DEFAULT_TICK_RATE,
            default_reset_to_entry_after_seconds: Self::DEFAULT_RESET_TO_ENTRY_AFTER_SECONDS,
            default_collision_radius: Self::DEFAULT_COLLISION_RADIUS,
        }
    }

    pub fn with_tick_rate(tick_rate: u32) -> Self {
        Self {
            tick_rate,
            ..Self::new()
        }
    }

    /// Seconds elapsed per simulation tick. A zero tick rate yields `0.0`.
    pub fn tick_delta(&self) -> f32 {
        if self.tick_rate == 0 {
            0.0
        } else {
            1.0 / self.tick_rate as f32
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_delta_follows_rate() {
        let config = CombatConfig::with_tick_rate(20);
        assert!((config.tick_delta() - 0.05).abs() < f32::EPSILON);
        assert_eq!(CombatConfig::with_tick_rate(0).tick_delta(), 0.0);
    }

    #[test]
    fn defaults() {
        let config = CombatConfig::default();
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.default_reset_to_entry_after_seconds, 0.0);
        assert_eq!(config.default_collision_radius, 0.25);
    }
}
