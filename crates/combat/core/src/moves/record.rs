/// Flat persisted attack move row.
///
/// Every shape field lives side by side; [`super::classify`] decides which
/// descriptor variant the row describes. Missing fields default to zero,
/// except `requires_target` which defaults to `true`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttackMoveRecord {
    pub name: String,
    pub cooldown_seconds: f32,
    pub mana_cost: f32,
    pub stamina_cost: f32,

    /// Max usable distance. `0` = self only.
    pub range: f32,
    /// `0` = single target / ray.
    pub area_radius: f32,
    /// With a non-zero `area_radius`, `> 0` means cone instead of circle.
    pub cone_angle_degrees: f32,
    /// `0` = no projectile (instant, melee or ray).
    pub projectile_speed: f32,

    /// `0` = instant.
    pub cast_time_seconds: f32,
    /// Lifetime of the spawned effect. `0` = nothing persistent.
    pub duration_seconds: f32,
    /// `0` = not channeled.
    pub channel_duration_seconds: f32,
    /// Interval between periodic ticks. `0` = no periodic ticks.
    pub tick_interval_seconds: f32,

    pub requires_target: bool,
    pub base_damage: f32,
}

impl Default for AttackMoveRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            cooldown_seconds: 0.0,
            mana_cost: 0.0,
            stamina_cost: 0.0,
            range: 0.0,
            area_radius: 0.0,
            cone_angle_degrees: 0.0,
            projectile_speed: 0.0,
            cast_time_seconds: 0.0,
            duration_seconds: 0.0,
            channel_duration_seconds: 0.0,
            tick_interval_seconds: 0.0,
            requires_target: true,
            base_damage: 0.0,
        }
    }
}

impl AttackMoveRecord {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
