//! Persisted row to descriptor classification.
//!
//! The ladder is ordered and first-match wins:
//!
//! 1. `projectile_speed > 0` → projectile spell (`area_radius` is the explosion radius)
//! 2. `area_radius > 0` → area spell
//! 3. `range > 0` and (`cast_time_seconds > 0` or `mana_cost > 0`) → spell
//! 4. otherwise → basic attack
//!
//! A mana-costed melee row lands on rule 3. That is the accepted behavior of
//! the ladder; rows needing a different class must be authored directly.

use tracing::debug;

use crate::config::CombatConfig;

use super::{
    AreaShape, AttackMove, AttackMoveKind, AttackMoveRecord, MeleeShape, MoveCosts, MoveError,
    SpellShape,
};

/// Classifies one persisted row into a descriptor.
pub fn classify(record: &AttackMoveRecord, config: &CombatConfig) -> Result<AttackMove, MoveError> {
    let costs = MoveCosts {
        cooldown_seconds: record.cooldown_seconds,
        mana_cost: record.mana_cost,
        stamina_cost: record.stamina_cost,
        base_damage: record.base_damage,
    };
    let spell = SpellShape {
        range: record.range,
        cast_time_seconds: record.cast_time_seconds,
        requires_target: record.requires_target,
    };

    let attack = if record.projectile_speed > 0.0 {
        AttackMove::projectile(
            record.name.as_str(),
            costs,
            spell,
            record.projectile_speed,
            record.area_radius,
            config.default_collision_radius,
        )
    } else if record.area_radius > 0.0 {
        AttackMove::area(
            record.name.as_str(),
            costs,
            spell,
            AreaShape {
                area_radius: record.area_radius,
                cone_angle_degrees: record.cone_angle_degrees,
                duration_seconds: record.duration_seconds,
                tick_interval_seconds: record.tick_interval_seconds,
                channel_duration_seconds: record.channel_duration_seconds,
            },
        )
    } else if record.range > 0.0 && (record.cast_time_seconds > 0.0 || record.mana_cost > 0.0) {
        AttackMove::spell(record.name.as_str(), costs, spell)
    } else {
        AttackMove::new(
            record.name.as_str(),
            costs,
            AttackMoveKind::Basic(MeleeShape {
                range: record.range,
            }),
        )
    }?;

    debug!(name = %attack.name(), class = %attack.class(), "classified attack move");
    Ok(attack)
}
