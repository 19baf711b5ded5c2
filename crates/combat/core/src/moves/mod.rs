//! Attack move descriptors.
//!
//! An [`AttackMove`] is the immutable mechanical definition of one move:
//! shared costs and damage plus a variant payload describing its shape.
//! Descriptors come either from persisted rows via the classifier
//! ([`classify`]) or from the direct authoring constructors below.
//!
//! # Variants
//!
//! - **Basic**: melee, single target, instant
//! - **Spell**: targeted, no travel
//! - **Projectile**: a spell that travels and may explode on impact
//! - **Area**: ground AoE, nova or cone, optionally persistent or channeled
//! - **Combo**: melee that chains over several steps

mod catalog;
mod classify;
mod record;

pub use catalog::MoveCatalog;
pub use classify::classify;
pub use record::AttackMoveRecord;

use crate::error::{CombatError, ErrorSeverity};

/// Discriminant of [`AttackMoveKind`], used for tooling and logs.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MoveClass {
    Basic,
    Spell,
    Projectile,
    Area,
    Combo,
}

/// Melee reach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeleeShape {
    pub range: f32,
}

/// Targeted spell parameters shared by every spell-like variant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpellShape {
    pub range: f32,
    pub cast_time_seconds: f32,
    pub requires_target: bool,
}

/// Travel and impact parameters of a projectile spell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectileShape {
    pub projectile_speed: f32,
    /// Always equal to the spell's range.
    pub max_travel_distance: f32,
    /// On-impact area radius. `0` means single target.
    pub explosion_radius: f32,
    pub collision_radius: f32,
}

impl ProjectileShape {
    #[inline]
    pub fn has_explosion(&self) -> bool {
        self.explosion_radius > 0.0
    }
}

/// Area spell parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AreaShape {
    pub area_radius: f32,
    /// `> 0` turns the circle into a cone.
    pub cone_angle_degrees: f32,
    pub duration_seconds: f32,
    pub tick_interval_seconds: f32,
    pub channel_duration_seconds: f32,
}

impl AreaShape {
    #[inline]
    pub fn is_cone(&self) -> bool {
        self.cone_angle_degrees > 0.0
    }

    /// Ticks damage or healing repeatedly over its duration.
    #[inline]
    pub fn is_persistent(&self) -> bool {
        self.duration_seconds > 0.0 && self.tick_interval_seconds > 0.0
    }

    #[inline]
    pub fn is_channeled(&self) -> bool {
        self.channel_duration_seconds > 0.0
    }
}

/// Variant payload of an attack move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AttackMoveKind {
    Basic(MeleeShape),
    Spell(SpellShape),
    Projectile {
        spell: SpellShape,
        projectile: ProjectileShape,
    },
    Area {
        spell: SpellShape,
        area: AreaShape,
    },
    Combo {
        melee: MeleeShape,
        steps: u32,
    },
}

impl AttackMoveKind {
    pub fn class(&self) -> MoveClass {
        match self {
            Self::Basic(_) => MoveClass::Basic,
            Self::Spell(_) => MoveClass::Spell,
            Self::Projectile { .. } => MoveClass::Projectile,
            Self::Area { .. } => MoveClass::Area,
            Self::Combo { .. } => MoveClass::Combo,
        }
    }
}

/// Immutable mechanical description of one move.
#[derive(Clone, Debug, PartialEq)]
pub struct AttackMove {
    name: String,
    cooldown_seconds: f32,
    mana_cost: f32,
    stamina_cost: f32,
    base_damage: f32,
    kind: AttackMoveKind,
}

/// Shared numeric fields of every move, as authored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveCosts {
    pub cooldown_seconds: f32,
    pub mana_cost: f32,
    pub stamina_cost: f32,
    pub base_damage: f32,
}

impl AttackMove {
    /// Validates and assembles a descriptor. Every numeric field must be
    /// finite and non-negative, and the name must not be empty.
    pub fn new(
        name: impl Into<String>,
        costs: MoveCosts,
        kind: AttackMoveKind,
    ) -> Result<Self, MoveError> {
        let name = name.into();
        if name.is_empty() {
            return Err(MoveError::EmptyName);
        }

        let mut fields = vec![
            ("cooldown_seconds", costs.cooldown_seconds),
            ("mana_cost", costs.mana_cost),
            ("stamina_cost", costs.stamina_cost),
            ("base_damage", costs.base_damage),
        ];
        kind_fields(&kind, &mut fields);
        for (field, value) in fields {
            check_field(&name, field, value)?;
        }

        Ok(Self {
            name,
            cooldown_seconds: costs.cooldown_seconds,
            mana_cost: costs.mana_cost,
            stamina_cost: costs.stamina_cost,
            base_damage: costs.base_damage,
            kind,
        })
    }

    /// Melee, single target, instant.
    pub fn basic(
        name: impl Into<String>,
        base_damage: f32,
        range: f32,
        cooldown_seconds: f32,
    ) -> Result<Self, MoveError> {
        Self::new(
            name,
            MoveCosts {
                cooldown_seconds,
                base_damage,
                ..MoveCosts::default()
            },
            AttackMoveKind::Basic(MeleeShape { range }),
        )
    }

    /// Targeted spell with no travel.
    pub fn spell(
        name: impl Into<String>,
        costs: MoveCosts,
        spell: SpellShape,
    ) -> Result<Self, MoveError> {
        Self::new(name, costs, AttackMoveKind::Spell(spell))
    }

    /// Travelling spell. `max_travel_distance` is taken from the spell's range.
    pub fn projectile(
        name: impl Into<String>,
        costs: MoveCosts,
        spell: SpellShape,
        projectile_speed: f32,
        explosion_radius: f32,
        collision_radius: f32,
    ) -> Result<Self, MoveError> {
        let projectile = ProjectileShape {
            projectile_speed,
            max_travel_distance: spell.range,
            explosion_radius,
            collision_radius,
        };
        Self::new(name, costs, AttackMoveKind::Projectile { spell, projectile })
    }

    pub fn area(
        name: impl Into<String>,
        costs: MoveCosts,
        spell: SpellShape,
        area: AreaShape,
    ) -> Result<Self, MoveError> {
        Self::new(name, costs, AttackMoveKind::Area { spell, area })
    }

    /// Chaining melee with `steps` hits.
    pub fn combo(
        name: impl Into<String>,
        costs: MoveCosts,
        range: f32,
        steps: u32,
    ) -> Result<Self, MoveError> {
        Self::new(
            name,
            costs,
            AttackMoveKind::Combo {
                melee: MeleeShape { range },
                steps,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cooldown_seconds(&self) -> f32 {
        self.cooldown_seconds
    }

    pub fn mana_cost(&self) -> f32 {
        self.mana_cost
    }

    pub fn stamina_cost(&self) -> f32 {
        self.stamina_cost
    }

    pub fn base_damage(&self) -> f32 {
        self.base_damage
    }

    pub fn kind(&self) -> &AttackMoveKind {
        &self.kind
    }

    pub fn class(&self) -> MoveClass {
        self.kind.class()
    }

    /// Reach of the move, whatever its variant.
    pub fn range(&self) -> f32 {
        match &self.kind {
            AttackMoveKind::Basic(melee) | AttackMoveKind::Combo { melee, .. } => melee.range,
            AttackMoveKind::Spell(spell)
            | AttackMoveKind::Projectile { spell, .. }
            | AttackMoveKind::Area { spell, .. } => spell.range,
        }
    }

    /// Spell parameters for spell-like variants.
    pub fn spell_shape(&self) -> Option<&SpellShape> {
        match &self.kind {
            AttackMoveKind::Spell(spell)
            | AttackMoveKind::Projectile { spell, .. }
            | AttackMoveKind::Area { spell, .. } => Some(spell),
            AttackMoveKind::Basic(_) | AttackMoveKind::Combo { .. } => None,
        }
    }
}

fn kind_fields(kind: &AttackMoveKind, fields: &mut Vec<(&'static str, f32)>) {
    let spell_fields = |spell: &SpellShape, fields: &mut Vec<(&'static str, f32)>| {
        fields.push(("range", spell.range));
        fields.push(("cast_time_seconds", spell.cast_time_seconds));
    };
    match kind {
        AttackMoveKind::Basic(melee) | AttackMoveKind::Combo { melee, .. } => {
            fields.push(("range", melee.range));
        }
        AttackMoveKind::Spell(spell) => spell_fields(spell, fields),
        AttackMoveKind::Projectile { spell, projectile } => {
            spell_fields(spell, fields);
            fields.push(("projectile_speed", projectile.projectile_speed));
            fields.push(("max_travel_distance", projectile.max_travel_distance));
            fields.push(("explosion_radius", projectile.explosion_radius));
            fields.push(("collision_radius", projectile.collision_radius));
        }
        AttackMoveKind::Area { spell, area } => {
            spell_fields(spell, fields);
            fields.push(("area_radius", area.area_radius));
            fields.push(("cone_angle_degrees", area.cone_angle_degrees));
            fields.push(("duration_seconds", area.duration_seconds));
            fields.push(("tick_interval_seconds", area.tick_interval_seconds));
            fields.push(("channel_duration_seconds", area.channel_duration_seconds));
        }
    }
}

fn check_field(name: &str, field: &'static str, value: f32) -> Result<(), MoveError> {
    if !value.is_finite() {
        return Err(MoveError::NonFinite {
            name: name.to_owned(),
            field,
        });
    }
    if value < 0.0 {
        return Err(MoveError::NegativeField {
            name: name.to_owned(),
            field,
            value,
        });
    }
    Ok(())
}

/// Errors raised while building descriptors or the move catalog.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MoveError {
    #[error("attack move name must not be empty")]
    EmptyName,

    #[error("attack move '{name}': {field} must be non-negative, got {value}")]
    NegativeField {
        name: String,
        field: &'static str,
        value: f32,
    },

    #[error("attack move '{name}': {field} must be finite")]
    NonFinite { name: String, field: &'static str },

    #[error("attack move '{0}' is defined more than once")]
    DuplicateName(String),
}

impl CombatError for MoveError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "MOVE_EMPTY_NAME",
            Self::NegativeField { .. } => "MOVE_NEGATIVE_FIELD",
            Self::NonFinite { .. } => "MOVE_NON_FINITE",
            Self::DuplicateName(_) => "MOVE_DUPLICATE_NAME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spell(range: f32) -> SpellShape {
        SpellShape {
            range,
            cast_time_seconds: 0.5,
            requires_target: false,
        }
    }

    #[test]
    fn projectile_travel_distance_tracks_range() {
        let bolt =
            AttackMove::projectile("bolt", MoveCosts::default(), spell(30.0), 20.0, 0.0, 0.25)
                .unwrap();
        match bolt.kind() {
            AttackMoveKind::Projectile { projectile, .. } => {
                assert_eq!(projectile.max_travel_distance, 30.0);
                assert!(!projectile.has_explosion());
            }
            other => panic!("expected projectile, got {other:?}"),
        }
        assert_eq!(bolt.class(), MoveClass::Projectile);
        assert_eq!(bolt.range(), 30.0);
    }

    #[test]
    fn area_predicates() {
        let area = AreaShape {
            area_radius: 4.0,
            cone_angle_degrees: 45.0,
            duration_seconds: 3.0,
            tick_interval_seconds: 0.0,
            channel_duration_seconds: 2.0,
        };
        assert!(area.is_cone());
        assert!(!area.is_persistent());
        assert!(area.is_channeled());

        let pool = AreaShape {
            cone_angle_degrees: 0.0,
            tick_interval_seconds: 0.5,
            channel_duration_seconds: 0.0,
            ..area
        };
        assert!(!pool.is_cone());
        assert!(pool.is_persistent());
        assert!(!pool.is_channeled());
    }

    #[test]
    fn negative_fields_are_rejected() {
        let err = AttackMove::basic("jab", 5.0, -1.0, 0.5).unwrap_err();
        assert_eq!(
            err,
            MoveError::NegativeField {
                name: "jab".into(),
                field: "range",
                value: -1.0
            }
        );
        assert_eq!(err.error_code(), "MOVE_NEGATIVE_FIELD");

        let costs = MoveCosts {
            mana_cost: -3.0,
            ..MoveCosts::default()
        };
        assert!(AttackMove::spell("zap", costs, spell(10.0)).is_err());
    }

    #[test]
    fn non_finite_and_empty_names_are_rejected() {
        assert_eq!(
            AttackMove::basic("", 1.0, 1.0, 1.0).unwrap_err(),
            MoveError::EmptyName
        );
        assert!(matches!(
            AttackMove::basic("jab", f32::NAN, 1.0, 1.0),
            Err(MoveError::NonFinite { field: "base_damage", .. })
        ));
    }

    #[test]
    fn combo_keeps_melee_shape() {
        let flurry = AttackMove::combo("flurry", MoveCosts::default(), 2.0, 3).unwrap();
        assert_eq!(flurry.class(), MoveClass::Combo);
        assert_eq!(flurry.range(), 2.0);
        assert!(flurry.spell_shape().is_none());
        assert!(matches!(flurry.kind(), AttackMoveKind::Combo { steps: 3, .. }));
    }

    #[test]
    fn move_class_names_are_snake_case() {
        assert_eq!(MoveClass::Projectile.to_string(), "projectile");
        assert_eq!("AREA".parse::<MoveClass>().unwrap(), MoveClass::Area);
    }
}
