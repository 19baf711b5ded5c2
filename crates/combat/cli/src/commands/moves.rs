//! List the classified move catalog.

use anyhow::Result;
use clap::Parser;
use combat_content::ContentFactory;
use combat_core::{AttackMove, AttackMoveKind, MoveClass};
use console::style;
use serde::Serialize;

use super::OutputFormat;

/// List classified attack moves
#[derive(Parser)]
pub struct Moves {
    /// Only show moves of this class (basic, spell, projectile, area, combo)
    #[arg(short, long, value_name = "CLASS")]
    class: Option<MoveClass>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct MoveRow<'a> {
    name: &'a str,
    class: MoveClass,
    base_damage: f32,
    cooldown_seconds: f32,
    mana_cost: f32,
    stamina_cost: f32,
    range: f32,
    detail: String,
}

impl Moves {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        let config = factory.load_config()?;
        let catalog = factory.load_moves(&config)?;

        let rows: Vec<MoveRow<'_>> = catalog
            .iter()
            .filter(|attack| self.class.is_none_or(|class| attack.class() == class))
            .map(row)
            .collect();

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
            OutputFormat::Summary => {
                println!(
                    "{} {}",
                    style("Move catalog:").bold().cyan(),
                    factory.data_dir().join("moves.ron").display()
                );
                println!();
                for row in &rows {
                    println!(
                        "  {:<16} {:<11} dmg {:>6.1}  cd {:>4.1}s  range {:>5.1}  {}",
                        style(row.name).bold(),
                        style(row.class).yellow(),
                        row.base_damage,
                        row.cooldown_seconds,
                        row.range,
                        style(&row.detail).dim()
                    );
                }
                println!();
                let counts: Vec<String> = catalog
                    .class_counts()
                    .into_iter()
                    .filter(|(_, count)| *count > 0)
                    .map(|(class, count)| format!("{class}: {count}"))
                    .collect();
                println!(
                    "{} {} ({})",
                    style("Total:").bold().green(),
                    catalog.len(),
                    counts.join(", ")
                );
            }
        }
        Ok(())
    }
}

fn row(attack: &AttackMove) -> MoveRow<'_> {
    MoveRow {
        name: attack.name(),
        class: attack.class(),
        base_damage: attack.base_damage(),
        cooldown_seconds: attack.cooldown_seconds(),
        mana_cost: attack.mana_cost(),
        stamina_cost: attack.stamina_cost(),
        range: attack.range(),
        detail: detail(attack.kind()),
    }
}

fn detail(kind: &AttackMoveKind) -> String {
    match kind {
        AttackMoveKind::Basic(_) => String::new(),
        AttackMoveKind::Spell(spell) => format!("cast {:.1}s", spell.cast_time_seconds),
        AttackMoveKind::Projectile { projectile, .. } => {
            let mut text = format!("speed {:.1}", projectile.projectile_speed);
            if projectile.has_explosion() {
                text.push_str(&format!(", explodes r{:.1}", projectile.explosion_radius));
            }
            text
        }
        AttackMoveKind::Area { area, .. } => {
            let mut parts = vec![format!("radius {:.1}", area.area_radius)];
            if area.is_cone() {
                parts.push(format!("cone {:.0}°", area.cone_angle_degrees));
            }
            if area.is_persistent() {
                parts.push(format!(
                    "ticks every {:.1}s for {:.1}s",
                    area.tick_interval_seconds, area.duration_seconds
                ));
            }
            if area.is_channeled() {
                parts.push(format!("channel {:.1}s", area.channel_duration_seconds));
            }
            parts.join(", ")
        }
        AttackMoveKind::Combo { steps, .. } => format!("{steps} steps"),
    }
}
