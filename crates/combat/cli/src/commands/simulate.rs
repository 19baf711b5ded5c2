//! Replay scripted input through a combo state.

use std::ops::Range;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use combat_content::ContentFactory;
use combat_core::{ComboEvent, ComboGraph, InputSlots, MoveCatalog, NodeIndex};
use console::style;
use serde::Serialize;

use super::OutputFormat;

/// Replay scripted input through a combo state
#[derive(Parser)]
pub struct Simulate {
    /// Profile name under `combos/` (without `.ron`)
    #[arg(value_name = "PROFILE")]
    profile: String,

    /// Hold a chord over a tick range, e.g. `0..3=Slot1` or `5..7=Slot1+Slot2`
    #[arg(short, long = "press", value_name = "TICKS=CHORD", value_parser = parse_press)]
    presses: Vec<Press>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 40)]
    ticks: u32,

    /// Seconds per tick (defaults to 1 / tick_rate from config)
    #[arg(long, value_name = "SECONDS")]
    dt: Option<f32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

/// A chord held for a half-open range of ticks.
#[derive(Clone, Debug, PartialEq)]
struct Press {
    ticks: Range<u32>,
    chord: InputSlots,
}

fn parse_press(arg: &str) -> Result<Press, String> {
    let (ticks, chord) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected TICKS=CHORD, got '{arg}'"))?;
    let chord = InputSlots::parse_chord(chord).map_err(|e| e.to_string())?;

    let parse_tick = |s: &str| {
        s.trim()
            .parse::<u32>()
            .map_err(|e| format!("invalid tick '{s}': {e}"))
    };
    let ticks = match ticks.split_once("..") {
        Some((start, end)) => parse_tick(start)?..parse_tick(end)?,
        None => {
            let tick = parse_tick(ticks)?;
            tick..tick.saturating_add(1)
        }
    };
    if ticks.is_empty() {
        return Err(format!("empty tick range in '{arg}'"));
    }
    Ok(Press { ticks, chord })
}

#[derive(Serialize)]
struct TickRecord {
    tick: u32,
    pressed: u32,
    node: String,
    attack_move: String,
    time_in_node: f32,
    events: Vec<String>,
    damage_applied: bool,
}

impl Simulate {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        let config = factory.load_config()?;
        let catalog = factory.load_moves(&config)?;
        let graph = Arc::new(factory.load_graph(&self.profile, &catalog, &config)?);
        let dt = self.dt.unwrap_or_else(|| config.tick_delta());
        if !(dt > 0.0) {
            anyhow::bail!("tick delta must be positive, got {dt}");
        }

        let mut state = graph.create_state();
        let mut records = Vec::new();
        for tick in 0..self.ticks {
            let pressed = self
                .presses
                .iter()
                .filter(|press| press.ticks.contains(&tick))
                .fold(InputSlots::empty(), |acc, press| acc | press.chord);

            let events = state.step(pressed, dt);
            let damage_applied = state.should_apply_damage();
            if damage_applied {
                state.mark_damage_applied();
            }

            records.push(TickRecord {
                tick,
                pressed: pressed.bits(),
                node: state.current_node().id().to_owned(),
                attack_move: state.attack_move_id().to_owned(),
                time_in_node: state.time_in_current_node(),
                events: events.iter().map(|e| describe(&graph, e)).collect(),
                damage_applied,
            });
        }

        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
            OutputFormat::Summary => {
                println!(
                    "{} {} ({} ticks, dt {:.3}s)",
                    style("Simulating:").bold().cyan(),
                    style(graph.id()).bold(),
                    self.ticks,
                    dt
                );
                for record in &records {
                    if record.events.is_empty() && !record.damage_applied {
                        continue;
                    }
                    for event in &record.events {
                        println!("  tick {:>4}  {}", record.tick, event);
                    }
                    if record.damage_applied {
                        let damage = hit_damage(&catalog, record);
                        println!(
                            "  tick {:>4}  {} {} for {:.1}",
                            record.tick,
                            style("hit").red(),
                            record.attack_move,
                            damage
                        );
                    }
                }
                println!(
                    "{} {} after {:.2}s",
                    style("Final node:").bold().green(),
                    state.current_node().id(),
                    state.time_in_current_node()
                );
            }
        }
        Ok(())
    }
}

/// Base damage of the move the node was playing when the hit landed.
fn hit_damage(catalog: &MoveCatalog, record: &TickRecord) -> f32 {
    catalog
        .get(&record.attack_move)
        .map_or(0.0, |attack| attack.base_damage())
}

fn describe(graph: &ComboGraph, event: &ComboEvent) -> String {
    match *event {
        ComboEvent::ResetToEntry { from } => format!(
            "idle reset {} -> {}",
            node_name(graph, from),
            graph.entry().id()
        ),
        ComboEvent::Transitioned { from, to, .. } => {
            format!("{} -> {}", node_name(graph, from), node_name(graph, to))
        }
    }
}

fn node_name(graph: &ComboGraph, index: NodeIndex) -> &str {
    graph.node_at(index).map_or("?", |node| node.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{AttackMoveRecord, CombatConfig};

    #[test]
    fn press_accepts_ranges_and_single_ticks() {
        assert_eq!(
            parse_press("0..3=Slot1").unwrap(),
            Press {
                ticks: 0..3,
                chord: InputSlots::SLOT1
            }
        );
        assert_eq!(
            parse_press("5=slot1+slot2").unwrap(),
            Press {
                ticks: 5..6,
                chord: InputSlots::SLOT1 | InputSlots::SLOT2
            }
        );
    }

    #[test]
    fn press_rejects_malformed_arguments() {
        assert!(parse_press("Slot1").is_err());
        assert!(parse_press("3..3=Slot1").is_err());
        assert!(parse_press("a..3=Slot1").is_err());
        assert!(parse_press("0..3=Slot99").is_err());
        assert!(parse_press(&format!("{}=Slot1", u32::MAX)).is_err());
    }

    #[test]
    fn hit_damage_reads_the_attack_move() {
        let rows = [AttackMoveRecord {
            range: 2.0,
            base_damage: 12.0,
            ..AttackMoveRecord::named("slash")
        }];
        let catalog = MoveCatalog::from_records(&rows, &CombatConfig::default()).unwrap();
        let record = TickRecord {
            tick: 3,
            pressed: 0,
            node: "opening_slash".into(),
            attack_move: "slash".into(),
            time_in_node: 0.2,
            events: Vec::new(),
            damage_applied: true,
        };
        assert_eq!(hit_damage(&catalog, &record), 12.0);
    }
}
