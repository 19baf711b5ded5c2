//! Validate a combo profile and print its graph.

use anyhow::Result;
use clap::Parser;
use combat_content::ContentFactory;
use combat_core::{ComboGraph, ComboNode, TimeWindow};
use console::style;
use serde::Serialize;

use super::OutputFormat;

/// Validate and print a combo profile's graph
#[derive(Parser)]
pub struct Graph {
    /// Profile name under `combos/` (without `.ron`); omit to check every profile
    #[arg(value_name = "PROFILE")]
    profile: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Serialize)]
struct GraphView<'a> {
    id: &'a str,
    entry: &'a str,
    reset_to_entry_after_seconds: f32,
    nodes: Vec<NodeView<'a>>,
}

#[derive(Serialize)]
struct NodeView<'a> {
    id: &'a str,
    attack_move_id: &'a str,
    damage_windows: Vec<(f32, f32)>,
    input_window: (f32, f32),
    cancel_window: (f32, f32),
    transitions: Vec<TransitionView<'a>>,
}

#[derive(Serialize)]
struct TransitionView<'a> {
    id: &'a str,
    target: &'a str,
    required_input: u32,
    input_window: Option<(f32, f32)>,
}

impl Graph {
    pub fn execute(self, factory: &ContentFactory) -> Result<()> {
        let config = factory.load_config()?;
        let catalog = factory.load_moves(&config)?;

        let names = match self.profile {
            Some(name) => vec![name],
            None => factory.profile_names()?,
        };

        let mut views = Vec::new();
        for name in &names {
            let graph = factory.load_graph(name, &catalog, &config)?;
            match self.format {
                OutputFormat::Summary => print_summary(&graph),
                OutputFormat::Json => views.push(serde_json::to_value(view(&graph))?),
            }
        }

        if let OutputFormat::Json = self.format {
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        Ok(())
    }
}

fn bounds(window: TimeWindow) -> (f32, f32) {
    (window.start(), window.end())
}

fn view(graph: &ComboGraph) -> GraphView<'_> {
    GraphView {
        id: graph.id(),
        entry: graph.entry().id(),
        reset_to_entry_after_seconds: graph.settings().reset_to_entry_after_seconds(),
        nodes: graph.nodes().map(|(_, node)| node_view(graph, node)).collect(),
    }
}

fn node_view<'a>(graph: &'a ComboGraph, node: &'a ComboNode) -> NodeView<'a> {
    NodeView {
        id: node.id(),
        attack_move_id: node.attack_move_id(),
        damage_windows: node
            .damage_windows()
            .iter()
            .map(|w| bounds(w.window()))
            .collect(),
        input_window: bounds(node.input_window().window()),
        cancel_window: bounds(node.cancel_window().window()),
        transitions: node
            .transitions()
            .iter()
            .map(|t| TransitionView {
                id: t.id(),
                target: graph.node_at(t.target()).map_or("?", |n| n.id()),
                required_input: t.required_input().bits(),
                input_window: t.input_window_override().map(|w| bounds(w.window())),
            })
            .collect(),
    }
}

fn print_summary(graph: &ComboGraph) {
    let reset = graph.settings().reset_to_entry_after_seconds();
    println!(
        "{} {} (entry {}, {})",
        style("Combo graph:").bold().cyan(),
        style(graph.id()).bold(),
        graph.entry().id(),
        if reset > 0.0 {
            format!("idle reset after {reset:.2}s")
        } else {
            "no idle reset".to_owned()
        }
    );

    for (_, node) in graph.nodes() {
        let (input_start, input_end) = bounds(node.input_window().window());
        println!(
            "  {} {}",
            style(node.id()).bold().yellow(),
            style(format!("input [{input_start:.2}, {input_end:.2}]")).dim()
        );
        for window in node.damage_windows() {
            let (start, end) = bounds(window.window());
            println!("      damage [{start:.2}, {end:.2}]");
        }
        for transition in node.transitions() {
            let target = graph.node_at(transition.target()).map_or("?", |n| n.id());
            let slots: Vec<String> = transition
                .required_input()
                .slots()
                .map(|slot| format!("Slot{}", slot.index()))
                .collect();
            let window = transition
                .input_window_override()
                .map(|w| {
                    let (start, end) = bounds(w.window());
                    format!(" [{start:.2}, {end:.2}]")
                })
                .unwrap_or_default();
            println!(
                "      {} {} on {}{}",
                style("→").green(),
                target,
                slots.join("+"),
                window
            );
        }
    }
    println!();
}
