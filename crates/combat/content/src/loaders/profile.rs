//! Combo profile loader.
//!
//! A profile authors one combo graph. Node ids are move ids; bindings are the
//! openers out of the entry node and transitions chain the rest.
//!
//! ```ron
//! ComboProfile(
//!     combo_profile: "sword",
//!     entry_move: "idle",
//!     reset_to_entry_after_seconds: Some(1.0),
//!     nodes: [
//!         (move_id: "idle", input_window: (0.0, 600.0), cancel_window: (0.0, 600.0)),
//!         (move_id: "light_1", damage_windows: [(0.2, 0.25)],
//!          input_window: (0.1, 0.4), cancel_window: (0.0, 0.1)),
//!     ],
//!     bindings: [(input: "Slot1", move_id: "light_1")],
//!     transitions: [],
//! )
//! ```
//!
//! Transitions out of a node are registered by descending `priority`, ties
//! keeping file order, with bindings counting as priority 0 ahead of
//! same-priority transitions. The runtime still picks the first eligible one.

use std::cmp::Reverse;
use std::path::Path;

use combat_core::{
    CancelWindow, CombatConfig, ComboGraph, ComboGraphSettings, ComboNode, DamageWindow,
    InputSlots, InputWindow, MoveCatalog,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{LoadResult, read_file};

/// Combo profile structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComboProfile {
    pub combo_profile: String,
    pub entry_move: String,
    /// Falls back to the config's default when absent.
    #[serde(default)]
    pub reset_to_entry_after_seconds: Option<f32>,
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub bindings: Vec<BindingSpec>,
    #[serde(default)]
    pub transitions: Vec<TransitionSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeSpec {
    pub move_id: String,
    #[serde(default)]
    pub damage_windows: Vec<(f32, f32)>,
    pub input_window: (f32, f32),
    pub cancel_window: (f32, f32),
}

/// Opener from the entry node: pressing `input` starts `move_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BindingSpec {
    pub input: String,
    pub move_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub from_move: String,
    pub to_move: String,
    pub input: String,
    #[serde(default)]
    pub priority: i32,
    /// Overrides the source node's input window.
    #[serde(default)]
    pub input_window: Option<(f32, f32)>,
}

/// A transition ready for registration.
struct Edge<'a> {
    from: &'a str,
    to: &'a str,
    required_input: InputSlots,
    priority: i32,
    input_window_override: Option<InputWindow>,
}

impl ComboProfile {
    /// Builds the immutable graph, checking every move against `catalog`.
    pub fn build(&self, catalog: &MoveCatalog, config: &CombatConfig) -> LoadResult<ComboGraph> {
        let name = &self.combo_profile;
        for spec in &self.nodes {
            if !catalog.contains(&spec.move_id) {
                anyhow::bail!(
                    "Combo profile '{}' references unknown move '{}'",
                    name,
                    spec.move_id
                );
            }
        }

        let (entry_position, entry_spec) = self
            .nodes
            .iter()
            .enumerate()
            .find(|(_, spec)| spec.move_id == self.entry_move)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Combo profile '{}' has no node for entry move '{}'",
                    name,
                    self.entry_move
                )
            })?;

        let settings = ComboGraphSettings::new(
            self.reset_to_entry_after_seconds
                .unwrap_or(config.default_reset_to_entry_after_seconds),
        );
        let mut builder =
            ComboGraph::builder(name.as_str(), build_node(name, entry_spec)?, settings)
                .map_err(|e| anyhow::anyhow!("Combo profile '{}': {}", name, e))?;

        // A repeated entry id still goes through add_node and is rejected there.
        for (_, spec) in self
            .nodes
            .iter()
            .enumerate()
            .filter(|&(position, _)| position != entry_position)
        {
            builder
                .add_node(build_node(name, spec)?)
                .map_err(|e| anyhow::anyhow!("Combo profile '{}': {}", name, e))?;
        }

        for edge in self.ordered_edges()? {
            builder
                .add_transition(
                    edge.from,
                    format!("{}->{}", edge.from, edge.to),
                    edge.to,
                    edge.required_input,
                    edge.input_window_override,
                )
                .map_err(|e| anyhow::anyhow!("Combo profile '{}': {}", name, e))?;
        }

        let graph = builder.build();
        info!(
            profile = %graph.id(),
            entry = %graph.entry().id(),
            nodes = graph.len(),
            transitions = graph.transition_count(),
            reset_after = graph.settings().reset_to_entry_after_seconds(),
            "built combo graph"
        );
        Ok(graph)
    }

    /// Bindings then transitions, stably sorted by descending priority.
    fn ordered_edges(&self) -> LoadResult<Vec<Edge<'_>>> {
        let name = &self.combo_profile;
        let mut edges = Vec::with_capacity(self.bindings.len() + self.transitions.len());

        for binding in &self.bindings {
            edges.push(Edge {
                from: &self.entry_move,
                to: &binding.move_id,
                required_input: parse_input(name, &binding.input)?,
                priority: 0,
                input_window_override: None,
            });
        }
        for transition in &self.transitions {
            let input_window_override = transition
                .input_window
                .map(|(start, end)| InputWindow::from_bounds(start, end))
                .transpose()
                .map_err(|e| {
                    anyhow::anyhow!(
                        "Combo profile '{}' transition {}->{}: {}",
                        name,
                        transition.from_move,
                        transition.to_move,
                        e
                    )
                })?;
            edges.push(Edge {
                from: &transition.from_move,
                to: &transition.to_move,
                required_input: parse_input(name, &transition.input)?,
                priority: transition.priority,
                input_window_override,
            });
        }

        edges.sort_by_key(|edge| Reverse(edge.priority));
        Ok(edges)
    }
}

fn parse_input(profile: &str, description: &str) -> LoadResult<InputSlots> {
    InputSlots::parse_chord(description)
        .map_err(|e| anyhow::anyhow!("Combo profile '{}': {}", profile, e))
}

fn build_node(profile: &str, spec: &NodeSpec) -> LoadResult<ComboNode> {
    let window_error =
        |e| anyhow::anyhow!("Combo profile '{}' node '{}': {}", profile, spec.move_id, e);

    let input = InputWindow::from_bounds(spec.input_window.0, spec.input_window.1)
        .map_err(window_error)?;
    let cancel = CancelWindow::from_bounds(spec.cancel_window.0, spec.cancel_window.1)
        .map_err(window_error)?;
    let damage = spec
        .damage_windows
        .iter()
        .map(|&(start, end)| DamageWindow::from_bounds(start, end))
        .collect::<Result<Vec<_>, _>>()
        .map_err(window_error)?;

    let node = ComboNode::new(spec.move_id.as_str(), spec.move_id.as_str(), input, cancel)
        .map_err(|e| anyhow::anyhow!("Combo profile '{}': {}", profile, e))?;
    Ok(node.with_damage_windows(damage))
}

/// Loader for combo profiles from RON files.
pub struct ComboProfileLoader;

impl ComboProfileLoader {
    pub fn load(path: &Path) -> LoadResult<ComboProfile> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<ComboProfile> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combo profile RON: {}", e))
    }
}
