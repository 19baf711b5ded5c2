use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::input::InputSlots;
use crate::window::InputWindow;

use super::{ComboError, ComboNode, ComboState, ComboTransition, NodeIndex, TransitionIndex};

/// Graph-wide tuning.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComboGraphSettings {
    reset_to_entry_after_seconds: f32,
}

impl ComboGraphSettings {
    /// Negative or non-finite timeouts are clamped to `0` (auto-reset disabled).
    pub fn new(reset_to_entry_after_seconds: f32) -> Self {
        let reset_to_entry_after_seconds = if reset_to_entry_after_seconds.is_finite() {
            reset_to_entry_after_seconds.max(0.0)
        } else {
            0.0
        };
        Self {
            reset_to_entry_after_seconds,
        }
    }

    pub fn reset_to_entry_after_seconds(&self) -> f32 {
        self.reset_to_entry_after_seconds
    }

    #[inline]
    pub fn auto_reset_enabled(&self) -> bool {
        self.reset_to_entry_after_seconds > 0.0
    }
}

/// Immutable combo state machine shared by every actor's [`ComboState`].
///
/// Nodes live in an arena; transition targets are pre-resolved to
/// [`NodeIndex`] handles so the per-tick scan never touches the id table.
#[derive(Clone, Debug)]
pub struct ComboGraph {
    id: String,
    entry: NodeIndex,
    settings: ComboGraphSettings,
    nodes: Vec<ComboNode>,
    index: HashMap<String, NodeIndex>,
}

impl ComboGraph {
    pub fn builder(
        id: impl Into<String>,
        entry: ComboNode,
        settings: ComboGraphSettings,
    ) -> Result<ComboGraphBuilder, ComboError> {
        ComboGraphBuilder::new(id, entry, settings)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn settings(&self) -> &ComboGraphSettings {
        &self.settings
    }

    pub fn entry(&self) -> &ComboNode {
        &self.nodes[self.entry.get()]
    }

    pub fn entry_index(&self) -> NodeIndex {
        self.entry
    }

    /// Looks a node up by id. Unknown ids yield `None`.
    pub fn node(&self, id: &str) -> Option<&ComboNode> {
        self.index.get(id).map(|&index| &self.nodes[index.get()])
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub fn node_at(&self, index: NodeIndex) -> Option<&ComboNode> {
        self.nodes.get(index.get())
    }

    /// Nodes in registration order; the entry node comes first.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &ComboNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn transition_count(&self) -> usize {
        self.nodes.iter().map(|node| node.transitions().len()).sum()
    }

    /// New per-actor state starting at the entry node.
    pub fn create_state(self: &Arc<Self>) -> ComboState {
        ComboState::new(Arc::clone(self))
    }

    /// Same query as [`ComboState::next_transition`], resolved to the transition itself.
    pub fn next_transition(
        &self,
        state: &ComboState,
        pressed: InputSlots,
    ) -> Option<&ComboTransition> {
        self.node_at(state.current_index())?
            .find_next_transition(state.time_in_current_node(), pressed)
            .map(|(_, transition)| transition)
    }

    /// Node handles of a state belong to the graph that created it.
    pub(crate) fn resolve(&self, index: NodeIndex) -> &ComboNode {
        &self.nodes[index.get()]
    }
}

/// Registers nodes and transitions, then publishes an immutable [`ComboGraph`].
#[derive(Debug)]
pub struct ComboGraphBuilder {
    graph: ComboGraph,
}

impl ComboGraphBuilder {
    /// Starts a graph with its entry node already registered.
    pub fn new(
        id: impl Into<String>,
        entry: ComboNode,
        settings: ComboGraphSettings,
    ) -> Result<Self, ComboError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ComboError::EmptyGraphId);
        }
        let mut index = HashMap::new();
        index.insert(entry.id().to_owned(), NodeIndex(0));
        Ok(Self {
            graph: ComboGraph {
                id,
                entry: NodeIndex(0),
                settings,
                nodes: vec![entry],
                index,
            },
        })
    }

    pub fn add_node(&mut self, node: ComboNode) -> Result<NodeIndex, ComboError> {
        if self.graph.index.contains_key(node.id()) {
            return Err(ComboError::DuplicateNode(node.id().to_owned()));
        }
        let index = NodeIndex(self.graph.nodes.len() as u32);
        self.graph.index.insert(node.id().to_owned(), index);
        self.graph.nodes.push(node);
        Ok(index)
    }

    /// Appends a transition to `from`'s list. Both endpoints must already be registered.
    pub fn add_transition(
        &mut self,
        from: &str,
        id: impl Into<String>,
        to: &str,
        required_input: InputSlots,
        input_window_override: Option<InputWindow>,
    ) -> Result<TransitionIndex, ComboError> {
        let id = id.into();
        let source = self
            .graph
            .node_index(from)
            .ok_or_else(|| ComboError::UnknownNode(from.to_owned()))?;
        if id.is_empty() {
            return Err(ComboError::EmptyTransitionId {
                node: from.to_owned(),
            });
        }
        let target = self
            .graph
            .node_index(to)
            .ok_or_else(|| ComboError::UnknownTarget {
                transition: id.clone(),
                target: to.to_owned(),
            })?;
        if required_input.is_empty() {
            warn!(transition = %id, "transition requires no input and is eligible on every tick");
        }

        let transition = ComboTransition::new(id, target, required_input, input_window_override);
        Ok(self.graph.nodes[source.get()].push_transition(transition))
    }

    pub fn node(&self, id: &str) -> Option<&ComboNode> {
        self.graph.node(id)
    }

    pub fn build(self) -> ComboGraph {
        debug!(
            graph = %self.graph.id,
            nodes = self.graph.len(),
            transitions = self.graph.transition_count(),
            "combo graph built"
        );
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::{CancelWindow, DamageWindow};

    fn node(id: &str) -> ComboNode {
        ComboNode::new(
            id,
            id,
            InputWindow::from_bounds(0.1, 0.4).unwrap(),
            CancelWindow::from_bounds(0.0, 0.1).unwrap(),
        )
        .unwrap()
    }

    fn graph() -> ComboGraph {
        let mut builder =
            ComboGraph::builder("sword", node("idle"), ComboGraphSettings::new(1.0)).unwrap();
        let light_1 =
            node("light_1").with_damage_window(DamageWindow::from_bounds(0.2, 0.25).unwrap());
        builder.add_node(light_1).unwrap();
        builder.add_node(node("light_2")).unwrap();
        builder
            .add_transition("idle", "idle->light_1", "light_1", InputSlots::SLOT1, None)
            .unwrap();
        builder
            .add_transition("light_1", "light_1->light_2", "light_2", InputSlots::SLOT1, None)
            .unwrap();
        builder.build()
    }

    #[test]
    fn settings_clamp_negative_timeouts() {
        assert_eq!(ComboGraphSettings::new(-3.0).reset_to_entry_after_seconds(), 0.0);
        assert_eq!(ComboGraphSettings::new(f32::NAN).reset_to_entry_after_seconds(), 0.0);
        assert!(!ComboGraphSettings::new(0.0).auto_reset_enabled());
        assert!(ComboGraphSettings::new(0.5).auto_reset_enabled());
    }

    #[test]
    fn entry_is_registered_at_construction() {
        let graph = graph();
        assert_eq!(graph.entry().id(), "idle");
        assert_eq!(graph.node("idle"), Some(graph.entry()));
        assert_eq!(graph.entry_index(), NodeIndex(0));
        assert_eq!(graph.len(), 3);
        assert_eq!(graph.transition_count(), 2);
    }

    #[test]
    fn unknown_lookups_are_negative_not_errors() {
        let graph = graph();
        assert!(graph.node("heavy").is_none());
        assert!(graph.node_at(NodeIndex(42)).is_none());
    }

    #[test]
    fn transition_targets_are_pre_resolved() {
        let graph = graph();
        let light_1 = graph.node("light_1").unwrap();
        let transition = &light_1.transitions()[0];
        assert_eq!(transition.id(), "light_1->light_2");
        assert_eq!(graph.node_at(transition.target()).unwrap().id(), "light_2");
    }

    #[test]
    fn construction_errors_fail_fast() {
        assert_eq!(
            ComboGraph::builder("", node("idle"), ComboGraphSettings::default()).unwrap_err(),
            ComboError::EmptyGraphId
        );

        let mut builder =
            ComboGraph::builder("g", node("idle"), ComboGraphSettings::default()).unwrap();
        assert_eq!(
            builder.add_node(node("idle")).unwrap_err(),
            ComboError::DuplicateNode("idle".into())
        );
        assert_eq!(
            builder
                .add_transition("ghost", "ghost->idle", "idle", InputSlots::SLOT1, None)
                .unwrap_err(),
            ComboError::UnknownNode("ghost".into())
        );
        assert_eq!(
            builder
                .add_transition("idle", "", "idle", InputSlots::SLOT1, None)
                .unwrap_err(),
            ComboError::EmptyTransitionId {
                node: "idle".into()
            }
        );
        assert_eq!(
            builder
                .add_transition("idle", "idle->ghost", "ghost", InputSlots::SLOT1, None)
                .unwrap_err(),
            ComboError::UnknownTarget {
                transition: "idle->ghost".into(),
                target: "ghost".into()
            }
        );
    }

    #[test]
    fn graph_level_query_mirrors_state() {
        let graph = Arc::new(graph());
        let mut state = graph.create_state();
        assert!(graph.next_transition(&state, InputSlots::SLOT1).is_none());

        state.tick(0.1);
        let transition = graph.next_transition(&state, InputSlots::SLOT1).unwrap();
        assert_eq!(transition.id(), "idle->light_1");
        assert!(graph.next_transition(&state, InputSlots::SLOT2).is_none());
    }
}
