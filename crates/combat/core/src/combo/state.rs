//! Per-actor combo runtime.
//!
//! The owner of a [`ComboState`] drives it once per tick, in this order:
//!
//! 1. [`ComboState::register_input`]
//! 2. [`ComboState::tick`]
//! 3. [`ComboState::next_transition`]
//! 4. [`ComboState::apply_transition`] when step 3 found one
//!
//! [`ComboState::step`] runs all four and reports what changed.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::input::InputSlots;

use super::{ComboEvent, ComboEvents, ComboGraph, ComboNode, NodeIndex, TransitionIndex};

/// Mutable cursor into a shared [`ComboGraph`], owned by one actor.
#[derive(Clone, Debug)]
pub struct ComboState {
    graph: Arc<ComboGraph>,
    current: NodeIndex,
    time_in_current_node: f32,
    time_since_any_input: f32,
    /// Damage window already hit since entering the current node.
    hit_window: Option<usize>,
}

impl ComboState {
    pub fn new(graph: Arc<ComboGraph>) -> Self {
        let current = graph.entry_index();
        Self {
            graph,
            current,
            time_in_current_node: 0.0,
            time_since_any_input: 0.0,
            hit_window: None,
        }
    }

    pub fn graph(&self) -> &Arc<ComboGraph> {
        &self.graph
    }

    pub fn current_index(&self) -> NodeIndex {
        self.current
    }

    pub fn current_node(&self) -> &ComboNode {
        self.graph.resolve(self.current)
    }

    /// Move id of the active node, read by damage and effect systems.
    pub fn attack_move_id(&self) -> &str {
        self.current_node().attack_move_id()
    }

    pub fn is_at_entry(&self) -> bool {
        self.current == self.graph.entry_index()
    }

    pub fn time_in_current_node(&self) -> f32 {
        self.time_in_current_node
    }

    pub fn time_since_any_input(&self) -> f32 {
        self.time_since_any_input
    }

    /// True while the damage window active now has already been hit.
    pub fn damage_applied_this_tick(&self) -> bool {
        self.hit_window.is_some() && self.hit_window == self.active_damage_window()
    }

    // ===== per-tick protocol =====

    /// Any held slot keeps the combo alive, even before a window opens.
    pub fn register_input(&mut self, pressed: InputSlots) {
        if !pressed.is_empty() {
            self.time_since_any_input = 0.0;
        }
    }

    /// Advances both clocks and applies idle decay.
    ///
    /// Returns the reset event when decay moved the state off a non-entry node.
    /// Once idle past the timeout, every tick resets again.
    pub fn tick(&mut self, dt: f32) -> Option<ComboEvent> {
        self.time_in_current_node += dt;
        self.time_since_any_input += dt;
        trace!(
            node = %self.current_node().id(),
            time_in_node = self.time_in_current_node,
            idle = self.time_since_any_input,
            "combo tick"
        );

        let settings = *self.graph.settings();
        if settings.auto_reset_enabled()
            && self.time_since_any_input >= settings.reset_to_entry_after_seconds()
        {
            let from = self.current;
            self.reset_to_entry();
            (from != self.current).then(|| {
                debug!(
                    from = %self.graph.resolve(from).id(),
                    idle = self.time_since_any_input,
                    "combo idle reset"
                );
                ComboEvent::ResetToEntry { from }
            })
        } else {
            None
        }
    }

    /// First eligible transition out of the current node, in registration order.
    pub fn next_transition(&self, pressed: InputSlots) -> Option<TransitionIndex> {
        self.current_node()
            .find_next_transition(self.time_in_current_node, pressed)
            .map(|(index, _)| index)
    }

    /// Moves to the transition's target. Indices not on the current node are ignored.
    pub fn apply_transition(&mut self, transition: TransitionIndex) -> Option<ComboEvent> {
        let from = self.current;
        let Some(target) = self
            .current_node()
            .transition(transition)
            .map(|transition| transition.target())
        else {
            warn!(
                node = %self.current_node().id(),
                transition = transition.get(),
                "transition index does not belong to the current node"
            );
            return None;
        };

        self.current = target;
        self.time_in_current_node = 0.0;
        self.hit_window = None;
        debug!(
            from = %self.graph.resolve(from).id(),
            to = %self.current_node().id(),
            transition = %self.graph.resolve(from).transitions()[transition.get()].id(),
            "combo transition"
        );
        Some(ComboEvent::Transitioned {
            from,
            to: target,
            transition,
        })
    }

    pub fn reset_to_entry(&mut self) {
        self.current = self.graph.entry_index();
        self.time_in_current_node = 0.0;
        self.hit_window = None;
    }

    /// Runs the whole per-tick protocol.
    pub fn step(&mut self, pressed: InputSlots, dt: f32) -> ComboEvents {
        let mut events = ComboEvents::new();
        self.register_input(pressed);
        if let Some(event) = self.tick(dt) {
            events.push(event);
        }
        if let Some(transition) = self.next_transition(pressed) {
            events.extend(self.apply_transition(transition));
        }
        events
    }

    // ===== read-only queries =====

    pub fn is_damage_active(&self, t: f32) -> bool {
        self.current_node().is_damage_active(t)
    }

    pub fn can_cancel(&self, t: f32) -> bool {
        self.current_node().can_cancel(t)
    }

    /// Damage is active now and this window has not been hit since entering the node.
    pub fn should_apply_damage(&self) -> bool {
        self.active_damage_window().is_some_and(|window| self.hit_window != Some(window))
    }

    /// Records a hit for the damage window active now. No-op outside every window.
    pub fn mark_damage_applied(&mut self) {
        if let Some(window) = self.active_damage_window() {
            self.hit_window = Some(window);
        }
    }

    fn active_damage_window(&self) -> Option<usize> {
        self.current_node().active_damage_window(self.time_in_current_node)
    }
}
