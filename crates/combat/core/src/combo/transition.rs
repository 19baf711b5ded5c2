use crate::input::InputSlots;
use crate::window::InputWindow;

use super::NodeIndex;

/// Position of a transition within its source node's ordered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TransitionIndex(pub(crate) u32);

impl TransitionIndex {
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// Directed edge from one node to another, gated by input and time.
#[derive(Clone, Debug, PartialEq)]
pub struct ComboTransition {
    id: String,
    target: NodeIndex,
    required_input: InputSlots,
    input_window_override: Option<InputWindow>,
}

impl ComboTransition {
    /// Only the graph builder creates transitions, after resolving `target`.
    pub(crate) fn new(
        id: String,
        target: NodeIndex,
        required_input: InputSlots,
        input_window_override: Option<InputWindow>,
    ) -> Self {
        Self {
            id,
            target,
            required_input,
            input_window_override,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn target(&self) -> NodeIndex {
        self.target
    }

    pub fn required_input(&self) -> InputSlots {
        self.required_input
    }

    pub fn input_window_override(&self) -> Option<InputWindow> {
        self.input_window_override
    }

    /// All required bits are held. Extra pressed bits do not matter.
    #[inline]
    pub fn is_input_satisfied(&self, pressed: InputSlots) -> bool {
        pressed.satisfies(self.required_input)
    }

    /// Window this transition listens on: its override, else the node's window.
    #[inline]
    pub fn effective_window(&self, node_window: InputWindow) -> InputWindow {
        self.input_window_override.unwrap_or(node_window)
    }

    #[inline]
    pub fn is_window_open(&self, t: f32, node_window: InputWindow) -> bool {
        self.effective_window(node_window).is_open(t)
    }

    #[inline]
    pub fn is_eligible(&self, pressed: InputSlots, t: f32, node_window: InputWindow) -> bool {
        self.is_input_satisfied(pressed) && self.is_window_open(t, node_window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_window() -> InputWindow {
        InputWindow::from_bounds(0.1, 0.4).unwrap()
    }

    #[test]
    fn eligibility_requires_every_bit_and_an_open_window() {
        let transition = ComboTransition::new(
            "a->b".into(),
            NodeIndex(1),
            InputSlots::SLOT1 | InputSlots::SLOT2,
            None,
        );
        let both = InputSlots::SLOT1 | InputSlots::SLOT2;

        assert!(transition.is_eligible(both, 0.1, node_window()));
        assert!(transition.is_eligible(both | InputSlots::SLOT9, 0.4, node_window()));
        assert!(!transition.is_eligible(InputSlots::SLOT1, 0.2, node_window()));
        assert!(!transition.is_eligible(both, 0.0999, node_window()));
        assert!(!transition.is_eligible(both, 0.4001, node_window()));
    }

    #[test]
    fn override_replaces_node_window() {
        let transition = ComboTransition::new(
            "a->c".into(),
            NodeIndex(2),
            InputSlots::SLOT3,
            Some(InputWindow::from_bounds(0.5, 0.7).unwrap()),
        );
        assert!(!transition.is_window_open(0.2, node_window()));
        assert!(transition.is_window_open(0.6, node_window()));
        assert_eq!(transition.effective_window(node_window()).window().start(), 0.5);
    }
}
