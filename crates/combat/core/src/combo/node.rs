use crate::input::InputSlots;
use crate::window::{CancelWindow, DamageWindow, InputWindow};

use super::{ComboError, ComboTransition, TransitionIndex};

/// Arena handle of a node inside its [`super::ComboGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeIndex(pub(crate) u32);

impl NodeIndex {
    #[inline]
    pub fn get(self) -> usize {
        self.0 as usize
    }
}

/// One state of the combo machine: an attack move plus its timing windows.
///
/// All times are seconds since the node was entered. Transitions keep
/// registration order and are only appended while the graph is being built.
#[derive(Clone, Debug, PartialEq)]
pub struct ComboNode {
    id: String,
    attack_move_id: String,
    damage_windows: Vec<DamageWindow>,
    input_window: InputWindow,
    cancel_window: CancelWindow,
    transitions: Vec<ComboTransition>,
}

impl ComboNode {
    pub fn new(
        id: impl Into<String>,
        attack_move_id: impl Into<String>,
        input_window: InputWindow,
        cancel_window: CancelWindow,
    ) -> Result<Self, ComboError> {
        let id = id.into();
        let attack_move_id = attack_move_id.into();
        if id.is_empty() {
            return Err(ComboError::EmptyNodeId);
        }
        if attack_move_id.is_empty() {
            return Err(ComboError::EmptyMoveId { node: id });
        }
        Ok(Self {
            id,
            attack_move_id,
            damage_windows: Vec::new(),
            input_window,
            cancel_window,
            transitions: Vec::new(),
        })
    }

    pub fn with_damage_window(mut self, window: DamageWindow) -> Self {
        self.damage_windows.push(window);
        self
    }

    pub fn with_damage_windows(mut self, windows: impl IntoIterator<Item = DamageWindow>) -> Self {
        self.damage_windows.extend(windows);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attack_move_id(&self) -> &str {
        &self.attack_move_id
    }

    pub fn damage_windows(&self) -> &[DamageWindow] {
        &self.damage_windows
    }

    pub fn input_window(&self) -> InputWindow {
        self.input_window
    }

    pub fn cancel_window(&self) -> CancelWindow {
        self.cancel_window
    }

    pub fn transitions(&self) -> &[ComboTransition] {
        &self.transitions
    }

    pub fn transition(&self, index: TransitionIndex) -> Option<&ComboTransition> {
        self.transitions.get(index.get())
    }

    /// First eligible transition in registration order.
    pub fn find_next_transition(
        &self,
        t: f32,
        pressed: InputSlots,
    ) -> Option<(TransitionIndex, &ComboTransition)> {
        self.transitions
            .iter()
            .enumerate()
            .find(|(_, transition)| transition.is_eligible(pressed, t, self.input_window))
            .map(|(i, transition)| (TransitionIndex(i as u32), transition))
    }

    /// True if `t` lies within any damage window.
    pub fn is_damage_active(&self, t: f32) -> bool {
        self.damage_windows.iter().any(|w| w.is_active(t))
    }

    /// Position of the first damage window containing `t`.
    pub fn active_damage_window(&self, t: f32) -> Option<usize> {
        self.damage_windows.iter().position(|w| w.is_active(t))
    }

    pub fn can_cancel(&self, t: f32) -> bool {
        self.cancel_window.can_cancel(t)
    }

    pub(crate) fn push_transition(&mut self, transition: ComboTransition) -> TransitionIndex {
        let index = TransitionIndex(self.transitions.len() as u32);
        self.transitions.push(transition);
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> ComboNode {
        ComboNode::new(
            "heavy",
            "heavy_swing",
            InputWindow::from_bounds(0.3, 0.7).unwrap(),
            CancelWindow::from_bounds(0.0, 0.05).unwrap(),
        )
        .unwrap()
        .with_damage_windows([
            DamageWindow::from_bounds(0.10, 0.20).unwrap(),
            DamageWindow::from_bounds(0.50, 0.60).unwrap(),
        ])
    }

    #[test]
    fn damage_windows_are_inclusive_and_disjoint() {
        let node = node();
        assert!(node.is_damage_active(0.15));
        assert!(!node.is_damage_active(0.30));
        assert!(node.is_damage_active(0.60));
        assert!(!node.is_damage_active(0.6001));
        assert_eq!(node.active_damage_window(0.15), Some(0));
        assert_eq!(node.active_damage_window(0.60), Some(1));
        assert_eq!(node.active_damage_window(0.30), None);
    }

    #[test]
    fn cancel_window_gates_interrupts() {
        let node = node();
        assert!(node.can_cancel(0.0));
        assert!(node.can_cancel(0.05));
        assert!(!node.can_cancel(0.06));
    }

    #[test]
    fn node_without_windows_never_deals_damage() {
        let node = ComboNode::new(
            "idle",
            "idle",
            InputWindow::from_bounds(0.0, 10.0).unwrap(),
            CancelWindow::from_bounds(0.0, 10.0).unwrap(),
        )
        .unwrap();
        assert!(!node.is_damage_active(0.0));
        assert!(node.find_next_transition(0.0, InputSlots::all()).is_none());
    }

    #[test]
    fn empty_ids_fail_construction() {
        let input = InputWindow::from_bounds(0.0, 1.0).unwrap();
        let cancel = CancelWindow::from_bounds(0.0, 1.0).unwrap();
        assert_eq!(
            ComboNode::new("", "slash", input, cancel).unwrap_err(),
            ComboError::EmptyNodeId
        );
        assert_eq!(
            ComboNode::new("a", "", input, cancel).unwrap_err(),
            ComboError::EmptyMoveId { node: "a".into() }
        );
    }
}
