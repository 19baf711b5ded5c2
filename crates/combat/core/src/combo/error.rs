use crate::error::{CombatError, ErrorSeverity};
use crate::window::WindowError;

/// Errors raised while building nodes, transitions and graphs.
///
/// Every variant is fatal: a graph that fails to build must never be published.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ComboError {
    #[error("combo graph id must not be empty")]
    EmptyGraphId,

    #[error("combo node id must not be empty")]
    EmptyNodeId,

    #[error("combo node `{node}` has an empty attack move id")]
    EmptyMoveId { node: String },

    #[error("transition out of `{node}` has an empty id")]
    EmptyTransitionId { node: String },

    #[error("combo node `{0}` is already registered")]
    DuplicateNode(String),

    #[error("combo node `{0}` is not registered")]
    UnknownNode(String),

    #[error("transition `{transition}` targets unregistered node `{target}`")]
    UnknownTarget { transition: String, target: String },

    #[error(transparent)]
    Window(#[from] WindowError),
}

impl CombatError for ComboError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyGraphId => "COMBO_EMPTY_GRAPH_ID",
            Self::EmptyNodeId => "COMBO_EMPTY_NODE_ID",
            Self::EmptyMoveId { .. } => "COMBO_EMPTY_MOVE_ID",
            Self::EmptyTransitionId { .. } => "COMBO_EMPTY_TRANSITION_ID",
            Self::DuplicateNode(_) => "COMBO_DUPLICATE_NODE",
            Self::UnknownNode(_) => "COMBO_UNKNOWN_NODE",
            Self::UnknownTarget { .. } => "COMBO_UNKNOWN_TARGET",
            Self::Window(err) => err.error_code(),
        }
    }
}
