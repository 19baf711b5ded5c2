//! Time windows relative to node entry.
//!
//! A [`TimeWindow`] is an inclusive `[start, end]` interval in seconds. The
//! three wrappers give the same containment test a name that says what the
//! window gates: damage, chaining input, or cancellation.

use crate::error::{CombatError, ErrorSeverity};

/// Errors raised while constructing a [`TimeWindow`].
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum WindowError {
    /// `end` precedes `start`. Bounds are never swapped.
    #[error("time window end {end} precedes start {start}")]
    Inverted { start: f32, end: f32 },

    /// A bound is NaN or infinite.
    #[error("time window bounds must be finite (start {start}, end {end})")]
    NonFinite { start: f32, end: f32 },
}

impl CombatError for WindowError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Inverted { .. } => "WINDOW_INVERTED",
            Self::NonFinite { .. } => "WINDOW_NON_FINITE",
        }
    }
}

/// Inclusive interval `[start, end]` in seconds since node entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWindow {
    start: f32,
    end: f32,
}

impl TimeWindow {
    /// Creates a window, rejecting `end < start` and non-finite bounds.
    pub fn new(start: f32, end: f32) -> Result<Self, WindowError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(WindowError::NonFinite { start, end });
        }
        if end < start {
            return Err(WindowError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    /// A zero-length window at `t`. Still contains `t` itself.
    pub fn instant(t: f32) -> Result<Self, WindowError> {
        Self::new(t, t)
    }

    #[inline]
    pub fn start(&self) -> f32 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f32 {
        self.end
    }

    #[inline]
    pub fn duration(&self) -> f32 {
        self.end - self.start
    }

    /// Both bounds inclusive.
    #[inline]
    pub fn contains(&self, t: f32) -> bool {
        self.start <= t && t <= self.end
    }

    /// True for zero-length windows. Such a window still contains its instant.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// When damage is applied during a node. Nodes may carry several.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageWindow(TimeWindow);

impl DamageWindow {
    pub fn new(window: TimeWindow) -> Self {
        Self(window)
    }

    pub fn from_bounds(start: f32, end: f32) -> Result<Self, WindowError> {
        TimeWindow::new(start, end).map(Self)
    }

    pub fn window(&self) -> TimeWindow {
        self.0
    }

    #[inline]
    pub fn is_active(&self, t: f32) -> bool {
        self.0.contains(t)
    }
}

/// When the next chained input is accepted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputWindow(TimeWindow);

impl InputWindow {
    pub fn new(window: TimeWindow) -> Self {
        Self(window)
    }

    pub fn from_bounds(start: f32, end: f32) -> Result<Self, WindowError> {
        TimeWindow::new(start, end).map(Self)
    }

    pub fn window(&self) -> TimeWindow {
        self.0
    }

    #[inline]
    pub fn is_open(&self, t: f32) -> bool {
        self.0.contains(t)
    }
}

/// When the move may be interrupted by a dodge, block, etc.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CancelWindow(TimeWindow);

impl CancelWindow {
    pub fn new(window: TimeWindow) -> Self {
        Self(window)
    }

    pub fn from_bounds(start: f32, end: f32) -> Result<Self, WindowError> {
        TimeWindow::new(start, end).map(Self)
    }

    pub fn window(&self) -> TimeWindow {
        self.0
    }

    #[inline]
    pub fn can_cancel(&self, t: f32) -> bool {
        self.0.contains(t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        let window = TimeWindow::new(0.1, 0.4).unwrap();
        assert!(window.contains(0.1));
        assert!(window.contains(0.25));
        assert!(window.contains(0.4));
        assert!(!window.contains(0.0999));
        assert!(!window.contains(0.4001));
    }

    #[test]
    fn zero_length_window_contains_its_instant() {
        let window = TimeWindow::instant(0.3).unwrap();
        assert!(window.is_empty());
        assert!(window.contains(0.3));
        assert!(!window.contains(0.31));
        assert_eq!(window.duration(), 0.0);
    }

    #[test]
    fn inverted_window_is_rejected_not_swapped() {
        let err = TimeWindow::new(0.3, 0.1).unwrap_err();
        assert_eq!(err, WindowError::Inverted { start: 0.3, end: 0.1 });
        assert_eq!(err.error_code(), "WINDOW_INVERTED");
        assert!(err.severity().is_fatal());
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        assert!(matches!(
            TimeWindow::new(f32::NAN, 1.0),
            Err(WindowError::NonFinite { .. })
        ));
        assert!(matches!(
            TimeWindow::new(0.0, f32::INFINITY),
            Err(WindowError::NonFinite { .. })
        ));
    }

    #[test]
    fn wrappers_delegate_to_window() {
        let damage = DamageWindow::from_bounds(0.2, 0.25).unwrap();
        let input = InputWindow::from_bounds(0.1, 0.4).unwrap();
        let cancel = CancelWindow::from_bounds(0.0, 0.1).unwrap();

        assert!(damage.is_active(0.25));
        assert!(!damage.is_active(0.3));
        assert!(input.is_open(0.1));
        assert!(!input.is_open(0.05));
        assert!(cancel.can_cancel(0.0));
        assert!(!cancel.can_cancel(0.11));
        assert!(InputWindow::from_bounds(0.5, 0.4).is_err());
    }
}
