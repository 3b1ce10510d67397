//! Run configuration for [`Pathfinder`](crate::Pathfinder).

/// How the validation sweep treats more than one end marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndMarkers {
    /// Every `x` is accepted; the last one in sweep order is recorded.
    #[default]
    LastWins,
    /// A second `x` is an error.
    Unique,
}

/// Configuration for a [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathConfig {
    pub end_markers: EndMarkers,
    /// Maximum number of moves the walk may make. `None` means unbounded.
    pub step_limit: Option<usize>,
    /// Stop with [`PathError::Cycle`](crate::PathError::Cycle) when the walk
    /// re-enters a position in a direction it already used. When this is
    /// off and no `step_limit` is set, the walk is capped at four moves per
    /// non-blank cell.
    pub detect_cycles: bool,
    /// Check every turn during the validation sweep, not only the ones the
    /// walk reaches.
    pub eager_turn_check: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            end_markers: EndMarkers::LastWins,
            step_limit: None,
            detect_cycles: true,
            eager_turn_check: false,
        }
    }
}

impl PathConfig {
    /// Set the end-marker policy (builder).
    pub fn with_end_markers(mut self, policy: EndMarkers) -> Self {
        self.end_markers = policy;
        self
    }

    /// Set the step limit (builder).
    pub fn with_step_limit(mut self, limit: usize) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Enable or disable cycle detection (builder).
    pub fn with_cycle_detection(mut self, on: bool) -> Self {
        self.detect_cycles = on;
        self
    }

    /// Enable or disable sweep-time turn checks (builder).
    pub fn with_eager_turn_check(mut self, on: bool) -> Self {
        self.eager_turn_check = on;
        self
    }
}
