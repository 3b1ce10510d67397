//! Error types for diagram validation and traversal.

use std::fmt;

use waymark_core::{Point, SweepError};

/// Why a turn tile is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnFault {
    /// The turn has this many real connections instead of two.
    RoadCount(usize),
    /// The two connections lie on one axis: a disguised straight road.
    StraightPath,
}

/// Why the walk could not leave a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveFault {
    /// The start marker has no real neighbour.
    AtStart,
    /// A road points at a blank cell.
    UnexpectedEnd,
    /// Neither side of a turn is connected. Cannot occur once the turn
    /// has passed [`check_turn`](crate::check_turn), which guarantees one
    /// real connection on each axis.
    AtTurn,
    /// A letter can neither continue nor turn.
    AtLetter,
    /// A road, turn or letter was reached without a direction of travel.
    NoHeading,
}

/// Errors arising from validating or walking a diagram.
///
/// Every variant except [`MissingMarkers`](PathError::MissingMarkers)
/// carries the location it refers to; see [`location`](PathError::location).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathError {
    /// A character outside the diagram grammar.
    InvalidChar { ch: char, pos: Point },
    /// A second start marker.
    MultipleStarts { pos: Point },
    /// A second end marker, when end markers must be unique.
    MultipleEnds { pos: Point },
    /// The sweep finished without seeing a start and/or end marker. The
    /// flags are `true` for each marker that is missing.
    MissingMarkers { start: bool, end: bool },
    /// The start marker does not have exactly one real neighbour.
    StartPoint { pos: Point, count: usize },
    /// A malformed turn.
    Turn { pos: Point, fault: TurnFault },
    /// The walk is stuck.
    Movement { pos: Point, fault: MoveFault },
    /// The walk came back to a position it already left in the same
    /// direction.
    Cycle { pos: Point },
    /// The walk used up its step budget.
    StepLimit { pos: Point, limit: usize },
    /// A generic per-cell check failed during the sweep.
    ValidationFailed { pos: Point, ch: char },
}

impl PathError {
    /// Where the error happened, if it is tied to a cell.
    pub fn location(&self) -> Option<Point> {
        match self {
            Self::MissingMarkers { .. } => None,
            Self::InvalidChar { pos, .. }
            | Self::MultipleStarts { pos }
            | Self::MultipleEnds { pos }
            | Self::StartPoint { pos, .. }
            | Self::Turn { pos, .. }
            | Self::Movement { pos, .. }
            | Self::Cycle { pos }
            | Self::StepLimit { pos, .. }
            | Self::ValidationFailed { pos, .. } => Some(*pos),
        }
    }

    /// Row of [`location`](PathError::location).
    pub fn row(&self) -> Option<i32> {
        self.location().map(|p| p.row)
    }

    /// Column of [`location`](PathError::location).
    pub fn col(&self) -> Option<i32> {
        self.location().map(|p| p.col)
    }

    /// Whether the error was raised before the walk started.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidChar { .. }
                | Self::MultipleStarts { .. }
                | Self::MultipleEnds { .. }
                | Self::MissingMarkers { .. }
                | Self::StartPoint { .. }
                | Self::ValidationFailed { .. }
        )
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { ch, pos } => write!(
                f,
                "invalid character \u{201c}{ch}\u{201d} at row {}, column {}",
                pos.row, pos.col
            ),
            Self::MultipleStarts { pos } => write!(f, "multiple start points: another @ at {pos}"),
            Self::MultipleEnds { pos } => write!(f, "multiple end points: another x at {pos}"),
            Self::MissingMarkers { start, end } => {
                let missing = match (start, end) {
                    (true, true) => "start and end points",
                    (true, false) => "start point",
                    (false, true) => "end point",
                    (false, false) => "nothing",
                };
                write!(f, "start or end point not found: missing {missing}")
            }
            Self::StartPoint { pos, count } => write!(
                f,
                "start point at {pos} must have exactly 1 road, found {count}"
            ),
            Self::Turn { pos, fault } => match fault {
                TurnFault::RoadCount(n) => write!(
                    f,
                    "turn at {pos} must have exactly 2 roads coming into it, found {n}"
                ),
                TurnFault::StraightPath => write!(f, "turn at {pos} must not be a straight path"),
            },
            Self::Movement { pos, fault } => {
                let what = match fault {
                    MoveFault::AtStart => "no valid path found at start",
                    MoveFault::UnexpectedEnd => "path ends unexpectedly",
                    MoveFault::AtTurn => "no valid path found at turn",
                    MoveFault::AtLetter => "no valid path found at letter",
                    MoveFault::NoHeading => "no direction to continue in",
                };
                write!(f, "{what} at {pos}")
            }
            Self::Cycle { pos } => write!(f, "path loops back on itself at {pos}"),
            Self::StepLimit { pos, limit } => {
                write!(f, "step limit of {limit} reached at {pos}")
            }
            Self::ValidationFailed { ch, .. } => write!(f, "validation failed for {ch}"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<SweepError<PathError>> for PathError {
    fn from(e: SweepError<PathError>) -> Self {
        match e {
            SweepError::InvalidChar { ch, pos } => Self::InvalidChar { ch, pos },
            SweepError::Rejected { source, .. } => source,
            SweepError::ValidationFailed { pos, ch } => Self::ValidationFailed { pos, ch },
        }
    }
}
