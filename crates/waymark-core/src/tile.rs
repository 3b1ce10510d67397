//! The [`Tile`] type, the closed grammar of diagram characters.

use crate::geom::Axis;

/// The blank sentinel: a literal space, and whatever lies outside the grid.
pub const BLANK: char = ' ';

/// Start marker character.
pub const START: char = '@';
/// End marker character.
pub const END: char = 'x';
/// Horizontal road character.
pub const HORIZONTAL: char = '-';
/// Vertical road character.
pub const VERTICAL: char = '|';
/// Turn character.
pub const TURN: char = '+';

/// The kind of a grid cell, derived from its character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    Start,
    End,
    Horizontal,
    Vertical,
    Turn,
    /// An uppercase ASCII waypoint letter.
    Letter(char),
    Blank,
}

impl Tile {
    /// Classify a character. Returns `None` for characters outside the
    /// grammar.
    pub const fn classify(ch: char) -> Option<Tile> {
        match ch {
            START => Some(Self::Start),
            END => Some(Self::End),
            HORIZONTAL => Some(Self::Horizontal),
            VERTICAL => Some(Self::Vertical),
            TURN => Some(Self::Turn),
            BLANK => Some(Self::Blank),
            'A'..='Z' => Some(Self::Letter(ch)),
            _ => None,
        }
    }

    /// The axis of a straight road, if this tile is one.
    #[inline]
    pub const fn road_axis(self) -> Option<Axis> {
        match self {
            Self::Horizontal => Some(Axis::Horizontal),
            Self::Vertical => Some(Axis::Vertical),
            _ => None,
        }
    }
}
