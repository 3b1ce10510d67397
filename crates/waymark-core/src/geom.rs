//! Geometry primitives: [`Point`], [`Direction`] and [`Axis`].
//!
//! Coordinates are `(row, col)`: rows grow downward, columns grow right.

use std::fmt;

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer position in `(row, col)` order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub row: i32,
    pub col: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a point shifted by (drow, dcol).
    ///
    /// Saturates at the `i32` range. A saturated coordinate is never a
    /// stored cell, so lookups there read as blank.
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row.saturating_add(drow),
            col: self.col.saturating_add(dcol),
        }
    }

    /// The adjacent point one step in direction `d`.
    #[inline]
    pub const fn step(self, d: Direction) -> Self {
        let (dr, dc) = d.offset();
        self.shift(dr, dc)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    /// Row-major: the same order as a top-to-bottom, left-to-right sweep.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Axis / Direction
// ---------------------------------------------------------------------------

/// Orientation of a connection between two adjacent cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Up/down connections.
    Vertical,
    /// Left/right connections.
    Horizontal,
}

/// One of the four cardinal movement directions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in lookup priority order: up, down, left, right.
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(drow, dcol)` unit offset.
    #[inline]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// The axis this direction moves along.
    #[inline]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Up | Self::Down => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// The two perpendicular directions, in turn priority order.
    ///
    /// Moving vertically, a turn prefers left then right; moving
    /// horizontally, it prefers up then down.
    #[inline]
    pub const fn turns(self) -> [Direction; 2] {
        match self.axis() {
            Axis::Vertical => [Self::Left, Self::Right],
            Axis::Horizontal => [Self::Up, Self::Down],
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(s)
    }
}
