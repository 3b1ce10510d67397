//! The [`Grid`] type: a jagged 2D matrix of diagram characters.
//!
//! Rows may have different lengths. Every lookup is bounds-safe: anything
//! outside the stored cells reads as [`BLANK`], exactly like a literal
//! space. The grid also owns the single validation sweep,
//! [`process`](Grid::process), which walks the non-blank cells in row-major
//! order and hands each one to a [`CellHandler`].

use std::fmt;

use crate::geom::{Direction, Point};
use crate::tile::{BLANK, Tile};

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// An immutable, jagged character matrix.
///
/// Positions are `i32` pairs, so only the first `i32::MAX` rows and columns
/// are addressable; anything beyond reads as [`BLANK`] and is skipped by
/// [`iter`](Grid::iter) and [`process`](Grid::process).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Create a grid from rows of characters.
    pub fn new(rows: Vec<Vec<char>>) -> Self {
        Self { rows }
    }

    /// Create a grid from string rows, one row per item.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|r| r.as_ref().chars().collect())
                .collect(),
        }
    }

    /// Create a grid from a block of text, one row per line.
    ///
    /// Only line breaks are interpreted (`"\n"` or `"\r\n"`); every other
    /// character is stored as-is.
    pub fn from_lines(text: &str) -> Self {
        Self::from_rows(text.lines())
    }

    /// Number of rows.
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of `row`, or 0 if the row does not exist.
    #[inline]
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// Whether the grid stores no cells at all.
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(Vec::is_empty)
    }

    /// The character at `(row, col)`.
    ///
    /// Returns [`BLANK`] for negative coordinates, coordinates past the end
    /// of the grid or of that particular row, and literal spaces. Never
    /// fails.
    pub fn point(&self, row: i32, col: i32) -> char {
        if row < 0 || col < 0 {
            return BLANK;
        }
        self.rows
            .get(row as usize)
            .and_then(|r| r.get(col as usize))
            .copied()
            .unwrap_or(BLANK)
    }

    /// The character at `p`. See [`point`](Grid::point).
    #[inline]
    pub fn at(&self, p: Point) -> char {
        self.point(p.row, p.col)
    }

    /// The classified tile at `p`, or `None` if the character there is
    /// outside the grammar.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<Tile> {
        Tile::classify(self.at(p))
    }

    /// Snapshot of the four characters adjacent to `(row, col)`.
    ///
    /// Accepts any coordinates; neighbours past the `i32` range read as
    /// [`BLANK`].
    #[inline]
    pub fn neighbors(&self, row: i32, col: i32) -> Neighborhood {
        self.neighbors_of(Point::new(row, col))
    }

    /// [`neighbors`](Grid::neighbors) keyed by `Point`.
    pub fn neighbors_of(&self, p: Point) -> Neighborhood {
        let at = |d: Direction| {
            let (dr, dc) = d.offset();
            match (p.row.checked_add(dr), p.col.checked_add(dc)) {
                (Some(row), Some(col)) => self.point(row, col),
                _ => BLANK,
            }
        };
        Neighborhood {
            up: at(Direction::Up),
            down: at(Direction::Down),
            left: at(Direction::Left),
            right: at(Direction::Right),
        }
    }

    /// Row-major iterator over every stored `(Point, char)`, spaces
    /// included.
    ///
    /// Cells whose row or column does not fit in an `i32` are not
    /// addressable and are skipped.
    pub fn iter(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .map_while(|(r, row)| i32::try_from(r).ok().map(|r| (r, row)))
            .flat_map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map_while(move |(c, &ch)| i32::try_from(c).ok().map(|c| (Point::new(r, c), ch)))
            })
    }

    /// Run one validation sweep over every non-blank cell.
    ///
    /// Cells are visited left to right, top to bottom. For each cell:
    ///
    /// 1. a character outside the grammar aborts with
    ///    [`SweepError::InvalidChar`];
    /// 2. if [`CellHandler::exact`] claims the tile, its outcome is used and
    ///    a failure aborts with [`SweepError::Rejected`], carrying the
    ///    handler's error unchanged;
    /// 3. otherwise [`CellHandler::pattern`] is consulted and a `false`
    ///    aborts with [`SweepError::ValidationFailed`].
    ///
    /// The first failing cell in sweep order is the one reported.
    pub fn process<H: CellHandler>(&self, handler: &mut H) -> Result<(), SweepError<H::Error>> {
        for (pos, ch) in self.iter() {
            if ch == BLANK {
                continue;
            }
            let Some(tile) = Tile::classify(ch) else {
                return Err(SweepError::InvalidChar { ch, pos });
            };
            match handler.exact(self, pos, tile) {
                Some(Ok(())) => {}
                Some(Err(source)) => return Err(SweepError::Rejected { pos, ch, source }),
                None => {
                    if !handler.pattern(self, pos, tile) {
                        return Err(SweepError::ValidationFailed { pos, ch });
                    }
                }
            }
        }
        Ok(())
    }
}

impl From<Vec<Vec<char>>> for Grid {
    fn from(rows: Vec<Vec<char>>) -> Self {
        Self::new(rows)
    }
}

impl From<&[&str]> for Grid {
    fn from(rows: &[&str]) -> Self {
        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for &ch in row {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Neighborhood
// ---------------------------------------------------------------------------

/// The four characters adjacent to a position. Missing cells are
/// [`BLANK`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
}

impl Neighborhood {
    /// The neighbour in direction `d`.
    #[inline]
    pub const fn get(&self, d: Direction) -> char {
        match d {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// `(Direction, char)` pairs in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, char)> + '_ {
        Direction::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

// ---------------------------------------------------------------------------
// CellHandler / SweepError
// ---------------------------------------------------------------------------

/// Per-cell callbacks for [`Grid::process`].
///
/// `exact` stands in for a handler registered for one specific tile: return
/// `None` for tiles it does not handle. `pattern` runs for every tile that
/// `exact` declined.
pub trait CellHandler {
    /// Error produced by [`exact`](CellHandler::exact).
    type Error;

    fn exact(&mut self, grid: &Grid, pos: Point, tile: Tile) -> Option<Result<(), Self::Error>> {
        let _ = (grid, pos, tile);
        None
    }

    fn pattern(&mut self, grid: &Grid, pos: Point, tile: Tile) -> bool {
        let _ = (grid, pos, tile);
        true
    }
}

/// Why a [`Grid::process`] sweep stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepError<E> {
    /// A character outside the grammar.
    InvalidChar { ch: char, pos: Point },
    /// An exact handler failed; `source` is its error, unchanged.
    Rejected { pos: Point, ch: char, source: E },
    /// A pattern handler failed.
    ValidationFailed { pos: Point, ch: char },
}

impl<E> SweepError<E> {
    /// Location of the offending cell.
    pub fn pos(&self) -> Point {
        match self {
            Self::InvalidChar { pos, .. }
            | Self::Rejected { pos, .. }
            | Self::ValidationFailed { pos, .. } => *pos,
        }
    }
}

impl<E: fmt::Display> fmt::Display for SweepError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidChar { ch, pos } => write!(
                f,
                "invalid character \u{201c}{ch}\u{201d} at row {}, column {}",
                pos.row, pos.col
            ),
            Self::Rejected { source, .. } => write!(f, "{source}"),
            Self::ValidationFailed { ch, .. } => write!(f, "validation failed for {ch}"),
        }
    }
}

impl<E> std::error::Error for SweepError<E> where E: std::error::Error + 'static {}
