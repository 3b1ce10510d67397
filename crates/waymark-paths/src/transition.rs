//! Per-tile transition rules of the walk.
//!
//! Each rule looks only at the current cell, its four neighbours and the
//! direction the walk arrived in. [`transition`] dispatches on the tile
//! kind; the `next_from_*` helpers are the individual rules.

use waymark_core::{Axis, BLANK, Direction, Grid, Point, Tile};

use crate::connect::{connectable, is_real, real_directions};
use crate::error::{MoveFault, PathError, TurnFault};

/// Walk state: how the walk arrived at the current cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    /// Standing on the start marker before the first move.
    Start,
    /// Arrived by moving in this direction.
    Moving(Direction),
    /// Reached the end marker.
    Finish,
    /// Stopped on an error.
    Error,
}

impl Heading {
    /// The direction of travel, if moving.
    #[inline]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Moving(d) => Some(d),
            _ => None,
        }
    }

    /// Whether the walk is over.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Finish | Self::Error)
    }
}

/// Outcome of one successful transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Move one cell in this direction.
    Move(Direction),
    /// The current cell is the end marker.
    Finish,
}

/// Compute the next step from `pos`, given how the walk arrived there.
pub fn transition(grid: &Grid, pos: Point, heading: Heading) -> Result<Step, PathError> {
    let Some(tile) = grid.tile(pos) else {
        return Err(PathError::InvalidChar {
            ch: grid.at(pos),
            pos,
        });
    };
    match tile {
        Tile::Start => next_from_start(grid, pos).map(Step::Move),
        Tile::End => Ok(Step::Finish),
        Tile::Horizontal | Tile::Vertical => {
            next_from_road(grid, pos, arrived(pos, heading)?).map(Step::Move)
        }
        Tile::Turn => next_from_turn(grid, pos, arrived(pos, heading)?).map(Step::Move),
        Tile::Letter(_) => next_from_letter(grid, pos, arrived(pos, heading)?).map(Step::Move),
        Tile::Blank => Err(PathError::Movement {
            pos,
            fault: MoveFault::UnexpectedEnd,
        }),
    }
}

fn arrived(pos: Point, heading: Heading) -> Result<Direction, PathError> {
    heading.direction().ok_or(PathError::Movement {
        pos,
        fault: MoveFault::NoHeading,
    })
}

/// Leave the start marker toward its real neighbour, checked up, down,
/// left, right.
pub fn next_from_start(grid: &Grid, pos: Point) -> Result<Direction, PathError> {
    real_directions(grid, pos).next().ok_or(PathError::Movement {
        pos,
        fault: MoveFault::AtStart,
    })
}

/// Roads never turn: keep going in `dir` as long as something is there.
pub fn next_from_road(grid: &Grid, pos: Point, dir: Direction) -> Result<Direction, PathError> {
    if grid.at(pos.step(dir)) == BLANK {
        return Err(PathError::Movement {
            pos,
            fault: MoveFault::UnexpectedEnd,
        });
    }
    Ok(dir)
}

/// Check that the turn at `pos` joins exactly two roads at a right angle.
pub fn check_turn(grid: &Grid, pos: Point) -> Result<(), PathError> {
    let (mut vertical, mut horizontal) = (0usize, 0usize);
    for d in real_directions(grid, pos) {
        match d.axis() {
            Axis::Vertical => vertical += 1,
            Axis::Horizontal => horizontal += 1,
        }
    }
    let count = vertical + horizontal;
    if count != 2 {
        return Err(PathError::Turn {
            pos,
            fault: TurnFault::RoadCount(count),
        });
    }
    if vertical == 0 || horizontal == 0 {
        return Err(PathError::Turn {
            pos,
            fault: TurnFault::StraightPath,
        });
    }
    Ok(())
}

/// Turn off the current axis: from up/down prefer left, from left/right
/// prefer up.
pub fn next_from_turn(grid: &Grid, pos: Point, dir: Direction) -> Result<Direction, PathError> {
    check_turn(grid, pos)?;
    dir.turns()
        .into_iter()
        .find(|&t| is_real(grid, pos, t))
        .ok_or(PathError::Movement {
            pos,
            fault: MoveFault::AtTurn,
        })
}

/// Letters continue straight when they can and turn otherwise.
pub fn next_from_letter(grid: &Grid, pos: Point, dir: Direction) -> Result<Direction, PathError> {
    let n = grid.neighbors_of(pos);
    std::iter::once(dir)
        .chain(dir.turns())
        .find(|&d| connectable(n.get(d), d.axis()))
        .ok_or(PathError::Movement {
            pos,
            fault: MoveFault::AtLetter,
        })
}
