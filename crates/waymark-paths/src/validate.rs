//! The validation sweep: grammar, start and end markers.

use waymark_core::{CellHandler, Grid, Point, Tile};

use crate::config::{EndMarkers, PathConfig};
use crate::connect::real_count;
use crate::error::PathError;
use crate::transition::check_turn;

/// Start and end positions found by [`validate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Markers {
    pub start: Point,
    pub end: Point,
}

/// Sweep handler that claims `@` and `x`.
struct MarkerScan<'a> {
    config: &'a PathConfig,
    start: Option<Point>,
    end: Option<Point>,
}

impl CellHandler for MarkerScan<'_> {
    type Error = PathError;

    fn exact(&mut self, grid: &Grid, pos: Point, tile: Tile) -> Option<Result<(), PathError>> {
        match tile {
            Tile::Start => Some(self.start_marker(grid, pos)),
            Tile::End => Some(self.end_marker(pos)),
            _ => None,
        }
    }

    fn pattern(&mut self, grid: &Grid, pos: Point, tile: Tile) -> bool {
        !(self.config.eager_turn_check && tile == Tile::Turn && check_turn(grid, pos).is_err())
    }
}

impl MarkerScan<'_> {
    fn start_marker(&mut self, grid: &Grid, pos: Point) -> Result<(), PathError> {
        if self.start.is_some() {
            return Err(PathError::MultipleStarts { pos });
        }
        let count = real_count(grid, pos);
        if count != 1 {
            return Err(PathError::StartPoint { pos, count });
        }
        self.start = Some(pos);
        Ok(())
    }

    fn end_marker(&mut self, pos: Point) -> Result<(), PathError> {
        if self.end.is_some() && self.config.end_markers == EndMarkers::Unique {
            return Err(PathError::MultipleEnds { pos });
        }
        self.end = Some(pos);
        Ok(())
    }
}

/// Sweep `grid` once and locate its start and end markers.
///
/// Fails on the first cell, in row-major order, that breaks the grammar or
/// a marker rule; then fails if either marker was never seen.
pub fn validate(grid: &Grid, config: &PathConfig) -> Result<Markers, PathError> {
    let mut scan = MarkerScan {
        config,
        start: None,
        end: None,
    };
    grid.process(&mut scan).map_err(|e| {
        log::debug!("validation sweep stopped at {}: {e}", e.pos());
        e
    })?;
    match (scan.start, scan.end) {
        (Some(start), Some(end)) => Ok(Markers { start, end }),
        (start, end) => Err(PathError::MissingMarkers {
            start: start.is_none(),
            end: end.is_none(),
        }),
    }
}
