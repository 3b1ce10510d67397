//! The connection rule shared by start validation, turns and letters.

use waymark_core::{Axis, Direction, Grid, Point, Tile};

/// Whether a neighbour character can connect along `axis`.
///
/// Blank never connects. A road of the other orientation running past a
/// junction is a through-road and does not connect either: `-` above or
/// below, `|` to the left or right.
#[inline]
pub fn connectable(neighbor: char, axis: Axis) -> bool {
    match Tile::classify(neighbor) {
        Some(Tile::Blank) => false,
        Some(tile) => tile.road_axis().is_none_or(|road| road == axis),
        None => true,
    }
}

/// Whether the neighbour of `p` in direction `d` is a real connection.
#[inline]
pub fn is_real(grid: &Grid, p: Point, d: Direction) -> bool {
    connectable(grid.at(p.step(d)), d.axis())
}

/// Directions out of `p` with a real connection, in up, down, left, right
/// order.
pub fn real_directions(grid: &Grid, p: Point) -> impl Iterator<Item = Direction> + '_ {
    let n = grid.neighbors_of(p);
    Direction::ALL
        .into_iter()
        .filter(move |&d| connectable(n.get(d), d.axis()))
}

/// Number of real connections out of `p`.
pub fn real_count(grid: &Grid, p: Point) -> usize {
    real_directions(grid, p).count()
}
