//! **waymark-core**: grid types for ASCII route diagrams.
//!
//! This crate provides the foundational types shared by the *waymark*
//! workspace: `(row, col)` geometry and directions, the closed tile grammar
//! of diagram characters, and a jagged, bounds-safe character grid with a
//! single validation sweep.

pub mod geom;
pub mod grid;
pub mod tile;

pub use geom::{Axis, Direction, Point};
pub use grid::{CellHandler, Grid, Neighborhood, SweepError};
pub use tile::{BLANK, Tile};
