//! Route finding for ASCII diagrams.
//!
//! A diagram is a [`Grid`](waymark_core::Grid) of characters with one start
//! marker `@`, an end marker `x`, roads `-` and `|`, turns `+` and letters
//! `A` to `Z`. [`Pathfinder::find_path`] runs two phases:
//!
//! - a single **validation sweep** ([`validate`]) checking the character
//!   grammar and the markers, and
//! - a deterministic **walk** ([`Walk`]) from `@` to `x`, driven by the
//!   per-tile rules in [`transition`].
//!
//! The result is either a [`PathReport`] (the visit trace plus the letters
//! collected along it) or a [`PathFailure`] carrying a located
//! [`PathError`] and whatever was traced before it.
//!
//! # Connectivity
//!
//! Only *real* neighbours count when a cell looks around: a `-` above or
//! below, or a `|` to the left or right, runs past the cell rather than into
//! it. See [`connectable`].
//!
//! ```
//! use waymark_paths::Pathfinder;
//!
//! let report = Pathfinder::from_rows(["@-A-+", "    |", "x-B-+"])
//!     .find_path()
//!     .unwrap();
//! assert_eq!(report.path_string(), "@-A-+|+-B-x");
//! assert_eq!(report.letters, "AB");
//! ```

mod config;
mod connect;
mod error;
mod pathfinder;
mod transition;
mod validate;

#[cfg(test)]
mod fixtures;

pub use config::{EndMarkers, PathConfig};
pub use connect::{connectable, is_real, real_count, real_directions};
pub use error::{MoveFault, PathError, TurnFault};
pub use pathfinder::{PathFailure, PathReport, Pathfinder, Visit, Walk};
pub use transition::{
    Heading, Step, check_turn, next_from_letter, next_from_road, next_from_start,
    next_from_turn, transition,
};
pub use validate::{Markers, validate};
