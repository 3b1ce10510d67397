//! The [`Pathfinder`]: validation sweep followed by the deterministic walk.

use std::collections::HashSet;
use std::fmt;

use waymark_core::{BLANK, Grid, Point, Tile};

use crate::config::PathConfig;
use crate::error::PathError;
use crate::transition::{Heading, Step, transition};
use crate::validate::{Markers, validate};

/// One entry of the visit trace.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visit {
    pub pos: Point,
    pub ch: char,
}

/// A successful walk from start marker to end marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathReport {
    /// Every visited cell in order, ending with the end marker.
    pub trace: Vec<Visit>,
    /// Letters in order of first visit, each coordinate counted once.
    pub letters: String,
}

impl PathReport {
    /// The characters of the trace as a string.
    pub fn path_string(&self) -> String {
        self.trace.iter().map(|v| v.ch).collect()
    }
}

/// A failed run, with everything gathered before the failure.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathFailure {
    /// Cells visited before the failure; empty for validation errors.
    pub trace: Vec<Visit>,
    /// Letters collected before the failure.
    pub letters: String,
    pub error: PathError,
}

impl PathFailure {
    fn validation(error: PathError) -> Self {
        Self {
            trace: Vec::new(),
            letters: String::new(),
            error,
        }
    }

    /// The characters of the partial trace as a string.
    pub fn path_string(&self) -> String {
        self.trace.iter().map(|v| v.ch).collect()
    }
}

impl fmt::Display for PathFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl std::error::Error for PathFailure {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

// ---------------------------------------------------------------------------
// Walk
// ---------------------------------------------------------------------------

/// Step-by-step walk over a validated grid.
///
/// Yields each visited cell. Iteration stops after the end marker or at the
/// first error, which is then available from [`error`](Walk::error).
pub struct Walk<'a> {
    grid: &'a Grid,
    markers: Markers,
    pos: Point,
    heading: Heading,
    seen: Option<HashSet<(Point, Heading)>>,
    limit: Option<usize>,
    steps: usize,
    error: Option<PathError>,
}

impl<'a> Walk<'a> {
    /// Start a walk at `markers.start`.
    pub fn new(grid: &'a Grid, markers: Markers, config: &PathConfig) -> Self {
        let limit = match (config.step_limit, config.detect_cycles) {
            (Some(limit), _) => Some(limit),
            (None, true) => None,
            (None, false) => Some(4 * grid.iter().filter(|&(_, ch)| ch != BLANK).count()),
        };
        Self {
            grid,
            markers,
            pos: markers.start,
            heading: Heading::Start,
            seen: config.detect_cycles.then(HashSet::new),
            limit,
            steps: 0,
            error: None,
        }
    }

    /// Markers this walk runs between.
    pub fn markers(&self) -> Markers {
        self.markers
    }

    /// Current position.
    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Number of moves made so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Whether the walk reached the end marker.
    pub fn is_finished(&self) -> bool {
        self.heading == Heading::Finish
    }

    /// The error that stopped the walk, if any.
    pub fn error(&self) -> Option<&PathError> {
        self.error.as_ref()
    }

    /// Consume the walk, returning its error if it stopped on one.
    pub fn into_error(self) -> Option<PathError> {
        self.error
    }

    fn fail(&mut self, error: PathError) {
        log::trace!("walk stopped at {}: {error}", self.pos);
        self.heading = Heading::Error;
        self.error = Some(error);
    }
}

impl Iterator for Walk<'_> {
    type Item = Visit;

    fn next(&mut self) -> Option<Visit> {
        if self.heading.is_terminal() {
            return None;
        }
        if let Some(seen) = self.seen.as_mut() {
            if !seen.insert((self.pos, self.heading)) {
                let pos = self.pos;
                self.fail(PathError::Cycle { pos });
                return None;
            }
        }

        let visit = Visit {
            pos: self.pos,
            ch: self.grid.at(self.pos),
        };
        match transition(self.grid, self.pos, self.heading) {
            Ok(Step::Finish) => {
                self.heading = Heading::Finish;
            }
            Ok(Step::Move(d)) => match self.limit {
                Some(limit) if self.steps >= limit => {
                    let pos = self.pos;
                    self.fail(PathError::StepLimit { pos, limit });
                }
                _ => {
                    log::trace!("{} '{}' -> {d}", self.pos, visit.ch);
                    self.pos = self.pos.step(d);
                    self.heading = Heading::Moving(d);
                    self.steps += 1;
                }
            },
            Err(e) => self.fail(e),
        }
        Some(visit)
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Validates a diagram and walks its single route.
///
/// A `Pathfinder` holds only the grid and its configuration; every call to
/// [`find_path`](Pathfinder::find_path) starts from scratch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pathfinder {
    grid: Grid,
    config: PathConfig,
}

impl Pathfinder {
    /// Create a pathfinder over `grid` with the default configuration.
    pub fn new(grid: impl Into<Grid>) -> Self {
        Self::with_config(grid, PathConfig::default())
    }

    /// Create a pathfinder over an already built grid.
    pub fn from_grid(grid: Grid) -> Self {
        Self::with_config(grid, PathConfig::default())
    }

    /// Create a pathfinder from string rows.
    pub fn from_rows<I, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Grid::from_rows(rows))
    }

    /// Create a pathfinder with an explicit configuration.
    pub fn with_config(grid: impl Into<Grid>, config: PathConfig) -> Self {
        Self {
            grid: grid.into(),
            config,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Run the validation sweep alone.
    pub fn validate(&self) -> Result<Markers, PathError> {
        validate(&self.grid, &self.config)
    }

    /// Start a step-by-step walk between already validated markers.
    pub fn walk(&self, markers: Markers) -> Walk<'_> {
        Walk::new(&self.grid, markers, &self.config)
    }

    /// Validate the diagram, then walk it from `@` to `x`.
    ///
    /// Validation errors come back with an empty trace. Walk errors carry
    /// the trace and letters gathered up to the failing cell, which is the
    /// last trace entry (except for cycles, where the revisited cell is
    /// not repeated).
    pub fn find_path(&self) -> Result<PathReport, PathFailure> {
        let markers = match self.validate() {
            Ok(m) => m,
            Err(error) => {
                log::debug!("diagram rejected: {error}");
                return Err(PathFailure::validation(error));
            }
        };

        let mut walk = self.walk(markers);
        let mut trace = Vec::new();
        let mut letters = String::new();
        let mut collected = HashSet::new();
        for visit in walk.by_ref() {
            if let Some(Tile::Letter(c)) = Tile::classify(visit.ch) {
                if collected.insert(visit.pos) {
                    letters.push(c);
                }
            }
            trace.push(visit);
        }

        match walk.into_error() {
            None => {
                log::debug!("path found: {} cells, letters {letters:?}", trace.len());
                Ok(PathReport { trace, letters })
            }
            Some(error) => {
                log::debug!("walk failed after {} cells: {error}", trace.len());
                Err(PathFailure {
                    trace,
                    letters,
                    error,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EndMarkers;
    use crate::error::{MoveFault, TurnFault};
    use crate::fixtures;

    fn run(diagram: &str) -> Result<PathReport, PathFailure> {
        Pathfinder::from_grid(Grid::from_lines(diagram)).find_path()
    }

    fn ok(diagram: &str) -> PathReport {
        match run(diagram) {
            Ok(r) => r,
            Err(f) => panic!("expected a path, got: {f}\n{diagram}"),
        }
    }

    fn err(diagram: &str) -> PathFailure {
        match run(diagram) {
            Ok(r) => panic!("expected a failure, got {:?}\n{diagram}", r.path_string()),
            Err(f) => f,
        }
    }

    // -----------------------------------------------------------------------
    // Valid diagrams
    // -----------------------------------------------------------------------

    #[test]
    fn valid_fixtures() {
        for fx in fixtures::VALID {
            let r = ok(fx.diagram);
            assert_eq!(r.path_string(), fx.path, "{}", fx.name);
            assert_eq!(r.letters, fx.letters, "{}", fx.name);
        }
    }

    #[test]
    fn rectangle_without_letters() {
        let r = Pathfinder::from_rows(["@---+", "    |", "x---+"])
            .find_path()
            .unwrap();
        assert_eq!(r.path_string(), "@---+|+---x");
        assert_eq!(r.letters, "");
    }

    #[test]
    fn single_column() {
        let r = Pathfinder::from_rows(["@", "|", "x"]).find_path().unwrap();
        assert_eq!(r.path_string(), "@|x");
        assert_eq!(
            r.trace,
            vec![
                Visit {
                    pos: Point::new(0, 0),
                    ch: '@'
                },
                Visit {
                    pos: Point::new(1, 0),
                    ch: '|'
                },
                Visit {
                    pos: Point::new(2, 0),
                    ch: 'x'
                },
            ]
        );
    }

    #[test]
    fn from_char_rows() {
        let rows = vec![vec!['@', '-', 'A', '-', 'x']];
        let r = Pathfinder::new(rows).find_path().unwrap();
        assert_eq!(r.letters, "A");
    }

    #[test]
    fn end_visit_is_last() {
        let r = ok(fixtures::BASIC.diagram);
        assert_eq!(r.trace.last().map(|v| v.ch), Some('x'));
        assert_eq!(r.trace.first().map(|v| v.ch), Some('@'));
    }

    #[test]
    fn letter_prefers_straight_over_turn() {
        let r = Pathfinder::from_rows(["@-A-x", "  |  ", "  +-B"])
            .find_path()
            .unwrap();
        assert_eq!(r.path_string(), "@-A-x");
        assert_eq!(r.letters, "A");
    }

    #[test]
    fn crossing_letter_collected_once() {
        let r = ok(fixtures::NO_DOUBLE_COLLECT.diagram);
        assert_eq!(r.letters, "GOONIES");
        let o_visits = r.trace.iter().filter(|v| v.ch == 'O').count();
        assert_eq!(o_visits, 3);
    }

    #[test]
    fn idempotent_across_instances_and_calls() {
        for fx in fixtures::VALID.iter().chain(fixtures::INVALID) {
            let a = Pathfinder::new(Grid::from_lines(fx.diagram));
            let b = Pathfinder::new(Grid::from_lines(fx.diagram));
            assert_eq!(a.find_path(), b.find_path(), "{}", fx.name);
            assert_eq!(a.find_path(), a.find_path(), "{}", fx.name);
        }
    }

    // -----------------------------------------------------------------------
    // Invalid diagrams
    // -----------------------------------------------------------------------

    #[test]
    fn invalid_fixtures_fail() {
        for fx in fixtures::INVALID {
            let f = err(fx.diagram);
            assert_eq!(f.path_string(), fx.path, "{}", fx.name);
            assert_eq!(f.letters, fx.letters, "{}", fx.name);
        }
    }

    #[test]
    fn two_starts() {
        let f = err(fixtures::MULTIPLE_STARTS.diagram);
        assert!(matches!(f.error, PathError::MultipleStarts { .. }));
        assert!(f.to_string().contains("multiple start points"));
        assert!(f.trace.is_empty());
    }

    #[test]
    fn lone_start() {
        let f = Pathfinder::new(vec![vec!['@']]).find_path().unwrap_err();
        assert_eq!(
            f.error,
            PathError::StartPoint {
                pos: Point::ZERO,
                count: 0
            }
        );
        assert_eq!(f.error.location(), Some(Point::ZERO));
    }

    #[test]
    fn question_mark_anywhere() {
        let f = Pathfinder::from_rows(["@-A-+", "    |", "x-?-+"])
            .find_path()
            .unwrap_err();
        assert_eq!(
            f.error,
            PathError::InvalidChar {
                ch: '?',
                pos: Point::new(2, 2)
            }
        );
        let msg = f.to_string();
        assert!(msg.contains('?') && msg.contains("row 2, column 2"), "{msg}");
    }

    #[test]
    fn four_way_turn() {
        let f = Pathfinder::from_rows(["  |", "@-+-x", "  |"])
            .find_path()
            .unwrap_err();
        assert_eq!(
            f.error,
            PathError::Turn {
                pos: Point::new(1, 2),
                fault: TurnFault::RoadCount(4)
            }
        );
        assert!(f.to_string().contains("must have exactly 2"));
        assert_eq!(f.path_string(), "@-+");
    }

    #[test]
    fn straight_turn() {
        let f = err(fixtures::FAKE_TURN.diagram);
        assert_eq!(
            f.error,
            PathError::Turn {
                pos: Point::new(0, 6),
                fault: TurnFault::StraightPath
            }
        );
        assert!(f.to_string().contains("must not be a straight path"));
        assert_eq!(f.letters, "A");
    }

    #[test]
    fn vertical_straight_turn() {
        let f = Pathfinder::from_rows(["@", "|", "+", "|", "x"])
            .find_path()
            .unwrap_err();
        assert!(f.to_string().contains("must not be a straight path"));
    }

    #[test]
    fn broken_path_keeps_partial_trace() {
        let f = err(fixtures::BROKEN_PATH.diagram);
        assert_eq!(
            f.error,
            PathError::Movement {
                pos: Point::new(1, 8),
                fault: MoveFault::UnexpectedEnd
            }
        );
        assert_eq!(f.path_string(), "@--A-+|");
        assert_eq!(f.letters, "A");
        assert!(!f.error.is_validation());
    }

    #[test]
    fn fork_is_a_turn_error() {
        let f = err(fixtures::FORK.diagram);
        assert_eq!(
            f.error,
            PathError::Turn {
                pos: Point::new(2, 10),
                fault: TurnFault::RoadCount(3)
            }
        );
    }

    #[test]
    fn missing_end() {
        let f = err(fixtures::MISSING_END.diagram);
        assert_eq!(
            f.error,
            PathError::MissingMarkers {
                start: false,
                end: true
            }
        );
        assert_eq!(f.error.location(), None);
    }

    // -----------------------------------------------------------------------
    // Termination
    // -----------------------------------------------------------------------

    #[test]
    fn loop_is_reported_as_cycle() {
        let f = err(fixtures::LOOP.diagram);
        assert_eq!(
            f.error,
            PathError::Cycle {
                pos: Point::new(2, 1)
            }
        );
        assert_eq!(f.path_string(), "@A-+|+-+|A@");
        assert_eq!(f.letters, "A");
    }

    #[test]
    fn loop_without_cycle_detection_hits_implicit_limit() {
        let config = PathConfig::default().with_cycle_detection(false);
        let pf = Pathfinder::with_config(Grid::from_lines(fixtures::LOOP.diagram), config);
        let f = pf.find_path().unwrap_err();
        assert!(matches!(f.error, PathError::StepLimit { .. }), "{f}");
    }

    #[test]
    fn step_limit_stops_walk() {
        let config = PathConfig::default().with_step_limit(3);
        let pf = Pathfinder::with_config(Grid::from_rows(["@---+", "    |", "x---+"]), config);
        let f = pf.find_path().unwrap_err();
        assert_eq!(
            f.error,
            PathError::StepLimit {
                pos: Point::new(0, 3),
                limit: 3
            }
        );
        assert_eq!(f.path_string(), "@---");
    }

    #[test]
    fn step_limit_equal_to_route_length_succeeds() {
        // "@---+|+---x" is ten moves.
        let config = PathConfig::default().with_step_limit(10);
        let pf = Pathfinder::with_config(Grid::from_rows(["@---+", "    |", "x---+"]), config);
        assert!(pf.find_path().is_ok());
    }

    // -----------------------------------------------------------------------
    // Walk / config
    // -----------------------------------------------------------------------

    #[test]
    fn walk_exposes_state() {
        let pf = Pathfinder::from_rows(["@-x"]);
        let markers = pf.validate().unwrap();
        let mut walk = pf.walk(markers);
        assert_eq!(walk.heading(), Heading::Start);
        assert_eq!(walk.next().map(|v| v.ch), Some('@'));
        assert_eq!(walk.pos(), Point::new(0, 1));
        assert_eq!(walk.steps(), 1);
        assert_eq!(walk.by_ref().count(), 2);
        assert!(walk.is_finished());
        assert_eq!(walk.next(), None);
        assert_eq!(walk.error(), None);
        assert_eq!(walk.markers().end, Point::new(0, 2));
    }

    #[test]
    fn duplicate_end_policy() {
        let diagram = ["@-x", "", "x"];
        assert!(Pathfinder::from_rows(diagram).find_path().is_ok());
        let strict = PathConfig::default().with_end_markers(EndMarkers::Unique);
        let f = Pathfinder::with_config(Grid::from_rows(diagram), strict)
            .find_path()
            .unwrap_err();
        assert!(matches!(f.error, PathError::MultipleEnds { .. }));
    }

    #[test]
    fn failure_exposes_source() {
        use std::error::Error;
        let f = err(fixtures::MULTIPLE_STARTS.diagram);
        let src = f.source().map(|e| e.to_string());
        assert_eq!(src, Some(f.error.to_string()));
    }
}
