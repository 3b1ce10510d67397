//! Catalog of example diagrams shared by the tests.
//!
//! For valid diagrams `path` and `letters` are the full result; for invalid
//! ones they are the partial trace and letters at the point of failure.

pub(crate) struct Fixture {
    pub name: &'static str,
    pub diagram: &'static str,
    pub path: &'static str,
    pub letters: &'static str,
}

pub(crate) const BASIC: Fixture = Fixture {
    name: "basic",
    diagram: "  @---A---+
          |
  x-B-+   C
      |   |
      +---+",
    path: "@---A---+|C|+---+|+-B-x",
    letters: "ACB",
};

pub(crate) const INTERSECTIONS: Fixture = Fixture {
    name: "straight through intersections",
    diagram: "  @
  | +-C--+
  A |    |
  +---B--+
    |      x
    |      |
    +---D--+",
    path: "@|A+---B--+|+--C-+|-||+---D--+|x",
    letters: "ABCD",
};

pub(crate) const LETTERS_ON_TURNS: Fixture = Fixture {
    name: "letters on turns",
    diagram: "  @---A---+
          |
  x-B-+   |
      |   |
      +---C",
    path: "@---A---+|||C---+|+-B-x",
    letters: "ACB",
};

pub(crate) const NO_DOUBLE_COLLECT: Fixture = Fixture {
    name: "letters at crossings are collected once",
    diagram: "     +-O-N-+
     |     |
     |   +-I-+
 @-G-O-+ | | |
     | | +-+ E
     +-+     S
             |
             x",
    path: "@-G-O-+|+-+|O||+-O-N-+|I|+-+|+-I-+|ES|x",
    letters: "GOONIES",
};

pub(crate) const COMPACT: Fixture = Fixture {
    name: "compact",
    diagram: " +-L-+
 |  +A-+
@B+ ++ H
 ++    x",
    path: "@B+++B|+-L-+A+++A-+Hx",
    letters: "BLAH",
};

pub(crate) const IGNORE_AFTER_END: Fixture = Fixture {
    name: "ignore after end",
    diagram: "  @-A--+
       |
       +-B--x-C--D",
    path: "@-A--+|+-B--x",
    letters: "AB",
};

pub(crate) const MISSING_START: Fixture = Fixture {
    name: "missing start",
    diagram: "     -A---+
          |
  x-B-+   C
      |   |
      +---+",
    path: "",
    letters: "",
};

pub(crate) const MISSING_END: Fixture = Fixture {
    name: "missing end",
    diagram: "   @--A---+
          |
    B-+   C
      |   |
      +---+",
    path: "",
    letters: "",
};

pub(crate) const MULTIPLE_STARTS: Fixture = Fixture {
    name: "multiple starts",
    diagram: "   @--A---+
          |
          C
          x
      @-B-+",
    path: "",
    letters: "",
};

pub(crate) const FORK: Fixture = Fixture {
    name: "fork in path",
    diagram: "        x-B
          |
   @--A---+
          |
     x+   C
      |   |
      +---+",
    path: "@--A---+",
    letters: "A",
};

pub(crate) const BROKEN_PATH: Fixture = Fixture {
    name: "broken path",
    diagram: "   @--A-+
        |

        B-x",
    path: "@--A-+|",
    letters: "A",
};

pub(crate) const MULTIPLE_STARTING_PATHS: Fixture = Fixture {
    name: "multiple starting paths",
    diagram: "  x-B-@-A-x",
    path: "",
    letters: "",
};

pub(crate) const FAKE_TURN: Fixture = Fixture {
    name: "fake turn",
    diagram: "  @-A-+-B-x",
    path: "@-A-+",
    letters: "A",
};

pub(crate) const LOOP: Fixture = Fixture {
    name: "loop back to start",
    diagram: " +-+
 | |
@A-+

   x",
    path: "@A-+|+-+|A@",
    letters: "A",
};

pub(crate) const VALID: &[Fixture] = &[
    BASIC,
    INTERSECTIONS,
    LETTERS_ON_TURNS,
    NO_DOUBLE_COLLECT,
    COMPACT,
    IGNORE_AFTER_END,
];

pub(crate) const INVALID: &[Fixture] = &[
    MISSING_START,
    MISSING_END,
    MULTIPLE_STARTS,
    FORK,
    BROKEN_PATH,
    MULTIPLE_STARTING_PATHS,
    FAKE_TURN,
    LOOP,
];
