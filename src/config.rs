use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Problem {
    LightsOut,
    EightPuzzle,
}

impl Problem {
    pub const NAMES: [&'static str; 2] = ["lights-out", "eight-puzzle"];
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Problem::LightsOut => write!(f, "lights-out"),
            Problem::EightPuzzle => write!(f, "eight-puzzle"),
        }
    }
}

impl FromStr for Problem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lights-out" => Ok(Problem::LightsOut),
            "eight-puzzle" => Ok(Problem::EightPuzzle),
            _ => Err(format!("Unknown problem: {}", s)),
        }
    }
}

/// Which cells a Lights Out toggle affects besides the chosen one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Orthogonal neighbors
    Plus,
    /// Diagonal neighbors
    Cross,
}

impl Pattern {
    /// Row and column offsets of all toggled cells, the chosen cell first.
    pub(crate) fn offsets(self) -> &'static [(i32, i32); 5] {
        match self {
            Pattern::Plus => &[(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)],
            Pattern::Cross => &[(0, 0), (-1, -1), (-1, 1), (1, -1), (1, 1)],
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Pattern::Plus => write!(f, "plus"),
            Pattern::Cross => write!(f, "cross"),
        }
    }
}
