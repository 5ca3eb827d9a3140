use std::fmt::{self, Display, Formatter};

use crate::config::Pattern;
use crate::eight_puzzle::{Board, EightPuzzleState};
use crate::lights_out::LightsOutState;
use crate::state::CreationCounter;
use crate::vec2d::Vec2d;
use crate::Solve;

/// A Lights Out grid as loaded from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightsOutPuzzle {
    pub grid: Vec2d<u8>,
    pub pattern: Pattern,
    /// Length of the shortest solution if the file says
    pub expected: Option<usize>,
}

impl LightsOutPuzzle {
    pub fn new(grid: Vec2d<u8>, pattern: Pattern, expected: Option<usize>) -> Self {
        Self {
            grid,
            pattern,
            expected,
        }
    }
}

impl Display for LightsOutPuzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lights Out ({} pattern)", self.pattern)?;
        write!(f, "{}", self.grid)
    }
}

impl Solve for LightsOutPuzzle {
    type State = LightsOutState;

    fn initial_state(&self, use_heuristic: bool, counter: &CreationCounter) -> LightsOutState {
        LightsOutState::new(self.grid.clone(), self.pattern, use_heuristic, counter)
    }
}

/// An Eight Puzzle board as loaded from a file. The goal is always the canonical one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EightPuzzle {
    pub board: Board,
    pub expected: Option<usize>,
}

impl EightPuzzle {
    pub fn new(board: Board, expected: Option<usize>) -> Self {
        Self { board, expected }
    }
}

impl Display for EightPuzzle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Eight Puzzle")?;
        for row in &self.board {
            writeln!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

impl Solve for EightPuzzle {
    type State = EightPuzzleState;

    fn initial_state(&self, use_heuristic: bool, counter: &CreationCounter) -> EightPuzzleState {
        EightPuzzleState::new(self.board, use_heuristic, counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solving_loaded_puzzles() {
        let counter = CreationCounter::new();

        let lights = LightsOutPuzzle::new(Vec2d::new(&[vec![1, 0], vec![0, 1]]), Pattern::Cross, Some(1));
        assert_eq!(lights.to_string(), "Lights Out (cross pattern)\n1 0\n0 1\n");
        let solution = lights.solve(true, &counter, false);
        assert_eq!(solution.move_cnt(), lights.expected);

        let eight = EightPuzzle::new([[3, 1, 2], [0, 4, 5], [6, 7, 8]], Some(1));
        assert_eq!(eight.to_string(), "Eight Puzzle\n3 1 2\n0 4 5\n6 7 8\n");
        let solution = eight.solve(false, &counter, false);
        assert_eq!(solution.move_cnt(), eight.expected);
    }
}
