// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

#[macro_use]
extern crate log;

pub mod config;
pub mod data;
pub mod eight_puzzle;
pub mod lights_out;
pub mod parser;
pub mod puzzle;
pub mod solution_formatter;
pub mod solver;
pub mod state;
pub mod vec2d;

mod fs;

use std::error::Error;

use crate::puzzle::{EightPuzzle, LightsOutPuzzle};
use crate::solver::SolverOk;
use crate::state::{CreationCounter, SearchState};

/// Loading puzzles from a file path.
pub trait LoadPuzzles {
    fn load_lights_out(&self) -> Result<Vec<LightsOutPuzzle>, Box<dyn Error>>;

    fn load_eight_puzzles(&self) -> Result<Vec<EightPuzzle>, Box<dyn Error>>;
}

pub trait Solve {
    type State: SearchState;

    fn initial_state(&self, use_heuristic: bool, counter: &CreationCounter) -> Self::State;

    fn solve(
        &self,
        use_heuristic: bool,
        counter: &CreationCounter,
        print_status: bool,
    ) -> SolverOk<Self::State> {
        solver::search(self.initial_state(use_heuristic, counter), counter, print_status)
    }
}
