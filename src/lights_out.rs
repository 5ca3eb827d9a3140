use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::config::Pattern;
use crate::data::Pos;
use crate::state::{CreationCounter, SearchState};
use crate::vec2d::Vec2d;

/// Every toggle changes at most this many cells.
const MAX_TOGGLED: f64 = 5.0;

/// A grid of lights, 1 is on. Solved when all lights are off.
#[derive(Debug, Clone)]
pub struct LightsOutState {
    grid: Vec2d<u8>,
    target: Vec2d<u8>,
    pattern: Pattern,
    use_heuristic: bool,
    path_cost: f64,
    heuristic_value: f64,
    creation_order: u64,
    toggled: Option<Pos>,
}

impl LightsOutState {
    /// Panics if the grid contains anything other than 0 and 1.
    pub fn new(
        grid: Vec2d<u8>,
        pattern: Pattern,
        use_heuristic: bool,
        counter: &CreationCounter,
    ) -> Self {
        assert!(grid.iter().all(|&light| light <= 1));

        let target = grid.create_scratchpad(0);
        Self::with_cost(grid, target, pattern, use_heuristic, 0.0, None, counter)
    }

    fn with_cost(
        grid: Vec2d<u8>,
        target: Vec2d<u8>,
        pattern: Pattern,
        use_heuristic: bool,
        path_cost: f64,
        toggled: Option<Pos>,
        counter: &CreationCounter,
    ) -> Self {
        let mut state = LightsOutState {
            grid,
            target,
            pattern,
            use_heuristic,
            path_cost,
            heuristic_value: 0.0,
            creation_order: counter.next(),
            toggled,
        };
        if use_heuristic {
            state.heuristic_value = state.calculate_heuristic();
        }
        state
    }

    pub fn grid(&self) -> &Vec2d<u8> {
        &self.grid
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    /// The cell chosen to create this state, `None` for the initial state.
    pub fn toggled(&self) -> Option<Pos> {
        self.toggled
    }

    pub fn lit(&self) -> usize {
        self.grid.iter().filter(|&&light| light == 1).count()
    }

    fn toggle(&self, pos: Pos, counter: &CreationCounter) -> Self {
        let mut grid = self.grid.clone();
        for &(dr, dc) in self.pattern.offsets() {
            // cells outside the grid are simply not toggled
            if let Some(cell) = pos.offset(dr, dc, grid.rows(), grid.cols()) {
                grid[cell] ^= 1;
            }
        }
        Self::with_cost(
            grid,
            self.target.clone(),
            self.pattern,
            self.use_heuristic,
            self.path_cost + 1.0,
            Some(pos),
            counter,
        )
    }
}

impl SearchState for LightsOutState {
    type Config = Vec2d<u8>;

    fn current_state(&self) -> &Vec2d<u8> {
        &self.grid
    }

    fn target_state(&self) -> &Vec2d<u8> {
        &self.target
    }

    fn path_cost(&self) -> f64 {
        self.path_cost
    }

    fn heuristic_value(&self) -> f64 {
        self.heuristic_value
    }

    fn creation_order(&self) -> u64 {
        self.creation_order
    }

    /// One toggle per cell in row-major order.
    fn generate_successors(&self, counter: &CreationCounter) -> Vec<Self> {
        self.grid
            .positions()
            .map(|pos| self.toggle(pos, counter))
            .collect()
    }

    fn calculate_heuristic(&self) -> f64 {
        self.lit() as f64 / MAX_TOGGLED
    }
}

impl PartialEq for LightsOutState {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
    }
}

impl Eq for LightsOutState {}

impl Hash for LightsOutState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
    }
}

impl Display for LightsOutState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}
