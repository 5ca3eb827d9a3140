use std::fmt::{self, Display, Formatter};
use std::hash::{Hash, Hasher};

use crate::data::{Dir, Pos};
use crate::state::{CreationCounter, SearchState};

pub const SIZE: u8 = 3;

/// Tiles in row-major order, 0 is the blank.
pub type Board = [[u8; 3]; 3];

pub const GOAL: Board = [[0, 1, 2], [3, 4, 5], [6, 7, 8]];

/// The order in which the blank tries to move when generating successors.
/// E.g. `Down` means the tile below the blank slides up.
const BLANK_MOVES: [Dir; 4] = [Dir::Down, Dir::Left, Dir::Up, Dir::Right];

#[derive(Debug, Clone)]
pub struct EightPuzzleState {
    board: Board,
    goal: Board,
    blank: Pos,
    use_heuristic: bool,
    path_cost: f64,
    heuristic_value: f64,
    creation_order: u64,
    last_move: Option<Dir>,
}

impl EightPuzzleState {
    pub fn new(board: Board, use_heuristic: bool, counter: &CreationCounter) -> Self {
        Self::with_goal(board, GOAL, use_heuristic, counter)
    }

    /// Panics if either board is not a permutation of 0..=8.
    pub fn with_goal(
        board: Board,
        goal: Board,
        use_heuristic: bool,
        counter: &CreationCounter,
    ) -> Self {
        assert!(is_permutation(&board), "Invalid board: {:?}", board);
        assert!(is_permutation(&goal), "Invalid goal: {:?}", goal);

        let blank = tile_positions(&board)[0];
        Self::with_cost(board, goal, blank, use_heuristic, 0.0, None, counter)
    }

    fn with_cost(
        board: Board,
        goal: Board,
        blank: Pos,
        use_heuristic: bool,
        path_cost: f64,
        last_move: Option<Dir>,
        counter: &CreationCounter,
    ) -> Self {
        let mut state = EightPuzzleState {
            board,
            goal,
            blank,
            use_heuristic,
            path_cost,
            heuristic_value: 0.0,
            creation_order: counter.next(),
            last_move,
        };
        if use_heuristic {
            state.heuristic_value = state.calculate_heuristic();
        }
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn blank(&self) -> Pos {
        self.blank
    }

    /// Direction the blank moved to create this state, `None` for the initial state.
    pub fn last_move(&self) -> Option<Dir> {
        self.last_move
    }

    fn slide(&self, dir: Dir, counter: &CreationCounter) -> Option<Self> {
        let new_blank = self.blank.step(dir, SIZE, SIZE)?;

        let mut board = self.board;
        let (old_r, old_c) = (usize::from(self.blank.r), usize::from(self.blank.c));
        let (new_r, new_c) = (usize::from(new_blank.r), usize::from(new_blank.c));
        board[old_r][old_c] = board[new_r][new_c];
        board[new_r][new_c] = 0;

        Some(Self::with_cost(
            board,
            self.goal,
            new_blank,
            self.use_heuristic,
            self.path_cost + 1.0,
            Some(dir),
            counter,
        ))
    }
}

impl SearchState for EightPuzzleState {
    type Config = Board;

    fn current_state(&self) -> &Board {
        &self.board
    }

    fn target_state(&self) -> &Board {
        &self.goal
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

    /// Blank moves down, left, up, right - whichever stay on the board.
    fn generate_successors(&self, counter: &CreationCounter) -> Vec<Self> {
        BLANK_MOVES
            .iter()
            .filter_map(|&dir| self.slide(dir, counter))
            .collect()
    }

    /// Sum of Manhattan distances of all tiles except the blank.
    fn calculate_heuristic(&self) -> f64 {
        let current = tile_positions(&self.board);
        let goal = tile_positions(&self.goal);
        let total: i16 = (1..9).map(|tile| current[tile].dist(goal[tile])).sum();
        f64::from(total)
    }
}

impl PartialEq for EightPuzzleState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for EightPuzzleState {}

impl Hash for EightPuzzleState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.board.hash(state);
    }
}

impl Display for EightPuzzleState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.board {
            writeln!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

pub fn is_permutation(board: &Board) -> bool {
    let mut seen = [false; 9];
    for &tile in board.iter().flatten() {
        if tile > 8 || seen[usize::from(tile)] {
            return false;
        }
        seen[usize::from(tile)] = true;
    }
    true
}

/// Position of each tile, indexed by the tile.
fn tile_positions(board: &Board) -> [Pos; 9] {
    let mut positions = [Pos::new(0, 0); 9];
    for (r, row) in board.iter().enumerate() {
        for (c, &tile) in row.iter().enumerate() {
            positions[usize::from(tile)] = Pos::new(r as u8, c as u8);
        }
    }
    positions
}
