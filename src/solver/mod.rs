pub(crate) mod a_star;
#[cfg(feature = "graph")]
mod graph;

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::{self, Debug, Formatter};

use fnv::FnvHashMap;
use typed_arena::Arena;

use crate::state::{CreationCounter, SearchState};

pub use self::a_star::Stats;
use self::a_star::SearchNode;
#[cfg(feature = "graph")]
use self::graph::Graph;

/// Parent (`None` for the initial state) and the best known cost of a configuration.
type Visited<'a, S> = FnvHashMap<&'a S, (Option<&'a S>, f64)>;

pub struct SolverOk<S> {
    /// From the initial state to a goal state, empty if there is no solution.
    pub path: Vec<S>,
    pub stats: Stats,
}

impl<S> SolverOk<S> {
    fn new(path: Vec<S>, stats: Stats) -> Self {
        Self { path, stats }
    }

    pub fn is_solved(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of moves on the path, `None` if there is no solution.
    pub fn move_cnt(&self) -> Option<usize> {
        self.path.len().checked_sub(1)
    }
}

impl<S> Debug for SolverOk<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.move_cnt() {
            None => writeln!(f, "No solution")?,
            Some(moves) => writeln!(f, "Moves: {}", moves)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

/// A* from `initial_state` to the first state that passes `goal_test`.
///
/// The frontier is ordered by `SearchState::priority`. A configuration is (re)queued
/// only when it's reached for the first time or more cheaply than before.
/// Entries made obsolete by a cheaper path are skipped when popped.
pub fn search<S: SearchState>(
    initial_state: S,
    counter: &CreationCounter,
    print_status: bool,
) -> SolverOk<S> {
    debug!("Search called");

    // everything the frontier and visited map point to lives here until the search ends
    let arena = Arena::new();

    let mut stats = Stats::new();
    let mut to_visit = BinaryHeap::new();
    let mut visited: Visited<'_, S> = FnvHashMap::default();
    #[cfg(feature = "graph")]
    let mut graph = Graph::new();

    let start: &S = arena.alloc(initial_state);
    visited.insert(start, (None, start.path_cost()));
    let start_node = SearchNode::new(start, 0);
    stats.add_created(&start_node);
    #[cfg(feature = "graph")]
    graph.add(start_node, None);
    to_visit.push(Reverse(start_node));

    let mut path = Vec::new();
    while let Some(Reverse(cur_node)) = to_visit.pop() {
        let best_cost = visited[cur_node.state].1;
        if cur_node.state.path_cost() > best_cost {
            // a cheaper path to the same configuration was queued after this one
            stats.add_reached_duplicate(&cur_node);
            #[cfg(feature = "graph")]
            graph.mark_duplicate(cur_node.state);
            continue;
        }
        if stats.add_unique_visited(&cur_node) && print_status {
            println!("Visited new depth: {}", cur_node.dist);
            println!("{:?}", stats);
        }
        #[cfg(feature = "graph")]
        graph.mark_unique(cur_node.state);

        if cur_node.state.goal_test() {
            debug!("Solved, backtracking path");
            path = backtrack_path(&visited, cur_node.state);
            break;
        }

        for successor in cur_node.state.generate_successors(counter) {
            let new_cost = successor.path_cost();
            let improves = match visited.get(&successor) {
                None => true,
                Some(&(_, known_cost)) => new_cost < known_cost,
            };
            if !improves {
                continue;
            }

            let successor: &S = arena.alloc(successor);
            visited.insert(successor, (Some(cur_node.state), new_cost));
            let next_node = SearchNode::new(successor, cur_node.dist + 1);
            stats.add_created(&next_node);
            #[cfg(feature = "graph")]
            graph.add(next_node, Some(cur_node.state));
            to_visit.push(Reverse(next_node));
        }
    }

    trace!("{:?}", stats);
    #[cfg(feature = "graph")]
    graph.draw_states();

    SolverOk::new(path, stats)
}

fn backtrack_path<S: SearchState>(visited: &Visited<'_, S>, final_state: &S) -> Vec<S> {
    let mut ret = Vec::new();
    let mut state = final_state;
    loop {
        ret.push(state.clone());
        match visited[state].0 {
            Some(prev) => state = prev,
            None => {
                ret.reverse();
                return ret;
            }
        }
    }
}
