//! The contract between the search engine and the puzzles it solves.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::sync::atomic::{self, AtomicU64};

/// Hands out strictly increasing creation stamps.
///
/// One counter is meant to live for the whole process and be shared by every search,
/// stamps are never reset between searches.
#[derive(Debug, Default)]
pub struct CreationCounter(AtomicU64);

impl CreationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> u64 {
        self.0.fetch_add(1, atomic::Ordering::Relaxed)
    }
}

/// Ordering key of a state in the frontier.
///
/// Lower `f` sorts first, ties are broken by preferring the state created later.
#[derive(Debug, Clone, Copy)]
pub struct Priority {
    pub f: f64,
    pub creation_order: u64,
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .total_cmp(&other.f)
            .then_with(|| other.creation_order.cmp(&self.creation_order))
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Priority {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Priority {}

/// A node of an implicit search graph.
///
/// `Eq` and `Hash` must only look at `current_state` - the engine uses states as keys
/// of its visited map. States are immutable, transitions always create new values.
pub trait SearchState: Clone + Eq + Hash + Debug + Display {
    type Config: Eq + Hash + Debug;

    fn current_state(&self) -> &Self::Config;

    fn target_state(&self) -> &Self::Config;

    /// Cost from the initial state (g).
    fn path_cost(&self) -> f64;

    /// Cached result of `calculate_heuristic` (h), 0 when heuristics are disabled.
    fn heuristic_value(&self) -> f64;

    fn creation_order(&self) -> u64;

    /// All states reachable by one move, always in the same order.
    fn generate_successors(&self, counter: &CreationCounter) -> Vec<Self>;

    fn calculate_heuristic(&self) -> f64;

    fn goal_test(&self) -> bool {
        self.current_state() == self.target_state()
    }

    fn f(&self) -> f64 {
        self.path_cost() + self.heuristic_value()
    }

    fn priority(&self) -> Priority {
        Priority {
            f: self.f(),
            creation_order: self.creation_order(),
        }
    }
}
