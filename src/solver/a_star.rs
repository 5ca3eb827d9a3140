use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use prettytable::format::consts::FORMAT_CLEAN;
use prettytable::{Cell, Row, Table};
use separator::Separatable;

use crate::state::{Priority, SearchState};

#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<i32>,
    visited_states: Vec<i32>,
    duplicate_states: Vec<i32>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> i32 {
        self.created_states.iter().sum::<i32>()
    }

    pub fn total_unique_visited(&self) -> i32 {
        self.visited_states.iter().sum::<i32>()
    }

    pub fn total_reached_duplicates(&self) -> i32 {
        self.duplicate_states.iter().sum::<i32>()
    }

    pub(crate) fn add_created<S>(&mut self, node: &SearchNode<'_, S>) -> bool {
        Self::add(&mut self.created_states, node)
    }

    pub(crate) fn add_unique_visited<S>(&mut self, node: &SearchNode<'_, S>) -> bool {
        Self::add(&mut self.visited_states, node)
    }

    pub(crate) fn add_reached_duplicate<S>(&mut self, node: &SearchNode<'_, S>) -> bool {
        Self::add(&mut self.duplicate_states, node)
    }

    fn add<S>(counts: &mut Vec<i32>, node: &SearchNode<'_, S>) -> bool {
        let mut ret = false;

        // while because some depths might be skipped in some of the vecs
        while node.dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[node.dist as usize] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "total unique visited: {}",
            self.total_unique_visited().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let duplicates = self.total_reached_duplicates();
        let visited = self.total_unique_visited();
        let left = created - visited - duplicates;
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        let mut table = Table::new();
        table.set_format(*FORMAT_CLEAN);
        table.set_titles(Row::new(vec![
            Cell::new("Depth"),
            Cell::new("Created"),
            Cell::new("Unique"),
            Cell::new("Duplicates"),
            Cell::new("Unknown (not reached)"),
        ]));
        // created_states should be the longest vec
        for (depth, &created) in self.created_states.iter().enumerate() {
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            let left = created - visited - duplicates;
            table.add_row(Row::new(vec![
                Cell::new(&format!("{}:", depth)),
                Cell::new(&created.separated_string()),
                Cell::new(&visited.separated_string()),
                Cell::new(&duplicates.separated_string()),
                Cell::new(&left.separated_string()),
            ]));
        }
        write!(f, "{}", table)
    }
}

/// A frontier entry. Ordered by the state's priority key (lower is better),
/// wrap it in `Reverse` for `BinaryHeap`.
#[derive(Debug)]
pub(crate) struct SearchNode<'a, S> {
    pub(crate) state: &'a S,
    /// Number of moves from the initial state
    pub(crate) dist: u32,
    pub(crate) priority: Priority,
}

impl<'a, S: SearchState> SearchNode<'a, S> {
    pub(crate) fn new(state: &'a S, dist: u32) -> Self {
        Self {
            state,
            dist,
            priority: state.priority(),
        }
    }
}

impl<S> Clone for SearchNode<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SearchNode<'_, S> {}

impl<S> PartialOrd for SearchNode<'_, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for SearchNode<'_, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

impl<S> PartialEq for SearchNode<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<S> Eq for SearchNode<'_, S> {}

#[cfg(test)]
mod tests {
    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use super::*;
    use crate::config::Pattern;
    use crate::lights_out::LightsOutState;
    use crate::state::CreationCounter;
    use crate::vec2d::Vec2d;

    fn lights(rows: &[Vec<u8>], counter: &CreationCounter) -> LightsOutState {
        LightsOutState::new(Vec2d::new(rows), Pattern::Plus, true, counter)
    }

    #[test]
    fn heap_pops_lowest_f_then_newest() {
        let counter = CreationCounter::new();
        let one_lit_old = lights(&[vec![1, 0], vec![0, 0]], &counter);
        let three_lit = lights(&[vec![1, 1], vec![1, 0]], &counter);
        let one_lit_new = lights(&[vec![0, 0], vec![0, 1]], &counter);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(SearchNode::new(&one_lit_old, 0)));
        heap.push(Reverse(SearchNode::new(&three_lit, 0)));
        heap.push(Reverse(SearchNode::new(&one_lit_new, 0)));

        let order: Vec<_> = std::iter::from_fn(|| heap.pop())
            .map(|Reverse(node)| node.state.to_string())
            .collect();
        assert_eq!(
            order,
            vec![
                one_lit_new.to_string(),
                one_lit_old.to_string(),
                three_lit.to_string()
            ]
        );
    }

    #[test]
    fn counting_by_depth() {
        let counter = CreationCounter::new();
        let state = lights(&[vec![1]], &counter);

        let mut stats = Stats::new();
        assert!(stats.add_created(&SearchNode::new(&state, 0)));
        assert!(stats.add_created(&SearchNode::new(&state, 2)));
        assert!(!stats.add_created(&SearchNode::new(&state, 1)));
        assert!(stats.add_unique_visited(&SearchNode::new(&state, 0)));
        assert!(stats.add_reached_duplicate(&SearchNode::new(&state, 2)));

        assert_eq!(stats.total_created(), 3);
        assert_eq!(stats.total_unique_visited(), 1);
        assert_eq!(stats.total_reached_duplicates(), 1);
        assert_eq!(
            format!("{:?}", stats).lines().next().unwrap(),
            "created by depth: [1, 1, 1]"
        );
        assert!(stats.to_string().starts_with("States created total: 3\n"));
    }
}
