use std::borrow::Cow;
use std::fs::File;
use std::io;

use dot::{self, Edges, GraphWalk, Id, LabelText, Labeller, Nodes, Style};
use fnv::FnvHashMap;

use crate::solver::a_star::SearchNode;
use crate::state::SearchState;

const DOT_FILE: &str = "state-space.dot";

type Nd = usize;
type Ed = (usize, usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Type {
    Queued,
    Duplicate,
    Unique,
}

/// Every configuration the search queued, one node per configuration.
#[derive(Debug)]
pub(crate) struct Graph<'a, S> {
    node_to_index: FnvHashMap<&'a S, usize>,
    nodes: Vec<(SearchNode<'a, S>, Type)>,
    edges: Vec<(usize, usize)>,
}

impl<'a, S: SearchState> Graph<'a, S> {
    pub(crate) fn new() -> Self {
        Self {
            node_to_index: FnvHashMap::default(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Requeuing a configuration with a lower cost replaces the node and adds an edge.
    pub(crate) fn add(&mut self, node: SearchNode<'a, S>, prev: Option<&'a S>) {
        let node_index = match self.node_to_index.get(node.state) {
            Some(&index) => {
                self.nodes[index] = (node, Type::Queued);
                index
            }
            None => {
                let index = self.nodes.len();
                self.node_to_index.insert(node.state, index);
                self.nodes.push((node, Type::Queued));
                index
            }
        };

        if let Some(prev) = prev {
            let prev_index = self.node_to_index[prev];
            self.edges.push((prev_index, node_index));
        }
    }

    pub(crate) fn mark_duplicate(&mut self, state: &S) {
        let index = self.node_to_index[state];
        if self.nodes[index].1 == Type::Queued {
            self.nodes[index].1 = Type::Duplicate;
        }
    }

    pub(crate) fn mark_unique(&mut self, state: &S) {
        self.nodes[self.node_to_index[state]].1 = Type::Unique;
    }

    pub(crate) fn draw_states(&self) {
        match self.write_dot() {
            Ok(()) => info!("Wrote {} nodes to {}", self.nodes.len(), DOT_FILE),
            Err(err) => warn!("Failed to write {}: {}", DOT_FILE, err),
        }
    }

    fn write_dot(&self) -> io::Result<()> {
        let mut file = File::create(DOT_FILE)?;
        dot::render(self, &mut file)
    }
}

impl<'a, S: SearchState> GraphWalk<'a, Nd, Ed> for Graph<'a, S> {
    fn nodes(&'a self) -> Nodes<'a, Nd> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&'a self) -> Edges<'a, Ed> {
        Cow::from(&self.edges)
    }

    fn source(&'a self, e: &Ed) -> Nd {
        e.0
    }

    fn target(&'a self, e: &Ed) -> Nd {
        e.1
    }
}

impl<'a, S: SearchState> Labeller<'a, Nd, Ed> for Graph<'a, S> {
    fn graph_id(&'a self) -> Id<'a> {
        Id::new("G").expect("G is a valid id")
    }

    fn node_id(&'a self, n: &Nd) -> Id<'a> {
        Id::new(format!("N{}", n)).expect("N followed by digits is a valid id")
    }

    fn node_label(&'a self, n: &Nd) -> LabelText<'a> {
        let node = self.nodes[*n].0;
        LabelText::EscStr(
            format!(
                "g: {}, h: {}\nf: {}\n{}",
                node.state.path_cost(),
                node.state.heuristic_value(),
                node.priority.f,
                node.state
            )
            .into(),
        )
    }

    fn node_style(&'a self, n: &Nd) -> Style {
        if self.nodes[*n].1 == Type::Queued {
            Style::Solid
        } else {
            Style::Filled
        }
    }

    fn node_color(&'a self, n: &Nd) -> Option<LabelText<'a>> {
        Some(LabelText::LabelStr(
            match self.nodes[*n].1 {
                Type::Unique => "red",
                Type::Duplicate => "gray",
                Type::Queued => return None,
            }
            .into(),
        ))
    }
}
