//! Directed graph over sense identifiers.

use std::collections::{BTreeSet, HashMap};

use crate::error::{Error, ErrorKind, Result};

/// Identifier of a single synonym set.
pub type SenseId = u32;

/// Direction to follow edges in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Hypernym to hyponym, towards more specific senses.
    Forward,
    /// Hyponym to hypernym, towards more general senses.
    Reverse,
}

#[derive(Debug, Default)]
struct Node {
    forward: BTreeSet<SenseId>,
    reverse: BTreeSet<SenseId>,
}

/// A graph of hypernym to hyponym edges.
///
/// Both adjacency directions live on the same node so that either direction
/// can be walked in time proportional to the degree of each visited node.
#[derive(Debug, Default)]
pub struct Graph {
    nodes: HashMap<SenseId, Node>,
}

impl Graph {
    /// Construct a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Adding an existing node does nothing.
    pub fn add_node(&mut self, id: SenseId) {
        self.nodes.entry(id).or_default();
    }

    /// Test if the graph contains the given node.
    pub fn contains(&self, id: SenseId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Test if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add an edge from a hypernym to a hyponym.
    pub fn add_edge(&mut self, from: SenseId, to: SenseId) -> Result<()> {
        for id in [from, to] {
            if !self.nodes.contains_key(&id) {
                return Err(Error::new(ErrorKind::UnknownNode(id)));
            }
        }

        if let Some(node) = self.nodes.get_mut(&from) {
            node.forward.insert(to);
        }

        if let Some(node) = self.nodes.get_mut(&to) {
            node.reverse.insert(from);
        }

        Ok(())
    }

    /// Hyponyms directly below the given node.
    pub fn forward_neighbors(&self, id: SenseId) -> Result<&BTreeSet<SenseId>> {
        Ok(&self.node(id)?.forward)
    }

    /// Hypernyms directly above the given node.
    pub fn reverse_neighbors(&self, id: SenseId) -> Result<&BTreeSet<SenseId>> {
        Ok(&self.node(id)?.reverse)
    }

    /// Neighbors of the given node in the given direction.
    pub fn neighbors(&self, id: SenseId, direction: Direction) -> Result<&BTreeSet<SenseId>> {
        match direction {
            Direction::Forward => self.forward_neighbors(id),
            Direction::Reverse => self.reverse_neighbors(id),
        }
    }

    /// Collect every node reachable through one or more steps in the given
    /// direction from any of the starting nodes.
    ///
    /// A starting node is only part of the result if it can be reached again
    /// from some starting node.
    pub fn reachable<I>(&self, start: I, direction: Direction) -> Result<BTreeSet<SenseId>>
    where
        I: IntoIterator<Item = SenseId>,
    {
        let mut visited = BTreeSet::new();
        let mut stack = Vec::new();

        for id in start {
            stack.extend(self.neighbors(id, direction)?.iter().copied());
        }

        while let Some(id) = stack.pop() {
            if !visited.insert(id) {
                continue;
            }

            stack.extend(
                self.neighbors(id, direction)?
                    .iter()
                    .copied()
                    .filter(|id| !visited.contains(id)),
            );
        }

        Ok(visited)
    }

    fn node(&self, id: SenseId) -> Result<&Node> {
        self.nodes
            .get(&id)
            .ok_or_else(|| Error::new(ErrorKind::UnknownNode(id)))
    }
}

#[cfg(test)]
fn chain(edges: &[(SenseId, SenseId)]) -> Graph {
    let mut graph = Graph::new();

    for &(from, to) in edges {
        graph.add_node(from);
        graph.add_node(to);
    }

    for &(from, to) in edges {
        graph.add_edge(from, to).unwrap();
    }

    graph
}

#[test]
fn test_add_node_is_idempotent() {
    let mut graph = Graph::new();
    graph.add_node(1);
    graph.add_node(2);
    graph.add_edge(1, 2).unwrap();
    graph.add_node(1);

    assert_eq!(graph.len(), 2);
    assert!(graph.forward_neighbors(1).unwrap().contains(&2));
}

#[test]
fn test_unknown_node() {
    let mut graph = Graph::new();
    graph.add_node(1);

    assert!(graph.add_edge(1, 2).unwrap_err().is_unknown_node());
    assert!(graph.add_edge(2, 1).unwrap_err().is_unknown_node());
    assert!(graph.forward_neighbors(2).unwrap_err().is_unknown_node());
    assert!(graph.reverse_neighbors(2).unwrap_err().is_unknown_node());
    assert!(graph.forward_neighbors(1).unwrap().is_empty());
}

#[test]
fn test_both_directions() {
    let graph = chain(&[(3, 2), (2, 1), (3, 4)]);

    assert_eq!(
        graph.forward_neighbors(3).unwrap().iter().copied().collect::<Vec<_>>(),
        [2, 4]
    );
    assert_eq!(
        graph.reverse_neighbors(1).unwrap().iter().copied().collect::<Vec<_>>(),
        [2]
    );

    let down = graph.reachable([3], Direction::Forward).unwrap();
    assert_eq!(down.into_iter().collect::<Vec<_>>(), [1, 2, 4]);

    let up = graph.reachable([1], Direction::Reverse).unwrap();
    assert_eq!(up.into_iter().collect::<Vec<_>>(), [2, 3]);
}

#[test]
fn test_reachable_tolerates_cycles() {
    let graph = chain(&[(1, 2), (2, 1), (2, 3)]);

    let down = graph.reachable([1], Direction::Forward).unwrap();
    assert_eq!(down.into_iter().collect::<Vec<_>>(), [1, 2, 3]);

    let up = graph.reachable([3], Direction::Reverse).unwrap();
    assert_eq!(up.into_iter().collect::<Vec<_>>(), [1, 2]);
}
