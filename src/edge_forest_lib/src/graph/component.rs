//! The edge set of one connected component.

use crate::prelude::*;

use petgraph::graph::{NodeIndex, UnGraph};

/// The distinct edges of one connected component.
///
/// Edges are sorted by [`Edge::key`]. A component may be empty if it was
/// discovered from a vertex that only has self-loops.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Component {
    edges: Vec<Edge>,
}

/// A component whose vertices were renumbered to `0..vertices.len()`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RelabeledComponent {
    /// The original id of each local vertex, in ascending order.
    pub vertices: Vec<Vertex>,
    /// The edges as `[lower, upper]` rows of local ids.
    pub edges: Vec<[Vertex; 2]>,
}

impl Component {
    /// Wraps edges that are already distinct and sorted.
    pub(crate) fn from_sorted_edges(edges: Vec<Edge>) -> Self {
        debug_assert!(edges.windows(2).all(|w| w[0] < w[1]));

        Component { edges }
    }

    /// The edges of the component.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The number of edges.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns true if the component has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// The edges as `[lower, upper]` rows.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = [Vertex; 2]> + '_ {
        self.edges.iter().map(Edge::row)
    }

    /// Moves the edges into a row-major buffer of `2 * self.len()` ids.
    pub fn into_flat(self) -> Vec<Vertex> {
        self.edges
            .into_iter()
            .flat_map(|edge| edge.row())
            .collect()
    }

    /// The distinct endpoints of all edges, in ascending order.
    pub fn vertices(&self) -> Vec<Vertex> {
        let mut vertices: Vec<Vertex> = self.rows().flatten().collect();
        vertices.sort_unstable();
        vertices.dedup();

        vertices
    }

    /// Renumbers the vertices of the component to consecutive local ids.
    ///
    /// Local ids follow the order of the original ids, so every local edge
    /// row stays in `[lower, upper]` order.
    pub fn relabel(&self) -> RelabeledComponent {
        let vertices = self.vertices();
        let local = |v: Vertex| -> Vertex {
            // Every endpoint is in `vertices` by construction.
            vertices.binary_search(&v).unwrap_or_default() as Vertex
        };
        let edges = self
            .edges
            .iter()
            .map(|edge| [local(edge.lower()), local(edge.upper())])
            .collect();

        RelabeledComponent { vertices, edges }
    }

    /// Returns the component as a petgraph graph.
    ///
    /// Node `i` of the graph corresponds to local vertex `i` of
    /// [`Component::relabel`] and carries the original id as its weight.
    pub fn to_graph(&self) -> UnGraph<Vertex, ()> {
        let relabeled = self.relabel();
        let mut graph = UnGraph::with_capacity(relabeled.vertices.len(), relabeled.edges.len());
        for &v in relabeled.vertices.iter() {
            graph.add_node(v);
        }
        for &[a, b] in relabeled.edges.iter() {
            graph.add_edge(NodeIndex::new(a as usize), NodeIndex::new(b as usize), ());
        }

        graph
    }
}
