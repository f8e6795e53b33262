//! Iterative exploration of a single component.
//!
//! The walk uses an explicit frontier stack instead of recursion so that
//! components with millions of vertices on a single path cannot overflow the
//! call stack.

use crate::prelude::*;

use super::AdjacencyIndex;

/// One visited flag per vertex.
///
/// Flags only ever change from unvisited to visited. The set is shared by all
/// traversals of one forest computation so that every vertex is expanded at
/// most once overall.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    flags: Vec<bool>,
    num_visited: usize,
}

impl VisitedSet {
    /// Returns a set of `num_vertices` unvisited vertices.
    pub fn new(num_vertices: usize) -> Result<Self, ForestError> {
        let mut flags = Vec::new();
        flags
            .try_reserve_exact(num_vertices)
            .map_err(ForestError::alloc("visited flags"))?;
        flags.resize(num_vertices, false);

        Ok(VisitedSet {
            flags,
            num_visited: 0,
        })
    }

    /// Returns true if `v` has been visited.
    pub fn contains(&self, v: Vertex) -> bool {
        self.flags[v as usize]
    }

    /// Marks `v` as visited. Returns true if it was not visited before.
    pub fn insert(&mut self, v: Vertex) -> bool {
        let flag = &mut self.flags[v as usize];
        if *flag {
            false
        } else {
            *flag = true;
            self.num_visited += 1;
            true
        }
    }

    /// The number of visited vertices.
    pub fn len(&self) -> usize {
        self.num_visited
    }

    /// Returns true if no vertex has been visited yet.
    pub fn is_empty(&self) -> bool {
        self.num_visited == 0
    }
}

/// A frontier entry: a vertex and the vertex it was reached from.
///
/// The start vertex of a traversal has no parent.
type FrontierEntry = (Vertex, Option<Vertex>);

/// The result of exploring one component.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Traversal {
    /// One `(node, parent)` pair per processed frontier entry, excluding the
    /// start entry and self-loops, in processing order.
    pub occurrences: Vec<(Vertex, Vertex)>,
    /// The number of vertices expanded by this traversal.
    pub num_expanded: usize,
}

/// Explores the component of `start` and marks all of its vertices visited.
///
/// Every time an entry `(node, parent)` is popped from the frontier, the pair
/// is recorded before `node` is checked against the visited set. A vertex
/// therefore shows up as an endpoint once per parent it is reached from, even
/// after it has been expanded. As a consequence every edge of the component
/// is recorded at least once from each of its endpoints.
///
/// Entries are removed in LIFO order. The order only affects the order of the
/// recorded occurrences.
pub fn traverse_component(
    start: Vertex,
    index: &AdjacencyIndex,
    visited: &mut VisitedSet,
) -> Result<Traversal, ForestError> {
    let mut frontier: Vec<FrontierEntry> = vec![(start, None)];
    let mut traversal = Traversal::default();

    while let Some((node, parent)) = frontier.pop() {
        if let Some(parent) = parent {
            if node == parent {
                continue;
            }
            traversal
                .occurrences
                .try_reserve(1)
                .map_err(ForestError::alloc("traversal occurrences"))?;
            traversal.occurrences.push((node, parent));
        }

        if !visited.insert(node) {
            continue;
        }
        traversal.num_expanded += 1;

        let neighbors = index.neighbors(node);
        frontier
            .try_reserve(neighbors.len())
            .map_err(ForestError::alloc("traversal frontier"))?;
        frontier.extend(neighbors.map(|neighbor| (neighbor, Some(node))));
    }

    Ok(traversal)
}
