//! Connected components of undirected edge lists.
//!
//! The computation is split into four parts that are used in this order:
//!
//! - [`AdjacencyIndex`] stores one set of neighbors per vertex.
//! - [`traverse_component`] walks one component with an explicit stack and
//!   records a raw `(node, parent)` occurrence for every processed stack
//!   entry.
//! - [`deduplicate_edges`] turns the raw occurrences into distinct canonical
//!   edges.
//! - [`extract_forest`] scans the input rows and assembles the [`Forest`].
//!
//! The [`algo`] module contains a union-find based vertex partition that also
//! accounts for isolated vertices.

mod adjacency;
pub mod algo;
mod component;
mod dedup;
mod edge;
mod forest;
mod traversal;

#[cfg(test)]
mod tests;

pub use adjacency::AdjacencyIndex;
pub use component::{Component, RelabeledComponent};
pub use dedup::deduplicate_edges;
pub use edge::{Edge, EdgeTable, Vertex};
pub use forest::{compute_components, compute_components_from_raw, extract_forest, Forest};
pub use traversal::{traverse_component, Traversal, VisitedSet};
