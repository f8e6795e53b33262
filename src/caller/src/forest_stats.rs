use edge_forest_lib::graph::algo::{count_isolated_vertices, vertex_components};
use edge_forest_lib::graph::{Component, EdgeTable, Forest};
use edge_forest_lib::ForestError;

use serde::Serialize;

/// Some properties of a forest and the table it was computed from.
#[derive(Serialize, Debug, PartialEq, Eq)]
pub struct ForestProperties {
    /// Number of input rows.
    num_rows: usize,
    /// Number of vertices of the input.
    num_vertices: u64,
    /// Number of input rows that are self-loops.
    num_self_loops: usize,
    /// Number of distinct edges over all slots.
    num_edges: usize,
    /// Number of connected components, counting isolated vertices.
    num_connected_components: usize,
    /// Number of vertices that are not an endpoint of any edge.
    num_isolated_vertices: usize,
    /// Properties of every output slot.
    slots: Vec<SlotProperties>,
}

/// Some properties of an output slot.
#[derive(Serialize, Debug, PartialEq, Eq)]
struct SlotProperties {
    num_vertices: usize,
    num_edges: usize,
}

impl SlotProperties {
    fn new(component: &Component) -> Self {
        Self {
            num_vertices: component.vertices().len(),
            num_edges: component.len(),
        }
    }
}

impl ForestProperties {
    /// Computes the properties of `forest`, which was computed from `table`.
    pub fn new(table: &EdgeTable, forest: &Forest) -> Result<Self, ForestError> {
        Ok(Self {
            num_rows: table.len(),
            num_vertices: table.num_vertices(),
            num_self_loops: table.num_self_loops(),
            num_edges: forest.num_edges(),
            num_connected_components: vertex_components(table)?.len(),
            num_isolated_vertices: count_isolated_vertices(table)?,
            slots: forest.iter().map(SlotProperties::new).collect(),
        })
    }
}
