//! Per-vertex neighbor sets.

use crate::prelude::*;
use crate::utils::debug::ToJsonCompact;

use super::EdgeTable;

use rustc_hash::FxHashSet;

/// Maps every vertex to the set of its neighbors.
///
/// The relation is symmetric and every neighbor is stored once, so repeated
/// input rows collapse while the index is built. A self-loop row stores the
/// vertex in its own set.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyIndex {
    neighbors: Vec<FxHashSet<Vertex>>,
}

impl AdjacencyIndex {
    /// Builds the index for all `table.num_vertices()` vertices.
    pub fn build(table: &EdgeTable) -> Result<Self, ForestError> {
        let num_vertices = table.vertex_count()?;

        let mut neighbors = Vec::new();
        neighbors
            .try_reserve_exact(num_vertices)
            .map_err(ForestError::alloc("adjacency sets"))?;
        neighbors.resize_with(num_vertices, FxHashSet::default);

        // Ids were range checked when the table was constructed.
        for &[e1, e2] in table.rows() {
            insert(&mut neighbors[e1 as usize], e2)?;
            insert(&mut neighbors[e2 as usize], e1)?;
        }

        Ok(AdjacencyIndex { neighbors })
    }

    /// The neighbors of `v`, in the iteration order of its set.
    pub fn neighbors(&self, v: Vertex) -> impl ExactSizeIterator<Item = Vertex> + '_ {
        self.neighbors[v as usize].iter().copied()
    }

    /// The number of vertices in the index.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns true if the index holds no vertices.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }
}

fn insert(set: &mut FxHashSet<Vertex>, v: Vertex) -> Result<(), ForestError> {
    set.try_reserve(1)
        .map_err(ForestError::alloc("adjacency set entry"))?;
    set.insert(v);

    Ok(())
}

impl ToJsonCompact for AdjacencyIndex {
    fn to_json_compact(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (v, set) in self.neighbors.iter().enumerate() {
            if set.is_empty() {
                continue;
            }
            let mut sorted: Vec<Vertex> = set.iter().copied().collect();
            sorted.sort_unstable();
            map.insert(v.to_string(), serde_json::json!(sorted));
        }

        serde_json::Value::Object(map)
    }
}
