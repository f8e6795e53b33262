//! Some simple graph algorithms on whole edge tables.

use std::collections::hash_map::{Entry, HashMap};

use petgraph::unionfind::UnionFind;

use super::{EdgeTable, Vertex};
use crate::ForestError;

/// Returns the vertex sets of the connected components of `table`.
///
/// Unlike the forest computation this covers every vertex in
/// `[0, num_vertices)`, so isolated vertices form singleton sets. Sets are
/// sorted internally and ordered by their smallest member.
pub fn vertex_components(table: &EdgeTable) -> Result<Vec<Vec<Vertex>>, ForestError> {
    let num_vertices = table.vertex_count()?;
    let mut vertex_sets = UnionFind::<usize>::new(num_vertices);
    for &[a, b] in table.rows() {
        vertex_sets.union(a as usize, b as usize);
    }
    let representatives = vertex_sets.into_labeling();

    let mut slots: HashMap<usize, usize> = HashMap::new();
    let mut sets: Vec<Vec<Vertex>> = Vec::new();
    for (index, repr) in representatives.into_iter().enumerate() {
        match slots.entry(repr) {
            Entry::Vacant(e) => {
                e.insert(sets.len());
                sets.push(vec![index as Vertex]);
            }
            Entry::Occupied(e) => sets[*e.get()].push(index as Vertex),
        }
    }

    Ok(sets)
}

/// Returns the number of vertices that are not an endpoint of any edge.
///
/// Vertices that only have self-loops count as isolated.
pub fn count_isolated_vertices(table: &EdgeTable) -> Result<usize, ForestError> {
    let num_vertices = table.vertex_count()?;
    let mut connected = Vec::new();
    connected
        .try_reserve_exact(num_vertices)
        .map_err(ForestError::alloc("isolation flags"))?;
    connected.resize(num_vertices, false);

    for &[a, b] in table.rows().iter().filter(|[a, b]| a != b) {
        connected[a as usize] = true;
        connected[b as usize] = true;
    }

    Ok(connected.iter().filter(|&&flag| !flag).count())
}
