//! Sort based elimination of repeated edge occurrences.

use crate::prelude::*;

/// Returns the distinct edges among `occurrences`, sorted by [`Edge::key`].
///
/// Each pair is canonicalized, packed into a `u64` key, and the keys are
/// sorted and deduplicated. Pairs that connect a vertex to itself are
/// dropped. The running time is `O(k log k)` for `k` occurrences.
pub fn deduplicate_edges(occurrences: &[(Vertex, Vertex)]) -> Result<Vec<Edge>, ForestError> {
    let mut keys: Vec<u64> = Vec::new();
    keys.try_reserve_exact(occurrences.len())
        .map_err(ForestError::alloc("edge keys"))?;
    keys.extend(
        occurrences
            .iter()
            .filter_map(|&(u, v)| Edge::new(u, v))
            .map(|edge| edge.key()),
    );

    keys.sort_unstable();
    keys.dedup();

    let mut edges = Vec::new();
    edges
        .try_reserve_exact(keys.len())
        .map_err(ForestError::alloc("component edges"))?;
    edges.extend(keys.into_iter().map(Edge::from_key));

    Ok(edges)
}
