//! Vertices, canonical edges and the validated input table.

use crate::prelude::*;
use crate::utils::debug::ToJsonCompact;

use std::cmp::Ordering;
use std::fmt;

/// A vertex id in `[0, num_vertices)`.
pub type Vertex = u32;

/// An undirected edge between two distinct vertices.
///
/// The endpoints are stored in canonical order `lower < upper`. Edges are
/// ordered by their [packed key](Edge::key), i.e., by the upper endpoint
/// first and by the lower endpoint second.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Edge {
    lower: Vertex,
    upper: Vertex,
}

impl Edge {
    /// Returns the canonical edge between `u` and `v`, or `None` for a
    /// self-loop.
    pub fn new(u: Vertex, v: Vertex) -> Option<Self> {
        match u.cmp(&v) {
            Ordering::Less => Some(Edge { lower: u, upper: v }),
            Ordering::Greater => Some(Edge { lower: v, upper: u }),
            Ordering::Equal => None,
        }
    }

    /// The smaller endpoint.
    pub fn lower(&self) -> Vertex {
        self.lower
    }

    /// The larger endpoint.
    pub fn upper(&self) -> Vertex {
        self.upper
    }

    /// Sort key with the upper endpoint in the high 32 bits and the lower
    /// endpoint in the low 32 bits.
    pub fn key(&self) -> u64 {
        (u64::from(self.upper) << 32) | u64::from(self.lower)
    }

    /// Inverse of [`Edge::key`].
    ///
    /// Only keys produced by [`Edge::key`] are valid inputs.
    pub fn from_key(key: u64) -> Self {
        let edge = Edge {
            lower: key as u32,
            upper: (key >> 32) as u32,
        };
        debug_assert!(edge.lower < edge.upper, "Invalid edge key {key:#x}.");

        edge
    }

    /// The edge as a `[lower, upper]` table row.
    pub fn row(&self) -> [Vertex; 2] {
        [self.lower, self.upper]
    }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lower, self.upper)
    }
}

impl Serialize for Edge {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.row().serialize(serializer)
    }
}

/// A validated edge list: rows of two vertex ids plus the vertex count.
///
/// Construction fails if the table does not have two columns or if a vertex
/// id is not smaller than the vertex count. Row order and orientation are
/// kept as given.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
pub struct EdgeTable {
    rows: Vec<[Vertex; 2]>,
    num_vertices: u64,
}

impl EdgeTable {
    /// Creates a table from rows and a vertex count.
    pub fn new(rows: Vec<[Vertex; 2]>, num_vertices: u64) -> Result<Self, ForestError> {
        check_vertex_range(&rows, num_vertices)?;

        Ok(EdgeTable { rows, num_vertices })
    }

    /// Creates a table whose vertex count is one more than the largest id in
    /// `rows`, or zero if there are no rows.
    pub fn with_inferred_vertex_count(rows: Vec<[Vertex; 2]>) -> Self {
        let num_vertices = rows
            .iter()
            .flatten()
            .max()
            .map_or(0, |&max| u64::from(max) + 1);

        EdgeTable { rows, num_vertices }
    }

    /// Creates a table from a row-major buffer with the given dimensions.
    ///
    /// `shape` must be `[num_rows, 2]` and `data` must hold exactly
    /// `2 * num_rows` ids.
    pub fn from_raw(
        data: &[Vertex],
        shape: &[usize],
        num_vertices: u64,
    ) -> Result<Self, ForestError> {
        let &[num_rows, num_columns] = shape else {
            return Err(ForestError::invalid_shape(
                shape,
                format!("expected 2 dimensions, got {}", shape.len()),
            ));
        };
        if num_columns != 2 {
            return Err(ForestError::invalid_shape(
                shape,
                format!("expected 2 columns, got {num_columns}"),
            ));
        }
        if num_rows.checked_mul(2) != Some(data.len()) {
            return Err(ForestError::invalid_shape(
                shape,
                format!("buffer holds {} ids", data.len()),
            ));
        }

        let mut rows = Vec::new();
        rows.try_reserve_exact(num_rows)
            .map_err(ForestError::alloc("edge table rows"))?;
        rows.extend(data.chunks_exact(2).map(|pair| [pair[0], pair[1]]));

        Self::new(rows, num_vertices)
    }

    /// The rows in input order.
    pub fn rows(&self) -> &[[Vertex; 2]] {
        &self.rows
    }

    /// The number of vertices, i.e., the exclusive upper bound on vertex ids.
    pub fn num_vertices(&self) -> u64 {
        self.num_vertices
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The number of rows that connect a vertex to itself.
    pub fn num_self_loops(&self) -> usize {
        self.rows.iter().filter(|[a, b]| a == b).count()
    }

    /// The vertex count as an in-memory length.
    pub(crate) fn vertex_count(&self) -> Result<usize, ForestError> {
        usize::try_from(self.num_vertices).map_err(|_| ForestError::AllocationFailure {
            what: "per-vertex storage",
            source: None,
        })
    }
}

impl ToJsonCompact for EdgeTable {
    fn to_json_compact(&self) -> serde_json::Value {
        serde_json::json!({
            "num_vertices": self.num_vertices,
            "rows": self.rows.iter().map(|[a, b]| format!("{a} {b}")).collect::<Vec<_>>(),
        })
    }
}

fn check_vertex_range(rows: &[[Vertex; 2]], num_vertices: u64) -> Result<(), ForestError> {
    for (row, pair) in rows.iter().enumerate() {
        if let Some(&vertex) = pair.iter().find(|&&v| u64::from(v) >= num_vertices) {
            return Err(ForestError::OutOfRangeVertex {
                vertex,
                row,
                num_vertices,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_edges() {
        let edge = Edge::new(5, 2).unwrap();
        assert_eq!(edge.lower(), 2);
        assert_eq!(edge.upper(), 5);
        assert_eq!(edge, Edge::new(2, 5).unwrap());
        assert_eq!(Edge::new(4, 4), None);
    }

    #[test]
    fn key_orders_by_upper_endpoint_first() {
        let a = Edge::new(0, 3).unwrap();
        let b = Edge::new(1, 2).unwrap();
        let c = Edge::new(2, 3).unwrap();
        let mut edges = vec![c, a, b];
        edges.sort();
        assert_eq!(edges, vec![b, a, c]);

        assert_eq!(a.key(), 3 << 32);
        assert_eq!(Edge::from_key(c.key()), c);
        let wide = Edge::new(u32::MAX, u32::MAX - 1).unwrap();
        assert_eq!(Edge::from_key(wide.key()), wide);
    }

    #[test]
    fn edge_serializes_as_row() {
        let edge = Edge::new(9, 1).unwrap();
        assert_eq!(serde_json::to_string(&edge).unwrap(), "[1,9]");
        assert_eq!(edge.to_string(), "1 9");
    }

    #[test]
    fn table_from_raw() {
        let table = EdgeTable::from_raw(&[0, 1, 2, 1], &[2, 2], 3).unwrap();
        assert_eq!(table.rows(), &[[0, 1], [2, 1]]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.num_vertices(), 3);

        let empty = EdgeTable::from_raw(&[], &[0, 2], 0).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn table_rejects_invalid_shapes() {
        for (data, shape) in [
            (vec![0, 1, 2], vec![1, 3]),
            (vec![0, 1], vec![2]),
            (vec![0, 1, 1, 0], vec![1, 2, 2]),
            (vec![0, 1, 1], vec![2, 2]),
            (vec![0, 1], vec![usize::MAX, 2]),
        ] {
            assert!(
                matches!(
                    EdgeTable::from_raw(&data, &shape, 10),
                    Err(ForestError::InvalidShape { .. })
                ),
                "shape {shape:?} accepted"
            );
        }
    }

    #[test]
    fn table_rejects_out_of_range_vertices() {
        let err = EdgeTable::new(vec![[0, 1], [1, 3]], 3).unwrap_err();
        assert!(matches!(
            err,
            ForestError::OutOfRangeVertex {
                vertex: 3,
                row: 1,
                num_vertices: 3
            }
        ));
        assert!(EdgeTable::new(vec![[0, 0]], 0).is_err());
        assert!(EdgeTable::new(vec![], 0).is_ok());
    }

    #[test]
    fn inferred_vertex_count() {
        let table = EdgeTable::with_inferred_vertex_count(vec![[4, 1], [2, 2]]);
        assert_eq!(table.num_vertices(), 5);
        assert_eq!(table.num_self_loops(), 1);
        assert_eq!(
            EdgeTable::with_inferred_vertex_count(vec![]).num_vertices(),
            0
        );
    }
}
