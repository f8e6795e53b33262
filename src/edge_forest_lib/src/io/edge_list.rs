use crate::graph::EdgeTable;
use crate::prelude::*;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonEdgeTable {
    num_vertices: Option<u64>,
    edges: Vec<[Vertex; 2]>,
}

/// Parses a JSON object with an `edges` array of id pairs and an optional
/// `num_vertices` field.
///
/// The vertex count is taken from `num_vertices_override`, then from the
/// document, and is inferred from the largest id otherwise.
pub fn parse_json_edge_table(
    contents: &str,
    num_vertices_override: Option<u64>,
) -> Result<EdgeTable, Error> {
    let JsonEdgeTable {
        num_vertices,
        edges,
    } = serde_json::from_str(contents).context("Malformed JSON edge table")?;

    into_table(edges, num_vertices_override.or(num_vertices))
}

/// Parses a text edge list with one pair of ids per line.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_text_edge_list(
    contents: &str,
    num_vertices: Option<u64>,
) -> Result<EdgeTable, Error> {
    let mut rows = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let columns: Vec<&str> = line.split_whitespace().collect();
        let &[a, b] = columns.as_slice() else {
            return Err(ForestError::invalid_shape(
                &[columns.len()],
                format!("line {} has {} columns, expected 2", index + 1, columns.len()),
            )
            .into());
        };
        let parse = |id: &str| -> Result<Vertex, Error> {
            id.parse()
                .context(format!("Invalid vertex id {id:?} in line {}", index + 1))
        };
        rows.push([parse(a)?, parse(b)?]);
    }

    into_table(rows, num_vertices)
}

fn into_table(rows: Vec<[Vertex; 2]>, num_vertices: Option<u64>) -> Result<EdgeTable, Error> {
    Ok(match num_vertices {
        Some(num_vertices) => EdgeTable::new(rows, num_vertices)?,
        None => EdgeTable::with_inferred_vertex_count(rows),
    })
}
