//! Reader for SWC neuron morphology files.
//!
//! Every data line has the columns `id type x y z radius parent`. Vertices
//! are numbered densely in file order, and every line with a non-negative
//! parent adds an edge between the vertex and its parent.

use crate::graph::EdgeTable;
use crate::prelude::*;

use std::collections::hash_map::{Entry, HashMap};

use anyhow::bail;

const NUM_COLUMNS: usize = 7;

struct SwcLine {
    line_number: usize,
    id: i64,
    parent: i64,
}

fn parse_line(line_number: usize, line: &str) -> Result<SwcLine, Error> {
    let columns: Vec<&str> = line.split_whitespace().collect();
    if columns.len() != NUM_COLUMNS {
        bail!(
            "Line {line_number} has {} columns, expected {NUM_COLUMNS}.",
            columns.len()
        );
    }
    let int = |column: usize, name: &str| -> Result<i64, Error> {
        columns[column]
            .parse()
            .context(format!("Invalid {name} in line {line_number}"))
    };
    for (column, name) in [(2, "x"), (3, "y"), (4, "z")] {
        columns[column]
            .parse::<f64>()
            .context(format!("Invalid {name} coordinate in line {line_number}"))?;
    }
    // The radius is not validated: files in the wild contain entries like `NA`.
    int(1, "vertex type")?;

    Ok(SwcLine {
        line_number,
        id: int(0, "vertex id")?,
        parent: int(6, "parent id")?,
    })
}

/// Parses the contents of an SWC file.
///
/// Lines starting with `#` and blank lines are skipped. Edges are oriented
/// from the smaller to the larger SWC id before renumbering.
pub fn parse_swc(contents: &str) -> Result<EdgeTable, Error> {
    let mut lines = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        lines.push(parse_line(index + 1, line)?);
    }

    let mut label_index: HashMap<i64, Vertex> = HashMap::with_capacity(lines.len());
    for (vertex, line) in lines.iter().enumerate() {
        let Ok(vertex) = Vertex::try_from(vertex) else {
            bail!("Too many vertices in SWC input.");
        };
        match label_index.entry(line.id) {
            Entry::Vacant(e) => {
                e.insert(vertex);
            }
            Entry::Occupied(_) => bail!(
                "Duplicate vertex id {} in line {}.",
                line.id,
                line.line_number
            ),
        }
    }

    let mut rows = Vec::new();
    for line in lines.iter().filter(|line| line.parent >= 0) {
        let Some(&parent) = label_index.get(&line.parent) else {
            bail!(
                "Unknown parent id {} in line {}.",
                line.parent,
                line.line_number
            );
        };
        let vertex = label_index[&line.id];
        rows.push(if line.id < line.parent {
            [vertex, parent]
        } else {
            [parent, vertex]
        });
    }

    Ok(EdgeTable::new(rows, lines.len() as u64)?)
}
