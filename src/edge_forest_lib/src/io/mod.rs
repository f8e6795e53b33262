//! Readers that turn input files into [`EdgeTable`]s.
//!
//! Three formats are supported:
//!
//! - JSON objects of the form `{"num_vertices": 4, "edges": [[0, 1], [2, 3]]}`,
//! - plain text files with one whitespace separated pair of ids per line,
//! - SWC skeleton files.

mod edge_list;
mod swc;

pub use edge_list::{parse_json_edge_table, parse_text_edge_list};
pub use swc::parse_swc;

use crate::graph::EdgeTable;
use crate::prelude::*;

use std::fs;
use std::path::Path;

/// The supported input formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    Json,
    Text,
    Swc,
}

impl InputFormat {
    /// Guesses the format from the file extension.
    ///
    /// `.json` and `.swc` (in any case) select their formats, everything else
    /// is read as text.
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => InputFormat::Json,
            Some("swc") => InputFormat::Swc,
            _ => InputFormat::Text,
        }
    }
}

/// Reads the edge table stored in the file at `path`.
///
/// If `format` is `None` it is inferred from the file name. `num_vertices`
/// overrides the vertex count of JSON and text inputs. SWC files always have
/// one vertex per data line.
pub fn read_edge_table(
    path: &Path,
    format: Option<InputFormat>,
    num_vertices: Option<u64>,
) -> Result<EdgeTable, Error> {
    let format = format.unwrap_or_else(|| InputFormat::from_path(path));
    let contents = fs::read_to_string(path)
        .context(format!("Could not read input file: {}", path.display()))?;

    let table = match format {
        InputFormat::Json => parse_json_edge_table(&contents, num_vertices),
        InputFormat::Text => parse_text_edge_list(&contents, num_vertices),
        InputFormat::Swc => {
            if num_vertices.is_some() {
                return Err(anyhow!("The vertex count of SWC inputs cannot be overridden."));
            }
            parse_swc(&contents)
        }
    };

    table.context(format!("Invalid {format:?} input: {}", path.display()))
}
