/*!
The main library of the edge_forest workspace.

It splits an undirected graph, given as a list of vertex-id pairs together
with a vertex count, into its connected components. For every component it
returns the set of distinct edges of that component, with repeated input
edges and self-loops removed. This is the graph cleanup step of a
skeletonization pipeline that wants one clean edge list per connected
subgraph.

# Usage

```
use edge_forest_lib::graph::{compute_components, EdgeTable};

let table = EdgeTable::new(vec![[0, 1], [2, 3], [1, 0]], 4)?;
let forest = compute_components(&table)?;

assert_eq!(forest.len(), 2);
assert_eq!(forest.into_tables(), vec![vec![[0, 1]], vec![[2, 3]]]);
# Ok::<(), edge_forest_lib::ForestError>(())
```

The command line interface in the `edge_forest` crate reads JSON, plain text
and SWC inputs and prints the resulting forest.

# How the forest is computed

The computation runs in four steps, see the [`graph`] module for details:

1. An adjacency index with one hash set of neighbors per vertex is built from
   the input rows. Duplicate rows collapse here.
2. The input rows are scanned in order. Every first vertex of a row that has
   not been visited yet starts a new component. The component is explored with
   an explicit stack, so arbitrarily long paths do not overflow the call stack.
   Every pop of the stack records one raw edge occurrence.
3. The raw occurrences are canonicalized, sorted by a packed `u64` key and
   deduplicated.
4. The deduplicated edge sets are collected in discovery order.

# Errors

All errors of the core algorithm are reported as [`ForestError`]. Input
shapes and vertex ranges are validated before any work is done.
File and configuration handling around the core uses [`anyhow`].
*/

pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod utils;

pub use error::ForestError;

mod prelude {
    pub use serde::{Deserialize, Serialize};

    pub use crate::graph::{Edge, Vertex};
    pub use crate::ForestError;
    pub use anyhow::Context as _;
    pub use anyhow::{anyhow, Error};
}
