//! The driver that splits a whole edge table into components.

use crate::prelude::*;
use crate::utils::debug::{self, Stage, ToJsonCompact};
use crate::utils::log::{LogMessage, WithLogs};

use super::{
    deduplicate_edges, traverse_component, AdjacencyIndex, Component, EdgeTable, VisitedSet,
};

const LOG_SOURCE: &str = "ForestDriver";

/// The ordered output sequence of a forest computation.
///
/// Slot `i` holds the edges of the `i`-th component discovered while scanning
/// the input rows. Vertex sets of distinct slots are disjoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Forest {
    components: Vec<Component>,
}

impl Forest {
    /// The components in discovery order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// The number of output slots.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Component> {
        self.components.iter()
    }

    /// The total number of edges over all slots.
    pub fn num_edges(&self) -> usize {
        self.components.iter().map(Component::len).sum()
    }

    /// Converts every slot into a table of `[lower, upper]` rows.
    pub fn into_tables(self) -> Vec<Vec<[Vertex; 2]>> {
        self.components
            .into_iter()
            .map(|component| component.rows().collect())
            .collect()
    }

    /// Removes all slots without edges and returns how many were removed.
    pub fn retain_nonempty(&mut self) -> usize {
        let before = self.components.len();
        self.components.retain(|component| !component.is_empty());

        before - self.components.len()
    }

    pub fn into_components(self) -> Vec<Component> {
        self.components
    }
}

impl IntoIterator for Forest {
    type Item = Component;
    type IntoIter = std::vec::IntoIter<Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a> IntoIterator for &'a Forest {
    type Item = &'a Component;
    type IntoIter = std::slice::Iter<'a, Component>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl ToJsonCompact for Forest {
    fn to_json_compact(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.components
                .iter()
                .map(|component| {
                    serde_json::json!(component
                        .edges()
                        .iter()
                        .map(Edge::to_string)
                        .collect::<Vec<_>>())
                })
                .collect(),
        )
    }
}

/// Raw traversal occurrences of every slot, for debugging.
struct SlotOccurrences(Vec<Vec<(Vertex, Vertex)>>);

impl ToJsonCompact for SlotOccurrences {
    fn to_json_compact(&self) -> serde_json::Value {
        serde_json::Value::Array(
            self.0
                .iter()
                .map(|occurrences| {
                    serde_json::json!(occurrences
                        .iter()
                        .map(|(node, parent)| format!("{parent} -> {node}"))
                        .collect::<Vec<_>>())
                })
                .collect(),
        )
    }
}

/// Splits `table` into its connected components.
///
/// This is [`extract_forest`] with default debug settings and without the
/// log messages.
pub fn compute_components(table: &EdgeTable) -> Result<Forest, ForestError> {
    extract_forest(table, &debug::Settings::default()).map(WithLogs::into_object)
}

/// Validates a row-major buffer of `shape` and splits it into components.
pub fn compute_components_from_raw(
    data: &[Vertex],
    shape: &[usize],
    num_vertices: u64,
) -> Result<Forest, ForestError> {
    let table = EdgeTable::from_raw(data, shape, num_vertices)?;

    compute_components(&table)
}

/// Splits `table` into its connected components and collects log messages.
///
/// The first vertex of every row is a candidate start vertex. Rows are
/// scanned in order and every unvisited candidate starts a new slot, which
/// receives the deduplicated edges of its component. A component that yields
/// fewer than two raw occurrences has no proper edge and gets an empty slot.
///
/// Intermediate results are printed if `debug_settings` selects the
/// respective stage. Per-slot messages are only generated in verbose mode.
pub fn extract_forest(
    table: &EdgeTable,
    debug_settings: &debug::Settings,
) -> Result<WithLogs<Forest>, ForestError> {
    debug_settings.print_compact_json(table, Stage::Input);

    let index = AdjacencyIndex::build(table)?;
    debug_settings.print_compact_json(&index, Stage::Adjacency);

    let mut visited = VisitedSet::new(index.len())?;
    let mut forest = Forest::default();
    let mut logs = Vec::new();
    let mut num_occurrences = 0usize;
    let mut dumped_occurrences = debug_settings
        .should_debug(Stage::Occurrences)
        .then(Vec::new);

    for &[start, _] in table.rows() {
        if visited.contains(start) {
            continue;
        }
        let slot = forest.components.len();
        let traversal = traverse_component(start, &index, &mut visited)?;
        num_occurrences += traversal.occurrences.len();

        let component = if traversal.occurrences.len() < 2 {
            Component::default()
        } else {
            Component::from_sorted_edges(deduplicate_edges(&traversal.occurrences)?)
        };

        if debug_settings.verbose() {
            logs.push(
                LogMessage::new_debug(format!(
                    "start {start}: expanded {} vertices, {} raw occurrences, {} distinct edges",
                    traversal.num_expanded,
                    traversal.occurrences.len(),
                    component.len()
                ))
                .source(LOG_SOURCE)
                .location(slot),
            );
        }
        if let Some(dump) = dumped_occurrences.as_mut() {
            dump.push(traversal.occurrences);
        }

        forest
            .components
            .try_reserve(1)
            .map_err(ForestError::alloc("forest slots"))?;
        forest.components.push(component);
    }

    if let Some(dump) = dumped_occurrences {
        debug_settings.print_compact_json(&SlotOccurrences(dump), Stage::Occurrences);
    }
    debug_settings.print_compact_json(&forest, Stage::Forest);

    logs.extend(summary(table, &forest, num_occurrences));

    Ok(WithLogs::new(forest, logs))
}

fn summary(table: &EdgeTable, forest: &Forest, num_occurrences: usize) -> Vec<LogMessage> {
    let mut logs = vec![LogMessage::new_info(format!(
        "{} rows over {} vertices split into {} components with {} distinct edges",
        table.len(),
        table.num_vertices(),
        forest.len(),
        forest.num_edges()
    ))
    .source(LOG_SOURCE)];

    let num_empty = forest.iter().filter(|component| component.is_empty()).count();
    if num_empty > 0 {
        logs.push(
            LogMessage::new_info(format!("{num_empty} components have no edges"))
                .source(LOG_SOURCE),
        );
    }
    let num_self_loops = table.num_self_loops();
    if num_self_loops > 0 {
        logs.push(
            LogMessage::new_info(format!("ignored {num_self_loops} self-loop rows"))
                .source(LOG_SOURCE),
        );
    }
    logs.push(
        LogMessage::new_debug(format!(
            "{num_occurrences} raw occurrences were deduplicated"
        ))
        .source(LOG_SOURCE),
    );

    logs
}
