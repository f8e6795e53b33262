use super::algo::vertex_components;
use super::*;

use std::collections::BTreeSet;

use petgraph::algo::connected_components;

/// Minimal linear congruential generator so that the random graphs are
/// reproducible without extra dependencies.
struct Lcg(u64);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }

    fn below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }
}

/// Random tables with repeated rows, flipped rows and self-loops.
fn random_tables() -> Vec<EdgeTable> {
    let mut rng = Lcg(0x5eed);
    let mut tables = Vec::new();
    for _ in 0..200 {
        let num_vertices = 1 + rng.below(40);
        let num_rows = rng.below(60) as usize;
        let mut rows: Vec<[Vertex; 2]> = Vec::with_capacity(num_rows);
        for _ in 0..num_rows {
            let row = match rng.below(10) {
                0 if !rows.is_empty() => rows[rng.below(rows.len() as u32) as usize],
                1 if !rows.is_empty() => {
                    let [a, b] = rows[rng.below(rows.len() as u32) as usize];
                    [b, a]
                }
                2 => {
                    let v = rng.below(num_vertices);
                    [v, v]
                }
                _ => [rng.below(num_vertices), rng.below(num_vertices)],
            };
            rows.push(row);
        }
        tables.push(EdgeTable::new(rows, u64::from(num_vertices)).unwrap());
    }

    tables
}

fn distinct_input_edges(table: &EdgeTable) -> BTreeSet<Edge> {
    table
        .rows()
        .iter()
        .filter_map(|&[a, b]| Edge::new(a, b))
        .collect()
}

#[test]
fn edge_set_completeness() {
    for table in random_tables() {
        let forest = compute_components(&table).unwrap();
        let output: Vec<Edge> = forest.iter().flat_map(|c| c.edges().to_vec()).collect();
        let output_set: BTreeSet<Edge> = output.iter().copied().collect();

        assert_eq!(output.len(), output_set.len(), "edge emitted twice");
        assert_eq!(output_set, distinct_input_edges(&table));
    }
}

#[test]
fn component_disjointness() {
    for table in random_tables() {
        let forest = compute_components(&table).unwrap();
        let mut seen = BTreeSet::new();
        for component in forest.iter() {
            for v in component.vertices() {
                assert!(seen.insert(v), "vertex {v} in two slots");
            }
        }
    }
}

#[test]
fn slots_are_connected_components() {
    for table in random_tables() {
        let forest = compute_components(&table).unwrap();
        let oracle: BTreeSet<Vec<Vertex>> = vertex_components(&table)
            .unwrap()
            .into_iter()
            .filter(|set| set.len() > 1)
            .collect();

        let nonempty: BTreeSet<Vec<Vertex>> = forest
            .iter()
            .filter(|c| !c.is_empty())
            .map(Component::vertices)
            .collect();
        assert_eq!(nonempty, oracle);

        for component in forest.iter().filter(|c| !c.is_empty()) {
            assert_eq!(connected_components(&component.to_graph()), 1);
        }
    }
}

#[test]
fn self_loop_elimination() {
    for table in random_tables() {
        let forest = compute_components(&table).unwrap();
        assert!(forest
            .iter()
            .flat_map(|c| c.rows())
            .all(|[lower, upper]| lower < upper));
    }
}

#[test]
fn slot_order_follows_first_elements() {
    for table in random_tables() {
        let forest = compute_components(&table).unwrap();
        let mut starts = Vec::new();
        let mut covered = BTreeSet::new();
        for &[a, _] in table.rows() {
            if covered.contains(&a) {
                continue;
            }
            starts.push(a);
            let set = vertex_components(&table)
                .unwrap()
                .into_iter()
                .find(|set| set.contains(&a))
                .unwrap();
            covered.extend(set);
        }

        assert_eq!(starts.len(), forest.len());
        for (start, component) in starts.iter().zip(forest.iter()) {
            assert!(component.is_empty() || component.vertices().contains(start));
        }
    }
}

#[test]
fn determinism() {
    for table in random_tables() {
        assert_eq!(
            compute_components(&table).unwrap(),
            compute_components(&table).unwrap()
        );
    }
}

#[test]
fn duplicate_collapse() {
    let mut rows = Vec::new();
    for _ in 0..50 {
        rows.extend([[3, 8], [8, 3]]);
    }
    rows.push([8, 9]);
    let table = EdgeTable::new(rows, 10).unwrap();
    assert_eq!(
        compute_components(&table).unwrap().into_tables(),
        vec![vec![[3, 8], [8, 9]]]
    );
}
