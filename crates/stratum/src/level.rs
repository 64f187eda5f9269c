//! Leveling: longest path from the roots.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::hash::Hash;
use stratum_graph::alg::longest_path_levels;
use stratum_graph::{Graph, Interner, NodeIx};

pub type Levels<Id> = IndexMap<Id, usize, FxBuildHasher>;

/// Assigns every id in `ids` a level ≥ 0 using Kahn-order longest paths over `edges`.
///
/// Parallel edges each count towards in-degree. Edges naming an id not in `ids` are ignored.
/// Nodes that never become ready (cycles and everything only reachable through one) keep the
/// highest level proposed to them, or 0 if none was. The map iterates in first-seen id order.
pub fn assign_levels<Id, I, E>(ids: I, edges: E) -> Levels<Id>
where
    Id: Clone + Eq + Hash,
    I: IntoIterator<Item = Id>,
    E: IntoIterator<Item = (Id, Id)>,
{
    let mut keys: Interner<Id> = Interner::new();
    for id in ids {
        keys.intern(id);
    }

    let mut g: Graph<(), ()> = Graph::with_capacity(keys.len(), 0);
    for _ in 0..keys.len() {
        g.add_node(());
    }
    for (from, to) in edges {
        let (Some(v), Some(w)) = (keys.get(&from), keys.get(&to)) else {
            continue;
        };
        g.add_edge(NodeIx::new(v), NodeIx::new(w), ());
    }

    let levels = longest_path_levels(&g);
    keys.keys().iter().cloned().zip(levels).collect()
}

/// Like [`assign_levels`], but a level given alongside an id replaces the derived one.
///
/// When an id repeats, the first occurrence that carries a level wins.
pub fn assign_levels_with_overrides<Id, I, E>(nodes: I, edges: E) -> Levels<Id>
where
    Id: Clone + Eq + Hash,
    I: IntoIterator<Item = (Id, Option<usize>)>,
    E: IntoIterator<Item = (Id, Id)>,
{
    let nodes: Vec<(Id, Option<usize>)> = nodes.into_iter().collect();
    let mut levels = assign_levels(nodes.iter().map(|(id, _)| id.clone()), edges);
    for (id, level) in nodes.iter().rev() {
        if let (Some(level), Some(slot)) = (level, levels.get_mut(id)) {
            *slot = *level;
        }
    }
    levels
}

/// Resolves one level per node from caller-supplied levels and derived ones, then renumbers the
/// distinct levels densely so no layer is left empty.
pub(crate) fn resolve_levels(supplied: &[Option<usize>], derived: &[usize]) -> Vec<usize> {
    let raw: Vec<usize> = supplied
        .iter()
        .zip(derived)
        .map(|(s, d)| s.unwrap_or(*d))
        .collect();

    let mut distinct = raw.clone();
    distinct.sort_unstable();
    distinct.dedup();

    raw.iter()
        .map(|l| distinct.binary_search(l).unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::resolve_levels;

    #[test]
    fn supplied_levels_win_and_gaps_close() {
        let supplied = [Some(4), None, Some(9)];
        let derived = [0, 1, 2];
        assert_eq!(resolve_levels(&supplied, &derived), vec![1, 0, 2]);
    }

    #[test]
    fn derived_levels_pass_through_when_dense() {
        assert_eq!(resolve_levels(&[None, None], &[0, 1]), vec![0, 1]);
    }
}
