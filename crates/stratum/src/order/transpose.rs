use crate::builder::{LayerGraph, Layered};
use stratum_graph::NodeIx;

/// Crossings contributed by the pair `(v, w)` against both neighbouring layers, first with `v`
/// left of `w`, then swapped.
fn pair_crossings(g: &LayerGraph, v: NodeIx, w: NodeIx) -> (usize, usize) {
    let mut kept: usize = 0;
    let mut swapped: usize = 0;

    let mut tally = |vs: &[usize], ws: &[usize]| {
        for &p in vs {
            for &q in ws {
                if p > q {
                    kept += 1;
                } else if p < q {
                    swapped += 1;
                }
            }
        }
    };

    let v_up: Vec<usize> = g.predecessors(v).map(|u| g[u].order).collect();
    let w_up: Vec<usize> = g.predecessors(w).map(|u| g[u].order).collect();
    tally(&v_up, &w_up);

    let v_down: Vec<usize> = g.successors(v).map(|u| g[u].order).collect();
    let w_down: Vec<usize> = g.successors(w).map(|u| g[u].order).collect();
    tally(&v_down, &w_down);

    (kept, swapped)
}

/// Local transposition: swaps adjacent nodes whenever that strictly lowers their crossings
/// against both neighbouring layers.
///
/// Every layer is scanned once per round; rounds repeat until one makes no swap or
/// `max_rounds` is reached. Returns the number of rounds run.
pub fn transpose(layered: &mut Layered, max_rounds: usize) -> usize {
    let mut rounds = 0;
    while rounds < max_rounds {
        rounds += 1;
        let mut improved = false;

        for rank in 0..layered.layers.len() {
            let len = layered.layers[rank].len();
            for j in 0..len.saturating_sub(1) {
                let v = layered.layers[rank][j];
                let w = layered.layers[rank][j + 1];
                let (kept, swapped) = pair_crossings(&layered.graph, v, w);
                if swapped < kept {
                    layered.layers[rank].swap(j, j + 1);
                    layered.graph[v].order = j + 1;
                    layered.graph[w].order = j;
                    improved = true;
                }
            }
        }

        if !improved {
            break;
        }
    }
    rounds
}
