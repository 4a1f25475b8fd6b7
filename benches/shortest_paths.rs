mod common;

use common::{
    adjgraph_random_directed, adjgraph_random_directed_list, petgraph_random_directed,
    RANDOM_SEED,
};
use fastrand::Rng;
use petgraph::prelude::*;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn adjgraph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = adjgraph_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.dijkstra(0));
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn adjgraph_adj_list_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = adjgraph_random_directed_list(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| graph.dijkstra(0));
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn petgraph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_random_directed(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let start = NodeIndex::new(0);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |e| *e.weight()));
}
