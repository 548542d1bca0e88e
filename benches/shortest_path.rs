mod common;

use common::{geograph_random, petgraph_from, RANDOM_SEED};
use fastrand::Rng;
use geograph::algo::ShortestPath;
use petgraph::prelude::*;

fn main() {
    divan::main();
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn geograph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = geograph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));

    bencher.bench(|| ShortestPath::on(&graph).distances_from(&0));
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn geograph_dijkstra_goal_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = geograph_random(N, density, &mut Rng::with_seed(RANDOM_SEED));
    let goal = N - 1;

    bencher.bench(|| ShortestPath::on(&graph).run(&0, &goal));
}

#[divan::bench(consts = [100, 1000], args = [0.25, 0.75])]
fn petgraph_dijkstra_random<const N: usize>(bencher: divan::Bencher, density: f32) {
    let graph = petgraph_from(&geograph_random(N, density, &mut Rng::with_seed(RANDOM_SEED)));
    let start = NodeIndex::new(0);

    bencher.bench(|| petgraph::algo::dijkstra(&graph, start, None, |e| *e.weight()));
}
