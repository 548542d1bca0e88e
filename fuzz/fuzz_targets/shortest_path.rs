#![no_main]

use libfuzzer_sys::fuzz_target;

use geograph::{
    algo::ShortestPath,
    infra::{arbitrary::GenerateParams, testing::brute_force_distance},
};

fuzz_target!(|input: (GenerateParams, u8, u8)| {
    let (params, start, end) = input;
    // Brute force enumerates simple paths, keep the graphs tiny.
    let params = GenerateParams {
        nodes: params.nodes % 7,
        ..params
    };
    let graph = params.generate().unwrap();
    let start = usize::from(start) % graph.node_count();
    let end = usize::from(end) % graph.node_count();

    let result = ShortestPath::on(&graph).run(&start, &end).unwrap();

    match brute_force_distance(&graph, &start, &end) {
        Some(expected) => {
            assert!(result.is_success());
            assert_eq!(result.distance(), expected);
        }
        None => assert!(!result.is_success()),
    }
});
