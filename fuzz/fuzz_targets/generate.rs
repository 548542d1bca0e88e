#![no_main]

use libfuzzer_sys::fuzz_target;

use geograph::{
    algo::Properties,
    infra::{arbitrary::GenerateParams, testing::check_simple},
};

fuzz_target!(|params: GenerateParams| {
    let graph = params.generate().unwrap();

    assert_eq!(graph.node_count(), params.node_count());
    assert_eq!(graph.edge_count(), params.edge_count());
    check_simple(&graph).map_err(|error| error.to_string()).unwrap();

    let props = Properties::of(&graph);
    assert_eq!(props.degrees.total(), 2 * graph.edge_count());
});
