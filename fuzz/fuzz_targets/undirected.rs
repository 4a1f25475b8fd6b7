#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    infra::{
        arbitrary::{MutOpsSeq, UndirectedOp},
        testing::check_consistency_undirected,
    },
    UndirectedGraph,
};

fuzz_target!(|ops: MutOpsSeq<UndirectedOp<i8>>| {
    let mut graph = UndirectedGraph::new();

    for op in ops {
        op.apply(&mut graph);
        check_consistency_undirected(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
