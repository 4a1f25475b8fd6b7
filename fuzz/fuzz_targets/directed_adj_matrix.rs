#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    infra::{
        arbitrary::{DirectedOp, MutOpsSeq},
        testing::check_consistency_directed,
    },
    DirectedGraph,
};

fuzz_target!(|ops: MutOpsSeq<DirectedOp<i8>>| {
    let mut graph = DirectedGraph::<i8>::new();

    for op in ops {
        op.apply(&mut graph);
        check_consistency_directed(&graph)
            .as_ref()
            .map_err(ToString::to_string)
            .unwrap();
    }
});
