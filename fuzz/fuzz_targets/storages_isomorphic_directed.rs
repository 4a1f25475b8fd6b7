#![no_main]

use libfuzzer_sys::fuzz_target;

use adjgraph::{
    infra::arbitrary::{DirectedOp, MutOpsSeq},
    storage::AdjList,
    DirectedGraph,
};

fuzz_target!(|ops: MutOpsSeq<DirectedOp<u8>>| {
    let mut matrix = DirectedGraph::<u8>::new();
    let mut list = DirectedGraph::new_in(AdjList::<u8>::new());

    for op in ops {
        assert_eq!(op.clone().apply(&mut matrix), op.apply(&mut list));
        assert_eq!(
            matrix.edges().collect::<Vec<_>>(),
            list.edges().collect::<Vec<_>>()
        );
    }

    if matrix.vertex_count() > 0 {
        assert_eq!(matrix.dfs(0, None), list.dfs(0, None));
        assert_eq!(matrix.has_cycle(), list.has_cycle());
    }
});
