//! Sample session with a directed weighted graph.
//!
//! Run with `RUST_LOG=adjgraph=debug` to see the ignored mutations.

use adjgraph::DirectedGraph;
use tracing_subscriber::EnvFilter;

const EDGES: [(usize, usize, u32); 7] = [
    (0, 1, 10),
    (4, 0, 12),
    (1, 4, 15),
    (4, 3, 3),
    (3, 1, 5),
    (2, 1, 23),
    (3, 2, 7),
];

fn section(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(title.len()));
}

fn distances(distances: Vec<u32>) -> String {
    let distances = distances
        .into_iter()
        .map(|d| {
            if d == u32::MAX {
                "inf".to_string()
            } else {
                d.to_string()
            }
        })
        .collect::<Vec<_>>();

    format!("[{}]", distances.join(", "))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    section("add_vertex() / add_edge()");
    let mut g = DirectedGraph::<u32>::new();
    print!("{g}");
    for _ in 0..5 {
        g.add_vertex();
    }
    print!("{g}");
    for (src, dst, weight) in EDGES {
        g.add_edge(src, dst, weight);
    }
    print!("{g}");

    section("edges()");
    let g = DirectedGraph::<u32>::new();
    println!("{:?}", g.edges().collect::<Vec<_>>());
    println!("{:?}", g.vertices().collect::<Vec<_>>());
    let g = DirectedGraph::from_edges(EDGES);
    println!("{:?}", g.edges().collect::<Vec<_>>());
    println!("{:?}", g.vertices().collect::<Vec<_>>());

    section("is_valid_path()");
    let g = DirectedGraph::from_edges(EDGES);
    let paths: [&[usize]; 6] = [&[0, 1, 4, 3], &[1, 3, 2, 1], &[0, 4], &[4, 0], &[], &[2]];
    for path in paths {
        println!("{path:?} {}", g.is_valid_path(path));
    }

    section("dfs() and bfs()");
    let g = DirectedGraph::from_edges(EDGES);
    for start in 0..5 {
        println!(
            "{start} DFS:{:?} BFS:{:?}",
            g.dfs(start, None),
            g.bfs(start, None)
        );
    }

    section("has_cycle()");
    let mut g = DirectedGraph::from_edges(EDGES);
    for (src, dst) in [(3, 1), (4, 0), (3, 2)] {
        g.remove_edge(src, dst);
        println!("{:?}\n{}", g.edges().collect::<Vec<_>>(), g.has_cycle());
    }
    for (src, dst) in [(4, 3), (2, 3), (1, 3), (4, 0)] {
        g.add_edge(src, dst, 1);
        println!("{:?}\n{}", g.edges().collect::<Vec<_>>(), g.has_cycle());
    }
    print!("\n{g}");

    section("dijkstra()");
    let mut g = DirectedGraph::from_edges(EDGES);
    for i in 0..5 {
        println!("DIJKSTRA {i} {}", distances(g.dijkstra(i)));
    }
    g.remove_edge(4, 3);
    print!("\n{g}");
    for i in 0..5 {
        println!("DIJKSTRA {i} {}", distances(g.dijkstra(i)));
    }
}
