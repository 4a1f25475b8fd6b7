//! Sample session with an undirected graph of string labels.
//!
//! Run with `RUST_LOG=adjgraph=debug` to see the ignored mutations.

use adjgraph::UndirectedGraph;
use tracing_subscriber::EnvFilter;

const EDGES: [&str; 11] = [
    "AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG",
];

fn section(title: &str) {
    println!("\n{title}");
    println!("{}", "-".repeat(title.len()));
}

fn pairs<'a>(edges: &'a [&'static str]) -> impl Iterator<Item = (&'static str, &'static str)> + 'a {
    edges.iter().map(|&edge| edge.split_at(1))
}

fn graph(edges: &[&'static str]) -> UndirectedGraph<&'static str> {
    UndirectedGraph::from_edges(pairs(edges))
}

fn chars(s: &'static str) -> Vec<&'static str> {
    (0..s.len()).map(|i| &s[i..i + 1]).collect()
}

fn apply(g: &mut UndirectedGraph<&'static str>, case: &'static str) {
    let Some((command, edge)) = case.split_once(' ') else {
        return;
    };
    let (u, v) = edge.split_at(1);

    if command == "add" {
        g.add_edge(u, v);
    } else {
        g.remove_edge(&u, &v);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    section("add_vertex() / add_edge()");
    let mut g = UndirectedGraph::new();
    println!("{g}");
    for v in chars("ABCDE") {
        g.add_vertex(v);
    }
    println!("{g}");
    g.add_vertex("A");
    println!("{g}");
    for (u, v) in pairs(&["AB", "AC", "BC", "BD", "CD", "CE", "DE", "BC"]) {
        g.add_edge(u, v);
    }
    println!("{g}");

    section("remove_edge() / remove_vertex()");
    let mut g = graph(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]);
    g.remove_vertex(&"DOES NOT EXIST");
    g.remove_edge(&"A", &"B");
    g.remove_edge(&"X", &"B");
    println!("{g}");
    g.remove_vertex(&"D");
    println!("{g}");

    section("vertices() / edges()");
    let g = UndirectedGraph::<&str>::new();
    println!("{:?}", g.edges().collect::<Vec<_>>());
    println!("{:?}", g.vertices().collect::<Vec<_>>());
    let g = graph(&["AB", "AC", "BC", "BD", "CD", "CE"]);
    println!("{:?}", g.edges().collect::<Vec<_>>());
    println!("{:?}", g.vertices().collect::<Vec<_>>());

    section("is_valid_path()");
    let g = graph(&["AB", "AC", "BC", "BD", "CD", "CE", "DE"]);
    for path in ["ABC", "ADE", "ECABDCBE", "ACDECB", "", "D", "Z"] {
        let path = chars(path);
        println!("{path:?} {}", g.is_valid_path(&path));
    }

    section("dfs() and bfs()");
    let g = graph(&EDGES);
    let cases = chars("ABCDEGH");
    for &case in &cases {
        println!(
            "{case} DFS:{:?} BFS:{:?}",
            g.dfs(case, None),
            g.bfs(case, None)
        );
    }
    println!("-----");
    for i in 1..cases.len() {
        let (v1, v2) = (cases[i], cases[cases.len() - 1 - i]);
        println!(
            "{v1}-{v2} DFS:{:?} BFS:{:?}",
            g.dfs(v1, Some(v2)),
            g.bfs(v1, Some(v2))
        );
    }

    section("count_connected_components()");
    let mut g = graph(&EDGES);
    let cases = [
        "add QH", "remove FG", "remove GQ", "remove HQ", "remove AE", "remove CA", "remove EB",
        "remove CE", "remove DE", "remove BC", "add EA", "add EF", "add GQ", "add AC", "add DQ",
        "add EG", "add QH", "remove CD", "remove BD", "remove QG",
    ];
    let counts = cases
        .into_iter()
        .map(|case| {
            apply(&mut g, case);
            g.count_connected_components().to_string()
        })
        .collect::<Vec<_>>();
    println!("{}", counts.join(" "));

    section("has_cycle()");
    let mut g = graph(&EDGES);
    let cases = [
        "add QH", "remove FG", "remove GQ", "remove HQ", "remove AE", "remove CA", "remove EB",
        "remove CE", "remove DE", "remove BC", "add EA", "add EF", "add GQ", "add AC", "add DQ",
        "add EG", "add QH", "remove CD", "remove BD", "remove QG", "add FG", "remove GE",
    ];
    for case in cases {
        apply(&mut g, case);
        println!("{case:<10} {}", g.has_cycle());
    }
}
