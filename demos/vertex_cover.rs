use augmenting_flow::bipartite::BipartiteGraph;
use augmenting_flow::SearchOrder;

fn main() {
    // project teams: every pair has one member in each office, one member per team must attend
    let mut graph = BipartiteGraph::new(3, 3);
    for (l, r) in [(0, 0), (0, 1), (1, 0), (2, 2)] {
        graph.add_edge(l, r).unwrap();
    }

    let matching = graph.maximum_matching(SearchOrder::BreadthFirst).unwrap();
    let cover = graph.vertex_cover_from_matching(&matching);

    println!("maximum matching: {:?}", matching.pairs());
    println!("minimum vertex cover ({}):", cover.len());
    for vertex in cover.vertices() {
        println!("{:?}", vertex);
    }
}
