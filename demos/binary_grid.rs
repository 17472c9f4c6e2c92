use augmenting_flow::lexicographic_flow::{BinaryGrid, LexicographicAdjuster, Preference, ScanOrder};
use augmenting_flow::SearchOrder;

fn main() {
    // three teams, four problems: how many problems each team solved, how many teams solved each problem
    let grid = BinaryGrid::new(vec![2, 1, 3], vec![1, 2, 1, 2]);

    let flow = grid.solve(SearchOrder::DepthFirst).unwrap();
    if !flow.is_feasible() {
        println!("IMPOSSIBLE");
        return;
    }

    for preference in [Preference::Absent, Preference::Present] {
        let assignment = LexicographicAdjuster::new(preference, ScanOrder::RowMajor).adjust(flow.clone()).unwrap();
        println!("{:?}:\n{}\n", preference, assignment.render('Y', 'N'));
    }
}
