use augmenting_flow::lexicographic_flow::{Assignment, BinaryGrid, GridFlow, LexicographicAdjuster, Preference, ScanOrder};
use augmenting_flow::SearchOrder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn random_grid(rng: &mut StdRng, max_rows: usize, max_cols: usize) -> BinaryGrid {
    let (rows, cols) = (rng.gen_range(0..=max_rows), rng.gen_range(0..=max_cols));
    let row_sums = (0..rows).map(|_| rng.gen_range(0..=cols as i64)).collect();
    let col_sums = (0..cols).map(|_| rng.gen_range(0..=rows as i64)).collect();
    let mut grid = BinaryGrid::new(row_sums, col_sums);
    for r in 0..rows {
        for c in 0..cols {
            if rng.gen_bool(0.2) {
                grid.block(r, c).unwrap();
            }
        }
    }
    grid
}

fn scan_key(assignment: &Assignment, scan: ScanOrder) -> Vec<bool> {
    match scan {
        ScanOrder::RowMajor => (0..assignment.rows()).flat_map(|r| (0..assignment.cols()).map(move |c| (r, c))).map(|(r, c)| assignment.get(r, c)).collect(),
        ScanOrder::ColumnMajor => (0..assignment.cols()).flat_map(|c| (0..assignment.rows()).map(move |r| (r, c))).map(|(r, c)| assignment.get(r, c)).collect(),
    }
}

// every assignment of `value` cells that respects the sums and the blocked cells
fn candidates(grid: &BinaryGrid, value: i64) -> Vec<Assignment> {
    let (rows, cols) = (grid.rows(), grid.cols());
    (0..1u32 << (rows * cols))
        .map(|mask| {
            let mut assignment = Assignment::new(rows, cols);
            for i in 0..rows * cols {
                assignment.set(i / cols.max(1), i % cols.max(1), mask >> i & 1 == 1);
            }
            assignment
        })
        .filter(|a| a.count() as i64 == value)
        .filter(|a| (0..rows).all(|r| (0..cols).all(|c| !a.get(r, c) || !grid.is_blocked(r, c))))
        .filter(|a| a.row_sums().iter().zip(grid.row_sums()).all(|(x, y)| x <= y))
        .filter(|a| a.col_sums().iter().zip(grid.col_sums()).all(|(x, y)| x <= y))
        .collect()
}

#[rstest]
fn unused_cell_in_two_by_two(#[values(SearchOrder::DepthFirst, SearchOrder::BreadthFirst)] order: SearchOrder) {
    let grid = BinaryGrid::new(vec![2, 1], vec![1, 2]);
    let flow = grid.solve(order).unwrap();
    assert_eq!(flow.value(), 3);
    assert!(flow.is_feasible());
    assert_eq!(flow.assignment().count(), 3);

    let assignment = LexicographicAdjuster::default().with_search_order(order).adjust(flow).unwrap();
    assert_eq!(assignment.render('Y', 'N'), "YY\nNY");
}

#[rstest]
fn matches_brute_force(
    #[values(Preference::Absent, Preference::Present)] preference: Preference,
    #[values(ScanOrder::RowMajor, ScanOrder::ColumnMajor)] scan: ScanOrder,
    #[values(SearchOrder::DepthFirst, SearchOrder::BreadthFirst)] search: SearchOrder,
) {
    let mut rng = StdRng::seed_from_u64(1234);
    let adjuster = LexicographicAdjuster::new(preference, scan).with_search_order(search);
    for _ in 0..100 {
        let grid = random_grid(&mut rng, 3, 4);
        let flow = grid.solve(search).unwrap();
        let value = flow.value();

        let assignment = adjuster.adjust(flow).unwrap();
        assert_eq!(assignment.count() as i64, value);

        let keys = candidates(&grid, value).iter().map(|a| scan_key(a, scan)).collect::<Vec<_>>();
        let expected = match preference {
            Preference::Absent => keys.iter().min(),
            Preference::Present => keys.iter().max(),
        };
        assert_eq!(Some(&scan_key(&assignment, scan)), expected);
    }
}

#[rstest]
fn adjusting_twice_changes_nothing(#[values(Preference::Absent, Preference::Present)] preference: Preference) {
    let mut rng = StdRng::seed_from_u64(77);
    let adjuster = LexicographicAdjuster::new(preference, ScanOrder::RowMajor);
    for _ in 0..50 {
        let grid = random_grid(&mut rng, 6, 6);
        let first = adjuster.adjust(grid.solve(SearchOrder::default()).unwrap()).unwrap();
        let second = adjuster.adjust(GridFlow::from_assignment(&grid, &first).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn column_major_is_row_major_of_the_transpose() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..50 {
        let grid = random_grid(&mut rng, 5, 5);
        let column_major = LexicographicAdjuster::new(Preference::Absent, ScanOrder::ColumnMajor).adjust(grid.solve(SearchOrder::default()).unwrap()).unwrap();
        let transposed = LexicographicAdjuster::default().adjust(grid.transpose().solve(SearchOrder::default()).unwrap()).unwrap();
        assert_eq!(column_major, transposed.transpose());
    }
}

#[test]
fn large_feasible_grid_keeps_its_sums() {
    let mut rng = StdRng::seed_from_u64(31);
    let (rows, cols) = (30, 40);
    let mut target = Assignment::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            target.set(r, c, rng.gen_bool(0.4));
        }
    }

    let grid = BinaryGrid::new(target.row_sums(), target.col_sums());
    let flow = grid.solve(SearchOrder::default()).unwrap();
    assert!(flow.is_feasible());

    let assignment = LexicographicAdjuster::default().adjust(flow).unwrap();
    assert_eq!(assignment.row_sums(), target.row_sums());
    assert_eq!(assignment.col_sums(), target.col_sums());
    assert!(scan_key(&assignment, ScanOrder::RowMajor) <= scan_key(&target, ScanOrder::RowMajor));
}

#[test]
fn mismatched_sums_are_reported_before_adjusting() {
    let grid = BinaryGrid::new(vec![2, 2], vec![1, 1]);
    let flow = grid.solve(SearchOrder::default()).unwrap();
    assert!(!flow.is_feasible());
    assert_eq!(flow.value(), 2);
}
