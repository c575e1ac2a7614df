//! Randomized checks of A* against a breadth-first reference.

use pursuit_core::{Grid, Pos};
use pursuit_paths::{FrontierKind, Pathfinder, SearchConfig, UNREACHABLE, bfs_distances};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

fn random_grid(rng: &mut impl Rng, rows: i32, cols: i32, wall_pct: f64) -> Grid {
    let walls = (0..rows * cols)
        .map(|_| rng.random::<f64>() < wall_pct)
        .collect();
    Grid::new(rows, cols, walls).unwrap()
}

fn random_open_cell(rng: &mut impl Rng, grid: &Grid) -> Option<Pos> {
    let open: Vec<Pos> = grid.dims().iter().filter(|&p| grid.is_passable(p)).collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

fn check_path(grid: &Grid, start: Pos, goal: Pos, path: &[Pos]) {
    let mut prev = start;
    for &p in path {
        assert!(grid.in_bounds(p.row, p.col), "{p} out of bounds");
        assert!(!grid.is_blocked(p.row, p.col), "{p} is a wall");
        assert!(prev.is_adjacent(p), "{prev} -> {p} is not a unit step");
        prev = p;
    }
    assert_eq!(prev, goal);
}

#[test]
fn path_lengths_match_bfs() {
    let mut rng = StdRng::seed_from_u64(42);
    for round in 0..200 {
        let rows = rng.random_range(1..12);
        let cols = rng.random_range(1..12);
        let grid = random_grid(&mut rng, rows, cols, 0.3);
        let (Some(start), Some(goal)) = (
            random_open_cell(&mut rng, &grid),
            random_open_cell(&mut rng, &grid),
        ) else {
            continue;
        };
        let dist = bfs_distances(&grid, grid.dims(), start);
        let expected = dist[grid.index(goal).unwrap()];

        for kind in [FrontierKind::Linear, FrontierKind::Heap] {
            let pf = Pathfinder::with_config(grid.clone(), SearchConfig { frontier: kind });
            let path = pf.find_path_between(start, goal);
            if start == goal || expected == UNREACHABLE {
                assert!(path.is_empty(), "round {round}: expected no path");
                continue;
            }
            assert_eq!(path.len() as i32, expected, "round {round} ({kind:?})");
            check_path(&grid, start, goal, &path);
        }
    }
}

#[test]
fn blocked_endpoints_never_route() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let grid = random_grid(&mut rng, 8, 8, 0.4);
        let pf = Pathfinder::new(grid.clone());
        for wall in grid.dims().iter().filter(|&p| grid.is_blocked_at(p)) {
            let other = Pos::new(rng.random_range(0..8), rng.random_range(0..8));
            assert!(pf.find_path_between(wall, other).is_empty());
            assert!(pf.find_path_between(other, wall).is_empty());
        }
    }
}
