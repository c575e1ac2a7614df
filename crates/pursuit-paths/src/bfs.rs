use std::collections::VecDeque;

use pursuit_core::{Dims, Grid, Pos};

use crate::state::UNREACHABLE;
use crate::traits::Pather;

/// Breadth-first distance map from `source`, one entry per cell of `dims`
/// in row-major order.
///
/// Each step has cost 1. Cells that cannot be reached hold
/// [`UNREACHABLE`]. An out-of-range source yields an all-unreachable map.
pub fn bfs_distances<P: Pather>(pather: &P, dims: Dims, source: Pos) -> Vec<i32> {
    let mut dist = vec![UNREACHABLE; dims.len()];
    let Some(si) = dims.index(source) else {
        return dist;
    };
    dist[si] = 0;

    let mut queue = VecDeque::from([si]);
    let mut nbuf = Vec::with_capacity(4);

    while let Some(ci) = queue.pop_front() {
        let next = dist[ci] + 1;
        nbuf.clear();
        pather.neighbors(dims.pos(ci), &mut nbuf);
        for &np in nbuf.iter() {
            let Some(ni) = dims.index(np) else {
                continue;
            };
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = next;
            queue.push_back(ni);
        }
    }
    dist
}

/// Unweighted shortest-path step count between two open cells of `grid`,
/// or `None` if either is blocked or no route exists.
pub fn shortest_distance(grid: &Grid, from: Pos, to: Pos) -> Option<i32> {
    if !grid.is_passable(from) || !grid.is_passable(to) {
        return None;
    }
    let dist = bfs_distances(grid, grid.dims(), from);
    match dist[grid.index(to)?] {
        UNREACHABLE => None,
        d => Some(d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_around_a_wall() {
        let g = Grid::parse(
            "
            ...
            ##.
            ...
            ",
        )
        .unwrap();
        let dist = bfs_distances(&g, g.dims(), Pos::new(0, 0));
        assert_eq!(dist[g.index(Pos::new(0, 2)).unwrap()], 2);
        assert_eq!(dist[g.index(Pos::new(2, 0)).unwrap()], 6);
        assert_eq!(dist[g.index(Pos::new(1, 0)).unwrap()], UNREACHABLE);
        assert_eq!(shortest_distance(&g, Pos::new(0, 0), Pos::new(2, 0)), Some(6));
        assert_eq!(shortest_distance(&g, Pos::new(0, 0), Pos::new(1, 1)), None);
    }

    #[test]
    fn out_of_range_source() {
        let g = Grid::open(2, 2).unwrap();
        let dist = bfs_distances(&g, g.dims(), Pos::new(5, 5));
        assert!(dist.iter().all(|&d| d == UNREACHABLE));
    }
}
