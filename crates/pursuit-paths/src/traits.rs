use pursuit_core::{Grid, Pos};

/// Minimal pathfinding interface. Provides neighbor enumeration.
pub trait Pather {
    /// Append passable neighbors of `p` into `buf`. The caller clears `buf`
    /// before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with weighted (positive-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Pos, to: Pos) -> i32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Pos, to: Pos) -> i32;
}

// Four-connected movement with unit step cost. Manhattan distance is both
// admissible and consistent under these rules.

impl Pather for Grid {
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend(p.neighbors_4().into_iter().filter(|&n| self.is_passable(n)));
    }
}

impl WeightedPather for Grid {
    #[inline]
    fn cost(&self, _from: Pos, _to: Pos) -> i32 {
        1
    }
}

impl AstarPather for Grid {
    #[inline]
    fn estimate(&self, from: Pos, to: Pos) -> i32 {
        crate::manhattan(from, to)
    }
}
