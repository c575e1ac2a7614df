use pursuit_core::{Dims, Pos};

/// Sentinel cost meaning "not reached yet" (+∞).
pub const UNREACHABLE: i32 = i32::MAX;

/// Sentinel predecessor meaning "none".
pub(crate) const NONE: usize = usize::MAX;

/// Per-request A* bookkeeping, one slot per grid cell.
///
/// Allocated fresh for every search and dropped when it finishes.
#[derive(Debug, Clone)]
pub(crate) struct SearchState {
    /// Best known cost from the start.
    pub(crate) g: Vec<i32>,
    /// `g` plus the heuristic estimate to the goal.
    pub(crate) f: Vec<i32>,
    pub(crate) came_from: Vec<usize>,
    pub(crate) open: Vec<bool>,
    pub(crate) closed: Vec<bool>,
}

impl SearchState {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            g: vec![UNREACHABLE; len],
            f: vec![UNREACHABLE; len],
            came_from: vec![NONE; len],
            open: vec![false; len],
            closed: vec![false; len],
        }
    }

    /// Follow predecessor links from `goal_idx` back to `start_idx`.
    ///
    /// The start cell is left out; the result runs start → goal.
    pub(crate) fn reconstruct(&self, dims: Dims, start_idx: usize, goal_idx: usize) -> Vec<Pos> {
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != start_idx && ci != NONE {
            path.push(dims.pos(ci));
            ci = self.came_from[ci];
        }
        path.reverse();
        path
    }
}
