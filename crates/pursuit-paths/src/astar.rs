use log::trace;
use pursuit_core::{Dims, Grid, Pos};

use crate::config::SearchConfig;
use crate::frontier::{Frontier, FrontierKind, HeapFrontier, LinearFrontier};
use crate::state::SearchState;
use crate::traits::AstarPather;

/// Ordered cells from the step after the start up to and including the
/// goal. Empty means there is no usable route.
pub type Path = Vec<Pos>;

/// A* search engine bound to one wall map.
///
/// The grid is owned and never changes. Every query allocates its own
/// search state and frontier and drops them when it returns, so no
/// state carries over between requests.
#[derive(Debug, Clone)]
pub struct Pathfinder {
    grid: Grid,
    config: SearchConfig,
}

impl Pathfinder {
    /// Create a pathfinder using the default (linear) frontier.
    pub fn new(grid: Grid) -> Self {
        Self::with_config(grid, SearchConfig::default())
    }

    pub fn with_config(grid: Grid, config: SearchConfig) -> Self {
        Self { grid, config }
    }

    /// The wall map this pathfinder searches.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Shortest four-connected path from `(start_row, start_col)` to
    /// `(end_row, end_col)`.
    ///
    /// Returns an empty path when start equals goal, when either endpoint
    /// is outside the grid or on a wall, or when the goal is unreachable.
    pub fn find_path(&self, start_row: i32, start_col: i32, end_row: i32, end_col: i32) -> Path {
        self.find_path_between(Pos::new(start_row, start_col), Pos::new(end_row, end_col))
    }

    /// [`Pathfinder::find_path`] taking positions.
    pub fn find_path_between(&self, start: Pos, goal: Pos) -> Path {
        if start == goal {
            return Path::new();
        }
        if !self.grid.is_passable(start) || !self.grid.is_passable(goal) {
            trace!("endpoint {start} -> {goal} is out of bounds or blocked");
            return Path::new();
        }

        let path = match self.config.frontier {
            FrontierKind::Linear => {
                astar(&self.grid, self.grid.dims(), start, goal, LinearFrontier::new())
            }
            FrontierKind::Heap => {
                astar(&self.grid, self.grid.dims(), start, goal, HeapFrontier::new())
            }
        };
        path.unwrap_or_default()
    }
}

/// Run A* from `start` to `goal` over `pather`, restricted to `dims`.
///
/// Both endpoints must be inside `dims`. Returns `None` if the frontier
/// runs dry before the goal is selected.
pub fn astar<P, F>(pather: &P, dims: Dims, start: Pos, goal: Pos, mut open: F) -> Option<Path>
where
    P: AstarPather,
    F: Frontier,
{
    let start_idx = dims.index(start)?;
    let goal_idx = dims.index(goal)?;

    let mut state = SearchState::new(dims.len());
    state.g[start_idx] = 0;
    state.f[start_idx] = pather.estimate(start, goal);
    state.open[start_idx] = true;
    open.insert(start_idx, state.f[start_idx]);

    let mut nbuf = Vec::with_capacity(4);
    let mut expanded = 0usize;

    while let Some(ci) = open.pop_min(&state.f) {
        state.open[ci] = false;

        if ci == goal_idx {
            trace!("reached {goal} from {start} after {expanded} expansions");
            return Some(state.reconstruct(dims, start_idx, goal_idx));
        }

        state.closed[ci] = true;
        expanded += 1;
        let current = dims.pos(ci);
        let current_g = state.g[ci];

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = dims.index(np) else {
                continue;
            };
            if state.closed[ni] {
                continue;
            }
            let tentative_g = current_g + pather.cost(current, np);
            if tentative_g >= state.g[ni] {
                continue;
            }

            state.came_from[ni] = ci;
            state.g[ni] = tentative_g;
            state.f[ni] = tentative_g + pather.estimate(np, goal);

            if state.open[ni] {
                open.decrease(ni, state.f[ni]);
            } else {
                state.open[ni] = true;
                open.insert(ni, state.f[ni]);
            }
        }
    }

    trace!("no route from {start} to {goal} after {expanded} expansions");
    None
}
