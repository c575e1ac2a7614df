//! A* path search for a pursuing agent on a fixed wall grid.
//!
//! Movement is four-connected (right, left, down, up) with unit step cost,
//! and the heuristic is Manhattan distance:
//!
//! - **A\*** shortest path between two cells ([`Pathfinder::find_path`])
//! - **BFS** reference distance maps ([`bfs_distances`])
//!
//! Every failure mode of a path query (start equals goal, endpoint out of
//! bounds or on a wall, unreachable goal) yields an empty [`Path`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`pursuit_core::Grid`] implements all three.

mod astar;
mod bfs;
mod config;
mod distance;
mod frontier;
mod state;
mod traits;

pub use astar::{Path, Pathfinder, astar};
pub use bfs::{bfs_distances, shortest_distance};
pub use config::SearchConfig;
pub use distance::manhattan;
pub use frontier::{Frontier, FrontierKind, HeapFrontier, LinearFrontier};
pub use state::UNREACHABLE;
pub use traits::{AstarPather, Pather, WeightedPather};
