//! **pursuit-core**: geometry and the wall map shared by the pursuit crates.
//!
//! This crate provides the grid coordinate types and the immutable
//! occupancy [`Grid`] that the path search runs over.

pub mod geom;
pub mod grid;

pub use geom::{Dims, Pos};
pub use grid::{Grid, GridError, OPEN, WALL};
