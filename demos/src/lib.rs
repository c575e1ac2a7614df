//! Shared helpers for the pursuit demos: cave generation and text output.

use pursuit_core::{Dims, Grid, GridError, Pos};
use rand::{Rng, RngExt};

/// Default demo map width.
pub const COLS: i32 = 40;
/// Default demo map height.
pub const ROWS: i32 = 16;

/// Carve a cave out of solid rock with a four-directional random walk.
///
/// The walk starts at the centre and continues until `fill_pct` (0.0–1.0)
/// of the cells are open or `total * 4` steps have been taken.
pub fn random_walk_cave(rng: &mut impl Rng, dims: Dims, fill_pct: f64) -> Result<Grid, GridError> {
    let total = dims.len();
    let target = (total as f64 * fill_pct) as usize;
    let mut walls = vec![true; total];
    let mut carved = 0usize;
    let mut pos = Pos::new(dims.rows / 2, dims.cols / 2);

    for _ in 0..total * 4 {
        if carved >= target {
            break;
        }
        if let Some(i) = dims.index(pos) {
            if walls[i] {
                walls[i] = false;
                carved += 1;
            }
        }
        let next = pos + Pos::CARDINALS[rng.random_range(0..4usize)];
        if dims.contains(next) {
            pos = next;
        }
    }

    Grid::new(dims.rows, dims.cols, walls)
}

/// Pick a random open cell, if the grid has any.
pub fn random_open_cell(rng: &mut impl Rng, grid: &Grid) -> Option<Pos> {
    let open: Vec<Pos> = grid.dims().iter().filter(|&p| grid.is_passable(p)).collect();
    if open.is_empty() {
        return None;
    }
    Some(open[rng.random_range(0..open.len())])
}

/// Render `grid` as text with the given markers drawn on top.
///
/// Later markers overwrite earlier ones on the same cell.
pub fn render(grid: &Grid, marks: &[(Pos, char)]) -> String {
    let cols = grid.cols() as usize;
    let mut cells: Vec<char> = grid
        .dims()
        .iter()
        .map(|p| if grid.is_blocked_at(p) { '#' } else { '.' })
        .collect();
    for &(p, ch) in marks {
        if let Some(i) = grid.index(p) {
            cells[i] = ch;
        }
    }
    let mut out = String::with_capacity(cells.len() + grid.rows() as usize);
    for row in cells.chunks(cols) {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn cave_reaches_fill_target() {
        let dims = Dims::new(ROWS, COLS);
        let mut rng = StdRng::seed_from_u64(42);
        let grid = random_walk_cave(&mut rng, dims, 0.4).unwrap();
        assert_eq!(grid.dims(), dims);
        let open = grid.len() - grid.wall_count();
        assert!(open > 0);
        assert!(open <= (grid.len() as f64 * 0.4) as usize);
    }

    #[test]
    fn render_draws_marks() {
        let grid = Grid::parse("..#\n...").unwrap();
        let text = render(&grid, &[(Pos::new(0, 0), 'P'), (Pos::new(1, 2), 'T')]);
        assert_eq!(text, "P.#\n..T\n");
    }

    #[test]
    fn random_open_cell_avoids_walls() {
        let grid = Grid::parse("#.#\n###").unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(random_open_cell(&mut rng, &grid), Some(Pos::new(0, 1)));
        }
        let solid = Grid::parse("##").unwrap();
        assert_eq!(random_open_cell(&mut rng, &solid), None);
    }
}
