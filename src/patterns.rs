use crate::Grid;

/// Named set of cell offsets that the drawing tool stamps at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    /// `(dx, dy)` offsets from the cell under the pointer.
    pub cells: &'static [(i64, i64)],
}

pub const CELL: Shape = Shape {
    name: "Cell",
    cells: &[(0, 0)],
};

pub const GLIDER: Shape = Shape {
    name: "Glider",
    cells: &[(0, 2), (1, 2), (2, 2), (2, 1), (1, 0)],
};

/// Gosper glider gun.
#[rustfmt::skip]
pub const GLIDER_GUN: Shape = Shape {
    name: "Glider gun",
    cells: &[
        (0, 4), (0, 5), (1, 4), (1, 5),
        (10, 4), (10, 5), (10, 6), (11, 3), (11, 7), (12, 2), (12, 8),
        (13, 2), (13, 8), (14, 5), (15, 3), (15, 7), (16, 4), (16, 5),
        (16, 6), (17, 5),
        (20, 2), (20, 3), (20, 4), (21, 2), (21, 3), (21, 4), (22, 1),
        (22, 5), (24, 0), (24, 1), (24, 5), (24, 6),
        (34, 2), (34, 3), (35, 2), (35, 3),
    ],
};

#[rustfmt::skip]
pub const HEART: Shape = Shape {
    name: "Heart",
    cells: &[
        (2, 0), (3, 0), (4, 1), (5, 0), (6, 0), (7, 1), (8, 2), (8, 3),
        (8, 4), (7, 5), (6, 6), (5, 7), (4, 8), (3, 7), (2, 6), (1, 5),
        (0, 4), (0, 3), (0, 2), (1, 1),
    ],
};

/// Shapes offered by the drawing tool, in cycling order.
pub const SHAPES: [Shape; 4] = [CELL, GLIDER, GLIDER_GUN, HEART];

impl Shape {
    /// Index of the shape `delta` positions after `index`, wrapping around.
    pub fn cycle(index: usize, delta: i64) -> usize {
        (index as i64 + delta).rem_euclid(SHAPES.len() as i64) as usize
    }

    pub fn is_single_cell(&self) -> bool {
        self.cells.len() == 1
    }
}

/// Cells covered by `shape` anchored at (x, y).
///
/// Offsets that leave the field wrap around on a torus and are dropped on
/// a bounded field.
pub fn affected_cells(grid: &Grid, x: i64, y: i64, shape: &Shape) -> Vec<(usize, usize)> {
    let topology = grid.topology();
    shape
        .cells
        .iter()
        .filter_map(|&(dx, dy)| {
            let cx = topology.wrap(x + dx, grid.width())?;
            let cy = topology.wrap(y + dy, grid.height())?;
            Some((cx, cy))
        })
        .collect()
}
