use conway::{next_state, Grid, Topology};

const SEED: u64 = 42;

fn randomly_filled(width: usize, height: usize, topology: Topology) -> Grid {
    Grid::random(width, height, Some(SEED), 0.3)
        .unwrap()
        .with_topology(topology)
}

/// Next generation computed cell by cell through the public API.
fn reference_step(grid: &Grid) -> Grid {
    let (w, h) = (grid.width() as i64, grid.height() as i64);
    let mut cells = Vec::with_capacity(grid.area());
    for y in 0..h {
        for x in 0..w {
            let alive = grid.get(x, y).unwrap();
            cells.push(next_state(alive, grid.count_live_neighbors(x, y).unwrap()));
        }
    }
    Grid::from_cells(grid.width(), grid.height(), cells)
        .unwrap()
        .with_topology(grid.topology())
}

fn assert_fields_equal(grid: &Grid, example: &Grid) {
    assert_eq!(grid.width(), example.width());
    assert_eq!(grid.height(), example.height());
    if grid.cells() == example.cells() {
        return;
    }

    let (w, h) = (grid.width(), grid.height());
    const K: usize = 10;
    let i = grid
        .cells()
        .iter()
        .zip(example.cells())
        .position(|(a, b)| a != b)
        .unwrap();
    let (x, y) = (i % w, i / w);
    let (x1, y1) = (x.saturating_sub(K), y.saturating_sub(K));
    let (x2, y2) = ((x + K).min(w), (y + K).min(h));
    let mut picture = String::new();
    for y in y1..y2 {
        for field in [grid, example] {
            picture.push('|');
            picture.extend(
                field.row(y).unwrap()[x1..x2]
                    .iter()
                    .map(|&c| if c { '#' } else { ' ' }),
            );
        }
        picture.push_str("|\n");
    }
    panic!("Mismatch at ({}, {}):\n{}", x, y, picture);
}

#[test]
fn test_step_matches_reference() {
    for topology in [Topology::Bounded, Topology::Torus] {
        for (w, h) in [(1, 1), (1, 7), (5, 3), (64, 48), (101, 37)] {
            let mut grid = randomly_filled(w, h, topology);
            for _ in 0..16 {
                let expected = reference_step(&grid);
                grid.step();
                assert_fields_equal(&grid, &expected);
                assert_eq!(grid.population(), expected.population());
            }
        }
    }
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_matches_serial() {
    for topology in [Topology::Bounded, Topology::Torus] {
        for (w, h) in [(1, 1), (3, 200), (256, 256), (300, 17)] {
            let mut serial = randomly_filled(w, h, topology);
            let mut parallel = serial.clone();
            for _ in 0..32 {
                serial.step();
                parallel.step_parallel();
                assert_fields_equal(&parallel, &serial);
                assert_eq!(parallel.population(), serial.population());
            }
        }
    }
}

#[test]
fn test_glider_wraps_around_torus() {
    const N: usize = 12;
    let mut grid = Grid::new(N, N).unwrap().with_topology(Topology::Torus);
    for (x, y) in [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)] {
        grid.set(x, y, true).unwrap();
    }
    let initial = grid.clone();
    for generation in 1..=4 * N {
        grid.step();
        assert_eq!(grid.population(), 5, "generation {}", generation);
    }
    assert_fields_equal(&grid, &initial);
}

#[test]
fn test_blocks_in_corners() {
    let (w, h) = (9i64, 6i64);

    let mut bounded = Grid::new(w as usize, h as usize).unwrap();
    for (x, y) in [(w - 2, h - 2), (w - 1, h - 2), (w - 2, h - 1), (w - 1, h - 1)] {
        bounded.set(x, y, true).unwrap();
    }
    let before = bounded.clone();
    bounded.step();
    assert_fields_equal(&bounded, &before);

    // a block split over all four corners only exists on a torus
    let mut torus = Grid::new(w as usize, h as usize)
        .unwrap()
        .with_topology(Topology::Torus);
    for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
        torus.set(x, y, true).unwrap();
    }
    let before = torus.clone();
    torus.step();
    assert_fields_equal(&torus, &before);

    let mut split = before.clone();
    split.set_topology(Topology::Bounded);
    split.step();
    assert_eq!(split.population(), 0);
}
