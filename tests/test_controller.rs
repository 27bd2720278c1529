use conway::{
    patterns::{GLIDER, HEART},
    Grid, LifeError, RunState, SimulationConfig, SimulationController, TickTimer, Topology,
};
use std::time::{Duration, Instant};

fn glider_controller(topology: Topology) -> SimulationController {
    let mut controller = SimulationController::new(&SimulationConfig {
        width: 10,
        height: 10,
        topology,
        ..Default::default()
    })
    .unwrap();
    controller.paint(0, 0, &GLIDER, true).unwrap();
    controller
}

#[test]
fn test_timer_drives_running_simulation() {
    let mut controller = glider_controller(Topology::Torus);
    controller.set_speed(100).unwrap();
    let mut timer = TickTimer::new();
    let start = Instant::now();

    // paused: the timer may fire, the controller ignores it
    if timer.poll(start, controller.step_interval()) {
        assert!(!controller.tick());
    }
    assert_eq!(controller.generation(), 0);

    controller.start();
    timer.disarm();
    let mut fired = 0;
    for ms in (0..=1000).step_by(10) {
        let now = start + Duration::from_millis(ms);
        if timer.poll(now, controller.step_interval()) {
            assert!(controller.tick());
            fired += 1;
        }
    }
    assert_eq!(fired, 11);
    assert_eq!(controller.generation(), 11);
    assert_eq!(controller.population(), 5);
}

#[test]
fn test_edits_while_running() {
    let mut controller = glider_controller(Topology::Bounded);
    controller.start();
    controller.tick();

    assert_eq!(controller.edit_cell(9, 9), Ok(true));
    assert_eq!(controller.run_state(), RunState::Running);
    assert_eq!(controller.generation(), 1);
    assert_eq!(controller.population(), 6);

    assert!(matches!(
        controller.edit_cell(10, 3),
        Err(LifeError::OutOfBounds { x: 10, y: 3, .. })
    ));
    assert!(matches!(
        controller.edit_cell(-1, 3),
        Err(LifeError::OutOfBounds { x: -1, .. })
    ));
    assert_eq!(controller.population(), 6);
}

#[test]
fn test_failed_operations_keep_state() {
    let mut controller = glider_controller(Topology::Bounded);
    controller.start();
    controller.step_once();
    let grid = controller.grid().clone();

    assert!(controller.resize_grid(0, 0).is_err());
    assert!(controller.set_speed(0).is_err());
    assert!(controller.paint(100, 0, &HEART, true).is_err());

    assert_eq!(controller.grid(), &grid);
    assert_eq!(controller.generation(), 1);
    assert!(controller.is_running());
    assert_eq!(
        controller.step_interval_ms(),
        SimulationConfig::DEFAULT_STEP_INTERVAL_MS
    );
}

#[test]
fn test_session() {
    let mut controller = SimulationController::with_grid(Grid::new(20, 20).unwrap());
    controller.paint(2, 2, &HEART, true).unwrap();
    assert_eq!(controller.population(), HEART.cells.len());

    controller.toggle_run();
    for _ in 0..5 {
        controller.tick();
    }
    controller.toggle_run();
    assert_eq!(controller.generation(), 5);
    assert!(!controller.tick());

    controller.resize_grid(30, 10).unwrap();
    assert_eq!(controller.generation(), 0);
    assert_eq!(controller.grid().width(), 30);
    assert_eq!(controller.trail().levels().len(), 300);

    controller.toggle_wrap();
    assert_eq!(controller.topology(), Topology::Torus);
    controller.randomize(Some(7)).unwrap();
    assert_eq!(controller.topology(), Topology::Torus);
    assert_eq!(controller.grid().width(), 30);

    controller.reset();
    assert_eq!(controller.population(), 0);
    assert_eq!(controller.run_state(), RunState::Stopped);
}

#[test]
fn test_random_start() {
    let config = SimulationConfig {
        width: 16,
        height: 8,
        random: true,
        seed: Some(3),
        ..Default::default()
    };
    let a = SimulationController::new(&config).unwrap();
    let b = SimulationController::new(&config).unwrap();
    assert_eq!(a.grid(), b.grid());
    assert!(a.population() > 0);
}
