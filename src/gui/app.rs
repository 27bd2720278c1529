use super::{Config, Palette};
use crate::{FpsLimiter, Shape, SimulationController, TickTimer, SHAPES};
use eframe::egui::{
    CentralPanel, Context, Frame, Key, Margin, Pos2, Rect, SidePanel, Vec2, ViewportCommand,
};
use std::time::Instant;
use tracing::warn;

const KEYS: [Key; 8] = [
    Key::Space,
    Key::S,
    Key::C,
    Key::R,
    Key::W,
    Key::G,
    Key::T,
    Key::Escape,
];

/// Renderer and input source of the playground.
///
/// Everything the user does is forwarded to the [`SimulationController`];
/// the app itself only keeps presentation state.
pub struct App {
    pub(super) controller: SimulationController, // Owner of the field and run state.
    pub(super) tick_timer: TickTimer,            // Fires controller ticks at its interval.
    pub(super) fps_limiter: FpsLimiter,          // Limits the redraw rate.
    pub(super) palette: Palette,
    pub(super) cell_size: f32, // Side of a cell in points.
    pub(super) show_grid_lines: bool,
    pub(super) shape_index: usize, // Index into `SHAPES` of the drawing tool.
    pub(super) hovered_cell: Option<(i64, i64)>,
    pub(super) last_painted: Option<(i64, i64)>, // Cell handled by the current drag.
    pub(super) help_open: bool,
}

impl App {
    pub fn new(controller: SimulationController, cell_size: f32) -> Self {
        Self {
            controller,
            tick_timer: TickTimer::new(),
            fps_limiter: FpsLimiter::default(),
            palette: Palette::random(),
            cell_size: cell_size.clamp(Config::MIN_CELL_SIZE, Config::MAX_CELL_SIZE),
            show_grid_lines: false,
            shape_index: 0,
            hovered_cell: None,
            last_painted: None,
            help_open: false,
        }
    }

    pub(super) fn shape(&self) -> Shape {
        SHAPES[self.shape_index]
    }

    pub(super) fn randomize(&mut self) {
        if let Err(err) = self.controller.randomize(None) {
            warn!(%err, "failed to randomize the field");
        }
    }

    /// Resizes the field so that it fills `available` points.
    pub(super) fn fit_grid_to_canvas(&mut self, available: Vec2) {
        let cols = ((available.x / self.cell_size).floor() as usize).max(1);
        let rows = ((available.y / self.cell_size).floor() as usize).max(1);
        let grid = self.controller.grid();
        if (cols, rows) == (grid.width(), grid.height()) {
            return;
        }
        if let Err(err) = self.controller.resize_grid(cols, rows) {
            warn!(%err, "failed to fit the field into the canvas");
        }
    }

    /// Cell under `pos`, if it lies on the field drawn in `rect`.
    pub(super) fn cell_at(&self, rect: Rect, pos: Pos2) -> Option<(i64, i64)> {
        if !rect.contains(pos) {
            return None;
        }
        let p = (pos - rect.min) / self.cell_size;
        let (x, y) = (p.x.floor() as i64, p.y.floor() as i64);
        let grid = self.controller.grid();
        ((0..grid.width() as i64).contains(&x) && (0..grid.height() as i64).contains(&y))
            .then_some((x, y))
    }

    /// Applies the drawing tool to the hovered cell.
    pub(super) fn handle_pointer(&mut self, ctx: &Context, rect: Rect, over_field: bool) {
        let (pos, scroll, primary_pressed, primary_down, secondary_down) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.raw_scroll_delta.y,
                input.pointer.primary_pressed(),
                input.pointer.primary_down(),
                input.pointer.secondary_down(),
            )
        });
        self.hovered_cell = pos
            .filter(|_| over_field)
            .and_then(|pos| self.cell_at(rect, pos));
        let Some((x, y)) = self.hovered_cell else {
            self.last_painted = None;
            return;
        };

        if scroll != 0. {
            let delta = if scroll > 0. { 1 } else { -1 };
            self.shape_index = Shape::cycle(self.shape_index, delta);
        }

        if !primary_down && !secondary_down {
            self.last_painted = None;
            return;
        }
        if self.last_painted == Some((x, y)) {
            return;
        }
        self.last_painted = Some((x, y));

        let shape = self.shape();
        let result = if primary_pressed && shape.is_single_cell() {
            self.controller.edit_cell(x, y).map(|_| 1)
        } else {
            self.controller.paint(x, y, &shape, primary_down)
        };
        if let Err(err) = result {
            warn!(%err, "rejected cell edit");
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let pressed = ctx.input(|input| {
            KEYS.iter()
                .copied()
                .filter(|&key| input.key_pressed(key))
                .collect::<Vec<_>>()
        });
        for key in pressed {
            match key {
                Key::Space => self.controller.toggle_run(),
                Key::S => {
                    self.controller.step_once();
                }
                Key::C => self.controller.reset(),
                Key::R => self.randomize(),
                Key::W => self.controller.toggle_wrap(),
                Key::G => self.show_grid_lines = !self.show_grid_lines,
                Key::T => self.controller.toggle_trace(),
                Key::Escape => ctx.send_viewport_cmd(ViewportCommand::Close),
                _ => {}
            }
        }
    }

    fn update_simulation(&mut self) {
        if !self.controller.is_running() {
            self.tick_timer.disarm();
            return;
        }
        if self
            .tick_timer
            .poll(Instant::now(), self.controller.step_interval())
        {
            self.controller.tick();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        SidePanel::right("controls")
            .resizable(false)
            .exact_width(Config::CONTROL_PANEL_WIDTH)
            .show(ctx, |ui| {
                self.draw_controls(ui);
            });

        CentralPanel::default()
            .frame(
                Frame::default()
                    .inner_margin(Margin::same(Config::FRAME_MARGIN))
                    .fill(self.palette.background()),
            )
            .show(ctx, |ui| {
                self.draw_field(ui);
            });

        self.draw_help(ctx);

        self.update_simulation();

        ctx.request_repaint();
        self.fps_limiter.sleep(Config::MAX_FPS);
    }
}
