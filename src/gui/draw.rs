use super::{palette::adjust_brightness, App, Config};
use crate::{affected_cells, population_summary, NiceInt, Topology, SHAPES};
use eframe::egui::{
    self, pos2, vec2, Button, Checkbox, ComboBox, Context, Rect, RichText, Sense, Slider, Stroke,
    Ui, ViewportCommand, Window,
};

const KEYBINDS: [(&str, &str); 10] = [
    ("Space", "play / pause"),
    ("S", "single step"),
    ("C", "clear the field"),
    ("R", "random field"),
    ("W", "toggle edge wrapping"),
    ("G", "toggle grid lines"),
    ("T", "toggle trace"),
    ("Mouse wheel", "next / previous shape"),
    ("LMB / RMB", "create / remove cells"),
    ("Esc", "exit"),
];

impl App {
    fn new_text(text: &str) -> RichText {
        RichText::new(text).size(Config::TEXT_SIZE)
    }

    fn new_hint(text: &str) -> RichText {
        Self::new_text(text).color(Config::HINT_COLOR)
    }

    fn draw_simulation_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let text = if self.controller.is_running() {
                "Pause"
            } else {
                "Play"
            };
            if ui.add(Button::new(Self::new_text(text))).clicked() {
                self.controller.toggle_run();
            }
            if ui.add(Button::new(Self::new_text("Step"))).clicked() {
                self.controller.step_once();
            }
            if ui.add(Button::new(Self::new_text("Clear"))).clicked() {
                self.controller.reset();
            }
            if ui.add(Button::new(Self::new_text("Randomize"))).clicked() {
                self.randomize();
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Speed: "));
            let mut fps = self.controller.target_fps();
            let response = ui.add(
                Slider::new(
                    &mut fps,
                    Config::MIN_STEPS_PER_SECOND..=Config::MAX_STEPS_PER_SECOND,
                )
                .suffix(" steps/s"),
            );
            if response.changed() {
                if let Err(err) = self.controller.set_target_fps(fps) {
                    tracing::warn!(%err, "rejected speed change");
                }
            }
        });

        let mut wrap = self.controller.topology().is_wrapping();
        if ui
            .add(Checkbox::new(&mut wrap, Self::new_text("Edge wrapping")))
            .changed()
        {
            self.controller.set_topology(if wrap {
                Topology::Torus
            } else {
                Topology::Bounded
            });
        }
    }

    fn draw_appearance_controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(Self::new_text("Live: "));
            let mut live = self.palette.live();
            if ui.color_edit_button_srgba(&mut live).changed() {
                self.palette.set_live(live);
            }
            ui.label(Self::new_text("Dead: "));
            let mut dead = self.palette.dead();
            if ui.color_edit_button_srgba(&mut dead).changed() {
                self.palette.set_dead(dead);
            }
        });

        ui.horizontal(|ui| {
            ui.add(Checkbox::new(
                &mut self.show_grid_lines,
                Self::new_text("Grid"),
            ));
            let mut trace = self.controller.trace_enabled();
            if ui
                .add(Checkbox::new(&mut trace, Self::new_text("Trace")))
                .changed()
            {
                self.controller.set_trace(trace);
            }
        });

        ui.horizontal(|ui| {
            ui.label(Self::new_text("Cell size: "));
            ui.add(Slider::new(
                &mut self.cell_size,
                Config::MIN_CELL_SIZE..=Config::MAX_CELL_SIZE,
            ));
        });
    }

    fn draw_tool_controls(&mut self, ui: &mut Ui) {
        ComboBox::from_label(Self::new_text("Shape"))
            .selected_text(self.shape().name)
            .show_ui(ui, |ui| {
                for (i, shape) in SHAPES.iter().enumerate() {
                    ui.selectable_value(&mut self.shape_index, i, shape.name);
                }
            });
        ui.label(Self::new_hint("LMB: create cells\nRMB: remove cells"));
    }

    fn draw_stats(&mut self, ui: &mut Ui) {
        let grid = self.controller.grid();
        ui.label(Self::new_text(&format!(
            "Generation: {}",
            NiceInt::from(self.controller.generation())
        )));
        ui.label(Self::new_text(&format!(
            "Population: {}",
            population_summary(grid.population(), grid.area())
        )));
        ui.label(Self::new_text(&format!(
            "Field: {} x {}",
            grid.width(),
            grid.height()
        )));
        ui.label(Self::new_text(&format!(
            "Last field update: {:.3} ms",
            self.controller.last_step_duration().as_secs_f64() * 1e3
        )));
        if let Some(rate) = self.tick_timer.rate() {
            ui.label(Self::new_text(&format!("Steps/s: {:.1}", rate)));
        }
        ui.label(Self::new_text(&format!(
            "FPS: {:3}",
            self.fps_limiter.fps().round() as u32
        )));
    }

    fn draw_section(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
        ui.group(|ui| {
            // to adjust the bounds
            ui.set_min_width(ui.available_width());
            ui.label(Self::new_text(title).strong());
            add_contents(ui);
        });
    }

    pub(super) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.vertical(|ui| {
            Self::draw_section(ui, "Controls", |ui| self.draw_simulation_controls(ui));
            Self::draw_section(ui, "Appearance", |ui| self.draw_appearance_controls(ui));
            Self::draw_section(ui, "Drawing tool", |ui| self.draw_tool_controls(ui));
            Self::draw_section(ui, "Statistics", |ui| self.draw_stats(ui));

            ui.horizontal(|ui| {
                if ui.add(Button::new(Self::new_text("Help"))).clicked() {
                    self.help_open = !self.help_open;
                }
                if ui.add(Button::new(Self::new_text("Exit"))).clicked() {
                    ui.ctx().send_viewport_cmd(ViewportCommand::Close);
                }
            });
        });
    }

    pub(super) fn draw_field(&mut self, ui: &mut Ui) {
        self.fit_grid_to_canvas(ui.available_size());

        let grid = self.controller.grid();
        let (width, height) = (grid.width(), grid.height());
        let size = vec2(width as f32, height as f32) * self.cell_size;
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());
        self.handle_pointer(ui.ctx(), rect, response.contains_pointer());

        let cell_rect = |x: usize, y: usize| {
            let min = rect.min + vec2(x as f32, y as f32) * self.cell_size;
            Rect::from_min_size(min, vec2(self.cell_size, self.cell_size))
        };

        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0., self.palette.dead());

        let trail = self.controller.trail();
        for (i, &level) in trail.levels().iter().enumerate() {
            if level > 0 {
                painter.rect_filled(cell_rect(i % width, i / width), 0., self.palette.level(level));
            }
        }

        if let Some((x, y)) = self.hovered_cell {
            let shape = self.shape();
            for (cx, cy) in affected_cells(self.controller.grid(), x, y, &shape) {
                let color = self.palette.level(trail.level(cx, cy));
                painter.rect_filled(
                    cell_rect(cx, cy),
                    0.,
                    adjust_brightness(color, Config::HIGHLIGHT_COLOR_ADJUST),
                );
            }
        }

        if self.show_grid_lines {
            let stroke = Stroke::new(Config::GRID_LINE_WIDTH, self.palette.grid_line());
            for x in 1..width {
                let px = rect.min.x + x as f32 * self.cell_size;
                painter.line_segment([pos2(px, rect.min.y), pos2(px, rect.max.y)], stroke);
            }
            for y in 1..height {
                let py = rect.min.y + y as f32 * self.cell_size;
                painter.line_segment([pos2(rect.min.x, py), pos2(rect.max.x, py)], stroke);
            }
        }
    }

    pub(super) fn draw_help(&mut self, ctx: &Context) {
        Window::new("Help")
            .open(&mut self.help_open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(Self::new_text(
                    "A live cell with 2 or 3 live neighbors survives.\n\
                     A dead cell with exactly 3 live neighbors becomes alive.\n\
                     Every other cell dies or stays dead.",
                ));
                ui.separator();
                egui::Grid::new("keybinds").striped(true).show(ui, |ui| {
                    for (key, action) in KEYBINDS {
                        ui.label(Self::new_text(key).strong());
                        ui.label(Self::new_text(action));
                        ui.end_row();
                    }
                });
            });
    }
}
