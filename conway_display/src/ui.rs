// ui.rs - Configuring screen, key routing and cell drawing

use eframe::egui;
use egui::{Align2, Color32, FontId, Key, Painter, Pos2, Rect, Sense, Vec2};
use std::time::Instant;

use conway::{Mode, PATTERNS};

use crate::GameOfLife;

const MENU_LEFT: f32 = 450.0;
const MENU_LINE: f32 = 20.0;

impl eframe::App for GameOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.sim.mode() {
            Mode::Configuring => self.handle_config_keys(ctx),
            Mode::Running => {
                if self.last_update.elapsed() >= self.update_interval {
                    self.sim.tick();
                    self.last_update = Instant::now();
                }
                ctx.request_repaint_after(self.update_interval);
            }
        }

        let panel = egui::Frame::none().fill(self.background);
        egui::CentralPanel::default().frame(panel).show(ctx, |ui| {
            let (canvas_width, canvas_height) = self.sim.canvas_size();
            let size = Vec2::new(canvas_width as f32, canvas_height as f32);
            let (response, painter) = ui.allocate_painter(size, Sense::hover());
            let origin = response.rect.min;

            match self.sim.mode() {
                Mode::Configuring => self.draw_menu(&painter, origin),
                Mode::Running => self.draw_cells(&painter, origin),
            }
        });
    }
}

impl GameOfLife {
    fn handle_config_keys(&mut self, ctx: &egui::Context) {
        let pressed = |key: Key| ctx.input(|i| i.key_pressed(key));

        if pressed(Key::R) {
            self.toggle_random_world();
        }
        if pressed(Key::ArrowUp) {
            self.resize_cells(1);
        }
        if pressed(Key::ArrowDown) {
            self.resize_cells(-1);
        }
        if !self.sim.random_seed() {
            if pressed(Key::ArrowRight) {
                self.cycle_pattern(1);
            }
            if pressed(Key::ArrowLeft) {
                self.cycle_pattern(-1);
            }
        }
        if pressed(Key::Enter) {
            self.sim.start();
            self.last_update = Instant::now();
            ctx.request_repaint();
        }
    }

    fn draw_menu(&self, painter: &Painter, origin: Pos2) {
        let font = FontId::monospace(13.0);
        let line = |row: f32, text: String| {
            painter.text(
                origin + Vec2::new(MENU_LEFT, 150.0 + row * MENU_LINE),
                Align2::LEFT_BOTTOM,
                text,
                font.clone(),
                Color32::WHITE,
            );
        };

        // Title
        line(0.0, "Game of Life".to_owned());
        line(0.8, "-----------------------".to_owned());

        // Options
        line(4.0, format!("Cell Size:      {}", self.sim.cell_size()));
        line(5.0, format!("Random World:   {}", self.sim.random_seed()));
        if !self.sim.random_seed() {
            line(6.0, format!("Pattern:        {}", PATTERNS[self.selected_pattern].name));
        }
        let grid = self.sim.grid();
        line(7.0, format!("Grid:           {} x {}", grid.width(), grid.height()));

        // Instructions
        line(9.0, "- Press Enter to start".to_owned());
        line(10.0, "- Press R to toggle random world".to_owned());
        line(11.0, "- Press Up/Down arrows to change cell size".to_owned());
        line(12.0, "- Press Left/Right arrows to pick a pattern".to_owned());
    }

    fn draw_cells(&self, painter: &Painter, origin: Pos2) {
        let grid = self.sim.grid();
        let side = self.sim.cell_size() as f32;

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_alive(x, y) {
                    let min = origin + Vec2::new(x as f32 * side, y as f32 * side);
                    painter.rect_filled(Rect::from_min_size(min, Vec2::splat(side)), 0.0, self.live_color);
                }
            }
        }

        let status = format!(
            "Generation: {}   Live: {}{}",
            self.sim.generation(),
            grid.live_count(),
            if self.sim.is_settled() { "   (settled)" } else { "" },
        );
        painter.text(
            origin + Vec2::new(6.0, 4.0),
            Align2::LEFT_TOP,
            status,
            FontId::monospace(12.0),
            Color32::LIGHT_GREEN,
        );
    }
}
