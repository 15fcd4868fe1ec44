// ui.rs - egui front end for the letter grid
// Drains pending animation ticks each frame, draws the tiles and forwards clicks

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

use crate::app::{LetterGridApp, LetterGridInterface};
use crate::grid::{CELL_COUNT, GRID_WIDTH};

const BOX_SIZE: f32 = 52.0;
const SPACING: f32 = 8.0;

/// Maps a point inside the grid area to the tile under it; gaps map to None.
fn cell_at(offset: Vec2) -> Option<usize> {
    if offset.x < 0.0 || offset.y < 0.0 {
        return None;
    }
    let pitch = BOX_SIZE + SPACING;
    let (col, row) = ((offset.x / pitch) as usize, (offset.y / pitch) as usize);
    let inside_box = offset.x % pitch < BOX_SIZE && offset.y % pitch < BOX_SIZE;

    (col < GRID_WIDTH && row < GRID_WIDTH && inside_box).then_some(row * GRID_WIDTH + col)
}

impl eframe::App for LetterGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_pending_ticks();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading("Interactive Letter Grid");
                ui.label("Watch the letters dance between light and shadow");
            });

            ui.separator();

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_animating() { "Pause Animation" } else { "Start Animation" };
                if ui.button(button_text).clicked() {
                    self.toggle_animation();
                }

                if ui.button("New Letters").clicked() {
                    self.reset_grid();
                }

                ui.separator();

                ui.label("Lit:");
                ui.color_edit_button_srgba(&mut self.lit_color);
                ui.label("Unlit:");
                ui.color_edit_button_srgba(&mut self.unlit_color);
            });

            ui.separator();

            // Draw the grid
            let start_pos = ui.cursor().min;
            let total_size = Vec2::splat((BOX_SIZE + SPACING) * GRID_WIDTH as f32 - SPACING);

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());

            for cell in self.grid().cells() {
                let x = start_pos.x + cell.col() as f32 * (BOX_SIZE + SPACING);
                let y = start_pos.y + cell.row() as f32 * (BOX_SIZE + SPACING);
                let rect = Rect::from_min_size(Pos2::new(x, y), Vec2::splat(BOX_SIZE));

                let (fill, text_color, border) = if cell.is_lit() {
                    (self.lit_color, Color32::WHITE, Color32::from_rgb(96, 165, 250))
                } else {
                    (self.unlit_color, Color32::from_rgb(71, 85, 105), Color32::from_rgb(148, 163, 184))
                };

                painter.rect_filled(rect, 10.0, fill);
                painter.rect_stroke(rect, 10.0, Stroke::new(2.0, border));
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    cell.letter(),
                    FontId::proportional(20.0),
                    text_color,
                );
            }

            if response.clicked() {
                if let Some(id) = response.interact_pointer_pos().and_then(|pos| cell_at(pos - start_pos)) {
                    self.toggle_cell(id);
                }
            }

            ui.separator();

            // Status
            ui.vertical_centered(|ui| {
                ui.label(if self.is_animating() { "Animation running..." } else { "Animation paused" });
                ui.small("Click any square to toggle manually");
            });

            let lit = self.grid().lit_count();
            let timing = self.driver().timing();
            ui.horizontal(|ui| {
                ui.label(format!("Lit: {}", lit));
                ui.label(format!("Unlit: {}", CELL_COUNT - lit));
                ui.label(format!("Ticks: {}", self.ticks_applied));
                ui.label(format!(
                    "Delay: {}-{} ms",
                    timing.min_delay.as_millis(),
                    (timing.min_delay + timing.delay_spread).as_millis()
                ));
            });
        });
    }
}
