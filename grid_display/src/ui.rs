// ui.rs - Paints the rendered cells and the Step control

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use life_grid::CellClass;

use crate::{GridApp, MOUNT_ID};

impl eframe::App for GridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Life Grid");

            // Controls
            ui.horizontal(|ui| {
                if ui.button("Step").clicked() {
                    self.on_step();
                }
            });

            ui.separator();

            ui.push_id(egui::Id::new(MOUNT_ID), |ui| self.paint_cells(ui));

            ui.separator();

            // Statistics
            let total = self.grid().width() * self.grid().height();
            let live_cells = self.grid().live_cells();
            ui.horizontal(|ui| {
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
            });
        });
    }
}

impl GridApp {
    fn paint_cells(&self, ui: &mut egui::Ui) {
        let visuals = self.visuals();
        let cell_px = visuals.iter().next().map_or(0.0, |v| v.size as f32);
        let total_size = Vec2::new(
            visuals.width() as f32 * cell_px,
            visuals.height() as f32 * cell_px,
        );

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());
        let start_pos = response.rect.min;

        // Fill background
        painter.rect_filled(Rect::from_min_size(start_pos, total_size), 0.0, Color32::BLACK);

        for visual in visuals.iter() {
            let rect = Rect::from_min_size(
                start_pos + Vec2::new(visual.left as f32, visual.top as f32),
                Vec2::splat(visual.size as f32),
            );

            let cell_color = match visual.class {
                CellClass::Alive => self.live_color,
                CellClass::Dead  => self.dead_color,
            };

            painter.rect_filled(rect, 0.0, cell_color);
            painter.rect_stroke(rect, 0.0, Stroke::new(0.2, Color32::from_gray(60)));
        }
    }
}
