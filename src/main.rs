use eframe::egui;
use egui::{Color32, Pos2, Stroke};

mod tree;

use tree::TreeParams;

struct TreeApp {
    params: TreeParams,
    show_controls: bool,
}

impl Default for TreeApp {
    fn default() -> Self {
        Self {
            params: TreeParams {
                size: 200.0,
                depth: 8,
                x_offset: 0.0,
                y_offset: 0.0,
            },
            show_controls: true,
        }
    }
}

impl eframe::App for TreeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.show_controls {
            egui::TopBottomPanel::top("controls").show(ctx, |ui| {
                let mut changed = false;

                ui.horizontal(|ui| {
                    ui.label(format!("Rectangle Size: {:.0}", self.params.size));
                    changed |= ui
                        .add(egui::Slider::new(&mut self.params.size, 1.0..=400.0))
                        .changed();

                    ui.separator();

                    ui.label(format!("Rectangle Amount: {}", self.params.depth));
                    changed |= ui
                        .add(egui::Slider::new(&mut self.params.depth, 0..=14))
                        .changed();
                });

                ui.horizontal(|ui| {
                    ui.label(format!("X-Offset: {:.0}", self.params.x_offset));
                    changed |= ui
                        .add(egui::Slider::new(&mut self.params.x_offset, -200.0..=200.0))
                        .changed();

                    ui.separator();

                    ui.label(format!("Y-Offset: {:.0}", self.params.y_offset));
                    changed |= ui
                        .add(egui::Slider::new(&mut self.params.y_offset, -200.0..=200.0))
                        .changed();

                    ui.separator();

                    if ui.button("Hide Controls").clicked() {
                        self.show_controls = false;
                    }
                });

                if changed {
                    log::debug!("parameters changed: {:?}", self.params);
                }
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.show_controls {
                if ui.button("Show Controls").clicked() {
                    self.show_controls = true;
                }
            }

            // Surface dimensions are read fresh every frame so container
            // resizes take effect immediately.
            let available_rect = ui.available_rect_before_wrap();
            let painter = ui.painter();

            painter.rect_filled(
                available_rect,
                egui::Rounding::ZERO,
                Color32::from_rgb(10, 10, 30),
            );

            let segments = tree::render(
                &self.params,
                available_rect.width(),
                available_rect.height(),
            );

            // The tree is built in surface-local coordinates.
            let origin = available_rect.min.to_vec2();
            let stroke = Stroke::new(1.0, Color32::LIGHT_GREEN);
            for &(p1, p2) in &segments {
                painter.line_segment([p1.to_pos2() + origin, p2.to_pos2() + origin], stroke);
            }

            let info = format!(
                "Size: {:.0} | Amount: {} | X-Offset: {:.0} | Y-Offset: {:.0} | Rectangles: {}",
                self.params.size,
                self.params.depth,
                self.params.x_offset,
                self.params.y_offset,
                segments.len() / 4
            );
            painter.text(
                Pos2::new(available_rect.left() + 10.0, available_rect.bottom() - 20.0),
                egui::Align2::LEFT_BOTTOM,
                info,
                egui::FontId::default(),
                Color32::WHITE,
            );
        });

        ctx.request_repaint();
    }
}

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 1024.0])
            .with_title("Pythagoras Tree"),
        ..Default::default()
    };

    eframe::run_native(
        "Pythagoras Tree",
        options,
        Box::new(|_cc| Ok(Box::new(TreeApp::default()))),
    )
}
