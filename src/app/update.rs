//! Per-frame update for [`DigitizerApp`].
//!
//! Layout: status bar at the bottom, calibration prompts on the left, the
//! figure in the central panel.

use eframe::egui;

use super::DigitizerApp;

impl eframe::App for DigitizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(self.hover_readout());
                });
            });
        });

        egui::SidePanel::left("prompts")
            .resizable(true)
            .default_width(280.0)
            .show(ctx, |ui| self.render_prompts(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.render_figure(ui));
    }
}

impl DigitizerApp {
    /// Pixel position under the pointer and, once calibrated, its data value.
    fn hover_readout(&self) -> String {
        let Some(p) = self.hover else {
            return String::new();
        };
        let mut txt = format!("px ({:.1}, {:.1})", p[0], p[1]);
        if let Some(Ok([x, y])) = self.session.calibration().map(|c| c.to_data(p)) {
            txt.push_str(&format!("  data ({x:.6}, {y:.6})"));
        }
        txt
    }
}
