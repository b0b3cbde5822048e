//! Side panel holding the three calibration prompts and the point list.

use eframe::egui;

use crate::prompt::{CORNERS_PROMPT, X_AXIS_PROMPT, Y_AXIS_PROMPT};
use crate::session::Stage;
use crate::transform::Axis;

use super::DigitizerApp;

impl DigitizerApp {
    pub(crate) fn render_prompts(&mut self, ui: &mut egui::Ui) {
        let stage = self.session.stage();
        ui.heading("Calibration");
        ui.label(egui::RichText::new(stage.instruction()).strong());
        ui.separator();

        let mut submitted = self.axis_prompt(ui, Axis::X);
        ui.add_space(6.0);
        submitted |= self.axis_prompt(ui, Axis::Y);
        ui.separator();

        ui.label(CORNERS_PROMPT);
        if let Some(extent) = &self.extent {
            ui.monospace(format!("Plot window: {extent}"));
        } else if self.corners_acknowledged {
            ui.monospace("Plot window: unavailable");
        } else {
            let ready = stage == Stage::CollectingData
                && self.session.x_range().is_some()
                && self.session.y_range().is_some();
            let pressed = ui
                .add_enabled(ready, egui::Button::new("Corners marked"))
                .clicked()
                || (ready && !submitted && ui.input(|i| i.key_pressed(egui::Key::Enter)));
            if pressed {
                self.acknowledge_corners(ui.ctx());
            }
        }
        ui.separator();

        self.point_list(ui);
    }

    /// Returns `true` when the prompt was answered this frame.
    fn axis_prompt(&mut self, ui: &mut egui::Ui, axis: Axis) -> bool {
        let (prompt, current) = match axis {
            Axis::X => (X_AXIS_PROMPT, self.session.x_range()),
            Axis::Y => (Y_AXIS_PROMPT, self.session.y_range()),
        };
        ui.label(prompt);
        if let Some([a, b]) = current {
            ui.monospace(format!("{axis}: {a}, {b}"));
            return false;
        }
        let mut submit = false;
        ui.horizontal(|ui| {
            let buf = match axis {
                Axis::X => &mut self.x_input,
                Axis::Y => &mut self.y_input,
            };
            let resp = ui.add(
                egui::TextEdit::singleline(buf)
                    .hint_text("0,1")
                    .desired_width(120.0),
            );
            submit = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            submit |= ui.button("Set").clicked();
        });
        if !submit {
            return false;
        }
        let result = match axis {
            Axis::X => self.session.enter_x_range(&self.x_input),
            Axis::Y => self.session.enter_y_range(&self.y_input),
        };
        if let Err(e) = result {
            self.fail(ui.ctx(), e);
        }
        true
    }

    fn point_list(&self, ui: &mut egui::Ui) {
        let points = self.session.data_clicks();
        ui.label(format!("Data points: {}", points.len()));
        let (Some(cal), Some(window)) = (self.session.calibration(), self.session.plot_window())
        else {
            return;
        };
        egui::ScrollArea::vertical().show(ui, |ui| {
            for (i, &pixel) in points.iter().enumerate() {
                let Ok([x, y]) = cal.to_data(pixel) else {
                    continue;
                };
                let flag = u8::from(window.contains(pixel));
                ui.monospace(format!("{:>3}  {x:.6} {y:.6} {flag}", i + 1));
            }
        });
    }
}
