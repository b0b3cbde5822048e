//! Central figure plot: image, click dispatch and marker overlays.

use eframe::egui;
use egui_plot::{Line, MarkerShape, Plot, PlotImage, PlotPoint, PlotUi, Points, Text};

use crate::config::{color, MarkerStyle};
use crate::session::{ClickRole, Stage};

use super::{DigitizerApp, Mark};

/// Border around the image, as a fraction of its size, where a click counts as outside.
const BORDER_FRACTION: f64 = 0.04;

impl DigitizerApp {
    pub(crate) fn render_figure(&mut self, ui: &mut egui::Ui) {
        let texture = self.ensure_texture(ui.ctx());
        let [w, h] = self.figure.size();
        let (bx, by) = (w * BORDER_FRACTION, h * BORDER_FRACTION);
        let marks = &self.marks;
        let style = &self.config.markers;
        let window = self.session.plot_window();

        let plot_resp = Plot::new("figure")
            .data_aspect(1.0)
            .show_grid(false)
            .show_axes(false)
            .show_x(false)
            .show_y(false)
            .allow_double_click_reset(true)
            .include_x(-bx)
            .include_x(w + bx)
            .include_y(-by)
            .include_y(h + by)
            .show(ui, |plot_ui| {
                plot_ui.image(PlotImage::new(
                    "figure",
                    texture,
                    PlotPoint::new(w / 2.0, h / 2.0),
                    egui::vec2(w as f32, h as f32),
                ));
                if let Some(window) = window {
                    let [x0, y0] = window.lower_left;
                    let [x1, y1] = window.upper_right;
                    plot_ui.line(
                        Line::new(
                            "plot window",
                            vec![[x0, y0], [x1, y0], [x1, y1], [x0, y1], [x0, y0]],
                        )
                        .color(color(style.corner_rgba))
                        .width(1.0),
                    );
                }
                draw_marks(plot_ui, marks, style);
                plot_ui.pointer_coordinate()
            });

        self.hover = plot_resp
            .inner
            .map(|p| [p.x, p.y])
            .filter(|&p| self.figure.contains(p));

        if self.session.stage() == Stage::Saved {
            return;
        }
        let resp = &plot_resp.response;
        if resp.clicked_by(egui::PointerButton::Primary) {
            if let Some(pos) = resp.interact_pointer_pos() {
                let p = plot_resp.transform.value_from_position(pos);
                let event = self.figure.classify([p.x, p.y]);
                self.dispatch(ui.ctx(), event);
            }
        }
    }
}

fn draw_marks(plot_ui: &mut PlotUi, marks: &[Mark], style: &MarkerStyle) {
    for mark in marks {
        match mark.role {
            ClickRole::DataPoint => {
                plot_ui.points(
                    Points::new("halo", vec![mark.pixel])
                        .radius(style.radius * 2.0)
                        .shape(MarkerShape::Circle)
                        .color(color(style.halo_rgba)),
                );
                plot_ui.points(
                    Points::new("data", vec![mark.pixel])
                        .radius(style.radius)
                        .shape(MarkerShape::Circle)
                        .color(color(style.data_rgba)),
                );
                if let (true, Some([x, y])) = (style.show_values, mark.value) {
                    plot_ui.text(
                        Text::new(
                            "value",
                            PlotPoint::new(mark.pixel[0], mark.pixel[1]),
                            format!("  ({x:.3}, {y:.3})"),
                        )
                        .anchor(egui::Align2::LEFT_CENTER)
                        .color(color(style.data_rgba)),
                    );
                }
            }
            ClickRole::XAnchor(_) | ClickRole::YAnchor(_) => {
                plot_ui.points(
                    Points::new("axis anchor", vec![mark.pixel])
                        .radius(style.radius * 1.5)
                        .shape(MarkerShape::Cross)
                        .color(color(style.axis_rgba)),
                );
            }
            ClickRole::LowerLeft | ClickRole::UpperRight => {
                plot_ui.points(
                    Points::new("corner", vec![mark.pixel])
                        .radius(style.radius * 1.5)
                        .shape(MarkerShape::Square)
                        .color(color(style.corner_rgba)),
                );
            }
        }
    }
}
