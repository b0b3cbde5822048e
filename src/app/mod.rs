//! Digitizer window.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`update`]      | Per-frame [`eframe::App`] entry point and status bar |
//! | [`figure_view`] | Figure plot, click dispatch and marker overlays |
//! | [`prompts`]     | Side panel with the calibration text prompts |
//! | [`run`]         | Top-level [`run_digitizer()`] entry point |

mod figure_view;
mod prompts;
mod run;
mod update;

pub use run::{digitize, run_digitizer};

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use eframe::egui;
use tracing::{error, info};

use crate::config::DigitizerConfig;
use crate::error::DigitizeError;
use crate::figure::FigureImage;
use crate::session::{ClickEvent, ClickOutcome, ClickRole, Session};
use crate::transform::WindowExtent;

/// Slot through which a fatal session error leaves the event loop.
pub(crate) type FatalSlot = Rc<RefCell<Option<DigitizeError>>>;

/// A marker drawn over the figure for an accepted click.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Mark {
    pub role: ClickRole,
    pub pixel: [f64; 2],
    /// Data-space value, for data points only.
    pub value: Option<[f64; 2]>,
}

/// The eframe application: one figure, one session.
pub struct DigitizerApp {
    pub(crate) session: Session,
    pub(crate) figure: FigureImage,
    pub(crate) texture: Option<egui::TextureHandle>,
    pub(crate) config: DigitizerConfig,

    // ── Prompt state ─────────────────────────────────────────────────────────
    pub(crate) x_input: String,
    pub(crate) y_input: String,
    pub(crate) corners_acknowledged: bool,
    pub(crate) extent: Option<WindowExtent>,

    // ── Feedback ─────────────────────────────────────────────────────────────
    pub(crate) marks: Vec<Mark>,
    /// Last readout shown in the status bar.
    pub(crate) status: String,
    /// Pointer position over the figure in pixel space, refreshed every frame.
    pub(crate) hover: Option<[f64; 2]>,

    pub(crate) fatal: FatalSlot,
    /// Set once the output file has been written.
    pub(crate) saved: Rc<Cell<bool>>,
    closing: bool,
}

impl DigitizerApp {
    pub fn new(figure: FigureImage, session: Session, config: DigitizerConfig) -> Self {
        Self {
            session,
            figure,
            texture: None,
            config,
            x_input: String::new(),
            y_input: String::new(),
            corners_acknowledged: false,
            extent: None,
            marks: Vec::new(),
            status: String::new(),
            hover: None,
            fatal: Rc::new(RefCell::new(None)),
            saved: Rc::new(Cell::new(false)),
            closing: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Upload the figure texture on first use.
    pub(crate) fn ensure_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        let figure = &self.figure;
        self.texture
            .get_or_insert_with(|| {
                ctx.load_texture("figure", figure.color_image(), egui::TextureOptions::LINEAR)
            })
            .id()
    }

    /// Feed one click into the session and record the feedback it produces.
    pub(crate) fn dispatch(&mut self, ctx: &egui::Context, event: ClickEvent) {
        if self.closing {
            return;
        }
        match self.session.handle_click(event) {
            Ok(ClickOutcome::Calibration { role, pixel }) => {
                self.marks.push(Mark {
                    role,
                    pixel,
                    value: None,
                });
                self.status = format!("< mark > {role:?} at ({:.1}, {:.1})", pixel[0], pixel[1]);
            }
            Ok(ClickOutcome::DataPoint { pixel, value, .. }) => {
                self.marks.push(Mark {
                    role: ClickRole::DataPoint,
                    pixel,
                    value: Some(value),
                });
                self.status = format!("Mark [{:.6},{:.6}]", value[0], value[1]);
            }
            Ok(ClickOutcome::Saved { path, records }) => {
                self.saved.set(true);
                self.status = format!(
                    "Saved {} points to {}. Close the window to exit.",
                    records.len(),
                    path.display()
                );
            }
            Err(e) => self.fail(ctx, e),
        }
        ctx.request_repaint();
    }

    /// Answer the corner prompt.
    pub(crate) fn acknowledge_corners(&mut self, ctx: &egui::Context) {
        match self.session.acknowledge_corners() {
            Ok(Some(extent)) => {
                self.status = format!("Plot window: {extent}");
                self.extent = Some(extent);
                self.corners_acknowledged = true;
            }
            Ok(None) => {
                self.status = "Plot window extent unavailable: degenerate axis anchors".to_string();
                self.corners_acknowledged = true;
            }
            Err(e) => self.fail(ctx, e),
        }
    }

    /// End the session on an unrecoverable error.
    pub(crate) fn fail(&mut self, ctx: &egui::Context, err: DigitizeError) {
        error!(%err, "session aborted");
        self.status = err.to_string();
        self.fatal.borrow_mut().get_or_insert(err);
        if !self.closing {
            info!("closing window");
            self.closing = true;
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
