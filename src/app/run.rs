//! Top-level entry points for running the digitizer as a native window.

use std::path::Path;

use eframe::egui;
use tracing::{info, warn};

use crate::config::DigitizerConfig;
use crate::error::{DigitizeError, Result};
use crate::figure::FigureImage;
use crate::prompt::{X_AXIS_PROMPT, Y_AXIS_PROMPT};
use crate::session::Session;

use super::DigitizerApp;

/// Digitize `figure_file` into `output_file` with the default configuration.
pub fn digitize<P: AsRef<Path>, Q: AsRef<Path>>(figure_file: P, output_file: Q) -> Result<()> {
    run_digitizer(figure_file, output_file, DigitizerConfig::default())
}

/// Open `figure_file` in a native window and run one digitizing session.
///
/// Blocks until the window is closed. A fatal session error (bad calibration
/// text, degenerate axis, premature outside click, write failure) closes the
/// window and is returned here. Closing the window before the outside click
/// writes nothing.
pub fn run_digitizer<P: AsRef<Path>, Q: AsRef<Path>>(
    figure_file: P,
    output_file: Q,
    mut cfg: DigitizerConfig,
) -> Result<()> {
    let figure = FigureImage::open(figure_file.as_ref())?;
    let session = Session::new(output_file.as_ref()).with_precision(cfg.precision);
    info!(
        figure = %figure_file.as_ref().display(),
        output = %output_file.as_ref().display(),
        "starting session"
    );
    info!("{X_AXIS_PROMPT}");
    info!("{Y_AXIS_PROMPT}");

    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);
    if opts.viewport.inner_size.is_none() {
        let [w, h] = cfg.window_size;
        opts.viewport = opts.viewport.clone().with_inner_size(egui::vec2(w, h));
    }

    let title = cfg.title.clone();
    let app = DigitizerApp::new(figure, session, cfg);
    let fatal = app.fatal.clone();
    let saved = app.saved.clone();

    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|e| DigitizeError::Gui(e.to_string()))?;

    if let Some(err) = fatal.borrow_mut().take() {
        return Err(err);
    }
    if !saved.get() {
        warn!("window closed before the outside click; no output written");
    }
    Ok(())
}
