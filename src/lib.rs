//! FigData crate root: re-exports and module wiring.
//!
//! Digitize data from a raster image of a published plot. Six calibration
//! clicks (two x-axis ticks, two y-axis ticks, the plot-window corners) and
//! two typed axis ranges define a linear pixel-to-data mapping; every later
//! click is a data point. A click outside the image writes the points to a
//! text file.
//!
//! - `transform`: per-axis linear mapping and the plot-window rectangle
//! - `session`: session state and the click interpreter
//! - `save`: output records and file writing
//! - `figure`: image loading
//! - `replay`: headless sessions from a click script
//! - `app`: the egui/eframe window

pub mod app;
pub mod config;
pub mod error;
pub mod figure;
pub mod prompt;
pub mod replay;
pub mod save;
pub mod session;
pub mod transform;

// Public re-exports for a compact external API
pub use app::{digitize, run_digitizer, DigitizerApp};
pub use config::{DigitizerConfig, MarkerStyle};
pub use error::{DigitizeError, Result};
pub use figure::FigureImage;
pub use save::{OutputRecord, DEFAULT_PRECISION};
pub use session::{ClickEvent, ClickOutcome, ClickRole, Session, Stage};
pub use transform::{Axis, AxisCalibration, Calibration, PlotWindow, WindowExtent};
