use thiserror::Error;

use crate::session::Stage;
use crate::transform::Axis;

/// Errors that end a digitizing session.
#[derive(Debug, Error)]
pub enum DigitizeError {
    #[error("Invalid calibration values {input:?}: {reason}")]
    CalibrationInput { input: String, reason: String },

    #[error("Calibration values for the {axis} axis were already entered")]
    RangeAlreadySet { axis: Axis },

    #[error("Degenerate {axis} axis calibration: both anchor clicks are at the same pixel")]
    DegenerateAxis { axis: Axis },

    #[error("Calibration is not complete (stage: {stage})")]
    CalibrationIncomplete { stage: Stage },

    #[error("Session already saved; no further clicks are accepted")]
    SessionClosed,

    #[error("Click script error at line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("Display error: {0}")]
    Gui(String),
}

pub type Result<T> = std::result::Result<T, DigitizeError>;
