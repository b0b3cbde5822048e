//! Session state and the click interpreter.
//!
//! The first six accepted clicks calibrate the session: two x-axis anchors,
//! two y-axis anchors, then the lower-left and upper-right plot-window
//! corners. Every later click is a data point. A click outside the image
//! saves the data points and closes the session.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{DigitizeError, Result};
use crate::prompt::parse_axis_values;
use crate::save::{self, OutputRecord, DEFAULT_PRECISION};
use crate::transform::{Axis, Calibration, PlotWindow, WindowExtent};

/// Number of clicks consumed by calibration before data collection starts.
pub const CALIBRATION_CLICKS: usize = 6;

/// A click reported by the display surface, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickEvent {
    Inside([f64; 2]),
    /// The click landed outside the image.
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    AwaitingXCalib1,
    AwaitingXCalib2,
    AwaitingYCalib1,
    AwaitingYCalib2,
    AwaitingCorner1,
    AwaitingCorner2,
    CollectingData,
    Saved,
}

/// What an accepted click means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClickRole {
    XAnchor(usize),
    YAnchor(usize),
    LowerLeft,
    UpperRight,
    DataPoint,
}

impl Stage {
    /// The role of an in-bounds click received in this stage.
    pub fn role(self) -> Option<ClickRole> {
        match self {
            Stage::AwaitingXCalib1 => Some(ClickRole::XAnchor(0)),
            Stage::AwaitingXCalib2 => Some(ClickRole::XAnchor(1)),
            Stage::AwaitingYCalib1 => Some(ClickRole::YAnchor(0)),
            Stage::AwaitingYCalib2 => Some(ClickRole::YAnchor(1)),
            Stage::AwaitingCorner1 => Some(ClickRole::LowerLeft),
            Stage::AwaitingCorner2 => Some(ClickRole::UpperRight),
            Stage::CollectingData => Some(ClickRole::DataPoint),
            Stage::Saved => None,
        }
    }

    /// Stage after an in-bounds click.
    pub fn next(self) -> Stage {
        match self {
            Stage::AwaitingXCalib1 => Stage::AwaitingXCalib2,
            Stage::AwaitingXCalib2 => Stage::AwaitingYCalib1,
            Stage::AwaitingYCalib1 => Stage::AwaitingYCalib2,
            Stage::AwaitingYCalib2 => Stage::AwaitingCorner1,
            Stage::AwaitingCorner1 => Stage::AwaitingCorner2,
            Stage::AwaitingCorner2 => Stage::CollectingData,
            Stage::CollectingData => Stage::CollectingData,
            Stage::Saved => Stage::Saved,
        }
    }

    pub fn is_calibrating(self) -> bool {
        !matches!(self, Stage::CollectingData | Stage::Saved)
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Stage::AwaitingXCalib1 => "Click the first x-axis tick",
            Stage::AwaitingXCalib2 => "Click the second x-axis tick",
            Stage::AwaitingYCalib1 => "Click the first y-axis tick",
            Stage::AwaitingYCalib2 => "Click the second y-axis tick",
            Stage::AwaitingCorner1 => "Click the lower-left corner of the plot window",
            Stage::AwaitingCorner2 => "Click the upper-right corner of the plot window",
            Stage::CollectingData => crate::prompt::COLLECT_PROMPT,
            Stage::Saved => "Saved",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Result of feeding one click into the session.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Calibration {
        role: ClickRole,
        pixel: [f64; 2],
    },
    DataPoint {
        /// Position among the data points, starting at 0.
        index: usize,
        pixel: [f64; 2],
        value: [f64; 2],
    },
    Saved {
        path: PathBuf,
        records: Vec<OutputRecord>,
    },
}

/// All state of one digitizing session.
#[derive(Debug, Clone)]
pub struct Session {
    clicks: Vec<[f64; 2]>,
    x_range: Option<[f64; 2]>,
    y_range: Option<[f64; 2]>,
    output_path: PathBuf,
    precision: usize,
    stage: Stage,
}

impl Session {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            clicks: Vec::new(),
            x_range: None,
            y_range: None,
            output_path: output_path.into(),
            precision: DEFAULT_PRECISION,
            stage: Stage::AwaitingXCalib1,
        }
    }

    /// Decimal digits used when writing the output file.
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn clicks(&self) -> &[[f64; 2]] {
        &self.clicks
    }

    /// Clicks recorded after calibration, in click order.
    pub fn data_clicks(&self) -> &[[f64; 2]] {
        self.clicks.get(CALIBRATION_CLICKS..).unwrap_or(&[])
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn x_range(&self) -> Option<[f64; 2]> {
        self.x_range
    }

    pub fn y_range(&self) -> Option<[f64; 2]> {
        self.y_range
    }

    /// Answer the x-axis prompt with text such as `"0,1"`.
    pub fn enter_x_range(&mut self, text: &str) -> Result<[f64; 2]> {
        let values = parse_axis_values(text)?;
        Self::set_range(&mut self.x_range, Axis::X, values)?;
        info!(axis = "x", from = values[0], to = values[1], "axis values entered");
        Ok(values)
    }

    /// Answer the y-axis prompt with text such as `"0,1"`.
    pub fn enter_y_range(&mut self, text: &str) -> Result<[f64; 2]> {
        let values = parse_axis_values(text)?;
        Self::set_range(&mut self.y_range, Axis::Y, values)?;
        info!(axis = "y", from = values[0], to = values[1], "axis values entered");
        Ok(values)
    }

    fn set_range(slot: &mut Option<[f64; 2]>, axis: Axis, values: [f64; 2]) -> Result<()> {
        if slot.is_some() {
            return Err(DigitizeError::RangeAlreadySet { axis });
        }
        *slot = Some(values);
        Ok(())
    }

    /// Pixel positions of the axis anchors, once all four have been clicked.
    pub fn axis_pixels(&self) -> Option<([f64; 2], [f64; 2])> {
        if self.clicks.len() < 4 {
            return None;
        }
        let c = &self.clicks;
        Some(([c[0][0], c[1][0]], [c[2][1], c[3][1]]))
    }

    pub fn plot_window(&self) -> Option<PlotWindow> {
        if self.clicks.len() < CALIBRATION_CLICKS {
            return None;
        }
        Some(PlotWindow::new(self.clicks[4], self.clicks[5]))
    }

    /// The finished calibration: four anchor clicks plus both axis ranges.
    pub fn calibration(&self) -> Option<Calibration> {
        let (x_pixels, y_pixels) = self.axis_pixels()?;
        Some(Calibration::new(x_pixels, self.x_range?, y_pixels, self.y_range?))
    }

    fn require_calibration(&self) -> Result<(Calibration, PlotWindow)> {
        match (self.calibration(), self.plot_window()) {
            (Some(cal), Some(window)) => Ok((cal, window)),
            _ => Err(DigitizeError::CalibrationIncomplete { stage: self.stage }),
        }
    }

    /// Answer the "corners marked" prompt; reports the plot window in data units.
    ///
    /// The report is informational: a degenerate axis yields `None` here and
    /// only fails once a data point is transformed.
    pub fn acknowledge_corners(&self) -> Result<Option<WindowExtent>> {
        let (cal, window) = self.require_calibration()?;
        match cal.window_extent(&window) {
            Ok(extent) => {
                info!(%extent, "plot window");
                Ok(Some(extent))
            }
            Err(err @ DigitizeError::DegenerateAxis { .. }) => {
                warn!(%err, "plot window extent unavailable");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Interpret one click according to the current stage.
    pub fn handle_click(&mut self, event: ClickEvent) -> Result<ClickOutcome> {
        if self.stage == Stage::Saved {
            return Err(DigitizeError::SessionClosed);
        }
        match event {
            ClickEvent::Outside => self.finish(),
            ClickEvent::Inside(pixel) => {
                let role = self
                    .stage
                    .role()
                    .ok_or(DigitizeError::SessionClosed)?;
                if role == ClickRole::DataPoint {
                    return self.record_data_point(pixel);
                }
                self.clicks.push(pixel);
                self.stage = self.stage.next();
                info!(?role, x = pixel[0], y = pixel[1], "< mark >");
                Ok(ClickOutcome::Calibration { role, pixel })
            }
        }
    }

    fn record_data_point(&mut self, pixel: [f64; 2]) -> Result<ClickOutcome> {
        let (cal, _) = self.require_calibration()?;
        let value = cal.to_data(pixel)?;
        self.clicks.push(pixel);
        let index = self.clicks.len() - 1 - CALIBRATION_CLICKS;
        info!("Mark [{:.6},{:.6}]", value[0], value[1]);
        Ok(ClickOutcome::DataPoint {
            index,
            pixel,
            value,
        })
    }

    fn finish(&mut self) -> Result<ClickOutcome> {
        if self.stage != Stage::CollectingData {
            return Err(DigitizeError::CalibrationIncomplete { stage: self.stage });
        }
        let (cal, window) = self.require_calibration()?;
        debug!(points = self.data_clicks().len(), "building output records");
        let records = save::build_records(&cal, &window, self.data_clicks())?;
        save::save_records(&self.output_path, &records, self.precision)?;
        self.stage = Stage::Saved;
        Ok(ClickOutcome::Saved {
            path: self.output_path.clone(),
            records,
        })
    }
}
