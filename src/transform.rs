//! Pixel-to-data coordinate transform.
//!
//! Each axis is calibrated independently from two anchor clicks with known
//! data values; any pixel coordinate is then mapped linearly. Values outside
//! the anchors are extrapolated with the same formula.

use std::fmt;

use crate::error::{DigitizeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Two pixel anchors on one axis and the data values they stand for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCalibration {
    pub axis: Axis,
    pub pixels: [f64; 2],
    pub values: [f64; 2],
}

impl AxisCalibration {
    pub fn new(axis: Axis, pixels: [f64; 2], values: [f64; 2]) -> Self {
        Self {
            axis,
            pixels,
            values,
        }
    }

    /// Map a pixel coordinate on this axis to its data value.
    ///
    /// Fails with [`DigitizeError::DegenerateAxis`] when both anchors sit on
    /// the same pixel.
    pub fn to_data(&self, pixel: f64) -> Result<f64> {
        let [p0, p1] = self.pixels;
        let [v0, v1] = self.values;
        let span = p1 - p0;
        if span == 0.0 {
            return Err(DigitizeError::DegenerateAxis { axis: self.axis });
        }
        // Exact at the second anchor; the formula can be off by an ulp there.
        if pixel == p1 {
            return Ok(v1);
        }
        Ok((pixel - p0) * (v1 - v0) / span + v0)
    }
}

/// Full two-axis calibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub x: AxisCalibration,
    pub y: AxisCalibration,
}

impl Calibration {
    pub fn new(
        x_pixels: [f64; 2],
        x_values: [f64; 2],
        y_pixels: [f64; 2],
        y_values: [f64; 2],
    ) -> Self {
        Self {
            x: AxisCalibration::new(Axis::X, x_pixels, x_values),
            y: AxisCalibration::new(Axis::Y, y_pixels, y_values),
        }
    }

    /// Transform a pixel-space point to data space, axis by axis.
    pub fn to_data(&self, pixel: [f64; 2]) -> Result<[f64; 2]> {
        Ok([self.x.to_data(pixel[0])?, self.y.to_data(pixel[1])?])
    }

    /// Data-space extent of the marked plot window.
    pub fn window_extent(&self, window: &PlotWindow) -> Result<WindowExtent> {
        let [x_min, y_min] = self.to_data(window.lower_left)?;
        let [x_max, y_max] = self.to_data(window.upper_right)?;
        Ok(WindowExtent {
            x: [x_min, x_max],
            y: [y_min, y_max],
        })
    }
}

/// The plot-window rectangle in pixel space, from the two corner clicks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotWindow {
    pub lower_left: [f64; 2],
    pub upper_right: [f64; 2],
}

impl PlotWindow {
    pub fn new(lower_left: [f64; 2], upper_right: [f64; 2]) -> Self {
        Self {
            lower_left,
            upper_right,
        }
    }

    /// Inclusive on all four edges.
    pub fn contains(&self, pixel: [f64; 2]) -> bool {
        pixel[0] >= self.lower_left[0]
            && pixel[0] <= self.upper_right[0]
            && pixel[1] >= self.lower_left[1]
            && pixel[1] <= self.upper_right[1]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowExtent {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl fmt::Display for WindowExtent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "x=[{:.6},{:.6}], y=[{:.6},{:.6}]",
            self.x[0], self.x[1], self.y[0], self.y[1]
        )
    }
}
