//! Configuration for the digitizer window and output.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::save::DEFAULT_PRECISION;

// ─────────────────────────────────────────────────────────────────────────────
// Marker appearance
// ─────────────────────────────────────────────────────────────────────────────

/// Colours and sizes of the click markers drawn over the figure.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerStyle {
    /// Fill of data-point markers (RGBA).
    pub data_rgba: [u8; 4],
    /// Halo drawn behind each data-point marker (RGBA).
    pub halo_rgba: [u8; 4],
    /// Axis-anchor markers (RGBA).
    pub axis_rgba: [u8; 4],
    /// Plot-window corner markers and outline (RGBA).
    pub corner_rgba: [u8; 4],
    /// Radius of data-point markers in screen points. The halo is twice as large.
    pub radius: f32,
    /// Print the transformed value next to each data point.
    pub show_values: bool,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            data_rgba: [255, 0, 0, 180],
            halo_rgba: [255, 255, 255, 180],
            axis_rgba: [0, 160, 255, 220],
            corner_rgba: [0, 200, 80, 220],
            radius: 3.0,
            show_values: false,
        }
    }
}

pub(crate) fn color(rgba: [u8; 4]) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3])
}

// ─────────────────────────────────────────────────────────────────────────────
// DigitizerConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `title`          | Native window title |
/// | `window_size`    | Initial inner size when `native_options` gives none |
/// | `precision`      | Decimal digits in the output file |
/// | `markers`        | Marker colours and sizes |
/// | `native_options` | eframe options, not serialized |
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct DigitizerConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub precision: usize,
    pub markers: MarkerStyle,
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Clone for DigitizerConfig {
    fn clone(&self) -> Self {
        Self {
            title: self.title.clone(),
            window_size: self.window_size,
            precision: self.precision,
            markers: self.markers.clone(),
            native_options: self.native_options.clone(),
        }
    }
}

impl Default for DigitizerConfig {
    fn default() -> Self {
        Self {
            title: "FigData".to_string(),
            window_size: [1000.0, 800.0],
            precision: DEFAULT_PRECISION,
            markers: MarkerStyle::default(),
            native_options: None,
        }
    }
}

impl DigitizerConfig {
    /// Load a YAML config file. Missing fields fall back to their defaults.
    pub fn load_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    pub fn save_yaml<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let s = serde_yaml::to_string(self)?;
        let mut f = fs::File::create(path)?;
        f.write_all(s.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let cfg: DigitizerConfig =
            serde_yaml::from_str("precision: 3\nmarkers:\n  radius: 5.0\n").unwrap();
        assert_eq!(cfg.precision, 3);
        assert_eq!(cfg.markers.radius, 5.0);
        assert_eq!(cfg.markers.data_rgba, MarkerStyle::default().data_rgba);
        assert_eq!(cfg.title, "FigData");
    }
}
