//! Writing digitized points to the output file.

use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::transform::{Calibration, PlotWindow};

/// Decimal digits written per value unless configured otherwise.
pub const DEFAULT_PRECISION: usize = 6;

/// One line of the output file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputRecord {
    pub x: f64,
    pub y: f64,
    /// Whether the raw click fell inside the marked plot window.
    pub in_bounds: bool,
}

/// Transform every data click, keeping click order.
pub fn build_records(
    calibration: &Calibration,
    window: &PlotWindow,
    data_clicks: &[[f64; 2]],
) -> Result<Vec<OutputRecord>> {
    data_clicks
        .iter()
        .map(|&pixel| {
            let [x, y] = calibration.to_data(pixel)?;
            Ok(OutputRecord {
                x,
                y,
                in_bounds: window.contains(pixel),
            })
        })
        .collect()
}

/// Write records as `"<x> <y> <flag>"` lines, fixed-point, no header.
pub fn write_records<W: Write>(
    mut w: W,
    records: &[OutputRecord],
    precision: usize,
) -> std::io::Result<()> {
    for r in records {
        writeln!(
            w,
            "{:.prec$} {:.prec$} {}",
            r.x,
            r.y,
            u8::from(r.in_bounds),
            prec = precision
        )?;
    }
    Ok(())
}

/// Create (or truncate) `path` and write all records to it.
pub fn save_records<P: AsRef<Path>>(
    path: P,
    records: &[OutputRecord],
    precision: usize,
) -> Result<()> {
    let path = path.as_ref();
    let file = std::fs::File::create(path)?;
    let mut w = BufWriter::new(file);
    write_records(&mut w, records, precision)?;
    w.flush()?;
    info!(records = records.len(), "Saved to {}.", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fixed_point_with_flag() {
        let records = [
            OutputRecord {
                x: 0.5,
                y: 1.0,
                in_bounds: true,
            },
            OutputRecord {
                x: -1.25,
                y: 1e-7,
                in_bounds: false,
            },
        ];
        let mut buf = Vec::new();
        write_records(&mut buf, &records, DEFAULT_PRECISION).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "0.500000 1.000000 1\n-1.250000 0.000000 0\n"
        );
    }

    #[test]
    fn precision_is_configurable() {
        let records = [OutputRecord {
            x: 1.0 / 3.0,
            y: 2.0,
            in_bounds: true,
        }];
        let mut buf = Vec::new();
        write_records(&mut buf, &records, 2).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "0.33 2.00 1\n");
    }
}
