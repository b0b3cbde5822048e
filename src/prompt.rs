//! Calibration text prompts.

use crate::error::{DigitizeError, Result};

pub const X_AXIS_PROMPT: &str =
    "Click two positions along the x axis and enter their tick values (e.g. 0,1)";
pub const Y_AXIS_PROMPT: &str =
    "Click two positions along the y axis and enter their tick values (e.g. 0,1)";
pub const CORNERS_PROMPT: &str =
    "Mark the lower-left and upper-right corners of the plot axes, then press Enter";
pub const COLLECT_PROMPT: &str =
    "Mark as many data points as you like. Click outside the image to save.";

/// Parse a comma-separated pair of axis values such as `"0, 2.5"`.
pub fn parse_axis_values(input: &str) -> Result<[f64; 2]> {
    let fields: Vec<&str> = input.trim().split(',').map(str::trim).collect();
    if fields.len() != 2 {
        return Err(DigitizeError::CalibrationInput {
            input: input.to_string(),
            reason: format!("expected 2 comma-separated values, got {}", fields.len()),
        });
    }
    let mut out = [0.0; 2];
    for (slot, field) in out.iter_mut().zip(&fields) {
        *slot = field
            .parse::<f64>()
            .map_err(|e| DigitizeError::CalibrationInput {
                input: input.to_string(),
                reason: format!("{field:?}: {e}"),
            })?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_pair_with_whitespace() {
        assert_eq!(parse_axis_values(" 0, 2.5\n").unwrap(), [0.0, 2.5]);
        assert_eq!(parse_axis_values("-1e3,1e3").unwrap(), [-1000.0, 1000.0]);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(matches!(
            parse_axis_values("1"),
            Err(DigitizeError::CalibrationInput { .. })
        ));
        assert!(parse_axis_values("1,2,3").is_err());
        assert!(parse_axis_values("").is_err());
    }

    #[test]
    fn rejects_non_numeric() {
        let err = parse_axis_values("0,one").unwrap_err();
        assert!(err.to_string().contains("\"one\""));
    }
}
