//! Headless sessions driven from a scripted list of clicks.
//!
//! Script format, one event per line:
//!
//! ```text
//! # x-axis anchors
//! 10 5
//! 110, 5
//! outside
//! ```
//!
//! Blank lines and `#` comments are ignored. A line is either `outside` or
//! two pixel coordinates separated by whitespace or a comma.

use std::path::Path;

use tracing::{info, warn};

use crate::error::{DigitizeError, Result};
use crate::session::{ClickEvent, ClickOutcome, Session};

/// Parse a click script into events.
pub fn parse_script(text: &str) -> Result<Vec<ClickEvent>> {
    let mut events = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("outside") {
            events.push(ClickEvent::Outside);
            continue;
        }
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();
        let [x, y] = fields.as_slice() else {
            return Err(DigitizeError::Script {
                line: i + 1,
                message: format!("expected `x y` or `outside`, got {line:?}"),
            });
        };
        let parse = |f: &str| {
            f.parse::<f64>().map_err(|e| DigitizeError::Script {
                line: i + 1,
                message: format!("{f:?}: {e}"),
            })
        };
        events.push(ClickEvent::Inside([parse(*x)?, parse(*y)?]));
    }
    Ok(events)
}

pub fn load_script<P: AsRef<Path>>(path: P) -> Result<Vec<ClickEvent>> {
    parse_script(&std::fs::read_to_string(path)?)
}

/// Feed events into `session` in order, answering the text prompts the way
/// an interactive user would: axis values once the four anchors are marked,
/// the corner acknowledgement once both corners are marked.
///
/// Returns every outcome. Stops at the first error.
pub fn run(
    session: &mut Session,
    x_values: &str,
    y_values: &str,
    events: &[ClickEvent],
) -> Result<Vec<ClickOutcome>> {
    session.enter_x_range(x_values)?;
    session.enter_y_range(y_values)?;
    let mut outcomes = Vec::with_capacity(events.len());
    for &event in events {
        let before = session.stage();
        let outcome = session.handle_click(event)?;
        if before.is_calibrating() && !session.stage().is_calibrating() {
            session.acknowledge_corners()?;
        }
        outcomes.push(outcome);
    }
    match outcomes.last() {
        Some(ClickOutcome::Saved { path, records }) => {
            info!(records = records.len(), path = %path.display(), "replay finished");
        }
        _ => warn!("script ended without an outside click; nothing was saved"),
    }
    Ok(outcomes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clicks_comments_and_outside() {
        let events = parse_script("# anchors\n10 20\n\n 30.5, 40 # trailing\nOUTSIDE\n").unwrap();
        assert_eq!(
            events,
            vec![
                ClickEvent::Inside([10.0, 20.0]),
                ClickEvent::Inside([30.5, 40.0]),
                ClickEvent::Outside,
            ]
        );
    }

    #[test]
    fn reports_line_of_bad_event() {
        let err = parse_script("1 2\n\n3\n").unwrap_err();
        assert!(matches!(err, DigitizeError::Script { line: 3, .. }));
        let err = parse_script("1 two\n").unwrap_err();
        assert!(matches!(err, DigitizeError::Script { line: 1, .. }));
    }
}
