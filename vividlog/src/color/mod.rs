
use crate::severity::Severity;

/// Resets terminal styling back to default.
pub const RESET: &str = "\x1b[0m";

const CYAN: &str = "\x1b[36m";
const BLUE: &str = "\x1b[34m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const BRIGHT_GREEN: &str = "\x1b[92m";
const MAGENTA: &str = "\x1b[35m";

/// Fixed severity-to-color mapping. One code per severity, no per-theme
/// variation.
pub fn color_for(severity: Severity) -> &'static str {
  match severity {
    Severity::Trace => CYAN,
    Severity::Debug => BLUE,
    Severity::Info => GREEN,
    Severity::Warn => YELLOW,
    Severity::Error => RED,
    Severity::Success => BRIGHT_GREEN,
    Severity::Completed => MAGENTA,
  }
}

/// Label-keyed variant of [`color_for`]. Unknown labels yield the neutral
/// [`RESET`] code.
pub fn color_for_label(label: &str) -> &'static str {
  match Severity::from_label(label) {
    Some(severity) => color_for(severity),
    None => RESET,
  }
}

/// Brackets `text` with the given color code and a reset sequence.
///
/// Plain concatenation: no escaping of the input, so text that already
/// contains escape sequences passes through untouched.
pub fn colorize(text: &str, color: &str) -> String {
  let mut out = String::with_capacity(color.len() + text.len() + RESET.len());
  out.push_str(color);
  out.push_str(text);
  out.push_str(RESET);
  out
}
