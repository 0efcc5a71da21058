
use serde::{Deserialize, Serialize};

/// The severity of a decorated log message.
///
/// Beyond the usual `Trace..Error` range this set carries two extension
/// severities, `Success` and `Completed`, which the underlying engine does
/// not know about. They are delivered at the engine's `Info` level together
/// with a marker tag (see [`Severity::marker`]) so downstream consumers can
/// still tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
  /// Very detailed information, mostly useful for debugging
  Trace,
  /// Debug-level information, used for development or troubleshooting
  Debug,
  /// General informational messages
  Info,
  /// Warning messages that indicate potential issues
  Warn,
  /// Error messages that indicate a failure
  Error,
  /// A successful operation worth celebrating (extension severity)
  Success,
  /// A finished task or milestone (extension severity)
  Completed,
}

/// All severities, in glyph-table order.
pub const SEVERITIES: [Severity; 7] = [
  Severity::Trace,
  Severity::Debug,
  Severity::Info,
  Severity::Warn,
  Severity::Error,
  Severity::Success,
  Severity::Completed,
];

/// The native level set of the underlying log engine.
///
/// `Severity::Success` and `Severity::Completed` have no native counterpart
/// and collapse onto `Info`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NativeLevel {
  Trace,
  Debug,
  Info,
  Warn,
  Error,
}

impl Severity {
  /// Canonical upper-case label, e.g. `"TRACE"` or `"SUCCESS"`.
  pub fn as_str(self) -> &'static str {
    match self {
      Severity::Trace => "TRACE",
      Severity::Debug => "DEBUG",
      Severity::Info => "INFO",
      Severity::Warn => "WARN",
      Severity::Error => "ERROR",
      Severity::Success => "SUCCESS",
      Severity::Completed => "COMPLETED",
    }
  }

  /// Resolves a label case-insensitively. Unknown labels return `None`;
  /// callers decide their own fallback (themes fall back to a space glyph,
  /// colors to the neutral code).
  pub fn from_label(label: &str) -> Option<Severity> {
    SEVERITIES
      .iter()
      .copied()
      .find(|s| s.as_str().eq_ignore_ascii_case(label))
  }

  /// Maps this severity onto the engine's native level set.
  pub fn native(self) -> NativeLevel {
    match self {
      Severity::Trace => NativeLevel::Trace,
      Severity::Debug => NativeLevel::Debug,
      Severity::Info | Severity::Success | Severity::Completed => NativeLevel::Info,
      Severity::Warn => NativeLevel::Warn,
      Severity::Error => NativeLevel::Error,
    }
  }

  /// Marker tag for the extension severities, `None` for native ones.
  pub fn marker(self) -> Option<&'static str> {
    match self {
      Severity::Success => Some("SUCCESS"),
      Severity::Completed => Some("COMPLETED"),
      _ => None,
    }
  }

  pub(crate) fn index(self) -> usize {
    match self {
      Severity::Trace => 0,
      Severity::Debug => 1,
      Severity::Info => 2,
      Severity::Warn => 3,
      Severity::Error => 4,
      Severity::Success => 5,
      Severity::Completed => 6,
    }
  }
}

impl NativeLevel {
  pub fn as_str(self) -> &'static str {
    match self {
      NativeLevel::Trace => "TRACE",
      NativeLevel::Debug => "DEBUG",
      NativeLevel::Info => "INFO",
      NativeLevel::Warn => "WARN",
      NativeLevel::Error => "ERROR",
    }
  }
}

impl std::fmt::Display for Severity {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl std::fmt::Display for NativeLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
