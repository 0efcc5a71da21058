
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::color;
use crate::theme::Theme;

/// Source location of the call that produced a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerInfo {
  pub file: String,
  pub line: u32,
  pub module: String,
}

/// A raw log event record.
///
/// This is the fixed read-only field contract shared by the fan-out path:
/// message, level label, logger name, thread name, timestamp, optional
/// caller info, markers, contextual key-value pairs, sequence number, and
/// the positional-argument array carried for downstream substitution.
///
/// # Example
///
/// ```rust
/// use vividlog::event::LogRecord;
/// let record = LogRecord::new(1_692_105_600_000, "INFO", "User logged in", "auth");
/// assert_eq!(record.level, "INFO");
/// assert_eq!(record.logger_name, "auth");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
  /// Milliseconds since the Unix epoch.
  pub timestamp: u64,
  /// Level label as the engine reported it (e.g. `"INFO"`).
  pub level: String,
  /// The textual content of the event.
  pub message: String,
  /// Name of the logger that produced the event.
  pub logger_name: String,
  /// Name of the producing thread.
  pub thread_name: String,
  /// Where the event was recorded, when known.
  pub caller: Option<CallerInfo>,
  /// Side-channel tags, e.g. `SUCCESS` for the extension severities.
  pub markers: SmallVec<[String; 2]>,
  /// Contextual key-value pairs attached to the event.
  pub context: HashMap<String, String>,
  /// Process-local event sequence number.
  pub sequence: u64,
  /// Positional arguments, passed through unmodified.
  pub args: SmallVec<[String; 4]>,
}

impl LogRecord {
  /// Creates a record with the given core fields; everything else starts
  /// empty and can be filled in directly.
  pub fn new(
    timestamp: u64,
    level: impl Into<String>,
    message: impl Into<String>,
    logger_name: impl Into<String>,
  ) -> Self {
    Self {
      timestamp,
      level: level.into(),
      message: message.into(),
      logger_name: logger_name.into(),
      ..Self::default()
    }
  }

  /// Serializes the record into a JSON string.
  ///
  /// # Panics
  /// Panics if serialization fails, which cannot happen for the field types
  /// used here.
  pub fn serialize(&self) -> String {
    serde_json::to_string(self).expect("Failed to serialize")
  }

  /// Deserializes a JSON string into a record.
  ///
  /// # Panics
  /// Panics on invalid JSON or mismatched structure.
  pub fn deserialize(json: &str) -> Self {
    serde_json::from_str::<Self>(json).expect("Failed to deserialize")
  }
}

impl Default for LogRecord {
  fn default() -> Self {
    Self {
      timestamp: 0,
      level: String::new(),
      message: String::new(),
      logger_name: String::new(),
      thread_name: String::new(),
      caller: None,
      markers: SmallVec::new(),
      context: HashMap::new(),
      sequence: 0,
      args: SmallVec::new(),
    }
  }
}

impl std::fmt::Display for LogRecord {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.serialize())
  }
}

/// Read access to an event's observable fields.
///
/// Both raw records and decorated wrappers expose this same capability set,
/// so downstream sinks consume either one without caring which.
pub trait EventView {
  /// The message as it should be rendered downstream.
  fn rendered_message(&self) -> &str;
  fn level(&self) -> &str;
  fn logger_name(&self) -> &str;
  fn thread_name(&self) -> &str;
  fn timestamp(&self) -> u64;
  fn caller(&self) -> Option<&CallerInfo>;
  fn markers(&self) -> &[String];
  fn context(&self) -> &HashMap<String, String>;
  fn sequence(&self) -> u64;
  fn args(&self) -> &[String];
}

impl EventView for LogRecord {
  fn rendered_message(&self) -> &str {
    &self.message
  }

  fn level(&self) -> &str {
    &self.level
  }

  fn logger_name(&self) -> &str {
    &self.logger_name
  }

  fn thread_name(&self) -> &str {
    &self.thread_name
  }

  fn timestamp(&self) -> u64 {
    self.timestamp
  }

  fn caller(&self) -> Option<&CallerInfo> {
    self.caller.as_ref()
  }

  fn markers(&self) -> &[String] {
    &self.markers
  }

  fn context(&self) -> &HashMap<String, String> {
    &self.context
  }

  fn sequence(&self) -> u64 {
    self.sequence
  }

  fn args(&self) -> &[String] {
    &self.args
  }
}

/// A decorated view over a raw record.
///
/// Constructed once per fan-out dispatch. The rendered message is computed
/// at construction (glyph, then optional color — the event-stream path skips
/// prefix/suffix on purpose); every other accessor forwards to the original
/// record by reference, so the original must outlive the wrapper.
#[derive(Debug)]
pub struct DecoratedEvent<'a> {
  original: &'a LogRecord,
  message: String,
}

impl<'a> DecoratedEvent<'a> {
  pub fn wrap(original: &'a LogRecord, theme: Theme, apply_colors: bool) -> Self {
    let glyph = theme.glyph_for_label(&original.level);
    let mut message = String::with_capacity(glyph.len() + original.message.len());
    message.push_str(glyph);
    message.push_str(&original.message);

    if apply_colors {
      message = color::colorize(&message, color::color_for_label(&original.level));
    }

    Self { original, message }
  }
}

impl EventView for DecoratedEvent<'_> {
  fn rendered_message(&self) -> &str {
    &self.message
  }

  // Everything below forwards to the original record.

  fn level(&self) -> &str {
    &self.original.level
  }

  fn logger_name(&self) -> &str {
    &self.original.logger_name
  }

  fn thread_name(&self) -> &str {
    &self.original.thread_name
  }

  fn timestamp(&self) -> u64 {
    self.original.timestamp
  }

  fn caller(&self) -> Option<&CallerInfo> {
    self.original.caller.as_ref()
  }

  fn markers(&self) -> &[String] {
    &self.original.markers
  }

  fn context(&self) -> &HashMap<String, String> {
    &self.original.context
  }

  fn sequence(&self) -> u64 {
    self.original.sequence
  }

  fn args(&self) -> &[String] {
    &self.original.args
  }
}
