use std::io::{self, Write};

use crate::appender::Sink;
use crate::event::EventView;

/// Stdout sink with a reused line buffer.
pub struct StdoutSink {
  name: String,
  buffer: std::sync::Mutex<String>,
}

impl StdoutSink {
  pub fn new() -> Self {
    Self::named("stdout")
  }

  pub fn named(name: &str) -> Self {
    Self {
      name: name.to_string(),
      buffer: std::sync::Mutex::new(String::with_capacity(256)),
    }
  }
}

impl Default for StdoutSink {
  fn default() -> Self {
    Self::new()
  }
}

impl Sink for StdoutSink {
  fn name(&self) -> &str {
    &self.name
  }

  fn append(&self, event: &dyn EventView) {
    if let Ok(mut buf) = self.buffer.try_lock() {
      buf.clear();

      use std::fmt::Write;
      let _ = write!(
        buf,
        "[{}] {}: {}\n",
        event.level(),
        event.logger_name(),
        event.rendered_message()
      );

      // Single write call
      let _ = io::stdout().write_all(buf.as_bytes());
    }
  }
}
