
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{field::Field, Event as TracingEvent, Subscriber};
use tracing_subscriber::{layer::Context, registry::LookupSpan, Layer};

use crate::appender::FanoutAppender;
use crate::event::{CallerInfo, LogRecord};

/// Bridges `tracing` events into the fan-out appender.
///
/// Each event becomes one [`LogRecord`]: message, marker and remaining
/// fields are collected by a visitor, metadata supplies level, target and
/// caller info, and a process-local counter assigns the sequence number.
pub struct AppenderLayer {
  pub appender: Arc<FanoutAppender>,
  sequence: AtomicU64,
}

impl AppenderLayer {
  pub fn new(appender: Arc<FanoutAppender>) -> Self {
    Self {
      appender,
      sequence: AtomicU64::new(0),
    }
  }
}

impl<T> Layer<T> for AppenderLayer
where
  T: Subscriber + for<'a> LookupSpan<'a>,
{
  fn on_event(&self, event: &TracingEvent<'_>, _ctx: Context<'_, T>) {
    let ts = Utc::now().timestamp_millis() as u64;
    let meta = event.metadata();

    let mut visitor = FieldVisitor::default();
    event.record(&mut visitor);

    let mut record = LogRecord::new(
      ts,
      meta.level().to_string(),
      visitor.message.unwrap_or_default(),
      meta.target().to_string(),
    );
    record.thread_name = std::thread::current()
      .name()
      .unwrap_or("unnamed")
      .to_string();
    record.caller = meta.file().map(|file| CallerInfo {
      file: file.to_string(),
      line: meta.line().unwrap_or(0),
      module: meta.module_path().unwrap_or("").to_string(),
    });
    record.sequence = self.sequence.fetch_add(1, Ordering::Relaxed);
    if let Some(marker) = visitor.marker {
      record.markers.push(marker);
    }
    if let Some(args) = visitor.args {
      record.args.push(args);
    }
    record.context = visitor.fields;

    self.appender.append(&record);
  }
}

#[derive(Default)]
struct FieldVisitor {
  message: Option<String>,
  marker: Option<String>,
  args: Option<String>,
  fields: HashMap<String, String>,
}

impl FieldVisitor {
  fn record(&mut self, field: &Field, value: String) {
    match field.name() {
      "message" => self.message = Some(value),
      "marker" => self.marker = Some(value),
      "args" => self.args = Some(value),
      name => {
        self.fields.insert(name.to_string(), value);
      },
    }
  }
}

impl tracing::field::Visit for FieldVisitor {
  fn record_str(&mut self, field: &Field, value: &str) {
    self.record(field, value.to_string());
  }

  fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
    self.record(field, format!("{:?}", value));
  }
}
