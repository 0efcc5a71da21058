
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, RwLock};

use crate::event::{DecoratedEvent, EventView, LogRecord};
use crate::theme::Theme;

/// A downstream consumer of log events.
///
/// Panics inside a sink are the sink's own problem; the appender does not
/// isolate them.
pub trait Sink: Send + Sync + 'static {
  /// Name used for lookup and detach-by-name.
  fn name(&self) -> &str;

  /// Handle a single event.
  fn append(&self, event: &dyn EventView);

  /// Optional: called when the sink is attached.
  fn on_attach(&self) {}

  /// Optional: called when the sink is detached.
  fn on_detach(&self) {}
}

/// Decorates incoming records and republishes them to an ordered list of
/// downstream sinks.
///
/// Theme and color flag are runtime-settable. The sink list is shared
/// mutable state: dispatch iterates a snapshot taken at the moment it
/// begins, so concurrent attach/detach calls see either the old or the new
/// list, never a torn one, and no lock is held across sink I/O.
pub struct FanoutAppender {
  theme: AtomicU8,
  color_enabled: AtomicBool,
  sinks: RwLock<Vec<Arc<dyn Sink>>>,
}

impl FanoutAppender {
  pub fn new() -> Self {
    Self {
      theme: AtomicU8::new(Theme::Classic.index()),
      color_enabled: AtomicBool::new(true),
      sinks: RwLock::new(Vec::new()),
    }
  }

  /// Sets the decoration theme by name; unknown names resolve to classic.
  pub fn set_theme(&self, name: &str) {
    self.theme.store(Theme::from_name(name).index(), Ordering::Relaxed);
  }

  pub fn theme(&self) -> Theme {
    Theme::from_index(self.theme.load(Ordering::Relaxed))
  }

  pub fn set_color_enabled(&self, enabled: bool) {
    self.color_enabled.store(enabled, Ordering::Relaxed);
  }

  pub fn is_color_enabled(&self) -> bool {
    self.color_enabled.load(Ordering::Relaxed)
  }

  /// Wraps the record once and delivers it to every currently attached sink
  /// in attachment order.
  pub fn append(&self, record: &LogRecord) {
    let sinks = self.snapshot();
    if sinks.is_empty() {
      return;
    }

    let wrapped = DecoratedEvent::wrap(record, self.theme(), self.is_color_enabled());
    for sink in &sinks {
      sink.append(&wrapped);
    }
  }

  /// Attaches a sink at the end of the dispatch order.
  pub fn add_sink(&self, sink: Arc<dyn Sink>) {
    sink.on_attach();
    if let Ok(mut sinks) = self.sinks.write() {
      sinks.push(sink);
    }
  }

  /// Looks up an attached sink by name.
  pub fn sink(&self, name: &str) -> Option<Arc<dyn Sink>> {
    self
      .sinks
      .read()
      .ok()
      .and_then(|sinks| sinks.iter().find(|s| s.name() == name).cloned())
  }

  /// Whether this exact sink (pointer identity) is attached.
  pub fn is_attached(&self, sink: &Arc<dyn Sink>) -> bool {
    self
      .sinks
      .read()
      .map(|sinks| sinks.iter().any(|s| Arc::ptr_eq(s, sink)))
      .unwrap_or(false)
  }

  /// Detaches the given sink. Returns whether it was attached.
  pub fn detach(&self, sink: &Arc<dyn Sink>) -> bool {
    let removed = match self.sinks.write() {
      Ok(mut sinks) => {
        let before = sinks.len();
        sinks.retain(|s| !Arc::ptr_eq(s, sink));
        before != sinks.len()
      },
      Err(_) => false,
    };
    if removed {
      sink.on_detach();
    }
    removed
  }

  /// Detaches the first sink with the given name. Returns whether one was
  /// found.
  pub fn detach_by_name(&self, name: &str) -> bool {
    let detached = match self.sinks.write() {
      Ok(mut sinks) => match sinks.iter().position(|s| s.name() == name) {
        Some(index) => Some(sinks.remove(index)),
        None => None,
      },
      Err(_) => None,
    };
    match detached {
      Some(sink) => {
        sink.on_detach();
        true
      },
      None => false,
    }
  }

  /// Detaches every sink, running each sink's `on_detach`.
  pub fn detach_all(&self) {
    let drained = match self.sinks.write() {
      Ok(mut sinks) => std::mem::take(&mut *sinks),
      Err(_) => Vec::new(),
    };
    for sink in drained {
      sink.on_detach();
    }
  }

  /// Snapshot of the attached sinks, in attachment order.
  pub fn sinks(&self) -> Vec<Arc<dyn Sink>> {
    self.snapshot()
  }

  pub fn len(&self) -> usize {
    self.sinks.read().map(|sinks| sinks.len()).unwrap_or(0)
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn snapshot(&self) -> Vec<Arc<dyn Sink>> {
    self.sinks.read().map(|sinks| sinks.clone()).unwrap_or_default()
  }
}

impl Default for FanoutAppender {
  fn default() -> Self {
    Self::new()
  }
}
