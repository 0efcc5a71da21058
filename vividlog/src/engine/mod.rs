mod __test__;

use std::error::Error;

use crate::severity::NativeLevel;

/// One call across the engine boundary.
///
/// The message arrives fully decorated; the marker tags the two extension
/// severities; arguments and the optional error pass through unmodified for
/// downstream consumers. No `{}` placeholder substitution happens on this
/// side of the boundary.
pub struct EngineCall<'a> {
  pub level: NativeLevel,
  pub target: &'a str,
  pub message: &'a str,
  pub marker: Option<&'static str>,
  pub args: &'a [String],
  pub error: Option<&'a (dyn Error + 'static)>,
}

/// The underlying structured log engine, treated as a black box.
///
/// Object-safe so tests can inject a capturing implementation.
pub trait LogEngine: Send + Sync {
  fn dispatch(&self, call: EngineCall<'_>);
}

/// Default engine: emits `tracing` events.
///
/// The native level is dispatched by match; logger name, marker, arguments
/// and error travel as structured fields on the event.
#[derive(Debug, Default)]
pub struct TracingEngine;

impl TracingEngine {
  pub fn new() -> Self {
    Self
  }
}

macro_rules! emit_at {
  ($level:expr, $call:expr) => {
    tracing::event!(
      $level,
      logger = $call.target,
      marker = $call.marker,
      args = ?$call.args,
      error = $call.error.map(tracing::field::display),
      "{}",
      $call.message
    )
  };
}

impl LogEngine for TracingEngine {
  fn dispatch(&self, call: EngineCall<'_>) {
    match call.level {
      NativeLevel::Trace => emit_at!(tracing::Level::TRACE, call),
      NativeLevel::Debug => emit_at!(tracing::Level::DEBUG, call),
      NativeLevel::Info => emit_at!(tracing::Level::INFO, call),
      NativeLevel::Warn => emit_at!(tracing::Level::WARN, call),
      NativeLevel::Error => emit_at!(tracing::Level::ERROR, call),
    }
  }
}
