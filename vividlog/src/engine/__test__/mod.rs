#[cfg(test)]
mod __test__ {

  use crate::engine::{EngineCall, LogEngine, TracingEngine};
  use crate::severity::NativeLevel;

  #[test]
  fn engine_call_carries_the_boundary_fields() {
    let args = vec!["john".to_string(), "42".to_string()];
    let call = EngineCall {
      level: NativeLevel::Info,
      target: "auth",
      message: " ✅ User {} logged in after {} tries",
      marker: Some("SUCCESS"),
      args: &args,
      error: None,
    };

    assert_eq!(call.level, NativeLevel::Info);
    assert_eq!(call.target, "auth");
    assert_eq!(call.marker, Some("SUCCESS"));
    assert_eq!(call.args.len(), 2);
    // Substitution is the engine's job; the message keeps its placeholders.
    assert!(call.message.contains("{}"));
  }

  #[test]
  fn tracing_engine_dispatches_without_subscriber() {
    // With no subscriber installed the event is simply dropped.
    let engine = TracingEngine::new();
    for level in [
      NativeLevel::Trace,
      NativeLevel::Debug,
      NativeLevel::Info,
      NativeLevel::Warn,
      NativeLevel::Error,
    ] {
      engine.dispatch(EngineCall {
        level,
        target: "noop",
        message: "dropped",
        marker: None,
        args: &[],
        error: None,
      });
    }
  }

  #[test]
  fn tracing_engine_passes_error_through() {
    let engine = TracingEngine::new();
    let error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    engine.dispatch(EngineCall {
      level: NativeLevel::Error,
      target: "storage",
      message: " ❌ write failed",
      marker: None,
      args: &[],
      error: Some(&error),
    });
  }
}
