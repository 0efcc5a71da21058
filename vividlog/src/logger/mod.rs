//! # Logger Module
//!
//! The caller-facing handle of the decoration pipeline.
//!
//! A [`VividLogger`] owns its per-instance configuration, its current theme
//! (swappable at any time, effective from the next call), and a formatter
//! bound to both. Every logging call renders the decorated message and hands
//! it across the engine boundary; the engine does the actual I/O.
//!
//! ## Usage
//!
//! ```rust
//! use vividlog::logger::VividLogger;
//! use vividlog::theme::Theme;
//!
//! let logger = VividLogger::for_target("payments").with_theme(Theme::Tech);
//! logger.info("service started");
//! logger.success("payment settled");
//! ```
//!
//! ## Thread Safety
//! - Handles are `Send + Sync`; all logging calls take `&self`
//! - Theme swaps are atomic with last-writer-wins semantics
//! - Configuration overrides are visible to all clones of the instance config


use std::error::Error;
use std::fmt::Display;
use std::panic::Location;
use std::path::Path;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use smallvec::SmallVec;
use thiserror::Error as ThisError;

use crate::config::{GlobalConfig, InstanceConfig};
use crate::engine::{EngineCall, LogEngine, TracingEngine};
use crate::format::MessageFormatter;
use crate::severity::Severity;
use crate::theme::Theme;

/// Caller-identity resolution failed.
///
/// This is the one loud failure in the crate: a handle attributed to the
/// wrong caller is worse than no handle at all, so there is no silent
/// fallback.
#[derive(Debug, ThisError)]
pub enum IdentityError {
  #[error("cannot derive a logger identity from caller location `{0}`")]
  Unresolvable(String),
}

/// A logger handle bound to one logical caller.
pub struct VividLogger {
  engine: Arc<dyn LogEngine>,
  target: String,
  theme: AtomicU8,
  config: InstanceConfig,
  formatter: MessageFormatter,
}

impl VividLogger {
  /// Creates a handle for an explicit identity. This is the primary
  /// constructor.
  pub fn for_target(target: impl Into<String>) -> Self {
    Self::with_engine(target, Arc::new(TracingEngine::new()))
  }

  /// Creates a handle for the calling code, deriving the identity from the
  /// caller's source location.
  ///
  /// This is sugar over [`VividLogger::for_target`] and is fragile by
  /// nature: the identity comes from the immediate caller's file path, so
  /// macro-generated or re-exported call sites may not resolve to anything
  /// meaningful. An unresolvable identity fails loudly.
  #[track_caller]
  pub fn from_caller() -> Result<Self, IdentityError> {
    Ok(Self::for_target(caller_identity(Location::caller())?))
  }

  /// Creates a handle with a custom engine and the shared global
  /// configuration.
  pub fn with_engine(target: impl Into<String>, engine: Arc<dyn LogEngine>) -> Self {
    Self::with_config(target, engine, GlobalConfig::global())
  }

  /// Creates a fully assembled handle. Tests use this to inject a fresh
  /// global config instead of sharing process state.
  pub fn with_config(
    target: impl Into<String>,
    engine: Arc<dyn LogEngine>,
    global: Arc<GlobalConfig>,
  ) -> Self {
    let config = InstanceConfig::new(global);
    let theme = config.default_theme();
    Self {
      engine,
      target: target.into(),
      theme: AtomicU8::new(theme.index()),
      formatter: MessageFormatter::new(config.clone()),
      config,
    }
  }

  /// Sets the theme and returns the handle, for chaining at construction.
  pub fn with_theme(self, theme: Theme) -> Self {
    self.set_theme(theme);
    self
  }

  /// Pre-configures the handle for interactive console use: forces the
  /// instance color override on.
  pub fn console(self) -> Self {
    self.config.set_color_enabled(true);
    self
  }

  /// Pre-configures the handle for file or non-interactive use: forces the
  /// instance color override off.
  pub fn file(self) -> Self {
    self.config.set_color_enabled(false);
    self
  }

  /// Swaps the theme. Takes effect for decoration calls issued after this
  /// returns; concurrent in-flight calls may still see the old theme.
  pub fn set_theme(&self, theme: Theme) {
    self.theme.store(theme.index(), Ordering::Relaxed);
  }

  pub fn theme(&self) -> Theme {
    Theme::from_index(self.theme.load(Ordering::Relaxed))
  }

  /// The per-instance configuration, for further overrides.
  pub fn config(&self) -> &InstanceConfig {
    &self.config
  }

  /// The logical identity this handle logs under.
  pub fn target(&self) -> &str {
    &self.target
  }

  /// Escape hatch: the underlying engine handle.
  pub fn engine(&self) -> Arc<dyn LogEngine> {
    Arc::clone(&self.engine)
  }

  /// Renders a message through the decoration pipeline without logging it.
  /// Unknown labels decorate with a space glyph; this never fails.
  pub fn format(&self, label: &str, message: &str) -> String {
    self.formatter.format_label(self.theme(), label, message)
  }

  fn emit(&self, severity: Severity, message: &str, args: &[String], error: Option<&(dyn Error + 'static)>) {
    let rendered = self.formatter.format(self.theme(), severity, message);
    self.engine.dispatch(EngineCall {
      level: severity.native(),
      target: &self.target,
      message: &rendered,
      marker: severity.marker(),
      args,
      error,
    });
  }

  /// Logs a message at TRACE level.
  pub fn trace(&self, message: &str) {
    self.emit(Severity::Trace, message, &[], None);
  }

  /// Logs a message with positional arguments at TRACE level.
  pub fn trace_with(&self, message: &str, args: &[&dyn Display]) {
    self.emit(Severity::Trace, message, &render_args(args), None);
  }

  /// Logs a message with an error at TRACE level.
  pub fn trace_err(&self, message: &str, error: &(dyn Error + 'static)) {
    self.emit(Severity::Trace, message, &[], Some(error));
  }

  /// Logs a message at DEBUG level.
  pub fn debug(&self, message: &str) {
    self.emit(Severity::Debug, message, &[], None);
  }

  pub fn debug_with(&self, message: &str, args: &[&dyn Display]) {
    self.emit(Severity::Debug, message, &render_args(args), None);
  }

  pub fn debug_err(&self, message: &str, error: &(dyn Error + 'static)) {
    self.emit(Severity::Debug, message, &[], Some(error));
  }

  /// Logs a message at INFO level.
  pub fn info(&self, message: &str) {
    self.emit(Severity::Info, message, &[], None);
  }

  pub fn info_with(&self, message: &str, args: &[&dyn Display]) {
    self.emit(Severity::Info, message, &render_args(args), None);
  }

  pub fn info_err(&self, message: &str, error: &(dyn Error + 'static)) {
    self.emit(Severity::Info, message, &[], Some(error));
  }

  /// Logs a message at WARN level.
  pub fn warn(&self, message: &str) {
    self.emit(Severity::Warn, message, &[], None);
  }

  pub fn warn_with(&self, message: &str, args: &[&dyn Display]) {
    self.emit(Severity::Warn, message, &render_args(args), None);
  }

  pub fn warn_err(&self, message: &str, error: &(dyn Error + 'static)) {
    self.emit(Severity::Warn, message, &[], Some(error));
  }

  /// Logs a message at ERROR level.
  pub fn error(&self, message: &str) {
    self.emit(Severity::Error, message, &[], None);
  }

  pub fn error_with(&self, message: &str, args: &[&dyn Display]) {
    self.emit(Severity::Error, message, &render_args(args), None);
  }

  pub fn error_err(&self, message: &str, error: &(dyn Error + 'static)) {
    self.emit(Severity::Error, message, &[], Some(error));
  }

  /// Logs at the SUCCESS extension severity. Dispatched at the engine's
  /// INFO level with the `SUCCESS` marker.
  pub fn success(&self, message: &str) {
    self.emit(Severity::Success, message, &[], None);
  }

  pub fn success_with(&self, message: &str, args: &[&dyn Display]) {
    self.emit(Severity::Success, message, &render_args(args), None);
  }

  pub fn success_err(&self, message: &str, error: &(dyn Error + 'static)) {
    self.emit(Severity::Success, message, &[], Some(error));
  }

  /// Logs at the COMPLETED extension severity. Dispatched at the engine's
  /// INFO level with the `COMPLETED` marker.
  pub fn completed(&self, message: &str) {
    self.emit(Severity::Completed, message, &[], None);
  }

  pub fn completed_with(&self, message: &str, args: &[&dyn Display]) {
    self.emit(Severity::Completed, message, &render_args(args), None);
  }

  pub fn completed_err(&self, message: &str, error: &(dyn Error + 'static)) {
    self.emit(Severity::Completed, message, &[], Some(error));
  }

  /// Logs a celebration message with party glyphs.
  pub fn celebrate(&self, message: &str) {
    self.success(&format!("🎉🎊 {} 🎊🎉", message));
  }

  /// Logs a thinking message.
  pub fn thinking(&self, message: &str) {
    self.info(&format!("🤔 {}", message));
  }

  /// Logs a rocket message.
  pub fn rocket(&self, message: &str) {
    self.info(&format!("🚀 {}", message));
  }

  /// Logs a sparkles message.
  pub fn sparkles(&self, message: &str) {
    self.info(&format!("✨ {} ✨", message));
  }

  /// Logs a progress message.
  pub fn progress(&self, message: &str) {
    self.info(&format!("⏳ {}", message));
  }

  /// Logs a tada message.
  pub fn tada(&self, message: &str) {
    self.success(&format!("🎉 {}", message));
  }
}

fn render_args(args: &[&dyn Display]) -> SmallVec<[String; 4]> {
  args.iter().map(|arg| arg.to_string()).collect()
}

/// Derives a logger identity from a caller's source location.
///
/// The file stem is the identity; `mod.rs`/`lib.rs`/`main.rs` fall back to
/// the enclosing directory name.
fn caller_identity(location: &Location<'_>) -> Result<String, IdentityError> {
  let file = location.file();
  let path = Path::new(file);
  let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("");

  if stem.is_empty() {
    return Err(IdentityError::Unresolvable(file.to_string()));
  }
  if matches!(stem, "mod" | "lib" | "main") {
    return match path.parent().and_then(|p| p.file_name()).and_then(|s| s.to_str()) {
      Some(parent) if !parent.is_empty() => Ok(parent.to_string()),
      _ => Err(IdentityError::Unresolvable(file.to_string())),
    };
  }
  Ok(stem.to_string())
}
