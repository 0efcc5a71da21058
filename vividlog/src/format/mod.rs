mod __test__;

use crate::color;
use crate::config::InstanceConfig;
use crate::severity::Severity;
use crate::theme::Theme;

/// The message decoration pipeline.
///
/// Combines the instance configuration, a theme, and the color table into a
/// final string. Pure formatting: given a configuration snapshot, the same
/// `(theme, severity, message)` always renders the same output.
///
/// The assembled string is, in order: custom prefix (if configured), the
/// theme's glyph for the severity (glyph data carries its own padding), the
/// raw message verbatim, then a space and the custom suffix (if configured).
/// Color wraps the whole string last, and only when both the entry point
/// requests it and the resolved configuration has colors enabled.
#[derive(Debug, Clone)]
pub struct MessageFormatter {
  config: InstanceConfig,
}

impl MessageFormatter {
  pub fn new(config: InstanceConfig) -> Self {
    Self { config }
  }

  /// Auto-detecting entry point: color comes from the configuration.
  pub fn format(&self, theme: Theme, severity: Severity, message: &str) -> String {
    self.render(theme, severity.as_str(), message, self.config.should_apply_colors())
  }

  /// Console entry point: requests color. The request still honors a
  /// disabled configuration (both flags must be true).
  pub fn format_for_console(&self, theme: Theme, severity: Severity, message: &str) -> String {
    self.render(theme, severity.as_str(), message, true)
  }

  /// File entry point: never colors.
  pub fn format_for_file(&self, theme: Theme, severity: Severity, message: &str) -> String {
    self.render(theme, severity.as_str(), message, false)
  }

  /// Label-keyed entry point for callers that carry the level as a string.
  ///
  /// Unknown labels decorate with a single-space glyph and the neutral
  /// color; decoration never fails.
  pub fn format_label(&self, theme: Theme, label: &str, message: &str) -> String {
    self.render(theme, label, message, self.config.should_apply_colors())
  }

  fn render(&self, theme: Theme, label: &str, message: &str, use_color: bool) -> String {
    let prefix = self.config.custom_prefix();
    let suffix = self.config.custom_suffix();
    let glyph = theme.glyph_for_label(label);

    let mut out = String::with_capacity(prefix.len() + glyph.len() + message.len() + suffix.len() + 1);
    if !prefix.is_empty() {
      out.push_str(&prefix);
    }
    out.push_str(glyph);
    out.push_str(message);
    if !suffix.is_empty() {
      out.push(' ');
      out.push_str(&suffix);
    }

    if use_color && self.config.is_color_enabled() {
      return color::colorize(&out, color::color_for_label(label));
    }
    out
  }
}
