#[cfg(test)]
mod __test__ {

  use std::collections::HashMap;
  use std::sync::Arc;

  use crate::color::RESET;
  use crate::config::{GlobalConfig, InstanceConfig, KEY_CUSTOM_PREFIX, KEY_CUSTOM_SUFFIX};
  use crate::format::MessageFormatter;
  use crate::severity::Severity;
  use crate::theme::Theme;

  fn formatter_with(global: GlobalConfig) -> MessageFormatter {
    MessageFormatter::new(InstanceConfig::new(Arc::new(global)))
  }

  fn formatter_with_defaults() -> MessageFormatter {
    formatter_with(GlobalConfig::with_defaults())
  }

  #[test]
  fn classic_info_without_color_keeps_glyph_padding() {
    let global = GlobalConfig::with_defaults();
    global.set_color_enabled(false);
    let formatter = formatter_with(global);

    let out = formatter.format(Theme::Classic, Severity::Info, "Deploy finished");
    assert_eq!(out, " ✅ Deploy finished");
  }

  #[test]
  fn tech_error_with_prefix_suffix_and_color() {
    let mut source = HashMap::new();
    source.insert(KEY_CUSTOM_PREFIX.to_string(), "[svc]".to_string());
    source.insert(KEY_CUSTOM_SUFFIX.to_string(), "(v2)".to_string());
    let formatter = formatter_with(GlobalConfig::from_source(&source));

    let out = formatter.format(Theme::Tech, Severity::Error, "disk full");
    assert_eq!(out, format!("\x1b[31m[svc] 🔥 disk full (v2){}", RESET));
  }

  #[test]
  fn formatting_is_deterministic() {
    let formatter = formatter_with_defaults();
    let first = formatter.format(Theme::Nature, Severity::Warn, "low memory");
    let second = formatter.format(Theme::Nature, Severity::Warn, "low memory");
    assert_eq!(first, second);
  }

  #[test]
  fn console_request_does_not_override_disabled_config() {
    let global = GlobalConfig::with_defaults();
    global.set_color_enabled(false);
    let formatter = formatter_with(global);

    let out = formatter.format_for_console(Theme::Classic, Severity::Info, "hello");
    assert_eq!(out, " ✅ hello");
    assert!(!out.contains('\x1b'));
  }

  #[test]
  fn console_request_colors_when_config_allows() {
    let formatter = formatter_with_defaults();
    let out = formatter.format_for_console(Theme::Classic, Severity::Info, "hello");
    assert!(out.starts_with("\x1b[32m"));
    assert!(out.ends_with(RESET));
  }

  #[test]
  fn file_entry_point_never_colors() {
    let formatter = formatter_with_defaults();
    let out = formatter.format_for_file(Theme::Classic, Severity::Error, "hello");
    assert_eq!(out, " ❌ hello");
  }

  #[test]
  fn auto_entry_point_follows_configuration() {
    let global = GlobalConfig::with_defaults();
    let formatter = formatter_with(global);

    let colored = formatter.format(Theme::Classic, Severity::Debug, "step");
    assert!(colored.contains('\x1b'));
  }

  #[test]
  fn instance_override_beats_global_for_auto_path() {
    let global = Arc::new(GlobalConfig::with_defaults());
    let config = InstanceConfig::new(Arc::clone(&global));
    config.set_color_enabled(false);
    let formatter = MessageFormatter::new(config);

    global.set_color_enabled(true);
    let out = formatter.format(Theme::Classic, Severity::Info, "quiet");
    assert_eq!(out, " ✅ quiet");
  }

  #[test]
  fn message_passes_through_verbatim() {
    let global = GlobalConfig::with_defaults();
    global.set_color_enabled(false);
    let formatter = formatter_with(global);

    let message = "line one\nline two {} {42}";
    let out = formatter.format(Theme::Minimal, Severity::Debug, message);
    assert_eq!(out, format!(" - {}", message));
  }

  #[test]
  fn empty_message_still_decorates() {
    let global = GlobalConfig::with_defaults();
    global.set_color_enabled(false);
    let formatter = formatter_with(global);

    let out = formatter.format(Theme::Classic, Severity::Success, "");
    assert_eq!(out, " 🎉 ");
  }

  #[test]
  fn unknown_label_decorates_with_space_glyph() {
    let global = GlobalConfig::with_defaults();
    global.set_color_enabled(false);
    let formatter = formatter_with(global);

    let out = formatter.format_label(Theme::Classic, "FATAL", "oh no");
    assert_eq!(out, " oh no");
  }

  #[test]
  fn unknown_label_with_color_uses_neutral_code() {
    let formatter = formatter_with_defaults();
    let out = formatter.format_label(Theme::Classic, "FATAL", "oh no");
    assert_eq!(out, format!("{} oh no{}", RESET, RESET));
  }

  #[test]
  fn prefix_and_suffix_skip_when_empty() {
    let global = GlobalConfig::with_defaults();
    global.set_color_enabled(false);
    let formatter = formatter_with(global);

    let out = formatter.format(Theme::Tech, Severity::Completed, "done");
    assert_eq!(out, " ⭐ done");
  }

  #[test]
  fn config_change_applies_to_next_call() {
    let global = Arc::new(GlobalConfig::with_defaults());
    global.set_color_enabled(false);
    let formatter = MessageFormatter::new(InstanceConfig::new(Arc::clone(&global)));

    let before = formatter.format(Theme::Classic, Severity::Info, "msg");
    global.set_custom_prefix("[late]");
    let after = formatter.format(Theme::Classic, Severity::Info, "msg");

    assert_eq!(before, " ✅ msg");
    assert_eq!(after, "[late] ✅ msg");
  }
}
