
use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

use crate::theme::Theme;

/// Key-value source file read once at first global-config access.
pub const CONFIG_FILE: &str = "vividlog.json";

pub const KEY_THEME: &str = "theme";
pub const KEY_COLOR_ENABLED: &str = "color.enabled";
pub const KEY_CUSTOM_PREFIX: &str = "custom.prefix";
pub const KEY_CUSTOM_SUFFIX: &str = "custom.suffix";

static GLOBAL: OnceLock<Arc<GlobalConfig>> = OnceLock::new();

/// Process-wide configuration layer.
///
/// Loaded once, lazily, from [`CONFIG_FILE`]; a missing or unreadable source
/// silently yields built-in defaults. Runtime setters are supported: each
/// field is independently atomic, so readers see either the old or the new
/// value of a field, with no cross-field consistency promised.
#[derive(Debug)]
pub struct GlobalConfig {
  theme: AtomicU8,
  color_enabled: AtomicBool,
  prefix: RwLock<String>,
  suffix: RwLock<String>,
}

impl GlobalConfig {
  /// The shared process-wide instance.
  ///
  /// The first call performs the one-time source read; concurrent first
  /// calls all observe the same fully-initialized instance.
  pub fn global() -> Arc<GlobalConfig> {
    GLOBAL
      .get_or_init(|| Arc::new(GlobalConfig::from_source(&read_source(CONFIG_FILE))))
      .clone()
  }

  /// An all-default instance. Tests build fresh instances with this instead
  /// of sharing process state.
  pub fn with_defaults() -> Self {
    Self::from_source(&HashMap::new())
  }

  /// Builds a config from a key-value source.
  ///
  /// Recognized keys: [`KEY_THEME`] (default `"CLASSIC"`),
  /// [`KEY_COLOR_ENABLED`] (default `true`), [`KEY_CUSTOM_PREFIX`] and
  /// [`KEY_CUSTOM_SUFFIX`] (default empty). Missing keys fall back to their
  /// defaults; this never fails.
  pub fn from_source(source: &HashMap<String, String>) -> Self {
    let theme = source
      .get(KEY_THEME)
      .map(|raw| Theme::from_name(raw))
      .unwrap_or(Theme::Classic);
    let color_enabled = source
      .get(KEY_COLOR_ENABLED)
      .map(|raw| parse_bool(raw))
      .unwrap_or(true);
    let prefix = source.get(KEY_CUSTOM_PREFIX).cloned().unwrap_or_default();
    let suffix = source.get(KEY_CUSTOM_SUFFIX).cloned().unwrap_or_default();

    Self {
      theme: AtomicU8::new(theme.index()),
      color_enabled: AtomicBool::new(color_enabled),
      prefix: RwLock::new(prefix),
      suffix: RwLock::new(suffix),
    }
  }

  pub fn default_theme(&self) -> Theme {
    Theme::from_index(self.theme.load(Ordering::Relaxed))
  }

  pub fn is_color_enabled(&self) -> bool {
    self.color_enabled.load(Ordering::Relaxed)
  }

  pub fn custom_prefix(&self) -> String {
    self.prefix.read().map(|p| p.clone()).unwrap_or_default()
  }

  pub fn custom_suffix(&self) -> String {
    self.suffix.read().map(|s| s.clone()).unwrap_or_default()
  }

  /// Whether decoration should apply colors.
  ///
  /// Currently identical to [`GlobalConfig::is_color_enabled`]; kept as its
  /// own decision point so additional signals (e.g. stream type detection)
  /// can feed in without changing the override contract.
  pub fn should_apply_colors(&self) -> bool {
    self.is_color_enabled()
  }

  pub fn set_default_theme(&self, theme: Theme) {
    self.theme.store(theme.index(), Ordering::Relaxed);
  }

  pub fn set_color_enabled(&self, enabled: bool) {
    self.color_enabled.store(enabled, Ordering::Relaxed);
  }

  pub fn set_custom_prefix(&self, prefix: impl Into<String>) {
    if let Ok(mut guard) = self.prefix.write() {
      *guard = prefix.into();
    }
  }

  pub fn set_custom_suffix(&self, suffix: impl Into<String>) {
    if let Ok(mut guard) = self.suffix.write() {
      *guard = suffix.into();
    }
  }
}

impl Default for GlobalConfig {
  fn default() -> Self {
    Self::with_defaults()
  }
}

/// Reads the key-value source file into a flat string map.
///
/// The file is a flat JSON object; string, boolean, and numeric values are
/// accepted and stringified. Any read or parse failure yields an empty map,
/// which in turn yields all-default configuration.
pub fn read_source(path: impl AsRef<Path>) -> HashMap<String, String> {
  let raw = match std::fs::read_to_string(path) {
    Ok(raw) => raw,
    Err(_) => return HashMap::new(),
  };
  let value: serde_json::Value = match serde_json::from_str(&raw) {
    Ok(value) => value,
    Err(_) => return HashMap::new(),
  };
  let object = match value.as_object() {
    Some(object) => object,
    None => return HashMap::new(),
  };

  let mut source = HashMap::with_capacity(object.len());
  for (key, value) in object {
    let rendered = match value {
      serde_json::Value::String(s) => s.clone(),
      serde_json::Value::Bool(b) => b.to_string(),
      serde_json::Value::Number(n) => n.to_string(),
      _ => continue,
    };
    source.insert(key.clone(), rendered);
  }
  source
}

/// Booleans parse by case-insensitive `"true"` literal match; anything else
/// is `false`.
pub(crate) fn parse_bool(raw: &str) -> bool {
  raw.eq_ignore_ascii_case("true")
}

const OVERRIDE_UNSET: u8 = 0;
const OVERRIDE_OFF: u8 = 1;
const OVERRIDE_ON: u8 = 2;

/// Per-instance configuration layer.
///
/// Wraps a shared [`GlobalConfig`] and shadows at most one field: the
/// color-enabled flag. All other reads delegate to the global layer's
/// current values. Clones share the same override state, so a logger handle
/// and its formatter observe the same configuration.
#[derive(Debug, Clone)]
pub struct InstanceConfig {
  inner: Arc<OverrideState>,
}

#[derive(Debug)]
struct OverrideState {
  global: Arc<GlobalConfig>,
  color_override: AtomicU8,
}

impl InstanceConfig {
  pub fn new(global: Arc<GlobalConfig>) -> Self {
    Self {
      inner: Arc::new(OverrideState {
        global,
        color_override: AtomicU8::new(OVERRIDE_UNSET),
      }),
    }
  }

  /// Sets the instance-level color override. Chainable.
  pub fn set_color_enabled(&self, enabled: bool) -> &Self {
    let state = if enabled { OVERRIDE_ON } else { OVERRIDE_OFF };
    self.inner.color_override.store(state, Ordering::Relaxed);
    self
  }

  /// Override if present, else the global layer's current value.
  pub fn is_color_enabled(&self) -> bool {
    match self.inner.color_override.load(Ordering::Relaxed) {
      OVERRIDE_ON => true,
      OVERRIDE_OFF => false,
      _ => self.inner.global.is_color_enabled(),
    }
  }

  pub fn should_apply_colors(&self) -> bool {
    self.is_color_enabled()
  }

  // Theme, prefix and suffix are never overridden per instance.

  pub fn default_theme(&self) -> Theme {
    self.inner.global.default_theme()
  }

  pub fn custom_prefix(&self) -> String {
    self.inner.global.custom_prefix()
  }

  pub fn custom_suffix(&self) -> String {
    self.inner.global.custom_suffix()
  }
}
