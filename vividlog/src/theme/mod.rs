mod __test__;

use crate::severity::Severity;

/// A named glyph theme for decorated log messages.
///
/// Themes are data, not behavior: the severity-to-glyph mapping lives in a
/// static table keyed by theme and severity. All themes are total over the
/// seven severities. Unknown theme names resolve to [`Theme::Classic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Theme {
  Classic,
  Nature,
  Tech,
  Gaming,
  Minimal,
  Colorful,
}

/// All themes, in table order.
pub const THEMES: [Theme; 6] = [
  Theme::Classic,
  Theme::Nature,
  Theme::Tech,
  Theme::Gaming,
  Theme::Minimal,
  Theme::Colorful,
];

// Rows by theme, columns by SEVERITIES order:
// TRACE, DEBUG, INFO, WARN, ERROR, SUCCESS, COMPLETED.
// Glyphs carry their surrounding padding as data.
static GLYPHS: [[&str; 7]; 6] = [
  [" 🔍 ", " 🐛 ", " ✅ ", " ⚠️ ", " ❌ ", " 🎉 ", " ✨ "],
  [" 🌱 ", " 🍃 ", " 🌸 ", " 🌰 ", " 🌋 ", " 🌺 ", " 🌈 "],
  [" 🔬 ", " ⚙️ ", " 💡 ", " ⚡ ", " 🔥 ", " 🚀 ", " ⭐ "],
  [" 🎯 ", " 🎮 ", " 🏆 ", " ⚔️ ", " 💀 ", " 🎊 ", " 👑 "],
  [" · ", " - ", " ✓ ", " ! ", " ✗ ", " ✓ ", " ✓ "],
  [" 🔮 ", " 🎨 ", " 💙 ", " 💛 ", " 💥 ", " 💚 ", " 💜 "],
];

/// Glyph returned for severities outside a theme's mapping.
const FALLBACK_GLYPH: &str = " ";

impl Theme {
  /// Lower-case theme name, e.g. `"classic"`.
  pub fn name(self) -> &'static str {
    match self {
      Theme::Classic => "classic",
      Theme::Nature => "nature",
      Theme::Tech => "tech",
      Theme::Gaming => "gaming",
      Theme::Minimal => "minimal",
      Theme::Colorful => "colorful",
    }
  }

  /// Resolves a theme by name, case-insensitively.
  ///
  /// Unknown names fall back to `Classic`; this never fails.
  pub fn from_name(name: &str) -> Theme {
    THEMES
      .iter()
      .copied()
      .find(|t| t.name().eq_ignore_ascii_case(name))
      .unwrap_or(Theme::Classic)
  }

  /// The glyph this theme maps the given severity to.
  pub fn glyph(self, severity: Severity) -> &'static str {
    GLYPHS[self.table_row()][severity.index()]
  }

  /// Label-keyed glyph lookup for paths where the level arrives as a string.
  ///
  /// Labels outside the known severity set yield a single-space glyph.
  pub fn glyph_for_label(self, label: &str) -> &'static str {
    match Severity::from_label(label) {
      Some(severity) => self.glyph(severity),
      None => FALLBACK_GLYPH,
    }
  }

  /// Stable index for storing a theme in an `AtomicU8`.
  pub(crate) fn index(self) -> u8 {
    self.table_row() as u8
  }

  /// Inverse of [`Theme::index`]. Out-of-range values resolve to `Classic`.
  pub(crate) fn from_index(index: u8) -> Theme {
    THEMES.get(index as usize).copied().unwrap_or(Theme::Classic)
  }

  fn table_row(self) -> usize {
    match self {
      Theme::Classic => 0,
      Theme::Nature => 1,
      Theme::Tech => 2,
      Theme::Gaming => 3,
      Theme::Minimal => 4,
      Theme::Colorful => 5,
    }
  }
}

impl Default for Theme {
  fn default() -> Self {
    Theme::Classic
  }
}

impl std::fmt::Display for Theme {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}
