#[cfg(test)]
mod __test__ {

  use crate::severity::SEVERITIES;
  use crate::theme::{Theme, THEMES};

  #[test]
  fn from_name_is_case_insensitive() {
    assert_eq!(Theme::from_name("tech"), Theme::Tech);
    assert_eq!(Theme::from_name("TECH"), Theme::Tech);
    assert_eq!(Theme::from_name("Tech"), Theme::Tech);
    assert_eq!(Theme::from_name("gAmInG"), Theme::Gaming);
  }

  #[test]
  fn from_name_falls_back_to_classic() {
    assert_eq!(Theme::from_name("neon"), Theme::Classic);
    assert_eq!(Theme::from_name(""), Theme::Classic);
    assert_eq!(Theme::from_name("classic "), Theme::Classic);
  }

  #[test]
  fn every_theme_maps_every_severity_to_a_nonempty_glyph() {
    for theme in THEMES {
      for severity in SEVERITIES {
        let glyph = theme.glyph(severity);
        assert!(
          !glyph.is_empty(),
          "theme {} has empty glyph for {}",
          theme.name(),
          severity.as_str()
        );
      }
    }
  }

  #[test]
  fn classic_glyphs_match_expected_set() {
    use crate::severity::Severity;
    assert_eq!(Theme::Classic.glyph(Severity::Info), " ✅ ");
    assert_eq!(Theme::Classic.glyph(Severity::Error), " ❌ ");
    assert_eq!(Theme::Tech.glyph(Severity::Error), " 🔥 ");
    assert_eq!(Theme::Minimal.glyph(Severity::Warn), " ! ");
  }

  #[test]
  fn glyph_for_label_accepts_any_case() {
    use crate::severity::Severity;
    assert_eq!(
      Theme::Nature.glyph_for_label("warn"),
      Theme::Nature.glyph(Severity::Warn)
    );
    assert_eq!(
      Theme::Nature.glyph_for_label("WARN"),
      Theme::Nature.glyph(Severity::Warn)
    );
  }

  #[test]
  fn glyph_for_unknown_label_is_single_space() {
    for theme in THEMES {
      assert_eq!(theme.glyph_for_label("FATAL"), " ");
      assert_eq!(theme.glyph_for_label(""), " ");
    }
  }

  #[test]
  fn theme_names_round_trip() {
    for theme in THEMES {
      assert_eq!(Theme::from_name(theme.name()), theme);
    }
  }

  #[test]
  fn index_round_trips_and_defends_out_of_range() {
    for theme in THEMES {
      assert_eq!(Theme::from_index(theme.index()), theme);
    }
    assert_eq!(Theme::from_index(200), Theme::Classic);
  }

  #[test]
  fn default_theme_is_classic() {
    assert_eq!(Theme::default(), Theme::Classic);
  }
}
