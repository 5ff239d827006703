//! Light/dark theme state machine for the page.

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

impl ThemeMode {
    /// String identifier used in CSS class names and debug output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether the dark class should be present on `<body>`.
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Boolean persisted under the `darkMode` storage key.
    #[must_use]
    pub const fn as_stored(self) -> bool {
        self.is_dark()
    }

    /// Mode corresponding to a stored `darkMode` boolean.
    #[must_use]
    pub const fn from_stored(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }
}

/// Resolve the initial theme: an explicit stored preference wins, otherwise
/// the system color-scheme preference, otherwise light. Absence of a stored
/// value is distinct from a stored `false`.
#[must_use]
pub const fn resolve_initial(stored: Option<bool>, system_dark: bool) -> ThemeMode {
    match stored {
        Some(dark) => ThemeMode::from_stored(dark),
        None => ThemeMode::from_stored(system_dark),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_to_str() {
        assert_eq!(ThemeMode::Light.as_str(), "light");
        assert_eq!(ThemeMode::Dark.as_str(), "dark");
    }

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn stored_round_trip() {
        assert_eq!(ThemeMode::from_stored(ThemeMode::Dark.as_stored()), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(ThemeMode::Light.as_stored()), ThemeMode::Light);
    }

    #[test]
    fn explicit_false_overrides_system_dark() {
        assert_eq!(resolve_initial(Some(false), true), ThemeMode::Light);
    }

    #[test]
    fn system_preference_fills_the_gap() {
        assert_eq!(resolve_initial(None, true), ThemeMode::Dark);
        assert_eq!(resolve_initial(None, false), ThemeMode::Light);
    }
}
