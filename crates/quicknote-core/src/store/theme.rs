//! Persisted theme mode.

use crate::error::Result;
use crate::models::{ResolvedTheme, ThemeMode};
use crate::prefs::{Preferences, THEME_KEY};

/// Current theme mode backed by its own preferences store.
#[derive(Debug)]
pub struct ThemePreference<P: Preferences> {
    prefs: P,
    mode: ThemeMode,
}

impl<P: Preferences> ThemePreference<P> {
    /// Read the stored mode. Anything missing or unrecognised is `System`.
    pub fn load(prefs: P) -> Self {
        let mode = match prefs.get(THEME_KEY) {
            Ok(Some(value)) => parse_mode(&value),
            Ok(None) => ThemeMode::default(),
            Err(error) => {
                tracing::warn!("Failed to read theme mode, using system: {error}");
                ThemeMode::default()
            }
        };
        Self { prefs, mode }
    }

    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub const fn resolved(&self, system_is_dark: bool) -> ResolvedTheme {
        self.mode.resolve(system_is_dark)
    }

    /// Switch mode and persist it. The new mode stays active even if the
    /// write fails.
    pub fn set(&mut self, mode: ThemeMode) -> Result<()> {
        self.mode = mode;
        self.prefs.set(THEME_KEY, &mode.ordinal().to_string())?;
        tracing::debug!("Theme mode set to {mode}");
        Ok(())
    }

    pub const fn preferences(&self) -> &P {
        &self.prefs
    }

    pub fn into_preferences(self) -> P {
        self.prefs
    }
}

fn parse_mode(value: &str) -> ThemeMode {
    value
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(ThemeMode::from_ordinal)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::MemoryPreferences;

    fn load_raw(value: &str) -> ThemeMode {
        ThemePreference::load(MemoryPreferences::new().with_value(THEME_KEY, value)).mode()
    }

    #[test]
    fn absent_value_is_system() {
        assert_eq!(
            ThemePreference::load(MemoryPreferences::new()).mode(),
            ThemeMode::System
        );
    }

    #[test]
    fn stored_ordinals_are_read() {
        assert_eq!(load_raw("0"), ThemeMode::Light);
        assert_eq!(load_raw("1"), ThemeMode::Dark);
        assert_eq!(load_raw(" 2 "), ThemeMode::System);
    }

    #[test]
    fn out_of_range_or_garbage_is_system() {
        for value in ["3", "-1", "dark", "", "1.0"] {
            assert_eq!(load_raw(value), ThemeMode::System, "value: {value:?}");
        }
    }

    #[test]
    fn read_failure_is_system() {
        let mut prefs = MemoryPreferences::new().with_value(THEME_KEY, "1");
        prefs.set_simulate_read_error(true);
        assert_eq!(ThemePreference::load(prefs).mode(), ThemeMode::System);
    }

    #[test]
    fn set_round_trips_every_mode() {
        for mode in ThemeMode::ALL {
            let mut theme = ThemePreference::load(MemoryPreferences::new());
            theme.set(mode).unwrap();
            let reloaded = ThemePreference::load(theme.into_preferences());
            assert_eq!(reloaded.mode(), mode);
        }
    }

    #[test]
    fn failed_write_keeps_new_mode() {
        let mut prefs = MemoryPreferences::new();
        prefs.set_simulate_write_error(true);
        let mut theme = ThemePreference::load(prefs);
        assert!(theme.set(ThemeMode::Dark).is_err());
        assert_eq!(theme.mode(), ThemeMode::Dark);
        assert_eq!(theme.preferences().raw(THEME_KEY), None);
    }
}
