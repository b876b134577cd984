//! Preference persistence for the shell theme and text-direction flags.
//!
//! The store layout is a flat key-value map: the theme token under `theme`
//! and the RTL flag as a boolean-as-string under `rtl`. The dialog and
//! selection cores never touch this module; the host writes preferences in
//! response to runtime effects.

use platform_prefs::PrefsStore;

use crate::model::{ShellPrefs, ThemeMode};

/// Preference key for the color scheme token (`"light" | "dark"`).
pub const THEME_PREF_KEY: &str = "theme";
/// Preference key for the RTL flag (`"true" | "false"`).
pub const RTL_PREF_KEY: &str = "rtl";

/// Loads shell preferences, falling back to defaults for missing, corrupt,
/// or unreadable values.
pub async fn load_shell_prefs(store: &dyn PrefsStore) -> ShellPrefs {
    let theme = match store.load_pref(THEME_PREF_KEY).await {
        Ok(raw) => raw
            .as_deref()
            .and_then(ThemeMode::parse)
            .unwrap_or_default(),
        Err(err) => {
            leptos::logging::warn!("theme preference load failed: {err}");
            ThemeMode::default()
        }
    };

    let rtl = match store.load_pref(RTL_PREF_KEY).await {
        Ok(raw) => raw.as_deref() == Some("true"),
        Err(err) => {
            leptos::logging::warn!("rtl preference load failed: {err}");
            false
        }
    };

    ShellPrefs { theme, rtl }
}

/// Persists the theme token.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub async fn persist_theme(store: &dyn PrefsStore, theme: ThemeMode) -> Result<(), String> {
    store.save_pref(THEME_PREF_KEY, theme.token()).await
}

/// Persists the RTL flag.
///
/// # Errors
///
/// Returns an error when the store write fails.
pub async fn persist_direction(store: &dyn PrefsStore, rtl: bool) -> Result<(), String> {
    store
        .save_pref(RTL_PREF_KEY, if rtl { "true" } else { "false" })
        .await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_prefs::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn prefs_round_trip_through_flat_keys() {
        let store = MemoryPrefsStore::default();

        block_on(persist_theme(&store, ThemeMode::Dark)).expect("persist theme");
        block_on(persist_direction(&store, true)).expect("persist rtl");

        assert_eq!(store.raw(THEME_PREF_KEY), Some("dark".to_string()));
        assert_eq!(store.raw(RTL_PREF_KEY), Some("true".to_string()));

        let loaded = block_on(load_shell_prefs(&store));
        assert_eq!(
            loaded,
            ShellPrefs {
                theme: ThemeMode::Dark,
                rtl: true,
            }
        );
    }

    #[test]
    fn empty_store_loads_defaults() {
        let store = MemoryPrefsStore::default();
        let loaded = block_on(load_shell_prefs(&store));
        assert_eq!(loaded, ShellPrefs::default());
    }

    #[test]
    fn corrupt_values_fall_back_to_defaults() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref(THEME_PREF_KEY, "solarized")).expect("save");
        block_on(store.save_pref(RTL_PREF_KEY, "yes")).expect("save");

        let loaded = block_on(load_shell_prefs(&store));
        assert_eq!(loaded.theme, ThemeMode::Light);
        assert!(!loaded.rtl);
    }
}
