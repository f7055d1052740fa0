//! The one persisted value: the display name collected by the setup wizard.
//!
//! Its presence at boot is what skips onboarding on return visits.

use leptos::logging;
use platform_host::{load_pref_with, save_pref_with, PrefsStore};

pub const DISPLAY_NAME_KEY: &str = "hamza_os.display_name.v1";

/// Reads the saved display name. Store or decode failures are logged and read as "not saved",
/// which sends the visitor through setup again.
pub async fn load_display_name(prefs: &dyn PrefsStore) -> Option<String> {
    match load_pref_with::<_, String>(prefs, DISPLAY_NAME_KEY).await {
        Ok(name) => name.filter(|name| !name.trim().is_empty()),
        Err(err) => {
            logging::warn!("display name load failed: {err}");
            None
        }
    }
}

/// # Errors
///
/// Returns the store's error when the write fails.
pub async fn persist_display_name(prefs: &dyn PrefsStore, name: &str) -> Result<(), String> {
    save_pref_with(prefs, DISPLAY_NAME_KEY, &name).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::MemoryPrefsStore;

    use super::*;

    #[test]
    fn display_name_round_trips_as_json_string() {
        let prefs = MemoryPrefsStore::default();
        assert_eq!(block_on(load_display_name(&prefs)), None);

        block_on(persist_display_name(&prefs, "Hamza")).expect("save");
        assert_eq!(prefs.raw_entry(DISPLAY_NAME_KEY).as_deref(), Some("\"Hamza\""));
        assert_eq!(block_on(load_display_name(&prefs)), Some("Hamza".to_string()));
    }

    #[test]
    fn corrupt_or_blank_entries_read_as_missing() {
        let corrupt = MemoryPrefsStore::with_raw_entry(DISPLAY_NAME_KEY, "{not json");
        assert_eq!(block_on(load_display_name(&corrupt)), None);

        let blank = MemoryPrefsStore::with_raw_entry(DISPLAY_NAME_KEY, "\"  \"");
        assert_eq!(block_on(load_display_name(&blank)), None);
    }
}
