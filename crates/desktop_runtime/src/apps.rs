//! Built-in application registry and per-app content rendering.
//!
//! The catalog is generated at build time from `app_catalog.toml` and parsed once when the shell
//! is constructed. Content dispatch is an exhaustive match over [`AppId`], so adding an app is a
//! compile error until it has a view.

mod placeholders;
mod settings;
mod terminal;

use std::collections::BTreeMap;

use leptos::*;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    i18n,
    model::{AppId, Locale, Point, Size, WindowRecord},
    window_manager::WindowStore,
};

pub use settings::SettingsApp;
pub use terminal::TerminalApp;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppIcon {
    pub glyph: String,
    /// CSS color of the icon tile.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AppDescriptor {
    pub id: AppId,
    pub icon: AppIcon,
    pub position: Point,
    pub size: Size,
    #[serde(default)]
    pub maximized: bool,
    #[serde(default)]
    pub open_at_boot: bool,
    pub show_in_dock: bool,
    pub show_on_desktop: bool,
}

impl AppDescriptor {
    fn fallback(id: AppId) -> Self {
        Self {
            id,
            icon: AppIcon {
                glyph: id.as_str().chars().take(1).collect::<String>().to_uppercase(),
                color: "#4b5563".to_string(),
            },
            position: Point::new(100, 100),
            size: Size::default(),
            maximized: false,
            open_at_boot: false,
            show_in_dock: true,
            show_on_desktop: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("app catalog is malformed: {0}")]
    Malformed(String),
    #[error("app catalog lists `{0}` more than once")]
    Duplicate(AppId),
    #[error("app catalog has no entry for `{0}`")]
    Missing(AppId),
    #[error("app catalog gives `{0}` a non-positive default size")]
    InvalidSize(AppId),
}

/// Closed registry of the built-in applications, one descriptor per [`AppId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppRegistry {
    apps: BTreeMap<AppId, AppDescriptor>,
}

impl AppRegistry {
    /// Parses the build-time catalog.
    ///
    /// # Errors
    ///
    /// See [`Self::from_json`].
    pub fn load() -> Result<Self, RegistryError> {
        Self::from_json(APP_CATALOG_JSON)
    }

    /// Parses and validates a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] when the JSON does not parse, an app is listed twice or not at
    /// all, or a default size is not positive.
    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let entries: Vec<AppDescriptor> =
            serde_json::from_str(raw).map_err(|err| RegistryError::Malformed(err.to_string()))?;
        let mut apps = BTreeMap::new();
        for entry in entries {
            if !entry.size.is_positive() {
                return Err(RegistryError::InvalidSize(entry.id));
            }
            let id = entry.id;
            if apps.insert(id, entry).is_some() {
                return Err(RegistryError::Duplicate(id));
            }
        }
        if let Some(missing) = AppId::ALL.into_iter().find(|id| !apps.contains_key(id)) {
            return Err(RegistryError::Missing(missing));
        }
        Ok(Self { apps })
    }

    /// Registry with generic geometry for every app, used when the catalog cannot be read.
    pub fn fallback() -> Self {
        Self {
            apps: AppId::ALL
                .into_iter()
                .map(|id| (id, AppDescriptor::fallback(id)))
                .collect(),
        }
    }

    pub fn descriptor(&self, id: AppId) -> Option<&AppDescriptor> {
        self.apps.get(&id)
    }

    pub fn apps(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.apps.values()
    }

    pub fn dock_apps(&self) -> Vec<&AppDescriptor> {
        self.apps().filter(|app| app.show_in_dock).collect()
    }

    pub fn desktop_apps(&self) -> Vec<&AppDescriptor> {
        self.apps().filter(|app| app.show_on_desktop).collect()
    }

    /// Closed window record carrying the catalog's default geometry.
    pub fn seed_record(&self, id: AppId, locale: Locale) -> WindowRecord {
        let descriptor = self
            .descriptor(id)
            .cloned()
            .unwrap_or_else(|| AppDescriptor::fallback(id));
        let mut record = WindowRecord::closed(
            id,
            i18n::app_title(id, locale),
            descriptor.position,
            descriptor.size,
        );
        record.is_maximized = descriptor.maximized;
        record
    }

    /// Window store with every app seeded closed, then the boot apps opened in catalog order.
    pub fn initial_store(&self, locale: Locale) -> WindowStore {
        let mut store = WindowStore::seeded(AppId::ALL.map(|id| self.seed_record(id, locale)));
        for app in self.apps().filter(|app| app.open_at_boot) {
            store.open(app.id);
        }
        store
    }
}

/// Content view for an application window or phone-shell screen.
pub fn render_app_contents(app_id: AppId) -> View {
    match app_id {
        AppId::Terminal => view! { <TerminalApp /> }.into_view(),
        AppId::Settings => view! { <SettingsApp /> }.into_view(),
        AppId::About => placeholders::about(),
        AppId::Youtube => placeholders::youtube(),
        AppId::Projects | AppId::DevStudio => placeholders::code_editor(app_id),
        AppId::Word | AppId::Excel | AppId::PowerPoint => placeholders::office(app_id),
        AppId::Files
        | AppId::Calculator
        | AppId::Editor
        | AppId::Android
        | AppId::Chess
        | AppId::Ludo
        | AppId::Uno
        | AppId::GameCenter
        | AppId::Odoo => placeholders::generic(app_id),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn built_in_catalog_is_complete() {
        let registry = AppRegistry::load().expect("catalog");
        for id in AppId::ALL {
            assert!(registry.descriptor(id).is_some(), "{id}");
        }
        let projects = registry.descriptor(AppId::Projects).unwrap();
        assert!(projects.maximized);
        let calculator = registry.descriptor(AppId::Calculator).unwrap();
        assert_eq!(calculator.size, Size::new(300, 450));
    }

    #[test]
    fn initial_store_opens_boot_apps_only() {
        let registry = AppRegistry::load().expect("catalog");
        let store = registry.initial_store(Locale::En);
        assert_eq!(store.active(), Some(AppId::About));
        assert_eq!(store.max_z(), 11);
        assert_eq!(store.open_ids().into_iter().collect::<Vec<_>>(), vec![AppId::About]);
        assert_eq!(store.record(AppId::Terminal).unwrap().title, "PowerShell");
        assert!(store.invariants_hold());
    }

    #[test]
    fn from_json_rejects_duplicates_and_gaps() {
        let one = r##"{"id":"about","icon":{"glyph":"A","color":"#000"},"position":{"x":0,"y":0},"size":{"width":10,"height":10},"show_in_dock":true,"show_on_desktop":true}"##;
        assert_eq!(
            AppRegistry::from_json(&format!("[{one},{one}]")),
            Err(RegistryError::Duplicate(AppId::About))
        );
        assert_eq!(
            AppRegistry::from_json(&format!("[{one}]")),
            Err(RegistryError::Missing(AppId::Terminal))
        );
        assert!(matches!(
            AppRegistry::from_json("{"),
            Err(RegistryError::Malformed(_))
        ));
    }

    #[test]
    fn from_json_rejects_non_positive_size() {
        let raw = r##"[{"id":"uno","icon":{"glyph":"U","color":"#000"},"position":{"x":0,"y":0},"size":{"width":0,"height":10},"show_in_dock":true,"show_on_desktop":true}]"##;
        assert_eq!(
            AppRegistry::from_json(raw),
            Err(RegistryError::InvalidSize(AppId::Uno))
        );
    }

    #[test]
    fn fallback_registry_covers_every_app() {
        let registry = AppRegistry::fallback();
        assert_eq!(registry.apps().count(), AppId::ALL.len());
        assert_eq!(
            registry.seed_record(AppId::Chess, Locale::En).size,
            Size::default()
        );
    }
}
