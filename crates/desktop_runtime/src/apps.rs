//! Application catalog: manifest-backed definitions plus the content factory for each app.

mod placeholders;

use std::{collections::BTreeSet, rc::Rc};

use desktop_app_contract::{AppContent, ApplicationId, ContentFactory};
use desktop_app_music::LofiPlayerContent;
use desktop_app_terminal::TerminalContent;
use serde::Deserialize;
use thiserror::Error;

use self::placeholders::SwapWidgetContent;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while assembling an [`AppCatalog`].
pub enum CatalogError {
    /// The generated catalog JSON could not be decoded.
    #[error("failed to decode app catalog: {0}")]
    Decode(String),
    /// An application id does not follow the dotted-namespace policy.
    #[error("{0}")]
    InvalidId(String),
    /// Two definitions share one application id.
    #[error("duplicate application id `{0}`")]
    DuplicateId(ApplicationId),
    /// A definition declares zero, negative, or non-finite base dimensions.
    #[error("application `{0}` must declare positive base dimensions")]
    InvalidBaseSize(ApplicationId),
    /// No content factory is registered for a manifest entry.
    #[error("no content registered for application `{0}`")]
    MissingContent(ApplicationId),
}

/// Read-only description of a launchable application.
#[derive(Debug, Clone)]
pub struct ApplicationDefinition {
    pub id: ApplicationId,
    pub title: String,
    pub icon_id: String,
    pub content: ContentFactory,
    pub base_width: f64,
    pub base_height: f64,
    pub fullscreen_capable: bool,
    pub show_in_dock: bool,
}

impl ApplicationDefinition {
    pub fn new(
        id: ApplicationId,
        title: impl Into<String>,
        content: ContentFactory,
        base_width: f64,
        base_height: f64,
    ) -> Self {
        Self {
            icon_id: id.as_str().rsplit('.').next().unwrap_or_default().to_string(),
            id,
            title: title.into(),
            content,
            base_width,
            base_height,
            fullscreen_capable: false,
            show_in_dock: true,
        }
    }

    pub fn create_content(&self) -> Rc<dyn AppContent> {
        (self.content)(self.id.clone())
    }
}

/// Desktop shortcut that opens an external page instead of a window.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DesktopLink {
    pub name: String,
    pub icon_id: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct AppManifest {
    app_id: String,
    title: String,
    icon_id: String,
    base_width: f64,
    base_height: f64,
    fullscreen_capable: bool,
    show_in_dock: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct CatalogManifest {
    apps: Vec<AppManifest>,
    links: Vec<DesktopLink>,
}

/// Ordered, validated set of application definitions supplied once at session start.
#[derive(Debug, Clone, Default)]
pub struct AppCatalog {
    apps: Vec<ApplicationDefinition>,
    links: Vec<DesktopLink>,
}

impl AppCatalog {
    /// Validates definitions: unique ids and positive, finite base dimensions.
    pub fn new(
        apps: Vec<ApplicationDefinition>,
        links: Vec<DesktopLink>,
    ) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for app in &apps {
            if !seen.insert(app.id.clone()) {
                return Err(CatalogError::DuplicateId(app.id.clone()));
            }
            let valid = |v: f64| v.is_finite() && v > 0.0;
            if !valid(app.base_width) || !valid(app.base_height) {
                return Err(CatalogError::InvalidBaseSize(app.id.clone()));
            }
        }
        Ok(Self { apps, links })
    }

    /// Catalog generated from `app_catalog.toml` at build time.
    pub fn builtin() -> Result<Self, CatalogError> {
        let manifest: CatalogManifest = serde_json::from_str(APP_CATALOG_JSON)
            .map_err(|err| CatalogError::Decode(err.to_string()))?;

        let mut apps = Vec::with_capacity(manifest.apps.len());
        for entry in manifest.apps {
            let id = ApplicationId::new(entry.app_id).map_err(CatalogError::InvalidId)?;
            let content =
                builtin_content(&id).ok_or_else(|| CatalogError::MissingContent(id.clone()))?;
            apps.push(ApplicationDefinition {
                id,
                title: entry.title,
                icon_id: entry.icon_id,
                content,
                base_width: entry.base_width,
                base_height: entry.base_height,
                fullscreen_capable: entry.fullscreen_capable,
                show_in_dock: entry.show_in_dock,
            });
        }

        Self::new(apps, manifest.links)
    }

    pub fn apps(&self) -> &[ApplicationDefinition] {
        &self.apps
    }

    pub fn dock_apps(&self) -> impl Iterator<Item = &ApplicationDefinition> {
        self.apps.iter().filter(|app| app.show_in_dock)
    }

    pub fn links(&self) -> &[DesktopLink] {
        &self.links
    }

    pub fn definition(&self, app_id: &ApplicationId) -> Option<&ApplicationDefinition> {
        self.apps.iter().find(|app| &app.id == app_id)
    }
}

fn builtin_content(app_id: &ApplicationId) -> Option<ContentFactory> {
    let factory: ContentFactory = match app_id.as_str() {
        "system.terminal" => TerminalContent::create,
        "system.music" => LofiPlayerContent::create,
        "system.browser" => SwapWidgetContent::create,
        "system.finder" => placeholders::finder_content,
        "system.settings" => placeholders::settings_content,
        _ => return None,
    };
    Some(factory)
}

/// Label used by icon-less renderers for an icon id.
pub fn icon_glyph(icon_id: &str) -> &'static str {
    match icon_id {
        "finder" => "\u{1F4C1}",
        "browser" => "\u{1F310}",
        "terminal" => "\u{2328}",
        "settings" => "\u{2699}",
        "music" => "\u{266B}",
        "x" => "\u{1D54F}",
        "telegram" => "\u{2708}",
        "chart" => "\u{1F4C8}",
        _ => "\u{25A1}",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::placeholders::PlaceholderContent;
    use super::*;

    fn placeholder(id: ApplicationId) -> Rc<dyn AppContent> {
        Rc::new(PlaceholderContent::new(id, "test"))
    }

    #[test]
    fn builtin_catalog_lists_dock_apps_in_manifest_order() {
        let catalog = AppCatalog::builtin().expect("builtin catalog");
        let ids: Vec<&str> = catalog.dock_apps().map(|app| app.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "system.finder",
                "system.browser",
                "system.terminal",
                "system.settings",
                "system.music",
            ]
        );

        let browser = catalog
            .definition(&ApplicationId::trusted("system.browser"))
            .expect("browser definition");
        assert!(browser.fullscreen_capable);
        let terminal = catalog
            .definition(&ApplicationId::trusted("system.terminal"))
            .expect("terminal definition");
        assert!(!terminal.fullscreen_capable);
        assert_eq!((terminal.base_width, terminal.base_height), (600.0, 400.0));
        let links: Vec<(&str, &str)> = catalog
            .links()
            .iter()
            .map(|link| (link.name.as_str(), link.url.as_str()))
            .collect();
        assert_eq!(
            links,
            vec![
                ("X", "https://x.com/babywen_CTO"),
                ("Telegram", "https://t.me/babywenportal"),
                ("DexScreener", "https://dexscreener.com"),
            ]
        );
    }

    #[test]
    fn every_builtin_icon_has_a_glyph() {
        let catalog = AppCatalog::builtin().expect("builtin catalog");
        let fallback = icon_glyph("");
        for icon_id in catalog
            .apps()
            .iter()
            .map(|app| app.icon_id.as_str())
            .chain(catalog.links().iter().map(|link| link.icon_id.as_str()))
        {
            assert_ne!(icon_glyph(icon_id), fallback, "no glyph for `{icon_id}`");
        }
    }

    #[test]
    fn builtin_content_is_created_per_window() {
        let catalog = AppCatalog::builtin().expect("builtin catalog");
        let terminal = catalog
            .definition(&ApplicationId::trusted("system.terminal"))
            .expect("terminal definition");
        let first = terminal.create_content();
        let second = terminal.create_content();
        assert!(!Rc::ptr_eq(&first, &second));
        assert_eq!(first.application_id(), &terminal.id);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let id = ApplicationId::trusted("test.app");
        let err = AppCatalog::new(
            vec![
                ApplicationDefinition::new(id.clone(), "One", placeholder, 100.0, 100.0),
                ApplicationDefinition::new(id.clone(), "Two", placeholder, 100.0, 100.0),
            ],
            Vec::new(),
        )
        .expect_err("duplicate id");
        assert_eq!(err, CatalogError::DuplicateId(id));
    }

    #[test]
    fn non_positive_base_size_is_rejected() {
        let id = ApplicationId::trusted("test.flat");
        let err = AppCatalog::new(
            vec![ApplicationDefinition::new(id.clone(), "Flat", placeholder, 100.0, 0.0)],
            Vec::new(),
        )
        .expect_err("zero height");
        assert_eq!(err, CatalogError::InvalidBaseSize(id));
    }
}
