//! Built-in content for apps that have no dedicated crate.

use std::rc::Rc;

use desktop_app_contract::{AppContent, AppMountContext, ApplicationId};
use leptos::*;

const SWAP_WIDGET_URL: &str = "https://jup.ag/swap/SOL-BONK";

/// Static text body, used for apps that only show a label.
pub(super) struct PlaceholderContent {
    app_id: ApplicationId,
    label: &'static str,
}

impl PlaceholderContent {
    pub(super) fn new(app_id: ApplicationId, label: &'static str) -> Self {
        Self { app_id, label }
    }
}

impl AppContent for PlaceholderContent {
    fn application_id(&self) -> &ApplicationId {
        &self.app_id
    }

    fn mount(&self, _context: AppMountContext) -> View {
        let label = self.label;
        view! {
            <div class="app app-placeholder">
                <p>{label}</p>
            </div>
        }
        .into_view()
    }
}

pub(super) fn finder_content(app_id: ApplicationId) -> Rc<dyn AppContent> {
    Rc::new(PlaceholderContent::new(app_id, "File Explorer"))
}

pub(super) fn settings_content(app_id: ApplicationId) -> Rc<dyn AppContent> {
    Rc::new(PlaceholderContent::new(app_id, "System Preferences"))
}

/// Browser-like window embedding the hosted swap widget.
pub(super) struct SwapWidgetContent {
    app_id: ApplicationId,
}

impl SwapWidgetContent {
    pub(super) fn create(app_id: ApplicationId) -> Rc<dyn AppContent> {
        Rc::new(Self { app_id })
    }
}

impl AppContent for SwapWidgetContent {
    fn application_id(&self) -> &ApplicationId {
        &self.app_id
    }

    fn mount(&self, context: AppMountContext) -> View {
        let frame_class = if context.geometry.fullscreen {
            "app-swap-frame fullscreen"
        } else {
            "app-swap-frame"
        };
        view! {
            <div class="app app-swap">
                <iframe
                    class=frame_class
                    src=SWAP_WIDGET_URL
                    title="Swap"
                    referrerpolicy="no-referrer"
                    sandbox="allow-scripts allow-same-origin allow-popups allow-forms"
                />
            </div>
        }
        .into_view()
    }
}
