//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns the long-lived [`WindowManager`], republishes its session as a reactive
//! snapshot, and queues reducer effects for [`crate::effect_executor`]. UI composition stays in
//! [`crate::components`].

use leptos::*;

use crate::{
    apps::AppCatalog,
    config::DesktopConfig,
    effect_executor,
    model::DesktopSession,
    reducer::{DesktopAction, RuntimeEffect},
    window_manager::WindowManager,
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Sole writer of the desktop session.
    pub manager: StoredValue<WindowManager>,
    /// Catalog snapshot used by the dock and desktop icons.
    pub catalog: StoredValue<AppCatalog>,
    /// Reactive copy of the session, republished only when a dispatch changed it.
    pub session: RwSignal<DesktopSession>,
    /// Top-bar clock label.
    pub clock: RwSignal<String>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn boot_config() -> DesktopConfig {
    let mut config = DesktopConfig::load_default().unwrap_or_else(|err| {
        logging::warn!("desktop config rejected, using defaults: {err}");
        DesktopConfig::default()
    });
    if let Some((width, height)) = crate::components::host_viewport_size() {
        config.initial_viewport.width = width;
        config.initial_viewport.height = height;
    }
    config
}

fn boot_catalog() -> AppCatalog {
    AppCatalog::builtin().unwrap_or_else(|err| {
        logging::warn!("app catalog rejected, desktop starts empty: {err}");
        AppCatalog::default()
    })
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(children: Children) -> impl IntoView {
    let catalog = boot_catalog();
    let manager = WindowManager::new(catalog.clone(), &boot_config());
    let session = create_rw_signal(manager.session().clone());
    let manager = store_value(manager);
    let catalog = store_value(catalog);
    let clock = create_rw_signal(effect_executor::clock_label());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let outcome = manager.try_update_value(|wm| {
            let new_effects = wm.dispatch(action);
            let changed = session.with_untracked(|current| current != wm.session());
            (new_effects, changed.then(|| wm.session().clone()))
        });

        let Some((new_effects, snapshot)) = outcome else {
            logging::warn!("desktop dispatch after runtime disposal");
            return;
        };
        if let Some(snapshot) = snapshot {
            session.set(snapshot);
        }
        if !new_effects.is_empty() {
            effects.update(|queue| queue.extend(new_effects));
        }
    });

    let runtime = DesktopRuntimeContext {
        manager,
        catalog,
        session,
        clock,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
