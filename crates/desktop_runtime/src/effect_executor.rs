//! Explicit runtime effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::{reducer::RuntimeEffect, runtime_context::DesktopRuntimeContext};

/// Installs the effect executor that drains reducer-emitted runtime effects in order.
pub fn install(runtime: DesktopRuntimeContext) {
    // Clear the queue before running so effects that dispatch again enqueue a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        for effect in queued {
            run_runtime_effect(runtime, effect);
        }
    });
}

fn run_runtime_effect(runtime: DesktopRuntimeContext, effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::TeardownContent(content) => content.teardown(),
        RuntimeEffect::Lifecycle { window_id, event } => {
            tracing::debug!(window_id = %window_id, event = event.token(), "window lifecycle");
        }
        RuntimeEffect::OpenExternalUrl(url) => open_external_url(&url),
        RuntimeEffect::RefreshClock => runtime.clock.set(clock_label()),
    }
}

#[cfg(target_arch = "wasm32")]
fn open_external_url(url: &str) {
    if let Err(err) = window().open_with_url_and_target(url, "_blank") {
        logging::warn!("failed to open {url}: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_external_url(url: &str) {
    logging::log!("external url requested outside the browser: {url}");
}

/// Local wall-clock time formatted by the host locale.
pub(crate) fn clock_label() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        String::from(js_sys::Date::new_0().to_locale_time_string("default"))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::from("--:--:--")
    }
}
