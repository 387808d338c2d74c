//! Desktop shell UI composition and interaction surfaces.

mod window;

use std::time::Duration;

use desktop_app_contract::ApplicationId;
use leptos::*;

use self::window::DesktopWindow;

use crate::{
    apps::icon_glyph,
    model::Position,
    reducer::{DesktopAction, PointerTarget},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Inner size of the host browser window, when one exists.
pub(crate) fn host_viewport_size() -> Option<(f64, f64)> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some((width, height))
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> Position {
    Position::new(f64::from(ev.client_x()), f64::from(ev.client_y()))
}

#[component]
/// Renders the desktop: top bar, link icons, the window layer, and the dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let session = runtime.session;

    let resize_listener = window_event_listener(ev::resize, move |_| {
        if let Some((width, height)) = host_viewport_size() {
            runtime.dispatch_action(DesktopAction::ViewportResized { width, height });
        }
    });
    on_cleanup(move || resize_listener.remove());

    match set_interval_with_handle(
        move || runtime.dispatch_action(DesktopAction::ClockTick),
        CLOCK_TICK,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("top bar clock disabled: {err:?}"),
    }

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if session.with_untracked(|s| s.drag.is_dragging()) {
            runtime.dispatch_action(DesktopAction::PointerMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if session.with_untracked(|s| s.drag.is_dragging()) {
            runtime.dispatch_action(DesktopAction::PointerUp);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            data-device-class=move || session.with(|s| s.viewport.device_class.token())
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <TopBar />
            <div
                class="desktop-backdrop"
                on:pointerdown=move |ev: web_sys::PointerEvent| {
                    runtime.dispatch_action(DesktopAction::PointerDown {
                        target: PointerTarget::Desktop,
                        pointer: pointer_from_pointer_event(&ev),
                    });
                }
            >
                <DesktopLinks />
            </div>
            <div class="desktop-window-layer">
                <For
                    each=move || {
                        session.with(|s| {
                            s.windows.iter().map(|w| w.id.clone()).collect::<Vec<_>>()
                        })
                    }
                    key=|window_id| window_id.clone()
                    let:window_id
                >
                    <DesktopWindow window_id=window_id />
                </For>
            </div>
            <Dock />
        </div>
    }
}

#[component]
fn TopBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let height = move || runtime.session.with(|s| s.viewport.top_bar_height);

    view! {
        <header class="desktop-top-bar" style=move || format!("height:{}px;", height())>
            <span class="desktop-top-bar-status" aria-hidden="true">
                "\u{1F50B} \u{1F4F6} \u{1F50D}"
            </span>
            <time class="desktop-clock">{move || runtime.clock.get()}</time>
        </header>
    }
}

#[component]
fn DesktopLinks() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let links = runtime.catalog.with_value(|catalog| catalog.links().to_vec());

    view! {
        <nav class="desktop-links" aria-label="Desktop links">
            {links
                .into_iter()
                .map(|link| {
                    let url = link.url.clone();
                    view! {
                        <button
                            class="desktop-link"
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::OpenLink { url: url.clone() });
                            }
                        >
                            <span class="desktop-link-icon" aria-hidden="true">
                                {icon_glyph(&link.icon_id)}
                            </span>
                            <span class="desktop-link-label">{link.name}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[component]
fn Dock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entries: Vec<(ApplicationId, String, String)> = runtime.catalog.with_value(|catalog| {
        catalog
            .dock_apps()
            .map(|app| (app.id.clone(), app.title.clone(), app.icon_id.clone()))
            .collect()
    });

    view! {
        <nav class="desktop-dock" aria-label="Dock">
            {entries
                .into_iter()
                .map(|(app_id, title, icon_id)| {
                    let running_id = app_id.clone();
                    let is_running = move || runtime.session.with(|s| s.is_open(&running_id));
                    view! {
                        <button
                            class="dock-item"
                            class:running=is_running
                            aria-label=title.clone()
                            title=title
                            on:click=move |_| {
                                runtime.dispatch_action(DesktopAction::Launch {
                                    app_id: app_id.clone(),
                                });
                            }
                        >
                            <span aria-hidden="true">{icon_glyph(&icon_id)}</span>
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
