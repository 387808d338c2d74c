use super::*;
use crate::model::WindowRecord;
use desktop_app_contract::{AppMountContext, ContentGeometry};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn stop_pointer_event(ev: &web_sys::PointerEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn window_style(win: &WindowRecord) -> String {
    let visibility = if win.is_minimized { "display:none;" } else { "" };
    format!(
        "left:{:.2}px;top:{:.2}px;width:{:.2}px;height:{:.2}px;z-index:{};{}",
        win.position.x, win.position.y, win.size.width, win.size.height, win.z_rank, visibility
    )
}

#[component]
pub(super) fn DesktopWindow(window_id: ApplicationId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let window_id = store_value(window_id);

    let record = create_memo(move |_| {
        window_id.with_value(|id| runtime.session.with(|s| s.window(id).cloned()))
    });
    let is_focused = move || {
        window_id.with_value(|id| runtime.session.with(|s| s.focused_window() == Some(id)))
    };
    let fullscreen =
        create_memo(move |_| record.with(|r| r.as_ref().is_some_and(|w| w.is_fullscreen)));
    let fullscreen_capable =
        move || record.with(|r| r.as_ref().is_some_and(|w| w.fullscreen_capable));
    let title = move || record.with(|r| r.as_ref().map(|w| w.title.clone()).unwrap_or_default());
    let icon = move || {
        record.with(|r| r.as_ref().map(|w| icon_glyph(&w.icon_id)).unwrap_or_default())
    };

    let focus_body = move |ev: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::PointerDown {
            target: PointerTarget::WindowBody(window_id.get_value()),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if ev.pointer_type() == "mouse" && ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        stop_pointer_event(&ev);
        runtime.dispatch_action(DesktopAction::PointerDown {
            target: PointerTarget::TitleBar(window_id.get_value()),
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let minimize = move |_| {
        runtime.dispatch_action(DesktopAction::Minimize {
            window_id: window_id.get_value(),
        });
    };
    let toggle_fullscreen = move |_| {
        runtime.dispatch_action(DesktopAction::ToggleFullScreen {
            window_id: window_id.get_value(),
        });
    };
    let close = move |_| {
        runtime.dispatch_action(DesktopAction::Close {
            window_id: window_id.get_value(),
        });
    };

    // Remount only when the fullscreen flag flips; moves and rank changes keep the body alive.
    let body = move || {
        let fullscreen = fullscreen.get();
        record.with_untracked(|r| {
            r.as_ref().map(|win| {
                win.content.mount(AppMountContext {
                    app_id: win.id.clone(),
                    geometry: ContentGeometry {
                        width: win.size.width,
                        height: win.size.height,
                        fullscreen,
                    },
                })
            })
        })
    };

    view! {
        <section
            class="desktop-window"
            class:focused=is_focused
            class:fullscreen=move || fullscreen.get()
            style=move || record.with(|r| r.as_ref().map(window_style).unwrap_or_default())
            on:pointerdown=focus_body
            role="dialog"
            aria-label=title
        >
            <header class="titlebar" on:pointerdown=begin_move>
                <div class="titlebar-title">
                    <span class="titlebar-app-icon" aria-hidden="true">{icon}</span>
                    <span>{title}</span>
                </div>
                <div class="titlebar-controls">
                    <button
                        aria-label="Minimize window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                        on:click=minimize
                    >
                        "\u{2212}"
                    </button>
                    <Show when=fullscreen_capable fallback=|| ()>
                        <button
                            aria-label=move || {
                                if fullscreen.get() { "Exit full screen" } else { "Enter full screen" }
                            }
                            on:pointerdown=move |ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                            on:click=toggle_fullscreen
                        >
                            "\u{2922}"
                        </button>
                    </Show>
                    <button
                        aria-label="Close window"
                        on:pointerdown=move |ev: web_sys::PointerEvent| stop_pointer_event(&ev)
                        on:click=close
                    >
                        "\u{2715}"
                    </button>
                </div>
            </header>
            <div class="window-body">{body}</div>
        </section>
    }
}
