//! Reducer actions, side-effect intents, and transition routing for the desktop runtime.

use desktop_app_contract::{AppLifecycleEvent, ApplicationId, ContentHandle};

use crate::{
    model::Position,
    window_manager::{FullScreenTransition, OpenOutcome, WindowManager},
};

#[derive(Debug, Clone, PartialEq)]
/// Where a pointer press landed.
pub enum PointerTarget {
    /// A window's title bar (drag handle).
    TitleBar(ApplicationId),
    /// Anywhere else inside a window.
    WindowBody(ApplicationId),
    /// The desktop background, dock, or top bar.
    Desktop,
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`WindowManager::dispatch`].
pub enum DesktopAction {
    /// Launch an application from the dock or a desktop icon.
    Launch {
        /// Application to open or bring forward.
        app_id: ApplicationId,
    },
    /// Close a window via its title-bar button.
    Close {
        /// Window to close.
        window_id: ApplicationId,
    },
    /// Bring a window to the front.
    Focus {
        /// Window to focus.
        window_id: ApplicationId,
    },
    /// Minimize a window.
    Minimize {
        /// Window to minimize.
        window_id: ApplicationId,
    },
    /// Restore a minimized window.
    Unminimize {
        /// Window to restore.
        window_id: ApplicationId,
    },
    /// Enter or leave fullscreen.
    ToggleFullScreen {
        /// Window to toggle.
        window_id: ApplicationId,
    },
    /// Pointer or touch press.
    PointerDown {
        /// Element the press landed on.
        target: PointerTarget,
        /// Pointer position in viewport coordinates.
        pointer: Position,
    },
    /// Pointer or touch movement.
    PointerMove {
        /// Pointer position in viewport coordinates.
        pointer: Position,
    },
    /// Pointer or touch release anywhere.
    PointerUp,
    /// Host surface resize.
    ViewportResized {
        /// New viewport width.
        width: f64,
        /// New viewport height.
        height: f64,
    },
    /// Desktop link icon activation.
    OpenLink {
        /// External URL.
        url: String,
    },
    /// Periodic clock tick; never touches window state.
    ClockTick,
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`WindowManager::dispatch`] for the shell to execute.
pub enum RuntimeEffect {
    /// Release the content of a closed window.
    TeardownContent(ContentHandle),
    /// Notify observers about a window lifecycle transition.
    Lifecycle {
        /// Window the event belongs to.
        window_id: ApplicationId,
        /// Transition that occurred.
        event: AppLifecycleEvent,
    },
    /// Open an external URL in a new browsing context.
    OpenExternalUrl(String),
    /// Refresh the top-bar clock.
    RefreshClock,
}

fn lifecycle(window_id: &ApplicationId, event: AppLifecycleEvent) -> RuntimeEffect {
    RuntimeEffect::Lifecycle {
        window_id: window_id.clone(),
        event,
    }
}

impl WindowManager {
    /// Applies a [`DesktopAction`] and collects resulting side effects.
    ///
    /// This is the only entry point the shell uses to mutate the session. Actions that target
    /// missing windows produce no state change and no effects.
    pub fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        let mut effects = Vec::new();
        match action {
            DesktopAction::Launch { app_id } => match self.open(&app_id) {
                Some(OpenOutcome::Opened) => {
                    effects.push(lifecycle(&app_id, AppLifecycleEvent::Opened));
                    effects.push(lifecycle(&app_id, AppLifecycleEvent::Focused));
                }
                Some(OpenOutcome::Focused) => {
                    effects.push(lifecycle(&app_id, AppLifecycleEvent::Focused));
                }
                Some(OpenOutcome::Restored) => {
                    effects.push(lifecycle(&app_id, AppLifecycleEvent::Restored));
                }
                None => {}
            },
            DesktopAction::Close { window_id } => {
                if let Some(record) = self.close(&window_id) {
                    effects.push(lifecycle(&window_id, AppLifecycleEvent::Closed));
                    effects.push(RuntimeEffect::TeardownContent(record.content));
                }
            }
            DesktopAction::Focus { window_id } => {
                if self.focus(&window_id) {
                    effects.push(lifecycle(&window_id, AppLifecycleEvent::Focused));
                }
            }
            DesktopAction::Minimize { window_id } => {
                let was_fullscreen = self
                    .session()
                    .window(&window_id)
                    .map(|w| w.is_fullscreen)
                    .unwrap_or(false);
                if self.minimize(&window_id) {
                    if was_fullscreen {
                        effects.push(lifecycle(&window_id, AppLifecycleEvent::ExitedFullScreen));
                    }
                    effects.push(lifecycle(&window_id, AppLifecycleEvent::Minimized));
                }
            }
            DesktopAction::Unminimize { window_id } => {
                if self.unminimize(&window_id) {
                    effects.push(lifecycle(&window_id, AppLifecycleEvent::Restored));
                }
            }
            DesktopAction::ToggleFullScreen { window_id } => {
                match self.toggle_fullscreen(&window_id) {
                    Some(FullScreenTransition::Entered) => {
                        effects.push(lifecycle(&window_id, AppLifecycleEvent::EnteredFullScreen));
                    }
                    Some(FullScreenTransition::Exited) => {
                        effects.push(lifecycle(&window_id, AppLifecycleEvent::ExitedFullScreen));
                    }
                    None => {}
                }
            }
            DesktopAction::PointerDown { target, pointer } => match target {
                PointerTarget::TitleBar(window_id) => {
                    if self.press_title_bar(&window_id, pointer).focused {
                        effects.push(lifecycle(&window_id, AppLifecycleEvent::Focused));
                    }
                }
                PointerTarget::WindowBody(window_id) => {
                    if self.focus(&window_id) {
                        effects.push(lifecycle(&window_id, AppLifecycleEvent::Focused));
                    }
                }
                PointerTarget::Desktop => {}
            },
            DesktopAction::PointerMove { pointer } => {
                self.pointer_move(pointer);
            }
            DesktopAction::PointerUp => {
                self.pointer_release();
            }
            DesktopAction::ViewportResized { width, height } => {
                self.observe_viewport(width, height);
            }
            DesktopAction::OpenLink { url } => {
                effects.push(RuntimeEffect::OpenExternalUrl(url));
            }
            DesktopAction::ClockTick => {
                effects.push(RuntimeEffect::RefreshClock);
            }
        }
        effects
    }
}
