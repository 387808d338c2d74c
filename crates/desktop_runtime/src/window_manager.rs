//! Window registry: the single owner of the desktop session and every rule that mutates it.
//!
//! All operations are infallible. Commands that reference a window that is not open (UI
//! commands can race with an earlier close) degrade to no-ops and report `false`/`None`.

use desktop_app_contract::{ApplicationId, ContentHandle};

use crate::{
    apps::AppCatalog,
    config::DesktopConfig,
    drag::CompactDragPolicy,
    layout::LayoutEngine,
    model::{DesktopSession, Position, Size, Viewport, WindowRecord},
    placement::PlacementStrategy,
    viewport::ViewportMonitor,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new record was inserted.
    Opened,
    /// The window was already open and is now frontmost.
    Focused,
    /// The window was minimized and has been restored to the front.
    Restored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullScreenTransition {
    Entered,
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressOutcome {
    /// A new front rank was assigned by the press.
    pub focused: bool,
    /// The press started a drag.
    pub drag_started: bool,
}

pub struct WindowManager {
    session: DesktopSession,
    catalog: AppCatalog,
    layout: LayoutEngine,
    monitor: ViewportMonitor,
    placement: Box<dyn PlacementStrategy>,
    compact_drag: CompactDragPolicy,
}

impl WindowManager {
    pub fn new(catalog: AppCatalog, config: &DesktopConfig) -> Self {
        let monitor = ViewportMonitor::new(
            config.initial_viewport.width,
            config.initial_viewport.height,
            config.top_bar_height,
            config.compact_breakpoint,
        );
        Self {
            session: DesktopSession::new(monitor.current()),
            catalog,
            layout: config.layout,
            monitor,
            placement: config.placement.build(),
            compact_drag: config.drag.compact_policy,
        }
    }

    /// Replaces the placement strategy used for windows opened from now on.
    pub fn with_placement(mut self, placement: Box<dyn PlacementStrategy>) -> Self {
        self.placement = placement;
        self
    }

    pub fn session(&self) -> &DesktopSession {
        &self.session
    }

    pub fn viewport(&self) -> Viewport {
        self.session.viewport
    }

    pub fn is_open(&self, app_id: &ApplicationId) -> bool {
        self.session.is_open(app_id)
    }

    pub fn render_list(&self) -> Vec<&WindowRecord> {
        self.session.render_list()
    }

    pub fn minimized_windows(&self) -> Vec<&WindowRecord> {
        self.session.minimized_windows()
    }

    pub fn focused_window(&self) -> Option<&ApplicationId> {
        self.session.focused_window()
    }

    /// Launches `app_id`, or brings its existing window to the front.
    ///
    /// Returns `None` when the catalog has no such application.
    pub fn open(&mut self, app_id: &ApplicationId) -> Option<OpenOutcome> {
        if let Some(minimized) = self.session.window(app_id).map(|w| w.is_minimized) {
            return if minimized {
                self.unminimize(app_id);
                Some(OpenOutcome::Restored)
            } else {
                self.focus(app_id);
                Some(OpenOutcome::Focused)
            };
        }

        let Some(definition) = self.catalog.definition(app_id) else {
            tracing::warn!(app_id = %app_id, "launch ignored: application not in catalog");
            return None;
        };

        let viewport = self.session.viewport;
        let size = self
            .layout
            .compute_size(definition.base_width, definition.base_height, &viewport);
        let proposed = self
            .placement
            .place(size, &viewport, self.session.windows.len());
        let position = viewport.clamp_position(proposed, size);
        let z_rank = self.session.z_order.next_rank();

        let record = WindowRecord {
            id: definition.id.clone(),
            title: definition.title.clone(),
            icon_id: definition.icon_id.clone(),
            content: ContentHandle::new(definition.create_content()),
            z_rank,
            position,
            restore_position: None,
            size,
            base_size: Size::new(definition.base_width, definition.base_height),
            fullscreen_capable: definition.fullscreen_capable,
            is_minimized: false,
            is_fullscreen: false,
        };
        tracing::debug!(
            window_id = %record.id,
            z_rank,
            x = position.x,
            y = position.y,
            width = size.width,
            height = size.height,
            "opened window"
        );
        self.session.windows.push(record);
        Some(OpenOutcome::Opened)
    }

    /// Removes the window and returns its record so the caller can tear the content down.
    pub fn close(&mut self, app_id: &ApplicationId) -> Option<WindowRecord> {
        let index = self.session.windows.iter().position(|w| &w.id == app_id)?;
        self.session.drag.cancel_for(app_id);
        let record = self.session.windows.remove(index);
        tracing::debug!(window_id = %app_id, "closed window");
        Some(record)
    }

    /// Brings a visible window to the front. A window that already holds the highest rank keeps
    /// it.
    pub fn focus(&mut self, app_id: &ApplicationId) -> bool {
        let top_rank = self.session.top_rank();
        let z_order = &mut self.session.z_order;
        let Some(window) = self.session.windows.iter_mut().find(|w| &w.id == app_id) else {
            tracing::trace!(window_id = %app_id, "focus ignored: window not open");
            return false;
        };
        if window.is_minimized {
            return false;
        }
        if top_rank == Some(window.z_rank) {
            return false;
        }
        window.z_rank = z_order.next_rank();
        tracing::trace!(window_id = %app_id, z_rank = window.z_rank, "focused window");
        true
    }

    /// Hides the window without changing its rank. A fullscreen window leaves fullscreen first.
    pub fn minimize(&mut self, app_id: &ApplicationId) -> bool {
        let Some(window) = self.session.window(app_id) else {
            return false;
        };
        if window.is_minimized {
            return false;
        }
        if window.is_fullscreen {
            self.exit_fullscreen(app_id);
        }
        self.session.drag.cancel_for(app_id);
        if let Some(window) = self.session.window_mut(app_id) {
            window.is_minimized = true;
        }
        tracing::debug!(window_id = %app_id, "minimized window");
        true
    }

    /// Shows a minimized window again, in front of everything else.
    pub fn unminimize(&mut self, app_id: &ApplicationId) -> bool {
        let viewport = self.session.viewport;
        let z_order = &mut self.session.z_order;
        let Some(window) = self.session.windows.iter_mut().find(|w| &w.id == app_id) else {
            return false;
        };
        if !window.is_minimized {
            return false;
        }
        window.is_minimized = false;
        window.z_rank = z_order.next_rank();
        window.position = viewport.clamp_position(window.position, window.size);
        tracing::debug!(window_id = %app_id, z_rank = window.z_rank, "restored window");
        true
    }

    /// Enters or leaves fullscreen for fullscreen-capable windows; ignored for everything else.
    pub fn toggle_fullscreen(&mut self, app_id: &ApplicationId) -> Option<FullScreenTransition> {
        let window = self.session.window(app_id)?;
        if !window.fullscreen_capable {
            tracing::trace!(window_id = %app_id, "fullscreen ignored: not capable");
            return None;
        }
        if window.is_fullscreen {
            self.exit_fullscreen(app_id);
            Some(FullScreenTransition::Exited)
        } else {
            self.enter_fullscreen(app_id);
            Some(FullScreenTransition::Entered)
        }
    }

    fn enter_fullscreen(&mut self, app_id: &ApplicationId) {
        let viewport = self.session.viewport;
        let size = self.layout.fullscreen_size(&viewport);
        let top_rank = self.session.top_rank();
        self.session.drag.cancel_for(app_id);
        let z_order = &mut self.session.z_order;
        let Some(window) = self.session.windows.iter_mut().find(|w| &w.id == app_id) else {
            return;
        };
        window.restore_position = Some(window.position);
        window.position = viewport.workspace_origin();
        window.size = size;
        window.is_fullscreen = true;
        if window.is_minimized || top_rank != Some(window.z_rank) {
            window.z_rank = z_order.next_rank();
        }
        window.is_minimized = false;
        tracing::debug!(window_id = %app_id, "entered fullscreen");
    }

    fn exit_fullscreen(&mut self, app_id: &ApplicationId) {
        let viewport = self.session.viewport;
        let layout = self.layout;
        let Some(window) = self.session.window_mut(app_id) else {
            return;
        };
        let size = layout.compute_size(window.base_size.width, window.base_size.height, &viewport);
        let restore = window.restore_position.take().unwrap_or(window.position);
        window.size = size;
        window.position = viewport.clamp_position(restore, size);
        window.is_fullscreen = false;
        tracing::debug!(window_id = %app_id, "exited fullscreen");
    }

    /// Writes a clamped position. Ignored for fullscreen or unknown windows.
    pub fn move_window(&mut self, app_id: &ApplicationId, position: Position) -> bool {
        let viewport = self.session.viewport;
        let Some(window) = self.session.window_mut(app_id) else {
            return false;
        };
        if window.is_fullscreen {
            return false;
        }
        let clamped = viewport.clamp_position(position, window.size);
        if clamped == window.position {
            return false;
        }
        window.position = clamped;
        true
    }

    /// Applies a new viewport: responsive windows are resized and re-clamped, fullscreen windows
    /// are stretched to the new workspace.
    pub fn on_viewport_change(&mut self, viewport: Viewport) {
        self.monitor.set(viewport);
        self.session.viewport = viewport;
        let layout = self.layout;
        for window in &mut self.session.windows {
            if window.is_fullscreen {
                window.size = layout.fullscreen_size(&viewport);
                window.position = viewport.workspace_origin();
            } else {
                window.size =
                    layout.compute_size(window.base_size.width, window.base_size.height, &viewport);
                window.position = viewport.clamp_position(window.position, window.size);
            }
        }
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            device_class = viewport.device_class.token(),
            windows = self.session.windows.len(),
            "relaid windows for viewport"
        );
    }

    /// Feeds a host resize through the viewport monitor. Returns `true` when the layout changed.
    pub fn observe_viewport(&mut self, width: f64, height: f64) -> bool {
        match self.monitor.observe(width, height) {
            Some(viewport) => {
                self.on_viewport_change(viewport);
                true
            }
            None => false,
        }
    }

    /// Pointer press on a window's title bar. Always focuses; starts a drag when allowed.
    pub fn press_title_bar(&mut self, app_id: &ApplicationId, pointer: Position) -> PressOutcome {
        let focused = self.focus(app_id);
        let device_class = self.session.viewport.device_class;
        let Some(window) = self.session.window(app_id) else {
            return PressOutcome {
                focused,
                drag_started: false,
            };
        };
        let draggable = !window.is_fullscreen
            && !window.is_minimized
            && self.compact_drag.permits(device_class);
        if draggable {
            let origin = window.position;
            self.session.drag.begin(app_id.clone(), pointer, origin);
            tracing::trace!(window_id = %app_id, "drag started");
        }
        PressOutcome {
            focused,
            drag_started: draggable,
        }
    }

    /// Pointer movement; only meaningful while a drag is in progress.
    pub fn pointer_move(&mut self, pointer: Position) -> bool {
        match self.session.drag.target_for(pointer) {
            Some((window_id, target)) => self.move_window(&window_id, target),
            None => false,
        }
    }

    /// Pointer release anywhere ends the drag.
    pub fn pointer_release(&mut self) -> Option<ApplicationId> {
        let released = self.session.drag.release();
        if let Some(window_id) = &released {
            tracing::trace!(window_id = %window_id, "drag ended");
        }
        released
    }
}
