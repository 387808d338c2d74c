use desktop_app_contract::{ApplicationId, ContentHandle};

use crate::{drag::DragController, z_order::ZOrderArbiter};

/// Smallest dimension any computed geometry may collapse to.
pub const MIN_DIMENSION: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset_from(self, origin: Position) -> Position {
        Position {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Floors both dimensions at [`MIN_DIMENSION`], mapping non-finite values to the floor too.
    pub fn at_least_min(self) -> Self {
        Self {
            width: floor_dimension(self.width),
            height: floor_dimension(self.height),
        }
    }
}

pub(crate) fn floor_dimension(value: f64) -> f64 {
    if value.is_finite() {
        value.max(MIN_DIMENSION)
    } else {
        MIN_DIMENSION
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceClass {
    Compact,
    Regular,
}

impl DeviceClass {
    pub fn token(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Regular => "regular",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub device_class: DeviceClass,
    pub top_bar_height: f64,
}

impl Viewport {
    /// Area available to windows: the viewport minus the top bar, floored at one pixel.
    pub fn workspace_size(&self) -> Size {
        Size::new(self.width, self.height - self.top_bar_height).at_least_min()
    }

    /// Top-left corner of the area below the top bar.
    pub fn workspace_origin(&self) -> Position {
        Position::new(0.0, self.top_bar_height.max(0.0))
    }

    /// Clamps `position` so a window of `size` stays inside the viewport below the top bar.
    ///
    /// On an axis where the window is larger than the available span, or the span itself is not a
    /// number, the coordinate pins to the span's start.
    pub fn clamp_position(&self, position: Position, size: Size) -> Position {
        let top = self.top_bar_height.max(0.0);
        let max_x = self.width - size.width;
        let max_y = self.height - size.height;
        Position {
            x: clamp_axis(position.x, 0.0, max_x),
            y: clamp_axis(position.y, top, max_y),
        }
    }
}

fn clamp_axis(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() || max.is_nan() || max <= min {
        return min;
    }
    value.clamp(min, max)
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    pub id: ApplicationId,
    pub title: String,
    pub icon_id: String,
    pub content: ContentHandle,
    pub z_rank: u64,
    pub position: Position,
    pub restore_position: Option<Position>,
    pub size: Size,
    pub base_size: Size,
    pub fullscreen_capable: bool,
    pub is_minimized: bool,
    pub is_fullscreen: bool,
}

/// The whole mutable desktop state. Window order is insertion order; stacking is `z_rank`.
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopSession {
    pub windows: Vec<WindowRecord>,
    pub z_order: ZOrderArbiter,
    pub viewport: Viewport,
    pub drag: DragController,
}

impl DesktopSession {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            windows: Vec::new(),
            z_order: ZOrderArbiter::default(),
            viewport,
            drag: DragController::default(),
        }
    }

    pub fn window(&self, app_id: &ApplicationId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == app_id)
    }

    pub(crate) fn window_mut(&mut self, app_id: &ApplicationId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|w| &w.id == app_id)
    }

    pub fn is_open(&self, app_id: &ApplicationId) -> bool {
        self.window(app_id).is_some()
    }

    /// Non-minimized windows from back to front.
    pub fn render_list(&self) -> Vec<&WindowRecord> {
        let mut visible: Vec<&WindowRecord> =
            self.windows.iter().filter(|w| !w.is_minimized).collect();
        visible.sort_by_key(|w| w.z_rank);
        visible
    }

    /// Minimized windows in insertion order.
    pub fn minimized_windows(&self) -> Vec<&WindowRecord> {
        self.windows.iter().filter(|w| w.is_minimized).collect()
    }

    /// The frontmost non-minimized window.
    pub fn focused_window(&self) -> Option<&ApplicationId> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized)
            .max_by_key(|w| w.z_rank)
            .map(|w| &w.id)
    }

    pub(crate) fn top_rank(&self) -> Option<u64> {
        self.windows.iter().map(|w| w.z_rank).max()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn viewport(width: f64, height: f64) -> Viewport {
        Viewport {
            width,
            height,
            device_class: DeviceClass::Regular,
            top_bar_height: 32.0,
        }
    }

    #[test]
    fn clamp_keeps_window_inside_viewport_below_top_bar() {
        let vp = viewport(1000.0, 800.0);
        let size = Size::new(600.0, 400.0);

        assert_eq!(
            vp.clamp_position(Position::new(-50.0, 0.0), size),
            Position::new(0.0, 32.0)
        );
        assert_eq!(
            vp.clamp_position(Position::new(900.0, 700.0), size),
            Position::new(400.0, 400.0)
        );
        assert_eq!(
            vp.clamp_position(Position::new(120.0, 90.0), size),
            Position::new(120.0, 90.0)
        );
    }

    #[test]
    fn oversize_window_pins_to_origin_and_top_bar() {
        let vp = viewport(300.0, 200.0);
        let clamped = vp.clamp_position(Position::new(80.0, 90.0), Size::new(400.0, 190.0));
        assert_eq!(clamped, Position::new(0.0, 32.0));
    }

    #[test]
    fn non_finite_coordinates_clamp_to_nearest_edge() {
        let vp = viewport(1000.0, 800.0);
        let size = Size::new(10.0, 10.0);
        assert_eq!(
            vp.clamp_position(Position::new(f64::NAN, f64::NAN), size),
            Position::new(0.0, 32.0)
        );
        assert_eq!(
            vp.clamp_position(Position::new(f64::INFINITY, f64::INFINITY), size),
            Position::new(990.0, 790.0)
        );
        assert_eq!(
            vp.clamp_position(Position::new(f64::NEG_INFINITY, f64::NEG_INFINITY), size),
            Position::new(0.0, 32.0)
        );
    }

    #[test]
    fn nan_viewport_pins_windows_to_start() {
        let vp = viewport(f64::NAN, f64::NAN);
        let clamped = vp.clamp_position(Position::new(120.0, 90.0), Size::new(10.0, 10.0));
        assert_eq!(clamped, Position::new(0.0, 32.0));
    }

    #[test]
    fn workspace_size_never_collapses_below_one() {
        let vp = Viewport {
            width: 0.0,
            height: 10.0,
            device_class: DeviceClass::Compact,
            top_bar_height: 32.0,
        };
        assert_eq!(vp.workspace_size(), Size::new(1.0, 1.0));
    }
}
